use tabledom::{EditResult, Event, Key, Modifiers, SearchInput};

fn type_str(input: &mut SearchInput, s: &str) {
    for c in s.chars() {
        assert_eq!(
            input.handle_key(Key::Char(c), Modifiers::new()),
            EditResult::Changed
        );
    }
}

#[test]
fn test_typing_builds_value() {
    let mut input = SearchInput::default();
    type_str(&mut input, "abc");
    assert_eq!(input.value(), "abc");
    assert_eq!(input.cursor(), 3);
}

#[test]
fn test_change_event_carries_current_value() {
    let mut input = SearchInput::default();
    type_str(&mut input, "hi");
    assert_eq!(
        input.change_event(),
        Event::Input {
            value: "hi".to_string()
        }
    );
}

#[test]
fn test_backspace_and_delete() {
    let mut input = SearchInput::new("abc");
    assert_eq!(
        input.handle_key(Key::Backspace, Modifiers::new()),
        EditResult::Changed
    );
    assert_eq!(input.value(), "ab");

    input.handle_key(Key::Home, Modifiers::new());
    assert_eq!(
        input.handle_key(Key::Delete, Modifiers::new()),
        EditResult::Changed
    );
    assert_eq!(input.value(), "b");
}

#[test]
fn test_backspace_at_start_changes_nothing() {
    let mut input = SearchInput::new("x");
    input.handle_key(Key::Home, Modifiers::new());
    assert_eq!(
        input.handle_key(Key::Backspace, Modifiers::new()),
        EditResult::Handled
    );
    assert_eq!(input.value(), "x");
}

#[test]
fn test_insert_mid_value() {
    let mut input = SearchInput::new("ac");
    input.handle_key(Key::Left, Modifiers::new());
    input.handle_key(Key::Char('b'), Modifiers::new());
    assert_eq!(input.value(), "abc");
}

#[test]
fn test_multibyte_editing() {
    let mut input = SearchInput::default();
    type_str(&mut input, "é東x");
    input.handle_key(Key::Left, Modifiers::new());
    input.handle_key(Key::Backspace, Modifiers::new());
    assert_eq!(input.value(), "éx");
}

#[test]
fn test_enter_submits_without_changing_value() {
    let mut input = SearchInput::new("q");
    assert_eq!(
        input.handle_key(Key::Enter, Modifiers::new()),
        EditResult::Submitted
    );
    assert_eq!(input.value(), "q");
}

#[test]
fn test_ctrl_chords_are_ignored() {
    let mut input = SearchInput::new("q");
    assert_eq!(
        input.handle_key(Key::Char('a'), Modifiers::ctrl()),
        EditResult::Ignored
    );
    assert_eq!(input.value(), "q");
}

#[test]
fn test_set_value_moves_cursor_to_end() {
    let mut input = SearchInput::default();
    input.set_value("东京");
    assert_eq!(input.cursor(), 2);
}
