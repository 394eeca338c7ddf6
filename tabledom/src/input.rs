use crate::event::{Event, Key, Modifiers};

/// Result of routing a key through a [`SearchInput`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditResult {
    /// The value changed; listeners should re-read it.
    Changed,
    /// Enter was pressed.
    Submitted,
    /// Key was handled but the value didn't change (cursor movement).
    Handled,
    /// Key was not handled, should be passed through.
    Ignored,
}

/// A search input: an editable value with cursor state.
///
/// Every edit that changes the value counts as a change event, which is what
/// drives live filtering; there is no debouncing or submit step.
#[derive(Debug, Clone, Default)]
pub struct SearchInput {
    text: String,
    /// Cursor position in characters.
    cursor: usize,
}

impl SearchInput {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// The current value.
    pub fn value(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the value, placing the cursor at the end.
    pub fn set_value(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.text.chars().count();
    }

    /// The change event carrying the current value.
    pub fn change_event(&self) -> Event {
        Event::Input {
            value: self.text.clone(),
        }
    }

    /// Handle a key press for editing.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> EditResult {
        match key {
            Key::Char(c) if modifiers.none() || (modifiers.shift && !modifiers.ctrl) => {
                self.insert_char(c);
                EditResult::Changed
            }

            Key::Backspace if modifiers.none() => {
                if self.delete_back() {
                    EditResult::Changed
                } else {
                    EditResult::Handled
                }
            }

            Key::Delete if modifiers.none() => {
                if self.delete_forward() {
                    EditResult::Changed
                } else {
                    EditResult::Handled
                }
            }

            Key::Left if !modifiers.ctrl => {
                self.cursor = self.cursor.saturating_sub(1);
                EditResult::Handled
            }

            Key::Right if !modifiers.ctrl => {
                self.cursor = (self.cursor + 1).min(self.text.chars().count());
                EditResult::Handled
            }

            Key::Home => {
                self.cursor = 0;
                EditResult::Handled
            }

            Key::End => {
                self.cursor = self.text.chars().count();
                EditResult::Handled
            }

            Key::Enter => EditResult::Submitted,

            _ => EditResult::Ignored,
        }
    }

    fn insert_char(&mut self, c: char) {
        let byte_pos = char_to_byte_index(&self.text, self.cursor);
        self.text.insert(byte_pos, c);
        self.cursor += 1;
    }

    /// Delete the character before the cursor. Returns true if text changed.
    fn delete_back(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let start = char_to_byte_index(&self.text, self.cursor - 1);
        let end = char_to_byte_index(&self.text, self.cursor);
        self.text.replace_range(start..end, "");
        self.cursor -= 1;
        true
    }

    /// Delete the character at the cursor. Returns true if text changed.
    fn delete_forward(&mut self) -> bool {
        if self.cursor >= self.text.chars().count() {
            return false;
        }
        let start = char_to_byte_index(&self.text, self.cursor);
        let end = char_to_byte_index(&self.text, self.cursor + 1);
        self.text.replace_range(start..end, "");
        true
    }
}

/// Convert character index to byte index in a string.
fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
