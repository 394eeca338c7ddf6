use tabledom::{Event, MouseButton, RowId, Table};
use tablekit::{EnhancerOptions, SortDirection, TableEnhancer};

fn enhancer_for(rows: &[&[&str]], headers: &[&str]) -> TableEnhancer {
    let mut table = Table::new(headers.iter().copied());
    for row in rows {
        table.push_row(row.iter().copied());
    }
    TableEnhancer::new(table, EnhancerOptions::default()).expect("valid options")
}

fn column_texts(e: &TableEnhancer, column: usize) -> Vec<String> {
    e.table()
        .rows()
        .iter()
        .map(|row| row.cell(column).map(|c| c.text().to_string()).unwrap_or_default())
        .collect()
}

// ============================================================================
// Direction toggling
// ============================================================================

#[test]
fn test_first_click_sorts_ascending() {
    let mut e = enhancer_for(&[&["3"], &["1"], &["2"]], &["N"]);
    e.handle_event(&Event::HeaderClick { column: 0 });
    assert_eq!(column_texts(&e, 0), vec!["1", "2", "3"]);
    assert_eq!(e.direction(0), Some(SortDirection::Ascending));
}

#[test]
fn test_second_click_reverses_distinct_keys() {
    let mut e = enhancer_for(&[&["3"], &["1"], &["2"]], &["N"]);
    e.handle_event(&Event::HeaderClick { column: 0 });
    e.handle_event(&Event::HeaderClick { column: 0 });
    assert_eq!(column_texts(&e, 0), vec!["3", "2", "1"]);
    assert_eq!(e.direction(0), Some(SortDirection::Descending));
}

#[test]
fn test_direction_memory_is_per_column() {
    let mut e = enhancer_for(
        &[&["2", "b"], &["1", "a"], &["3", "c"]],
        &["N", "L"],
    );
    e.handle_event(&Event::HeaderClick { column: 0 });
    e.handle_event(&Event::HeaderClick { column: 1 });
    // Column 0's memory is untouched by sorting column 1.
    assert_eq!(e.direction(0), Some(SortDirection::Ascending));
    assert_eq!(e.direction(1), Some(SortDirection::Ascending));

    // A return to column 0 toggles from its own last direction.
    e.handle_event(&Event::HeaderClick { column: 0 });
    assert_eq!(e.direction(0), Some(SortDirection::Descending));
    assert_eq!(column_texts(&e, 0), vec!["3", "2", "1"]);
}

// ============================================================================
// Comparison semantics
// ============================================================================

#[test]
fn test_numeric_sort_uses_magnitude_not_lexical_order() {
    let mut e = enhancer_for(&[&["10%"], &["5"], &["2M"]], &["Value"]);
    e.handle_event(&Event::HeaderClick { column: 0 });
    // 0.10 < 5 < 2_000_000
    assert_eq!(column_texts(&e, 0), vec!["10%", "5", "2M"]);
}

#[test]
fn test_text_sort_uses_collation() {
    let mut e = enhancer_for(&[&["banana"], &["Apple"], &["cherry"]], &["Fruit"]);
    e.handle_event(&Event::HeaderClick { column: 0 });
    assert_eq!(column_texts(&e, 0), vec!["Apple", "banana", "cherry"]);
}

#[test]
fn test_unparseable_values_fall_back_to_text_comparison() {
    let mut e = enhancer_for(&[&["N/A"], &["1,234"], &["beta"]], &["Mixed"]);
    e.handle_event(&Event::HeaderClick { column: 0 });
    // 1234 renders as "1234" in the text branch: "1234" < "BETA" < "N/A"
    // case-insensitively, so digits sort first.
    assert_eq!(column_texts(&e, 0), vec!["1,234", "beta", "N/A"]);
}

#[test]
fn test_thousands_and_suffix_values_interleave() {
    let mut e = enhancer_for(
        &[&["1.2K"], &["999"], &["1,100"], &["0.5K"]],
        &["Amount"],
    );
    e.handle_event(&Event::HeaderClick { column: 0 });
    assert_eq!(column_texts(&e, 0), vec!["0.5K", "999", "1,100", "1.2K"]);
}

// ============================================================================
// Stability
// ============================================================================

#[test]
fn test_tied_keys_preserve_prior_order() {
    let mut e = enhancer_for(
        &[&["5", "A"], &["5", "B"], &["5", "C"]],
        &["Score", "Tag"],
    );
    e.handle_event(&Event::HeaderClick { column: 0 });
    assert_eq!(column_texts(&e, 1), vec!["A", "B", "C"]);

    // Toggling to descending: every key ties, so the arrangement holds.
    e.handle_event(&Event::HeaderClick { column: 0 });
    assert_eq!(column_texts(&e, 1), vec!["A", "B", "C"]);

    e.handle_event(&Event::HeaderClick { column: 0 });
    assert_eq!(column_texts(&e, 1), vec!["A", "B", "C"]);
}

#[test]
fn test_row_identity_survives_sorting() {
    let mut e = enhancer_for(&[&["3"], &["1"]], &["N"]);
    let ids: Vec<RowId> = e.table().rows().iter().map(|r| r.id()).collect();
    e.handle_event(&Event::HeaderClick { column: 0 });
    assert_eq!(e.table().rows()[0].id(), ids[1]);
    assert_eq!(e.table().rows()[1].id(), ids[0]);
}

#[test]
fn test_sorting_never_rewrites_cell_text() {
    let mut e = enhancer_for(&[&["2.5K"], &["1,234"]], &["N"]);
    e.handle_event(&Event::HeaderClick { column: 0 });
    assert_eq!(column_texts(&e, 0), vec!["1,234", "2.5K"]);
}

// ============================================================================
// Orthogonality with filtering
// ============================================================================

#[test]
fn test_hidden_rows_participate_in_sorting() {
    let mut table = Table::new(["N"]);
    table.push_row(["3"]);
    table.push_row(["1"]);
    table.push_row(["2"]);
    let mut e = TableEnhancer::new(
        table,
        EnhancerOptions {
            search_input: true,
            highlight_matches: false,
        },
    )
    .expect("valid options");

    e.handle_event(&Event::Input {
        value: "1".to_string(),
    });
    e.handle_event(&Event::HeaderClick { column: 0 });

    // The full body is ordered, hidden rows in place with flags intact.
    assert_eq!(column_texts(&e, 0), vec!["1", "2", "3"]);
    let visible: Vec<bool> = e.table().rows().iter().map(|r| r.is_visible()).collect();
    assert_eq!(visible, vec![true, false, false]);
}

// ============================================================================
// Click mapping
// ============================================================================

#[test]
fn test_header_row_click_maps_to_column() {
    let mut e = enhancer_for(
        &[&["b", "2"], &["a", "1"]],
        &["Name", "N"],
    );
    // Column 0 spans x 0..4 ("Name"), column 1 starts at x 5.
    e.handle_event(&Event::Click {
        x: 5,
        y: 0,
        button: MouseButton::Left,
    });
    assert_eq!(e.direction(1), Some(SortDirection::Ascending));
    assert_eq!(column_texts(&e, 1), vec!["1", "2"]);
}

#[test]
fn test_body_clicks_do_not_sort() {
    let mut e = enhancer_for(&[&["b"], &["a"]], &["Name"]);
    e.handle_event(&Event::Click {
        x: 0,
        y: 1,
        button: MouseButton::Left,
    });
    assert_eq!(column_texts(&e, 0), vec!["b", "a"]);
}

#[test]
fn test_out_of_range_column_is_ignored() {
    let mut e = enhancer_for(&[&["b"], &["a"]], &["Name"]);
    e.handle_event(&Event::HeaderClick { column: 9 });
    assert_eq!(column_texts(&e, 0), vec!["b", "a"]);
    assert_eq!(e.direction(9), None);
}
