//! String ordering for non-numeric sort keys.

use std::cmp::Ordering;

/// Compare two strings the way a user expects a column to read: primary pass
/// over case-folded characters, raw strings as the tiebreak so the ordering
/// stays total and deterministic on case-only differences.
///
/// This stands in for full locale collation without a locale database; the
/// comparator is the single swap point if one is ever needed.
pub fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    match folded {
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}
