//! Sort orchestration.

use std::cmp::Ordering;

use log::debug;
use serde::{Deserialize, Serialize};
use tabledom::{RowId, Table};

use super::parse::{ParsedValue, parse_value};
use crate::collate::collate;

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// Compare two parsed values.
///
/// A numeric pair compares by magnitude; any pairing that involves text
/// compares the values' string forms with [`collate`]. Columns are expected
/// to be homogeneous; mixed Numeric/Text columns order best-effort through
/// the text branch.
pub fn compare_values(a: &ParsedValue, b: &ParsedValue) -> Ordering {
    match (a, b) {
        (ParsedValue::Numeric(x), ParsedValue::Numeric(y)) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        _ => collate(&a.as_text(), &b.as_text()),
    }
}

/// Stable-sort the body by the parsed values of column `column`.
///
/// Hidden rows participate and keep their visibility flags; equal keys keep
/// their prior relative order, so re-sorting tied values never reshuffles.
pub(super) fn sort_rows(table: &mut Table, column: usize, direction: SortDirection) {
    let mut keyed: Vec<(RowId, ParsedValue)> = table
        .rows()
        .iter()
        .map(|row| {
            let text = row.cell(column).map(|cell| cell.text()).unwrap_or("");
            (row.id(), parse_value(text))
        })
        .collect();

    keyed.sort_by(|(_, a), (_, b)| {
        let ordering = compare_values(a, b);
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });

    let order: Vec<RowId> = keyed.into_iter().map(|(id, _)| id).collect();
    table.reorder(&order);
    debug!("sorted column {column} {direction:?}");
}
