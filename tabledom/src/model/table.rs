use std::collections::HashMap;

use log::warn;

use super::{Cell, Row, RowId};
use crate::text::display_width;

/// A column header cell.
#[derive(Debug, Clone)]
pub struct HeaderCell {
    /// Header label text.
    pub label: String,
    /// Whether the cell responds to clicks (set when a sort trigger is
    /// wired to the column).
    pub clickable: bool,
}

impl HeaderCell {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            clickable: false,
        }
    }
}

/// An in-memory table: a header region and an ordered, mutable body.
///
/// The body's display order is mutable through [`Table::reorder`]; each row
/// carries its own visibility flag. Cell text is readable and its display
/// form rewritable, which is everything the enhancement layer needs from the
/// rendered structure.
#[derive(Debug, Clone, Default)]
pub struct Table {
    header: Vec<HeaderCell>,
    rows: Vec<Row>,
}

impl Table {
    /// Create a table with one header cell per column.
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: headers.into_iter().map(HeaderCell::new).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row from raw cell texts and return its id.
    ///
    /// The cell count must equal the header's column count; mismatched arity
    /// is a caller contract violation.
    pub fn push_row<I, S>(&mut self, texts: I) -> RowId
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let cells: Vec<Cell> = texts.into_iter().map(Cell::new).collect();
        debug_assert_eq!(
            cells.len(),
            self.header.len(),
            "row arity must match header column count"
        );
        let row = Row::new(cells);
        let id = row.id();
        self.rows.push(row);
        id
    }

    pub fn column_count(&self) -> usize {
        self.header.len()
    }

    pub fn header(&self) -> &[HeaderCell] {
        &self.header
    }

    pub fn header_mut(&mut self) -> &mut [HeaderCell] {
        &mut self.header
    }

    /// Number of rows in the body, hidden rows included.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows in current display order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn rows_mut(&mut self) -> &mut [Row] {
        &mut self.rows
    }

    /// Find a row by id.
    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.rows.iter().find(|row| row.id() == id)
    }

    /// Rows currently visible, in display order.
    pub fn visible_rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter().filter(|row| row.is_visible())
    }

    /// Physically reorder the body to match `order`.
    ///
    /// Rows not named in `order` keep their relative order after the named
    /// ones; ids that don't resolve to a row are skipped. Rows are moved,
    /// never rebuilt, so ids and visibility flags survive.
    pub fn reorder(&mut self, order: &[RowId]) {
        let mut position: HashMap<RowId, usize> = HashMap::with_capacity(order.len());
        for (index, id) in order.iter().enumerate() {
            position.insert(*id, index);
        }

        let unknown = order
            .iter()
            .filter(|id| self.rows.iter().all(|row| row.id() != **id))
            .count();
        if unknown > 0 {
            warn!("reorder: {unknown} id(s) do not name a row, skipping them");
        }

        // Stable: unnamed rows compare equal and keep their relative order.
        self.rows
            .sort_by_key(|row| position.get(&row.id()).copied().unwrap_or(usize::MAX));
    }

    /// Maximum display width per column across the header and all rows.
    ///
    /// Collaborators use this to size columns; hidden rows count so widths
    /// stay stable while filtering.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .header
            .iter()
            .map(|cell| display_width(&cell.label))
            .collect();
        for row in &self.rows {
            for (index, cell) in row.cells().iter().enumerate() {
                if let Some(width) = widths.get_mut(index) {
                    *width = (*width).max(cell.display_width());
                }
            }
        }
        widths
    }
}
