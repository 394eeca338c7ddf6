//! The table enhancement engine.
//!
//! [`TableEnhancer`] owns a table and wires two behaviors onto it: live text
//! filtering driven by a search input, and click-to-sort on every header
//! cell. Nothing happens until an event is routed through
//! [`TableEnhancer::handle_event`]; each pass runs to completion inside that
//! call.

mod filter;
mod parse;
mod sort;

pub use parse::{ParsedValue, parse_value};
pub use sort::{SortDirection, compare_values};

use std::collections::HashMap;

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use tabledom::{EditResult, Event, Key, Modifiers, MouseButton, SearchInput, Table};

use crate::error::EnhancerError;

/// Configuration for a [`TableEnhancer`].
///
/// Both options default to off: a bare enhancer only wires sorting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancerOptions {
    /// Wire a live search input over the body. Default: false.
    #[serde(default)]
    pub search_input: bool,
    /// Wrap matched substrings in emphasis markers on every filter pass.
    /// Requires `search_input`. Default: false.
    #[serde(default)]
    pub highlight_matches: bool,
}

/// Live filtering and click-to-sort for a [`Table`].
///
/// The enhancer captures the table's row set at construction; rows added or
/// removed afterward are out of scope. All state (the body, the search
/// input, the per-column direction memory) is exclusively owned by the
/// instance and only mutated from inside an event handler.
#[derive(Debug)]
pub struct TableEnhancer {
    table: Table,
    search: Option<SearchInput>,
    highlight: bool,
    /// Last applied direction per column index. Consulted only to decide the
    /// next click's direction; never persisted.
    directions: HashMap<usize, SortDirection>,
}

impl TableEnhancer {
    /// Bind an enhancer to `table`, validating `options` once.
    ///
    /// Every header cell is marked clickable as a sort trigger. The caller
    /// supplies a well-formed table; the one check made explicit is a header
    /// with no columns, since there would be nothing to wire.
    pub fn new(mut table: Table, options: EnhancerOptions) -> Result<Self, EnhancerError> {
        if table.column_count() == 0 {
            return Err(EnhancerError::EmptyHeader);
        }
        if options.highlight_matches && !options.search_input {
            return Err(EnhancerError::HighlightWithoutSearch);
        }

        for cell in table.header_mut() {
            cell.clickable = true;
        }

        debug!(
            "enhancer bound: {} columns, {} rows, search={}, highlight={}",
            table.column_count(),
            table.len(),
            options.search_input,
            options.highlight_matches
        );

        Ok(Self {
            table,
            search: options.search_input.then(SearchInput::default),
            highlight: options.highlight_matches,
            directions: HashMap::new(),
        })
    }

    /// The enhanced table, for reading order, visibility and display spans.
    pub fn table(&self) -> &Table {
        &self.table
    }

    /// The wired search input, when search was enabled.
    pub fn search(&self) -> Option<&SearchInput> {
        self.search.as_ref()
    }

    /// Last applied direction for a column, if it has been sorted.
    pub fn direction(&self, column: usize) -> Option<SortDirection> {
        self.directions.get(&column).copied()
    }

    /// Route one event through the enhancer.
    ///
    /// Keys edit the search input and re-filter on every change; clicks on
    /// the header row and explicit [`Event::HeaderClick`]s sort; an
    /// [`Event::Input`] sets the search value outright and re-filters. All
    /// work is synchronous: when this returns, the pass is complete.
    pub fn handle_event(&mut self, event: &Event) {
        match event {
            Event::Key { key, modifiers } => self.handle_key(*key, *modifiers),
            Event::Input { value } => self.set_query(value.clone()),
            Event::HeaderClick { column } => self.sort_column(*column),
            Event::Click {
                x,
                y: 0,
                button: MouseButton::Left,
            } => {
                if let Some(column) = self.column_at_x(*x) {
                    self.sort_column(column);
                }
            }
            Event::Click { .. } => {}
        }
    }

    /// Toggle-sort a column: first click ascending, every further click the
    /// opposite of the last. Other columns' memory is untouched.
    pub fn sort_column(&mut self, column: usize) {
        if column >= self.table.column_count() {
            warn!(
                "sort: column {column} out of range ({} columns)",
                self.table.column_count()
            );
            return;
        }

        let direction = match self.directions.get(&column) {
            Some(SortDirection::Ascending) => SortDirection::Descending,
            _ => SortDirection::Ascending,
        };
        self.directions.insert(column, direction);
        sort::sort_rows(&mut self.table, column, direction);
    }

    /// Set the search query directly and run a filter pass.
    pub fn set_query(&mut self, value: String) {
        let Some(search) = self.search.as_mut() else {
            return;
        };
        search.set_value(value);
        let query = search.value().to_string();
        filter::apply(&mut self.table, &query, self.highlight);
    }

    fn handle_key(&mut self, key: Key, modifiers: Modifiers) {
        let Some(search) = self.search.as_mut() else {
            return;
        };
        if search.handle_key(key, modifiers) == EditResult::Changed {
            let query = search.value().to_string();
            filter::apply(&mut self.table, &query, self.highlight);
        }
    }

    /// Map a click x-coordinate in the header row to a column index.
    ///
    /// Columns are laid out at their content width with a single separating
    /// space, which is how collaborators render the table from
    /// [`Table::column_widths`].
    fn column_at_x(&self, x: u16) -> Option<usize> {
        let x = x as usize;
        let mut left = 0usize;
        for (index, width) in self.table.column_widths().into_iter().enumerate() {
            if x >= left && x < left + width {
                return Some(index);
            }
            left += width + 1;
        }
        None
    }
}
