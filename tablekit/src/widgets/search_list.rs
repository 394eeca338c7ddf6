//! Incremental search box over a list.
//!
//! The generic sibling of the table filter: a search input over any list of
//! items, with visibility toggling, wrap-around keyboard navigation and
//! Enter-to-select. The list is captured at construction, like the table
//! enhancer's row snapshot.

use log::debug;
use tabledom::text::truncate_to_width;
use tabledom::{EditResult, Key, Modifiers, SearchInput};

/// An item a [`SearchList`] can match and display.
pub trait SearchItem {
    /// The label shown for the item.
    fn label(&self) -> String;

    /// The text the query is matched against. Defaults to the label;
    /// override to fold in additional searchable text (titles, aliases).
    fn search_text(&self) -> String {
        self.label()
    }
}

impl SearchItem for String {
    fn label(&self) -> String {
        self.clone()
    }
}

impl SearchItem for &str {
    fn label(&self) -> String {
        (*self).to_string()
    }
}

/// A search input over a fixed list of items.
#[derive(Debug)]
pub struct SearchList<T: SearchItem> {
    input: SearchInput,
    items: Vec<T>,
    visible: Vec<bool>,
    /// Indices of matching items, in list order.
    matches: Vec<usize>,
    /// Position within `matches` of the active item.
    active: Option<usize>,
}

impl<T: SearchItem> SearchList<T> {
    pub fn new(items: Vec<T>) -> Self {
        let matches = (0..items.len()).collect();
        let visible = vec![true; items.len()];
        Self {
            input: SearchInput::default(),
            items,
            visible,
            matches,
            active: None,
        }
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The current query.
    pub fn query(&self) -> &str {
        self.input.value()
    }

    /// Whether the item at `index` matches the current query.
    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.get(index).copied().unwrap_or(false)
    }

    /// Indices of matching items, in list order.
    pub fn matches(&self) -> &[usize] {
        &self.matches
    }

    /// Index of the active (keyboard-highlighted) item.
    pub fn active(&self) -> Option<usize> {
        self.active.map(|pos| self.matches[pos])
    }

    /// Set the query directly and re-filter.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.input.set_value(query);
        self.refilter();
    }

    /// Route a key through the widget.
    ///
    /// Typing edits the query and re-filters; Up/Down move the active item
    /// with wrap-around; Enter returns the selected item's index.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> Option<usize> {
        match key {
            Key::Down if !self.matches.is_empty() => {
                self.active = Some(match self.active {
                    Some(pos) => (pos + 1) % self.matches.len(),
                    None => 0,
                });
                None
            }
            Key::Up if !self.matches.is_empty() => {
                self.active = Some(match self.active {
                    Some(pos) => (pos + self.matches.len() - 1) % self.matches.len(),
                    None => self.matches.len() - 1,
                });
                None
            }
            Key::Enter => self.active(),
            _ => {
                if self.input.handle_key(key, modifiers) == EditResult::Changed {
                    self.refilter();
                }
                None
            }
        }
    }

    /// Display label for an item, truncated to `width` terminal columns.
    pub fn display_label(&self, index: usize, width: usize) -> Option<String> {
        self.items
            .get(index)
            .map(|item| truncate_to_width(&item.label(), width))
    }

    fn refilter(&mut self) {
        let query = self.input.value().trim().to_lowercase();
        self.matches.clear();
        self.active = None;

        for (index, item) in self.items.iter().enumerate() {
            let matched = item.search_text().to_lowercase().contains(&query);
            self.visible[index] = matched;
            if matched {
                self.matches.push(index);
            }
        }

        debug!(
            "search {:?}: {}/{} items match",
            query,
            self.matches.len(),
            self.items.len()
        );
    }
}
