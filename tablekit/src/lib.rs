//! Interactive table enhancement: live text filtering with optional match
//! highlighting, and click-to-sort column ordering with type-aware value
//! parsing.
//!
//! [`TableEnhancer`] attaches to a [`tabledom::Table`] and does all of its
//! work synchronously inside the event handler that triggered it; there is no
//! background work and no shared state outside the enhancer instance.
//!
//! # Example
//!
//! ```ignore
//! use tabledom::{Event, Table};
//! use tablekit::{EnhancerOptions, TableEnhancer};
//!
//! let mut table = Table::new(["Symbol", "Price"]);
//! table.push_row(["AAPL", "1,234"]);
//! table.push_row(["MSFT", "2.5K"]);
//!
//! let options = EnhancerOptions {
//!     search_input: true,
//!     highlight_matches: true,
//! };
//! let mut enhancer = TableEnhancer::new(table, options)?;
//! enhancer.handle_event(&Event::HeaderClick { column: 1 });
//! ```

pub mod collate;
pub mod enhancer;
pub mod error;
pub mod widgets;

pub use enhancer::{
    EnhancerOptions, ParsedValue, SortDirection, TableEnhancer, compare_values, parse_value,
};
pub use error::EnhancerError;

pub mod prelude {
    pub use crate::collate::collate;
    pub use crate::enhancer::{
        EnhancerOptions, ParsedValue, SortDirection, TableEnhancer, compare_values, parse_value,
    };
    pub use crate::error::EnhancerError;
    pub use crate::widgets::{
        Clipboard, CopyOnClick, MemoryClipboard, MemoryThemeStore, SearchItem, SearchList,
        ThemeStore, ThemeToggle,
    };

    pub use tabledom::{Event, Key, Modifiers, MouseButton, SearchInput, Table, ThemeMode};
}
