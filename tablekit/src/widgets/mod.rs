//! Companion widgets: incremental search over a list, click-to-copy wiring,
//! and the light/dark theme toggle.

mod copy_click;
mod search_list;
mod theme_toggle;

pub use copy_click::{Clipboard, ClipboardError, CopyOnClick, MemoryClipboard};
pub use search_list::{SearchItem, SearchList};
pub use theme_toggle::{MemoryThemeStore, ThemeStore, ThemeStoreError, ThemeToggle};
