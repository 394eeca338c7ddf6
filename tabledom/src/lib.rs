pub mod event;
pub mod input;
pub mod model;
pub mod text;
pub mod theme;

pub use event::{Event, Key, Modifiers, MouseButton};
pub use input::{EditResult, SearchInput};
pub use model::{Cell, HeaderCell, Row, RowId, Span, Table};
pub use theme::{TableTheme, Theme, ThemeMode};
