mod cell;
mod row;
mod table;

pub use cell::{Cell, Span};
pub use row::{Row, RowId};
pub use table::{HeaderCell, Table};
