//! Enhancer error types.

use thiserror::Error;

/// Errors surfaced when constructing a [`TableEnhancer`](crate::TableEnhancer).
///
/// Construction is the only fallible step; once wired, filtering and sorting
/// never fail: unparseable values fall back to text comparison and malformed
/// queries match everything.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnhancerError {
    /// `highlight_matches` was requested without a search input to derive
    /// queries from.
    #[error("highlight_matches requires search_input")]
    HighlightWithoutSearch,
    /// The table has no header cells to wire sort triggers to.
    #[error("table has no header columns")]
    EmptyHeader,
}
