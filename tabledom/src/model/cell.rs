use crate::text::display_width;

/// A run of display text, optionally emphasized.
///
/// Emphasis is the highlight marker: a filter pass wraps matched substrings
/// in emphasized spans, everything else stays plain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub emphasized: bool,
}

impl Span {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: false,
        }
    }

    pub fn emphasized(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: true,
        }
    }
}

/// A single table cell.
///
/// The cell's text is fixed at construction and is the source of truth for
/// filtering and sorting. The display spans are derived from it and can be
/// rewritten at any time (e.g. by a highlight pass) without losing the
/// original: a later pass always recomputes from `text()`, never from the
/// current display.
#[derive(Debug, Clone)]
pub struct Cell {
    text: String,
    display: Vec<Span>,
}

impl Cell {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let display = vec![Span::plain(text.clone())];
        Self { text, display }
    }

    /// The original cell text. Unaffected by display rewrites.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The current display spans.
    pub fn display(&self) -> &[Span] {
        &self.display
    }

    /// Replace the display spans. Callers derive the spans from `text()`.
    pub fn set_display(&mut self, spans: Vec<Span>) {
        self.display = spans;
    }

    /// Restore the plain, unhighlighted display.
    pub fn reset_display(&mut self) {
        self.display = vec![Span::plain(self.text.clone())];
    }

    /// The display text with markers stripped. Always equals `text()` when
    /// the display was derived correctly.
    pub fn display_text(&self) -> String {
        self.display.iter().map(|s| s.text.as_str()).collect()
    }

    /// Whether any span is currently emphasized.
    pub fn is_highlighted(&self) -> bool {
        self.display.iter().any(|s| s.emphasized)
    }

    /// Terminal display width of the original text.
    pub fn display_width(&self) -> usize {
        display_width(&self.text)
    }
}
