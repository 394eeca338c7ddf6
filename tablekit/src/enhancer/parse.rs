//! Sort-key derivation from raw cell text.
//!
//! Dashboards render numbers with display sugar: thousands separators,
//! percent signs, magnitude suffixes, typographic minus signs. Sorting has to
//! operate on the underlying magnitude, so cell text is normalized and parsed
//! before comparison; anything outside the numeric grammar stays text and is
//! compared lexically.

use std::sync::OnceLock;

use regex::Regex;

/// A cell's text interpreted as a sort key.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedValue {
    /// Numeric magnitude after separator, percent and suffix normalization.
    Numeric(f64),
    /// Cleaned but unparsed text.
    Text(String),
}

impl ParsedValue {
    pub fn is_numeric(&self) -> bool {
        matches!(self, ParsedValue::Numeric(_))
    }

    /// The string form used when a comparison involves text.
    pub fn as_text(&self) -> String {
        match self {
            ParsedValue::Numeric(n) => format!("{n}"),
            ParsedValue::Text(s) => s.clone(),
        }
    }
}

/// Optional sign, digits with at most one decimal point, optional magnitude
/// suffix. Matched after normalization (upper-cased, separators stripped,
/// percent removed, minus variants folded).
fn grammar() -> &'static Regex {
    static GRAMMAR: OnceLock<Regex> = OnceLock::new();
    GRAMMAR.get_or_init(|| {
        Regex::new(r"^(-?(?:\d+(?:\.\d+)?|\.\d+))([KMBT])?$").expect("Invalid grammar pattern")
    })
}

/// Derive a [`ParsedValue`] from raw cell text.
///
/// `"1,234"` → 1234, `"45%"` → 0.45, `"2.5K"` → 2500, `"−3M"` (Unicode
/// minus) → -3e6. Text that doesn't fit the grammar is returned as
/// [`ParsedValue::Text`], never an error.
pub fn parse_value(raw: &str) -> ParsedValue {
    let mut cleaned = raw.replace(',', "").trim().to_uppercase();

    // Remove a trailing percent sign and note it for later division.
    let is_percent = cleaned.ends_with('%');
    if is_percent {
        cleaned.pop();
    }

    // Fold minus sign, en dash and em dash to hyphen-minus so negative
    // numbers parse uniformly.
    let cleaned = cleaned.replace(['\u{2212}', '\u{2013}', '\u{2014}'], "-");

    let Some(caps) = grammar().captures(&cleaned) else {
        return ParsedValue::Text(cleaned);
    };
    let Ok(number) = caps[1].parse::<f64>() else {
        return ParsedValue::Text(cleaned);
    };

    let factor = match caps.get(2).map(|m| m.as_str()) {
        Some("K") => 1e3,
        Some("M") => 1e6,
        Some("B") => 1e9,
        Some("T") => 1e12,
        _ => 1.0,
    };

    let value = number * factor;
    ParsedValue::Numeric(if is_percent { value / 100.0 } else { value })
}
