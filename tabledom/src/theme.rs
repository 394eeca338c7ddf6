//! Theming for table surfaces.
//!
//! Themes define named colors that collaborators resolve at render time. Two
//! built-in palettes cover the light and dark appearance modes; the toggle
//! widget in the enhancement layer flips between them.

use serde::{Deserialize, Serialize};

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
}

impl ThemeMode {
    /// The opposite mode.
    pub fn flipped(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create from a 0xRRGGBB value.
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }
}

/// A theme provides named color variables.
pub trait Theme: Send + Sync {
    /// Resolve a color variable name to a concrete color.
    /// Returns None if the variable is not defined.
    fn resolve(&self, name: &str) -> Option<Color>;
}

/// Default theme colors for table surfaces.
#[derive(Debug, Clone)]
pub struct TableTheme {
    pub background: Color,
    pub surface: Color,
    pub text: Color,
    pub text_muted: Color,
    pub accent: Color,
    /// Background for emphasized (highlighted) spans.
    pub highlight: Color,
}

impl TableTheme {
    /// The dark palette.
    pub fn dark() -> Self {
        Self {
            background: Color::hex(0x1A1B26),
            surface: Color::hex(0x24283B),
            text: Color::hex(0xC0CAF5),
            text_muted: Color::hex(0x565F89),
            accent: Color::hex(0x7AA2F7),
            highlight: Color::hex(0xE0AF68),
        }
    }

    /// The light palette.
    pub fn light() -> Self {
        Self {
            background: Color::hex(0xFFFFFF),
            surface: Color::hex(0xF2F2F7),
            text: Color::hex(0x1C1C1E),
            text_muted: Color::hex(0x8E8E93),
            accent: Color::hex(0x3B82F6),
            highlight: Color::hex(0xFDE68A),
        }
    }

    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

impl Default for TableTheme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme for TableTheme {
    fn resolve(&self, name: &str) -> Option<Color> {
        match name {
            "background" => Some(self.background),
            "surface" => Some(self.surface),
            "text" => Some(self.text),
            "text_muted" => Some(self.text_muted),
            "accent" => Some(self.accent),
            "highlight" => Some(self.highlight),
            _ => None,
        }
    }
}
