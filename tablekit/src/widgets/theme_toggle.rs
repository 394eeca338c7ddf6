//! Light/dark theme toggle.
//!
//! Resolves the initial mode as saved-choice-or-system-preference, flips on
//! activation and persists every applied mode through a [`ThemeStore`].
//! Storage is an external collaborator; [`MemoryThemeStore`] keeps the choice
//! for the lifetime of the process.

use log::{debug, warn};
use tabledom::{TableTheme, ThemeMode};
use thiserror::Error;

/// A theme store write was rejected.
#[derive(Debug, Error)]
#[error("theme store write failed: {0}")]
pub struct ThemeStoreError(pub String);

/// Storage for the persisted theme choice.
pub trait ThemeStore {
    /// The previously saved mode, if any.
    fn load(&self) -> Option<ThemeMode>;

    /// Persist `mode`.
    fn save(&mut self, mode: ThemeMode) -> Result<(), ThemeStoreError>;
}

/// In-memory theme store.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    saved: Option<ThemeMode>,
}

impl MemoryThemeStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Option<ThemeMode> {
        self.saved
    }

    fn save(&mut self, mode: ThemeMode) -> Result<(), ThemeStoreError> {
        self.saved = Some(mode);
        Ok(())
    }
}

/// The theme toggle.
#[derive(Debug)]
pub struct ThemeToggle<S: ThemeStore> {
    mode: ThemeMode,
    store: S,
}

impl<S: ThemeStore> ThemeToggle<S> {
    /// Resolve and apply the initial mode: the saved choice wins, otherwise
    /// the system preference.
    pub fn new(store: S, system_default: ThemeMode) -> Self {
        let mode = store.load().unwrap_or(system_default);
        let mut toggle = Self { mode, store };
        toggle.persist();
        toggle
    }

    /// The mode currently applied.
    pub fn current(&self) -> ThemeMode {
        self.mode
    }

    /// The palette for the current mode.
    pub fn theme(&self) -> TableTheme {
        TableTheme::for_mode(self.mode)
    }

    /// Apply and persist a mode.
    pub fn set(&mut self, mode: ThemeMode) {
        self.mode = mode;
        self.persist();
    }

    /// Flip between light and dark. Returns the newly applied mode.
    pub fn toggle(&mut self) -> ThemeMode {
        self.set(self.mode.flipped());
        self.mode
    }

    fn persist(&mut self) {
        debug!("theme: {:?}", self.mode);
        if let Err(err) = self.store.save(self.mode) {
            // A store failure only costs persistence across sessions.
            warn!("{err}");
        }
    }
}
