//! Click-to-copy wiring.
//!
//! A registry of clickable triggers, each pointing at a source element whose
//! text gets copied when the trigger is clicked. The clipboard itself is an
//! external collaborator behind the [`Clipboard`] trait; [`MemoryClipboard`]
//! backs tests and headless use.

use std::collections::HashMap;

use log::{debug, warn};
use thiserror::Error;

/// A clipboard write was rejected.
#[derive(Debug, Error)]
#[error("clipboard write failed: {0}")]
pub struct ClipboardError(pub String);

/// Destination for copied text.
pub trait Clipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError>;
}

/// In-memory clipboard holding the last written text.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last written text.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl Clipboard for MemoryClipboard {
    fn write(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.contents = Some(text.to_string());
        Ok(())
    }
}

/// Wires click triggers to copy the text of a source element.
#[derive(Debug)]
pub struct CopyOnClick<C: Clipboard> {
    clipboard: C,
    /// Trigger id → source id.
    targets: HashMap<String, String>,
}

impl<C: Clipboard> CopyOnClick<C> {
    pub fn new(clipboard: C) -> Self {
        Self {
            clipboard,
            targets: HashMap::new(),
        }
    }

    /// Register `trigger` to copy the text of `source` when clicked.
    pub fn register(&mut self, trigger: impl Into<String>, source: impl Into<String>) {
        self.targets.insert(trigger.into(), source.into());
    }

    /// Handle a click on `trigger`.
    ///
    /// `lookup` resolves a source id to its current text, which is all the
    /// widget needs from the surrounding structure. Unregistered triggers and
    /// unresolvable sources are ignored; a failed write is logged, never
    /// fatal. Returns true when text was copied.
    pub fn on_click(&mut self, trigger: &str, lookup: impl Fn(&str) -> Option<String>) -> bool {
        let Some(source) = self.targets.get(trigger) else {
            return false;
        };
        let Some(text) = lookup(source) else {
            return false;
        };

        match self.clipboard.write(&text) {
            Ok(()) => {
                debug!("copied {} chars from {source}", text.len());
                true
            }
            Err(err) => {
                warn!("failed to copy text: {err}");
                false
            }
        }
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }
}
