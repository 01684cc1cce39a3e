//! User-facing status messages.

use serde::Serialize;

/// Shown when filters leave nothing visible.
pub const NO_RESULTS_TEXT: &str = "No courses found for current filters.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub kind: MessageKind,
    pub text: String,
}

impl Message {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Info,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: MessageKind::Error,
            text: text.into(),
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }

    /// Load notice for a partially valid file; `None` when nothing was skipped.
    pub fn skipped_entries(loaded: usize, skipped: usize) -> Option<Self> {
        if skipped == 0 {
            return None;
        }
        let noun = if skipped == 1 { "entry" } else { "entries" };
        Some(Self::info(format!(
            "Loaded {loaded} courses. Skipped {skipped} invalid {noun}."
        )))
    }
}
