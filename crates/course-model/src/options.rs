//! Configuration options for importing and browsing a catalog.

use serde::{Deserialize, Serialize};

/// Placeholder shown for empty detail values.
pub const DEFAULT_EMPTY_PLACEHOLDER: &str = "—";

/// Options for turning raw records into courses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportOptions {
    /// Keep the source JSON object on each course.
    pub keep_raw: bool,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self { keep_raw: true }
    }
}

impl ImportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_keep_raw(mut self, enable: bool) -> Self {
        self.keep_raw = enable;
        self
    }
}

/// How the `id` sort decides between numeric and text comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum IdComparison {
    /// Decide per compared pair: numeric when both ids are numeric,
    /// otherwise text. Mixed id sets may compare on different bases.
    #[default]
    Pairwise,
    /// Numeric only when every id in the sorted sequence is numeric,
    /// otherwise text for all pairs.
    Uniform,
}

/// Options controlling the browsing view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExplorerOptions {
    pub id_comparison: IdComparison,
    /// Glyph rendered for missing detail values.
    pub empty_placeholder: String,
}

impl Default for ExplorerOptions {
    fn default() -> Self {
        Self {
            id_comparison: IdComparison::default(),
            empty_placeholder: DEFAULT_EMPTY_PLACEHOLDER.to_string(),
        }
    }
}

impl ExplorerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_id_comparison(mut self, mode: IdComparison) -> Self {
        self.id_comparison = mode;
        self
    }

    #[must_use]
    pub fn with_empty_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.empty_placeholder = placeholder.into();
        self
    }
}
