//! Course catalog view engine.
//!
//! Derives filter facets from a loaded catalog and keeps a filtered, sorted,
//! selectable view over it. [`ExplorerState`] is the collaborator a renderer
//! talks to; the free functions behind it are usable on their own.
//!
//! # Pipeline
//!
//! ```text
//! text ─► course_ingest ─► Vec<Course> ─► facets (once per load)
//!                                   └──► filter ─► sort ─► view (every change)
//! ```

mod collate;
mod error;
mod facets;
mod filter;
mod message;
mod sort;
mod state;
mod view;

// === Error Types ===
pub use error::{ExplorerError, Result};

// === Facets ===
pub use facets::{FacetOptions, build_facet_options, derive_facets};

// === Filtering & Sorting ===
pub use collate::collate;
pub use filter::{FilterState, filter_courses};
pub use sort::{compare_courses, sort_courses};

// === View ===
pub use message::{Message, MessageKind, NO_RESULTS_TEXT};
pub use view::{
    CourseDetail, CourseSummary, DetailRow, FALLBACK_HEADING, NO_SELECTION_TEXT, course_detail,
    summary_line,
};

// === State ===
pub use state::{ExplorerState, FacetView, LoadSummary, ViewModel};

pub use course_ingest::{FORMAT_ERROR_MESSAGE, ImportOptions, IngestError};
pub use course_model::{
    Course, CourseId, Credits, ExplorerOptions, FacetKey, IdComparison, SortDirection, SortKey,
    SortMode,
};
