//! Course catalog ingestion.
//!
//! Turns the text of a user-supplied JSON file into canonical [`Course`]
//! records.
//!
//! # Pipeline
//!
//! - **Parse**: the text must be JSON whose top level is an array
//! - **Normalize**: each element is resolved through per-field alias chains;
//!   records without an id or title are rejected and counted
//! - **Convert**: accepted courses keep input order; an array that yields no
//!   course at all is reported as a format error
//!
//! # Example
//!
//! ```ignore
//! use course_ingest::{parse_catalog, ImportOptions};
//!
//! let conversion = parse_catalog(r#"[{"id": 1, "title": "Algebra"}]"#, &ImportOptions::default())?;
//! assert_eq!(conversion.courses.len(), 1);
//! ```
//!
//! [`Course`]: course_model::Course

mod aliases;
mod convert;
mod error;
mod loader;
mod normalize;

// === Error Types ===
pub use error::{FORMAT_ERROR_MESSAGE, IngestError, Result};

// === Alias Resolution ===
pub use aliases::{FieldAliases, resolve_alias};

// === Normalization ===
pub use normalize::{Rejection, normalize_record};

// === Batch Conversion ===
pub use convert::{Conversion, convert_records};

// === Loading ===
pub use loader::{load_catalog_file, parse_catalog, read_catalog_file};

pub use course_model::ImportOptions;
