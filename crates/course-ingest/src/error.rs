//! Error types for course catalog ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Message shown to the user for any malformed catalog file.
pub const FORMAT_ERROR_MESSAGE: &str = "Invalid JSON file format.";

/// Errors that can occur while loading a catalog.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Failed to read the catalog file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === Format Errors ===
    /// Text is not valid JSON.
    #[error("invalid JSON: {source}")]
    InvalidJson {
        #[source]
        source: serde_json::Error,
    },

    /// Top-level JSON value is not an array.
    #[error("expected a JSON array of courses, found {found}")]
    NotAnArray { found: &'static str },

    /// The array parsed but no element produced a course.
    #[error("no valid courses found ({skipped} entries skipped)")]
    NoValidCourses { skipped: usize },
}

impl IngestError {
    /// True for errors caused by the file content rather than by reading it.
    pub fn is_format_error(&self) -> bool {
        matches!(
            self,
            IngestError::InvalidJson { .. }
                | IngestError::NotAnArray { .. }
                | IngestError::NoValidCourses { .. }
        )
    }

    /// Text to surface to the user.
    ///
    /// Every format error collapses to [`FORMAT_ERROR_MESSAGE`]; read
    /// failures surface the underlying I/O message.
    pub fn user_message(&self) -> String {
        match self {
            IngestError::FileRead { source, .. } => {
                let message = source.to_string();
                if message.is_empty() {
                    "Read failed".to_string()
                } else {
                    message
                }
            }
            _ => FORMAT_ERROR_MESSAGE.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_errors_share_user_message() {
        let not_array = IngestError::NotAnArray { found: "object" };
        let empty = IngestError::NoValidCourses { skipped: 3 };
        assert!(not_array.is_format_error());
        assert!(empty.is_format_error());
        assert_eq!(not_array.user_message(), FORMAT_ERROR_MESSAGE);
        assert_eq!(empty.user_message(), FORMAT_ERROR_MESSAGE);
    }

    #[test]
    fn test_error_display_keeps_detail() {
        let err = IngestError::NoValidCourses { skipped: 2 };
        assert_eq!(err.to_string(), "no valid courses found (2 entries skipped)");
    }

    #[test]
    fn test_read_error_surfaces_io_message() {
        let err = IngestError::FileRead {
            path: PathBuf::from("/missing/catalog.json"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(!err.is_format_error());
        assert_eq!(err.user_message(), "no such file");
    }
}
