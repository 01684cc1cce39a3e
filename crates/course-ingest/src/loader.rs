//! Catalog loading from text and files.

use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

use course_model::ImportOptions;

use crate::convert::{Conversion, convert_records};
use crate::error::{IngestError, Result};

/// Parse catalog text into courses.
///
/// The text must be a JSON array. An array that yields no course at all is
/// rejected with [`IngestError::NoValidCourses`], including the empty array.
/// A leading byte order mark is ignored.
pub fn parse_catalog(text: &str, options: &ImportOptions) -> Result<Conversion> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let value: Value =
        serde_json::from_str(text).map_err(|source| IngestError::InvalidJson { source })?;
    let Value::Array(records) = value else {
        let found = json_kind(&value);
        warn!(found, "catalog top level is not an array");
        return Err(IngestError::NotAnArray { found });
    };

    let conversion = convert_records(&records, options);
    if conversion.courses.is_empty() {
        warn!(skipped = conversion.skipped, "catalog contains no valid courses");
        return Err(IngestError::NoValidCourses {
            skipped: conversion.skipped,
        });
    }
    Ok(conversion)
}

/// Read a catalog file as UTF-8 text.
///
/// Invalid UTF-8 sequences are replaced rather than failing the read, so a
/// mis-encoded file surfaces as a format error once parsed.
pub fn read_catalog_file(path: &Path) -> Result<String> {
    debug!(path = %path.display(), "reading catalog file");
    let bytes = fs::read(path).map_err(|source| IngestError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Read and parse a catalog file.
pub fn load_catalog_file(path: &Path, options: &ImportOptions) -> Result<Conversion> {
    let text = read_catalog_file(path)?;
    parse_catalog(&text, options)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
