//! Batch conversion of raw records.

use serde_json::Value;
use tracing::{debug, info};

use course_model::{Course, ImportOptions};

use crate::normalize::normalize_record;

/// Outcome of converting a raw array.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Conversion {
    /// Accepted courses, in input order.
    pub courses: Vec<Course>,
    /// Number of elements that did not produce a course.
    pub skipped: usize,
}

impl Conversion {
    /// Total number of input elements seen.
    pub fn total(&self) -> usize {
        self.courses.len() + self.skipped
    }
}

/// Convert every element independently; failures are counted, not raised.
pub fn convert_records(records: &[Value], options: &ImportOptions) -> Conversion {
    let mut conversion = Conversion {
        courses: Vec::with_capacity(records.len()),
        skipped: 0,
    };
    for (index, record) in records.iter().enumerate() {
        match normalize_record(record, options) {
            Ok(course) => conversion.courses.push(course),
            Err(reason) => {
                debug!(index, %reason, "skipping invalid record");
                conversion.skipped += 1;
            }
        }
    }
    info!(
        courses = conversion.courses.len(),
        skipped = conversion.skipped,
        "records converted"
    );
    conversion
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn keeps_input_order_and_counts_skips() {
        let records = vec![
            json!({"id": 3, "title": "C"}),
            json!({"foo": "bar"}),
            json!({"id": 1, "title": "A"}),
            json!(17),
            json!({"id": 2, "title": "B"}),
        ];
        let conversion = convert_records(&records, &ImportOptions::default());
        let titles: Vec<&str> = conversion
            .courses
            .iter()
            .map(|c| c.title.as_str())
            .collect();
        assert_eq!(titles, vec!["C", "A", "B"]);
        assert_eq!(conversion.skipped, 2);
        assert_eq!(conversion.total(), records.len());
    }

    #[test]
    fn empty_input_converts_to_nothing() {
        let conversion = convert_records(&[], &ImportOptions::default());
        assert!(conversion.courses.is_empty());
        assert_eq!(conversion.skipped, 0);
    }

    #[test]
    fn zero_id_record_is_skipped() {
        let records = vec![
            json!({"id": 0, "title": "Zero"}),
            json!({"id": 1, "title": "One"}),
        ];
        let conversion = convert_records(&records, &ImportOptions::default());
        assert_eq!(conversion.courses.len(), 1);
        assert_eq!(conversion.courses[0].title, "One");
        assert_eq!(conversion.skipped, 1);
    }
}
