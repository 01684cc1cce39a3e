//! Course catalog data model.
//!
//! This crate holds the canonical, alias-resolved shape of a course record and
//! the small vocabulary shared by ingestion and the view engine: facet keys,
//! sort modes, the semester rank and the import/explorer options.

pub mod course;
pub mod enums;
pub mod error;
pub mod ids;
pub mod options;
pub mod semester;

pub use course::{Course, Credits};
pub use enums::{FacetKey, SortDirection, SortKey, SortMode};
pub use error::{ModelError, Result};
pub use ids::{CourseId, number_text};
pub use options::{ExplorerOptions, IdComparison, ImportOptions};
pub use semester::{Season, semester_rank};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_serializes_with_untagged_id_and_credits() {
        let course = Course::new(CourseId::from(101), "Algorithms")
            .with_credits(Credits::Numeric(4.0))
            .with_level("Advanced");
        let json = serde_json::to_value(&course).expect("serialize course");
        assert_eq!(json["id"], serde_json::json!(101));
        assert_eq!(json["title"], "Algorithms");
        assert_eq!(json["credits"], serde_json::json!(4.0));
        assert_eq!(json["level"], "Advanced");
        assert!(json["instructor"].is_null());
    }
}
