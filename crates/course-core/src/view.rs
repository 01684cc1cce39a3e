//! Renderable projections of courses.

use serde::Serialize;

use course_model::{Course, CourseId};

/// Text shown in the detail area when nothing is selected.
pub const NO_SELECTION_TEXT: &str = "Select a course to see details.";

/// Heading used when a course title renders empty.
pub const FALLBACK_HEADING: &str = "Course";

/// One row of the course list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseSummary {
    pub id: CourseId,
    pub text: String,
    pub selected: bool,
}

/// Labelled value in the detail view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailRow {
    pub label: &'static str,
    pub value: String,
}

/// Detail view of a selected course.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseDetail {
    pub heading: String,
    pub rows: Vec<DetailRow>,
}

/// One-line summary: `Title (id) • level • N credits • semester`.
///
/// Each `•` segment is present only when its field has a value.
pub fn summary_line(course: &Course) -> String {
    let mut line = format!("{} ({})", course.title, course.id);
    if let Some(level) = non_empty(course.level.as_deref()) {
        line.push_str(&format!(" • {level}"));
    }
    if let Some(credits) = course.credits.as_text() {
        line.push_str(&format!(" • {credits} credits"));
    }
    if let Some(semester) = non_empty(course.posted_time.as_deref()) {
        line.push_str(&format!(" • {semester}"));
    }
    line
}

/// Detail rows in display order, missing values shown as `placeholder`.
pub fn course_detail(course: &Course, placeholder: &str) -> CourseDetail {
    let heading = if course.title.is_empty() {
        FALLBACK_HEADING.to_string()
    } else {
        course.title.clone()
    };
    let id = course.id.to_string();
    let credits = course.credits.as_text();
    let fields: [(&'static str, Option<&str>); 9] = [
        ("ID", Some(id.as_str())),
        ("Department", course.department.as_deref()),
        ("Instructor", course.instructor.as_deref()),
        ("Credits", credits.as_deref()),
        ("Level", course.level.as_deref()),
        ("Type", course.course_type.as_deref()),
        ("Skill", course.skill.as_deref()),
        ("Semester", course.posted_time.as_deref()),
        ("Description", course.detail.as_deref()),
    ];
    let rows = fields
        .into_iter()
        .map(|(label, value)| DetailRow {
            label,
            value: non_empty(value).unwrap_or(placeholder).to_string(),
        })
        .collect();
    CourseDetail { heading, rows }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|s| !s.is_empty())
}
