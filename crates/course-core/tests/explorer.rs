//! Integration tests for the explorer state.

use course_core::{
    CourseId, ExplorerError, ExplorerOptions, ExplorerState, FORMAT_ERROR_MESSAGE, FacetKey,
    IdComparison, ImportOptions, MessageKind, NO_RESULTS_TEXT, SortMode,
};

const CATALOG: &str = r#"[
    {"id": "CS101", "title": "Intro to Programming", "level": "Beginner", "credits": 3,
     "department": "Computer Science", "postedTime": "Fall 2020", "instructor": "Ada"},
    {"courseId": "MA201", "name": "Linear Algebra", "difficulty": "Intermediate",
     "creditHours": "4", "dept": "Mathematics", "semester": "Spring 2021"},
    {"code": "CS301", "title": "Compilers", "level": "advanced", "units": "3",
     "department": "Computer Science"},
    {"title": "Missing id"},
    "not an object"
]"#;

fn loaded() -> ExplorerState {
    let mut state = ExplorerState::new();
    state.load_text(CATALOG).expect("load catalog");
    state
}

fn visible_ids(state: &ExplorerState) -> Vec<String> {
    state.visible_courses().map(|c| c.id.to_string()).collect()
}

fn id(text: &str) -> CourseId {
    CourseId::text(text).unwrap()
}

#[test]
fn load_reports_counts_and_notice() {
    let mut state = ExplorerState::new();
    let summary = state.load_text(CATALOG).unwrap();
    assert_eq!(summary.loaded, 3);
    assert_eq!(summary.skipped, 2);
    let message = state.message().unwrap();
    assert_eq!(message.kind, MessageKind::Info);
    assert_eq!(message.text, "Loaded 3 courses. Skipped 2 invalid entries.");
    assert_eq!(visible_ids(&state), vec!["CS101", "MA201", "CS301"]);
}

#[test]
fn load_with_single_skip_uses_singular() {
    let mut state = ExplorerState::new();
    let summary = state
        .load_text(r#"[{"id":1,"title":"A"},{"foo":"bar"}]"#)
        .unwrap();
    assert_eq!(summary.loaded, 1);
    assert_eq!(summary.skipped, 1);
    assert_eq!(
        state.message().unwrap().text,
        "Loaded 1 courses. Skipped 1 invalid entry."
    );
}

#[test]
fn clean_load_has_no_message() {
    let mut state = ExplorerState::new();
    state.load_text(r#"[{"id":1,"title":"A"}]"#).unwrap();
    assert_eq!(state.message(), None);
}

#[test]
fn all_invalid_records_fail_like_bad_json() {
    let mut state = loaded();
    let err = state.load_text(r#"[{"foo":"bar"}]"#).unwrap_err();
    assert_eq!(err.user_message(), FORMAT_ERROR_MESSAGE);
    let message = state.message().unwrap();
    assert_eq!(message.kind, MessageKind::Error);
    assert_eq!(message.text, FORMAT_ERROR_MESSAGE);
    assert!(state.courses().is_empty());
    assert!(state.facet_options().is_empty());
}

#[test]
fn malformed_text_and_non_array_fail() {
    let mut state = ExplorerState::new();
    assert!(state.load_text("not json").is_err());
    assert_eq!(state.message().unwrap().text, FORMAT_ERROR_MESSAGE);
    assert!(state.load_text(r#"{"id":1,"title":"A"}"#).is_err());
    assert_eq!(state.message().unwrap().text, FORMAT_ERROR_MESSAGE);
}

#[test]
fn facets_cover_observed_attributes_only() {
    let state = loaded();
    let keys: Vec<FacetKey> = state.facet_options().keys().collect();
    assert_eq!(
        keys,
        vec![
            FacetKey::Level,
            FacetKey::Credits,
            FacetKey::Instructor,
            FacetKey::Department
        ]
    );
    assert_eq!(
        state.facet_options().get(FacetKey::Credits).unwrap(),
        &["3".to_string(), "4".to_string()]
    );
    assert_eq!(
        state.facet_options().get(FacetKey::Level).unwrap(),
        &[
            "advanced".to_string(),
            "Beginner".to_string(),
            "Intermediate".to_string()
        ]
    );
}

#[test]
fn facet_options_do_not_narrow_with_filters() {
    let mut state = loaded();
    let before = state.facet_options().clone();
    state.set_filter(FacetKey::Department, Some("Mathematics"));
    assert_eq!(state.facet_options(), &before);
}

#[test]
fn filters_and_clear() {
    let mut state = loaded();
    state.set_filter(FacetKey::Department, Some("computer science"));
    assert_eq!(visible_ids(&state), vec!["CS101", "CS301"]);
    state.set_filter(FacetKey::Credits, Some("3"));
    assert_eq!(visible_ids(&state), vec!["CS101", "CS301"]);
    state.set_filter(FacetKey::Level, Some("ADVANCED"));
    assert_eq!(visible_ids(&state), vec!["CS301"]);
    state.set_filter(FacetKey::Level, Some(""));
    state.set_filter(FacetKey::Credits, None);
    assert_eq!(visible_ids(&state), vec!["CS101", "CS301"]);
    state.clear_filters();
    assert_eq!(visible_ids(&state), vec!["CS101", "MA201", "CS301"]);
}

#[test]
fn no_results_notice_is_transient() {
    let mut state = loaded();
    state.set_filter(FacetKey::Instructor, Some("Nobody"));
    assert_eq!(state.visible_len(), 0);
    let message = state.message().unwrap();
    assert_eq!(message.kind, MessageKind::Info);
    assert_eq!(message.text, NO_RESULTS_TEXT);

    state.set_filter(FacetKey::Instructor, None);
    assert_eq!(
        state.message().unwrap().text,
        "Loaded 3 courses. Skipped 2 invalid entries."
    );
}

#[test]
fn sort_modes() {
    let mut state = loaded();
    state.set_sort("title-asc".parse().unwrap());
    assert_eq!(visible_ids(&state), vec!["CS301", "CS101", "MA201"]);
    state.set_sort("semester-asc".parse().unwrap());
    assert_eq!(visible_ids(&state), vec!["CS101", "MA201", "CS301"]);
    state.set_sort("semester-desc".parse().unwrap());
    assert_eq!(visible_ids(&state), vec!["CS301", "MA201", "CS101"]);
    state.set_sort(SortMode::None);
    assert_eq!(visible_ids(&state), vec!["CS101", "MA201", "CS301"]);
}

#[test]
fn reload_resets_filters_sort_and_selection() {
    let mut state = loaded();
    state.set_filter(FacetKey::Level, Some("Beginner"));
    state.set_sort("id-desc".parse().unwrap());
    state.select_course(Some(&id("CS101"))).unwrap();

    state.load_text(CATALOG).unwrap();
    assert!(state.filters().is_empty());
    assert_eq!(state.sort_mode(), SortMode::None);
    assert_eq!(state.selected_course(), None);
}

#[test]
fn selection_follows_visibility() {
    let mut state = loaded();
    state.select_course(Some(&id("MA201"))).unwrap();
    assert_eq!(state.selected_course().unwrap().title, "Linear Algebra");

    state.set_sort("title-desc".parse().unwrap());
    assert!(state.selected_course().is_some());

    state.set_filter(FacetKey::Department, Some("Computer Science"));
    assert_eq!(state.selected_course(), None);
    assert_eq!(state.selected_detail(), None);
}

#[test]
fn selecting_hidden_course_is_rejected() {
    let mut state = loaded();
    state.set_filter(FacetKey::Department, Some("Mathematics"));
    state.select_course(Some(&id("MA201"))).unwrap();
    let err = state.select_course(Some(&id("CS101"))).unwrap_err();
    assert!(matches!(err, ExplorerError::CourseNotVisible(_)));
    assert_eq!(state.selected_id(), Some(&id("MA201")));
    state.select_course(None).unwrap();
    assert_eq!(state.selected_id(), None);
}

#[test]
fn duplicate_ids_resolve_to_first_match() {
    let mut state = ExplorerState::new();
    state
        .load_text(r#"[{"id":"X","title":"First"},{"id":"X","title":"Second"}]"#)
        .unwrap();
    state.select_course(Some(&id("X"))).unwrap();
    assert_eq!(state.selected_course().unwrap().title, "First");
    let selected: Vec<bool> = state.summaries().iter().map(|s| s.selected).collect();
    assert_eq!(selected, vec![true, true]);
}

#[test]
fn view_model_bundles_everything() {
    let mut state = ExplorerState::with_options(
        ImportOptions::new().with_keep_raw(false),
        ExplorerOptions::new().with_empty_placeholder("n/a"),
    );
    state.load_text(CATALOG).unwrap();
    state.set_sort("id-asc".parse().unwrap());
    state.select_course(Some(&id("CS301"))).unwrap();

    let view = state.view();
    assert_eq!(view.facets.len(), 4);
    assert_eq!(view.facets[0].label, "Level");
    let lines: Vec<&str> = view.courses.iter().map(|c| c.text.as_str()).collect();
    insta::assert_snapshot!(lines.join("\n"), @r"
    Intro to Programming (CS101) • Beginner • 3 credits • Fall 2020
    Compilers (CS301) • advanced • 3 credits
    Linear Algebra (MA201) • Intermediate • 4 credits • Spring 2021
    ");
    let detail = view.detail.unwrap();
    assert_eq!(detail.heading, "Compilers");
    assert_eq!(detail.rows[2].label, "Instructor");
    assert_eq!(detail.rows[2].value, "n/a");
    assert!(state.courses().iter().all(|c| c.raw.is_none()));

    let json = serde_json::to_value(state.view()).unwrap();
    assert_eq!(json["sort"], "id-asc");
    assert_eq!(json["message"]["kind"], "info");
}

#[test]
fn uniform_id_comparison_option() {
    let text = r#"[{"id":"b","title":"B"},{"id":"10","title":"Ten"},{"id":"2","title":"Two"}]"#;
    let mut pairwise = ExplorerState::new();
    pairwise.load_text(text).unwrap();
    pairwise.set_sort("id-asc".parse().unwrap());
    assert_eq!(visible_ids(&pairwise), vec!["2", "10", "b"]);

    let mut uniform = ExplorerState::with_options(
        ImportOptions::default(),
        ExplorerOptions::new().with_id_comparison(IdComparison::Uniform),
    );
    uniform.load_text(text).unwrap();
    uniform.set_sort("id-asc".parse().unwrap());
    assert_eq!(visible_ids(&uniform), vec!["10", "2", "b"]);
}

#[test]
fn load_file_read_error_clears_state() {
    let mut state = loaded();
    let dir = tempfile::tempdir().expect("create temp dir");
    let err = state.load_file(&dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, ExplorerError::Ingest(_)));
    assert!(state.courses().is_empty());
    let message = state.message().unwrap();
    assert_eq!(message.kind, MessageKind::Error);
    assert_ne!(message.text, FORMAT_ERROR_MESSAGE);
}

#[test]
fn load_file_accepts_byte_order_mark() {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("catalog.json");
    std::fs::write(&path, "\u{feff}[{\"id\":1,\"title\":\"A\"}]").expect("write catalog");
    let mut state = ExplorerState::new();
    let summary = state.load_file(&path).unwrap();
    assert_eq!(summary.loaded, 1);
    assert_eq!(state.message(), None);
}
