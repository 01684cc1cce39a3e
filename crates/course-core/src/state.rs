//! Explorer state - the single owner of loaded courses and view selections.
//!
//! All mutation goes through the methods here; each one recomputes the
//! visible list from scratch so no intermediate result is ever stale.

use std::path::Path;

use serde::Serialize;
use tracing::{debug, info, warn};

use course_ingest::{Conversion, ImportOptions, parse_catalog, read_catalog_file};
use course_model::{Course, CourseId, ExplorerOptions, FacetKey, SortMode};

use crate::error::{ExplorerError, Result};
use crate::facets::{FacetOptions, build_facet_options, derive_facets};
use crate::filter::FilterState;
use crate::message::{Message, NO_RESULTS_TEXT};
use crate::sort::sort_entries;
use crate::view::{CourseDetail, CourseSummary, course_detail, summary_line};

/// Counts reported by a successful load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    pub loaded: usize,
    pub skipped: usize,
}

/// A facet with its label and selectable values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetView {
    pub key: FacetKey,
    pub label: &'static str,
    pub options: Vec<String>,
}

/// Everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewModel {
    pub facets: Vec<FacetView>,
    pub filters: FilterState,
    pub sort: SortMode,
    pub courses: Vec<CourseSummary>,
    pub detail: Option<CourseDetail>,
    pub message: Option<Message>,
}

#[derive(Debug, Clone, Default)]
pub struct ExplorerState {
    import_options: ImportOptions,
    options: ExplorerOptions,
    courses: Vec<Course>,
    facets: FacetOptions,
    filters: FilterState,
    sort: SortMode,
    /// Indices into `courses`, in display order.
    visible: Vec<usize>,
    selected: Option<CourseId>,
    load_message: Option<Message>,
}

impl ExplorerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(import_options: ImportOptions, options: ExplorerOptions) -> Self {
        Self {
            import_options,
            options,
            ..Self::default()
        }
    }

    // === Loading ===

    /// Replace the catalog with the courses parsed from `text`.
    ///
    /// Filters, sort mode and selection are reset. On failure the state is
    /// left empty and the error message becomes the current message.
    pub fn load_text(&mut self, text: &str) -> Result<LoadSummary> {
        let parsed = parse_catalog(text, &self.import_options);
        self.apply_load(parsed.map_err(ExplorerError::from))
    }

    /// Read `path` and load its contents.
    pub fn load_file(&mut self, path: &Path) -> Result<LoadSummary> {
        let parsed = read_catalog_file(path)
            .and_then(|text| parse_catalog(&text, &self.import_options));
        self.apply_load(parsed.map_err(ExplorerError::from))
    }

    fn apply_load(&mut self, parsed: Result<Conversion>) -> Result<LoadSummary> {
        self.reset();
        match parsed {
            Ok(Conversion { courses, skipped }) => {
                let summary = LoadSummary {
                    loaded: courses.len(),
                    skipped,
                };
                let keys = derive_facets(&courses);
                self.facets = build_facet_options(&courses, &keys);
                self.courses = courses;
                self.load_message = Message::skipped_entries(summary.loaded, summary.skipped);
                self.refresh();
                info!(
                    loaded = summary.loaded,
                    skipped = summary.skipped,
                    facets = self.facets.len(),
                    "catalog loaded"
                );
                Ok(summary)
            }
            Err(err) => {
                warn!(error = %err, "catalog load failed");
                self.load_message = Some(Message::error(err.user_message()));
                Err(err)
            }
        }
    }

    fn reset(&mut self) {
        self.courses.clear();
        self.facets = FacetOptions::default();
        self.filters.clear();
        self.sort = SortMode::None;
        self.visible.clear();
        self.selected = None;
        self.load_message = None;
    }

    // === Mutation ===

    /// Select `value` for `key`; `None` or an empty value clears the filter.
    pub fn set_filter(&mut self, key: FacetKey, value: Option<&str>) {
        self.filters.set(key, value);
        debug!(facet = %key, value = ?self.filters.get(key), "filter changed");
        self.refresh();
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.refresh();
    }

    pub fn set_sort(&mut self, mode: SortMode) {
        self.sort = mode;
        debug!(sort = %mode, "sort changed");
        self.refresh();
    }

    /// Select a visible course, or clear the selection with `None`.
    ///
    /// Ids outside the visible list are rejected and leave the current
    /// selection untouched.
    pub fn select_course(&mut self, id: Option<&CourseId>) -> Result<()> {
        let Some(id) = id else {
            self.selected = None;
            return Ok(());
        };
        if !self.visible_courses().any(|course| &course.id == id) {
            return Err(ExplorerError::CourseNotVisible(id.to_string()));
        }
        debug!(course_id = %id, "course selected");
        self.selected = Some(id.clone());
        Ok(())
    }

    fn refresh(&mut self) {
        let mut entries: Vec<(usize, &Course)> = self
            .courses
            .iter()
            .enumerate()
            .filter(|(_, course)| self.filters.matches(course))
            .collect();
        sort_entries(&mut entries, self.sort, self.options.id_comparison, |entry| entry.1);
        let visible: Vec<usize> = entries.into_iter().map(|(index, _)| index).collect();
        self.visible = visible;

        if let Some(id) = &self.selected
            && !self.visible_courses().any(|course| &course.id == id)
        {
            debug!(course_id = %id, "selection no longer visible");
            self.selected = None;
        }
    }

    // === Accessors ===

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Filtered and sorted courses, in display order.
    pub fn visible_courses(&self) -> impl Iterator<Item = &Course> + '_ {
        self.visible.iter().map(|&index| &self.courses[index])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// The selected course: first match in the visible list, then in the
    /// full list.
    pub fn selected_course(&self) -> Option<&Course> {
        let id = self.selected.as_ref()?;
        self.visible_courses()
            .find(|course| &course.id == id)
            .or_else(|| self.courses.iter().find(|course| &course.id == id))
    }

    pub fn selected_id(&self) -> Option<&CourseId> {
        self.selected.as_ref()
    }

    pub fn facet_options(&self) -> &FacetOptions {
        &self.facets
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    pub fn sort_mode(&self) -> SortMode {
        self.sort
    }

    pub fn options(&self) -> &ExplorerOptions {
        &self.options
    }

    /// The message to show right now.
    ///
    /// A failed load's error wins; otherwise an empty visible list over a
    /// loaded catalog shows the no-results notice; otherwise the load notice.
    pub fn message(&self) -> Option<Message> {
        if let Some(message) = self.load_message.as_ref().filter(|m| m.is_error()) {
            return Some(message.clone());
        }
        if !self.courses.is_empty() && self.visible.is_empty() {
            return Some(Message::info(NO_RESULTS_TEXT));
        }
        self.load_message.clone()
    }

    pub fn summaries(&self) -> Vec<CourseSummary> {
        self.visible_courses()
            .map(|course| CourseSummary {
                id: course.id.clone(),
                text: summary_line(course),
                selected: self.selected.as_ref() == Some(&course.id),
            })
            .collect()
    }

    pub fn selected_detail(&self) -> Option<CourseDetail> {
        self.selected_course()
            .map(|course| course_detail(course, &self.options.empty_placeholder))
    }

    pub fn view(&self) -> ViewModel {
        ViewModel {
            facets: self
                .facets
                .iter()
                .map(|(key, options)| FacetView {
                    key,
                    label: key.label(),
                    options: options.to_vec(),
                })
                .collect(),
            filters: self.filters.clone(),
            sort: self.sort,
            courses: self.summaries(),
            detail: self.selected_detail(),
            message: self.message(),
        }
    }
}
