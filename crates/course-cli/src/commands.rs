use anyhow::{Result, anyhow, bail};
use tracing::{debug, info_span};

use course_cli::render::{course_table, detail_block, facet_table, message_line};
use course_core::{ExplorerOptions, ExplorerState, IdComparison, ImportOptions};

use crate::cli::{FacetsArgs, ListArgs};

pub fn run_list(args: &ListArgs) -> Result<()> {
    let span = info_span!("list", file = %args.file.display());
    let _guard = span.enter();

    let id_comparison = if args.uniform_id_sort {
        IdComparison::Uniform
    } else {
        IdComparison::Pairwise
    };
    let mut state = ExplorerState::with_options(
        ImportOptions::default(),
        ExplorerOptions::new().with_id_comparison(id_comparison),
    );
    state
        .load_file(&args.file)
        .map_err(|err| anyhow!("{}: {}", args.file.display(), err.user_message()))?;

    for (key, value) in &args.filters {
        state.set_filter(*key, Some(value));
    }
    state.set_sort(args.sort);
    if let Some(wanted) = &args.select {
        let Some(id) = state
            .visible_courses()
            .find(|course| course.id.matches_text(wanted))
            .map(|course| course.id.clone())
        else {
            bail!("course {wanted} is not in the visible list");
        };
        state.select_course(Some(&id))?;
    }

    let view = state.view();
    debug!(visible = view.courses.len(), "rendering view");
    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
        return Ok(());
    }
    if let Some(message) = &view.message {
        println!("{}", message_line(message));
    }
    if !view.courses.is_empty() {
        println!("{}", course_table(&view.courses));
    }
    println!("{}", detail_block(view.detail.as_ref()));
    Ok(())
}

pub fn run_facets(args: &FacetsArgs) -> Result<()> {
    let mut state = ExplorerState::new();
    let summary = state
        .load_file(&args.file)
        .map_err(|err| anyhow!("{}: {}", args.file.display(), err.user_message()))?;
    println!(
        "{}: {} courses, {} skipped",
        args.file.display(),
        summary.loaded,
        summary.skipped
    );
    println!("{}", facet_table(&state.view().facets));
    Ok(())
}
