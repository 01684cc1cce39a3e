//! Plain-text rendering of the explorer view.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use course_core::{CourseDetail, CourseSummary, FacetView, Message, MessageKind, NO_SELECTION_TEXT};

const TABLE_WIDTH: u16 = 120;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(TABLE_WIDTH);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

/// Status line for the current message.
pub fn message_line(message: &Message) -> String {
    match message.kind {
        MessageKind::Info => format!("note: {}", message.text),
        MessageKind::Error => format!("error: {}", message.text),
    }
}

/// One row per visible course; the selected row is marked and bold.
pub fn course_table(courses: &[CourseSummary]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell(""), header_cell("ID"), header_cell("Course")]);
    apply_table_style(&mut table);
    for course in courses {
        let row = if course.selected {
            vec![
                Cell::new(">").fg(Color::Green),
                Cell::new(&course.id).add_attribute(Attribute::Bold),
                Cell::new(&course.text).add_attribute(Attribute::Bold),
            ]
        } else {
            vec![Cell::new(""), dim_cell(&course.id), Cell::new(&course.text)]
        };
        table.add_row(row);
    }
    table
}

/// Facet labels with their options and option counts.
pub fn facet_table(facets: &[FacetView]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Facet"),
        header_cell("Options"),
        header_cell("Count"),
    ]);
    apply_table_style(&mut table);
    if let Some(column) = table.column_mut(2) {
        column.set_cell_alignment(CellAlignment::Right);
    }
    for facet in facets {
        table.add_row(vec![
            Cell::new(facet.label).add_attribute(Attribute::Bold),
            Cell::new(facet.options.join(", ")),
            Cell::new(facet.options.len()),
        ]);
    }
    table
}

/// Heading and label/value rows of the selected course, or the
/// no-selection text.
pub fn detail_block(detail: Option<&CourseDetail>) -> String {
    let Some(detail) = detail else {
        return NO_SELECTION_TEXT.to_string();
    };
    let mut table = Table::new();
    apply_table_style(&mut table);
    for row in &detail.rows {
        table.add_row(vec![header_cell(row.label), Cell::new(&row.value)]);
    }
    format!("{}\n{table}", detail.heading)
}
