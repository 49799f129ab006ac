//! Plain-text rendering of the editor's element tree

use comfy_table::{ContentArrangement, Table, presets::UTF8_FULL};
use std::fmt::Write;

use datamodel_core::FieldId;
use datamodel_metadata_table::{
    ColumnsListElement, Container, Element, InputRole, MetricsListElement, SegmentsListElement,
};

const INDENT: &str = "  ";

/// Render `element` as terminal text
pub fn render_text(element: &Element) -> String {
    let mut out = String::new();
    render_element(element, 0, &mut out);
    out
}

fn render_element(element: &Element, depth: usize, out: &mut String) {
    let pad = INDENT.repeat(depth);
    match element {
        Element::Container(container) => render_container(container, depth, out),
        Element::Text(text) if text.uppercase => {
            let _ = writeln!(out, "{}{}", pad, text.text.to_uppercase());
        }
        Element::Text(text) => {
            let _ = writeln!(out, "{}{}", pad, text.text);
        }
        Element::Input(input) => {
            let shown = if input.shows_placeholder() {
                format!("({})", input.placeholder.unwrap_or_default())
            } else {
                input.value.clone()
            };
            match input.role {
                InputRole::Name => {
                    let _ = writeln!(out, "{}# {}", pad, shown);
                }
                InputRole::Description => {
                    let _ = writeln!(out, "{}{}", pad, shown);
                }
            }
        }
        Element::Choice(choice) => {
            let _ = writeln!(out, "{}{}", pad, choice_text(choice.label, choice.active));
        }
        Element::ProgressBar(bar) => {
            let _ = writeln!(out, "{}{}", pad, progress_text(bar.percentage));
        }
        Element::SegmentsList(list) => render_segments(list, &pad, out),
        Element::MetricsList(list) => render_metrics(list, &pad, out),
        Element::ColumnsList(list) => {
            let _ = writeln!(out, "{}Columns", pad);
            let _ = writeln!(out, "{}", columns_table(list));
        }
    }
}

fn render_container(container: &Container, depth: usize, out: &mut String) {
    let depth = if container.has_class("border-left") {
        depth + 1
    } else {
        depth
    };
    let pad = INDENT.repeat(depth);

    // Adjacent choices share a line, like a segmented control
    let mut choices = Vec::new();
    for child in &container.children {
        if let Element::Choice(choice) = child {
            choices.push(choice_text(choice.label, choice.active));
            continue;
        }
        if !choices.is_empty() {
            let _ = writeln!(out, "{}{}", pad, choices.join("  "));
            choices.clear();
        }
        render_element(child, depth, out);
    }
    if !choices.is_empty() {
        let _ = writeln!(out, "{}{}", pad, choices.join("  "));
    }
}

fn choice_text(label: &str, active: bool) -> String {
    if active {
        format!("[x] {}", label)
    } else {
        format!("[ ] {}", label)
    }
}

fn progress_text(percentage: u8) -> String {
    let filled = usize::from(percentage.min(100)) / 10;
    format!(
        "[{}{}] {}%",
        "#".repeat(filled),
        "-".repeat(10 - filled),
        percentage
    )
}

fn render_segments(list: &SegmentsListElement, pad: &str, out: &mut String) {
    let _ = writeln!(out, "{}Segments", pad);
    if list.segments.is_empty() {
        let _ = writeln!(out, "{}{}(none)", pad, INDENT);
    }
    for segment in &list.segments {
        let retired = if segment.archived { " (retired)" } else { "" };
        let _ = writeln!(out, "{}{}- {}{}", pad, INDENT, segment.name, retired);
    }
}

fn render_metrics(list: &MetricsListElement, pad: &str, out: &mut String) {
    let _ = writeln!(out, "{}Metrics", pad);
    if list.metrics.is_empty() {
        let _ = writeln!(out, "{}{}(none)", pad, INDENT);
    }
    for metric in &list.metrics {
        let retired = if metric.archived { " (retired)" } else { "" };
        let _ = writeln!(out, "{}{}- {}{}", pad, INDENT, metric.name, retired);
    }
}

fn columns_table(list: &ColumnsListElement) -> Table {
    let fk_target = |id: Option<FieldId>| {
        id.and_then(|id| list.idfields.iter().find(|f| f.field_id == id))
            .map(|f| format!("{} → {}", f.table_display_name, f.field_display_name))
            .unwrap_or_default()
    };

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            "Column",
            "Display name",
            "Semantic type",
            "Foreign key",
            "Description",
        ]);

    for field in &list.fields {
        table.add_row(vec![
            field.name.clone(),
            field.display_name.clone(),
            field.semantic_type.clone().unwrap_or_default(),
            fk_target(field.fk_target_field_id),
            field.description.clone().unwrap_or_default(),
        ]);
    }
    table
}
