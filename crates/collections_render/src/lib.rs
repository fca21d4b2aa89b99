use std::fmt::Write as _;

use collections_core::core_api::{PanelSnapshot, RegionStatus, Session};
use serde_json::{Map as JsonMap, Value as JsonValue};

// The panel shows at most two columns of five regions, like the in-game list.
const PANEL_COLUMN_LENGTH: usize = 5;
const PANEL_COLUMN_WIDTH: usize = 26;
const PANEL_HEADER: &str = "[SHOW REMAINING BROADCAST LOCATIONS]";
const PANEL_UNAVAILABLE: &str = "[UNAVAILABLE]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    #[default]
    CanonicalV1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextStyle {
    #[default]
    CollectionsMenu,
}

pub fn render_json(session: &Session, style: JsonStyle) -> JsonValue {
    match style {
        JsonStyle::CanonicalV1 => JsonValue::Object(default_json(session)),
    }
}

pub fn render_text(session: &Session, style: TextStyle) -> String {
    match style {
        TextStyle::CollectionsMenu => render_collections_text(session),
    }
}

fn default_json(session: &Session) -> JsonMap<String, JsonValue> {
    let mut out = JsonMap::new();

    out.insert(
        "pearl_labels".to_string(),
        labels_to_json(session.pearl_labels()),
    );
    out.insert(
        "chatlog_labels".to_string(),
        labels_to_json(session.chatlog_labels()),
    );
    out.insert(
        "panel".to_string(),
        match session.panel_snapshot() {
            Some(panel) => panel_to_json(&panel),
            None => JsonValue::Null,
        },
    );

    out
}

fn labels_to_json(labels: &[String]) -> JsonValue {
    JsonValue::Array(
        labels
            .iter()
            .map(|label| JsonValue::String(label.clone()))
            .collect(),
    )
}

fn panel_to_json(panel: &PanelSnapshot) -> JsonValue {
    let mut out = JsonMap::new();
    out.insert(
        "post_pebbles".to_string(),
        JsonValue::Bool(panel.post_pebbles),
    );
    out.insert(
        "regions".to_string(),
        JsonValue::Array(panel.regions.iter().map(region_to_json).collect()),
    );
    JsonValue::Object(out)
}

fn region_to_json(region: &RegionStatus) -> JsonValue {
    let mut out = JsonMap::new();
    out.insert(
        "acronym".to_string(),
        JsonValue::String(region.acronym.clone()),
    );
    out.insert("name".to_string(), JsonValue::String(region.name.clone()));
    out.insert("total".to_string(), JsonValue::from(region.total));
    out.insert("remaining".to_string(), JsonValue::from(region.remaining));
    out.insert(
        "completed".to_string(),
        JsonValue::Bool(region.completed()),
    );
    JsonValue::Object(out)
}

fn render_collections_text(session: &Session) -> String {
    let mut out = String::new();

    writeln!(&mut out, " ::: Pearls :::").expect("writing to String cannot fail");
    write_label_lines(&mut out, session.pearl_labels());
    writeln!(&mut out).expect("writing to String cannot fail");

    writeln!(&mut out, " ::: Chatlogs :::").expect("writing to String cannot fail");
    write_label_lines(&mut out, session.chatlog_labels());
    writeln!(&mut out).expect("writing to String cannot fail");

    out.push_str(&render_region_panel(session.panel_snapshot().as_ref()));
    out
}

fn write_label_lines(out: &mut String, labels: &[String]) {
    if labels.is_empty() {
        writeln!(out, "  none").expect("writing to String cannot fail");
        return;
    }
    for label in labels {
        writeln!(out, "  {label}").expect("writing to String cannot fail");
    }
}

/// Render the uncollected-regions panel: `[ ]` for regions that still hold
/// uncollected chatlogs, `[x]` for completed ones, two columns of five.
/// A `None` snapshot renders the disabled state.
pub fn render_region_panel(panel: Option<&PanelSnapshot>) -> String {
    let Some(panel) = panel else {
        return format!("{PANEL_UNAVAILABLE}\n");
    };

    let rows: Vec<String> = panel
        .regions
        .iter()
        .map(|region| {
            let mark = if region.completed() { "[x]" } else { "[ ]" };
            format!("{mark} {}", region.name)
        })
        .collect();

    let mut out = String::new();
    writeln!(&mut out, "{PANEL_HEADER}").expect("writing to String cannot fail");
    for row in 0..PANEL_COLUMN_LENGTH {
        let left = rows.get(row).map(String::as_str).unwrap_or("");
        let right = rows
            .get(row + PANEL_COLUMN_LENGTH)
            .map(String::as_str)
            .unwrap_or("");
        if left.is_empty() && right.is_empty() {
            break;
        }
        let line = format!(
            " {:<width$}{}",
            fit_column(left, PANEL_COLUMN_WIDTH),
            right,
            width = PANEL_COLUMN_WIDTH
        );
        writeln!(&mut out, "{}", line.trim_end()).expect("writing to String cannot fail");
    }
    out
}

fn fit_column(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 3 {
        return value.chars().take(width).collect();
    }

    let mut out = String::with_capacity(width);
    for ch in value.chars().take(width - 3) {
        out.push(ch);
    }
    out.push_str("...");
    out
}
