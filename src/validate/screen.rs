//! Screen-local structure: layout, children, terminal footer, data schema, sensitive fields.

use std::collections::HashSet;

use serde_json::{Map, Value};

use super::component::validate_component;
use super::result::ValidationResult;
use super::rule_table::PlatformVersion;
use crate::error::Diagnostic;

/// The only layout kind the runtime supports.
pub const SINGLE_COLUMN_LAYOUT: &str = "SingleColumnLayout";
pub const MAX_COMPONENTS_PER_SCREEN: usize = 50;

/// Extract a screen's id, or the error explaining why it has none.
///
/// A screen without a usable id is skipped entirely by the orchestrator.
pub fn screen_id(screen: &Value, index: usize) -> Result<&str, Diagnostic> {
    let Some(obj) = screen.as_object() else {
        return Err(Diagnostic::error(
            "S001",
            format!("Screen {} is not an object", index),
            None,
        ));
    };
    match obj.get("id") {
        None | Some(Value::Null) => Err(Diagnostic::error(
            "S002",
            format!("Screen {} missing required property: id", index),
            None,
        )),
        Some(Value::String(id)) if id.is_empty() => Err(Diagnostic::error(
            "S002",
            format!("Screen {} missing required property: id", index),
            None,
        )),
        Some(Value::String(id)) => Ok(id.as_str()),
        Some(_) => Err(Diagnostic::error(
            "S003",
            format!("Screen {}: id must be string", index),
            None,
        )),
    }
}

/// Validate everything inside one screen except id uniqueness.
pub fn validate_screen(
    screen: &Map<String, Value>,
    screen_id: &str,
    flow_version: Option<PlatformVersion>,
) -> ValidationResult {
    let mut result = ValidationResult::new();

    if let Some(children) = layout_children(screen, screen_id, &mut result) {
        if children.len() > MAX_COMPONENTS_PER_SCREEN {
            result.error(
                "S009",
                format!(
                    "Screen '{}': maximum {} components per screen, got {}",
                    screen_id,
                    MAX_COMPONENTS_PER_SCREEN,
                    children.len()
                ),
                Some(screen_id),
            );
        }

        let field_names = validate_children(children, screen_id, flow_version, &mut result);

        if screen.get("terminal").and_then(Value::as_bool) == Some(true) {
            check_terminal_footer(children, screen_id, &mut result);
        }

        if let Some(data) = screen.get("data") {
            check_data_schema(data, screen_id, &mut result);
        }

        if let Some(sensitive) = screen.get("sensitive") {
            check_sensitive(sensitive, &field_names, screen_id, &mut result);
        }
    } else if let Some(data) = screen.get("data") {
        // The schema documents the screen regardless of whether its layout is usable.
        check_data_schema(data, screen_id, &mut result);
    }

    result
}

/// Resolve the component list, or record why the layout is unusable.
fn layout_children<'a>(
    screen: &'a Map<String, Value>,
    screen_id: &str,
    result: &mut ValidationResult,
) -> Option<&'a [Value]> {
    let Some(layout) = screen.get("layout") else {
        result.error(
            "S005",
            format!("Screen '{}' missing required property: layout", screen_id),
            Some(screen_id),
        );
        return None;
    };
    let Some(layout) = layout.as_object() else {
        result.error(
            "S006",
            format!("Screen '{}': layout must be object", screen_id),
            Some(screen_id),
        );
        return None;
    };
    if layout.get("type").and_then(Value::as_str) != Some(SINGLE_COLUMN_LAYOUT) {
        result.error(
            "S007",
            format!("Screen '{}': only {} supported", screen_id, SINGLE_COLUMN_LAYOUT),
            Some(screen_id),
        );
        return None;
    }

    match layout.get("children") {
        None => Some(&[]),
        Some(Value::Array(children)) => Some(children.as_slice()),
        Some(_) => {
            result.error(
                "S008",
                format!("Screen '{}': children must be array", screen_id),
                Some(screen_id),
            );
            None
        }
    }
}

/// Run the component validator over each child and collect field names.
fn validate_children(
    children: &[Value],
    screen_id: &str,
    flow_version: Option<PlatformVersion>,
    result: &mut ValidationResult,
) -> HashSet<String> {
    let mut field_names = HashSet::new();

    for (index, child) in children.iter().enumerate() {
        result.merge(validate_component(child, screen_id, index, flow_version));

        let Some(name) = child.get("name") else {
            continue;
        };
        let name = match name {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        if field_names.contains(&name) {
            result.error(
                "S010",
                format!("Screen '{}': duplicate field name '{}'", screen_id, name),
                Some(screen_id),
            );
        } else {
            field_names.insert(name);
        }
    }

    field_names
}

fn check_terminal_footer(children: &[Value], screen_id: &str, result: &mut ValidationResult) {
    let has_footer = children
        .iter()
        .any(|c| c.get("type").and_then(Value::as_str) == Some("Footer"));
    if !has_footer {
        result.error(
            "S011",
            format!("Terminal screen '{}' must have Footer component", screen_id),
            Some(screen_id),
        );
    }
}

fn check_data_schema(data: &Value, screen_id: &str, result: &mut ValidationResult) {
    let Some(data) = data.as_object() else {
        return;
    };
    // Accept both `{ field: def }` and JSON-schema style `{ properties: { field: def } }`.
    let fields = data
        .get("properties")
        .and_then(Value::as_object)
        .unwrap_or(data);

    for (field, definition) in fields {
        let Some(definition) = definition.as_object() else {
            continue;
        };
        if !definition.contains_key("__example__") {
            result.warning(
                "W001",
                format!(
                    "Screen '{}' data field '{}': missing __example__",
                    screen_id, field
                ),
                Some(screen_id),
            );
        }
    }
}

fn check_sensitive(
    sensitive: &Value,
    field_names: &HashSet<String>,
    screen_id: &str,
    result: &mut ValidationResult,
) {
    let Some(entries) = sensitive.as_array() else {
        result.error(
            "S012",
            format!("Screen '{}': sensitive must be array", screen_id),
            Some(screen_id),
        );
        return;
    };

    for entry in entries {
        let known = entry.as_str().is_some_and(|name| field_names.contains(name));
        if !known {
            let shown = match entry {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            result.warning(
                "W002",
                format!(
                    "Screen '{}': sensitive field '{}' not found in form",
                    screen_id, shown
                ),
                Some(screen_id),
            );
        }
    }
}
