//! Flow validation: top-level shape → screens → routing.
//!
//! Screens are validated first because routing destinations may refer to any
//! screen in the document, including ones declared after the source. The
//! complete id set from that pass is handed to the routing stage explicitly.

pub mod component;
pub mod result;
pub mod routing;
pub mod rule_table;
pub mod screen;

use std::collections::HashSet;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::FlowError;

pub use component::validate_component;
pub use result::ValidationResult;
pub use routing::validate_routing;
pub use rule_table::{PlatformVersion, Rule, rule_for};
pub use screen::validate_screen;

/// Validate a parsed Flow document.
#[tracing::instrument(level = "debug", skip_all)]
pub fn validate_flow(flow: &Value) -> ValidationResult {
    let mut result = ValidationResult::new();

    let Some(doc) = flow.as_object() else {
        result.error(
            "F001",
            format!("Flow must be a JSON object, got {}", value_kind(flow)),
            None,
        );
        return result;
    };

    let Some((version, screens)) = check_top_level(doc, &mut result) else {
        debug!(errors = result.errors.len(), "flow rejected at top level");
        return result;
    };

    debug!(version, screens = screens.len(), "validating flow");
    let flow_version = PlatformVersion::parse(version);
    let known_ids = validate_screens(screens, flow_version, &mut result);

    if let Some(routing_model) = doc.get("routing_model") {
        result.merge(validate_routing(routing_model, &known_ids));

        if !doc.contains_key("data_api_version") {
            result.warning(
                "W003",
                "routing_model present but data_api_version missing",
                None,
            );
        }
    }

    debug!(
        errors = result.errors.len(),
        warnings = result.warnings.len(),
        "flow validation finished"
    );
    result
}

/// Parse Flow JSON text and validate it.
pub fn validate_json(json: &str) -> Result<ValidationResult, FlowError> {
    let flow = crate::parse::parse(json)?;
    Ok(validate_flow(&flow))
}

/// `version` and `screens` gate everything else. Both are reported before giving up.
fn check_top_level<'a>(
    doc: &'a Map<String, Value>,
    result: &mut ValidationResult,
) -> Option<(&'a str, &'a [Value])> {
    let version = match doc.get("version") {
        None => {
            result.error("F002", "Missing required property: version", None);
            None
        }
        Some(Value::String(v)) => Some(v.as_str()),
        Some(other) => {
            result.error(
                "F003",
                format!("version must be string, got {}", value_kind(other)),
                None,
            );
            None
        }
    };

    let screens = match doc.get("screens") {
        None => {
            result.error("F004", "Missing required property: screens", None);
            None
        }
        Some(Value::Array(screens)) if !screens.is_empty() => Some(screens.as_slice()),
        Some(_) => {
            result.error("F005", "screens must be non-empty array", None);
            None
        }
    };

    Some((version?, screens?))
}

/// Validate every screen in order, returning the set of declared ids.
fn validate_screens(
    screens: &[Value],
    flow_version: Option<PlatformVersion>,
    result: &mut ValidationResult,
) -> HashSet<String> {
    let mut known_ids = HashSet::new();

    for (index, screen) in screens.iter().enumerate() {
        let id = match screen::screen_id(screen, index) {
            Ok(id) => id,
            Err(diagnostic) => {
                result.push(diagnostic);
                continue;
            }
        };

        if !known_ids.insert(id.to_string()) {
            result.error("S004", format!("Duplicate screen ID: {}", id), Some(id));
        }

        trace!(screen = id, index, "validating screen");
        if let Some(obj) = screen.as_object() {
            result.merge(validate_screen(obj, id, flow_version));
        }
    }

    known_ids
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
