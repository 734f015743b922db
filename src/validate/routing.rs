//! Routing model validation against the complete set of declared screens.
//!
//! Loops are legitimate (back navigation), so there is no cycle check.

use std::collections::HashSet;

use serde_json::Value;

use super::result::ValidationResult;

pub const MAX_ROUTES_PER_SCREEN: usize = 10;

/// Validate `routing_model`. `known_ids` must already hold every declared screen id.
pub fn validate_routing(routing_model: &Value, known_ids: &HashSet<String>) -> ValidationResult {
    let mut result = ValidationResult::new();

    let Some(routes) = routing_model.as_object() else {
        result.error("R001", "routing_model must be object", None);
        return result;
    };

    for (source, destinations) in routes {
        if !known_ids.contains(source) {
            result.error(
                "R002",
                format!("routing_model: source screen '{}' not found", source),
                Some(source.as_str()),
            );
        }

        let Some(destinations) = destinations.as_array() else {
            result.error(
                "R003",
                format!("routing_model '{}': destinations must be array", source),
                Some(source.as_str()),
            );
            continue;
        };

        if destinations.len() > MAX_ROUTES_PER_SCREEN {
            result.error(
                "R004",
                format!(
                    "routing_model '{}': exceeds {} maximum destinations ({})",
                    source,
                    MAX_ROUTES_PER_SCREEN,
                    destinations.len()
                ),
                Some(source.as_str()),
            );
        }

        for destination in destinations {
            match destination {
                Value::String(dest) if known_ids.contains(dest) => {}
                Value::String(dest) => result.error(
                    "R005",
                    format!("routing_model: destination screen '{}' not found", dest),
                    Some(source.as_str()),
                ),
                other => result.error(
                    "R006",
                    format!(
                        "routing_model '{}': destination must be string, got {}",
                        source, other
                    ),
                    Some(source.as_str()),
                ),
            }
        }
    }

    result
}
