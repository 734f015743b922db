//! WASM entry points for browser use.

use serde_json::Value;
use wasm_bindgen::prelude::*;

use crate::error::Diagnostic;
use crate::validate::{self, ValidationResult};

/// Validate a Flow JSON string.
/// Returns `{ status: "checked", valid, diagnostics }`, or
/// `{ status: "parseError", message }` when the JSON is malformed.
#[wasm_bindgen]
pub fn validate_flow(json: &str) -> JsValue {
    let result = validate_flow_inner(json);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_flow_inner(json: &str) -> ValidateOutcome {
    match validate::validate_json(json) {
        Ok(result) => ValidateOutcome::from(result),
        Err(e) => ValidateOutcome::ParseError {
            message: e.to_string(),
        },
    }
}

/// Validate a single component JSON as if it were child `index` of `screen_id`.
/// Returns a JSON array of diagnostic objects.
#[wasm_bindgen]
pub fn validate_component(component_json: &str, screen_id: &str, index: usize) -> JsValue {
    let result = validate_component_inner(component_json, screen_id, index);
    serde_wasm_bindgen::to_value(&result).unwrap_or(JsValue::NULL)
}

fn validate_component_inner(
    component_json: &str,
    screen_id: &str,
    index: usize,
) -> Vec<DiagnosticDto> {
    let component = match serde_json::from_str::<Value>(component_json) {
        Ok(c) => c,
        Err(e) => {
            return vec![DiagnosticDto {
                code: "P001".into(),
                severity: "error".into(),
                message: format!("Failed to parse component JSON: {}", e),
                screen_id: None,
            }];
        }
    };

    let result = validate::validate_component(&component, screen_id, index, None);
    result
        .errors
        .into_iter()
        .chain(result.warnings)
        .map(DiagnosticDto::from)
        .collect()
}

/// Every component type the validator recognises.
#[wasm_bindgen]
pub fn component_types() -> JsValue {
    let types: Vec<&str> = validate::rule_table::component_types().collect();
    serde_wasm_bindgen::to_value(&types).unwrap_or(JsValue::NULL)
}

// ---------------------------------------------------------------------------
// DTOs for serialization to JS
// ---------------------------------------------------------------------------

#[derive(Debug, serde::Serialize, serde::Deserialize)]
struct DiagnosticDto {
    code: String,
    severity: String,
    message: String,
    screen_id: Option<String>,
}

impl From<Diagnostic> for DiagnosticDto {
    fn from(d: Diagnostic) -> Self {
        DiagnosticDto {
            code: d.code.to_string(),
            severity: d.severity.to_string(),
            message: d.message,
            screen_id: d.screen_id,
        }
    }
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(tag = "status")]
enum ValidateOutcome {
    #[serde(rename = "checked")]
    Checked {
        valid: bool,
        diagnostics: Vec<DiagnosticDto>,
    },
    #[serde(rename = "parseError")]
    ParseError { message: String },
}

impl From<ValidationResult> for ValidateOutcome {
    fn from(result: ValidationResult) -> Self {
        let valid = result.is_valid();
        let diagnostics = result
            .errors
            .into_iter()
            .chain(result.warnings)
            .map(DiagnosticDto::from)
            .collect();
        ValidateOutcome::Checked { valid, diagnostics }
    }
}
