use flow_validator::ValidationResult;
use serde_json::{Value, json};

// =============================================================================
// Document builders
// =============================================================================

/// Flow at version 7.0 with the given screens and nothing else.
pub fn flow(screens: Vec<Value>) -> Value {
    json!({ "version": "7.0", "screens": screens })
}

/// Flow with a routing model and a data API version, so W003 stays quiet.
pub fn routed_flow(screens: Vec<Value>, routing_model: Value) -> Value {
    json!({
        "version": "7.0",
        "data_api_version": "3.0",
        "routing_model": routing_model,
        "screens": screens,
    })
}

pub fn screen(id: &str, children: Vec<Value>) -> Value {
    json!({
        "id": id,
        "layout": { "type": "SingleColumnLayout", "children": children },
    })
}

pub fn terminal_screen(id: &str, children: Vec<Value>) -> Value {
    json!({
        "id": id,
        "terminal": true,
        "layout": { "type": "SingleColumnLayout", "children": children },
    })
}

/// Screen with extra top-level properties merged in (`data`, `sensitive`, ...).
pub fn screen_with(id: &str, children: Vec<Value>, extra: Value) -> Value {
    let mut s = screen(id, children);
    if let (Some(obj), Some(extra)) = (s.as_object_mut(), extra.as_object()) {
        for (k, v) in extra {
            obj.insert(k.clone(), v.clone());
        }
    }
    s
}

// =============================================================================
// Component builders
// =============================================================================

pub fn footer(label: &str) -> Value {
    json!({ "type": "Footer", "label": label })
}

pub fn heading(text: &str) -> Value {
    json!({ "type": "TextHeading", "text": text })
}

pub fn text_input(name: &str) -> Value {
    json!({ "type": "TextInput", "name": name, "label": name })
}

pub fn options(count: usize) -> Vec<Value> {
    (0..count)
        .map(|i| json!({ "id": format!("opt_{}", i), "title": format!("Option {}", i) }))
        .collect()
}

pub fn selector(component_type: &str, name: &str, source_type: &str, count: usize) -> Value {
    json!({
        "type": component_type,
        "name": name,
        "label": name,
        "data-source": { "type": source_type, "values": options(count) },
    })
}

// =============================================================================
// Assertions
// =============================================================================

pub fn assert_has_error(result: &ValidationResult, code: &str) {
    assert!(
        result.has_error(code),
        "Expected error {}, got: {:?}",
        code,
        result.errors
    );
}

pub fn assert_no_error(result: &ValidationResult, code: &str) {
    assert!(
        !result.has_error(code),
        "Did not expect error {}, but got: {:?}",
        code,
        result.errors
    );
}

pub fn assert_has_warning(result: &ValidationResult, code: &str) {
    assert!(
        result.has_warning(code),
        "Expected warning {}, got: {:?}",
        code,
        result.warnings
    );
}

pub fn assert_error_mentions(result: &ValidationResult, needle: &str) {
    assert!(
        result.errors.iter().any(|e| e.mentions(needle)),
        "Expected an error mentioning {:?}, got: {:?}",
        needle,
        result.errors
    );
}

pub fn assert_clean(result: &ValidationResult) {
    assert!(
        result.errors.is_empty() && result.warnings.is_empty(),
        "Expected no diagnostics, got errors {:?} and warnings {:?}",
        result.errors,
        result.warnings
    );
}

pub fn count_code(result: &ValidationResult, code: &str) -> usize {
    result.diagnostics().filter(|d| d.code == code).count()
}
