//! Per-component validation driven by the rule table.

use serde_json::{Map, Value};

use super::result::ValidationResult;
use super::rule_table::{PlatformVersion, Rule, rule_for};

/// Dropdown option caps depend on where the options come from.
pub const DROPDOWN_MAX_STATIC: usize = 200;
pub const DROPDOWN_MAX_DYNAMIC: usize = 100;

const HTTPS_PREFIX: &str = "https://";

/// The component being checked, for message prefixes.
struct Subject<'a> {
    screen_id: &'a str,
    component_type: &'a str,
    props: &'a Map<String, Value>,
    rule: &'static Rule,
}

impl Subject<'_> {
    fn error(&self, result: &mut ValidationResult, code: &'static str, detail: String) {
        result.error(
            code,
            format!("Screen '{}' {}: {}", self.screen_id, self.component_type, detail),
            Some(self.screen_id),
        );
    }
}

/// Validate one component. `index` is its position among the screen's children.
///
/// Never fails: every problem becomes a diagnostic in the returned result.
/// `flow_version` enables the advisory platform-version warning when known.
pub fn validate_component(
    component: &Value,
    screen_id: &str,
    index: usize,
    flow_version: Option<PlatformVersion>,
) -> ValidationResult {
    let mut result = ValidationResult::new();

    let Some(props) = component.as_object() else {
        result.error(
            "C001",
            format!("Screen '{}' component {}: component is not an object", screen_id, index),
            Some(screen_id),
        );
        return result;
    };

    let Some(component_type) = props.get("type").and_then(Value::as_str) else {
        result.error(
            "C001",
            format!("Screen '{}' component {}: missing type", screen_id, index),
            Some(screen_id),
        );
        return result;
    };

    let Some(rule) = rule_for(component_type) else {
        result.error(
            "C002",
            format!(
                "Screen '{}' component {}: unknown component type '{}'",
                screen_id, index, component_type
            ),
            Some(screen_id),
        );
        return result;
    };

    let subject = Subject {
        screen_id,
        component_type,
        props,
        rule,
    };

    check_required(&subject, &mut result);
    check_lengths(&subject, &mut result);
    check_options(&subject, &mut result);
    check_images(&subject, &mut result);
    check_image_source(&subject, &mut result);
    check_enumerations(&subject, &mut result);
    check_max_length(&subject, &mut result);
    check_platform_version(&subject, flow_version, &mut result);

    result
}

fn check_required(subject: &Subject<'_>, result: &mut ValidationResult) {
    for key in subject.rule.requires {
        if !subject.props.contains_key(*key) {
            subject.error(result, "C003", format!("missing required property '{}'", key));
        }
    }
}

fn check_lengths(subject: &Subject<'_>, result: &mut ValidationResult) {
    for (key, cap) in subject.rule.length_caps() {
        let length = match subject.props.get(key) {
            None => 0,
            Some(Value::String(s)) => s.chars().count(),
            // Non-string values are bindings or objects; nothing to measure.
            Some(_) => continue,
        };
        if length > cap {
            subject.error(
                result,
                "C004",
                format!("{} exceeds {} characters ({})", key, cap, length),
            );
        }
    }
}

fn check_options(subject: &Subject<'_>, result: &mut ValidationResult) {
    let Some(source) = subject.props.get("data-source").and_then(Value::as_object) else {
        return;
    };
    let Some(values) = source.get("values").and_then(Value::as_array) else {
        return;
    };

    let count = values.len();
    if count == 0 {
        subject.error(result, "C005", "no options provided".into());
        return;
    }

    if let Some(min) = subject.rule.min_options {
        if count < min {
            subject.error(
                result,
                "C005",
                format!("below minimum {} options ({})", min, count),
            );
        }
    }
    if let Some(max) = subject.rule.max_options {
        if count > max {
            subject.error(result, "C005", format!("exceeds {} options ({})", max, count));
        }
    }

    if subject.component_type == "Dropdown" {
        let dynamic = source.get("type").and_then(Value::as_str) == Some("dynamic");
        let (kind, cap) = if dynamic {
            ("dynamic", DROPDOWN_MAX_DYNAMIC)
        } else {
            ("static", DROPDOWN_MAX_STATIC)
        };
        if count > cap {
            subject.error(
                result,
                "C005",
                format!("{} data-source exceeds {} options ({})", kind, cap, count),
            );
        }
    }
}

fn check_images(subject: &Subject<'_>, result: &mut ValidationResult) {
    let Some(cap) = subject.rule.max_images else {
        return;
    };
    let Some(images) = subject.props.get("images").and_then(Value::as_array) else {
        return;
    };
    if images.len() > cap {
        subject.error(
            result,
            "C009",
            format!("images exceeds {} entries ({})", cap, images.len()),
        );
    }
}

fn check_image_source(subject: &Subject<'_>, result: &mut ValidationResult) {
    if subject.component_type != "Image" {
        return;
    }
    match subject.props.get("src") {
        // Absence is already reported as a missing required property.
        None => {}
        Some(Value::String(src)) if src.starts_with(HTTPS_PREFIX) => {}
        Some(Value::String(src)) => {
            subject.error(result, "C007", format!("src must be an HTTPS URL, got '{}'", src));
        }
        Some(other) => {
            subject.error(result, "C007", format!("src must be an HTTPS URL, got {}", other));
        }
    }
}

fn check_enumerations(subject: &Subject<'_>, result: &mut ValidationResult) {
    for enumeration in subject.rule.allowed_values {
        let value = match subject.props.get(enumeration.property) {
            None => enumeration.default,
            Some(Value::String(s)) => s.as_str(),
            Some(other) => {
                subject.error(
                    result,
                    "C006",
                    format!("invalid {} {}", enumeration.property, other),
                );
                continue;
            }
        };
        if !enumeration.allowed.contains(&value) {
            subject.error(
                result,
                "C006",
                format!(
                    "invalid {} '{}' (expected one of: {})",
                    enumeration.property,
                    value,
                    enumeration.allowed.join(", ")
                ),
            );
        }
    }
}

fn check_max_length(subject: &Subject<'_>, result: &mut ValidationResult) {
    if !subject.rule.positive_max_length {
        return;
    }
    let Some(value) = subject.props.get("max-length") else {
        return;
    };
    let valid = match value {
        Value::Number(n) => n.as_u64().is_some_and(|n| n >= 1),
        Value::String(s) => is_binding(s),
        _ => false,
    };
    if !valid {
        subject.error(result, "C008", format!("invalid max-length {}", value));
    }
}

fn check_platform_version(
    subject: &Subject<'_>,
    flow_version: Option<PlatformVersion>,
    result: &mut ValidationResult,
) {
    let (Some(required), Some(declared)) = (subject.rule.min_platform_version, flow_version)
    else {
        return;
    };
    if declared < required {
        result.warning(
            "W004",
            format!(
                "Screen '{}' {}: requires Flow JSON version {}+, flow declares {}",
                subject.screen_id, subject.component_type, required, declared
            ),
            Some(subject.screen_id),
        );
    }
}

/// `${data.field}` style references are resolved at runtime.
fn is_binding(value: &str) -> bool {
    value.starts_with("${") && value.ends_with('}')
}
