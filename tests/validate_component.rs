//! Integration tests for per-component rules (C001–C009, W004).

#[allow(dead_code)]
mod helpers;

use flow_validator::validate::{PlatformVersion, validate_component};
use helpers::*;
use serde_json::json;

fn check(component: serde_json::Value) -> flow_validator::ValidationResult {
    validate_component(&component, "SCREEN", 0, None)
}

// =============================================================================
// C001 / C002: type tag
// =============================================================================

#[test]
fn c001_missing_type_stops_further_checks() {
    let result = check(json!({ "name": "x", "text": "a".repeat(5000) }));
    assert_eq!(result.errors.len(), 1);
    assert_has_error(&result, "C001");
    assert_error_mentions(&result, "missing type");
}

#[test]
fn c001_non_object_component() {
    let result = check(json!("TextBody"));
    assert_has_error(&result, "C001");
}

#[test]
fn c002_unknown_type() {
    let result = check(json!({ "type": "Carousel", "text": "hi" }));
    assert_eq!(result.errors.len(), 1);
    assert_has_error(&result, "C002");
    assert_error_mentions(&result, "unknown component type 'Carousel'");
}

#[test]
fn type_tags_are_case_sensitive() {
    let result = check(json!({ "type": "footer", "label": "Go" }));
    assert_has_error(&result, "C002");
}

// =============================================================================
// C003: required properties
// =============================================================================

#[test]
fn c003_one_error_per_missing_key() {
    let result = check(json!({ "type": "OptIn" }));
    assert_eq!(count_code(&result, "C003"), 2);
    assert_error_mentions(&result, "missing required property 'name'");
    assert_error_mentions(&result, "missing required property 'label'");

    let result = check(json!({ "type": "Switch", "value": "${form.x}" }));
    assert_eq!(count_code(&result, "C003"), 1);
    assert_error_mentions(&result, "'cases'");
}

#[test]
fn every_known_type_with_requirements_met_is_clean() {
    let components = vec![
        json!({ "type": "TextSubheading", "text": "Sub" }),
        json!({ "type": "TextCaption", "text": "Caption" }),
        json!({ "type": "RichText", "text": "# Title" }),
        json!({ "type": "TextArea", "name": "notes" }),
        json!({ "type": "RadioButtonsGroup", "name": "r", "data-source": { "type": "static", "values": options(2) } }),
        json!({ "type": "DatePicker", "name": "d" }),
        json!({ "type": "CalendarPicker", "name": "c" }),
        json!({ "type": "PhotoPicker", "name": "p" }),
        json!({ "type": "DocumentPicker", "name": "doc" }),
        json!({ "type": "ImageCarousel", "images": [{ "src": "a" }] }),
        json!({ "type": "NavigationList", "name": "nav", "data-source": { "values": options(3) } }),
        json!({ "type": "ChipsSelector", "name": "chips", "data-source": { "values": options(2) } }),
        json!({ "type": "EmbeddedLink", "text": "Terms" }),
        json!({ "type": "If", "condition": "${form.a}", "then": [] }),
        json!({ "type": "Switch", "value": "${form.a}", "cases": {} }),
    ];
    for component in components {
        assert_clean(&check(component));
    }
}

// =============================================================================
// C004: length caps
// =============================================================================

#[test]
fn c004_heading_at_cap_is_valid() {
    let result = check(heading(&"a".repeat(80)));
    assert_no_error(&result, "C004");
}

#[test]
fn c004_heading_one_over_cap() {
    let result = check(heading(&"a".repeat(81)));
    assert_has_error(&result, "C004");
    assert_error_mentions(&result, "exceeds 80");
    assert_error_mentions(&result, "(81)");
}

#[test]
fn c004_counts_characters_not_bytes() {
    // 80 multi-byte characters, 240 bytes.
    let result = check(heading(&"é€".repeat(40)));
    assert_no_error(&result, "C004");
}

#[test]
fn c004_footer_label_cap() {
    assert_no_error(&check(footer(&"x".repeat(30))), "C004");
    let result = check(footer(&"x".repeat(31)));
    assert_error_mentions(&result, "label exceeds 30 characters (31)");
}

#[test]
fn c004_optin_label_and_description() {
    let result = check(json!({
        "type": "OptIn",
        "name": "terms",
        "label": "l".repeat(81),
        "description": "d".repeat(201),
    }));
    assert_eq!(count_code(&result, "C004"), 2);
    assert_error_mentions(&result, "description exceeds 200 characters (201)");
}

#[test]
fn c004_absent_text_is_empty() {
    // Missing text is a required-property error, never a length error.
    let result = check(json!({ "type": "TextBody" }));
    assert_has_error(&result, "C003");
    assert_no_error(&result, "C004");
}

#[test]
fn c004_embedded_link_cap() {
    let result = check(json!({ "type": "EmbeddedLink", "text": "x".repeat(26) }));
    assert_error_mentions(&result, "exceeds 25");
}

// =============================================================================
// C005: option counts
// =============================================================================

#[test]
fn c005_empty_values_always_error() {
    let result = check(selector("Dropdown", "country", "static", 0));
    assert_eq!(count_code(&result, "C005"), 1);
    assert_error_mentions(&result, "no options provided");
}

#[test]
fn c005_checkbox_bounds() {
    assert_no_error(&check(selector("CheckboxGroup", "c", "static", 20)), "C005");
    let result = check(selector("CheckboxGroup", "c", "static", 21));
    assert_error_mentions(&result, "exceeds 20 options (21)");
}

#[test]
fn c005_chips_selector_minimum() {
    let result = check(selector("ChipsSelector", "chips", "static", 1));
    assert_error_mentions(&result, "below minimum 2 options (1)");
}

#[test]
fn c005_dropdown_static_and_dynamic_caps() {
    assert_no_error(&check(selector("Dropdown", "d", "static", 200)), "C005");
    let result = check(selector("Dropdown", "d", "static", 201));
    assert_error_mentions(&result, "static data-source exceeds 200 options (201)");

    assert_no_error(&check(selector("Dropdown", "d", "dynamic", 100)), "C005");
    let result = check(selector("Dropdown", "d", "dynamic", 101));
    assert_error_mentions(&result, "dynamic data-source exceeds 100 options (101)");
}

#[test]
fn c005_binding_data_source_not_counted() {
    let result = check(json!({
        "type": "RadioButtonsGroup",
        "name": "r",
        "data-source": "${data.options}",
    }));
    assert_clean(&result);
}

// =============================================================================
// C006 / C007 / C008 / C009: special cases
// =============================================================================

#[test]
fn c006_text_input_type() {
    assert_clean(&check(json!({ "type": "TextInput", "name": "p", "input-type": "passcode" })));
    // Absent input-type defaults to "text".
    assert_clean(&check(text_input("n")));

    let result = check(json!({ "type": "TextInput", "name": "n", "input-type": "url" }));
    assert_has_error(&result, "C006");
    assert_error_mentions(&result, "invalid input-type 'url'");
}

#[test]
fn c006_calendar_mode() {
    assert_clean(&check(json!({ "type": "CalendarPicker", "name": "c", "mode": "range" })));
    let result = check(json!({ "type": "CalendarPicker", "name": "c", "mode": "multi" }));
    assert_error_mentions(&result, "invalid mode 'multi'");
}

#[test]
fn c007_image_requires_https() {
    assert_clean(&check(json!({ "type": "Image", "src": "https://cdn.example.com/a.png" })));

    let result = check(json!({ "type": "Image", "src": "http://cdn.example.com/a.png" }));
    assert_has_error(&result, "C007");

    // Prefix match is case-sensitive.
    let result = check(json!({ "type": "Image", "src": "HTTPS://cdn.example.com/a.png" }));
    assert_has_error(&result, "C007");
}

#[test]
fn c007_missing_src_is_only_a_required_error() {
    let result = check(json!({ "type": "Image" }));
    assert_has_error(&result, "C003");
    assert_no_error(&result, "C007");
}

#[test]
fn c008_max_length_must_be_positive() {
    let ok = json!({ "type": "TextArea", "name": "t", "max-length": 600 });
    assert_clean(&check(ok));
    let bound = json!({ "type": "TextInput", "name": "t", "max-length": "${data.max}" });
    assert_clean(&check(bound));

    for bad in [json!(0), json!(-3), json!("ten"), json!(2.5)] {
        let result = check(json!({ "type": "TextInput", "name": "t", "max-length": bad }));
        assert_has_error(&result, "C008");
    }
}

#[test]
fn c009_image_carousel_cap() {
    let images: Vec<_> = (0..4).map(|i| json!({ "src": format!("img{}", i) })).collect();
    let result = check(json!({ "type": "ImageCarousel", "images": images }));
    assert_error_mentions(&result, "images exceeds 3 entries (4)");
}

// =============================================================================
// W004: platform version advisory
// =============================================================================

#[test]
fn w004_newer_component_is_only_a_warning() {
    let component = json!({ "type": "CalendarPicker", "name": "c" });
    let result = validate_component(&component, "S", 0, Some(PlatformVersion::new(5, 0)));
    assert!(result.is_valid());
    assert_has_warning(&result, "W004");
    assert!(result.warnings[0].mentions("6.1+"));

    let result = validate_component(&component, "S", 0, Some(PlatformVersion::new(6, 1)));
    assert!(result.warnings.is_empty());
}

#[test]
fn messages_name_screen_and_type() {
    let result = validate_component(&heading(&"a".repeat(81)), "WELCOME", 3, None);
    let err = &result.errors[0];
    assert_eq!(err.screen_id.as_deref(), Some("WELCOME"));
    assert!(err.message.starts_with("Screen 'WELCOME' TextHeading:"), "{}", err);
    assert_eq!(err.to_string(), format!("[C004] {}", err.message));
}
