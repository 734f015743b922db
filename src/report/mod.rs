//! Rendering a `ValidationResult` for people (text) or tools (JSON).

pub mod writer;

use serde::Serialize;

use crate::error::Diagnostic;
use crate::validate::ValidationResult;
use writer::ReportWriter;

pub const ERROR_GLYPH: &str = "✗";
pub const WARNING_GLYPH: &str = "⚠";
pub const VALID_GLYPH: &str = "✓";

/// Plain-text report: errors, then warnings, then a one-line verdict.
pub fn render_text(result: &ValidationResult) -> String {
    let mut w = ReportWriter::new();

    section(&mut w, "Errors", ERROR_GLYPH, &result.errors);
    section(&mut w, "Warnings", WARNING_GLYPH, &result.warnings);

    let verdict = if !result.is_valid() {
        format!("{} Validation failed", ERROR_GLYPH)
    } else if result.warnings.is_empty() {
        format!("{} Flow is valid", VALID_GLYPH)
    } else {
        format!("{} Flow is valid (with warnings)", VALID_GLYPH)
    };
    w.line(&verdict);

    w.finish()
}

fn section(w: &mut ReportWriter, title: &str, glyph: &str, diagnostics: &[Diagnostic]) {
    if diagnostics.is_empty() {
        return;
    }
    w.line(&format!("{} ({}):", title, diagnostics.len()));
    w.indent();
    for d in diagnostics {
        w.line(&format!("{} {}", glyph, d));
    }
    w.dedent();
    w.blank();
}

#[derive(Serialize)]
struct JsonReport<'a> {
    valid: bool,
    errors: &'a [Diagnostic],
    warnings: &'a [Diagnostic],
}

/// Pretty-printed JSON report: `{ "valid", "errors", "warnings" }`.
pub fn render_json(result: &ValidationResult) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&JsonReport {
        valid: result.is_valid(),
        errors: &result.errors,
        warnings: &result.warnings,
    })
}
