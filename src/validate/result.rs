//! Error/warning accumulator returned by every validation stage.

use serde::Serialize;

use crate::error::{Diagnostic, Severity};

/// Ordered errors (blocking) and warnings (advisory) from one validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationResult {
    pub errors: Vec<Diagnostic>,
    pub warnings: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// A flow is valid when no errors were recorded. Warnings never count.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(
        &mut self,
        code: &'static str,
        message: impl Into<String>,
        screen_id: Option<&str>,
    ) {
        self.errors.push(Diagnostic::error(code, message, screen_id));
    }

    pub fn warning(
        &mut self,
        code: &'static str,
        message: impl Into<String>,
        screen_id: Option<&str>,
    ) {
        self.warnings.push(Diagnostic::warning(code, message, screen_id));
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        match diagnostic.severity {
            Severity::Error => self.errors.push(diagnostic),
            Severity::Warning => self.warnings.push(diagnostic),
        }
    }

    /// Append another stage's findings after ours, keeping document order.
    pub fn merge(&mut self, other: ValidationResult) {
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }

    pub fn has_error(&self, code: &str) -> bool {
        self.errors.iter().any(|d| d.code == code)
    }

    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|d| d.code == code)
    }

    /// All diagnostics, errors first.
    pub fn diagnostics(&self) -> impl Iterator<Item = &Diagnostic> {
        self.errors.iter().chain(self.warnings.iter())
    }
}
