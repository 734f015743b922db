//! Diagnostic and loader error types shared across all validation stages.

use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

/// A single validation finding.
///
/// `code` is stable across releases (`F` flow, `S` screen, `C` component,
/// `R` routing, `W` warning); `message` is the human-readable text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub code: &'static str,
    pub severity: Severity,
    pub message: String,
    /// The screen the finding concerns, if any.
    pub screen_id: Option<String>,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Diagnostic {
    pub fn error(
        code: &'static str,
        message: impl Into<String>,
        screen_id: Option<&str>,
    ) -> Self {
        Diagnostic {
            code,
            severity: Severity::Error,
            message: message.into(),
            screen_id: screen_id.map(str::to_string),
        }
    }

    pub fn warning(
        code: &'static str,
        message: impl Into<String>,
        screen_id: Option<&str>,
    ) -> Self {
        Diagnostic {
            code,
            severity: Severity::Warning,
            message: message.into(),
            screen_id: screen_id.map(str::to_string),
        }
    }

    /// True when the message contains `needle`. Handy for callers matching on text.
    pub fn mentions(&self, needle: &str) -> bool {
        self.message.contains(needle)
    }
}

/// Failures that happen before the engine runs: the input could not be read or parsed.
#[derive(Error, Debug)]
pub enum FlowError {
    #[error("Failed to read flow file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse flow JSON: {0}")]
    Json(#[from] serde_json::Error),
}
