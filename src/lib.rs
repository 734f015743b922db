pub mod error;
pub mod parse;
pub mod report;
pub mod validate;
pub mod wasm;

pub use error::{Diagnostic, FlowError, Severity};
pub use validate::{ValidationResult, validate_flow, validate_json};
