//! Loading: JSON text or file → document value + routing graph view.
//!
//! The engine validates a raw `serde_json::Value` rather than typed structs so
//! that a wrongly shaped document yields diagnostics instead of a single
//! deserialization failure.

pub mod graph;

pub use graph::RoutingGraph;

use std::path::Path;

use serde_json::Value;

use crate::error::FlowError;

/// Parse Flow JSON text. Syntax errors are reported here, before validation runs.
pub fn parse(json: &str) -> Result<Value, FlowError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a Flow JSON file.
pub fn load(path: impl AsRef<Path>) -> Result<Value, FlowError> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| FlowError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse(&text)
}
