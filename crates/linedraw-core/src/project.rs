//! Project document interchange.
//!
//! The only interchange format is a JSON document of the shape
//! `{ "version": 1, "lines": [...] }`. Import is best-effort: a corrupt or
//! foreign payload is dropped whole and the current document stays
//! untouched.

use crate::line::Line;
use log::warn;
use serde::{Deserialize, Serialize};

/// Version tag written into exported project documents.
pub const PROJECT_VERSION: u32 = 1;

/// A serializable project document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectDocument {
    pub version: u32,
    pub lines: Vec<Line>,
}

impl ProjectDocument {
    /// Wrap a line sequence (typically `controller.lines()`) for export.
    pub fn new(lines: Vec<Line>) -> Self {
        Self {
            version: PROJECT_VERSION,
            lines,
        }
    }

    /// Serialize the document to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Best-effort import: extract the line sequence from a project document.
///
/// Accepts any JSON object with an array-shaped `lines` field whose
/// elements are line records; the `version` field is not enforced.
/// Everything else (unreadable JSON, a missing or non-array `lines`
/// field, malformed elements) yields `None` so the caller keeps its
/// current document.
pub fn parse_project(json: &str) -> Option<Vec<Line>> {
    let value: serde_json::Value = match serde_json::from_str(json) {
        Ok(value) => value,
        Err(err) => {
            warn!("ignoring unreadable project document: {err}");
            return None;
        }
    };

    let Some(lines) = value.get("lines").filter(|lines| lines.is_array()) else {
        warn!("ignoring project document without a lines array");
        return None;
    };

    match serde_json::from_value(lines.clone()) {
        Ok(lines) => Some(lines),
        Err(err) => {
            warn!("ignoring project document with malformed lines: {err}");
            None
        }
    }
}
