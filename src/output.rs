//! JSON output contract.
//!
//! The tool always emits exactly one line of JSON on standard output:
//! either the label → score mapping, or `{"error": "<message>"}`. Both
//! success and error objects go to stdout; stderr carries diagnostics only.

use serde_json::{json, Value};

use crate::scores::Scores;

/// Render classification scores as a single-line JSON string.
#[must_use]
pub fn scores_line(scores: &Scores) -> String {
    scores.to_json().to_string()
}

/// Render an error as a single-line `{"error": "..."}` JSON string.
///
/// Serialization goes through `serde_json`, so arbitrary error text
/// (quotes, newlines, non-ASCII) is always escaped into valid JSON.
#[must_use]
pub fn error_line(err: &dyn std::fmt::Display) -> String {
    json!({ "error": err.to_string() }).to_string()
}

/// Parse a produced line back into a JSON value, for assertions in tests
/// and for callers embedding the tool.
///
/// # Errors
///
/// Returns an error if `line` is not valid JSON.
pub fn parse_line(line: &str) -> serde_json::Result<Value> {
    serde_json::from_str(line)
}
