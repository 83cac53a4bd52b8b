//! JSON rendering of process lists.

use crate::types::{ProcError, ProcessEntry};

/// Renders entries as a JSON array indented by two spaces.
///
/// An empty list renders as `[]`.
pub fn to_json(entries: &[ProcessEntry]) -> Result<String, ProcError> {
    Ok(serde_json::to_string_pretty(entries)?)
}
