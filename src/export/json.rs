//! JSON rendering of document snapshots

use super::ExportError;
use crate::state::DocumentSnapshot;

/// Serialize a snapshot, two-space indented when `pretty`
pub fn render(snapshot: &DocumentSnapshot, pretty: bool) -> Result<String, ExportError> {
    let json = if pretty {
        serde_json::to_string_pretty(snapshot)?
    } else {
        serde_json::to_string(snapshot)?
    };
    Ok(json)
}
