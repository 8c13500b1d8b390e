//! Inventory metadata field extraction.

use std::collections::HashMap;

use serde_json::{Map, Value, json};

use invtrack_core::METADATA_KEYS;

/// Pull the inventory metadata fields out of one xlogfile record and parse
/// their JSON-encoded values.
///
/// Fields that are absent or empty are skipped. A field holding invalid
/// JSON is reported in place as `{"_raw": <value>, "_error": "invalid
/// json"}` rather than failing the whole record.
pub fn extract_inventory_metadata(fields: &HashMap<String, String>) -> Map<String, Value> {
    let mut metadata = Map::new();
    for key in METADATA_KEYS {
        let Some(raw) = fields.get(key) else {
            continue;
        };
        if raw.is_empty() {
            continue;
        }
        let value = match serde_json::from_str::<Value>(raw) {
            Ok(parsed) => parsed,
            Err(_) => json!({ "_raw": raw, "_error": "invalid json" }),
        };
        metadata.insert(key.to_string(), value);
    }
    metadata
}
