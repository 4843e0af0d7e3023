// src/export/json.rs
use crate::error::Result;
use crate::rider::PairSequence;

/// Key-sorted settings view as a pretty JSON object; absent values are `null`.
pub fn settings_to_json(pairs: &PairSequence) -> Result<String> {
    Ok(serde_json::to_string_pretty(&pairs.settings())?)
}

/// The pairs in sequence order as a JSON array of `{ "key", "value" }` objects.
pub fn pairs_to_json(pairs: &PairSequence) -> Result<String> {
    Ok(serde_json::to_string_pretty(pairs)?)
}
