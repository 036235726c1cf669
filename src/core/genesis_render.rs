// src/core/genesis_render.rs

use std::collections::BTreeMap;
use serde_json::Value;
use crate::core::error::GenesisError;
use crate::core::genesis_types::GenesisArtifact;

/// Renders artifacts as one JSON document keyed by `network_id`.
///
/// All keys come out sorted. Two artifacts with the same `network_id`
/// are rejected instead of one silently replacing the other.
pub fn render_document(artifacts: &[GenesisArtifact], pretty: bool) -> Result<String, GenesisError> {
    let mut document: BTreeMap<String, Value> = BTreeMap::new();
    for artifact in artifacts {
        let network = artifact.spec().network_id().to_string();
        if document.contains_key(&network) {
            return Err(GenesisError::DuplicateNetwork(network));
        }
        document.insert(network, artifact.to_sorted_json()?);
    }
    let rendered = if pretty {
        serde_json::to_string_pretty(&document)?
    } else {
        serde_json::to_string(&document)?
    };
    Ok(rendered)
}
