// src/core/genesis_types/genesis_types_artifact.rs

use serde::Serialize;
use crate::core::genesis_types::genesis_types_spec::GenesisSpec;

/// Ergebnis einer Genesis-Berechnung: Spec plus Payload und beide Hashes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct GenesisArtifact {
    #[serde(flatten)]
    spec: GenesisSpec,
    payload: String,
    merkle_root: String,
    block_hash: String,
}

impl GenesisArtifact {
    pub(crate) fn new(spec: GenesisSpec, payload: String, merkle_root: String, block_hash: String) -> Self {
        Self { spec, payload, merkle_root, block_hash }
    }

    #[inline]
    pub fn spec(&self) -> &GenesisSpec {
        &self.spec
    }

    #[inline]
    pub fn payload(&self) -> &str {
        &self.payload
    }

    #[inline]
    pub fn merkle_root(&self) -> &str {
        &self.merkle_root
    }

    #[inline]
    pub fn block_hash(&self) -> &str {
        &self.block_hash
    }

    /// JSON value with every object key in sorted order.
    pub fn to_sorted_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        // serde_json::Map ist ohne "preserve_order" eine BTreeMap
        serde_json::to_value(self)
    }
}
