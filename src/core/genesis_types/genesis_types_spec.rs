// src/core/genesis_types/genesis_types_spec.rs

use serde::Serialize;
use crate::core::error::GenesisError;
use log::debug;

/// Eine Startzuteilung: Empfänger und Betrag in kleinsten Einheiten.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(into = "(String, u64)")]
pub struct InitialAllocation {
    recipient: String,
    amount: u64,
}

impl InitialAllocation {
    #[inline]
    pub fn new(recipient: impl Into<String>, amount: u64) -> Self {
        Self { recipient: recipient.into(), amount }
    }

    #[inline]
    pub fn recipient(&self) -> &str {
        &self.recipient
    }

    #[inline]
    pub fn amount(&self) -> u64 {
        self.amount
    }
}

impl From<InitialAllocation> for (String, u64) {
    fn from(alloc: InitialAllocation) -> Self {
        (alloc.recipient, alloc.amount)
    }
}

/// Founding parameters of one network.
///
/// Fields are private so a constructed spec cannot change underneath the
/// hashing pipeline. Seed peers and allocations keep exactly the order they
/// were given in; nothing is sorted, trimmed or deduplicated.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct GenesisSpec {
    chain_id: String,
    network_id: String,
    #[serde(rename = "psz_timestamp")]
    timestamp_message: String,
    seed_peers: Vec<String>,
    initial_allocations: Vec<InitialAllocation>,
}

impl GenesisSpec {
    pub fn new(
        chain_id: impl Into<String>,
        network_id: impl Into<String>,
        timestamp_message: impl Into<String>,
        seed_peers: Vec<String>,
        initial_allocations: Vec<InitialAllocation>,
    ) -> Result<Self, GenesisError> {
        let chain_id = chain_id.into();
        if chain_id.is_empty() {
            return Err(GenesisError::invalid_field("chain_id", "must not be empty"));
        }
        let spec = Self {
            chain_id,
            network_id: network_id.into(),
            timestamp_message: timestamp_message.into(),
            seed_peers,
            initial_allocations,
        };
        debug!(
            "GenesisSpec {}: network={}, peers={}, allocations={}",
            spec.chain_id,
            spec.network_id,
            spec.seed_peers.len(),
            spec.initial_allocations.len()
        );
        Ok(spec)
    }

    #[inline]
    pub fn chain_id(&self) -> &str {
        &self.chain_id
    }

    #[inline]
    pub fn network_id(&self) -> &str {
        &self.network_id
    }

    #[inline]
    pub fn timestamp_message(&self) -> &str {
        &self.timestamp_message
    }

    #[inline]
    pub fn seed_peers(&self) -> &[String] {
        &self.seed_peers
    }

    #[inline]
    pub fn initial_allocations(&self) -> &[InitialAllocation] {
        &self.initial_allocations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chain_id_rejected() {
        let err = GenesisSpec::new("", "mainnet", "t", vec![], vec![]).unwrap_err();
        assert_eq!(err, GenesisError::invalid_field("chain_id", "must not be empty"));
    }

    #[test]
    fn test_order_and_duplicates_preserved() {
        let peers = vec!["b:2".to_string(), "a:1".to_string(), "b:2".to_string()];
        let allocs = vec![InitialAllocation::new("zed", 5), InitialAllocation::new("amy", 0)];
        let spec = GenesisSpec::new("c", "n", "t", peers.clone(), allocs.clone()).unwrap();
        assert_eq!(spec.seed_peers(), peers.as_slice());
        assert_eq!(spec.initial_allocations(), allocs.as_slice());
    }

    #[test]
    fn test_free_text_timestamp_kept_verbatim() {
        let psz = "Feb. 16 2026 - a=b, c | https://example.org/x?y=1\n";
        let spec = GenesisSpec::new("c", "n", psz, vec![], vec![]).unwrap();
        assert_eq!(spec.timestamp_message(), psz);
    }

    #[test]
    fn test_serializes_allocations_as_pairs() {
        let spec = GenesisSpec::new("c", "n", "t", vec![], vec![InitialAllocation::new("alice", 7)]).unwrap();
        let json = serde_json::to_value(&spec).unwrap();
        assert_eq!(json["initial_allocations"], serde_json::json!([["alice", 7]]));
        assert_eq!(json["psz_timestamp"], "t");
    }
}
