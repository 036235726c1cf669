// src/core/genesis_config/genesis_config_networks.rs

use crate::core::error::GenesisError;
use crate::core::genesis_types::GenesisSpec;

pub const MAINNET: &str = "mainnet";
pub const TESTNET: &str = "testnet";
pub const KNOWN_NETWORKS: [&str; 2] = [MAINNET, TESTNET];

const MAINNET_PSZ: &str = "Feb. 16 2026 - 07:18 - 1771244337 - 'Europe's earnings gain pace while lofty valuations cap rewards' - https://www.reuters.com/business/finance/europes-earnings-gain-pace-while-lofty-valuations-cap-rewards-2026-02-16/";
const TESTNET_PSZ: &str = "Got Soup::P2P Tomato Soup testnet genesis | 2026-02-14";

/// Mainnet-Genesis (P2P-Port 4001).
pub fn mainnet() -> Result<GenesisSpec, GenesisError> {
    GenesisSpec::new(
        "got-soup-mainnet-v1",
        MAINNET,
        MAINNET_PSZ,
        vec!["seed.got-soup.local:4001".to_string(), "24.188.147.247:4001".to_string()],
        vec![],
    )
}

/// Testnet-Genesis (P2P-Port 14001).
pub fn testnet() -> Result<GenesisSpec, GenesisError> {
    GenesisSpec::new(
        "got-soup-testnet-v1",
        TESTNET,
        TESTNET_PSZ,
        vec!["seed.got-soup.local:14001".to_string()],
        vec![],
    )
}

pub fn preset(name: &str) -> Result<GenesisSpec, GenesisError> {
    match name.trim().to_ascii_lowercase().as_str() {
        MAINNET => mainnet(),
        TESTNET => testnet(),
        _ => Err(GenesisError::UnknownNetwork(name.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::genesis_canon::compute_artifact;

    #[test]
    fn test_testnet_matches_pinned_hashes() {
        let artifact = compute_artifact(&testnet().unwrap());
        assert_eq!(artifact.merkle_root(), "15857bf7a332e27ac17388b05300a0b3b493f0fda96e1dae3e2b9fec3fb8b6bd");
        assert_eq!(artifact.block_hash(), "ead35284e7ce7d379a08e0555e70a6e238a652e6fbdbae6a6b3fbfaf5eb4cd30");
    }

    #[test]
    fn test_mainnet_hashes() {
        let artifact = compute_artifact(&mainnet().unwrap());
        assert_eq!(artifact.merkle_root(), "a2471d6dbbdf47d3286d519c877eb41c9e95c1e260dc40940fbfc2d1bc037fb3");
        assert_eq!(artifact.block_hash(), "f4139d244257b46edef309b2dee362ed250980de99e3a43a0679f44cc7b2d978");
    }

    #[test]
    fn test_preset_lookup() {
        assert_eq!(preset(" Testnet ").unwrap(), testnet().unwrap());
        assert_eq!(preset("devnet").unwrap_err(), GenesisError::UnknownNetwork("devnet".into()));
    }
}
