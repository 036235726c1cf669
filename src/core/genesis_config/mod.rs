// src/core/genesis_config/mod.rs

use serde::{Serialize, Deserialize};
use std::fmt;

pub mod genesis_config_networks;
pub mod genesis_config_file;

pub use genesis_config_networks::*;
pub use genesis_config_file::*;

/// Umgebungsvariable mit der Preset-Auswahl, z. B. `mainnet,testnet`.
pub const NETWORKS_ENV: &str = "GENESIS_NETWORKS";

/// Laufzeit-Konfiguration des Genesis-Tools.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ForgeConfig {
    pub networks: Vec<String>,
}

impl Default for ForgeConfig {
    fn default() -> Self {
        ForgeConfig {
            networks: KNOWN_NETWORKS.iter().map(|n| n.to_string()).collect(),
        }
    }
}

impl ForgeConfig {
    /// Defaults, overridden by `GENESIS_NETWORKS` when it is set and non-blank.
    pub fn from_env() -> Self {
        Self::from_networks_var(std::env::var(NETWORKS_ENV).ok().as_deref())
    }

    fn from_networks_var(var: Option<&str>) -> Self {
        let networks: Vec<String> = var
            .unwrap_or_default()
            .split(',')
            .map(|n| n.trim().to_string())
            .filter(|n| !n.is_empty())
            .collect();
        if networks.is_empty() {
            ForgeConfig::default()
        } else {
            ForgeConfig { networks }
        }
    }
}

impl fmt::Display for ForgeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Networks: {}", self.networks.join(","))
    }
}
