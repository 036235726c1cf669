// src/core/mod.rs
pub mod genesis_types;
pub mod genesis_canon;
pub mod genesis_config;
pub mod genesis_render;
pub mod error;
pub mod testutils;

pub use genesis_types::{GenesisSpec, InitialAllocation, GenesisArtifact};
pub use genesis_canon::{
    canonical_payload,
    compute_artifact,
    compute_artifact_with,
    compute_artifacts,
    verify_artifact,
    ContentHasher,
    Sha256Hasher,
};
pub use genesis_config::ForgeConfig;
pub use genesis_render::render_document;
pub use error::GenesisError;

/// Resolves the configured presets into specs.
pub fn initialize_core(config: &ForgeConfig) -> Result<Vec<GenesisSpec>, GenesisError> {
    let specs = config
        .networks
        .iter()
        .map(|name| genesis_config::preset(name))
        .collect::<Result<Vec<_>, _>>()?;
    log::info!("Genesis core initialized with config: {}", config);
    Ok(specs)
}
