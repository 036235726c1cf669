// src/lib.rs

pub mod core;

pub use self::core::{
    initialize_core,
    canonical_payload,
    compute_artifact,
    compute_artifacts,
    verify_artifact,
    render_document,
    ForgeConfig,
    GenesisArtifact,
    GenesisError,
    GenesisSpec,
    InitialAllocation,
};
