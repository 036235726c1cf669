// src/core/genesis_types/mod.rs
pub mod genesis_types_spec;
pub mod genesis_types_artifact;

pub use genesis_types_spec::{GenesisSpec, InitialAllocation};
pub use genesis_types_artifact::GenesisArtifact;
