// src/core/genesis_canon/mod.rs
pub mod genesis_canon_payload;
pub mod genesis_canon_hasher;
pub mod genesis_canon_forge;

pub use genesis_canon_payload::canonical_payload;
pub use genesis_canon_hasher::{ContentHasher, Sha256Hasher, sha256_hex};
pub use genesis_canon_forge::{
    block_preimage,
    compute_artifact,
    compute_artifact_with,
    compute_artifacts,
    verify_artifact,
    GENESIS_INDEX,
    GENESIS_PREV,
};
