// src/core/genesis_canon/genesis_canon_forge.rs

use rayon::prelude::*;
use log::{debug, info, warn};
use crate::core::error::GenesisError;
use crate::core::genesis_types::{GenesisArtifact, GenesisSpec};
use crate::core::genesis_canon::genesis_canon_payload::canonical_payload;
use crate::core::genesis_canon::genesis_canon_hasher::{ContentHasher, Sha256Hasher};

pub const GENESIS_INDEX: u64 = 0;
/// Vorgänger-Marker des Wurzelblocks.
pub const GENESIS_PREV: &str = "genesis";

/// Pipe-framed block header string that the block hash is taken over.
///
/// Block `n` of a chain carries `prev=<hash of block n-1>`; the genesis
/// block uses `index=0|prev=genesis`.
pub fn block_preimage(
    index: u64,
    prev: &str,
    merkle_root: &str,
    psz: &str,
    chain_id: &str,
    network_id: &str,
) -> String {
    format!(
        "index={}|prev={}|merkle={}|psz={}|chain={}|network={}",
        index, prev, merkle_root, psz, chain_id, network_id
    )
}

pub fn compute_artifact_with<H: ContentHasher + ?Sized>(spec: &GenesisSpec, hasher: &H) -> GenesisArtifact {
    let payload = canonical_payload(spec);
    let merkle_root = hasher.digest_hex(payload.as_bytes());
    let header = block_preimage(
        GENESIS_INDEX,
        GENESIS_PREV,
        &merkle_root,
        spec.timestamp_message(),
        spec.chain_id(),
        spec.network_id(),
    );
    let block_hash = hasher.digest_hex(header.as_bytes());

    debug!("Genesis payload for {}:\n{}", spec.chain_id(), payload);
    info!(
        "Computed genesis for {} ({}): merkle_root={}, block_hash={}",
        spec.chain_id(),
        spec.network_id(),
        merkle_root,
        block_hash
    );
    GenesisArtifact::new(spec.clone(), payload, merkle_root, block_hash)
}

#[inline]
pub fn compute_artifact(spec: &GenesisSpec) -> GenesisArtifact {
    compute_artifact_with(spec, &Sha256Hasher)
}

/// Computes all artifacts in parallel; output order follows `specs`.
pub fn compute_artifacts(specs: &[GenesisSpec]) -> Vec<GenesisArtifact> {
    specs.par_iter().map(compute_artifact).collect()
}

/// Recomputes the artifact and checks it against pinned hashes.
///
/// Hex comparison ignores case. The merkle root is checked first.
pub fn verify_artifact(
    spec: &GenesisSpec,
    expected_merkle_root: Option<&str>,
    expected_block_hash: Option<&str>,
) -> Result<GenesisArtifact, GenesisError> {
    let artifact = compute_artifact(spec);
    let checks = [
        ("merkle_root", expected_merkle_root, artifact.merkle_root()),
        ("block_hash", expected_block_hash, artifact.block_hash()),
    ];
    for (field, expected, actual) in checks {
        if let Some(expected) = expected {
            if !expected.eq_ignore_ascii_case(actual) {
                warn!("Genesis {} mismatch for {}: expected {}, computed {}", field, spec.chain_id(), expected, actual);
                return Err(GenesisError::Mismatch {
                    field,
                    expected: expected.to_string(),
                    actual: actual.to_string(),
                });
            }
        }
    }
    Ok(artifact)
}
