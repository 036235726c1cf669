// src/core/genesis_canon/genesis_canon_payload.rs

use crate::core::genesis_types::GenesisSpec;

/// Platzhalter für eine leere Zuteilungsliste.
pub const NO_ALLOCATIONS: &str = "none";

/// Renders the canonical payload: five `key=value` lines joined by `\n`,
/// no trailing newline.
///
/// Values are written unescaped. An empty allocation list renders as
/// `none`, an empty peer list as an empty string; hashes pinned by running
/// networks depend on both.
pub fn canonical_payload(spec: &GenesisSpec) -> String {
    let allocations = if spec.initial_allocations().is_empty() {
        NO_ALLOCATIONS.to_string()
    } else {
        spec.initial_allocations()
            .iter()
            .map(|alloc| format!("{}:{}", alloc.recipient(), alloc.amount()))
            .collect::<Vec<_>>()
            .join(",")
    };

    [
        format!("chain_id={}", spec.chain_id()),
        format!("network={}", spec.network_id()),
        format!("pszTimestamp={}", spec.timestamp_message()),
        format!("seed_peers={}", spec.seed_peers().join(",")),
        format!("initial_allocations={}", allocations),
    ]
    .join("\n")
}
