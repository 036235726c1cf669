// src/core/testutils.rs
use crate::core::{GenesisSpec, InitialAllocation};
use rand::{Rng, thread_rng};
use rand::distributions::Alphanumeric;

fn random_word<R: Rng>(rng: &mut R, len: usize) -> String {
    rng.sample_iter(&Alphanumeric).take(len).map(char::from).collect()
}

pub fn spec(chain_id: &str, network_id: &str, psz: &str, peers: &[&str], allocs: &[(&str, u64)]) -> GenesisSpec {
    GenesisSpec::new(
        chain_id,
        network_id,
        psz,
        peers.iter().map(|p| p.to_string()).collect(),
        allocs.iter().map(|(who, amount)| InitialAllocation::new(*who, *amount)).collect(),
    )
    .expect("test spec must have a non-empty chain_id")
}

pub fn generate_random_spec() -> GenesisSpec {
    let mut rng = thread_rng();
    let peer_count = rng.gen_range(0..5);
    let alloc_count = rng.gen_range(0..5);
    GenesisSpec::new(
        format!("chain-{}", random_word(&mut rng, 8)),
        random_word(&mut rng, 6),
        format!("{} | {}", random_word(&mut rng, 20), rng.gen::<u32>()),
        (0..peer_count)
            .map(|i| format!("{}.seed:{}", random_word(&mut rng, 5), 4000 + i))
            .collect(),
        (0..alloc_count)
            .map(|i| InitialAllocation::new(format!("id{}-{}", i, random_word(&mut rng, 4)), rng.gen_range(0..1_000_000)))
            .collect(),
    )
    .expect("generated chain_id is never empty")
}

/// Single-field variations of `base`; each must differ from `base` in its payload.
pub fn single_field_variants(base: &GenesisSpec) -> Vec<(&'static str, GenesisSpec)> {
    let rebuild = |chain: String, network: String, psz: String, peers: Vec<String>, allocs: Vec<InitialAllocation>| {
        GenesisSpec::new(chain, network, psz, peers, allocs).expect("variant keeps a non-empty chain_id")
    };
    let chain = base.chain_id().to_string();
    let network = base.network_id().to_string();
    let psz = base.timestamp_message().to_string();
    let peers = base.seed_peers().to_vec();
    let allocs = base.initial_allocations().to_vec();

    let mut variants = vec![
        ("chain_id", rebuild(format!("{}x", chain), network.clone(), psz.clone(), peers.clone(), allocs.clone())),
        ("network_id", rebuild(chain.clone(), format!("{}x", network), psz.clone(), peers.clone(), allocs.clone())),
        ("timestamp_message", rebuild(chain.clone(), network.clone(), format!("{}x", psz), peers.clone(), allocs.clone())),
    ];

    let mut more_peers = peers.clone();
    more_peers.push("extra.seed:9999".to_string());
    variants.push(("seed_peers", rebuild(chain.clone(), network.clone(), psz.clone(), more_peers, allocs.clone())));

    let mut more_allocs = allocs.clone();
    more_allocs.push(InitialAllocation::new("extra", 1));
    variants.push(("initial_allocations", rebuild(chain.clone(), network.clone(), psz.clone(), peers.clone(), more_allocs)));

    if let Some(first) = allocs.first() {
        let mut bumped = allocs.clone();
        bumped[0] = InitialAllocation::new(first.recipient(), first.amount() + 1);
        variants.push(("allocation_amount", rebuild(chain.clone(), network.clone(), psz.clone(), peers.clone(), bumped)));
    }
    if peers.len() >= 2 && peers.first() != peers.last() {
        let mut reversed = peers.clone();
        reversed.reverse();
        variants.push(("seed_peer_order", rebuild(chain.clone(), network.clone(), psz.clone(), reversed, allocs.clone())));
    }
    if allocs.len() >= 2 && allocs.first() != allocs.last() {
        let mut reversed = allocs.clone();
        reversed.reverse();
        variants.push(("allocation_order", rebuild(chain, network, psz, peers, reversed)));
    }
    variants
}
