// benchmarks/genesis_bench.rs
use genesis_forge::core::testutils::generate_random_spec;
use genesis_forge::{compute_artifact, compute_artifacts};
use std::time::Instant;

#[test]
fn benchmark_parallel_genesis_throughput() {
    let _ = env_logger::builder().is_test(true).try_init();
    let spec_count = 20_000;

    let specs: Vec<_> = (0..spec_count).map(|_| generate_random_spec()).collect();
    log::info!("Generated {} random genesis specs", specs.len());

    let start = Instant::now();
    let sequential: Vec<_> = specs.iter().map(compute_artifact).collect();
    let sequential_secs = start.elapsed().as_secs_f64();

    let start = Instant::now();
    let parallel = compute_artifacts(&specs);
    let parallel_secs = start.elapsed().as_secs_f64();

    println!(
        "--- Genesis Benchmark ---\nSpecs: {}\nSequential: {:.3}s\nParallel: {:.3}s\n",
        spec_count, sequential_secs, parallel_secs
    );

    assert_eq!(sequential, parallel, "parallel run diverged from sequential run");
}
