// src/main.rs

use std::path::PathBuf;
use clap::Parser;
use genesis_forge::core::genesis_config::{load_spec_file, preset};
use genesis_forge::{
    compute_artifacts, initialize_core, render_document, verify_artifact, ForgeConfig, GenesisError, GenesisSpec,
};

#[derive(Parser, Debug)]
#[clap(name = "genesis-forge")]
#[clap(about = "Compute genesis payload, merkle root and block hash for a network", long_about = None)]
struct Args {
    /// Built-in network preset (mainnet, testnet); repeatable
    #[clap(long)]
    network: Vec<String>,

    /// JSON genesis spec file (object or array of objects); repeatable
    #[clap(long)]
    spec: Vec<PathBuf>,

    /// Fail unless the computed merkle root equals this hex digest
    #[clap(long)]
    expect_merkle_root: Option<String>,

    /// Fail unless the computed block hash equals this hex digest
    #[clap(long)]
    expect_block_hash: Option<String>,

    /// Print single-line JSON
    #[clap(long, default_value_t = false)]
    compact: bool,
}

fn select_specs(args: &Args) -> Result<Vec<GenesisSpec>, GenesisError> {
    if args.network.is_empty() && args.spec.is_empty() {
        // Ohne Auswahl: GENESIS_NETWORKS oder beide Presets
        return initialize_core(&ForgeConfig::from_env());
    }
    let mut specs = args
        .network
        .iter()
        .map(|name| preset(name))
        .collect::<Result<Vec<_>, _>>()?;
    for path in &args.spec {
        specs.extend(load_spec_file(path)?);
    }
    Ok(specs)
}

fn run(args: &Args) -> Result<String, GenesisError> {
    let specs = select_specs(args)?;
    let artifacts = if args.expect_merkle_root.is_some() || args.expect_block_hash.is_some() {
        if specs.len() != 1 {
            return Err(GenesisError::invalid_field(
                "expect",
                format!("pinned hashes need exactly one selected spec, got {}", specs.len()),
            ));
        }
        vec![verify_artifact(
            &specs[0],
            args.expect_merkle_root.as_deref(),
            args.expect_block_hash.as_deref(),
        )?]
    } else {
        compute_artifacts(&specs)
    };
    render_document(&artifacts, !args.compact)
}

fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(document) => println!("{}", document),
        Err(e) => {
            eprintln!("Failed to compute genesis: {}", e);
            std::process::exit(1);
        }
    }
}
