//! Writes the dirty customer CSV used to exercise deduplication and
//! validation in downstream pipelines.
//!
//! ```bash
//! cargo run --bin generate-customers -- --output nifi_data/clientes.csv
//! ```

use anyhow::Context;
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use sensor_producer::customers::{self, DEFAULT_OUTPUT, DEFAULT_RECORDS};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "generate-customers")]
#[command(about = "Generate a customer CSV with duplicated and malformed rows", long_about = None)]
struct Args {
    #[arg(short, long, value_name = "FILE", default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    #[arg(short = 'n', long, default_value_t = DEFAULT_RECORDS, help = "Number of base rows")]
    records: usize,

    #[arg(long, help = "Fixed RNG seed for reproducible output")]
    seed: Option<u64>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let records = customers::generate_dataset(&mut rng, args.records);
    customers::write_file(&args.output, &records)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    Ok(())
}
