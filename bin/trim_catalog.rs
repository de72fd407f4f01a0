// Catalog Trimmer
// Catalog document → minimal redistributable card records

use anyhow::{Context, Result};
use envconfig::Envconfig;
use std::env;
use std::path::PathBuf;

use oracle_cache::{init_logging, trim_catalog, Config};

fn main() -> Result<()> {
    init_logging();

    let config = Config::init_from_env().context("Failed to load configuration from env")?;
    let mut args = env::args().skip(1);
    let input = args.next().map(PathBuf::from).unwrap_or(config.trim_input);
    let output = args.next().map(PathBuf::from).unwrap_or(config.trim_output);

    let count = trim_catalog(&input, &output, &config.format)
        .with_context(|| format!("Failed to trim {}", input.display()))?;

    println!("✅ Trimmed {} cards to {}", count, output.display());

    Ok(())
}
