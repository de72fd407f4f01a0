// Legal Catalog Builder
// Full printing catalog → latest legal printing per card name

use anyhow::{Context, Result};
use envconfig::Envconfig;
use std::env;
use std::path::PathBuf;

use oracle_cache::{build_legal_catalog, init_logging, Config};

fn main() -> Result<()> {
    init_logging();

    let config = Config::init_from_env().context("Failed to load configuration from env")?;
    let mut args = env::args().skip(1);
    let input = args.next().map(PathBuf::from).unwrap_or(config.default_cards);
    let output = args.next().map(PathBuf::from).unwrap_or(config.legal_output);

    let count = build_legal_catalog(&input, &output, &config.format)
        .with_context(|| format!("Failed to reduce {}", input.display()))?;

    if count == 0 {
        eprintln!("⚠️  No {}-legal cards found in {}", config.format, input.display());
    }
    println!("Wrote {} {}-legal cards.", count, config.format);

    Ok(())
}
