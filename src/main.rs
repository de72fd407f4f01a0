use anyhow::{Context, Result};
use envconfig::Envconfig;
use std::env;
use std::path::Path;

use oracle_cache::io::write_json;
use oracle_cache::{build_oracle_cache, init_logging, Config, ReconciliationEngine};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: oracle-cache <out_json>");
        std::process::exit(1);
    }

    init_logging();
    run_build(Path::new(&args[1]))
}

fn run_build(out_json: &Path) -> Result<()> {
    let config = Config::init_from_env().context("Failed to load configuration from env")?;

    let engine = ReconciliationEngine::now();
    let build = build_oracle_cache(&config.owned_csv, &config.oracle_source, &engine)
        .with_context(|| {
            format!(
                "Failed to build cache from {} and {}",
                config.owned_csv.display(),
                config.oracle_source.display()
            )
        })?;

    for warning in &build.warnings {
        eprintln!("⚠️  {}", warning.message());
    }

    write_json(out_json, &build.document)
        .with_context(|| format!("Failed to write {}", out_json.display()))?;

    println!("Wrote {}: {}", out_json.display(), build.document.summary());

    Ok(())
}
