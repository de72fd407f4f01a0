use envconfig::Envconfig;
use std::path::PathBuf;

/// File locations and format, read from the environment
#[derive(Envconfig, Clone, Debug)]
pub struct Config {
    /// Owned-collection CSV export
    #[envconfig(from = "OWNED_CSV", default = "Collection102125.csv")]
    pub owned_csv: PathBuf,

    /// One-record-per-card catalog the cache is built from
    #[envconfig(from = "ORACLE_SOURCE", default = "oracle-cards.json.gz")]
    pub oracle_source: PathBuf,

    /// Full printing catalog fed to the legal-catalog builder
    #[envconfig(from = "DEFAULT_CARDS", default = "default-cards.json")]
    pub default_cards: PathBuf,

    #[envconfig(from = "LEGAL_OUTPUT", default = "commander_legal.json")]
    pub legal_output: PathBuf,

    #[envconfig(from = "TRIM_INPUT", default = "commander_legal.json.gz")]
    pub trim_input: PathBuf,

    #[envconfig(from = "TRIM_OUTPUT", default = "commander_legal_trimmed.json.gz")]
    pub trim_output: PathBuf,

    /// Format used for legality filtering and the trimmed legality key
    #[envconfig(from = "FORMAT", default = "commander")]
    pub format: String,
}
