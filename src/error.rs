// ❌ Error types for the cache pipeline
// Library code returns CacheError; binaries wrap it in anyhow with context.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CacheError {
    /// A required input document is absent. Fatal, never retried.
    #[error("required source not found: {}", .path.display())]
    MissingSource { path: PathBuf },

    /// A tabular row could not yield a name. Loaders skip these.
    #[error("row {line} has no usable name: {reason}")]
    MalformedRow { line: u64, reason: String },

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CacheError {
    pub fn missing_source(path: impl Into<PathBuf>) -> Self {
        CacheError::MissingSource { path: path.into() }
    }
}

pub type Result<T> = std::result::Result<T, CacheError>;

/// Non-fatal conditions surfaced alongside a successful build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineWarning {
    /// Catalog reduction produced zero canonical cards
    EmptyCatalog,
}

impl PipelineWarning {
    pub fn message(&self) -> &str {
        match self {
            PipelineWarning::EmptyCatalog => {
                "catalog reduction yielded zero cards; every owned name will be reported missing"
            }
        }
    }
}
