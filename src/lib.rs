// Oracle Cache - Core Library
// Reconciles a printing catalog against an owned-card list.

pub mod normalize;
pub mod fingerprint;
pub mod catalog;
pub mod faces;
pub mod reducer;
pub mod owned;
pub mod cache;
pub mod reconciliation;
pub mod trimmer;
pub mod error;
pub mod config;
pub mod io;
pub mod pipeline;

// Re-export commonly used types
pub use normalize::normalize;
pub use fingerprint::fingerprint;
pub use catalog::{CardFace, CatalogRecord, MIN_RELEASE_KEY};
pub use faces::{FaceFlattener, FlatText};
pub use reducer::{CanonicalCatalog, CatalogReducer};
pub use owned::{OwnedNameLoader, OwnedNameSet};
pub use cache::{CacheDocument, CacheEntry, CacheMeta};
pub use reconciliation::{CacheBuild, Reconciliation, ReconciliationEngine};
pub use trimmer::{CardRecordTrimmer, TrimmedCard, TrimmedFace};
pub use error::{CacheError, PipelineWarning};
pub use config::Config;
pub use pipeline::{build_legal_catalog, build_oracle_cache, trim_catalog};

/// Log to stderr, filtered by RUST_LOG (default: warn)
pub fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}
