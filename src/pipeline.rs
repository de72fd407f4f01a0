// 🔁 Pipeline - wires loaders, reducer, engine and trimmer to files on disk

use crate::catalog::CatalogRecord;
use crate::error::Result;
use crate::io::{read_catalog, write_json};
use crate::owned::OwnedNameLoader;
use crate::reconciliation::{CacheBuild, ReconciliationEngine};
use crate::reducer::CatalogReducer;
use crate::trimmer::CardRecordTrimmer;
use std::path::Path;

/// Owned CSV + catalog file → cache document (not yet written)
pub fn build_oracle_cache(
    owned_csv: &Path,
    catalog_path: &Path,
    engine: &ReconciliationEngine,
) -> Result<CacheBuild> {
    let owned = OwnedNameLoader::load_csv(owned_csv)?;
    let records = read_catalog(catalog_path)?;

    let canonical = CatalogReducer::all().reduce(records);
    let source = catalog_path.to_string_lossy();

    Ok(engine.build_document(&owned, &canonical, &source))
}

/// Latest legal printing per name, written to `output`. Returns the count.
/// Records come out in normalized-name order and keep only the modelled
/// `CatalogRecord` fields; upstream extras (prices, images...) are dropped.
pub fn build_legal_catalog(input: &Path, output: &Path, format: &str) -> Result<usize> {
    let records = read_catalog(input)?;
    let canonical = CatalogReducer::legal_in(format).reduce(records);

    let legal: Vec<CatalogRecord> = canonical.into_records();
    write_json(output, &legal)?;

    Ok(legal.len())
}

/// Trim every record of `input` into `output`. Returns the count.
pub fn trim_catalog(input: &Path, output: &Path, format: &str) -> Result<usize> {
    let records = read_catalog(input)?;
    let trimmed = CardRecordTrimmer::new(format).trim_all(&records);

    write_json(output, &trimmed)?;

    Ok(trimmed.len())
}
