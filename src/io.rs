// 💾 Document I/O - JSON in and out, gzip when the path ends in .gz

use crate::catalog::CatalogRecord;
use crate::error::{CacheError, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case("gz"))
        .unwrap_or(false)
}

/// Open a document for reading; a missing file is a MissingSource error
fn open_reader(path: &Path) -> Result<Box<dyn Read>> {
    if !path.exists() {
        return Err(CacheError::missing_source(path));
    }

    let file = BufReader::new(File::open(path)?);
    if is_gzip(path) {
        Ok(Box::new(GzDecoder::new(file)))
    } else {
        Ok(Box::new(file))
    }
}

pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let reader = open_reader(path)?;
    Ok(serde_json::from_reader(reader)?)
}

/// Load a catalog document (array of printings)
pub fn read_catalog(path: &Path) -> Result<Vec<CatalogRecord>> {
    let records: Vec<CatalogRecord> = read_json(path)?;
    tracing::info!(path = %path.display(), records = records.len(), "loaded catalog");
    Ok(records)
}

/// Pretty JSON, non-ASCII written as-is
pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = BufWriter::new(File::create(path)?);

    if is_gzip(path) {
        let mut encoder = GzEncoder::new(file, Compression::default());
        serde_json::to_writer_pretty(&mut encoder, value)?;
        encoder.finish()?.flush()?;
    } else {
        let mut writer = file;
        serde_json::to_writer_pretty(&mut writer, value)?;
        writer.flush()?;
    }

    tracing::debug!(path = %path.display(), "wrote document");
    Ok(())
}
