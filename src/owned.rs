// 📥 Owned Name Loader - user collection export → ordered, de-duplicated names
//
// Merge policy: FIRST OCCURRENCE WINS. The first spelling seen for a
// normalized name is kept and its position fixes the output order.

use crate::error::{CacheError, Result};
use crate::normalize::normalize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Headers recognized as the card-name column (compared lowercase)
pub const NAME_HEADER_ALIASES: [&str; 6] = [
    "name",
    "card",
    "card name",
    "card_name",
    "cardname",
    "cardtitle",
];

// ============================================================================
// OWNED NAME SET
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OwnedNameSet {
    names: Vec<String>,
    seen: HashSet<String>,
}

impl OwnedNameSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize and insert. Returns false for empty or already-seen names.
    pub fn insert(&mut self, raw: &str) -> bool {
        let name = normalize(raw);
        if name.is_empty() || self.seen.contains(&name) {
            return false;
        }
        self.seen.insert(name.clone());
        self.names.push(name);
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(&normalize(name))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in encounter order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.names.iter()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.names
    }
}

impl<S: AsRef<str>> FromIterator<S> for OwnedNameSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = OwnedNameSet::new();
        for name in iter {
            set.insert(name.as_ref());
        }
        set
    }
}

impl<'a> IntoIterator for &'a OwnedNameSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// ============================================================================
// OWNED NAME LOADER
// ============================================================================

pub struct OwnedNameLoader;

impl OwnedNameLoader {
    /// Pick the name column: first header matching an alias, else the first
    /// header. None only when there are no headers at all.
    pub fn select_name_column<S: AsRef<str>>(headers: &[S]) -> Option<String> {
        let trimmed: Vec<&str> = headers.iter().map(|h| h.as_ref().trim()).collect();

        trimmed
            .iter()
            .find(|h| NAME_HEADER_ALIASES.contains(&h.to_lowercase().as_str()))
            .or_else(|| trimmed.first())
            .map(|h| h.to_string())
    }

    /// Build the owned set from already-parsed rows keyed by header
    pub fn load<S: AsRef<str>>(rows: &[HashMap<String, String>], headers: &[S]) -> OwnedNameSet {
        let mut owned = OwnedNameSet::new();

        let column = match Self::select_name_column(headers) {
            Some(column) => column,
            None => return owned,
        };
        tracing::debug!(column = %column, "selected owned-name column");

        for (index, row) in rows.iter().enumerate() {
            match Self::row_name(row, &column, index as u64 + 1) {
                Ok(name) => {
                    owned.insert(&name);
                }
                Err(err) => tracing::debug!(error = %err, "skipping row"),
            }
        }

        owned
    }

    /// Read a headered CSV export from disk
    pub fn load_csv(path: &Path) -> Result<OwnedNameSet> {
        if !path.exists() {
            return Err(CacheError::missing_source(path));
        }

        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_path(path)?;

        let headers: Vec<String> = rdr.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for (index, result) in rdr.records().enumerate() {
            let record = match result {
                Ok(record) => record,
                Err(err) => {
                    let skipped = CacheError::MalformedRow {
                        line: index as u64 + 1,
                        reason: err.to_string(),
                    };
                    tracing::debug!(error = %skipped, "skipping row");
                    continue;
                }
            };

            let row: HashMap<String, String> = headers
                .iter()
                .zip(record.iter())
                .map(|(header, cell)| (header.clone(), cell.to_string()))
                .collect();
            rows.push(row);
        }

        let owned = Self::load(&rows, &headers);
        tracing::info!(
            path = %path.display(),
            rows = rows.len(),
            owned = owned.len(),
            "loaded owned names"
        );

        Ok(owned)
    }

    fn row_name(row: &HashMap<String, String>, column: &str, line: u64) -> Result<String> {
        row.get(column)
            .map(|cell| normalize(cell))
            .ok_or_else(|| CacheError::MalformedRow {
                line,
                reason: format!("missing column '{}'", column),
            })
    }
}

// ============================================================================
// TESTS
// ============================================================================
