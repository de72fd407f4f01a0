// 🗂️ Catalog Reducer - collapse every printing of a card to the latest one
//
// Merge policy: LAST WRITE WINS. A record replaces the kept printing when its
// release key is greater than or equal to the kept key, so equal dates resolve
// to whichever record comes later in the input. The older legal-catalog script
// compared with a strict `>` and kept the first record on a tie; the `>=` here
// is the pinned behavior, do not change it back. This is also not the policy
// used for owned names (first occurrence wins, see owned.rs).

use crate::catalog::CatalogRecord;
use crate::normalize::normalize;
use std::collections::btree_map::{self, BTreeMap};

// ============================================================================
// CANONICAL CATALOG
// ============================================================================

/// One record per normalized card name, iterated in name order
#[derive(Debug, Clone, Default)]
pub struct CanonicalCatalog {
    cards: BTreeMap<String, CatalogRecord>,
}

impl CanonicalCatalog {
    /// Look up by name; the name is normalized first
    pub fn get(&self, name: &str) -> Option<&CatalogRecord> {
        self.cards.get(&normalize(name))
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, CatalogRecord> {
        self.cards.iter()
    }

    pub fn into_records(self) -> Vec<CatalogRecord> {
        self.cards.into_values().collect()
    }
}

impl FromIterator<CatalogRecord> for CanonicalCatalog {
    /// Build with the last-write-wins rule over every record
    fn from_iter<I: IntoIterator<Item = CatalogRecord>>(iter: I) -> Self {
        CatalogReducer::all().reduce(iter)
    }
}

// ============================================================================
// CATALOG REDUCER
// ============================================================================

pub struct CatalogReducer {
    predicate: Box<dyn Fn(&CatalogRecord) -> bool>,
}

impl CatalogReducer {
    /// Only records passing `predicate` participate in the reduction
    pub fn new(predicate: impl Fn(&CatalogRecord) -> bool + 'static) -> Self {
        CatalogReducer {
            predicate: Box::new(predicate),
        }
    }

    /// Keep every record
    pub fn all() -> Self {
        Self::new(|_| true)
    }

    /// Keep records whose legality in `format` is exactly "legal"
    pub fn legal_in(format: &str) -> Self {
        let format = format.to_string();
        Self::new(move |record| record.is_legal_in(&format))
    }

    /// Single pass in input order; only the current winner per name is held
    pub fn reduce<I>(&self, records: I) -> CanonicalCatalog
    where
        I: IntoIterator<Item = CatalogRecord>,
    {
        let mut cards: BTreeMap<String, CatalogRecord> = BTreeMap::new();
        let mut considered = 0usize;

        for record in records {
            if !(self.predicate)(&record) {
                continue;
            }

            let key = normalize(&record.name);
            if key.is_empty() {
                continue;
            }
            considered += 1;

            match cards.entry(key) {
                btree_map::Entry::Vacant(slot) => {
                    slot.insert(record);
                }
                btree_map::Entry::Occupied(mut slot) => {
                    // >= : later record wins on equal dates
                    if record.release_key() >= slot.get().release_key() {
                        slot.insert(record);
                    }
                }
            }
        }

        tracing::debug!(
            considered,
            canonical = cards.len(),
            "reduced catalog to latest printing per name"
        );

        CanonicalCatalog { cards }
    }
}

impl Default for CatalogReducer {
    fn default() -> Self {
        Self::all()
    }
}

// ============================================================================
// TESTS
// ============================================================================
