// ⚖️ Reconciliation Engine - join owned names against the canonical catalog
//
// Every owned name ends up in exactly one place:
//   matched → CacheEntry in `entries`
//   unmatched → owned name in `missing`
// so entries.len() + missing.len() == owned.len() always holds.

use crate::cache::{CacheDocument, CacheEntry, CacheMeta, CACHE_DESCRIPTION, CACHE_VERSION};
use crate::catalog::CatalogRecord;
use crate::error::PipelineWarning;
use crate::faces::FaceFlattener;
use crate::fingerprint::fingerprint;
use crate::owned::OwnedNameSet;
use crate::reducer::CanonicalCatalog;
use chrono::{DateTime, Utc};

// ============================================================================
// RECONCILIATION RESULT
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    /// One entry per matched owned name, in owned-name order
    pub entries: Vec<CacheEntry>,

    /// Unmatched owned names, sorted
    pub missing: Vec<String>,

    pub owned_count: usize,
}

impl Reconciliation {
    pub fn summary(&self) -> String {
        format!(
            "Reconciled {} owned names: {} cached, {} missing",
            self.owned_count,
            self.entries.len(),
            self.missing.len()
        )
    }
}

/// Document plus anything worth telling the operator about
#[derive(Debug, Clone)]
pub struct CacheBuild {
    pub document: CacheDocument,
    pub warnings: Vec<PipelineWarning>,
}

// ============================================================================
// RECONCILIATION ENGINE
// ============================================================================

pub struct ReconciliationEngine {
    /// Stamped on every entry and on the document metadata
    pub generated_at: DateTime<Utc>,

    pub flattener: FaceFlattener,
}

impl ReconciliationEngine {
    pub fn new(generated_at: DateTime<Utc>) -> Self {
        ReconciliationEngine {
            generated_at,
            flattener: FaceFlattener::default(),
        }
    }

    /// Engine stamped with the current time
    pub fn now() -> Self {
        Self::new(Utc::now())
    }

    /// Exact join on normalized name; no fuzzy matching
    pub fn reconcile(&self, owned: &OwnedNameSet, canonical: &CanonicalCatalog) -> Reconciliation {
        let mut entries = Vec::new();
        let mut missing = Vec::new();

        for name in owned {
            match canonical.get(name) {
                Some(record) => entries.push(self.to_cache_entry(record)),
                None => {
                    tracing::debug!(name = %name, "owned name not in catalog");
                    missing.push(name.clone());
                }
            }
        }

        missing.sort();

        Reconciliation {
            entries,
            missing,
            owned_count: owned.len(),
        }
    }

    /// Reconcile and wrap the result with its metadata block
    pub fn build_document(
        &self,
        owned: &OwnedNameSet,
        canonical: &CanonicalCatalog,
        source: &str,
    ) -> CacheBuild {
        let mut warnings = Vec::new();
        if canonical.is_empty() {
            let warning = PipelineWarning::EmptyCatalog;
            tracing::warn!("{}", warning.message());
            warnings.push(warning);
        }

        let result = self.reconcile(owned, canonical);
        tracing::info!("{}", result.summary());

        let meta = CacheMeta {
            description: CACHE_DESCRIPTION.to_string(),
            version: CACHE_VERSION.to_string(),
            created_utc: self.generated_at,
            source: source.to_string(),
            owned_names_count: result.owned_count,
            cached_cards_count: result.entries.len(),
            missing_count: result.missing.len(),
        };

        CacheBuild {
            document: CacheDocument {
                meta,
                cards: result.entries,
                missing_names: result.missing,
            },
            warnings,
        }
    }

    /// Minimize one canonical record into a cache entry
    pub fn to_cache_entry(&self, record: &CatalogRecord) -> CacheEntry {
        let flat = self.flattener.flatten(record);
        let oracle_hash = fingerprint(&flat.oracle_text);

        CacheEntry {
            name: record.name.clone(),
            oracle_id: record.oracle_id.clone(),
            scryfall_id: record.printing_id.clone(),
            set_code: record.set_code.clone(),
            collector_number: record.collector_number.clone(),
            type_line: flat.type_line,
            oracle_text: flat.oracle_text,
            mana_cost: record.mana_cost.clone(),
            mana_value: record.mana_value,
            colors: record.colors.clone(),
            color_identity: record.color_identity.clone(),
            power: record.power.clone(),
            toughness: record.toughness.clone(),
            produced_mana: record.produced_mana.clone(),
            legalities: record.legalities.clone(),
            rarity: record.rarity.clone(),
            last_updated_utc: self.generated_at,
            oracle_hash,
        }
    }
}

impl Default for ReconciliationEngine {
    fn default() -> Self {
        Self::now()
    }
}

// ============================================================================
// TESTS
// ============================================================================
