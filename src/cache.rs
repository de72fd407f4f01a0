// 📦 Cache Document - the pipeline's output shape

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const CACHE_DESCRIPTION: &str =
    "Owned-only Oracle Text Cache (full Oracle text, no deck filtering).";
pub const CACHE_VERSION: &str = "1.0.0";

/// Minimized, hash-stamped record for one owned card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheEntry {
    pub name: String,
    pub oracle_id: Option<String>,

    /// Printing id of the chosen printing
    pub scryfall_id: Option<String>,
    pub set_code: Option<String>,
    pub collector_number: Option<String>,

    // Flattened across faces
    pub type_line: String,
    pub oracle_text: String,

    pub mana_cost: Option<String>,
    pub mana_value: Option<f64>,
    pub colors: Option<Vec<String>>,
    pub color_identity: Option<Vec<String>>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub produced_mana: Option<Vec<String>>,
    pub legalities: BTreeMap<String, String>,
    pub rarity: Option<String>,
    pub last_updated_utc: DateTime<Utc>,

    /// SHA-256 of `oracle_text`; diff against a previous run to spot rules changes
    pub oracle_hash: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheMeta {
    pub description: String,
    pub version: String,
    pub created_utc: DateTime<Utc>,
    pub source: String,
    pub owned_names_count: usize,
    pub cached_cards_count: usize,
    pub missing_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheDocument {
    #[serde(rename = "_meta")]
    pub meta: CacheMeta,
    pub cards: Vec<CacheEntry>,
    pub missing_names: Vec<String>,
}

impl CacheDocument {
    /// cached + missing must account for every owned name
    pub fn is_consistent(&self) -> bool {
        self.meta.cached_cards_count == self.cards.len()
            && self.meta.missing_count == self.missing_names.len()
            && self.meta.cached_cards_count + self.meta.missing_count
                == self.meta.owned_names_count
    }

    /// oracle_hash by card name, for comparing two generations
    pub fn hashes(&self) -> BTreeMap<&str, &str> {
        self.cards
            .iter()
            .map(|card| (card.name.as_str(), card.oracle_hash.as_str()))
            .collect()
    }

    /// Names whose rules text changed (or appeared) since `previous`
    pub fn changed_since(&self, previous: &CacheDocument) -> Vec<String> {
        let before = previous.hashes();
        self.cards
            .iter()
            .filter(|card| before.get(card.name.as_str()) != Some(&card.oracle_hash.as_str()))
            .map(|card| card.name.clone())
            .collect()
    }

    pub fn summary(&self) -> String {
        format!(
            "{} owned names: {} cached, {} missing",
            self.meta.owned_names_count, self.meta.cached_cards_count, self.meta.missing_count
        )
    }
}
