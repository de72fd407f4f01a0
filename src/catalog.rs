// 📚 Catalog Records - one printing of a card, as published in bulk data
//
// Field names on the wire follow the upstream bulk-data documents
// (`id`, `set`, `cmc`, `card_faces`); the Rust names describe what they mean.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Release key used when a printing has no `released_at`
pub const MIN_RELEASE_KEY: &str = "0000-00-00";

// ============================================================================
// CARD FACE
// ============================================================================

/// One side of a multi-faced card (double-faced, split, adventure...)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CardFace {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub mana_cost: Option<String>,

    #[serde(default)]
    pub type_line: Option<String>,

    #[serde(default)]
    pub oracle_text: Option<String>,

    #[serde(default)]
    pub power: Option<String>,

    #[serde(default)]
    pub toughness: Option<String>,

    #[serde(default)]
    pub colors: Option<Vec<String>>,
}

// ============================================================================
// CATALOG RECORD
// ============================================================================

/// A single printing. Immutable input for a pipeline run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogRecord {
    /// Card name, shared by every printing of the card
    #[serde(default)]
    pub name: String,

    /// Stable identity shared by all printings
    #[serde(default)]
    pub oracle_id: Option<String>,

    /// Unique per printing
    #[serde(rename = "id", default)]
    pub printing_id: Option<String>,

    #[serde(rename = "set", default)]
    pub set_code: Option<String>,

    #[serde(default)]
    pub collector_number: Option<String>,

    /// Zero-padded ISO date, compared as a string
    #[serde(default)]
    pub released_at: Option<String>,

    #[serde(default)]
    pub type_line: Option<String>,

    #[serde(default)]
    pub oracle_text: Option<String>,

    #[serde(default)]
    pub mana_cost: Option<String>,

    #[serde(rename = "cmc", default)]
    pub mana_value: Option<f64>,

    #[serde(default)]
    pub colors: Option<Vec<String>>,

    #[serde(default)]
    pub color_identity: Option<Vec<String>>,

    // Not guaranteed numeric ("*", "1+*", "X")
    #[serde(default)]
    pub power: Option<String>,

    #[serde(default)]
    pub toughness: Option<String>,

    #[serde(default)]
    pub produced_mana: Option<Vec<String>>,

    #[serde(default)]
    pub legalities: BTreeMap<String, String>,

    #[serde(default)]
    pub rarity: Option<String>,

    #[serde(rename = "card_faces", default, skip_serializing_if = "Option::is_none")]
    pub faces: Option<Vec<CardFace>>,
}

impl CatalogRecord {
    /// Create a bare record with only a name, for builders and tests
    pub fn named(name: &str) -> Self {
        CatalogRecord {
            name: name.to_string(),
            ..Default::default()
        }
    }

    /// Builder pattern: set release date
    pub fn with_released_at(mut self, released_at: &str) -> Self {
        self.released_at = Some(released_at.to_string());
        self
    }

    /// Builder pattern: set printing id
    pub fn with_printing_id(mut self, printing_id: &str) -> Self {
        self.printing_id = Some(printing_id.to_string());
        self
    }

    /// Builder pattern: set a single legality entry
    pub fn with_legality(mut self, format: &str, status: &str) -> Self {
        self.legalities.insert(format.to_string(), status.to_string());
        self
    }

    /// Builder pattern: set rules text
    pub fn with_oracle_text(mut self, type_line: &str, oracle_text: &str) -> Self {
        self.type_line = Some(type_line.to_string());
        self.oracle_text = Some(oracle_text.to_string());
        self
    }

    /// Builder pattern: set faces
    pub fn with_faces(mut self, faces: Vec<CardFace>) -> Self {
        self.faces = Some(faces);
        self
    }

    /// Key used for recency ordering; missing dates sort lowest
    pub fn release_key(&self) -> &str {
        self.released_at.as_deref().unwrap_or(MIN_RELEASE_KEY)
    }

    /// Legality status string for a format, if the record lists one
    pub fn legality(&self, format: &str) -> Option<&str> {
        self.legalities.get(format).map(String::as_str)
    }

    pub fn is_legal_in(&self, format: &str) -> bool {
        self.legality(format) == Some("legal")
    }

    /// Faces, only when the record actually has some
    pub fn non_empty_faces(&self) -> Option<&[CardFace]> {
        match self.faces.as_deref() {
            Some(faces) if !faces.is_empty() => Some(faces),
            _ => None,
        }
    }
}
