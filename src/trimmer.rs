// ✂️ Card Record Trimmer - redistributable subset of a catalog record

use crate::catalog::{CardFace, CatalogRecord};
use crate::faces::FaceFlattener;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_FORMAT: &str = "commander";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrimmedFace {
    pub name: Option<String>,
    pub mana_cost: Option<String>,
    pub type_line: Option<String>,
    pub oracle_text: Option<String>,
    pub power: Option<String>,
    pub toughness: Option<String>,
    pub colors: Option<Vec<String>>,
}

impl From<&CardFace> for TrimmedFace {
    fn from(face: &CardFace) -> Self {
        TrimmedFace {
            name: face.name.clone(),
            mana_cost: face.mana_cost.clone(),
            type_line: face.type_line.clone(),
            oracle_text: face.oracle_text.clone(),
            power: face.power.clone(),
            toughness: face.toughness.clone(),
            colors: face.colors.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrimmedCard {
    pub name: String,
    pub mana_cost: Option<String>,
    pub type_line: Option<String>,
    pub oracle_text: Option<String>,
    pub color_identity: Option<Vec<String>>,
    pub power: Option<String>,
    pub toughness: Option<String>,

    /// Single `legal_in_<format>` key holding the legality status
    #[serde(flatten)]
    pub legality: BTreeMap<String, Option<String>>,

    #[serde(rename = "card_faces", default, skip_serializing_if = "Option::is_none")]
    pub faces: Option<Vec<TrimmedFace>>,
}

impl TrimmedCard {
    /// Status stored under `legal_in_<format>`
    pub fn legal_in(&self, format: &str) -> Option<&str> {
        self.legality
            .get(&legality_key(format))
            .and_then(|status| status.as_deref())
    }
}

pub fn legality_key(format: &str) -> String {
    format!("legal_in_{}", format)
}

pub struct CardRecordTrimmer {
    pub format: String,
    pub flattener: FaceFlattener,
}

impl CardRecordTrimmer {
    pub fn new(format: &str) -> Self {
        CardRecordTrimmer {
            format: format.to_string(),
            flattener: FaceFlattener::default(),
        }
    }

    /// Pure projection, never fails
    pub fn trim(&self, record: &CatalogRecord) -> TrimmedCard {
        let mut legality = BTreeMap::new();
        legality.insert(
            legality_key(&self.format),
            record.legality(&self.format).map(str::to_string),
        );

        // Multi-faced cards get the same flattened text the cache uses
        let (type_line, oracle_text) = match record.non_empty_faces() {
            Some(_) => {
                let flat = self.flattener.flatten(record);
                (Some(flat.type_line), Some(flat.oracle_text))
            }
            None => (record.type_line.clone(), record.oracle_text.clone()),
        };

        TrimmedCard {
            name: record.name.clone(),
            mana_cost: record.mana_cost.clone(),
            type_line,
            oracle_text,
            color_identity: record.color_identity.clone(),
            power: record.power.clone(),
            toughness: record.toughness.clone(),
            legality,
            faces: record
                .faces
                .as_ref()
                .map(|faces| faces.iter().map(TrimmedFace::from).collect()),
        }
    }

    /// Same length and order as the input
    pub fn trim_all(&self, records: &[CatalogRecord]) -> Vec<TrimmedCard> {
        records.iter().map(|record| self.trim(record)).collect()
    }
}

impl Default for CardRecordTrimmer {
    fn default() -> Self {
        Self::new(DEFAULT_FORMAT)
    }
}
