// 🃏 Face Flattener - one type line / one rules text for multi-faced cards
// Shared by the cache-entry projection and the trimmed-card projection.

use crate::catalog::CatalogRecord;

/// Default separator between face type lines
pub const TYPE_SEPARATOR: &str = " // ";

/// Default separator between face rules texts ("//" on its own line)
pub const TEXT_SEPARATOR: &str = "\n//\n";

/// Flattened view of a record's type line and rules text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatText {
    pub type_line: String,
    pub oracle_text: String,
}

#[derive(Debug, Clone)]
pub struct FaceFlattener {
    pub type_separator: String,
    pub text_separator: String,
}

impl FaceFlattener {
    pub fn new(type_separator: &str, text_separator: &str) -> Self {
        FaceFlattener {
            type_separator: type_separator.to_string(),
            text_separator: text_separator.to_string(),
        }
    }

    /// Join face fields when the record has faces, otherwise pass the
    /// record's own fields through. Absent fields count as "".
    pub fn flatten(&self, record: &CatalogRecord) -> FlatText {
        match record.non_empty_faces() {
            Some(faces) => {
                let types: Vec<&str> = faces
                    .iter()
                    .map(|face| face.type_line.as_deref().unwrap_or(""))
                    .collect();
                let texts: Vec<&str> = faces
                    .iter()
                    .map(|face| face.oracle_text.as_deref().unwrap_or(""))
                    .collect();

                FlatText {
                    type_line: types.join(self.type_separator.as_str()).trim().to_string(),
                    oracle_text: texts.join(self.text_separator.as_str()).trim().to_string(),
                }
            }
            None => FlatText {
                type_line: record.type_line.clone().unwrap_or_default(),
                oracle_text: record.oracle_text.clone().unwrap_or_default(),
            },
        }
    }
}

impl Default for FaceFlattener {
    fn default() -> Self {
        Self::new(TYPE_SEPARATOR, TEXT_SEPARATOR)
    }
}
