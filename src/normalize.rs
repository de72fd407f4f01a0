// 🔤 Name Normalizer - canonical form used as the join key everywhere

/// Trim the name and collapse every internal whitespace run to one space.
///
/// Case and punctuation are preserved, so "Lightning Bolt" and
/// "lightning bolt" stay distinct keys.
pub fn normalize(raw: &str) -> String {
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}
