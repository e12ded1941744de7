//! Case and whitespace normalization shared by the scorers

/// Trimmed, lowercased form used for every comparison.
pub fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Normalizes each entry and drops the ones that end up blank.
pub fn normalize_all(values: &[String]) -> Vec<String> {
    values
        .iter()
        .map(|v| normalize(v))
        .filter(|v| !v.is_empty())
        .collect()
}

/// Normalized value when it is present and not blank.
pub fn non_blank(value: Option<&str>) -> Option<String> {
    value.map(normalize).filter(|v| !v.is_empty())
}

/// Either string contains the other. Both sides must already be normalized.
pub fn relates(a: &str, b: &str) -> bool {
    a.contains(b) || b.contains(a)
}
