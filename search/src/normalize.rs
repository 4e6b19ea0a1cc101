//! Comparison-only normalization. Output is never displayed.

/// Lowercases `s` and drops every character that is not a letter, digit or `_`.
pub fn normalize(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}
