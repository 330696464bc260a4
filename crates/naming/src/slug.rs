//! Comparison keys for fuzzy name matching.

/// Normalizes a string into a lowercase ASCII-alphanumeric key.
///
/// Whitespace, punctuation and any non-ASCII character are dropped.
/// Two names are the same identity when their slugs are equal, and
/// related when one slug contains the other.
pub fn slug(input: &str) -> String {
    input
        .chars()
        .flat_map(char::to_lowercase)
        .filter(char::is_ascii_alphanumeric)
        .collect()
}
