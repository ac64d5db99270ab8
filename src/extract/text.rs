//! Text normalisation and matching predicates.

use unicode_normalization::UnicodeNormalization;

/// Normalise text for comparison.
///
/// Applies NFKC (folds full-width letters and ligatures), collapses runs
/// of whitespace to one space, trims and lower-cases.
pub fn normalize(text: &str) -> String {
    let folded: String = text.nfkc().collect();
    folded
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Case-insensitive containment on normalised text.
///
/// An empty needle matches nothing.
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    let needle = normalize(needle);
    if needle.is_empty() {
        return false;
    }
    normalize(haystack).contains(&needle)
}
