//! Input normalization.
//!
//! Converts raw command text into a sequence of comparison tokens.

use caseless::default_case_fold_str;
use unicode_normalization::UnicodeNormalization;

/// Folds a string into its comparison key.
///
/// Compatibility variants (ligatures, full-width forms) collapse, and case is
/// removed with full Unicode case folding, so `"STRASSE"` and `"straße"` share
/// a key, as do final and medial sigma. Accents survive, so `"café"` and
/// `"cafe"` keep distinct keys.
#[must_use]
pub fn collation_key(s: &str) -> String {
    let compat: String = s.nfkc().collect();
    default_case_fold_str(&compat).nfc().collect()
}

/// Tokenizes raw text for comparison.
///
/// - Trims and splits on runs of whitespace
/// - Folds each token with [`collation_key`]
#[must_use]
pub fn normalize_for_comparison(raw: &str) -> Vec<String> {
    raw.split_whitespace().map(collation_key).collect()
}
