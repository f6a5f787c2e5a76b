//! Text normalization for product codes and free-text descriptions.

use deunicode::deunicode;
use regex::Regex;
use std::sync::LazyLock;

/// Characters ignored when comparing product codes.
static RE_CODE_NOISE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s()\-_]+").expect("Invalid regex"));

/// Runs of separators collapsed to a single space in descriptions.
static RE_SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\s\-_/,;:()\[\]]+").expect("Invalid regex"));

/// Normalize a product code into its lookup key.
///
/// Pipeline:
/// 1. Transliterate to ASCII via deunicode (`É` → `E`)
/// 2. Uppercase
/// 3. Strip whitespace, parentheses, hyphens and underscores
///
/// `"flx-4p (2400)"`, `"FLX_4P2400"` and `"FLX 4P 2400"` all become `"FLX4P2400"`.
pub fn normalize_code(code: &str) -> String {
    let latin = deunicode(code);
    RE_CODE_NOISE.replace_all(&latin.to_uppercase(), "").to_string()
}

/// Normalize a free-text description for rule matching.
///
/// Uppercases, collapses separators into single spaces and trims.
pub fn normalize_description(text: &str) -> String {
    let latin = deunicode(text);
    RE_SEPARATORS
        .replace_all(&latin.to_uppercase(), " ")
        .trim()
        .to_string()
}

/// Remove the first matching noise prefix (e.g. `"SUPPLY AND INSTALL"`).
///
/// Prefixes are compared against the normalized description, so they should be
/// given in uppercase with single spaces.
pub fn strip_known_prefixes(description: &str, prefixes: &[String]) -> String {
    for prefix in prefixes {
        let prefix = normalize_description(prefix);
        if prefix.is_empty() {
            continue;
        }
        if let Some(rest) = description.strip_prefix(prefix.as_str()) {
            if rest.is_empty() || rest.starts_with(' ') {
                return rest.trim().to_string();
            }
        }
    }
    description.to_string()
}

#[cfg(test)]
#[path = "tests/normalizer_tests.rs"]
mod tests;
