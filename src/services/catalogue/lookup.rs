//! Best-match catalogue lookup.
//!
//! Strict precedence, first hit wins, no scoring across steps:
//! 1. Exact trimmed code, then normalized code
//! 2. Rule table in order (structured seat codes, family free text, aliases)
//! 3. `NotFound`: the caller must ask the user for an install time

use std::cmp::Ordering;

use strsim::normalized_levenshtein;

#[cfg(feature = "debug_matcher")]
use log::debug;

use super::index::CatalogueIndex;
use super::normalizer::normalize_code;
use super::types::{CatalogueMatch, Lookup, MatchStrategy, ReferenceProduct, Suggestion};

/// Find the catalogue entry for a raw product code or description.
pub fn find_best_match<'a>(code: &str, index: &'a CatalogueIndex) -> Lookup<'a> {
    if code.trim().is_empty() {
        return Lookup::NotFound;
    }

    if let Some(product) = index.get_exact(code) {
        return matched(product, MatchStrategy::Exact, None);
    }
    if let Some(product) = index.get_normalized(code) {
        return matched(product, MatchStrategy::Normalized, None);
    }

    let rules = index.rules();
    let (code_input, description_input) = rules.prepare_inputs(code);

    for rule in rules.rules() {
        let Some(keys) = rule.candidates(&code_input, &description_input) else {
            continue;
        };

        for candidate in &keys {
            if let Some(product) = resolve_key(index, &candidate.key) {
                log::debug!(
                    "Catalogue match for '{}': '{}' via rule {} ({})",
                    code,
                    product.code,
                    rule.name,
                    candidate.strategy
                );
                return matched(product, candidate.strategy, Some(rule.name.as_str()));
            }
        }

        #[cfg(feature = "debug_matcher")]
        debug!(
            "[MATCHER] rule {} matched '{}' but none of {:?} are in the catalogue",
            rule.name,
            code,
            keys.iter().map(|k| k.key.as_str()).collect::<Vec<_>>()
        );
    }

    log::debug!("No catalogue match for '{}'", code);
    Lookup::NotFound
}

/// Rank catalogue codes by similarity to an unmatched input.
///
/// Similarity is normalized Levenshtein over normalized keys; ties break on code.
pub fn suggest_similar(
    code: &str,
    index: &CatalogueIndex,
    limit: usize,
    min_similarity: f64,
) -> Vec<Suggestion> {
    let key = normalize_code(code);
    if key.is_empty() || limit == 0 {
        return Vec::new();
    }

    let mut suggestions: Vec<Suggestion> = index
        .normalized_entries()
        .map(|(entry_key, product)| Suggestion {
            code: product.code.clone(),
            similarity: normalized_levenshtein(&key, entry_key),
        })
        .filter(|s| s.similarity >= min_similarity)
        .collect();

    suggestions.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(Ordering::Equal)
            .then_with(|| a.code.cmp(&b.code))
    });
    suggestions.truncate(limit);
    suggestions
}

fn resolve_key<'a>(index: &'a CatalogueIndex, key: &str) -> Option<&'a ReferenceProduct> {
    index
        .get_exact(key)
        .or_else(|| index.get_normalized(key))
}

fn matched<'a>(
    product: &'a ReferenceProduct,
    strategy: MatchStrategy,
    rule: Option<&'a str>,
) -> Lookup<'a> {
    Lookup::Matched(CatalogueMatch {
        product,
        strategy,
        rule,
    })
}

#[cfg(test)]
#[path = "tests/lookup_tests.rs"]
mod tests;
