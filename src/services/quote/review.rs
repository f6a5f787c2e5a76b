//! Cross-checks quote products against the current catalogue.

use serde::{Deserialize, Serialize};

use super::types::{CalculatedProduct, ProductSource};
use crate::services::catalogue::{find_best_match, CatalogueIndex, Lookup, MatchStrategy};

/// Catalogue values that differ from what the quote currently uses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogueSuggestion {
    pub line_number: u32,
    pub current_code: String,
    pub current_time_per_unit: f64,
    pub current_source: ProductSource,
    pub catalogue_code: String,
    pub catalogue_time_per_unit: f64,
    pub strategy: MatchStrategy,
}

impl CatalogueSuggestion {
    pub fn time_difference(&self) -> f64 {
        self.catalogue_time_per_unit - self.current_time_per_unit
    }
}

/// Re-resolve each product by its raw code.
///
/// Suggests the catalogue entry when its time differs by more than
/// `tolerance_hours`, or when the product's time did not come from the
/// catalogue but a match exists now.
pub fn cross_check(
    products: &[CalculatedProduct],
    index: &CatalogueIndex,
    tolerance_hours: f64,
) -> Vec<CatalogueSuggestion> {
    let mut suggestions = Vec::new();

    for product in products {
        let Lookup::Matched(found) = find_best_match(&product.raw_code, index) else {
            continue;
        };
        let reference = found.product;

        let differs = (reference.install_time_hours - product.time_per_unit).abs() > tolerance_hours;
        let not_from_catalogue = matches!(
            product.source,
            ProductSource::UserInputted | ProductSource::Default
        );
        if !differs && !not_from_catalogue {
            continue;
        }

        suggestions.push(CatalogueSuggestion {
            line_number: product.line_number,
            current_code: product.product_code.clone(),
            current_time_per_unit: product.time_per_unit,
            current_source: product.source,
            catalogue_code: reference.code.clone(),
            catalogue_time_per_unit: reference.install_time_hours,
            strategy: found.strategy,
        });
    }

    if !suggestions.is_empty() {
        log::info!("Review found {} catalogue suggestion(s)", suggestions.len());
    }
    suggestions
}

#[cfg(test)]
#[path = "tests/review_tests.rs"]
mod tests;
