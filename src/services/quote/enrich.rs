//! Merges parsed line items with catalogue values.

use serde::{Deserialize, Serialize};

use super::types::{CalculatedProduct, ParsedLineItem, ProductSource, UnmatchedLine};
use crate::services::catalogue::{find_best_match, suggest_similar, CatalogueIndex, ReferenceProduct};
use crate::services::config::MatcherConfig;
use crate::services::validator::validate_time;
use crate::types::errors::QuoteResult;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Enrichment {
    pub products: Vec<CalculatedProduct>,
    /// Every line without a catalogue match, fallback or not.
    pub unmatched: Vec<UnmatchedLine>,
}

/// Enrich with the default suggestion settings.
pub fn enrich_line_items(
    items: &[ParsedLineItem],
    index: &CatalogueIndex,
    fallback_time: Option<f64>,
) -> QuoteResult<Enrichment> {
    enrich_with_config(items, index, fallback_time, &MatcherConfig::default())
}

/// Look every line up. Unmatched lines only become products when
/// `fallback_time` is given; they are never silently priced at zero hours.
pub fn enrich_with_config(
    items: &[ParsedLineItem],
    index: &CatalogueIndex,
    fallback_time: Option<f64>,
    matcher: &MatcherConfig,
) -> QuoteResult<Enrichment> {
    let fallback_time = fallback_time.map(validate_time).transpose()?;
    let mut enrichment = Enrichment::default();

    for item in items {
        match find_best_match(&item.product_code_raw, index).product() {
            Some(reference) => {
                enrichment
                    .products
                    .push(product_from_reference(item, reference));
            }
            None => {
                let suggestions = suggest_similar(
                    &item.product_code_raw,
                    index,
                    matcher.suggestion_limit,
                    matcher.min_suggestion_similarity,
                );
                if let Some(time) = fallback_time {
                    log::warn!(
                        "Line {}: '{}' not in catalogue, using fallback {}h per unit",
                        item.line_number,
                        item.product_code_raw,
                        time
                    );
                    enrichment.products.push(default_product(item, time));
                }
                enrichment.unmatched.push(UnmatchedLine {
                    line_number: item.line_number,
                    product_code_raw: item.product_code_raw.clone(),
                    quantity: item.quantity,
                    suggestions,
                });
            }
        }
    }

    log::info!(
        "Enriched {} line(s): {} product(s), {} unmatched",
        items.len(),
        enrichment.products.len(),
        enrichment.unmatched.len()
    );
    Ok(enrichment)
}

pub fn product_from_reference(item: &ParsedLineItem, reference: &ReferenceProduct) -> CalculatedProduct {
    let mut product = CalculatedProduct {
        line_number: item.line_number,
        raw_code: item.product_code_raw.clone(),
        product_code: reference.code.clone(),
        quantity: item.quantity,
        time_per_unit: reference.install_time_hours,
        total_time: 0.0,
        waste_per_unit: reference.waste_volume_m3,
        total_waste: 0.0,
        is_heavy: reference.is_heavy,
        requires_specialist: reference.requires_specialist,
        is_manually_edited: false,
        source: reference.origin.into(),
    };
    product.recompute_totals();
    product
}

fn default_product(item: &ParsedLineItem, time_per_unit: f64) -> CalculatedProduct {
    unmatched_product(
        item.line_number,
        &item.product_code_raw,
        item.quantity,
        time_per_unit,
        ProductSource::Default,
    )
}

/// A user-supplied install time for an unmatched line.
pub fn resolve_unmatched(line: &UnmatchedLine, time_per_unit: f64) -> QuoteResult<CalculatedProduct> {
    let time_per_unit = validate_time(time_per_unit)?;
    let mut product = unmatched_product(
        line.line_number,
        &line.product_code_raw,
        line.quantity,
        time_per_unit,
        ProductSource::UserInputted,
    );
    product.is_manually_edited = true;
    Ok(product)
}

fn unmatched_product(
    line_number: u32,
    raw_code: &str,
    quantity: u32,
    time_per_unit: f64,
    source: ProductSource,
) -> CalculatedProduct {
    let mut product = CalculatedProduct {
        line_number,
        raw_code: raw_code.to_string(),
        product_code: raw_code.trim().to_string(),
        quantity,
        time_per_unit,
        total_time: 0.0,
        waste_per_unit: 0.0,
        total_waste: 0.0,
        is_heavy: false,
        requires_specialist: false,
        is_manually_edited: false,
        source,
    };
    product.recompute_totals();
    product
}

#[cfg(test)]
#[path = "tests/enrich_tests.rs"]
mod tests;
