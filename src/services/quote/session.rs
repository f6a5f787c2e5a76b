//! One quote being worked on: products, unmatched lines, details and history.

use std::sync::Arc;

use super::enrich::{enrich_with_config, resolve_unmatched};
use super::provenance::{apply_catalogue_suggestion, edit_quantity, edit_time_per_unit, learned_product, EditKind, EditLog};
use super::review::{cross_check, CatalogueSuggestion};
use super::types::{CalculatedProduct, ParsedLineItem, ProductSource, QuoteDetails, UnmatchedLine};
use crate::services::calculator::{calculate, CalculationResults};
use crate::services::catalogue::{find_best_match, suggest_similar, CatalogueIndex, ReferenceProduct};
use crate::services::config::QuoteConfig;
use crate::services::validator::{parse_quantity_input, parse_time_input};
use crate::types::errors::{QuoteError, QuoteResult};

/// Owns the state of a single quote. The catalogue index is shared and
/// read-only; everything else belongs to this session.
pub struct QuoteSession {
    index: Arc<CatalogueIndex>,
    config: QuoteConfig,
    products: Vec<CalculatedProduct>,
    unmatched: Vec<UnmatchedLine>,
    details: QuoteDetails,
    edit_log: EditLog,
}

impl QuoteSession {
    pub fn new(index: Arc<CatalogueIndex>, config: QuoteConfig) -> Self {
        Self {
            index,
            config,
            products: Vec::new(),
            unmatched: Vec::new(),
            details: QuoteDetails::default(),
            edit_log: EditLog::new(),
        }
    }

    /// Replace the quote's lines. Details are kept; the edit history restarts.
    pub fn load_line_items(&mut self, items: &[ParsedLineItem], fallback_time: Option<f64>) -> QuoteResult<()> {
        let enrichment = enrich_with_config(items, &self.index, fallback_time, &self.config.matcher)?;
        self.products = enrichment.products;
        self.unmatched = enrichment.unmatched;
        self.products.sort_by_key(|p| p.line_number);
        self.edit_log = EditLog::new();
        Ok(())
    }

    pub fn products(&self) -> &[CalculatedProduct] {
        &self.products
    }

    pub fn unmatched(&self) -> &[UnmatchedLine] {
        &self.unmatched
    }

    pub fn details(&self) -> &QuoteDetails {
        &self.details
    }

    pub fn details_mut(&mut self) -> &mut QuoteDetails {
        &mut self.details
    }

    pub fn config(&self) -> &QuoteConfig {
        &self.config
    }

    pub fn edit_log(&self) -> &EditLog {
        &self.edit_log
    }

    pub fn product(&self, line_number: u32) -> Option<&CalculatedProduct> {
        self.products.iter().find(|p| p.line_number == line_number)
    }

    pub fn set_time_per_unit(&mut self, line_number: u32, value: f64) -> QuoteResult<()> {
        let product = self.product_mut(line_number)?;
        let before = product.clone();
        edit_time_per_unit(product, value)?;
        let after = product.clone();
        self.edit_log
            .record(line_number, EditKind::TimePerUnit, Some(before), Some(after));
        Ok(())
    }

    /// Parse user text first; bad input leaves the product as it was.
    pub fn set_time_from_input(&mut self, line_number: u32, input: &str) -> QuoteResult<()> {
        let value = parse_time_input(input)?;
        self.set_time_per_unit(line_number, value)
    }

    pub fn set_quantity(&mut self, line_number: u32, quantity: u32) -> QuoteResult<()> {
        let product = self.product_mut(line_number)?;
        let before = product.clone();
        edit_quantity(product, quantity);
        let after = product.clone();
        self.edit_log
            .record(line_number, EditKind::Quantity, Some(before), Some(after));
        Ok(())
    }

    pub fn set_quantity_from_input(&mut self, line_number: u32, input: &str) -> QuoteResult<()> {
        let quantity = parse_quantity_input(input)?;
        self.set_quantity(line_number, quantity)
    }

    /// Give an unmatched line a user-entered install time. Replaces any
    /// fallback product already on that line.
    pub fn resolve_unmatched(&mut self, line_number: u32, time_per_unit: f64) -> QuoteResult<()> {
        let position = self
            .unmatched
            .iter()
            .position(|line| line.line_number == line_number)
            .ok_or(QuoteError::UnknownLine(line_number))?;
        let product = resolve_unmatched(&self.unmatched[position], time_per_unit)?;
        self.unmatched.remove(position);

        let before = self.take_product(line_number);
        self.insert_product(product.clone());
        self.edit_log
            .record(line_number, EditKind::ResolveUnmatched, before, Some(product));
        Ok(())
    }

    pub fn review(&self) -> Vec<CatalogueSuggestion> {
        cross_check(&self.products, &self.index, self.config.review_tolerance_hours)
    }

    pub fn apply_suggestion(&mut self, suggestion: &CatalogueSuggestion) -> QuoteResult<()> {
        let index = Arc::clone(&self.index);
        let reference = find_best_match(&suggestion.catalogue_code, &index)
            .product()
            .ok_or_else(|| QuoteError::UnknownProduct(suggestion.catalogue_code.clone()))?;

        let line_number = suggestion.line_number;
        let product = self.product_mut(line_number)?;
        let before = product.clone();
        apply_catalogue_suggestion(product, reference);
        let after = product.clone();

        self.unmatched.retain(|line| line.line_number != line_number);
        self.edit_log.record(
            line_number,
            EditKind::CatalogueSuggestion,
            Some(before),
            Some(after),
        );
        Ok(())
    }

    /// Restore the line to the state before its most recent edit.
    ///
    /// The revert is itself logged, so reverting twice re-applies the edit.
    /// Returns `false` when the line has no history.
    pub fn revert_last_edit(&mut self, line_number: u32) -> QuoteResult<bool> {
        let Some(entry) = self.edit_log.last_for(line_number) else {
            return Ok(false);
        };
        let target = entry.before.clone();

        let current = self.take_product(line_number);
        self.unmatched.retain(|line| line.line_number != line_number);

        // Lines without a catalogue time are listed as unmatched again.
        let still_unmatched = match &target {
            Some(product) => {
                self.insert_product(product.clone());
                (product.source == ProductSource::Default).then_some(product)
            }
            None => current.as_ref(),
        };
        if let Some(product) = still_unmatched {
            let line = self.unmatched_from(product);
            self.unmatched.push(line);
            self.unmatched.sort_by_key(|line| line.line_number);
        }

        log::info!("Reverted last edit on line {line_number}");
        self.edit_log
            .record(line_number, EditKind::Revert, current, target);
        Ok(true)
    }

    pub fn calculate(&self) -> QuoteResult<CalculationResults> {
        if !self.unmatched.is_empty() {
            log::warn!(
                "Calculating with {} unmatched line(s) left out",
                self.unmatched.len()
            );
        }
        let results = calculate(&self.products, &self.details, &self.config)?;
        for warning in &results.warnings {
            log::warn!("{warning}");
        }
        Ok(results)
    }

    /// Manually timed products, as learned catalogue entries.
    pub fn learned_products(&self) -> Vec<ReferenceProduct> {
        self.products.iter().filter_map(learned_product).collect()
    }

    fn product_mut(&mut self, line_number: u32) -> QuoteResult<&mut CalculatedProduct> {
        self.products
            .iter_mut()
            .find(|p| p.line_number == line_number)
            .ok_or(QuoteError::UnknownLine(line_number))
    }

    fn take_product(&mut self, line_number: u32) -> Option<CalculatedProduct> {
        let position = self
            .products
            .iter()
            .position(|p| p.line_number == line_number)?;
        Some(self.products.remove(position))
    }

    fn insert_product(&mut self, product: CalculatedProduct) {
        let position = self
            .products
            .partition_point(|p| p.line_number < product.line_number);
        self.products.insert(position, product);
    }

    fn unmatched_from(&self, product: &CalculatedProduct) -> UnmatchedLine {
        UnmatchedLine {
            line_number: product.line_number,
            product_code_raw: product.raw_code.clone(),
            quantity: product.quantity,
            suggestions: suggest_similar(
                &product.raw_code,
                &self.index,
                self.config.matcher.suggestion_limit,
                self.config.matcher.min_suggestion_similarity,
            ),
        }
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;
