//! Manual edits, catalogue resets and the edit history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::types::{CalculatedProduct, ProductSource};
use crate::services::catalogue::{CatalogueOrigin, ReferenceProduct};
use crate::services::validator::validate_time;
use crate::types::errors::ValidationError;

/// Set a user-entered install time. On error the product is left untouched.
pub fn edit_time_per_unit(product: &mut CalculatedProduct, value: f64) -> Result<(), ValidationError> {
    let value = validate_time(value)?;
    product.time_per_unit = value;
    product.recompute_totals();
    product.is_manually_edited = true;
    product.source = ProductSource::UserInputted;
    Ok(())
}

/// Quantity changes keep provenance.
pub fn edit_quantity(product: &mut CalculatedProduct, quantity: u32) {
    product.quantity = quantity;
    product.recompute_totals();
}

/// Reset a product to catalogue values.
pub fn apply_catalogue_suggestion(product: &mut CalculatedProduct, reference: &ReferenceProduct) {
    product.product_code = reference.code.clone();
    product.time_per_unit = reference.install_time_hours;
    product.waste_per_unit = reference.waste_volume_m3;
    product.is_heavy = reference.is_heavy;
    product.requires_specialist = reference.requires_specialist;
    product.recompute_totals();
    product.is_manually_edited = false;
    product.source = reference.origin.into();
}

/// A manually edited product as a learned catalogue entry, for persisting
/// outside this crate. `None` for products with catalogue or default times.
pub fn learned_product(product: &CalculatedProduct) -> Option<ReferenceProduct> {
    if !product.is_manually_edited || product.source != ProductSource::UserInputted {
        return None;
    }
    let code = product.product_code.trim();
    if code.is_empty() {
        return None;
    }
    Some(ReferenceProduct {
        code: code.to_string(),
        install_time_hours: product.time_per_unit,
        waste_volume_m3: product.waste_per_unit,
        is_heavy: product.is_heavy,
        requires_specialist: product.requires_specialist,
        origin: CatalogueOrigin::Learned,
    })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EditKind {
    TimePerUnit,
    Quantity,
    CatalogueSuggestion,
    ResolveUnmatched,
    Revert,
}

/// One recorded mutation. `None` means the line had no product on that side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditEntry {
    pub sequence: u64,
    pub line_number: u32,
    pub kind: EditKind,
    pub before: Option<CalculatedProduct>,
    pub after: Option<CalculatedProduct>,
    pub recorded_at: DateTime<Utc>,
}

/// Append-only edit history. Reverts are recorded as new entries.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EditLog {
    entries: Vec<EditEntry>,
    next_sequence: u64,
}

impl EditLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(
        &mut self,
        line_number: u32,
        kind: EditKind,
        before: Option<CalculatedProduct>,
        after: Option<CalculatedProduct>,
    ) -> &EditEntry {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        log::debug!("Edit #{sequence} on line {line_number}: {kind:?}");
        self.entries.push(EditEntry {
            sequence,
            line_number,
            kind,
            before,
            after,
            recorded_at: Utc::now(),
        });
        &self.entries[self.entries.len() - 1]
    }

    pub fn entries(&self) -> &[EditEntry] {
        &self.entries
    }

    /// Most recent entry for a line, reverts included.
    pub fn last_for(&self, line_number: u32) -> Option<&EditEntry> {
        self.entries
            .iter()
            .rev()
            .find(|entry| entry.line_number == line_number)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "tests/provenance_tests.rs"]
mod tests;
