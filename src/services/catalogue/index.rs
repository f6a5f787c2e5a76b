//! Immutable lookup index built once per catalogue snapshot.

use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap};

use super::normalizer::normalize_code;
use super::rules::RuleTable;
use super::types::ReferenceProduct;
use crate::types::errors::{QuoteError, QuoteResult};

/// The catalogue snapshot plus precomputed code maps and the rule table.
///
/// Products are stored in canonical order, so every map (and every lookup) is
/// independent of the order the snapshot arrived in.
#[derive(Debug, Clone)]
pub struct CatalogueIndex {
    products: Vec<ReferenceProduct>,
    by_code: HashMap<String, usize>,
    by_normalized: BTreeMap<String, usize>,
    rules: RuleTable,
}

impl CatalogueIndex {
    /// Build an index with the default rule table.
    pub fn new(products: Vec<ReferenceProduct>) -> Self {
        Self::with_rules(products, RuleTable::default())
    }

    pub fn with_rules(mut products: Vec<ReferenceProduct>, rules: RuleTable) -> Self {
        products.sort_by(canonical_order);

        let mut by_code: HashMap<String, usize> = HashMap::new();
        let mut by_normalized: BTreeMap<String, usize> = BTreeMap::new();

        for (idx, product) in products.iter().enumerate() {
            let code = product.code.trim().to_string();
            if code.is_empty() {
                log::warn!("Skipping catalogue entry with empty code");
                continue;
            }

            // First in canonical order wins for both maps.
            by_code.entry(code).or_insert(idx);

            let key = normalize_code(&product.code);
            match by_normalized.get(&key) {
                Some(&existing) => {
                    log::warn!(
                        "Catalogue codes '{}' and '{}' share normalized key '{}'; keeping '{}'",
                        products[existing].code,
                        product.code,
                        key,
                        products[existing].code
                    );
                }
                None => {
                    by_normalized.insert(key, idx);
                }
            }
        }

        log::debug!(
            "Catalogue index built: {} products, {} normalized keys, {} rules",
            products.len(),
            by_normalized.len(),
            rules.rules().len()
        );

        Self {
            products,
            by_code,
            by_normalized,
            rules,
        }
    }

    /// Load from JSON string.
    /// Supports both a bare array `[{product}, ...]`
    /// and an object `{"products": [...]}`.
    pub fn from_json(json: &str, rules: RuleTable) -> QuoteResult<Self> {
        let value: serde_json::Value = serde_json::from_str(json)?;

        let products: Vec<ReferenceProduct> = match value {
            serde_json::Value::Object(mut map) if map.contains_key("products") => {
                serde_json::from_value(map.remove("products").unwrap_or_default())?
            }
            serde_json::Value::Array(_) => serde_json::from_value(value)?,
            _ => {
                return Err(QuoteError::Json(
                    "Invalid catalogue format: expected array or object with 'products' key"
                        .to_string(),
                ))
            }
        };

        Ok(Self::with_rules(products, rules))
    }

    pub fn products(&self) -> &[ReferenceProduct] {
        &self.products
    }

    pub fn rules(&self) -> &RuleTable {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Entry whose trimmed code equals `code` exactly.
    pub fn get_exact(&self, code: &str) -> Option<&ReferenceProduct> {
        self.by_code.get(code.trim()).map(|&idx| &self.products[idx])
    }

    /// Entry whose normalized code equals the normalized `code`.
    pub fn get_normalized(&self, code: &str) -> Option<&ReferenceProduct> {
        let key = normalize_code(code);
        if key.is_empty() {
            return None;
        }
        self.by_normalized.get(&key).map(|&idx| &self.products[idx])
    }

    /// Normalized keys with their entries, in key order.
    pub fn normalized_entries(&self) -> impl Iterator<Item = (&str, &ReferenceProduct)> {
        self.by_normalized
            .iter()
            .map(|(key, &idx)| (key.as_str(), &self.products[idx]))
    }
}

/// Canonical order: normalized key, reference before learned, code, then values.
fn canonical_order(a: &ReferenceProduct, b: &ReferenceProduct) -> Ordering {
    normalize_code(&a.code)
        .cmp(&normalize_code(&b.code))
        .then_with(|| a.origin.cmp(&b.origin))
        .then_with(|| a.code.cmp(&b.code))
        .then_with(|| a.install_time_hours.total_cmp(&b.install_time_hours))
        .then_with(|| a.waste_volume_m3.total_cmp(&b.waste_volume_m3))
        .then_with(|| a.is_heavy.cmp(&b.is_heavy))
        .then_with(|| a.requires_specialist.cmp(&b.requires_specialist))
}

#[cfg(test)]
#[path = "tests/index_tests.rs"]
mod tests;
