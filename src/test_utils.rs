use std::sync::Once;

use crate::services::catalogue::{CatalogueIndex, ReferenceProduct};
use crate::services::quote::types::{CalculatedProduct, ProductSource};

static INIT: Once = Once::new();

pub fn init_logging() {
    INIT.call_once(|| {
        // Initialize logger only once
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Small reference catalogue covering each match strategy.
pub fn fixture_catalogue() -> Vec<ReferenceProduct> {
    let mut specialist = ReferenceProduct::new("GLASS-SCREEN-1200", 1.5, 0.2, true);
    specialist.requires_specialist = true;
    vec![
        ReferenceProduct::new("FLX 4P", 2.0, 0.6, false),
        ReferenceProduct::new("FLX-COWORK-4P-L2400", 2.5, 0.8, false),
        ReferenceProduct::new("6P FLX", 3.0, 1.0, true),
        ReferenceProduct::new("PED-3D", 0.5, 0.1, false),
        ReferenceProduct::new("TASK CHAIR (MESH)", 0.25, 0.05, false),
        specialist,
    ]
}

pub fn fixture_index() -> CatalogueIndex {
    init_logging();
    CatalogueIndex::new(fixture_catalogue())
}

/// A catalogue-sourced product with totals already computed.
pub fn product(line_number: u32, code: &str, quantity: u32, time_per_unit: f64, waste_per_unit: f64) -> CalculatedProduct {
    let mut product = CalculatedProduct {
        line_number,
        raw_code: code.to_string(),
        product_code: code.to_string(),
        quantity,
        time_per_unit,
        total_time: 0.0,
        waste_per_unit,
        total_waste: 0.0,
        is_heavy: false,
        requires_specialist: false,
        is_manually_edited: false,
        source: ProductSource::Catalogue,
    };
    product.recompute_totals();
    product
}
