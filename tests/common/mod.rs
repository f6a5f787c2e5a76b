#![allow(dead_code)]

use std::sync::Once;

use smartquote_lib::services::catalogue::{CatalogueIndex, RuleTable};
use smartquote_lib::services::quote::ParsedLineItem;

static INIT: Once = Once::new();

pub fn init_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder().is_test(true).try_init();
    });
}

/// Catalogue snapshot in the JSON shape the import pipeline exports.
pub const CATALOGUE_JSON: &str = r#"{
  "products": [
    { "code": "FLX 4P", "install_time_hours": 2.0, "waste_volume_m3": 0.6 },
    { "code": "FLX-COWORK-4P-L2400", "install_time_hours": 2.5, "waste_volume_m3": 0.8 },
    { "code": "FLX 6P", "install_time_hours": 3.0, "waste_volume_m3": 1.0, "is_heavy": true },
    { "code": "PED-3D", "install_time_hours": 0.5, "waste_volume_m3": 0.1 },
    { "code": "TASK CHAIR (MESH)", "install_time_hours": 0.25, "waste_volume_m3": 0.05 },
    { "code": "GLASS-SCREEN-1200", "install_time_hours": 1.5, "waste_volume_m3": 0.2,
      "is_heavy": true, "requires_specialist": true },
    { "code": "DESK-1600", "install_time_hours": 1.2, "waste_volume_m3": 0.3, "origin": "learned" }
  ]
}"#;

pub fn catalogue() -> CatalogueIndex {
    init_logging();
    CatalogueIndex::from_json(CATALOGUE_JSON, RuleTable::default())
        .expect("fixture catalogue must parse")
}

pub fn line(line_number: u32, code: &str, quantity: u32) -> ParsedLineItem {
    ParsedLineItem {
        line_number,
        product_code_raw: code.to_string(),
        quantity,
    }
}
