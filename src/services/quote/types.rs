//! Quote-side domain types: parsed line items, calculated products and the
//! user-editable quote details.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::services::catalogue::{CatalogueOrigin, Suggestion};

/// A line produced by document/quote parsing (outside this crate).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedLineItem {
    pub line_number: u32,
    pub product_code_raw: String,
    pub quantity: u32,
}

/// Provenance of a product's install time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductSource {
    Catalogue,
    Learned,
    UserInputted,
    Default,
}

impl From<CatalogueOrigin> for ProductSource {
    fn from(origin: CatalogueOrigin) -> Self {
        match origin {
            CatalogueOrigin::Reference => ProductSource::Catalogue,
            CatalogueOrigin::Learned => ProductSource::Learned,
        }
    }
}

impl std::fmt::Display for ProductSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProductSource::Catalogue => write!(f, "catalogue"),
            ProductSource::Learned => write!(f, "learned"),
            ProductSource::UserInputted => write!(f, "user-inputted"),
            ProductSource::Default => write!(f, "default"),
        }
    }
}

/// A line item merged with its catalogue values or a user override.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatedProduct {
    pub line_number: u32,
    /// Code exactly as parsed.
    pub raw_code: String,
    /// Matched catalogue code, or the raw code when unmatched.
    pub product_code: String,
    pub quantity: u32,
    pub time_per_unit: f64,
    pub total_time: f64,
    pub waste_per_unit: f64,
    pub total_waste: f64,
    pub is_heavy: bool,
    #[serde(default)]
    pub requires_specialist: bool,
    pub is_manually_edited: bool,
    pub source: ProductSource,
}

impl CalculatedProduct {
    /// Recompute `total_time` and `total_waste` from the per-unit values.
    pub fn recompute_totals(&mut self) {
        let qty = f64::from(self.quantity);
        self.total_time = qty * self.time_per_unit;
        self.total_waste = qty * self.waste_per_unit;
    }
}

/// A line with no catalogue match; the user must supply an install time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnmatchedLine {
    pub line_number: u32,
    pub product_code_raw: String,
    pub quantity: u32,
    pub suggestions: Vec<Suggestion>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VanType {
    OneMan,
    TwoMan,
}

impl VanType {
    /// Fitters the van carries.
    pub fn seats(&self) -> u32 {
        match self {
            VanType::OneMan => 1,
            VanType::TwoMan => 2,
        }
    }
}

impl std::fmt::Display for VanType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VanType::OneMan => write!(f, "one-man van"),
            VanType::TwoMan => write!(f, "two-man van"),
        }
    }
}

/// Client/job metadata, crew overrides and service flags.
///
/// `None` overrides mean "use the computed default"; a previous override is
/// never carried into a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuoteDetails {
    pub client_name: String,
    pub project_name: String,
    pub site_address: String,
    pub quote_reference: Option<String>,
    pub job_start: Option<NaiveDateTime>,

    pub override_fitter_count: Option<u32>,
    pub override_supervisor_count: Option<u32>,
    pub override_van_type: Option<VanType>,
    pub selected_vehicles: Vec<String>,

    pub parking_required: bool,
    pub specialist_rework: bool,
    pub out_of_hours: bool,
    pub waste_removal: bool,
}

impl Default for QuoteDetails {
    fn default() -> Self {
        Self {
            client_name: String::new(),
            project_name: String::new(),
            site_address: String::new(),
            quote_reference: None,
            job_start: None,
            override_fitter_count: None,
            override_supervisor_count: None,
            override_van_type: None,
            selected_vehicles: Vec::new(),
            parking_required: false,
            specialist_rework: false,
            out_of_hours: false,
            waste_removal: true,
        }
    }
}
