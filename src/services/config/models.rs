use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Day rates per role. A `None` rate yields a zero-cost line and a warning.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct DayRates {
    pub installer: Option<f64>,
    pub supervisor: Option<f64>,
    #[serde(default)]
    pub specialist: Option<f64>,
    pub vehicle: Option<f64>,
    pub waste_load: Option<f64>,
}

impl Default for DayRates {
    fn default() -> Self {
        Self {
            installer: Some(280.0),
            supervisor: Some(350.0),
            specialist: Some(420.0),
            vehicle: Some(120.0),
            waste_load: Some(180.0),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct VehicleSpec {
    pub name: String,
    pub cost_per_day: f64,
    /// Waste volume one trip carries when this vehicle is selected.
    pub capacity_m3: f64,
}

fn default_vehicles() -> BTreeMap<String, VehicleSpec> {
    BTreeMap::from([
        (
            "one-man-van".to_string(),
            VehicleSpec {
                name: "One-man van".to_string(),
                cost_per_day: 95.0,
                capacity_m3: 6.0,
            },
        ),
        (
            "two-man-van".to_string(),
            VehicleSpec {
                name: "Two-man van".to_string(),
                cost_per_day: 120.0,
                capacity_m3: 10.0,
            },
        ),
        (
            "luton".to_string(),
            VehicleSpec {
                name: "Luton".to_string(),
                cost_per_day: 165.0,
                capacity_m3: 18.0,
            },
        ),
    ])
}

/// Crew sizing policy.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct CrewPolicy {
    pub standard_workday_hours: f64,
    /// Upper bound on the computed fitter count (overrides may exceed it).
    pub max_default_fitters: u32,
    /// Each entry is a fitter count at which one more supervisor is added.
    pub supervisor_thresholds: Vec<u32>,
    /// Heavy item quantity above which a two-man van is required.
    pub heavy_item_threshold: u32,
    /// Fitter count from which a two-man van is required.
    pub two_man_crew_threshold: u32,
}

impl Default for CrewPolicy {
    fn default() -> Self {
        Self {
            standard_workday_hours: 8.0,
            max_default_fitters: 4,
            supervisor_thresholds: vec![4, 8],
            heavy_item_threshold: 0,
            two_man_crew_threshold: 2,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WastePolicy {
    pub load_capacity_m3: f64,
    /// Loads above this count flag the quote as high waste.
    pub high_waste_load_threshold: u32,
}

impl Default for WastePolicy {
    fn default() -> Self {
        Self {
            load_capacity_m3: 10.0,
            high_waste_load_threshold: 2,
        }
    }
}

/// Per-job flat charges added on top of day-rate costs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FlatCharges {
    pub parking: f64,
    pub specialist_rework: f64,
}

impl Default for FlatCharges {
    fn default() -> Self {
        Self {
            parking: 35.0,
            specialist_rework: 250.0,
        }
    }
}

/// Normal working window; jobs starting outside it are out of hours.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorkingHours {
    pub start_hour: u32,
    pub end_hour: u32,
    pub weekends_out_of_hours: bool,
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self {
            start_hour: 8,
            end_hour: 17,
            weekends_out_of_hours: true,
        }
    }
}

/// A product family whose codes embed a seat count (`FLX-4P-2400`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct FamilyConfig {
    pub family: String,
    /// Alternate spellings seen in free-text descriptions.
    #[serde(default)]
    pub aliases: Vec<String>,
}

/// Regex → fixed catalogue codes, tried in order.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AliasConfig {
    pub name: String,
    pub pattern: String,
    pub codes: Vec<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MatcherConfig {
    pub families: Vec<FamilyConfig>,
    pub aliases: Vec<AliasConfig>,
    pub strip_prefixes: Vec<String>,
    pub suggestion_limit: usize,
    pub min_suggestion_similarity: f64,
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            families: vec![FamilyConfig {
                family: "FLX".to_string(),
                aliases: vec!["FLEX".to_string()],
            }],
            aliases: Vec::new(),
            strip_prefixes: vec![
                "SUPPLY AND INSTALL".to_string(),
                "SUPPLY & INSTALL".to_string(),
                "INSTALL".to_string(),
                "NEW".to_string(),
            ],
            suggestion_limit: 3,
            min_suggestion_similarity: 0.5,
        }
    }
}

/// Everything the calculator and matcher need, supplied wholesale per call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct QuoteConfig {
    pub day_rates: DayRates,
    pub vehicles: BTreeMap<String, VehicleSpec>,
    pub uplift_buffer_percentage: f64,
    pub duration_buffer_percentage: f64,
    pub out_of_hours_multiplier: f64,
    pub crew: CrewPolicy,
    pub waste: WastePolicy,
    pub charges: FlatCharges,
    pub working_hours: WorkingHours,
    pub matcher: MatcherConfig,
    /// Hours of difference tolerated before review suggests the catalogue time.
    pub review_tolerance_hours: f64,
}

impl Default for QuoteConfig {
    fn default() -> Self {
        Self {
            day_rates: DayRates::default(),
            vehicles: default_vehicles(),
            uplift_buffer_percentage: 10.0,
            duration_buffer_percentage: 20.0,
            out_of_hours_multiplier: 1.5,
            crew: CrewPolicy::default(),
            waste: WastePolicy::default(),
            charges: FlatCharges::default(),
            working_hours: WorkingHours::default(),
            matcher: MatcherConfig::default(),
            review_tolerance_hours: 0.01,
        }
    }
}
