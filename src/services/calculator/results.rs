//! Calculation output. Always rebuilt in full; never patched in place.

use serde::{Deserialize, Serialize};

use crate::services::quote::types::VanType;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabourSummary {
    /// Sum of per-product `total_time`.
    pub total_hours: f64,
    pub hours_after_uplift: f64,
    /// Uplift then duration buffer, compounded.
    pub buffered_hours: f64,
    pub person_days: u32,
    pub billable_days: u32,
    pub specialist_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CrewSummary {
    pub van_fitters: u32,
    pub on_foot_fitters: u32,
    pub supervisors: u32,
    pub specialists: u32,
    pub van_type: Option<VanType>,
    /// Quantity of products flagged heavy.
    pub heavy_items: u32,
    pub fitters_overridden: bool,
    pub supervisors_overridden: bool,
    pub van_overridden: bool,
}

impl CrewSummary {
    pub fn total_fitters(&self) -> u32 {
        self.van_fitters + self.on_foot_fitters
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WasteSummary {
    pub total_volume_m3: f64,
    pub loads: u32,
    pub high_waste: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CostKind {
    Fitters,
    Supervisors,
    Specialists,
    Vehicle,
    WasteLoads,
    Parking,
    SpecialistRework,
    OutOfHoursSurcharge,
}

impl CostKind {
    /// Labour lines are the base of the out-of-hours surcharge.
    pub fn is_labour(&self) -> bool {
        matches!(
            self,
            CostKind::Fitters | CostKind::Supervisors | CostKind::Specialists
        )
    }
}

/// One priced line: `amount = units * rate * days` for day-rate lines.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CostLine {
    pub kind: CostKind,
    pub description: String,
    pub units: u32,
    pub rate: f64,
    pub days: u32,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingSummary {
    pub lines: Vec<CostLine>,
    pub labour_cost: f64,
    pub vehicle_cost: f64,
    pub waste_cost: f64,
    pub extras_cost: f64,
    /// Sum of all lines, excluding VAT.
    pub total: f64,
    pub out_of_hours: bool,
}

/// Recoverable anomaly in the inputs or configuration. Missing rates and
/// unknown vehicles are priced at zero; an ignored override falls back to the
/// computed crew.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CalculationWarning {
    MissingDayRate { role: String },
    UnknownVehicle { vehicle_id: String },
    IgnoredFitterOverride { buffered_hours: f64 },
}

impl std::fmt::Display for CalculationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CalculationWarning::MissingDayRate { role } => {
                write!(f, "No day rate configured for {role}; line priced at zero")
            }
            CalculationWarning::UnknownVehicle { vehicle_id } => {
                write!(f, "Unknown vehicle '{vehicle_id}'; line priced at zero")
            }
            CalculationWarning::IgnoredFitterOverride { buffered_hours } => write!(
                f,
                "Fitter override of 0 ignored for {buffered_hours:.2} buffered hour(s); computed crew used"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculationResults {
    pub labour: LabourSummary,
    pub crew: CrewSummary,
    pub waste: WasteSummary,
    pub pricing: PricingSummary,
    pub warnings: Vec<CalculationWarning>,
}
