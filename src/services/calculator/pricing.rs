//! Cost lines from a crew plan and waste summary.

use super::results::{CalculationWarning, CostKind, CostLine, CrewSummary, PricingSummary, WasteSummary};
use super::sum;
use crate::services::config::QuoteConfig;
use crate::services::quote::types::QuoteDetails;

/// Accumulates lines and warnings while pricing one quote.
struct LineBuilder {
    lines: Vec<CostLine>,
    warnings: Vec<CalculationWarning>,
}

impl LineBuilder {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// `units * rate * days`, or a zero line plus a warning when the rate is missing.
    fn day_rate(&mut self, kind: CostKind, role: &str, units: u32, rate: Option<f64>, days: u32) {
        if units == 0 {
            return;
        }
        let rate = match rate {
            Some(rate) => rate,
            None => {
                log::warn!("No day rate for {role}; pricing {units} unit(s) at zero");
                self.warnings.push(CalculationWarning::MissingDayRate {
                    role: role.to_string(),
                });
                0.0
            }
        };
        self.push(CostLine {
            kind,
            description: format!("{units} x {role} for {days} day(s)"),
            units,
            rate,
            days,
            amount: f64::from(units) * rate * f64::from(days),
        });
    }

    fn flat(&mut self, kind: CostKind, description: &str, amount: f64) {
        self.push(CostLine {
            kind,
            description: description.to_string(),
            units: 1,
            rate: amount,
            days: 1,
            amount,
        });
    }

    fn push(&mut self, line: CostLine) {
        self.lines.push(line);
    }

    fn sum(&self, pred: impl Fn(CostKind) -> bool) -> f64 {
        let amounts = self
            .lines
            .iter()
            .filter(|line| pred(line.kind))
            .map(|line| line.amount);
        sum(amounts)
    }
}

pub fn price(
    crew: &CrewSummary,
    billable_days: u32,
    waste: &WasteSummary,
    details: &QuoteDetails,
    config: &QuoteConfig,
    out_of_hours: bool,
) -> (PricingSummary, Vec<CalculationWarning>) {
    let rates = &config.day_rates;
    let mut b = LineBuilder::new();

    b.day_rate(
        CostKind::Fitters,
        "fitter",
        crew.total_fitters(),
        rates.installer,
        billable_days,
    );
    b.day_rate(
        CostKind::Supervisors,
        "supervisor",
        crew.supervisors,
        rates.supervisor,
        billable_days,
    );
    b.day_rate(
        CostKind::Specialists,
        "specialist",
        crew.specialists,
        rates.specialist,
        billable_days,
    );

    price_vehicles(&mut b, crew, billable_days, details, config);

    if details.waste_removal && waste.loads > 0 {
        b.day_rate(CostKind::WasteLoads, "waste load", waste.loads, rates.waste_load, 1);
    }
    // Site extras only apply when the crew attends.
    if billable_days > 0 {
        if details.parking_required {
            b.flat(CostKind::Parking, "Parking", config.charges.parking);
        }
        if details.specialist_rework {
            b.flat(
                CostKind::SpecialistRework,
                "Specialist rework",
                config.charges.specialist_rework,
            );
        }
    }

    let labour_cost = b.sum(|kind| kind.is_labour());
    if out_of_hours {
        let surcharge = labour_cost * (config.out_of_hours_multiplier - 1.0);
        if surcharge > 0.0 {
            b.flat(CostKind::OutOfHoursSurcharge, "Out-of-hours surcharge", surcharge);
        }
    }

    let vehicle_cost = b.sum(|kind| kind == CostKind::Vehicle);
    let waste_cost = b.sum(|kind| kind == CostKind::WasteLoads);
    let extras_cost = b.sum(|kind| {
        matches!(
            kind,
            CostKind::Parking | CostKind::SpecialistRework | CostKind::OutOfHoursSurcharge
        )
    });
    let total = b.sum(|_| true);

    let LineBuilder { lines, warnings } = b;
    (
        PricingSummary {
            lines,
            labour_cost,
            vehicle_cost,
            waste_cost,
            extras_cost,
            total,
            out_of_hours,
        },
        warnings,
    )
}

/// Selected vehicles by id; without a selection, the crew's van at the flat vehicle rate.
fn price_vehicles(
    b: &mut LineBuilder,
    crew: &CrewSummary,
    billable_days: u32,
    details: &QuoteDetails,
    config: &QuoteConfig,
) {
    if billable_days == 0 {
        return;
    }

    if details.selected_vehicles.is_empty() {
        if let Some(van) = crew.van_type {
            b.day_rate(
                CostKind::Vehicle,
                &van.to_string(),
                1,
                config.day_rates.vehicle,
                billable_days,
            );
        }
        return;
    }

    for id in &details.selected_vehicles {
        match config.vehicles.get(id) {
            Some(vehicle) => b.day_rate(
                CostKind::Vehicle,
                &vehicle.name,
                1,
                Some(vehicle.cost_per_day),
                billable_days,
            ),
            None => {
                log::warn!("Vehicle '{id}' is not configured; pricing at zero");
                b.warnings.push(CalculationWarning::UnknownVehicle {
                    vehicle_id: id.clone(),
                });
                b.push(CostLine {
                    kind: CostKind::Vehicle,
                    description: format!("Unknown vehicle '{id}'"),
                    units: 1,
                    rate: 0.0,
                    days: billable_days,
                    amount: 0.0,
                });
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/pricing_tests.rs"]
mod tests;
