//! Quote calculator: labour buffers, crew, waste and pricing.
//!
//! `calculate` is pure. The same products, details and config always give the
//! same `CalculationResults`.

pub mod crew;
pub mod pricing;
pub mod results;
pub mod schedule;

pub use results::*;

use crate::services::config::QuoteConfig;
use crate::services::quote::types::{CalculatedProduct, QuoteDetails};
use crate::services::validator::{validate_config, validate_product};
use crate::types::errors::QuoteResult;
use crew::{plan_crew, CrewInputs};

/// Absorbs float noise so that e.g. `16.000000000001 / 8` is two days, not three.
const CEIL_EPSILON: f64 = 1e-9;

/// Ceiling to whole units, ignoring float noise below `CEIL_EPSILON`.
pub(crate) fn ceil_units(value: f64) -> u32 {
    if !value.is_finite() || value <= CEIL_EPSILON {
        return 0;
    }
    (value - CEIL_EPSILON).ceil() as u32
}

/// Apply the uplift then the duration buffer, both as percentages.
pub fn apply_buffers(total_hours: f64, uplift_pct: f64, duration_pct: f64) -> (f64, f64) {
    let after_uplift = total_hours * (1.0 + uplift_pct / 100.0);
    let buffered = after_uplift * (1.0 + duration_pct / 100.0);
    (after_uplift, buffered)
}

pub fn calculate(
    products: &[CalculatedProduct],
    details: &QuoteDetails,
    config: &QuoteConfig,
) -> QuoteResult<CalculationResults> {
    validate_config(config)?;
    for product in products {
        validate_product(product)?;
    }

    let total_hours = sum(products.iter().map(|p| p.total_time));
    let total_waste = sum(products.iter().map(|p| p.total_waste));
    let specialist_hours = sum(
        products
            .iter()
            .filter(|p| p.requires_specialist)
            .map(|p| p.total_time),
    );
    let heavy_items: u32 = products
        .iter()
        .filter(|p| p.is_heavy)
        .map(|p| p.quantity)
        .fold(0u32, u32::saturating_add);

    let uplift = config.uplift_buffer_percentage;
    let duration = config.duration_buffer_percentage;
    let (hours_after_uplift, buffered_hours) = apply_buffers(total_hours, uplift, duration);
    let (_, buffered_specialist_hours) = apply_buffers(specialist_hours, uplift, duration);

    let plan = plan_crew(
        CrewInputs {
            buffered_hours,
            buffered_specialist_hours,
            heavy_items,
        },
        details,
        &config.crew,
    );

    let loads = ceil_units(total_waste / load_capacity_m3(details, config));
    let waste = WasteSummary {
        total_volume_m3: total_waste,
        loads,
        high_waste: loads > config.waste.high_waste_load_threshold,
    };

    let out_of_hours = schedule::out_of_hours_applies(details, &config.working_hours);
    let (pricing, pricing_warnings) = pricing::price(
        &plan.crew,
        plan.billable_days,
        &waste,
        details,
        config,
        out_of_hours,
    );

    #[cfg(feature = "debug_matcher")]
    log::debug!(
        "calculate: {} product(s), {:.2}h buffered, {} fitter(s), {} day(s), total {:.2}",
        products.len(),
        buffered_hours,
        plan.crew.total_fitters(),
        plan.billable_days,
        pricing.total
    );

    let mut warnings = plan.warnings;
    warnings.extend(pricing_warnings);

    Ok(CalculationResults {
        labour: LabourSummary {
            total_hours,
            hours_after_uplift,
            buffered_hours,
            person_days: plan.person_days,
            billable_days: plan.billable_days,
            specialist_hours,
        },
        crew: plan.crew,
        waste,
        pricing,
        warnings,
    })
}

/// `f64` sum starting from `+0.0`; `Iterator::sum` yields `-0.0` when empty.
pub(crate) fn sum(values: impl Iterator<Item = f64>) -> f64 {
    values.fold(0.0, |acc, value| acc + value)
}

/// Volume of one waste load: the largest configured capacity among the
/// selected vehicles, else the waste policy's default.
fn load_capacity_m3(details: &QuoteDetails, config: &QuoteConfig) -> f64 {
    details
        .selected_vehicles
        .iter()
        .filter_map(|id| config.vehicles.get(id))
        .map(|vehicle| vehicle.capacity_m3)
        .filter(|capacity| capacity.is_finite() && *capacity > 0.0)
        .fold(None, |best: Option<f64>, capacity| {
            Some(best.map_or(capacity, |best| best.max(capacity)))
        })
        .unwrap_or(config.waste.load_capacity_m3)
}

#[cfg(test)]
#[path = "tests/calculator_tests.rs"]
mod tests;
