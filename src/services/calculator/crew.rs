//! Crew composition: fitters, supervisors, specialists and van choice.
//!
//! Overrides in `QuoteDetails` replace the computed value outright, except a
//! zero fitter override on a job with work, which is ignored with a warning.

use super::ceil_units;
use super::results::{CalculationWarning, CrewSummary};
use crate::services::config::CrewPolicy;
use crate::services::quote::types::{QuoteDetails, VanType};

/// Crew plus the day counts derived alongside it.
#[derive(Debug, Clone, PartialEq)]
pub struct CrewPlan {
    pub crew: CrewSummary,
    pub person_days: u32,
    pub billable_days: u32,
    pub warnings: Vec<CalculationWarning>,
}

/// Labour totals the crew plan is derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CrewInputs {
    pub buffered_hours: f64,
    pub buffered_specialist_hours: f64,
    pub heavy_items: u32,
}

pub fn plan_crew(inputs: CrewInputs, details: &QuoteDetails, policy: &CrewPolicy) -> CrewPlan {
    let workday = policy.standard_workday_hours;
    let person_days = ceil_units(inputs.buffered_hours / workday);

    let mut warnings = Vec::new();
    let fitter_override = match details.override_fitter_count {
        Some(0) if person_days > 0 => {
            log::warn!(
                "Ignoring fitter override of 0 for {:.2} buffered hour(s)",
                inputs.buffered_hours
            );
            warnings.push(CalculationWarning::IgnoredFitterOverride {
                buffered_hours: inputs.buffered_hours,
            });
            None
        }
        other => other,
    };
    let fitters = fitter_override.unwrap_or_else(|| computed_fitters(person_days, policy));
    let billable_days = billable_days(inputs.buffered_hours, fitters, workday);

    let supervisors = details
        .override_supervisor_count
        .unwrap_or_else(|| supervisors_for(fitters, &policy.supervisor_thresholds));
    let specialists = specialists_for(inputs.buffered_specialist_hours, billable_days, workday);

    let van_type = details
        .override_van_type
        .or_else(|| default_van(fitters, inputs.heavy_items, policy));
    let van_fitters = van_type.map_or(0, |van| fitters.min(van.seats()));

    CrewPlan {
        crew: CrewSummary {
            van_fitters,
            on_foot_fitters: fitters - van_fitters,
            supervisors,
            specialists,
            van_type,
            heavy_items: inputs.heavy_items,
            fitters_overridden: fitter_override.is_some(),
            supervisors_overridden: details.override_supervisor_count.is_some(),
            van_overridden: details.override_van_type.is_some(),
        },
        person_days,
        billable_days,
        warnings,
    }
}

/// One fitter per person-day, at least one when there is work, capped by policy.
pub fn computed_fitters(person_days: u32, policy: &CrewPolicy) -> u32 {
    if person_days == 0 {
        return 0;
    }
    person_days.clamp(1, policy.max_default_fitters.max(1))
}

/// Days the crew needs on site. Zero without fitters.
pub fn billable_days(buffered_hours: f64, fitters: u32, workday_hours: f64) -> u32 {
    if fitters == 0 {
        return 0;
    }
    ceil_units(buffered_hours / (workday_hours * f64::from(fitters)))
}

/// One supervisor per threshold the fitter count reaches.
pub fn supervisors_for(fitters: u32, thresholds: &[u32]) -> u32 {
    let reached = thresholds
        .iter()
        .filter(|&&threshold| threshold > 0 && fitters >= threshold)
        .count();
    u32::try_from(reached).unwrap_or(u32::MAX)
}

/// Enough specialists to cover specialist hours within the billable days.
pub fn specialists_for(buffered_specialist_hours: f64, billable_days: u32, workday_hours: f64) -> u32 {
    if billable_days == 0 {
        return 0;
    }
    ceil_units(buffered_specialist_hours / (workday_hours * f64::from(billable_days)))
}

/// Two-man van for heavy loads or multi-fitter crews, none without fitters.
pub fn default_van(fitters: u32, heavy_items: u32, policy: &CrewPolicy) -> Option<VanType> {
    if fitters == 0 {
        return None;
    }
    if heavy_items > policy.heavy_item_threshold || fitters >= policy.two_man_crew_threshold {
        Some(VanType::TwoMan)
    } else {
        Some(VanType::OneMan)
    }
}

#[cfg(test)]
#[path = "tests/crew_tests.rs"]
mod tests;
