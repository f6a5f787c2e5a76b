//! Input validation. Everything here runs before a value reaches a product,
//! the calculator or a saved config; on error the previous value is kept.

use crate::services::config::QuoteConfig;
use crate::services::quote::types::CalculatedProduct;
use crate::types::errors::ValidationError;

/// Accept a finite, non-negative number.
pub fn validate_non_negative(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite { field });
    }
    if value < 0.0 {
        return Err(ValidationError::Negative { field, value });
    }
    Ok(value)
}

/// Validate an install time in hours per unit.
pub fn validate_time(value: f64) -> Result<f64, ValidationError> {
    validate_non_negative("time_per_unit", value)
}

/// Parse a user-typed install time (`"1.5"`, `" 2 "`).
pub fn parse_time_input(input: &str) -> Result<f64, ValidationError> {
    let trimmed = input.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| ValidationError::NotANumber {
            field: "time_per_unit",
            input: input.to_string(),
        })?;
    validate_time(value)
}

/// Parse a user-typed quantity. Negative and fractional input is rejected.
pub fn parse_quantity_input(input: &str) -> Result<u32, ValidationError> {
    let trimmed = input.trim();
    match trimmed.parse::<i64>() {
        Ok(value) if value < 0 => Err(ValidationError::Negative {
            field: "quantity",
            value: value as f64,
        }),
        Ok(value) => u32::try_from(value).map_err(|_| ValidationError::OutOfRange {
            field: "quantity",
            value: value as f64,
            reason: "exceeds maximum quantity",
        }),
        Err(_) => Err(ValidationError::NotANumber {
            field: "quantity",
            input: input.to_string(),
        }),
    }
}

/// Reject products carrying non-finite or negative numbers.
pub fn validate_product(product: &CalculatedProduct) -> Result<(), ValidationError> {
    validate_non_negative("time_per_unit", product.time_per_unit)?;
    validate_non_negative("total_time", product.total_time)?;
    validate_non_negative("waste_per_unit", product.waste_per_unit)?;
    validate_non_negative("total_waste", product.total_waste)?;
    Ok(())
}

/// Reject structurally invalid configuration numbers.
///
/// Missing day rates are not an error here; the calculator reports them as
/// warnings so a partial quote can still be shown.
pub fn validate_config(config: &QuoteConfig) -> Result<(), ValidationError> {
    validate_percentage("uplift_buffer_percentage", config.uplift_buffer_percentage)?;
    validate_percentage("duration_buffer_percentage", config.duration_buffer_percentage)?;

    let multiplier = validate_non_negative("out_of_hours_multiplier", config.out_of_hours_multiplier)?;
    if multiplier < 1.0 {
        return Err(ValidationError::OutOfRange {
            field: "out_of_hours_multiplier",
            value: multiplier,
            reason: "must be at least 1.0",
        });
    }

    validate_positive("standard_workday_hours", config.crew.standard_workday_hours)?;
    validate_positive("load_capacity_m3", config.waste.load_capacity_m3)?;
    validate_non_negative("parking", config.charges.parking)?;
    validate_non_negative("specialist_rework", config.charges.specialist_rework)?;
    validate_non_negative("review_tolerance_hours", config.review_tolerance_hours)?;

    let rates = &config.day_rates;
    for (field, rate) in [
        ("day_rates.installer", rates.installer),
        ("day_rates.supervisor", rates.supervisor),
        ("day_rates.specialist", rates.specialist),
        ("day_rates.vehicle", rates.vehicle),
        ("day_rates.waste_load", rates.waste_load),
    ] {
        if let Some(rate) = rate {
            validate_non_negative(field, rate)?;
        }
    }

    for vehicle in config.vehicles.values() {
        validate_non_negative("vehicles.cost_per_day", vehicle.cost_per_day)?;
        validate_non_negative("vehicles.capacity_m3", vehicle.capacity_m3)?;
    }

    let hours = &config.working_hours;
    if hours.start_hour > 23 || hours.end_hour > 24 || hours.start_hour >= hours.end_hour {
        return Err(ValidationError::OutOfRange {
            field: "working_hours",
            value: f64::from(hours.start_hour),
            reason: "start_hour must be before end_hour within 0..=24",
        });
    }

    Ok(())
}

fn validate_positive(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    let value = validate_non_negative(field, value)?;
    if value == 0.0 {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            reason: "must be greater than zero",
        });
    }
    Ok(value)
}

/// Buffers may be zero or negative (a discount) but never reach -100%.
fn validate_percentage(field: &'static str, value: f64) -> Result<f64, ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFinite { field });
    }
    if value <= -100.0 {
        return Err(ValidationError::OutOfRange {
            field,
            value,
            reason: "must be greater than -100",
        });
    }
    Ok(value)
}

#[cfg(test)]
#[path = "tests/validator_tests.rs"]
mod tests;
