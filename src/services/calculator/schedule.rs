//! Out-of-hours detection from the job start time.

use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};

use crate::services::config::WorkingHours;
use crate::services::quote::types::QuoteDetails;

/// Whether a job starting at `start` falls outside normal working hours.
///
/// Saturdays and Sundays count as out of hours when `weekends_out_of_hours`
/// is set; otherwise only the `[start_hour, end_hour)` window applies.
pub fn is_out_of_hours(start: NaiveDateTime, hours: &WorkingHours) -> bool {
    if hours.weekends_out_of_hours && matches!(start.weekday(), Weekday::Sat | Weekday::Sun) {
        return true;
    }
    let hour = start.hour();
    hour < hours.start_hour || hour >= hours.end_hour
}

/// Explicit flag, or a job start outside working hours.
pub fn out_of_hours_applies(details: &QuoteDetails, hours: &WorkingHours) -> bool {
    details.out_of_hours
        || details
            .job_start
            .is_some_and(|start| is_out_of_hours(start, hours))
}

#[cfg(test)]
#[path = "tests/schedule_tests.rs"]
mod tests;
