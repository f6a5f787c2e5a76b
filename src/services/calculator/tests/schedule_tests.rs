use super::*;
use chrono::NaiveDate;

fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(h, 0, 0)
        .unwrap()
}

#[test]
fn test_weekday_inside_window() {
    // 2026-10-19 is a Monday
    let hours = WorkingHours::default();
    assert!(!is_out_of_hours(at(2026, 10, 19, 8), &hours));
    assert!(!is_out_of_hours(at(2026, 10, 19, 16), &hours));
}

#[test]
fn test_weekday_outside_window() {
    let hours = WorkingHours::default();
    assert!(is_out_of_hours(at(2026, 10, 19, 7), &hours));
    assert!(is_out_of_hours(at(2026, 10, 19, 17), &hours));
    assert!(is_out_of_hours(at(2026, 10, 19, 22), &hours));
}

#[test]
fn test_weekend() {
    let hours = WorkingHours::default();
    // 2026-10-24 is a Saturday
    assert!(is_out_of_hours(at(2026, 10, 24, 10), &hours));

    let weekdays_only = WorkingHours {
        weekends_out_of_hours: false,
        ..WorkingHours::default()
    };
    assert!(!is_out_of_hours(at(2026, 10, 24, 10), &weekdays_only));
}

#[test]
fn test_out_of_hours_applies() {
    let hours = WorkingHours::default();
    let mut details = QuoteDetails::default();
    assert!(!out_of_hours_applies(&details, &hours));

    details.out_of_hours = true;
    assert!(out_of_hours_applies(&details, &hours));

    details.out_of_hours = false;
    details.job_start = Some(at(2026, 10, 25, 9)); // Sunday
    assert!(out_of_hours_applies(&details, &hours));

    details.job_start = Some(at(2026, 10, 20, 9)); // Tuesday
    assert!(!out_of_hours_applies(&details, &hours));
}
