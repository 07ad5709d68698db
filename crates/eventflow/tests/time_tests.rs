//! Tests for date/time parsing, intervals, and formatting.

use chrono::{NaiveDate, NaiveDateTime};
use eventflow::time::{
    format_date_long, parse_date, parse_event_time, time_until, Interval,
};
use eventflow::EventFlowError;

fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap()
}

#[test]
fn parse_event_time_combines_date_and_time() {
    assert_eq!(
        parse_event_time("2025-01-25", "14:00").unwrap(),
        at("2025-01-25 14:00")
    );
}

#[test]
fn impossible_calendar_date_rejected() {
    assert!(matches!(
        parse_date("2025-02-30"),
        Err(EventFlowError::MalformedTimeInput { .. })
    ));
}

#[test]
fn boundary_intervals() {
    let nine_ten = Interval::from_strings("2026-03-02", "09:00", "10:00").unwrap();
    let ten_eleven = Interval::from_strings("2026-03-02", "10:00", "11:00").unwrap();
    let nine_eleven = Interval::from_strings("2026-03-02", "09:00", "11:00").unwrap();
    let ten_twelve = Interval::from_strings("2026-03-02", "10:00", "12:00").unwrap();

    assert!(!nine_ten.overlaps(&ten_eleven));
    assert!(!ten_eleven.overlaps(&nine_ten));
    assert!(nine_eleven.overlaps(&ten_twelve));
    assert!(ten_twelve.overlaps(&nine_eleven));

    assert_eq!(nine_ten.overlap_minutes(&ten_eleven), None);
    assert_eq!(nine_eleven.overlap_minutes(&ten_twelve), Some(60));
}

#[test]
fn long_date_format() {
    let d = NaiveDate::from_ymd_opt(2025, 1, 25).unwrap();
    assert_eq!(format_date_long(d), "Saturday, January 25, 2025");
}

#[test]
fn time_until_passed() {
    let now = at("2025-01-26 09:00");
    assert_eq!(
        time_until(now, "2025-01-25", "14:00").unwrap(),
        "Event has passed"
    );
}

#[test]
fn time_until_picks_largest_unit() {
    let now = at("2025-01-20 09:00");
    assert_eq!(time_until(now, "2025-01-25", "14:00").unwrap(), "5 days away");
    assert_eq!(time_until(now, "2025-01-21", "09:30").unwrap(), "1 day away");
    assert_eq!(time_until(now, "2025-01-20", "12:10").unwrap(), "3 hours away");
    assert_eq!(time_until(now, "2025-01-20", "10:00").unwrap(), "1 hour away");
    assert_eq!(time_until(now, "2025-01-20", "09:45").unwrap(), "45 minutes away");
    assert_eq!(time_until(now, "2025-01-20", "09:01").unwrap(), "1 minute away");
}

#[test]
fn time_until_malformed() {
    let now = at("2025-01-20 09:00");
    assert!(time_until(now, "2025-01-20", "noon").is_err());
}

#[test]
fn time_until_under_a_minute_says_zero_minutes() {
    let now = NaiveDateTime::parse_from_str("2025-01-20 09:59:30", "%Y-%m-%d %H:%M:%S").unwrap();
    assert_eq!(
        time_until(now, "2025-01-20", "10:00").unwrap(),
        "0 minutes away"
    );
    // Exactly at the start time is not yet "passed".
    assert_eq!(
        time_until(at("2025-01-20 10:00"), "2025-01-20", "10:00").unwrap(),
        "0 minutes away"
    );
}
