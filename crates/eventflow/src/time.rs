//! Date/time parsing, half-open intervals, and display formatting.
//!
//! Every date and time string that enters the crate goes through
//! [`parse_date`], [`parse_time`] or [`parse_event_time`]. Malformed input is
//! reported as [`EventFlowError::MalformedTimeInput`] instead of turning into a
//! value that silently compares false. All times are naive local wall-clock
//! times; no timezone is attached.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::error::{EventFlowError, Result};

/// Parse a calendar date in canonical `YYYY-MM-DD` form.
///
/// Dates are matched against each other as strings, so anything that would
/// compare unequal to its own canonical form (`2026-3-2`, ` 2026-03-02`) is
/// rejected rather than parsed.
pub fn parse_date(date: &str) -> Result<NaiveDate> {
    reject_padding(date)?;
    let parsed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| EventFlowError::malformed(date, e))?;
    if parsed.format("%Y-%m-%d").to_string() != date {
        return Err(EventFlowError::malformed(date, "expected YYYY-MM-DD"));
    }
    Ok(parsed)
}

/// Parse a 24-hour wall-clock time in `HH:MM` form.
///
/// `HH:MM:SS` is also accepted since browser time inputs may emit seconds.
pub fn parse_time(time: &str) -> Result<NaiveTime> {
    reject_padding(time)?;
    NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .map_err(|e| EventFlowError::malformed(time, e))
}

fn reject_padding(input: &str) -> Result<()> {
    if input.trim() != input {
        return Err(EventFlowError::malformed(input, "surrounding whitespace"));
    }
    Ok(())
}

/// Combine a date string and a time string into a single point in time.
pub fn parse_event_time(date: &str, time: &str) -> Result<NaiveDateTime> {
    Ok(parse_date(date)?.and_time(parse_time(time)?))
}

/// A half-open time interval `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Interval {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Build an interval from a date and two `HH:MM` times on that date.
    ///
    /// `start >= end` is not rejected here; the form layer enforces ordering.
    pub fn from_strings(date: &str, start_time: &str, end_time: &str) -> Result<Self> {
        let day = parse_date(date)?;
        Ok(Self {
            start: day.and_time(parse_time(start_time)?),
            end: day.and_time(parse_time(end_time)?),
        })
    }

    /// Two intervals overlap iff `a.start < b.end && b.start < a.end`.
    ///
    /// Intervals that merely touch (one ends exactly when the other starts)
    /// do not overlap.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }

    /// Length of the shared portion in minutes, or `None` when disjoint.
    pub fn overlap_minutes(&self, other: &Interval) -> Option<i64> {
        if !self.overlaps(other) {
            return None;
        }
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        Some((end - start).num_minutes())
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }
}

/// Format a time on the 12-hour clock, e.g. `9:00 AM`, `1:30 PM`.
pub fn format_time_12h(time: NaiveTime) -> String {
    time.format("%-I:%M %p").to_string()
}

/// Format a date in long form, e.g. `Saturday, January 25, 2025`.
pub fn format_date_long(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Human-readable distance from `now` until an event starts.
///
/// Returns `Event has passed` once the start time is behind `now`; otherwise
/// the largest non-zero unit among days, hours and minutes. Under a minute
/// reads `0 minutes away`.
pub fn time_until(now: NaiveDateTime, date: &str, time: &str) -> Result<String> {
    let starts_at = parse_event_time(date, time)?;
    let remaining = starts_at - now;

    if remaining < chrono::Duration::zero() {
        return Ok("Event has passed".to_string());
    }

    let days = remaining.num_days();
    let hours = remaining.num_hours() % 24;
    let minutes = remaining.num_minutes() % 60;

    Ok(if days > 0 {
        plural(days, "day")
    } else if hours > 0 {
        plural(hours, "hour")
    } else {
        plural(minutes, "minute")
    })
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("{} {} away", n, unit)
    } else {
        format!("{} {}s away", n, unit)
    }
}
