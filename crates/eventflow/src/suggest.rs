//! Suggest alternative start times on a day.
//!
//! Walks a fixed grid of candidate start times in ascending order and keeps
//! those whose `[start, start + duration)` window overlaps none of the day's
//! events. Unlike conflict detection, venue is ignored here: a suggested slot
//! is free across the whole campus.

use chrono::{Duration, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::config::SchedulerConfig;
use crate::error::{EventFlowError, Result};
use crate::event::Event;
use crate::time::{format_time_12h, parse_date, Interval};

/// A free window proposed by the suggester.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestedSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl SuggestedSlot {
    pub fn interval(&self) -> Interval {
        Interval::new(self.start, self.end)
    }
}

impl std::fmt::Display for SuggestedSlot {
    /// `9:00 AM - 11:00 AM`. A window running past midnight shows the
    /// next day's wall-clock end time.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} - {}",
            format_time_12h(self.start.time()),
            format_time_12h(self.end.time())
        )
    }
}

/// Up to three display strings for free windows of `duration_hours` on `date`,
/// using the default 09:00–17:00 hourly grid.
pub fn suggest_slots(date: &str, duration_hours: f64, existing: &[Event]) -> Result<Vec<String>> {
    let slots =
        suggest_slot_intervals(&SchedulerConfig::default(), date, duration_hours, existing)?;
    Ok(slots.iter().map(ToString::to_string).collect())
}

/// Typed form of [`suggest_slots`] driven by an explicit configuration.
///
/// # Errors
/// - `MalformedTimeInput` when `date`, a configured slot, or any event on
///   `date` fails to parse.
/// - `InvalidDuration` when `duration_hours` is not a positive finite number.
pub fn suggest_slot_intervals(
    config: &SchedulerConfig,
    date: &str,
    duration_hours: f64,
    existing: &[Event],
) -> Result<Vec<SuggestedSlot>> {
    let length = duration_from_hours(duration_hours)?;
    let day = parse_date(date)?;

    let busy: Vec<Interval> = existing
        .iter()
        .filter(|e| e.date == date)
        .map(Event::interval)
        .collect::<Result<_>>()?;

    let mut slots = Vec::new();
    for start_time in config.slot_grid()? {
        if slots.len() >= config.max_suggestions {
            break;
        }
        let start = day.and_time(start_time);
        let end = start
            .checked_add_signed(length)
            .ok_or(EventFlowError::InvalidDuration(duration_hours))?;
        let window = Interval::new(start, end);

        if busy.iter().all(|b| !window.overlaps(b)) {
            slots.push(SuggestedSlot { start, end });
        }
    }

    tracing::debug!(date, duration_hours, found = slots.len(), "slot suggestions");
    Ok(slots)
}

/// Fractional hours to a whole number of seconds.
fn duration_from_hours(hours: f64) -> Result<Duration> {
    if !hours.is_finite() || hours <= 0.0 {
        return Err(EventFlowError::InvalidDuration(hours));
    }
    Duration::try_seconds((hours * 3600.0).round() as i64)
        .ok_or(EventFlowError::InvalidDuration(hours))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractional_hours_round_to_seconds() {
        assert_eq!(duration_from_hours(1.5).unwrap(), Duration::minutes(90));
        assert_eq!(duration_from_hours(0.25).unwrap(), Duration::minutes(15));
    }

    #[test]
    fn rejects_non_positive_and_nan() {
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(duration_from_hours(bad).is_err(), "{} accepted", bad);
        }
    }

    #[test]
    fn huge_duration_is_an_error_not_a_panic() {
        assert!(duration_from_hours(1e300).is_err());
    }
}
