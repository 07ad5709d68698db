//! Detect venue double-bookings.
//!
//! A candidate booking conflicts with an existing event when both are at the
//! same venue on the same date and their `[start, end)` intervals overlap.
//! Adjacent events (where one ends exactly when another starts) are NOT
//! conflicts. Venue and date are compared as exact strings.

use crate::error::Result;
use crate::event::{Candidate, Event};

/// An existing event that the candidate overlaps.
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict<'a> {
    pub event: &'a Event,
    pub overlap_minutes: i64,
}

/// Report whether `candidate` overlaps any existing event at the same venue
/// on the same date. Stops at the first match.
///
/// The candidate's times are parsed up front, so a malformed candidate is an
/// error even when `existing` is empty. An existing event's times are parsed
/// only once it shares date and venue with the candidate.
pub fn has_conflict(existing: &[Event], candidate: &Candidate) -> Result<bool> {
    let wanted = candidate.interval()?;

    for event in same_slot(existing, candidate) {
        if wanted.overlaps(&event.interval()?) {
            tracing::debug!(event_id = %event.id, venue = %event.venue, "venue conflict");
            return Ok(true);
        }
    }

    Ok(false)
}

/// Find every existing event that `candidate` overlaps, in input order.
pub fn find_conflicts<'a>(existing: &'a [Event], candidate: &Candidate) -> Result<Vec<Conflict<'a>>> {
    let wanted = candidate.interval()?;
    let mut conflicts = Vec::new();

    for event in same_slot(existing, candidate) {
        if let Some(overlap_minutes) = wanted.overlap_minutes(&event.interval()?) {
            tracing::debug!(event_id = %event.id, overlap_minutes, "venue conflict");
            conflicts.push(Conflict {
                event,
                overlap_minutes,
            });
        }
    }

    Ok(conflicts)
}

/// Events sharing the candidate's date and venue. Anything else can never
/// conflict, so it is skipped before any parsing happens.
fn same_slot<'a, 'c>(
    existing: &'a [Event],
    candidate: &'c Candidate,
) -> impl Iterator<Item = &'a Event> + 'c
where
    'a: 'c,
{
    existing
        .iter()
        .filter(move |e| e.date == candidate.date && e.venue == candidate.venue)
}
