//! Admin dashboard aggregates.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::event::{Event, EventStatus, EventType};

/// Headline numbers for the admin overview.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_events: usize,
    pub upcoming_events: usize,
    pub completed_events: usize,
    pub cancelled_events: usize,
    pub total_attendees: u64,
    /// Mean attendees per event, rounded. Zero for an empty list.
    pub average_attendance: u64,
    /// Completed events as a rounded percentage of all events.
    pub completion_rate: u32,
}

impl DashboardStats {
    pub fn compute(events: &[Event]) -> Self {
        let count_status = |status| events.iter().filter(|e| e.status == status).count();

        let total_events = events.len();
        let completed_events = count_status(EventStatus::Completed);
        let total_attendees: u64 = events.iter().map(|e| u64::from(e.current_attendees)).sum();

        let (average_attendance, completion_rate) = if total_events == 0 {
            (0, 0)
        } else {
            let n = total_events as f64;
            (
                (total_attendees as f64 / n).round() as u64,
                (completed_events as f64 * 100.0 / n).round() as u32,
            )
        };

        Self {
            total_events,
            upcoming_events: count_status(EventStatus::Upcoming),
            completed_events,
            cancelled_events: count_status(EventStatus::Cancelled),
            total_attendees,
            average_attendance,
            completion_rate,
        }
    }
}

pub fn events_by_type(events: &[Event]) -> BTreeMap<EventType, usize> {
    let mut counts = BTreeMap::new();
    for event in events {
        *counts.entry(event.event_type).or_insert(0) += 1;
    }
    counts
}

pub fn events_by_department(events: &[Event]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for event in events {
        *counts.entry(event.department.clone()).or_insert(0) += 1;
    }
    counts
}

/// The `limit` most recently updated events, newest first.
pub fn recent_events(events: &[Event], limit: usize) -> Vec<&Event> {
    let mut sorted: Vec<&Event> = events.iter().collect();
    sorted.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    sorted.truncate(limit);
    sorted
}
