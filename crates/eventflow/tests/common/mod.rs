//! Shared helpers for integration tests.

#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use eventflow::event::{Event, EventStatus, EventType};

/// A minimal event at `venue` on `date` from `start` to `end`.
pub fn event(id: &str, date: &str, start: &str, end: &str, venue: &str) -> Event {
    Event {
        id: id.to_string(),
        title: format!("Event {}", id),
        description: String::new(),
        venue: venue.to_string(),
        date: date.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
        event_type: EventType::Seminar,
        department: "Physics".to_string(),
        organizer: "Physics Club".to_string(),
        registration_link: "https://example.edu/register".to_string(),
        max_attendees: None,
        current_attendees: 0,
        status: EventStatus::Upcoming,
        tags: Vec::new(),
        image_url: None,
        created_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        updated_at: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
    }
}
