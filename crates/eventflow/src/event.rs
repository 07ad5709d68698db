//! Campus event and user records.
//!
//! JSON field names are camelCase so records exchanged with a browser front
//! end deserialize without renaming.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::time::Interval;

/// Kind of campus activity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventType {
    #[default]
    Seminar,
    Fest,
    Workshop,
    Sports,
    Cultural,
    Academic,
    Social,
}

impl EventType {
    pub const ALL: [EventType; 7] = [
        EventType::Seminar,
        EventType::Workshop,
        EventType::Fest,
        EventType::Cultural,
        EventType::Sports,
        EventType::Academic,
        EventType::Social,
    ];

    /// Wire name, e.g. `"workshop"`.
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::Seminar => "seminar",
            EventType::Fest => "fest",
            EventType::Workshop => "workshop",
            EventType::Sports => "sports",
            EventType::Cultural => "cultural",
            EventType::Academic => "academic",
            EventType::Social => "social",
        }
    }

    /// Display label, e.g. `"Festival"` for [`EventType::Fest`].
    pub fn label(self) -> &'static str {
        match self {
            EventType::Seminar => "Seminar",
            EventType::Fest => "Festival",
            EventType::Workshop => "Workshop",
            EventType::Sports => "Sports",
            EventType::Cultural => "Cultural",
            EventType::Academic => "Academic",
            EventType::Social => "Social",
        }
    }
}

impl std::fmt::Display for EventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        EventType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown event type '{}'", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

/// A scheduled campus activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Compared by exact, case-sensitive string match.
    pub venue: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`, 24-hour
    pub start_time: String,
    /// `HH:MM`, 24-hour
    pub end_time: String,
    pub event_type: EventType,
    pub department: String,
    pub organizer: String,
    pub registration_link: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attendees: Option<u32>,
    #[serde(default)]
    pub current_attendees: u32,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// The event's `[start, end)` interval on its date.
    pub fn interval(&self) -> Result<Interval> {
        Interval::from_strings(&self.date, &self.start_time, &self.end_time)
    }

    /// Registered attendees as a rounded percentage of capacity.
    /// `None` for events without a cap.
    pub fn fill_percent(&self) -> Option<u32> {
        match self.max_attendees {
            Some(0) => Some(100),
            Some(max) => {
                Some((f64::from(self.current_attendees) * 100.0 / f64::from(max)).round() as u32)
            }
            None => None,
        }
    }

    pub fn is_full(&self) -> bool {
        self.max_attendees
            .is_some_and(|max| self.current_attendees >= max)
    }
}

/// Parse a JSON array of events, as exported by a planner front end.
pub fn events_from_json(json: &str) -> Result<Vec<Event>> {
    let events: Vec<Event> = serde_json::from_str(json)?;
    tracing::debug!(count = events.len(), "parsed events");
    Ok(events)
}

/// The scheduling-relevant slice of an event: what the conflict detector
/// needs to know about a proposed booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub venue: String,
}

impl Candidate {
    pub fn new(
        date: impl Into<String>,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        venue: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            start_time: start_time.into(),
            end_time: end_time.into(),
            venue: venue.into(),
        }
    }

    pub fn interval(&self) -> Result<Interval> {
        Interval::from_strings(&self.date, &self.start_time, &self.end_time)
    }
}

impl From<&Event> for Candidate {
    fn from(event: &Event) -> Self {
        Self {
            date: event.date.clone(),
            start_time: event.start_time.clone(),
            end_time: event.end_time.clone(),
            venue: event.venue.clone(),
        }
    }
}

/// Roles are informational only; nothing in this crate gates on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Organizer,
    Admin,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub department: String,
    pub year: u8,
    #[serde(default)]
    pub interests: Vec<String>,
    #[serde(default)]
    pub registered_events: Vec<String>,
    #[serde(default)]
    pub role: Role,
}

impl User {
    pub fn is_registered(&self, event_id: &str) -> bool {
        self.registered_events.iter().any(|id| id == event_id)
    }
}
