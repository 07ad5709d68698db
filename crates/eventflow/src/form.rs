//! Event creation/editing: draft validation and live schedule checks.
//!
//! A form front end keeps an [`EventDraft`] as its state, calls
//! [`check_schedule`] whenever date, start, end or venue change, and calls
//! [`validate_draft`] on submit.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::config::SchedulerConfig;
use crate::conflict::find_conflicts;
use crate::error::Result;
use crate::event::{Candidate, Event, EventType};
use crate::suggest::{suggest_slot_intervals, SuggestedSlot};
use crate::time::{parse_date, parse_time};

/// User-editable event fields, as entered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EventDraft {
    pub title: String,
    pub description: String,
    pub venue: String,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub event_type: EventType,
    pub department: String,
    pub organizer: String,
    pub registration_link: String,
    pub max_attendees: Option<u32>,
    /// Comma-separated.
    pub tags: String,
    pub image_url: String,
}

impl EventDraft {
    /// Pre-fill a draft for editing an existing event.
    pub fn from_event(event: &Event) -> Self {
        Self {
            title: event.title.clone(),
            description: event.description.clone(),
            venue: event.venue.clone(),
            date: event.date.clone(),
            start_time: event.start_time.clone(),
            end_time: event.end_time.clone(),
            event_type: event.event_type,
            department: event.department.clone(),
            organizer: event.organizer.clone(),
            registration_link: event.registration_link.clone(),
            max_attendees: event.max_attendees,
            tags: event.tags.join(", "),
            image_url: event.image_url.clone().unwrap_or_default(),
        }
    }

    /// The draft with surrounding whitespace stripped from every text field.
    ///
    /// Conflict checks and the stored record must see the same values, so
    /// callers normalize once and use the result for both.
    pub fn normalized(&self) -> Self {
        let trim = |s: &str| s.trim().to_string();
        Self {
            title: trim(&self.title),
            description: trim(&self.description),
            venue: trim(&self.venue),
            date: trim(&self.date),
            start_time: trim(&self.start_time),
            end_time: trim(&self.end_time),
            event_type: self.event_type,
            department: trim(&self.department),
            organizer: trim(&self.organizer),
            registration_link: trim(&self.registration_link),
            max_attendees: self.max_attendees,
            tags: self.tags.clone(),
            image_url: trim(&self.image_url),
        }
    }

    pub fn candidate(&self) -> Candidate {
        Candidate::new(&self.date, &self.start_time, &self.end_time, &self.venue)
    }

    pub fn tag_list(&self) -> Vec<String> {
        parse_tags(&self.tags)
    }

    /// Date, start, end and venue are all filled in.
    pub fn has_schedule_fields(&self) -> bool {
        [&self.date, &self.start_time, &self.end_time, &self.venue]
            .iter()
            .all(|f| !f.trim().is_empty())
    }
}

/// Split on commas, trim, drop empties.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Per-field validation messages, keyed by camelCase field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ValidationErrors(pub BTreeMap<String, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0.get(field).map(String::as_str)
    }

    fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0.insert(field.to_string(), message.into());
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut first = true;
        for (field, message) in &self.0 {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field, message)?;
            first = false;
        }
        Ok(())
    }
}

/// Check required fields, time ordering, and that the date is not before `today`.
pub fn validate_draft(draft: &EventDraft, today: NaiveDate) -> std::result::Result<(), ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let required = [
        ("title", &draft.title, "Title is required"),
        ("description", &draft.description, "Description is required"),
        ("venue", &draft.venue, "Venue is required"),
        ("date", &draft.date, "Date is required"),
        ("startTime", &draft.start_time, "Start time is required"),
        ("endTime", &draft.end_time, "End time is required"),
        ("department", &draft.department, "Department is required"),
        ("organizer", &draft.organizer, "Organizer is required"),
        (
            "registrationLink",
            &draft.registration_link,
            "Registration link is required",
        ),
    ];
    for (field, value, message) in required {
        if value.trim().is_empty() {
            errors.add(field, message);
        }
    }

    let start = non_empty(&draft.start_time).map(parse_time);
    let end = non_empty(&draft.end_time).map(parse_time);
    match (start, end) {
        (Some(Ok(s)), Some(Ok(e))) if s >= e => {
            errors.add("endTime", "End time must be after start time");
        }
        (start, end) => {
            if matches!(start, Some(Err(_))) {
                errors.add("startTime", "Start time must be HH:MM");
            }
            if matches!(end, Some(Err(_))) {
                errors.add("endTime", "End time must be HH:MM");
            }
        }
    }

    if let Some(date) = non_empty(&draft.date) {
        match parse_date(date) {
            Ok(d) if d < today => errors.add("date", "Event date cannot be in the past"),
            Ok(_) => {}
            Err(_) => errors.add("date", "Date must be YYYY-MM-DD"),
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn non_empty(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Length of `[start, end)` in fractional hours. Negative when `end` precedes `start`.
pub fn duration_hours(start_time: &str, end_time: &str) -> Result<f64> {
    let start = parse_time(start_time)?;
    let end = parse_time(end_time)?;
    Ok((end - start).num_seconds() as f64 / 3600.0)
}

/// Outcome of a live schedule check on a draft.
#[derive(Debug, Clone, PartialEq)]
pub enum ScheduleCheck {
    /// Date, start, end or venue still missing.
    Incomplete,
    /// No venue conflict.
    Clear,
    /// The venue is taken. `suggestions` holds free alternatives on the same
    /// day with the draft's duration; it is empty when the draft's own times
    /// do not describe a positive duration.
    Conflict {
        conflicting_ids: Vec<String>,
        suggestions: Vec<SuggestedSlot>,
    },
}

impl ScheduleCheck {
    /// Submission is blocked while a conflict is reported.
    pub fn blocks_submit(&self) -> bool {
        matches!(self, ScheduleCheck::Conflict { .. })
    }
}

/// Run conflict detection for `draft` against `existing`, leaving out the event
/// being edited, and propose alternatives when the venue is taken.
///
/// The draft is checked in its [`EventDraft::normalized`] form, the same form
/// the store saves.
pub fn check_schedule(
    draft: &EventDraft,
    existing: &[Event],
    editing_id: Option<&str>,
    config: &SchedulerConfig,
) -> Result<ScheduleCheck> {
    let draft = &draft.normalized();
    if !draft.has_schedule_fields() {
        return Ok(ScheduleCheck::Incomplete);
    }

    let others: Vec<Event> = existing
        .iter()
        .filter(|e| Some(e.id.as_str()) != editing_id)
        .cloned()
        .collect();

    let conflicting_ids: Vec<String> = find_conflicts(&others, &draft.candidate())?
        .into_iter()
        .map(|c| c.event.id.clone())
        .collect();

    if conflicting_ids.is_empty() {
        return Ok(ScheduleCheck::Clear);
    }

    let hours = duration_hours(&draft.start_time, &draft.end_time)?;
    let suggestions = if hours > 0.0 {
        suggest_slot_intervals(config, &draft.date, hours, &others)?
    } else {
        Vec::new()
    };

    Ok(ScheduleCheck::Conflict {
        conflicting_ids,
        suggestions,
    })
}
