//! In-memory event collection with the current user's RSVPs.
//!
//! Nothing here is persisted; a store lives as long as its owner keeps it.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::config::SchedulerConfig;
use crate::error::{EventFlowError, Result};
use crate::event::{Event, EventStatus, User};
use crate::form::{check_schedule, validate_draft, EventDraft, ScheduleCheck, ValidationErrors};
use crate::seed;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RsvpOutcome {
    Registered,
    AlreadyRegistered,
}

#[derive(Debug, Clone)]
pub struct EventStore {
    events: Vec<Event>,
    user: User,
    config: SchedulerConfig,
}

impl EventStore {
    pub fn new(events: Vec<Event>, user: User) -> Self {
        Self {
            events,
            user,
            config: SchedulerConfig::default(),
        }
    }

    /// A store holding the built-in sample events and user.
    pub fn seeded() -> Self {
        Self::new(seed::seed_events(), seed::seed_user())
    }

    pub fn with_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Validate `draft`, reject venue conflicts, then insert it at the front
    /// with a fresh id. Returns the new id.
    ///
    /// Text fields are trimmed before checking, and the trimmed values are
    /// what gets stored.
    pub fn create(&mut self, draft: EventDraft, now: DateTime<Utc>) -> Result<String> {
        let draft = draft.normalized();
        self.admit(&draft, None, now)?;

        let event = build_event(draft, Uuid::new_v4().to_string(), 0, now, now);
        let id = event.id.clone();
        tracing::info!(event_id = %id, title = %event.title, "event created");
        self.events.insert(0, event);
        Ok(id)
    }

    /// Replace the editable fields of event `id`. The id, creation time and
    /// attendee count carry over.
    pub fn update(&mut self, id: &str, draft: EventDraft, now: DateTime<Utc>) -> Result<()> {
        let draft = draft.normalized();
        self.admit(&draft, Some(id), now)?;

        let index = self.index_of(id)?;
        let previous = &self.events[index];
        let event = build_event(
            draft,
            previous.id.clone(),
            previous.current_attendees,
            previous.created_at,
            now,
        );
        self.events[index] = event;
        tracing::info!(event_id = %id, "event updated");
        Ok(())
    }

    pub fn delete(&mut self, id: &str) -> Result<Event> {
        let index = self.index_of(id)?;
        tracing::info!(event_id = %id, "event deleted");
        Ok(self.events.remove(index))
    }

    /// Register the current user for event `id`. Repeat calls are no-ops.
    pub fn rsvp(&mut self, id: &str) -> Result<RsvpOutcome> {
        let index = self.index_of(id)?;
        if self.user.is_registered(id) {
            return Ok(RsvpOutcome::AlreadyRegistered);
        }

        self.user.registered_events.push(id.to_string());
        self.events[index].current_attendees += 1;
        tracing::info!(event_id = %id, "rsvp registered");
        Ok(RsvpOutcome::Registered)
    }

    fn index_of(&self, id: &str) -> Result<usize> {
        self.events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| EventFlowError::EventNotFound(id.to_string()))
    }

    fn admit(&self, draft: &EventDraft, editing_id: Option<&str>, now: DateTime<Utc>) -> Result<()> {
        if let Some(id) = editing_id {
            self.index_of(id)?;
        }
        validate_draft(draft, now.date_naive()).map_err(EventFlowError::Validation)?;

        if let ScheduleCheck::Conflict {
            conflicting_ids, ..
        } = check_schedule(draft, &self.events, editing_id, &self.config)?
        {
            let mut errors = ValidationErrors::default();
            errors.0.insert(
                "venue".to_string(),
                format!(
                    "Time/venue conflict detected with existing event ({})",
                    conflicting_ids.join(", ")
                ),
            );
            return Err(EventFlowError::Validation(errors));
        }
        Ok(())
    }
}

impl Default for EventStore {
    fn default() -> Self {
        Self::seeded()
    }
}

fn build_event(
    draft: EventDraft,
    id: String,
    current_attendees: u32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
) -> Event {
    let tags = draft.tag_list();
    let image_url = Some(draft.image_url).filter(|u| !u.is_empty());

    Event {
        id,
        title: draft.title,
        description: draft.description,
        venue: draft.venue,
        date: draft.date,
        start_time: draft.start_time,
        end_time: draft.end_time,
        event_type: draft.event_type,
        department: draft.department,
        organizer: draft.organizer,
        registration_link: draft.registration_link,
        max_attendees: draft.max_attendees,
        current_attendees,
        status: EventStatus::Upcoming,
        tags,
        image_url,
        created_at,
        updated_at,
    }
}
