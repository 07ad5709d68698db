//! # eventflow
//!
//! Scheduling logic for a campus event planner.
//!
//! The core is a venue conflict detector and a slot suggester, both pure
//! functions over a snapshot of events supplied by the caller. Around them sit
//! the pieces a planner front end needs: feed filtering, dashboard analytics,
//! form validation, and an in-memory store with RSVP tracking.
//!
//! ## Modules
//!
//! - [`time`] — Explicit date/time parsing and half-open intervals
//! - [`conflict`] — Same venue, same date, overlapping times
//! - [`suggest`] — Free start times on a day from a fixed grid
//! - [`config`] — Slot grid and suggestion cap
//! - [`event`] — Event, candidate and user records
//! - [`feed`] — Search, filter and sort
//! - [`analytics`] — Dashboard aggregates
//! - [`form`] — Draft validation and live schedule checks
//! - [`store`] — In-memory event collection with RSVPs
//! - [`seed`] — Sample data
//! - [`error`] — Error types

pub mod analytics;
pub mod config;
pub mod conflict;
pub mod error;
pub mod event;
pub mod feed;
pub mod form;
pub mod seed;
pub mod store;
pub mod suggest;
pub mod time;

pub use config::SchedulerConfig;
pub use conflict::{find_conflicts, has_conflict, Conflict};
pub use error::EventFlowError;
pub use event::{events_from_json, Candidate, Event, EventStatus, EventType};
pub use store::EventStore;
pub use suggest::{suggest_slot_intervals, suggest_slots, SuggestedSlot};
pub use time::Interval;
