//! WASM bindings for eventflow.
//!
//! Exposes venue conflict detection and slot suggestion to a browser front end
//! via `wasm-bindgen`. Events and candidates cross the boundary as JSON strings
//! using the same camelCase field names as the `Event` record.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p eventflow-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/pkg/ \
//!   target/wasm32-unknown-unknown/release/eventflow_wasm.wasm
//! ```

use eventflow::{events_from_json, Candidate, Event};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConflictDto<'a> {
    event_id: &'a str,
    title: &'a str,
    start_time: &'a str,
    end_time: &'a str,
    overlap_minutes: i64,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn parse_events_json(json: &str) -> Result<Vec<Event>, JsValue> {
    events_from_json(json).map_err(|e| JsValue::from_str(&format!("Invalid events JSON: {}", e)))
}

fn parse_candidate_json(json: &str) -> Result<Candidate, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid candidate JSON: {}", e)))
}

fn to_js_error(e: eventflow::EventFlowError) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Whether a proposed booking overlaps an existing event at the same venue on
/// the same date.
///
/// `events_json` is a JSON array of events; `candidate_json` is an object with
/// `date`, `startTime`, `endTime` and `venue`. Malformed dates or times throw.
#[wasm_bindgen(js_name = "hasConflict")]
pub fn has_conflict(events_json: &str, candidate_json: &str) -> Result<bool, JsValue> {
    let events = parse_events_json(events_json)?;
    let candidate = parse_candidate_json(candidate_json)?;

    eventflow::has_conflict(&events, &candidate).map_err(to_js_error)
}

/// Every existing event the proposed booking overlaps.
///
/// Returns a JSON array of `{eventId, title, startTime, endTime, overlapMinutes}`.
#[wasm_bindgen(js_name = "findConflicts")]
pub fn find_conflicts(events_json: &str, candidate_json: &str) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;
    let candidate = parse_candidate_json(candidate_json)?;

    let conflicts = eventflow::find_conflicts(&events, &candidate).map_err(to_js_error)?;

    let dtos: Vec<ConflictDto> = conflicts
        .iter()
        .map(|c| ConflictDto {
            event_id: &c.event.id,
            title: &c.event.title,
            start_time: &c.event.start_time,
            end_time: &c.event.end_time,
            overlap_minutes: c.overlap_minutes,
        })
        .collect();

    to_json(&dtos)
}

/// Up to three free windows of `duration_hours` on `date`, as a JSON array of
/// display strings such as `"9:00 AM - 11:00 AM"`.
#[wasm_bindgen(js_name = "suggestSlots")]
pub fn suggest_slots(date: &str, duration_hours: f64, events_json: &str) -> Result<String, JsValue> {
    let events = parse_events_json(events_json)?;

    let slots = eventflow::suggest_slots(date, duration_hours, &events).map_err(to_js_error)?;

    to_json(&slots)
}
