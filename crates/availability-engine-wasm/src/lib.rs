//! WASM bindings for availability-engine.
//!
//! Exposes the month view and the single-day slot listing to JavaScript via
//! `wasm-bindgen`. Entries and bookings cross the boundary as JSON strings in
//! the same camelCase row shape the data layer returns; results come back as
//! JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p availability-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/wasm/ \
//!   target/wasm32-unknown-unknown/release/availability_engine_wasm.wasm
//! ```

use availability_engine::source::{parse_bookings_json, parse_entries_json};
use availability_engine::{day_slots, month_availability};
use chrono::{NaiveDate, NaiveDateTime};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: parse boundary strings
// ---------------------------------------------------------------------------

fn parse_date(name: &str, s: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|e| format!("Invalid {} '{}': {}", name, s, e))
}

/// Accepts `YYYY-MM-DDTHH:MM:SS` with optional fractional seconds.
fn parse_as_of(s: &str) -> Result<NaiveDateTime, String> {
    s.parse::<NaiveDateTime>()
        .map_err(|e| format!("Invalid asOf '{}': {}", s, e))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, String> {
    serde_json::to_string(value).map_err(|e| format!("Serialization error: {}", e))
}

// ---------------------------------------------------------------------------
// Boundary logic (plain Rust, testable off-wasm)
// ---------------------------------------------------------------------------

/// Month view as a JSON array of `{date, status}`.
pub fn month_availability_json(
    entries_json: &str,
    bookings_json: &str,
    start_date: &str,
    end_date: &str,
    as_of: &str,
) -> Result<String, String> {
    let start = parse_date("startDate", start_date)?;
    let end = parse_date("endDate", end_date)?;
    let as_of = parse_as_of(as_of)?;
    let entries = parse_entries_json(entries_json).map_err(|e| e.to_string())?;
    let bookings = parse_bookings_json(bookings_json).map_err(|e| e.to_string())?;

    let days =
        month_availability(&entries, &bookings, start, end, as_of).map_err(|e| e.to_string())?;
    to_json(&days)
}

/// Single-day slot listing as a JSON object.
pub fn day_slots_json(
    entries_json: &str,
    bookings_json: &str,
    date: &str,
    as_of: &str,
) -> Result<String, String> {
    let date = parse_date("date", date)?;
    let as_of = parse_as_of(as_of)?;
    let entries = parse_entries_json(entries_json).map_err(|e| e.to_string())?;
    let bookings = parse_bookings_json(bookings_json).map_err(|e| e.to_string())?;

    to_json(&day_slots(&entries, &bookings, date, as_of))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Compute the month view for the months spanned by `start_date..end_date`.
///
/// `entries_json` and `bookings_json` are JSON arrays of rows already scoped
/// to one freelancer (and, for bookings, to a category if desired). Returns a
/// JSON array of `{date, status}` objects.
#[wasm_bindgen(js_name = "monthAvailability")]
pub fn month_availability_js(
    entries_json: &str,
    bookings_json: &str,
    start_date: &str,
    end_date: &str,
    as_of: &str,
) -> Result<String, JsValue> {
    month_availability_json(entries_json, bookings_json, start_date, end_date, as_of)
        .map_err(|e| JsValue::from_str(&e))
}

/// List free one-hour slots on `date`.
///
/// Returns a JSON object `{date, slots, count, noAvailability, message?}`.
#[wasm_bindgen(js_name = "daySlots")]
pub fn day_slots_js(
    entries_json: &str,
    bookings_json: &str,
    date: &str,
    as_of: &str,
) -> Result<String, JsValue> {
    day_slots_json(entries_json, bookings_json, date, as_of).map_err(|e| JsValue::from_str(&e))
}
