//! Per-date availability pipeline.
//!
//! [`resolve_day`] is the single shared step behind both the month view and
//! the single-day slot listing: select applicable entries, expand them into
//! hourly slots, dedupe, subtract bookings, then classify.

use chrono::{NaiveDate, NaiveDateTime};
use tracing::debug;

use crate::conflict::{booked_intervals, remove_conflicts};
use crate::model::{AvailabilityEntry, Booking, CertaintyLevel, DayResult, DayStatus};
use crate::recurrence::applies_on;
use crate::slots::{dedupe_by_start, generate_slots};

/// What the pipeline concluded for a single date.
#[derive(Debug, Clone, PartialEq)]
pub enum DayOutcome {
    /// The date is before the `as_of` date.
    Past,
    /// No availability entry applies to the date.
    NoEntries,
    /// Entries apply, but every candidate slot is taken by a booking.
    FullyBooked,
    /// At least one slot is free.
    Open(DayResult),
}

impl DayOutcome {
    /// The day result, if any slot is free.
    pub fn into_result(self) -> Option<DayResult> {
        match self {
            DayOutcome::Open(day) => Some(day),
            DayOutcome::Past | DayOutcome::NoEntries | DayOutcome::FullyBooked => None,
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DayOutcome::Open(_))
    }
}

/// Entries that apply on `date`: those anchored on the date itself plus
/// recurring entries whose pattern matches. Each entry appears at most once.
pub fn applicable_entries(entries: &[AvailabilityEntry], date: NaiveDate) -> Vec<&AvailabilityEntry> {
    entries
        .iter()
        .filter(|e| e.date() == date || (e.is_recurring && applies_on(e, date)))
        .collect()
}

/// Classify a day from its applicable entries.
///
/// Any guaranteed entry wins; otherwise any tentative entry; otherwise the
/// day is unavailable.
pub fn classify(selected: &[&AvailabilityEntry]) -> DayStatus {
    if selected
        .iter()
        .any(|e| e.certainty_level == CertaintyLevel::Guaranteed)
    {
        DayStatus::Guaranteed
    } else if selected
        .iter()
        .any(|e| e.certainty_level == CertaintyLevel::Tentative)
    {
        DayStatus::Tentative
    } else {
        DayStatus::Unavailable
    }
}

/// Resolve availability for one date.
///
/// Pure function of its arguments. `as_of` is the caller's notion of "now";
/// dates strictly before its calendar date are reported as [`DayOutcome::Past`].
/// Returned slots are ordered by start.
pub fn resolve_day(
    entries: &[AvailabilityEntry],
    bookings: &[Booking],
    date: NaiveDate,
    as_of: NaiveDateTime,
) -> DayOutcome {
    if date < as_of.date() {
        debug!(%date, "skipping past date");
        return DayOutcome::Past;
    }

    let selected = applicable_entries(entries, date);
    if selected.is_empty() {
        return DayOutcome::NoEntries;
    }

    let candidates: Vec<_> = selected
        .iter()
        .flat_map(|entry| {
            let (window_start, window_end) = entry.window();
            generate_slots(window_start, window_end, date)
        })
        .collect();

    let mut slots = dedupe_by_start(candidates);
    slots.sort_by_key(|slot| slot.start);

    let booked = booked_intervals(bookings, date);
    let candidate_count = slots.len();
    let free = remove_conflicts(slots, &booked);

    debug!(
        %date,
        entries = selected.len(),
        candidates = candidate_count,
        booked = booked.len(),
        free = free.len(),
        "resolved day"
    );

    if free.is_empty() {
        return DayOutcome::FullyBooked;
    }

    DayOutcome::Open(DayResult {
        date,
        status: classify(&selected),
        available_slots: free,
    })
}
