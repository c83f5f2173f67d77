//! Hourly slot generation.
//!
//! Walks a time-of-day window on a date in one-hour steps. Only whole hours
//! that fit inside the window become slots; a trailing partial hour is dropped.

use std::collections::HashSet;

use chrono::{Duration, NaiveDate, NaiveTime};

use crate::model::TimeSlot;

/// Length of every generated slot.
pub const SLOT_MINUTES: i64 = 60;

/// Expand the window `[window_start, window_end)` on `date` into one-hour slots.
///
/// Windows whose end is at or before their start produce no slots.
pub fn generate_slots(window_start: NaiveTime, window_end: NaiveTime, date: NaiveDate) -> Vec<TimeSlot> {
    let step = Duration::minutes(SLOT_MINUTES);
    let end = date.and_time(window_end);

    let mut slots = Vec::new();
    let mut cursor = date.and_time(window_start);

    while cursor < end {
        let slot_end = cursor + step;
        if slot_end <= end {
            slots.push(TimeSlot {
                start: cursor,
                end: slot_end,
            });
        }
        cursor = slot_end;
    }

    slots
}

/// Drop slots whose start has already been seen, keeping the first occurrence.
pub fn dedupe_by_start(slots: Vec<TimeSlot>) -> Vec<TimeSlot> {
    let mut seen = HashSet::new();
    slots
        .into_iter()
        .filter(|slot| seen.insert(slot.start))
        .collect()
}
