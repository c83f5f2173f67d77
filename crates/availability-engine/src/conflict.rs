//! Booking conflict resolution.
//!
//! Removes candidate slots that overlap a non-cancelled booking.
//! Adjacent intervals (where one ends exactly when another starts) are NOT conflicts.

use chrono::{NaiveDate, NaiveDateTime};

use crate::model::{Booking, TimeSlot};

/// A half-open interval `[start, end)` blocked by a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Interval {
    /// Two intervals overlap iff `a.start < b.end && b.start < a.end`.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl From<&TimeSlot> for Interval {
    fn from(slot: &TimeSlot) -> Self {
        Self {
            start: slot.start,
            end: slot.end,
        }
    }
}

/// Booked intervals for `date`: bookings that start on that date and are not cancelled.
pub fn booked_intervals(bookings: &[Booking], date: NaiveDate) -> Vec<Interval> {
    bookings
        .iter()
        .filter(|b| b.start.date() == date && !b.status.is_cancelled())
        .map(|b| Interval {
            start: b.start,
            end: b.end,
        })
        .collect()
}

/// Keep only the slots that overlap none of the `booked` intervals.
pub fn remove_conflicts(slots: Vec<TimeSlot>, booked: &[Interval]) -> Vec<TimeSlot> {
    if booked.is_empty() {
        return slots;
    }

    slots
        .into_iter()
        .filter(|slot| {
            let candidate = Interval::from(slot);
            !booked.iter().any(|busy| candidate.overlaps(busy))
        })
        .collect()
}
