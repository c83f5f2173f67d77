//! Month-view aggregation and single-day slot listing.
//!
//! Both drive [`resolve_day`] over in-memory entries and bookings. The month
//! view folds every day of the covered months into `{date, status}` pairs; the
//! single-day listing returns the free slots themselves, formatted for display.

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::day::{resolve_day, DayOutcome};
use crate::error::{EngineError, Result};
use crate::model::{AvailabilityEntry, Booking, DateRange, DaySummary, TimeSlot};

/// Message attached to a [`SlotListing`] when nothing applies on the date.
pub const NO_AVAILABILITY_MESSAGE: &str = "No availability for this date";

/// A free slot formatted for a booking screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotView {
    /// Local time-of-day, `HH:MM`.
    pub start: String,
    /// Local time-of-day, `HH:MM`.
    pub end: String,
    /// ISO 8601 local date-time.
    pub start_time: String,
    /// ISO 8601 local date-time.
    pub end_time: String,
}

impl From<&TimeSlot> for SlotView {
    fn from(slot: &TimeSlot) -> Self {
        Self {
            start: slot.start.format("%H:%M").to_string(),
            end: slot.end.format("%H:%M").to_string(),
            start_time: slot.start.format("%Y-%m-%dT%H:%M:%S").to_string(),
            end_time: slot.end.format("%Y-%m-%dT%H:%M:%S").to_string(),
        }
    }
}

/// Result of a single-day slot query.
///
/// `no_availability` is set when no entry applies on the date (or the date is
/// past). A fully booked day has an empty `slots` list but `no_availability`
/// is `false`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SlotListing {
    pub date: NaiveDate,
    pub slots: Vec<SlotView>,
    pub count: usize,
    pub no_availability: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SlotListing {
    fn unavailable(date: NaiveDate) -> Self {
        Self {
            date,
            slots: Vec::new(),
            count: 0,
            no_availability: true,
            message: Some(NO_AVAILABILITY_MESSAGE.to_string()),
        }
    }
}

/// Expand `[range_start, range_end]` to whole months:
/// `[start_of_month(range_start), end_of_month(range_end)]`.
///
/// # Errors
/// Returns `EngineError::InvalidInput` if `range_start` is after `range_end`,
/// or if the end of the last month is not representable.
pub fn month_window(range_start: NaiveDate, range_end: NaiveDate) -> Result<DateRange> {
    if range_start > range_end {
        return Err(EngineError::InvalidInput(format!(
            "start date {} is after end date {}",
            range_start, range_end
        )));
    }

    let start = range_start
        .with_day(1)
        .ok_or_else(|| EngineError::InvalidInput(format!("no month start for {}", range_start)))?;
    let end = end_of_month(range_end)
        .ok_or_else(|| EngineError::InvalidInput(format!("no month end for {}", range_end)))?;

    Ok(DateRange::new(start, end))
}

fn end_of_month(date: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)?.pred_opt()
}

/// Compute the month view for every date in the months spanned by
/// `[range_start, range_end]`.
///
/// Only dates with at least one free slot appear, in ascending order. Dates
/// with no applicable entry, fully booked dates, and past dates are omitted.
///
/// # Errors
/// Returns `EngineError::InvalidInput` if `range_start` is after `range_end`.
pub fn month_availability(
    entries: &[AvailabilityEntry],
    bookings: &[Booking],
    range_start: NaiveDate,
    range_end: NaiveDate,
    as_of: NaiveDateTime,
) -> Result<Vec<DaySummary>> {
    let window = month_window(range_start, range_end)?;
    Ok(summarize_window(entries, bookings, window, as_of))
}

/// Resolve every date in `window` and keep the open ones as summaries.
pub fn summarize_window(
    entries: &[AvailabilityEntry],
    bookings: &[Booking],
    window: DateRange,
    as_of: NaiveDateTime,
) -> Vec<DaySummary> {
    let days: Vec<DaySummary> = window
        .days()
        .filter_map(|date| resolve_day(entries, bookings, date, as_of).into_result())
        .map(|day| DaySummary::from(&day))
        .collect();

    debug!(
        start = %window.start,
        end = %window.end,
        open_days = days.len(),
        "summarized month window"
    );

    days
}

/// List the free slots for a single date.
pub fn day_slots(
    entries: &[AvailabilityEntry],
    bookings: &[Booking],
    date: NaiveDate,
    as_of: NaiveDateTime,
) -> SlotListing {
    match resolve_day(entries, bookings, date, as_of) {
        DayOutcome::Past | DayOutcome::NoEntries => SlotListing::unavailable(date),
        DayOutcome::FullyBooked => SlotListing {
            date,
            slots: Vec::new(),
            count: 0,
            no_availability: false,
            message: None,
        },
        DayOutcome::Open(day) => {
            let slots: Vec<SlotView> = day.available_slots.iter().map(SlotView::from).collect();
            SlotListing {
                date,
                count: slots.len(),
                slots,
                no_availability: false,
                message: None,
            }
        }
    }
}
