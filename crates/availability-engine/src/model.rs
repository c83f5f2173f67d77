//! Domain types shared by every stage of the availability pipeline.
//!
//! All instants are local wall-clock values ([`NaiveDateTime`]); no timezone
//! conversion happens anywhere in the engine.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// How an availability entry repeats across dates.
///
/// Unknown pattern strings coming from storage are kept as
/// [`RecurrencePattern::Unrecognized`] and never match any date.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum RecurrencePattern {
    #[default]
    None,
    Weekly,
    Biweekly,
    Monthly,
    Unrecognized(String),
}

impl RecurrencePattern {
    pub fn as_str(&self) -> &str {
        match self {
            RecurrencePattern::None => "none",
            RecurrencePattern::Weekly => "weekly",
            RecurrencePattern::Biweekly => "biweekly",
            RecurrencePattern::Monthly => "monthly",
            RecurrencePattern::Unrecognized(raw) => raw,
        }
    }
}

impl From<&str> for RecurrencePattern {
    fn from(raw: &str) -> Self {
        match raw {
            "none" => RecurrencePattern::None,
            "weekly" => RecurrencePattern::Weekly,
            "biweekly" => RecurrencePattern::Biweekly,
            "monthly" => RecurrencePattern::Monthly,
            other => RecurrencePattern::Unrecognized(other.to_string()),
        }
    }
}

impl fmt::Display for RecurrencePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for RecurrencePattern {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for RecurrencePattern {
    /// `null` is treated the same as `"none"`.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        Ok(raw
            .as_deref()
            .map(RecurrencePattern::from)
            .unwrap_or_default())
    }
}

/// Freelancer-declared confidence in an availability window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CertaintyLevel {
    #[default]
    Guaranteed,
    Tentative,
}

/// Lifecycle status of a booking. Only `Cancelled` matters to the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
    Other(String),
}

impl BookingStatus {
    pub fn as_str(&self) -> &str {
        match self {
            BookingStatus::Pending => "pending",
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Completed => "completed",
            BookingStatus::Cancelled => "cancelled",
            BookingStatus::Other(raw) => raw,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, BookingStatus::Cancelled)
    }
}

impl From<&str> for BookingStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "pending" => BookingStatus::Pending,
            "confirmed" => BookingStatus::Confirmed,
            "completed" => BookingStatus::Completed,
            "cancelled" => BookingStatus::Cancelled,
            other => BookingStatus::Other(other.to_string()),
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BookingStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for BookingStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(BookingStatus::from(raw.as_str()))
    }
}

/// A freelancer-declared rule for when they are open for work.
///
/// `start` and `end` carry both the reference date (from `start`) and the
/// daily time-of-day window that repeats on every matching date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityEntry {
    pub freelancer_id: String,
    #[serde(rename = "startTime")]
    pub start: NaiveDateTime,
    #[serde(rename = "endTime")]
    pub end: NaiveDateTime,
    #[serde(default)]
    pub is_recurring: bool,
    #[serde(default)]
    pub recurrence_pattern: RecurrencePattern,
    #[serde(default)]
    pub recurrence_end_date: Option<NaiveDate>,
    #[serde(default)]
    pub certainty_level: CertaintyLevel,
}

impl AvailabilityEntry {
    /// A one-off entry that applies only on the date of `start`.
    pub fn one_off(
        freelancer_id: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        certainty_level: CertaintyLevel,
    ) -> Self {
        Self {
            freelancer_id: freelancer_id.into(),
            start,
            end,
            is_recurring: false,
            recurrence_pattern: RecurrencePattern::None,
            recurrence_end_date: None,
            certainty_level,
        }
    }

    /// A recurring entry anchored at `start`.
    pub fn recurring(
        freelancer_id: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        pattern: RecurrencePattern,
        recurrence_end_date: Option<NaiveDate>,
        certainty_level: CertaintyLevel,
    ) -> Self {
        Self {
            freelancer_id: freelancer_id.into(),
            start,
            end,
            is_recurring: true,
            recurrence_pattern: pattern,
            recurrence_end_date,
            certainty_level,
        }
    }

    /// The calendar day the entry is anchored to.
    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    /// The daily time-of-day window `(start, end)`.
    pub fn window(&self) -> (NaiveTime, NaiveTime) {
        (self.start.time(), self.end.time())
    }
}

/// An existing booking that blocks part of a freelancer's day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub freelancer_id: String,
    pub category_id: String,
    #[serde(rename = "startTime")]
    pub start: NaiveDateTime,
    #[serde(rename = "endTime")]
    pub end: NaiveDateTime,
    #[serde(default)]
    pub status: BookingStatus,
}

/// A discrete one-hour bookable unit, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Classification of a day that has at least one open slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Guaranteed,
    Tentative,
    Unavailable,
}

/// Fully resolved availability for a single date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayResult {
    pub date: NaiveDate,
    pub status: DayStatus,
    pub available_slots: Vec<TimeSlot>,
}

/// Month-view projection of a [`DayResult`]: slots are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySummary {
    pub date: NaiveDate,
    pub status: DayStatus,
}

impl From<&DayResult> for DaySummary {
    fn from(day: &DayResult) -> Self {
        Self {
            date: day.date,
            status: day.status,
        }
    }
}

/// An inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// A range covering exactly one date.
    pub fn single(date: NaiveDate) -> Self {
        Self {
            start: date,
            end: date,
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Every date in the range, in ascending order. Empty when `start > end`.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}
