//! Recurrence evaluation: does an availability entry apply on a given date?
//!
//! One-off entries match only their own start date. Recurring entries match
//! dates on or after their start date (and on or before `recurrence_end_date`
//! when set) according to their [`RecurrencePattern`].

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};

use crate::model::{AvailabilityEntry, RecurrencePattern};

const SECONDS_PER_DAY: i64 = 86_400;

/// Decide whether `entry` applies on `date`.
///
/// - `Weekly` matches the same weekday as the start date.
/// - `Biweekly` matches the same weekday, every other week counted from the
///   start instant (see [`weeks_between`]).
/// - `Monthly` matches the same day-of-month. A start on the 31st never
///   matches in shorter months.
/// - `None` and unrecognized patterns never match a recurring entry.
pub fn applies_on(entry: &AvailabilityEntry, date: NaiveDate) -> bool {
    let start_date = entry.date();

    if !entry.is_recurring {
        return date == start_date;
    }

    if date < start_date {
        return false;
    }
    if let Some(until) = entry.recurrence_end_date {
        if date > until {
            return false;
        }
    }

    match &entry.recurrence_pattern {
        RecurrencePattern::Weekly => date.weekday() == start_date.weekday(),
        RecurrencePattern::Biweekly => {
            date.weekday() == start_date.weekday() && weeks_between(entry.start, date) % 2 == 0
        }
        RecurrencePattern::Monthly => date.day() == start_date.day(),
        RecurrencePattern::None | RecurrencePattern::Unrecognized(_) => false,
    }
}

/// Whole weeks between `start` and midnight of `date`.
///
/// The distance is rounded up to whole days before dividing by seven, so an
/// anchor at 09:00 on a Monday is exactly two weeks from midnight of the
/// Monday fourteen days later.
pub fn weeks_between(start: NaiveDateTime, date: NaiveDate) -> i64 {
    let seconds = (date.and_time(NaiveTime::MIN) - start).num_seconds().abs();
    let days = (seconds + SECONDS_PER_DAY - 1) / SECONDS_PER_DAY;
    days / 7
}
