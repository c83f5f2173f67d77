//! Request-level drivers: validate raw parameters, fetch from an
//! [`AvailabilitySource`], then run the pure pipeline.
//!
//! Entry and booking reads are independent and are issued concurrently. A
//! failure in either aborts the request; no partial result is returned.

use chrono::{NaiveDate, NaiveDateTime};

use crate::availability::{day_slots, month_window, summarize_window, SlotListing};
use crate::error::{EngineError, Result};
use crate::model::{BookingStatus, DateRange, DaySummary};
use crate::source::AvailabilitySource;

/// Validated parameters for a month availability query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthQuery {
    pub freelancer_id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub category_id: Option<String>,
}

impl MonthQuery {
    /// # Errors
    /// Returns `EngineError::InvalidInput` if the freelancer id is blank, a
    /// date is not `YYYY-MM-DD`, or `start_date` is after `end_date`.
    pub fn new(
        freelancer_id: &str,
        start_date: &str,
        end_date: &str,
        category_id: Option<&str>,
    ) -> Result<Self> {
        let freelancer_id = parse_id(freelancer_id)?;
        let start_date = parse_date("startDate", start_date)?;
        let end_date = parse_date("endDate", end_date)?;
        if start_date > end_date {
            return Err(EngineError::InvalidInput(format!(
                "startDate {} is after endDate {}",
                start_date, end_date
            )));
        }
        Ok(Self {
            freelancer_id,
            start_date,
            end_date,
            category_id: parse_category(category_id),
        })
    }
}

/// Validated parameters for a single-day slot query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayQuery {
    pub freelancer_id: String,
    pub date: NaiveDate,
    pub category_id: Option<String>,
}

impl DayQuery {
    /// # Errors
    /// Returns `EngineError::InvalidInput` if the freelancer id is blank or the
    /// date is not `YYYY-MM-DD`.
    pub fn new(freelancer_id: &str, date: &str, category_id: Option<&str>) -> Result<Self> {
        Ok(Self {
            freelancer_id: parse_id(freelancer_id)?,
            date: parse_date("date", date)?,
            category_id: parse_category(category_id),
        })
    }
}

fn parse_id(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidInput("freelancerId is required".to_string()));
    }
    Ok(trimmed.to_string())
}

fn parse_date(name: &str, raw: &str) -> Result<NaiveDate> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(EngineError::InvalidInput(format!("{} is required", name)));
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map_err(|e| EngineError::InvalidInput(format!("Invalid {} '{}': {}", name, trimmed, e)))
}

fn parse_category(raw: Option<&str>) -> Option<String> {
    raw.map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
}

/// Month availability for a freelancer over the months spanned by the query.
///
/// Bookings are fetched for the whole month window, scoped to the query's
/// category if any. Availability entries are never category-scoped.
#[tracing::instrument(skip(source), fields(freelancer = %query.freelancer_id))]
pub async fn query_month<S: AvailabilitySource>(
    source: &S,
    query: &MonthQuery,
    as_of: NaiveDateTime,
) -> Result<Vec<DaySummary>> {
    let window = month_window(query.start_date, query.end_date)?;

    let (entries, bookings) = futures::try_join!(
        source.fetch_availability_entries(&query.freelancer_id),
        source.fetch_bookings(
            &query.freelancer_id,
            window,
            query.category_id.as_deref(),
            BookingStatus::Cancelled,
        ),
    )?;

    tracing::debug!(
        entries = entries.len(),
        bookings = bookings.len(),
        "fetched month inputs"
    );

    Ok(summarize_window(&entries, &bookings, window, as_of))
}

/// Free slots for a freelancer on a single date.
#[tracing::instrument(skip(source), fields(freelancer = %query.freelancer_id, date = %query.date))]
pub async fn query_day<S: AvailabilitySource>(
    source: &S,
    query: &DayQuery,
    as_of: NaiveDateTime,
) -> Result<SlotListing> {
    let (entries, bookings) = futures::try_join!(
        source.fetch_availability_entries(&query.freelancer_id),
        source.fetch_bookings(
            &query.freelancer_id,
            DateRange::single(query.date),
            query.category_id.as_deref(),
            BookingStatus::Cancelled,
        ),
    )?;

    tracing::debug!(
        entries = entries.len(),
        bookings = bookings.len(),
        "fetched day inputs"
    );

    Ok(day_slots(&entries, &bookings, query.date, as_of))
}
