//! Read contract for the data-access collaborator.
//!
//! The engine never writes. It asks an [`AvailabilitySource`] for a
//! freelancer's availability entries (unfiltered by date) and for their
//! bookings within a date range, then computes everything in memory.

use crate::error::Result;
use crate::model::{AvailabilityEntry, Booking, BookingStatus, DateRange};

/// Asynchronous read access to availability entries and bookings.
///
/// Implementations report any failure as an error; the query drivers treat
/// every error as fatal for the request.
#[allow(async_fn_in_trait)]
pub trait AvailabilitySource {
    /// All availability entries for `freelancer_id`.
    async fn fetch_availability_entries(&self, freelancer_id: &str) -> Result<Vec<AvailabilityEntry>>;

    /// Bookings for `freelancer_id` starting within `range`, optionally scoped
    /// to `category_id`, excluding any booking whose status equals `exclude_status`.
    async fn fetch_bookings(
        &self,
        freelancer_id: &str,
        range: DateRange,
        category_id: Option<&str>,
        exclude_status: BookingStatus,
    ) -> Result<Vec<Booking>>;
}

/// An [`AvailabilitySource`] backed by two in-memory vectors.
///
/// Filters the same way a database query would: by freelancer, by the date
/// of each booking's start, by category, and by excluded status.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    pub entries: Vec<AvailabilityEntry>,
    pub bookings: Vec<Booking>,
}

impl InMemorySource {
    pub fn new(entries: Vec<AvailabilityEntry>, bookings: Vec<Booking>) -> Self {
        Self { entries, bookings }
    }

    /// Build a source from JSON arrays of entries and bookings.
    ///
    /// # Errors
    /// Returns `EngineError::CorruptData` if either document cannot be parsed.
    pub fn from_json(entries_json: &str, bookings_json: &str) -> Result<Self> {
        Ok(Self {
            entries: parse_entries_json(entries_json)?,
            bookings: parse_bookings_json(bookings_json)?,
        })
    }
}

impl AvailabilitySource for InMemorySource {
    async fn fetch_availability_entries(&self, freelancer_id: &str) -> Result<Vec<AvailabilityEntry>> {
        Ok(self
            .entries
            .iter()
            .filter(|e| e.freelancer_id == freelancer_id)
            .cloned()
            .collect())
    }

    async fn fetch_bookings(
        &self,
        freelancer_id: &str,
        range: DateRange,
        category_id: Option<&str>,
        exclude_status: BookingStatus,
    ) -> Result<Vec<Booking>> {
        Ok(filter_bookings(
            &self.bookings,
            freelancer_id,
            range,
            category_id,
            &exclude_status,
        ))
    }
}

/// Apply the booking read filter to an already loaded list.
pub fn filter_bookings(
    bookings: &[Booking],
    freelancer_id: &str,
    range: DateRange,
    category_id: Option<&str>,
    exclude_status: &BookingStatus,
) -> Vec<Booking> {
    bookings
        .iter()
        .filter(|b| b.freelancer_id == freelancer_id)
        .filter(|b| range.contains(b.start.date()))
        .filter(|b| category_id.is_none_or(|c| b.category_id == c))
        .filter(|b| b.status != *exclude_status)
        .cloned()
        .collect()
}

/// Parse a JSON array of availability entries.
///
/// # Errors
/// Returns `EngineError::CorruptData` on malformed JSON or field values.
pub fn parse_entries_json(json: &str) -> Result<Vec<AvailabilityEntry>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse a JSON array of bookings.
///
/// # Errors
/// Returns `EngineError::CorruptData` on malformed JSON or field values.
pub fn parse_bookings_json(json: &str) -> Result<Vec<Booking>> {
    Ok(serde_json::from_str(json)?)
}
