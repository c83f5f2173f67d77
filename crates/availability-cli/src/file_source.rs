//! An [`AvailabilitySource`] that reads JSON files on every fetch.

use std::path::{Path, PathBuf};

use availability_engine::error::Result;
use availability_engine::model::{AvailabilityEntry, Booking, BookingStatus, DateRange};
use availability_engine::source::{filter_bookings, parse_bookings_json, parse_entries_json};
use availability_engine::{AvailabilitySource, EngineError};

#[derive(Debug, Clone)]
pub struct FileSource {
    entries_path: PathBuf,
    bookings_path: PathBuf,
}

impl FileSource {
    pub fn new(entries_path: PathBuf, bookings_path: PathBuf) -> Self {
        Self {
            entries_path,
            bookings_path,
        }
    }

    async fn read(path: &Path) -> Result<String> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|e| EngineError::Source(format!("{}: {}", path.display(), e)))
    }
}

impl AvailabilitySource for FileSource {
    async fn fetch_availability_entries(&self, freelancer_id: &str) -> Result<Vec<AvailabilityEntry>> {
        let json = Self::read(&self.entries_path).await?;
        let entries = parse_entries_json(&json)?;
        tracing::debug!(path = %self.entries_path.display(), total = entries.len(), "loaded entries");

        Ok(entries
            .into_iter()
            .filter(|e| e.freelancer_id == freelancer_id)
            .collect())
    }

    async fn fetch_bookings(
        &self,
        freelancer_id: &str,
        range: DateRange,
        category_id: Option<&str>,
        exclude_status: BookingStatus,
    ) -> Result<Vec<Booking>> {
        let json = Self::read(&self.bookings_path).await?;
        let bookings = parse_bookings_json(&json)?;
        tracing::debug!(path = %self.bookings_path.display(), total = bookings.len(), "loaded bookings");

        Ok(filter_bookings(
            &bookings,
            freelancer_id,
            range,
            category_id,
            &exclude_status,
        ))
    }
}
