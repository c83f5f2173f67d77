//! # availability-engine
//!
//! Deterministic availability computation for a freelancer-booking marketplace.
//!
//! Given a freelancer's declared availability entries (one-off and recurring)
//! and their existing bookings, the engine determines which dates have open
//! time, which hourly slots remain free on a date, and how confident that
//! availability is. Every computation is a pure function of its inputs and an
//! injected `as_of` instant.
//!
//! ## Modules
//!
//! - [`model`]: Entries, bookings, slots, and day results
//! - [`recurrence`]: Does an entry apply on a given date?
//! - [`slots`]: Time-of-day window → one-hour slots
//! - [`conflict`]: Remove slots that overlap non-cancelled bookings
//! - [`day`]: The shared per-date pipeline ([`resolve_day`])
//! - [`availability`]: Month view and single-day slot listing
//! - [`source`]: Read contract for the data-access collaborator
//! - [`query`]: Validating, fetching request drivers
//! - [`error`]: Error types

pub mod availability;
pub mod conflict;
pub mod day;
pub mod error;
pub mod model;
pub mod query;
pub mod recurrence;
pub mod slots;
pub mod source;

pub use availability::{day_slots, month_availability, month_window, SlotListing, SlotView};
pub use day::{resolve_day, DayOutcome};
pub use error::EngineError;
pub use model::{
    AvailabilityEntry, Booking, BookingStatus, CertaintyLevel, DateRange, DayResult, DayStatus,
    DaySummary, RecurrencePattern, TimeSlot,
};
pub use query::{query_day, query_month, DayQuery, MonthQuery};
pub use recurrence::applies_on;
pub use slots::generate_slots;
pub use source::{AvailabilitySource, InMemorySource};
