//! Error types for availability-engine operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A required identifier or date was missing or unparseable.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The data-access collaborator failed to return entries or bookings.
    #[error("Data source error: {0}")]
    Source(String),

    /// A stored entry or booking could not be interpreted.
    #[error("Corrupt data: {0}")]
    CorruptData(String),
}

impl From<serde_json::Error> for EngineError {
    fn from(e: serde_json::Error) -> Self {
        EngineError::CorruptData(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
