//! Error types for the gigbook engines.

use thiserror::Error;

/// Errors that can occur in gigbook operations.
#[derive(Error, Debug)]
pub enum GigbookError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Invalid time '{0}'. Expected HH:MM")]
    InvalidTime(String),

    #[error("Invalid month {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },

    /// A filter named a facet the engine has no selector for.
    #[error("Unknown facet '{0}'")]
    UnknownFacet(String),

    #[error("Invalid recurrence rule: {0}")]
    Recurrence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for gigbook operations.
pub type GigbookResult<T> = Result<T, GigbookError>;
