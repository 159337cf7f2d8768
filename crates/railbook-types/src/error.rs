//! Error types for railbook.

use chrono::NaiveDate;
use thiserror::Error;

/// Result type alias for railbook operations.
pub type Result<T> = std::result::Result<T, RailbookError>;

/// Errors that can occur while building or serving a prediction.
#[derive(Error, Debug)]
pub enum RailbookError {
    /// A request field is malformed or out of range.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A request field could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl RailbookError {
    /// Returns true if the error was caused by the caller's input.
    ///
    /// Every variant except [`RailbookError::Json`] is a client error.
    #[must_use]
    pub const fn is_client_error(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Parse(_))
    }
}

/// Malformed or out-of-range request fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Train number is not exactly five digits.
    #[error("Invalid train number: {0} (expected 5 digits)")]
    TrainNumber(String),

    /// Class code is not one of the supported reservation classes.
    #[error("Invalid class code: {0} (expected one of SL, 3A, 2A, 1A, CC, EC, 2S)")]
    ClassCode(String),

    /// Quota is not one of the supported booking quotas.
    #[error("Invalid quota: {0} (expected one of GENERAL, LADIES, SENIOR_CITIZEN, TATKAL)")]
    Quota(String),

    /// Journey date does not have the `YYYY-MM-DD` shape.
    #[error("Invalid journey date format: {0} (expected YYYY-MM-DD)")]
    DateFormat(String),

    /// Journey date lies before the evaluation date.
    #[error("Journey date cannot be in the past: {journey_date} is before {today}")]
    PastJourneyDate {
        /// The requested journey date.
        journey_date: NaiveDate,
        /// The date the request was evaluated on.
        today: NaiveDate,
    },

    /// Waitlist position is outside the accepted range.
    #[error("Waitlist position out of range: {0} (expected 1..=500)")]
    WaitlistPosition(i64),
}

/// Unparseable request fields.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The journey date is not a valid calendar date.
    #[error("Invalid date {input:?}: {source}")]
    Date {
        /// The rejected input.
        input: String,
        /// The underlying chrono error.
        source: chrono::ParseError,
    },
}
