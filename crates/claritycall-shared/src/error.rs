use thiserror::Error;

/// Errors produced by the split civil-time codec.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeError {
    /// A required form field (date or time) was empty.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The date string did not parse as a calendar date.
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// The time string did not parse as a 12-hour clock time.
    #[error("Invalid time: {0}")]
    InvalidTime(String),

    /// The civil time falls in a DST gap and has no local representation.
    #[error("Time does not exist in the local timezone")]
    NonexistentLocalTime,
}
