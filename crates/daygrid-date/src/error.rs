use thiserror::Error;

/// Date algebra errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Invalid date: {year:04}-{month:02}-{day:02}")]
    InvalidDate { year: i32, month: u32, day: u32 },

    #[error("Invalid month: {year:04}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("Unknown day of week: {0}")]
    UnknownDayOfWeek(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

pub type DateResult<T> = std::result::Result<T, DateError>;
