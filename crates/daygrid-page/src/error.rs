use thiserror::Error;

/// Calendar page errors
#[derive(Error, Debug)]
pub enum PageError {
    #[error(transparent)]
    SequenceError(#[from] daygrid_core::error::SeqError),

    #[error(transparent)]
    DateError(#[from] daygrid_date::error::DateError),

    #[error(transparent)]
    CoreError(#[from] daygrid_core::error::CoreError),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

pub type PageResult<T> = std::result::Result<T, PageError>;
