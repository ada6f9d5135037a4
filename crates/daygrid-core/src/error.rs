use thiserror::Error;

/// Errors raised when a sequence holds fewer (or more) elements than an
/// operation was promised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SeqError {
    #[error("Underflow: wanted {wanted} elements, the sequence produced {produced}")]
    Underflow { wanted: usize, produced: usize },

    #[error("Empty: the sequence produced no elements")]
    Empty,

    #[error("Overflow: the sequence reached the limit of {limit} elements")]
    Overflow { limit: usize },
}

pub type SeqResult<T> = std::result::Result<T, SeqError>;

/// Core-level errors
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type CoreResult<T> = std::result::Result<T, CoreError>;
