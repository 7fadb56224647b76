use thiserror::Error;

/// billstat error types
#[derive(Error, Debug)]
pub enum BillingError {
    /// Failed to parse JSON
    #[error("parse error: {0}")]
    Parse(String),

    /// File I/O error
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Day string is not a recognizable calendar date
    #[error("invalid date '{input}': {reason}")]
    InvalidDate { input: String, reason: String },

    /// Query has no defined value over an empty record set
    #[error("no billing records loaded")]
    EmptyDataset,

    /// Configuration error
    #[error("config error: {0}")]
    Config(String),
}

/// Result type alias for billstat
pub type Result<T> = std::result::Result<T, BillingError>;
