//! Type definitions for billstat

mod billing;
mod config;
mod error;

pub use billing::*;
pub use config::*;
pub use error::*;

/// Recovered conditions from loading the billing file
#[derive(Debug, Clone, PartialEq)]
pub enum LoadWarning {
    /// Billing file does not exist
    FileNotFound(std::path::PathBuf),
    /// Billing file is not a valid array of billing records
    InvalidJson(String),
}

impl LoadWarning {
    /// One-line diagnostic shown to the user before the report
    pub fn message(&self) -> &'static str {
        match self {
            LoadWarning::FileNotFound(_) => "File not found.",
            LoadWarning::InvalidJson(_) => "Invalid JSON.",
        }
    }
}
