//! Billing file loading
//!
//! Missing files and malformed JSON are recovered into an empty record set
//! with a [`LoadWarning`]; every other I/O failure is returned as an error.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::types::{BillingDay, LoadWarning, Result};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Result of loading a billing file
#[derive(Debug)]
pub struct LoadResult {
    /// Records in file order
    pub days: Vec<BillingDay>,
    /// Recovered load condition (if any)
    pub warning: Option<LoadWarning>,
}

impl LoadResult {
    fn recovered(warning: LoadWarning) -> Self {
        Self {
            days: Vec::new(),
            warning: Some(warning),
        }
    }
}

/// Loader for JSON billing files
pub struct DataLoaderService;

impl DataLoaderService {
    /// Load all billing records from `path`
    pub fn load(path: &Path) -> Result<LoadResult> {
        let content = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "billing file not found");
                return Ok(LoadResult::recovered(LoadWarning::FileNotFound(
                    path.to_path_buf(),
                )));
            }
            Err(e) => return Err(e.into()),
        };

        match Self::parse(content) {
            Ok(days) => {
                tracing::debug!(path = %path.display(), records = days.len(), "loaded billing file");
                Ok(LoadResult {
                    days,
                    warning: None,
                })
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "invalid billing JSON");
                Ok(LoadResult::recovered(LoadWarning::InvalidJson(
                    e.to_string(),
                )))
            }
        }
    }

    /// Parse a JSON array of billing records. `null` and blank input yield no records.
    /// A leading UTF-8 byte order mark is skipped.
    pub fn parse(mut content: Vec<u8>) -> std::result::Result<Vec<BillingDay>, simd_json::Error> {
        if content.starts_with(UTF8_BOM) {
            content.drain(..UTF8_BOM.len());
        }
        if content.iter().all(u8::is_ascii_whitespace) {
            return Ok(Vec::new());
        }
        let days: Option<Vec<BillingDay>> = simd_json::from_slice(&mut content)?;
        Ok(days.unwrap_or_default())
    }
}
