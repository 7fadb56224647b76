use chrono::NaiveDate;
use std::path::PathBuf;

/// Billing file read when no path is given
pub const DEFAULT_BILLING_FILE: &str = "billing.json";

/// Inputs for one aggregation session
#[derive(Debug, Clone, PartialEq)]
pub struct BillingConfig {
    /// JSON array of daily billing records
    pub billing_file: PathBuf,
    /// Holidays given inline
    pub holiday_dates: Vec<NaiveDate>,
    /// JSON array of holiday date strings, merged with `holiday_dates`
    pub holidays_file: Option<PathBuf>,
}

impl BillingConfig {
    pub fn new(billing_file: impl Into<PathBuf>) -> Self {
        Self {
            billing_file: billing_file.into(),
            ..Self::default()
        }
    }

    pub fn with_holidays(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.holiday_dates.extend(dates);
        self
    }

    pub fn with_holidays_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.holidays_file = Some(path.into());
        self
    }
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            billing_file: PathBuf::from(DEFAULT_BILLING_FILE),
            holiday_dates: Vec::new(),
            holidays_file: None,
        }
    }
}
