//! Billing statistics over a loaded record set

use chrono::Datelike;

use crate::services::dates::{is_weekend, parse_day, parse_weekday_label};
use crate::services::data_loader::DataLoaderService;
use crate::services::holidays::resolve_holidays;
use crate::types::{BillingConfig, BillingDay, BillingError, HolidaySet, LoadWarning, Result};

/// Read-only aggregation session over billing records and holidays.
///
/// Every query recomputes from the full record set.
pub struct BillingService {
    days: Vec<BillingDay>,
    holidays: HolidaySet,
}

impl BillingService {
    pub fn new(days: Vec<BillingDay>, holidays: HolidaySet) -> Self {
        Self { days, holidays }
    }

    /// Load records and holidays described by `config`.
    /// Returns the recovered load condition (if any) alongside the service.
    pub fn from_config(config: &BillingConfig) -> Result<(Self, Option<LoadWarning>)> {
        let holidays = resolve_holidays(config)?;
        let loaded = DataLoaderService::load(&config.billing_file)?;
        Ok((Self::new(loaded.days, holidays), loaded.warning))
    }

    pub fn days(&self) -> &[BillingDay] {
        &self.days
    }

    pub fn holidays(&self) -> &HolidaySet {
        &self.holidays
    }

    /// Smallest strictly positive amount, `None` if there is none
    pub fn lowest_billing(&self) -> Option<f64> {
        self.days
            .iter()
            .filter(|d| d.is_positive())
            .map(|d| d.billing)
            .reduce(f64::min)
    }

    /// Largest amount over all records, non-positive ones included
    pub fn highest_billing(&self) -> Result<f64> {
        self.days
            .iter()
            .map(|d| d.billing)
            .reduce(f64::max)
            .ok_or(BillingError::EmptyDataset)
    }

    /// Mean of positive amounts on business days (not Saturday, Sunday or a holiday).
    ///
    /// `None` when no record qualifies. Dates are only parsed for positive
    /// records; a malformed date there is an error.
    pub fn monthly_average(&self) -> Result<Option<f64>> {
        let mut total = 0.0;
        let mut count: usize = 0;

        for day in &self.days {
            if !day.is_positive() {
                continue;
            }
            let date = parse_day(&day.day)?;
            if is_weekend(date) || self.holidays.contains(&date) {
                continue;
            }
            total += day.billing;
            count += 1;
        }

        Ok((count > 0).then(|| total / count as f64))
    }

    /// Number of records, across the whole set, strictly above the monthly average.
    ///
    /// The threshold comes from the business-day average (0 when undefined)
    /// while the counted population is every record, weekends, holidays and
    /// non-positive amounts included.
    pub fn count_above_average(&self) -> Result<usize> {
        let threshold = self.monthly_average()?.unwrap_or(0.0);
        Ok(self.days.iter().filter(|d| d.billing > threshold).count())
    }

    /// Records whose stored weekday label disagrees with the weekday of their date.
    /// Records with an unparsable date or label are skipped.
    pub fn weekday_mismatches(&self) -> Vec<&BillingDay> {
        self.days
            .iter()
            .filter(|d| {
                let Ok(date) = parse_day(&d.day) else {
                    return false;
                };
                parse_weekday_label(&d.day_of_week)
                    .is_some_and(|stated| stated != date.weekday())
            })
            .collect()
    }
}
