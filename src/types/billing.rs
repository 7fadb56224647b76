//! Billing record types

use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::HashSet;

/// One dated billing amount as stored in the billing file
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct BillingDay {
    /// Calendar date string (ISO-style, parsed on demand)
    #[serde(rename = "Day", alias = "day")]
    pub day: String,
    #[serde(rename = "Billing", alias = "billing", default)]
    pub billing: f64,
    /// Stored weekday label. Statistics derive the weekday from `day` instead.
    #[serde(rename = "DayOfWeek", alias = "dayOfWeek")]
    pub day_of_week: String,
}

impl BillingDay {
    pub fn new(day: impl Into<String>, billing: f64, day_of_week: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            billing,
            day_of_week: day_of_week.into(),
        }
    }

    pub fn is_positive(&self) -> bool {
        self.billing > 0.0
    }
}

/// Deduplicated set of holiday dates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HolidaySet {
    dates: HashSet<NaiveDate>,
}

impl HolidaySet {
    pub fn contains(&self, date: &NaiveDate) -> bool {
        self.dates.contains(date)
    }

    pub fn len(&self) -> usize {
        self.dates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &NaiveDate> {
        self.dates.iter()
    }
}

impl FromIterator<NaiveDate> for HolidaySet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self {
            dates: iter.into_iter().collect(),
        }
    }
}

impl Extend<NaiveDate> for HolidaySet {
    fn extend<I: IntoIterator<Item = NaiveDate>>(&mut self, iter: I) {
        self.dates.extend(iter);
    }
}
