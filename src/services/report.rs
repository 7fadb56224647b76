//! Evaluated billing statistics and their console renderings

use serde::Serialize;

use crate::services::BillingService;
use crate::types::Result;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct BillingReport {
    pub record_count: usize,
    pub lowest_billing: Option<f64>,
    pub highest_billing: f64,
    pub monthly_average: Option<f64>,
    pub days_above_average: usize,
}

impl BillingReport {
    /// Evaluate every query. Fails before producing anything if one of them fails.
    pub fn from_service(service: &BillingService) -> Result<Self> {
        Ok(Self {
            record_count: service.days().len(),
            lowest_billing: service.lowest_billing(),
            highest_billing: service.highest_billing()?,
            monthly_average: service.monthly_average()?,
            days_above_average: service.count_above_average()?,
        })
    }

    pub fn render_text(&self) -> String {
        let lowest = self
            .lowest_billing
            .map(|v| v.to_string())
            .unwrap_or_else(|| "n/a".into());
        let average = self
            .monthly_average
            .map(|v| format!("{:.2}", v))
            .unwrap_or_else(|| "n/a".into());

        format!(
            "Lowest billing: {}\n\
             Highest billing: {}\n\
             Monthly average: {}\n\
             Days above average: {}\n",
            lowest, self.highest_billing, average, self.days_above_average
        )
    }

    pub fn render_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
