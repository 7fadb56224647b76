use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;
use clap::Parser;

use crate::services::{parse_day, BillingReport, BillingService};
use crate::types::{BillingConfig, DEFAULT_BILLING_FILE};

/// Billing statistics over daily billing records
#[derive(Parser)]
#[command(name = "billstat")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Billing file (JSON array of {Day, Billing, DayOfWeek})
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_BILLING_FILE)]
    file: PathBuf,

    /// Holiday to exclude from the monthly average (repeatable)
    #[arg(long = "holiday", value_name = "DATE", value_parser = parse_date_arg)]
    holidays: Vec<NaiveDate>,

    /// JSON file with an array of holiday dates
    #[arg(long, value_name = "PATH")]
    holidays_file: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_date_arg(s: &str) -> Result<NaiveDate, String> {
    parse_day(s).map_err(|e| e.to_string())
}

impl Cli {
    pub fn verbose(&self) -> bool {
        self.verbose
    }

    pub fn config(&self) -> BillingConfig {
        let config = BillingConfig::new(&self.file).with_holidays(self.holidays.iter().copied());
        match &self.holidays_file {
            Some(path) => config.with_holidays_file(path),
            None => config,
        }
    }

    pub fn run(self) -> anyhow::Result<()> {
        let stdout = std::io::stdout();
        let stderr = std::io::stderr();
        self.execute(&mut stdout.lock(), &mut stderr.lock())
    }

    /// Load, aggregate and write the report to `out`.
    ///
    /// A recovered load condition is reported on `out`, or on `diag` in JSON
    /// mode, and the run continues with an empty record set.
    pub fn execute<W: Write, D: Write>(&self, out: &mut W, diag: &mut D) -> anyhow::Result<()> {
        let config = self.config();
        tracing::debug!(?config, "starting billing aggregation");

        let (service, warning) = BillingService::from_config(&config).with_context(|| {
            format!(
                "failed to load billing data from {}",
                config.billing_file.display()
            )
        })?;

        if let Some(warning) = &warning {
            if self.json {
                writeln!(diag, "{}", warning.message())?;
            } else {
                writeln!(out, "{}", warning.message())?;
            }
        }

        for day in service.weekday_mismatches() {
            tracing::warn!(
                day = %day.day,
                day_of_week = %day.day_of_week,
                "stored weekday label does not match the date"
            );
        }

        let report = BillingReport::from_service(&service)?;

        if self.json {
            let json = report
                .render_json()
                .context("failed to serialize billing report")?;
            writeln!(out, "{}", json)?;
        } else {
            write!(out, "{}", report.render_text())?;
        }
        Ok(())
    }
}
