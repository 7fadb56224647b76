//! Services for loading billing data and computing statistics

pub mod aggregator;
pub mod data_loader;
pub mod dates;
pub mod holidays;
pub mod report;

pub use aggregator::BillingService;
pub use data_loader::{DataLoaderService, LoadResult};
pub use dates::{is_weekend, parse_day};
pub use holidays::{load_holidays, resolve_holidays};
pub use report::BillingReport;
