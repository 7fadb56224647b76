//! Holiday sources: inline dates and JSON holiday files

use std::fs;
use std::path::Path;

use crate::services::dates::parse_day;
use crate::types::{BillingConfig, BillingError, HolidaySet, Result};

/// Load a JSON array of holiday date strings
pub fn load_holidays(path: &Path) -> Result<HolidaySet> {
    let mut content = fs::read(path).map_err(|e| {
        BillingError::Config(format!(
            "cannot read holidays file {}: {}",
            path.display(),
            e
        ))
    })?;
    let raw: Vec<String> = simd_json::from_slice(&mut content).map_err(|e| {
        BillingError::Config(format!("invalid holidays file {}: {}", path.display(), e))
    })?;

    let holidays = raw
        .iter()
        .map(String::as_str)
        .map(parse_day)
        .collect::<Result<HolidaySet>>()?;

    tracing::debug!(path = %path.display(), holidays = holidays.len(), "loaded holidays file");
    Ok(holidays)
}

/// Union of the inline holidays and the holidays file of `config`
pub fn resolve_holidays(config: &BillingConfig) -> Result<HolidaySet> {
    let mut holidays: HolidaySet = config.holiday_dates.iter().copied().collect();
    if let Some(path) = &config.holidays_file {
        holidays.extend(load_holidays(path)?.iter().copied());
    }
    Ok(holidays)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::{NamedTempFile, TempDir};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sorted(holidays: &HolidaySet) -> Vec<NaiveDate> {
        let mut dates: Vec<NaiveDate> = holidays.iter().copied().collect();
        dates.sort();
        dates
    }

    fn write_temp(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_holidays_file() {
        let file = write_temp(r#"["2024-01-01", "2024-12-25", "2024-01-01"]"#);
        let holidays = load_holidays(file.path()).unwrap();
        assert_eq!(sorted(&holidays), vec![date(2024, 1, 1), date(2024, 12, 25)]);
    }

    #[test]
    fn test_load_holidays_missing_file_is_config_error() {
        let dir = TempDir::new().unwrap();
        let err = load_holidays(&dir.path().join("holidays.json")).unwrap_err();
        assert!(matches!(err, BillingError::Config(_)));
    }

    #[test]
    fn test_load_holidays_bad_json_is_config_error() {
        let file = write_temp(r#"{"holidays": []}"#);
        let err = load_holidays(file.path()).unwrap_err();
        assert!(matches!(err, BillingError::Config(_)));
    }

    #[test]
    fn test_load_holidays_bad_date() {
        let file = write_temp(r#"["2024-01-01", "someday"]"#);
        let err = load_holidays(file.path()).unwrap_err();
        assert!(matches!(err, BillingError::InvalidDate { .. }));
    }

    #[test]
    fn test_resolve_inline_only() {
        let config = BillingConfig::default().with_holidays([date(2024, 5, 1)]);
        let holidays = resolve_holidays(&config).unwrap();
        assert_eq!(sorted(&holidays), vec![date(2024, 5, 1)]);
    }

    #[test]
    fn test_resolve_merges_inline_and_file() {
        let file = write_temp(r#"["2024-05-01", "2024-11-15"]"#);
        let config = BillingConfig::default()
            .with_holidays([date(2024, 5, 1), date(2024, 9, 7)])
            .with_holidays_file(file.path());

        let holidays = resolve_holidays(&config).unwrap();

        assert_eq!(
            sorted(&holidays),
            vec![date(2024, 5, 1), date(2024, 9, 7), date(2024, 11, 15)]
        );
    }
}
