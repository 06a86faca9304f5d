//! Reading observed load from CSV.
//!
//! The expected layout has a timestamp in the first column and the load in
//! a named column:
//!
//! ```text
//! Time,Load
//! 2022-01-01 00:00:00,28311.5
//! 2022-01-01 01:00:00,27102.0
//! ```
//!
//! Observations are summed per calendar day.

use crate::core::DailySeries;
use crate::error::{ForecastError, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use csv::{ReaderBuilder, Trim};
use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// Column holding the load values in the dashboard's uploads.
pub const DEFAULT_VALUE_COLUMN: &str = "Load";

const OFFSET_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%:z", "%Y-%m-%d %H:%M:%S%z"];

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

/// Parse an ISO-8601 style timestamp or a bare `%Y-%m-%d` date.
///
/// Timestamps carrying a UTC offset (`+01:00`, `Z`) keep their own wall
/// clock time, so the calendar day is the one written in the file.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_local());
    }
    OFFSET_FORMATS
        .iter()
        .find_map(|f| DateTime::parse_from_str(s, f).ok())
        .map(|dt| dt.naive_local())
        .or_else(|| {
            NAIVE_FORMATS
                .iter()
                .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
        })
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

/// Sum observations per calendar day.
///
/// The result covers every day from the first to the last observation;
/// days without observations are `0.0`.
pub fn resample_daily_sum(observations: &[(NaiveDateTime, f64)]) -> Result<DailySeries> {
    let mut days: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for (ts, value) in observations {
        *days.entry(ts.date()).or_insert(0.0) += value;
    }

    let (first, last) = match (days.keys().next(), days.keys().next_back()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => return Err(ForecastError::EmptyData),
    };

    let values = first
        .iter_days()
        .take_while(|d| *d <= last)
        .map(|d| days.get(&d).copied().unwrap_or(0.0))
        .collect();
    Ok(DailySeries::from_start(first, values))
}

/// Read observations from CSV and resample them to daily sums.
///
/// Empty cells in the value column contribute nothing to their day's sum,
/// but their day still belongs to the series.
pub fn read_actuals_csv<R: Read>(reader: R, value_column: &str) -> Result<DailySeries> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()
        .map_err(|e| ForecastError::Parse(format!("CSV header: {}", e)))?;
    let value_idx = headers
        .iter()
        .position(|h| h == value_column)
        .ok_or_else(|| ForecastError::Parse(format!("missing column '{}'", value_column)))?;

    let mut observations = Vec::new();
    for (line, record) in rdr.records().enumerate() {
        let record = record.map_err(|e| ForecastError::Parse(format!("CSV record: {}", e)))?;
        let raw_ts = record.get(0).unwrap_or_default();
        let ts = parse_timestamp(raw_ts).ok_or_else(|| {
            ForecastError::Parse(format!("row {}: invalid timestamp '{}'", line + 1, raw_ts))
        })?;

        let raw_value = record.get(value_idx).unwrap_or_default();
        if raw_value.is_empty() {
            observations.push((ts, 0.0));
            continue;
        }
        let value: f64 = raw_value.parse().map_err(|_| {
            ForecastError::Parse(format!("row {}: invalid value '{}'", line + 1, raw_value))
        })?;
        observations.push((ts, value));
    }

    let series = resample_daily_sum(&observations)?;
    debug!(
        rows = observations.len(),
        days = series.len(),
        "resampled actuals to daily sums"
    );
    Ok(series)
}

/// [`read_actuals_csv`] on a file.
pub fn read_actuals_file(path: impl AsRef<Path>, value_column: &str) -> Result<DailySeries> {
    let path = path.as_ref();
    let file = std::fs::File::open(path).map_err(|e| ForecastError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    read_actuals_csv(file, value_column)
}
