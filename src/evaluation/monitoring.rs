//! Forecast monitoring against observed load.

use crate::core::{DailySeries, DateRange};
use crate::error::{ForecastError, Result};
use crate::evaluation::metrics::{mape, rolling_mape};
use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

/// Rolling MAPE window used by the monitoring dashboard, in days.
pub const DEFAULT_ROLLING_WINDOW: usize = 3;

/// Actual and predicted load for one day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AlignedPoint {
    pub date: NaiveDate,
    pub actual: f64,
    pub predicted: f64,
}

/// Metrics over the days covered by both actuals and forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonitoringReport {
    /// Days covered by both series.
    pub window: DateRange,
    /// One point per day of `window`.
    pub aligned: Vec<AlignedPoint>,
    /// MAPE over the whole window.
    pub mape: f64,
    /// Size of the rolling window.
    pub window_size: usize,
    /// Rolling MAPE, labelled with the last day of each window.
    pub rolling_mape: Vec<(NaiveDate, f64)>,
}

impl MonitoringReport {
    pub fn actual(&self) -> Vec<f64> {
        self.aligned.iter().map(|p| p.actual).collect()
    }

    pub fn predicted(&self) -> Vec<f64> {
        self.aligned.iter().map(|p| p.predicted).collect()
    }
}

/// Outcome of comparing actuals with a forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Monitoring {
    /// The two series share no day; nothing can be compared.
    NoOverlap,
    Report(MonitoringReport),
}

impl Monitoring {
    pub fn report(&self) -> Option<&MonitoringReport> {
        match self {
            Monitoring::NoOverlap => None,
            Monitoring::Report(report) => Some(report),
        }
    }

    pub fn has_overlap(&self) -> bool {
        matches!(self, Monitoring::Report(_))
    }
}

/// Compare `actuals` with `forecast` over their common days.
///
/// Both series are read by date for every day of the overlap; a day missing
/// from either one fails with [`ForecastError::MissingDate`].
pub fn monitor(
    actuals: &DailySeries,
    forecast: &DailySeries,
    window_size: usize,
) -> Result<Monitoring> {
    if window_size == 0 {
        return Err(ForecastError::InvalidParameter(
            "rolling window size must be positive".into(),
        ));
    }
    let actual_range = actuals.range().ok_or(ForecastError::EmptyData)?;
    let forecast_range = forecast.range().ok_or(ForecastError::EmptyData)?;

    let Some(window) = actual_range.overlap(&forecast_range) else {
        debug!(
            actual = %actual_range,
            forecast = %forecast_range,
            "no overlap between actuals and forecast"
        );
        return Ok(Monitoring::NoOverlap);
    };

    let aligned = window
        .days()
        .map(|date| {
            Ok(AlignedPoint {
                date,
                actual: actuals.value_at(date)?,
                predicted: forecast.value_at(date)?,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let actual: Vec<f64> = aligned.iter().map(|p| p.actual).collect();
    let predicted: Vec<f64> = aligned.iter().map(|p| p.predicted).collect();

    let overall = mape(&actual, &predicted)?;
    let rolling = rolling_mape(&actual, &predicted, window_size)?
        .into_iter()
        .enumerate()
        .map(|(i, value)| (aligned[i + window_size - 1].date, value))
        .collect();

    debug!(%window, days = aligned.len(), mape = overall, "monitoring report");

    Ok(Monitoring::Report(MonitoringReport {
        window,
        aligned,
        mape: overall,
        window_size,
        rolling_mape: rolling,
    }))
}
