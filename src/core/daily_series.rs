//! Date-indexed series with one value per calendar day.

use crate::core::DateRange;
use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::Serialize;

/// A series of values keyed by strictly ascending calendar days.
///
/// Used both for forecasts (always gap-free) and for caller-supplied actuals,
/// which may have gaps. Lookups are by date; a missing day is reported as
/// [`ForecastError::MissingDate`] rather than shifting later rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DailySeries {
    dates: Vec<NaiveDate>,
    values: Vec<f64>,
}

impl DailySeries {
    /// Create a series from parallel date and value vectors.
    ///
    /// Dates must be strictly ascending.
    pub fn new(dates: Vec<NaiveDate>, values: Vec<f64>) -> Result<Self> {
        if dates.len() != values.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: dates.len(),
                got: values.len(),
            });
        }
        if let Some(pair) = dates.windows(2).find(|w| w[0] >= w[1]) {
            return Err(ForecastError::InvalidParameter(format!(
                "dates must be strictly ascending ({} followed by {})",
                pair[0], pair[1]
            )));
        }
        Ok(Self { dates, values })
    }

    /// Create a gap-free series starting at `start`, one value per day.
    ///
    /// Values that would fall after [`NaiveDate::MAX`] are dropped.
    pub fn from_start(start: NaiveDate, mut values: Vec<f64>) -> Self {
        let dates: Vec<NaiveDate> = start.iter_days().take(values.len()).collect();
        values.truncate(dates.len());
        Self { dates, values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// The span from the first to the last date, or `None` when empty.
    pub fn range(&self) -> Option<DateRange> {
        match (self.dates.first(), self.dates.last()) {
            (Some(&first), Some(&last)) => DateRange::new(first, last).ok(),
            _ => None,
        }
    }

    /// True when every day between the first and last date has a value.
    pub fn is_contiguous(&self) -> bool {
        self.range()
            .map(|r| r.num_days() == self.len())
            .unwrap_or(true)
    }

    pub fn get(&self, date: NaiveDate) -> Option<f64> {
        self.dates
            .binary_search(&date)
            .ok()
            .map(|idx| self.values[idx])
    }

    /// Value for `date`, failing with [`ForecastError::MissingDate`] if absent.
    pub fn value_at(&self, date: NaiveDate) -> Result<f64> {
        self.get(date).ok_or(ForecastError::MissingDate(date))
    }

    /// Values for every day of `range`, in order.
    ///
    /// Fails on the first day of the range that has no value.
    pub fn values_in(&self, range: &DateRange) -> Result<Vec<f64>> {
        range.days().map(|day| self.value_at(day)).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, f64)> + '_ {
        self.dates.iter().copied().zip(self.values.iter().copied())
    }
}
