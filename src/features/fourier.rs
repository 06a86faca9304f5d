//! Fourier terms for weekly and yearly seasonality.
//!
//! Every date is mapped to an integer day offset (`trend`) from a fixed
//! origin, which then drives sine/cosine pairs at integer multiples of the
//! weekly and yearly base frequencies.

use chrono::NaiveDate;
use std::f64::consts::PI;

/// Period of the weekly harmonics in days.
pub const WEEKLY_PERIOD: f64 = 7.0;

/// Period of the yearly harmonics in days. Averages out leap years; the
/// trained coefficients depend on this exact value.
pub const YEARLY_PERIOD: f64 = 365.25;

/// Name of the day-offset column.
pub const TREND_COLUMN: &str = "trend";

/// One seasonal block of sine/cosine pairs.
#[derive(Debug, Clone, Copy, PartialEq)]
struct SeasonBlock {
    label: &'static str,
    period: f64,
    order: usize,
}

/// Layout of the Fourier feature block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FourierSpec {
    origin: NaiveDate,
    weekly_harmonics: usize,
    yearly_harmonics: usize,
}

impl FourierSpec {
    pub fn new(origin: NaiveDate, weekly_harmonics: usize, yearly_harmonics: usize) -> Self {
        Self {
            origin,
            weekly_harmonics,
            yearly_harmonics,
        }
    }

    pub fn origin(&self) -> NaiveDate {
        self.origin
    }

    fn blocks(&self) -> [SeasonBlock; 2] {
        [
            SeasonBlock {
                label: "7",
                period: WEEKLY_PERIOD,
                order: self.weekly_harmonics,
            },
            SeasonBlock {
                label: "365",
                period: YEARLY_PERIOD,
                order: self.yearly_harmonics,
            },
        ]
    }

    /// Number of columns: `trend` plus two per harmonic.
    pub fn width(&self) -> usize {
        1 + 2 * (self.weekly_harmonics + self.yearly_harmonics)
    }

    /// Column names: `trend`, then `sin_7_h`/`cos_7_h`, then `sin_365_h`/`cos_365_h`.
    pub fn column_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.width());
        names.push(TREND_COLUMN.to_string());
        for block in self.blocks() {
            for k in 1..=block.order {
                names.push(format!("sin_{}_{}", block.label, k));
                names.push(format!("cos_{}_{}", block.label, k));
            }
        }
        names
    }

    /// Signed number of days from the origin to `date`.
    pub fn trend(&self, date: NaiveDate) -> i64 {
        (date - self.origin).num_days()
    }

    /// Feature row for a single date.
    pub fn row(&self, date: NaiveDate) -> Vec<f64> {
        let t = self.trend(date) as f64;
        let mut row = Vec::with_capacity(self.width());
        row.push(t);
        for block in self.blocks() {
            row.extend(fourier_terms(t, block.period, block.order));
        }
        row
    }
}

/// Interleaved `[sin_1, cos_1, ..., sin_order, cos_order]` at time `t` (days).
///
/// The argument is evaluated as `2π·k / period · t`, matching the operation
/// order the model was trained with.
pub fn fourier_terms(t: f64, period: f64, order: usize) -> Vec<f64> {
    let mut terms = Vec::with_capacity(2 * order);
    for k in 1..=order {
        let c = 2.0 * PI * (k as f64) / period * t;
        terms.push(c.sin());
        terms.push(c.cos());
    }
    terms
}

/// Fourier feature rows for each date, in input order.
pub fn fourier_features(dates: &[NaiveDate], spec: &FourierSpec) -> Vec<Vec<f64>> {
    dates.iter().map(|&date| spec.row(date)).collect()
}
