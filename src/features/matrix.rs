//! Assembly of the model's feature matrix.

use crate::config::ForecasterConfig;
use crate::core::DateRange;
use crate::error::Result;
use crate::features::fourier::fourier_features;
use crate::features::holiday::{holiday_features, HolidayCalendar};
use chrono::NaiveDate;
use tracing::debug;

/// Name of the holiday indicator column.
pub const HOLIDAY_COLUMN: &str = "holiday";

/// Date-indexed feature rows in model column order.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    dates: Vec<NaiveDate>,
    columns: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl FeatureMatrix {
    pub fn dates(&self) -> &[NaiveDate] {
        &self.dates
    }

    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(|r| r.as_slice())
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Copy out one column by name.
    pub fn column(&self, name: &str) -> Option<Vec<f64>> {
        let idx = self.columns.iter().position(|c| c == name)?;
        Some(self.rows.iter().map(|r| r[idx]).collect())
    }
}

/// Concatenate row-aligned blocks column-wise.
fn hstack(blocks: &[Vec<Vec<f64>>]) -> Vec<Vec<f64>> {
    let rows = blocks.first().map_or(0, |b| b.len());
    (0..rows)
        .map(|i| {
            blocks
                .iter()
                .flat_map(|block| block[i].iter().copied())
                .collect()
        })
        .collect()
}

/// Build the feature matrix for every day of `range`.
///
/// The holiday and Fourier generators see the same date sequence, so rows
/// line up by construction. Columns are `holiday` followed by the Fourier
/// block described by `config`.
pub fn assemble_features(
    range: &DateRange,
    config: &ForecasterConfig,
    calendar: &dyn HolidayCalendar,
) -> Result<FeatureMatrix> {
    let dates: Vec<NaiveDate> = range.days().collect();

    let holidays: Vec<Vec<f64>> =
        holiday_features(&dates, calendar, config.unresolved_year_policy)?
            .into_iter()
            .map(|v| vec![v])
            .collect();
    let fourier = fourier_features(&dates, &config.fourier());
    let rows = hstack(&[holidays, fourier]);

    debug!(%range, rows = rows.len(), cols = config.feature_width(), "assembled features");

    Ok(FeatureMatrix {
        dates,
        columns: config.feature_names(),
        rows,
    })
}
