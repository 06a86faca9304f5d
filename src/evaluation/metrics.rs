//! Percentage error metrics for forecast evaluation.
//!
//! **Note:** MAPE here divides by the *predicted* value,
//! `mean(|actual - predicted| / predicted)`, not by the actual value as in
//! the textbook definition. Dashboards built on this crate report that
//! variant, so it is kept as is. A zero prediction is not trapped and
//! yields `inf` or `NaN`.

use crate::error::{ForecastError, Result};

fn check_aligned(actual: &[f64], predicted: &[f64]) -> Result<()> {
    if actual.len() != predicted.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: actual.len(),
            got: predicted.len(),
        });
    }
    Ok(())
}

/// Mean of `|a - p| / p` over a non-empty window.
fn window_mape(actual: &[f64], predicted: &[f64]) -> f64 {
    let sum: f64 = actual
        .iter()
        .zip(predicted.iter())
        .map(|(a, p)| (a - p).abs() / p)
        .sum();
    sum / actual.len() as f64
}

/// Apply `f` to every full trailing window of two aligned series.
///
/// Returns `len - window + 1` values; positions before the first full
/// window produce nothing.
fn rolling_apply<F>(actual: &[f64], predicted: &[f64], window: usize, f: F) -> Vec<f64>
where
    F: Fn(&[f64], &[f64]) -> f64,
{
    let n = actual.len();
    if window == 0 || n < window {
        return Vec::new();
    }
    (window..=n)
        .map(|end| {
            let start = end - window;
            f(&actual[start..end], &predicted[start..end])
        })
        .collect()
}

/// Per-point absolute percentage errors `|a - p| / p`.
pub fn absolute_percentage_errors(actual: &[f64], predicted: &[f64]) -> Result<Vec<f64>> {
    check_aligned(actual, predicted)?;
    Ok(rolling_apply(actual, predicted, 1, window_mape))
}

/// Mean Absolute Percentage Error with the predicted value as denominator.
///
/// # Example
///
/// ```
/// use loadcast::evaluation::mape;
///
/// let err = mape(&[100.0, 100.0], &[110.0, 90.0]).unwrap();
/// assert!((err - 0.10101).abs() < 1e-5);
/// ```
pub fn mape(actual: &[f64], predicted: &[f64]) -> Result<f64> {
    check_aligned(actual, predicted)?;
    rolling_apply(actual, predicted, actual.len(), window_mape)
        .first()
        .copied()
        .ok_or(ForecastError::EmptyData)
}

/// MAPE over each full trailing window of `window_size` aligned points.
///
/// The output has `len - window_size + 1` values (none when the series is
/// shorter than one window). Element `i` covers input positions
/// `i..i + window_size`.
pub fn rolling_mape(actual: &[f64], predicted: &[f64], window_size: usize) -> Result<Vec<f64>> {
    check_aligned(actual, predicted)?;
    if window_size == 0 {
        return Err(ForecastError::InvalidParameter(
            "rolling window size must be positive".into(),
        ));
    }
    Ok(rolling_apply(actual, predicted, window_size, window_mape))
}
