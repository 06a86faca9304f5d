//! Pretrained linear regression model and its on-disk artifact.

use crate::config::ForecasterConfig;
use crate::error::{ForecastError, Result};
use crate::features::FeatureMatrix;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Linear model: `intercept + Σ coefficients[j] · x[j]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearModel {
    /// One coefficient per feature column, in column order.
    coefficients: Vec<f64>,
    /// Intercept term.
    intercept: f64,
    /// Column names the coefficients were trained against. Empty when the
    /// artifact carries no names; columns are then matched by position only.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    feature_names: Vec<String>,
}

impl LinearModel {
    pub fn new(coefficients: Vec<f64>, intercept: f64) -> Self {
        Self {
            coefficients,
            intercept,
            feature_names: Vec::new(),
        }
    }

    pub fn with_feature_names(mut self, names: Vec<String>) -> Self {
        self.feature_names = names;
        self
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    pub fn num_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Check that the model can consume the features described by `config`.
    pub fn check_compatible(&self, config: &ForecasterConfig) -> Result<()> {
        let expected = config.feature_width();
        if self.coefficients.len() != expected {
            return Err(ForecastError::DimensionMismatch {
                expected,
                got: self.coefficients.len(),
            });
        }
        if !self.feature_names.is_empty() {
            self.check_names(&config.feature_names())?;
        }
        Ok(())
    }

    fn check_names(&self, columns: &[String]) -> Result<()> {
        if self.feature_names.len() != columns.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: columns.len(),
                got: self.feature_names.len(),
            });
        }
        if let Some((want, got)) = self
            .feature_names
            .iter()
            .zip(columns)
            .find(|(want, got)| want != got)
        {
            return Err(ForecastError::InvalidParameter(format!(
                "feature column mismatch: model expects '{}', got '{}'",
                want, got
            )));
        }
        Ok(())
    }

    /// Prediction for a single feature row.
    pub fn predict_row(&self, row: &[f64]) -> Result<f64> {
        if row.len() != self.coefficients.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: self.coefficients.len(),
                got: row.len(),
            });
        }
        Ok(self.intercept
            + self
                .coefficients
                .iter()
                .zip(row)
                .map(|(c, x)| c * x)
                .sum::<f64>())
    }

    /// Predictions for every row of `features`, in row order.
    pub fn predict(&self, features: &FeatureMatrix) -> Result<Vec<f64>> {
        if features.n_cols() != self.coefficients.len() {
            return Err(ForecastError::DimensionMismatch {
                expected: self.coefficients.len(),
                got: features.n_cols(),
            });
        }
        if !self.feature_names.is_empty() {
            self.check_names(features.column_names())?;
        }
        features
            .rows()
            .iter()
            .map(|row| self.predict_row(row))
            .collect()
    }
}

/// Serialized form of a pretrained model.
///
/// ```json
/// {
///   "config": { "origin": "2006-01-01", "weekly_harmonics": 5, ... },
///   "feature_names": ["holiday", "trend", "sin_7_1", ...],
///   "coefficients": [ ... ],
///   "intercept": 31250.4
/// }
/// ```
///
/// `config` and `feature_names` are optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config: Option<ForecasterConfig>,
    #[serde(flatten)]
    pub model: LinearModel,
}

impl ModelArtifact {
    pub fn new(model: LinearModel) -> Self {
        Self {
            config: None,
            model,
        }
    }

    pub fn with_config(mut self, config: ForecasterConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Parse an artifact from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| ForecastError::Parse(format!("invalid model artifact: {}", e)))
    }

    /// Serialize the artifact to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ForecastError::Parse(format!("serialization error: {}", e)))
    }

    /// Read an artifact from disk.
    ///
    /// Any failure (missing file, unreadable file, malformed JSON) is reported
    /// as [`ForecastError::ModelLoad`].
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json =
            std::fs::read_to_string(path).map_err(|e| ForecastError::model_load(path, e))?;
        Self::from_json(&json).map_err(|e| ForecastError::model_load(path, e))
    }
}
