//! Forecaster configuration.
//!
//! The configuration fixes everything the pretrained model was trained
//! against: the origin of the trend axis, the number of Fourier harmonics
//! and the training cutoff. Changing any of these changes the feature
//! layout, so a model artifact is only valid for the configuration it was
//! trained with.

use crate::features::fourier::FourierSpec;
use crate::features::holiday::UnresolvedYearPolicy;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Default location of the pretrained model artifact.
pub const DEFAULT_MODEL_PATH: &str = "data/linear_regression.json";

/// Default origin of the trend axis.
pub const DEFAULT_ORIGIN: NaiveDate = ymd(2006, 1, 1);

/// Default last day of the training data.
pub const DEFAULT_TRAIN_END: NaiveDate = ymd(2020, 12, 31);

pub const DEFAULT_WEEKLY_HARMONICS: usize = 5;
pub const DEFAULT_YEARLY_HARMONICS: usize = 20;

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid calendar date"),
    }
}

/// Configuration shared by the feature assembler and the forecaster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecasterConfig {
    /// Day zero of the `trend` column.
    pub origin: NaiveDate,
    /// Number of weekly (period 7) sine/cosine pairs.
    pub weekly_harmonics: usize,
    /// Number of yearly (period 365.25) sine/cosine pairs.
    pub yearly_harmonics: usize,
    /// Last day covered by the training data.
    pub train_end_date: NaiveDate,
    /// What to do when the holiday calendar cannot resolve a year.
    #[serde(default)]
    pub unresolved_year_policy: UnresolvedYearPolicy,
}

impl Default for ForecasterConfig {
    fn default() -> Self {
        Self {
            origin: DEFAULT_ORIGIN,
            weekly_harmonics: DEFAULT_WEEKLY_HARMONICS,
            yearly_harmonics: DEFAULT_YEARLY_HARMONICS,
            train_end_date: DEFAULT_TRAIN_END,
            unresolved_year_policy: UnresolvedYearPolicy::default(),
        }
    }
}

impl ForecasterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_origin(mut self, origin: NaiveDate) -> Self {
        self.origin = origin;
        self
    }

    pub fn with_harmonics(mut self, weekly: usize, yearly: usize) -> Self {
        self.weekly_harmonics = weekly;
        self.yearly_harmonics = yearly;
        self
    }

    pub fn with_train_end_date(mut self, date: NaiveDate) -> Self {
        self.train_end_date = date;
        self
    }

    pub fn with_unresolved_year_policy(mut self, policy: UnresolvedYearPolicy) -> Self {
        self.unresolved_year_policy = policy;
        self
    }

    /// The Fourier block described by this configuration.
    pub fn fourier(&self) -> FourierSpec {
        FourierSpec::new(self.origin, self.weekly_harmonics, self.yearly_harmonics)
    }

    /// Number of feature columns: `holiday` plus the Fourier block.
    pub fn feature_width(&self) -> usize {
        1 + self.fourier().width()
    }

    /// Feature column names in model order.
    pub fn feature_names(&self) -> Vec<String> {
        let mut names = Vec::with_capacity(self.feature_width());
        names.push(crate::features::HOLIDAY_COLUMN.to_string());
        names.extend(self.fourier().column_names());
        names
    }
}
