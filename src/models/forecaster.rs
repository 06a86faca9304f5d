//! Date-range forecaster built on a pretrained linear model.

use crate::config::{ForecasterConfig, DEFAULT_MODEL_PATH};
use crate::core::{DailySeries, DateRange};
use crate::error::{ForecastError, Result};
use crate::evaluation::{monitor, Monitoring};
use crate::features::{assemble_features, FeatureMatrix, HolidayCalendar, ItalianCalendar};
use crate::models::linear::{LinearModel, ModelArtifact};
use chrono::NaiveDate;
use std::fmt;
use std::path::Path;
use tracing::{debug, info};

const IN_MEMORY: &str = "<in-memory>";

/// Last forecast produced by [`Forecaster::predict`].
#[derive(Debug, Clone)]
struct ForecastState {
    range: DateRange,
    series: DailySeries,
}

/// Daily load forecaster.
///
/// Owns the pretrained model, loaded once at construction and never
/// modified, together with the most recent forecast. Each call to
/// [`predict`](Forecaster::predict) replaces that forecast; share a
/// `Forecaster` between sessions only if they may see each other's results.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use loadcast::config::ForecasterConfig;
/// use loadcast::models::{Forecaster, LinearModel};
///
/// let config = ForecasterConfig::new().with_harmonics(1, 1);
/// let model = LinearModel::new(vec![0.0; config.feature_width()], 1000.0);
/// let mut forecaster = Forecaster::from_model(model, config).unwrap();
///
/// let from = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
/// let to = NaiveDate::from_ymd_opt(2022, 1, 7).unwrap();
/// let forecast = forecaster.predict(from, to).unwrap();
/// assert_eq!(forecast.len(), 7);
/// ```
pub struct Forecaster {
    config: ForecasterConfig,
    model: LinearModel,
    calendar: Box<dyn HolidayCalendar + Send + Sync>,
    last: Option<ForecastState>,
}

impl Forecaster {
    /// Load the model artifact at `path`.
    ///
    /// The artifact's embedded configuration is used when present, the
    /// default configuration otherwise.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let artifact = ModelArtifact::read(path)?;
        let config = artifact.config.unwrap_or_default();
        Self::build(artifact.model, config, path)
    }

    /// Load the model artifact from [`DEFAULT_MODEL_PATH`].
    pub fn load_default() -> Result<Self> {
        Self::load(DEFAULT_MODEL_PATH)
    }

    /// Load the model artifact at `path` for an explicit configuration.
    ///
    /// An artifact that embeds a different configuration is rejected.
    pub fn load_with_config(path: impl AsRef<Path>, config: ForecasterConfig) -> Result<Self> {
        let path = path.as_ref();
        let artifact = ModelArtifact::read(path)?;
        if let Some(embedded) = artifact.config {
            if embedded != config {
                return Err(ForecastError::model_load(
                    path,
                    "artifact was trained with a different configuration",
                ));
            }
        }
        Self::build(artifact.model, config, path)
    }

    /// Build a forecaster around an in-memory model.
    pub fn from_model(model: LinearModel, config: ForecasterConfig) -> Result<Self> {
        Self::build(model, config, Path::new(IN_MEMORY))
    }

    fn build(model: LinearModel, config: ForecasterConfig, source: &Path) -> Result<Self> {
        model
            .check_compatible(&config)
            .map_err(|e| ForecastError::model_load(source, e))?;

        info!(
            source = %source.display(),
            features = model.num_features(),
            train_end = %config.train_end_date,
            "loaded linear load model"
        );

        Ok(Self {
            config,
            model,
            calendar: Box::new(ItalianCalendar),
            last: None,
        })
    }

    /// Replace the holiday calendar.
    pub fn with_calendar(mut self, calendar: impl HolidayCalendar + Send + Sync + 'static) -> Self {
        self.calendar = Box::new(calendar);
        self
    }

    pub fn config(&self) -> &ForecasterConfig {
        &self.config
    }

    pub fn model(&self) -> &LinearModel {
        &self.model
    }

    /// Last day of the training data.
    ///
    /// Forecasts are meaningful only after this date. Earlier dates are not
    /// rejected; bounding the query is up to the caller.
    pub fn train_end_date(&self) -> NaiveDate {
        self.config.train_end_date
    }

    /// Most recent forecast, if any.
    pub fn forecast(&self) -> Option<&DailySeries> {
        self.last.as_ref().map(|s| &s.series)
    }

    /// Range of the most recent forecast, if any.
    pub fn forecast_range(&self) -> Option<DateRange> {
        self.last.as_ref().map(|s| s.range)
    }

    /// Feature matrix for `[date_from, date_to]` without running the model.
    pub fn features(&self, date_from: NaiveDate, date_to: NaiveDate) -> Result<FeatureMatrix> {
        let range = DateRange::new(date_from, date_to)?;
        assemble_features(&range, &self.config, self.calendar.as_ref())
    }

    /// Forecast every day of `[date_from, date_to]`.
    ///
    /// The result is stored as the forecaster's current forecast, replacing
    /// any previous one, and returned.
    pub fn predict(&mut self, date_from: NaiveDate, date_to: NaiveDate) -> Result<DailySeries> {
        let range = DateRange::new(date_from, date_to)?;
        if date_from <= self.config.train_end_date {
            debug!(
                %range,
                train_end = %self.config.train_end_date,
                "forecast range starts inside the training period"
            );
        }

        let features = assemble_features(&range, &self.config, self.calendar.as_ref())?;
        let values = self.model.predict(&features)?;
        let series = DailySeries::new(features.dates().to_vec(), values)?;

        debug!(%range, days = series.len(), "computed forecast");

        self.last = Some(ForecastState {
            range,
            series: series.clone(),
        });
        Ok(series)
    }

    /// Compare `actuals` against the current forecast.
    pub fn monitor(&self, actuals: &DailySeries, window_size: usize) -> Result<Monitoring> {
        let forecast = self.forecast().ok_or(ForecastError::ForecastRequired)?;
        monitor(actuals, forecast, window_size)
    }
}

impl fmt::Debug for Forecaster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Forecaster")
            .field("config", &self.config)
            .field("features", &self.model.num_features())
            .field("calendar", &self.calendar.name())
            .field("forecast_range", &self.forecast_range())
            .finish()
    }
}
