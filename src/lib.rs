//! # loadcast
//!
//! Daily power load forecasting from calendar features.
//!
//! A date range is turned into a feature matrix (an Italian public-holiday
//! indicator, a day-offset trend and weekly/yearly Fourier terms), a
//! pretrained linear model maps each row to a load forecast, and forecasts
//! are checked against observed load with point and rolling MAPE.
//!
//! ```
//! use chrono::NaiveDate;
//! use loadcast::prelude::*;
//!
//! let config = ForecasterConfig::new().with_harmonics(2, 4);
//! let model = LinearModel::new(vec![0.0; config.feature_width()], 30_000.0);
//! let mut forecaster = Forecaster::from_model(model, config).unwrap();
//!
//! let from = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
//! let to = NaiveDate::from_ymd_opt(2022, 1, 31).unwrap();
//! let forecast = forecaster.predict(from, to).unwrap();
//!
//! let actuals = DailySeries::from_start(from, vec![31_000.0; 10]);
//! match forecaster.monitor(&actuals, DEFAULT_ROLLING_WINDOW).unwrap() {
//!     Monitoring::Report(report) => assert_eq!(report.rolling_mape.len(), 8),
//!     Monitoring::NoOverlap => unreachable!(),
//! }
//! # assert_eq!(forecast.len(), 31);
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod evaluation;
pub mod features;
pub mod io;
pub mod models;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::config::ForecasterConfig;
    pub use crate::core::{time_window_overlap, DailySeries, DateRange};
    pub use crate::error::{ForecastError, Result};
    pub use crate::evaluation::{
        mape, monitor, rolling_mape, Monitoring, MonitoringReport, DEFAULT_ROLLING_WINDOW,
    };
    pub use crate::features::{assemble_features, FeatureMatrix, HolidayCalendar, ItalianCalendar};
    pub use crate::models::{Forecaster, LinearModel, ModelArtifact};
}
