//! Forecast evaluation: percentage error metrics and monitoring reports.

pub mod metrics;
pub mod monitoring;

pub use metrics::{absolute_percentage_errors, mape, rolling_mape};
pub use monitoring::{
    monitor, AlignedPoint, Monitoring, MonitoringReport, DEFAULT_ROLLING_WINDOW,
};
