//! Forecasting models.
//!
//! The load model is a pretrained linear regression over calendar
//! features. [`LinearModel`] holds its coefficients and [`Forecaster`]
//! couples it with feature assembly and the last computed forecast.

pub mod forecaster;
pub mod linear;

pub use forecaster::Forecaster;
pub use linear::{LinearModel, ModelArtifact};
