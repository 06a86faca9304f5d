//! Calendar feature engineering.
//!
//! Turns a date range into the numeric feature matrix the load model
//! expects: a holiday indicator followed by a trend column and weekly and
//! yearly Fourier terms.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use loadcast::config::ForecasterConfig;
//! use loadcast::core::DateRange;
//! use loadcast::features::{assemble_features, ItalianCalendar};
//!
//! let range = DateRange::new(
//!     NaiveDate::from_ymd_opt(2022, 1, 1).unwrap(),
//!     NaiveDate::from_ymd_opt(2022, 1, 3).unwrap(),
//! )
//! .unwrap();
//! let matrix = assemble_features(&range, &ForecasterConfig::default(), &ItalianCalendar).unwrap();
//! assert_eq!(matrix.n_rows(), 3);
//! ```

pub mod fourier;
pub mod holiday;
pub mod matrix;

pub use fourier::{
    fourier_features, fourier_terms, FourierSpec, TREND_COLUMN, WEEKLY_PERIOD, YEARLY_PERIOD,
};
pub use holiday::{
    easter_sunday, holiday_features, HolidayCalendar, ItalianCalendar, UnresolvedYearPolicy,
};
pub use matrix::{assemble_features, FeatureMatrix, HOLIDAY_COLUMN};
