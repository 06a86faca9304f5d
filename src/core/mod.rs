//! Core data structures: date ranges and date-indexed series.

mod daily_series;
mod date_range;

pub use daily_series::DailySeries;
pub use date_range::{time_window_overlap, DateRange};
