//! Input of observed load data.

pub mod actuals;

pub use actuals::{
    parse_timestamp, read_actuals_csv, read_actuals_file, resample_daily_sum,
    DEFAULT_VALUE_COLUMN,
};
