//! Quickstart: forecast three weeks of load and monitor it against uploaded actuals.
//!
//! Run with `RUST_LOG=debug` to see the pipeline's log output.

use chrono::NaiveDate;
use loadcast::io::{read_actuals_csv, DEFAULT_VALUE_COLUMN};
use loadcast::prelude::*;
use tracing_subscriber::EnvFilter;

fn main() -> loadcast::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    // A toy model: a base load, a slow trend, a weekly shape and a holiday dip.
    let config = ForecasterConfig::default();
    let mut coefficients = vec![0.0; config.feature_width()];
    coefficients[0] = -4_000.0;
    coefficients[1] = 0.2;
    coefficients[2] = 1_200.0;
    coefficients[3] = -600.0;
    let model = LinearModel::new(coefficients, 29_000.0).with_feature_names(config.feature_names());

    let mut forecaster = Forecaster::from_model(model, config)?;
    println!("Training data ends on {}", forecaster.train_end_date());

    let from = NaiveDate::from_ymd_opt(2022, 1, 1).unwrap();
    let to = NaiveDate::from_ymd_opt(2022, 1, 23).unwrap();
    let forecast = forecaster.predict(from, to)?;

    println!("\nForecast:");
    for (date, value) in forecast.iter().take(7) {
        println!("  {}  {:>10.1}", date, value);
    }
    println!("  ... {} days in total", forecast.len());

    let csv = "Time,Load\n\
               2022-01-20,33100\n\
               2022-01-21,32050\n\
               2022-01-22,30400\n\
               2022-01-23,29800\n\
               2022-01-24,32900\n\
               2022-01-25,33300\n";
    let actuals = read_actuals_csv(csv.as_bytes(), DEFAULT_VALUE_COLUMN)?;

    match forecaster.monitor(&actuals, DEFAULT_ROLLING_WINDOW)? {
        Monitoring::NoOverlap => {
            println!("\nNo overlap between prediction and actual data time windows");
        }
        Monitoring::Report(report) => {
            println!("\nPredicted vs actual over {}:", report.window);
            for point in &report.aligned {
                println!(
                    "  {}  predicted {:>10.1}  actual {:>10.1}",
                    point.date, point.predicted, point.actual
                );
            }
            println!("\nMAPE: {:.4}", report.mape);
            println!("{} days rolling MAPE:", report.window_size);
            for (date, value) in &report.rolling_mape {
                println!("  {}  {:.4}", date, value);
            }
        }
    }

    Ok(())
}
