//! End-to-end tests: artifact on disk -> forecast -> monitoring against CSV actuals.

use approx::assert_relative_eq;
use chrono::NaiveDate;
use loadcast::config::ForecasterConfig;
use loadcast::core::DateRange;
use loadcast::evaluation::{Monitoring, DEFAULT_ROLLING_WINDOW};
use loadcast::features::UnresolvedYearPolicy;
use loadcast::io::{read_actuals_csv, read_actuals_file, DEFAULT_VALUE_COLUMN};
use loadcast::models::{Forecaster, LinearModel, ModelArtifact};
use loadcast::ForecastError;
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Coefficients for a model with a weekly shape and a holiday dip.
fn synthetic_model(config: &ForecasterConfig) -> LinearModel {
    let mut coefficients = vec![0.0; config.feature_width()];
    coefficients[0] = -4_000.0; // holiday
    coefficients[1] = 0.25; // trend
    coefficients[2] = 1_500.0; // sin_7_1
    coefficients[3] = -800.0; // cos_7_1
    LinearModel::new(coefficients, 30_000.0).with_feature_names(config.feature_names())
}

fn write_artifact(dir: &TempDir, artifact: &ModelArtifact) -> PathBuf {
    let path = dir.path().join("linear_regression.json");
    std::fs::write(&path, artifact.to_json().unwrap()).unwrap();
    path
}

#[test]
fn load_and_predict_with_default_config() {
    let dir = TempDir::new().unwrap();
    let config = ForecasterConfig::default();
    let path = write_artifact(&dir, &ModelArtifact::new(synthetic_model(&config)));

    let mut forecaster = Forecaster::load(&path).unwrap();
    assert_eq!(forecaster.config(), &config);
    assert_eq!(forecaster.train_end_date(), date(2020, 12, 31));

    let forecast = forecaster.predict(date(2022, 1, 1), date(2022, 6, 1)).unwrap();
    assert_eq!(forecast.len(), 152);
    assert!(forecast.is_contiguous());
    assert!(forecast.values().iter().all(|v| v.is_finite()));

    // Holidays sit below the neighbouring weekly pattern by the holiday coefficient.
    let features = forecaster.features(date(2022, 4, 18), date(2022, 4, 18)).unwrap();
    assert_eq!(features.column("holiday").unwrap(), vec![1.0]);
}

#[test]
fn predictions_repeat_weekly_up_to_trend() {
    let dir = TempDir::new().unwrap();
    let config = ForecasterConfig::default();
    let path = write_artifact(&dir, &ModelArtifact::new(synthetic_model(&config)));
    let mut forecaster = Forecaster::load(&path).unwrap();

    // Two ordinary Tuesdays one week apart: only the trend differs.
    let a = forecaster.predict(date(2022, 3, 8), date(2022, 3, 8)).unwrap();
    let b = forecaster.predict(date(2022, 3, 15), date(2022, 3, 15)).unwrap();
    assert_relative_eq!(b.values()[0] - a.values()[0], 7.0 * 0.25, epsilon = 1e-6);
}

#[test]
fn embedded_config_is_used_on_load() {
    let dir = TempDir::new().unwrap();
    let config = ForecasterConfig::new()
        .with_harmonics(2, 3)
        .with_unresolved_year_policy(UnresolvedYearPolicy::Fail);
    let artifact = ModelArtifact::new(synthetic_model(&config)).with_config(config);
    let path = write_artifact(&dir, &artifact);

    let forecaster = Forecaster::load(&path).unwrap();
    assert_eq!(forecaster.config(), &config);
    assert_eq!(forecaster.model().num_features(), 12);
}

#[test]
fn load_with_conflicting_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = ForecasterConfig::new().with_harmonics(2, 3);
    let artifact = ModelArtifact::new(synthetic_model(&config)).with_config(config);
    let path = write_artifact(&dir, &artifact);

    let other = config.with_train_end_date(date(2021, 12, 31));
    let result = Forecaster::load_with_config(&path, other);
    assert!(matches!(result, Err(ForecastError::ModelLoad { .. })));

    assert!(Forecaster::load_with_config(&path, config).is_ok());
}

#[test]
fn missing_artifact_is_a_load_error() {
    let dir = TempDir::new().unwrap();
    let result = Forecaster::load(dir.path().join("nope.json"));
    match result {
        Err(ForecastError::ModelLoad { path, .. }) => assert!(path.ends_with("nope.json")),
        other => panic!("expected ModelLoad, got {:?}", other),
    }
}

#[test]
fn narrow_artifact_is_a_load_error() {
    let dir = TempDir::new().unwrap();
    let artifact = ModelArtifact::new(LinearModel::new(vec![1.0; 51], 0.0));
    let path = write_artifact(&dir, &artifact);
    assert!(matches!(
        Forecaster::load(&path),
        Err(ForecastError::ModelLoad { .. })
    ));
}

#[test]
fn garbage_artifact_is_a_load_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("linear_regression.json");
    std::fs::write(&path, "not json at all").unwrap();
    assert!(matches!(
        Forecaster::load(&path),
        Err(ForecastError::ModelLoad { .. })
    ));
}

#[test]
fn monitor_uploaded_csv_against_forecast() {
    let config = ForecasterConfig::default();
    let mut forecaster = Forecaster::from_model(synthetic_model(&config), config).unwrap();
    let forecast = forecaster.predict(date(2022, 1, 1), date(2022, 1, 10)).unwrap();

    // Hourly actuals from Jan 8 to Jan 14, each day summing to 110% of the forecast
    // where the forecast exists.
    let mut csv = String::from("Time,Load\n");
    for day in date(2022, 1, 8).iter_days().take(7) {
        let daily = forecast.get(day).unwrap_or(30_000.0) * 1.1;
        for hour in 0..24 {
            csv.push_str(&format!("{} {:02}:00:00,{}\n", day, hour, daily / 24.0));
        }
    }
    let actuals = read_actuals_csv(csv.as_bytes(), DEFAULT_VALUE_COLUMN).unwrap();
    assert_eq!(actuals.len(), 7);

    let result = forecaster.monitor(&actuals, DEFAULT_ROLLING_WINDOW).unwrap();
    let report = match result {
        Monitoring::Report(report) => report,
        Monitoring::NoOverlap => panic!("expected overlap"),
    };

    assert_eq!(
        report.window,
        DateRange::new(date(2022, 1, 8), date(2022, 1, 10)).unwrap()
    );
    assert_eq!(report.aligned.len(), 3);
    assert_relative_eq!(report.mape, 0.1, epsilon = 1e-9);
    assert_eq!(report.rolling_mape.len(), 1);
    assert_eq!(report.rolling_mape[0].0, date(2022, 1, 10));
    assert_relative_eq!(report.rolling_mape[0].1, 0.1, epsilon = 1e-9);
}

#[test]
fn monitor_without_overlap_signals_explicitly() {
    let config = ForecasterConfig::default();
    let mut forecaster = Forecaster::from_model(synthetic_model(&config), config).unwrap();
    forecaster.predict(date(2022, 1, 1), date(2022, 1, 5)).unwrap();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("actuals.csv");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "Time,Load").unwrap();
    writeln!(file, "2022-02-01,100.0").unwrap();
    writeln!(file, "2022-02-02,100.0").unwrap();
    drop(file);

    let actuals = read_actuals_file(&path, "Load").unwrap();
    let result = forecaster.monitor(&actuals, DEFAULT_ROLLING_WINDOW).unwrap();
    assert_eq!(result, Monitoring::NoOverlap);
}

#[test]
fn unresolved_holiday_year_follows_policy() {
    let lenient = ForecasterConfig::new().with_origin(date(1900, 1, 1));
    let mut forecaster = Forecaster::from_model(synthetic_model(&lenient), lenient).unwrap();
    let forecast = forecaster.predict(date(1900, 12, 24), date(1900, 12, 26)).unwrap();
    assert_eq!(forecast.len(), 3);

    let strict = lenient.with_unresolved_year_policy(UnresolvedYearPolicy::Fail);
    let mut forecaster = Forecaster::from_model(synthetic_model(&strict), strict).unwrap();
    assert_eq!(
        forecaster.predict(date(1900, 12, 24), date(1900, 12, 26)),
        Err(ForecastError::UnresolvedHolidayYear(1900))
    );
}
