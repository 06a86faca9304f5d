//! Public-holiday indicator features.
//!
//! Holidays come from a [`HolidayCalendar`], which resolves the full set of
//! holidays for a given year. [`ItalianCalendar`] is the built-in calendar
//! the load model was trained with.

use crate::error::{ForecastError, Result};
use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Source of public holidays, resolved one year at a time.
pub trait HolidayCalendar {
    /// Short identifier of the calendar (e.g. a country code).
    fn name(&self) -> &str;

    /// All holidays of `year`, or `None` when the calendar has no data for it.
    fn holidays(&self, year: i32) -> Option<Vec<NaiveDate>>;
}

/// Behaviour for years the calendar cannot resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnresolvedYearPolicy {
    /// Every day of the year is treated as a working day. A warning is logged.
    #[default]
    NotHoliday,
    /// Fail with [`ForecastError::UnresolvedHolidayYear`].
    Fail,
}

/// Italian national public holidays.
///
/// Fixed-date feasts plus Easter Sunday and Easter Monday. Liberation Day
/// applies from 1946, Republic Day from 1948 and St Francis of Assisi from
/// 2026. Years before 1946 are not resolved.
#[derive(Debug, Clone, Copy, Default)]
pub struct ItalianCalendar;

impl ItalianCalendar {
    pub const FIRST_YEAR: i32 = 1946;
    pub const LAST_YEAR: i32 = 9999;

    pub fn new() -> Self {
        Self
    }
}

impl HolidayCalendar for ItalianCalendar {
    fn name(&self) -> &str {
        "IT"
    }

    fn holidays(&self, year: i32) -> Option<Vec<NaiveDate>> {
        if !(Self::FIRST_YEAR..=Self::LAST_YEAR).contains(&year) {
            return None;
        }

        let mut fixed: Vec<(u32, u32)> = vec![
            (1, 1),   // Capodanno
            (1, 6),   // Epifania
            (4, 25),  // Liberazione
            (5, 1),   // Festa dei Lavoratori
            (8, 15),  // Ferragosto
            (11, 1),  // Ognissanti
            (12, 8),  // Immacolata
            (12, 25), // Natale
            (12, 26), // Santo Stefano
        ];
        if year >= 1948 {
            fixed.push((6, 2));
        }
        if year >= 2026 {
            fixed.push((10, 4));
        }

        let mut days: Vec<NaiveDate> = fixed
            .into_iter()
            .filter_map(|(m, d)| NaiveDate::from_ymd_opt(year, m, d))
            .collect();

        let easter = easter_sunday(year)?;
        days.push(easter);
        days.push(easter + Duration::days(1));
        days.sort();
        Some(days)
    }
}

/// Easter Sunday in the Gregorian calendar (anonymous Gregorian computus).
///
/// Returns `None` for years before the Gregorian reform.
pub fn easter_sunday(year: i32) -> Option<NaiveDate> {
    if year < 1583 {
        return None;
    }
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = (h + l - 7 * m + 114) % 31 + 1;
    NaiveDate::from_ymd_opt(year, month as u32, day as u32)
}

/// Holiday indicator (`1.0` / `0.0`) for each date, in input order.
///
/// Each distinct year is resolved once per call.
pub fn holiday_features(
    dates: &[NaiveDate],
    calendar: &dyn HolidayCalendar,
    policy: UnresolvedYearPolicy,
) -> Result<Vec<f64>> {
    let mut years: HashMap<i32, HashSet<NaiveDate>> = HashMap::new();
    let mut features = Vec::with_capacity(dates.len());

    for date in dates {
        let year = date.year();
        if !years.contains_key(&year) {
            let resolved = match calendar.holidays(year) {
                Some(days) => days.into_iter().collect(),
                None => match policy {
                    UnresolvedYearPolicy::Fail => {
                        return Err(ForecastError::UnresolvedHolidayYear(year))
                    }
                    UnresolvedYearPolicy::NotHoliday => {
                        warn!(
                            calendar = calendar.name(),
                            year,
                            "holiday calendar cannot resolve year, treating it as holiday-free"
                        );
                        HashSet::new()
                    }
                },
            };
            years.insert(year, resolved);
        }

        let is_holiday = years.get(&year).is_some_and(|set| set.contains(date));
        features.push(if is_holiday { 1.0 } else { 0.0 });
    }

    Ok(features)
}
