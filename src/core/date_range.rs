//! Inclusive calendar-day ranges and their intersection.

use crate::error::{ForecastError, Result};
use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

/// An inclusive range of calendar days with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Create a range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(ForecastError::InvalidRange {
                from: start,
                to: end,
            });
        }
        Ok(Self { start, end })
    }

    /// A range covering exactly one day.
    pub fn single(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Number of days in the range, both ends included.
    pub fn num_days(&self) -> usize {
        ((self.end - self.start).num_days() + 1) as usize
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Iterate the days of the range in ascending order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        self.start.iter_days().take(self.num_days())
    }

    /// Intersection of two ranges.
    ///
    /// Returns `None` when the ranges share no day. Ranges touching on a
    /// single day overlap on that day.
    pub fn overlap(&self, other: &DateRange) -> Option<DateRange> {
        let latest_start = self.start.max(other.start);
        let earliest_end = self.end.min(other.end);
        (latest_start <= earliest_end).then_some(DateRange {
            start: latest_start,
            end: earliest_end,
        })
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

/// Intersect two `(start, end)` pairs.
///
/// Either pair with `start > end` is rejected with [`ForecastError::InvalidRange`];
/// disjoint pairs yield `Ok(None)`.
pub fn time_window_overlap(
    first: (NaiveDate, NaiveDate),
    second: (NaiveDate, NaiveDate),
) -> Result<Option<DateRange>> {
    let first = DateRange::new(first.0, first.1)?;
    let second = DateRange::new(second.0, second.1)?;
    Ok(first.overlap(&second))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn range_rejects_start_after_end() {
        let result = DateRange::new(date(2022, 2, 1), date(2022, 1, 1));
        assert!(matches!(result, Err(ForecastError::InvalidRange { .. })));
    }

    #[test]
    fn range_counts_days_inclusively() {
        let range = DateRange::new(date(2022, 1, 1), date(2022, 1, 3)).unwrap();
        assert_eq!(range.num_days(), 3);
        let days: Vec<_> = range.days().collect();
        assert_eq!(days, vec![date(2022, 1, 1), date(2022, 1, 2), date(2022, 1, 3)]);

        assert_eq!(DateRange::single(date(2024, 2, 29)).num_days(), 1);
    }

    #[test]
    fn range_days_cross_leap_day() {
        let range = DateRange::new(date(2024, 2, 28), date(2024, 3, 1)).unwrap();
        assert_eq!(range.num_days(), 3);
        assert!(range.contains(date(2024, 2, 29)));
        assert!(!range.contains(date(2024, 3, 2)));
    }

    #[test]
    fn overlap_of_partially_intersecting_ranges() {
        let result = time_window_overlap(
            (date(2022, 1, 1), date(2022, 6, 1)),
            (date(2022, 3, 1), date(2022, 12, 31)),
        )
        .unwrap();
        assert_eq!(
            result,
            Some(DateRange::new(date(2022, 3, 1), date(2022, 6, 1)).unwrap())
        );
    }

    #[test]
    fn overlap_of_disjoint_ranges_is_none() {
        let result = time_window_overlap(
            (date(2022, 1, 1), date(2022, 1, 5)),
            (date(2022, 2, 1), date(2022, 2, 5)),
        )
        .unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn overlap_of_identical_single_days() {
        let day = (date(2022, 1, 1), date(2022, 1, 1));
        let result = time_window_overlap(day, day).unwrap();
        assert_eq!(result, Some(DateRange::single(date(2022, 1, 1))));
    }

    #[test]
    fn overlap_of_touching_ranges_is_one_day() {
        let a = DateRange::new(date(2022, 1, 1), date(2022, 1, 10)).unwrap();
        let b = DateRange::new(date(2022, 1, 10), date(2022, 1, 20)).unwrap();
        let window = a.overlap(&b).unwrap();
        assert_eq!(window.num_days(), 1);
        assert_eq!(window.start(), date(2022, 1, 10));
    }

    #[test]
    fn overlap_with_adjacent_ranges_is_none() {
        let a = DateRange::new(date(2022, 1, 1), date(2022, 1, 9)).unwrap();
        let b = DateRange::new(date(2022, 1, 10), date(2022, 1, 20)).unwrap();
        assert!(a.overlap(&b).is_none());
    }

    #[test]
    fn overlap_rejects_malformed_input() {
        let result = time_window_overlap(
            (date(2022, 3, 1), date(2022, 1, 1)),
            (date(2022, 1, 1), date(2022, 12, 31)),
        );
        assert!(matches!(result, Err(ForecastError::InvalidRange { .. })));
    }

    #[test]
    fn display_uses_inclusive_notation() {
        let range = DateRange::new(date(2022, 1, 1), date(2022, 1, 3)).unwrap();
        assert_eq!(range.to_string(), "2022-01-01..=2022-01-03");
    }
}
