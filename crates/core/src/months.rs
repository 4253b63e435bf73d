//! Calendar-month arithmetic for month-bucketed reports.

use std::fmt;

use chrono::{Datelike, Days, NaiveDate};

/// Number of months in a trailing report window.
pub const TRAILING_WINDOW_MONTHS: usize = 12;

/// A calendar month, rendered as `YYYY-MM` (the SQLite `strftime('%Y-%m')` form).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    pub year: i32,
    /// 1-based month.
    pub month: u32,
}

impl YearMonth {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// The month immediately before this one.
    pub fn pred(self) -> Self {
        if self.month == 1 {
            Self {
                year: self.year - 1,
                month: 12,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The `YYYY-MM` key used to match bucketed rows.
    pub fn key(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// The `len` calendar months ending with the month of `as_of`, oldest first.
pub fn trailing_months(as_of: NaiveDate, len: usize) -> Vec<YearMonth> {
    let mut months = Vec::with_capacity(len);
    let mut current = YearMonth::of(as_of);
    for _ in 0..len {
        months.push(current);
        current = current.pred();
    }
    months.reverse();
    months
}

/// `date` minus one calendar month, the way SQLite's `date(d, '-1 month')`
/// computes it: the day is kept and any overflow past the end of the
/// previous month rolls forward (2024-03-31 becomes 2024-03-02).
pub fn one_month_before(date: NaiveDate) -> NaiveDate {
    let prev = YearMonth::of(date).pred();
    NaiveDate::from_ymd_opt(prev.year, prev.month, 1)
        .and_then(|first| first.checked_add_days(Days::new(u64::from(date.day0()))))
        .unwrap_or(date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn window_ends_with_current_month() {
        let months = trailing_months(date(2024, 5, 17), TRAILING_WINDOW_MONTHS);
        assert_eq!(months.len(), 12);
        assert_eq!(months.last().unwrap().key(), "2024-05");
        assert_eq!(months.first().unwrap().key(), "2023-06");
    }

    #[test]
    fn window_is_strictly_increasing_across_year_boundary() {
        let months = trailing_months(date(2025, 1, 31), TRAILING_WINDOW_MONTHS);
        assert_eq!(months[10].key(), "2024-12");
        assert_eq!(months[11].key(), "2025-01");
        assert!(months.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn window_on_the_31st_has_no_duplicate_months() {
        let months = trailing_months(date(2024, 7, 31), TRAILING_WINDOW_MONTHS);
        let mut keys: Vec<_> = months.iter().map(|m| m.key()).collect();
        keys.dedup();
        assert_eq!(keys.len(), 12);
    }

    #[test]
    fn one_month_before_keeps_day_when_it_exists() {
        assert_eq!(one_month_before(date(2024, 1, 15)), date(2023, 12, 15));
        assert_eq!(one_month_before(date(2024, 3, 29)), date(2024, 2, 29));
        assert_eq!(one_month_before(date(2024, 5, 30)), date(2024, 4, 30));
    }

    #[test]
    fn one_month_before_rolls_overflow_forward() {
        // Leap year: February has 29 days.
        assert_eq!(one_month_before(date(2024, 3, 30)), date(2024, 3, 1));
        assert_eq!(one_month_before(date(2024, 3, 31)), date(2024, 3, 2));
        // Common year: February has 28 days.
        assert_eq!(one_month_before(date(2023, 3, 29)), date(2023, 3, 1));
        assert_eq!(one_month_before(date(2023, 3, 31)), date(2023, 3, 3));
        assert_eq!(one_month_before(date(2024, 5, 31)), date(2024, 5, 1));
    }
}
