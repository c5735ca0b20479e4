//! Calendar views: month grids, per-day binding and time windows.
//!
//! Everything here is a pure function of its arguments. "Today" is always
//! passed in by the caller, never read from the clock.

pub mod binder;
pub mod conflict;
pub mod grid;
pub mod recurrence;
pub mod window;

pub use binder::{DayView, decorate, events_on, has_events_on};
pub use conflict::find_conflicts;
pub use grid::{CalendarCell, build_month_grid, weeks};
pub use recurrence::{Frequency, RecurrenceLimits, RecurrenceRule, expand};
pub use window::{DEFAULT_UPCOMING_LIMIT, TimeWindows, due_within, partition};

use std::fmt;

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{GigbookError, GigbookResult};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A (year, month) pair identifying which month to lay out.
///
/// Months are 1-based (`2` is February). Only months whose padded
/// Sunday-to-Saturday grid fits inside chrono's date range can be built,
/// which excludes the first and last representable months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "MonthParts", into = "MonthParts")]
pub struct MonthRef {
    first: NaiveDate,
}

#[derive(Serialize, Deserialize)]
struct MonthParts {
    year: i32,
    month: u32,
}

impl TryFrom<MonthParts> for MonthRef {
    type Error = GigbookError;

    fn try_from(parts: MonthParts) -> GigbookResult<Self> {
        MonthRef::new(parts.year, parts.month)
    }
}

impl From<MonthRef> for MonthParts {
    fn from(month: MonthRef) -> Self {
        MonthParts {
            year: month.year(),
            month: month.month(),
        }
    }
}

impl MonthRef {
    pub fn new(year: i32, month: u32) -> GigbookResult<Self> {
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(Self::from_first)
            .ok_or(GigbookError::InvalidMonth { year, month })
    }

    /// The month a date falls in.
    pub fn containing(date: NaiveDate) -> GigbookResult<Self> {
        date.with_day(1)
            .and_then(Self::from_first)
            .ok_or(GigbookError::InvalidMonth {
                year: date.year(),
                month: date.month(),
            })
    }

    /// `None` unless every cell of the month's grid, plus the day after
    /// the last one, is a valid date.
    fn from_first(first: NaiveDate) -> Option<Self> {
        let last = first.checked_add_months(Months::new(1))?.pred_opt()?;
        let leading = u64::from(first.weekday().num_days_from_sunday());
        let trailing = 6 - u64::from(last.weekday().num_days_from_sunday());

        first.checked_sub_days(Days::new(leading))?;
        last.checked_add_days(Days::new(trailing))?.succ_opt()?;

        Some(MonthRef { first })
    }

    /// Parse `YYYY-MM`.
    pub fn parse(s: &str) -> GigbookResult<Self> {
        let invalid = || GigbookError::InvalidDate(s.to_string());
        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        Self::new(year, month)
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn last_day(&self) -> NaiveDate {
        // Construction guarantees the following month exists.
        self.first
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(self.first)
    }

    pub fn num_days(&self) -> u32 {
        self.last_day().day()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Move by `months` (negative goes back).
    pub fn offset(&self, months: i32) -> GigbookResult<Self> {
        let shifted = if months >= 0 {
            self.first.checked_add_months(Months::new(months.unsigned_abs()))
        } else {
            self.first.checked_sub_months(Months::new(months.unsigned_abs()))
        };

        shifted
            .and_then(Self::from_first)
            .ok_or(GigbookError::InvalidMonth {
                year: self.year(),
                month: self.month(),
            })
    }

    pub fn next(&self) -> GigbookResult<Self> {
        self.offset(1)
    }

    pub fn prev(&self) -> GigbookResult<Self> {
        self.offset(-1)
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.first.month0() as usize]
    }
}

impl fmt::Display for MonthRef {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {}", self.name(), self.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_bounds() {
        let feb = MonthRef::new(2024, 2).unwrap();
        assert_eq!(feb.first_day(), ymd(2024, 2, 1));
        assert_eq!(feb.last_day(), ymd(2024, 2, 29));
        assert_eq!(feb.num_days(), 29);
        assert_eq!(MonthRef::new(2023, 2).unwrap().num_days(), 28);
        assert_eq!(MonthRef::new(2024, 12).unwrap().last_day(), ymd(2024, 12, 31));
    }

    #[test]
    fn test_invalid_month() {
        assert!(matches!(
            MonthRef::new(2024, 13),
            Err(GigbookError::InvalidMonth { year: 2024, month: 13 })
        ));
        assert!(MonthRef::new(2024, 0).is_err());
    }

    #[test]
    fn test_navigation_wraps_years() {
        let jan = MonthRef::new(2024, 1).unwrap();
        assert_eq!(jan.prev().unwrap(), MonthRef::new(2023, 12).unwrap());
        assert_eq!(jan.next().unwrap(), MonthRef::new(2024, 2).unwrap());
        assert_eq!(jan.offset(14).unwrap(), MonthRef::new(2025, 3).unwrap());
        assert_eq!(jan.offset(-13).unwrap(), MonthRef::new(2022, 12).unwrap());
    }

    #[test]
    fn test_containing_and_contains() {
        let month = MonthRef::containing(ymd(2024, 2, 15)).unwrap();
        assert_eq!(month, MonthRef::new(2024, 2).unwrap());
        assert!(month.contains(ymd(2024, 2, 29)));
        assert!(!month.contains(ymd(2024, 3, 1)));
    }

    #[test]
    fn test_months_at_the_edge_of_the_date_range_are_rejected() {
        assert!(matches!(
            MonthRef::containing(NaiveDate::MAX),
            Err(GigbookError::InvalidMonth { month: 12, .. })
        ));
        assert!(MonthRef::containing(NaiveDate::MIN).is_err());
        assert!(MonthRef::new(NaiveDate::MAX.year(), 12).is_err());
        assert!(MonthRef::new(NaiveDate::MIN.year(), 1).is_err());

        let second_to_last = MonthRef::new(NaiveDate::MAX.year(), 11).unwrap();
        assert!(second_to_last.next().is_err());
        assert_eq!(second_to_last.last_day(), ymd(NaiveDate::MAX.year(), 11, 30));
    }

    #[test]
    fn test_parse_and_display() {
        let month = MonthRef::parse("2024-02").unwrap();
        assert_eq!(month.to_string(), "February 2024");
        assert!(MonthRef::parse("2024/02").is_err());
        assert!(MonthRef::parse("2024-13").is_err());
    }

    #[test]
    fn test_serde_uses_year_and_month() {
        let month: MonthRef = serde_json::from_str(r#"{"year":2024,"month":2}"#).unwrap();
        assert_eq!(month, MonthRef::new(2024, 2).unwrap());
        assert!(serde_json::from_str::<MonthRef>(r#"{"year":2024,"month":0}"#).is_err());
    }
}
