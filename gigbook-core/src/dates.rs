//! Date normalization.
//!
//! Every comparison in the engines happens on `NaiveDate`, never on a
//! timestamp. Inputs arrive as strings from the host and are reduced to
//! their calendar date here.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{GigbookError, GigbookResult};

const DATE_FORMAT: &str = "%Y-%m-%d";

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const TIME_FORMATS: &[&str] = &["%H:%M", "%H:%M:%S"];

/// Parse a date-only value.
///
/// Accepts `YYYY-MM-DD`, local datetimes (`2024-02-15T10:00`) and RFC 3339
/// timestamps. Timestamps keep the calendar date as written in their own
/// offset, so `2024-02-15T23:30:00-08:00` is the 15th.
pub fn parse_date(s: &str) -> GigbookResult<NaiveDate> {
    let trimmed = s.trim();

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Ok(date);
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.naive_local().date());
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
        .map(|dt| dt.date())
        .ok_or_else(|| GigbookError::InvalidDate(s.to_string()))
}

/// Parse a time-of-day (`HH:MM` or `HH:MM:SS`).
pub fn parse_time(s: &str) -> GigbookResult<NaiveTime> {
    let trimmed = s.trim();
    TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(trimmed, fmt).ok())
        .ok_or_else(|| GigbookError::InvalidTime(s.to_string()))
}

/// Most recent Sunday at or before `date`.
///
/// Saturates at `NaiveDate::MIN` rather than overflowing.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let back = u64::from(date.weekday().num_days_from_sunday());
    date.checked_sub_days(Days::new(back)).unwrap_or(NaiveDate::MIN)
}

/// Nearest Saturday at or after `date`.
pub fn week_end(date: NaiveDate) -> NaiveDate {
    let forward = 6 - u64::from(date.weekday().num_days_from_sunday());
    date.checked_add_days(Days::new(forward)).unwrap_or(NaiveDate::MAX)
}

/// `date + days`, saturating at the end of the representable range.
pub fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

/// ISO `YYYY-MM-DD` rendering used for generated event dates.
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(parse_date("2024-02-15").unwrap(), ymd(2024, 2, 15));
        assert_eq!(parse_date("  2024-02-15 ").unwrap(), ymd(2024, 2, 15));
    }

    #[test]
    fn test_parse_datetime_drops_time_of_day() {
        assert_eq!(parse_date("2024-02-15T23:59").unwrap(), ymd(2024, 2, 15));
        assert_eq!(parse_date("2024-02-15T00:00:00.000").unwrap(), ymd(2024, 2, 15));
        assert_eq!(parse_date("2024-02-15 10:30").unwrap(), ymd(2024, 2, 15));
    }

    #[test]
    fn test_parse_rfc3339_keeps_written_date() {
        assert_eq!(parse_date("2024-02-15T23:30:00-08:00").unwrap(), ymd(2024, 2, 15));
        assert_eq!(parse_date("2024-02-16T00:30:00Z").unwrap(), ymd(2024, 2, 16));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse_date("not a date"), Err(GigbookError::InvalidDate(_))));
        assert!(parse_date("").is_err());
        assert!(parse_date("2024-02-30").is_err());
    }

    #[test]
    fn test_parse_time() {
        assert_eq!(parse_time("09:05").unwrap(), NaiveTime::from_hms_opt(9, 5, 0).unwrap());
        assert_eq!(parse_time("23:59:30").unwrap(), NaiveTime::from_hms_opt(23, 59, 30).unwrap());
        assert!(matches!(parse_time("25:00"), Err(GigbookError::InvalidTime(_))));
    }

    #[test]
    fn test_week_bounds() {
        // Thursday
        let thu = ymd(2024, 2, 15);
        assert_eq!(week_start(thu), ymd(2024, 2, 11));
        assert_eq!(week_end(thu), ymd(2024, 2, 17));
        assert_eq!(week_start(thu).weekday(), Weekday::Sun);
        assert_eq!(week_end(thu).weekday(), Weekday::Sat);
    }

    #[test]
    fn test_week_bounds_on_boundaries() {
        let sun = ymd(2024, 2, 11);
        let sat = ymd(2024, 2, 17);
        assert_eq!(week_start(sun), sun);
        assert_eq!(week_end(sat), sat);
    }

    #[test]
    fn test_week_bounds_saturate() {
        assert_eq!(week_start(NaiveDate::MIN), NaiveDate::MIN);
        assert_eq!(week_end(NaiveDate::MAX), NaiveDate::MAX);
        assert_eq!(add_days(NaiveDate::MAX, 3), NaiveDate::MAX);
    }
}
