//! Inclusive date ranges for windowing events.

use chrono::NaiveDate;

use crate::dates::{add_days, week_end, week_start};

/// Inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRange {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        DateRange { from, to }
    }

    /// The Sunday-to-Saturday calendar week containing `date`.
    pub fn week_of(date: NaiveDate) -> Self {
        DateRange {
            from: week_start(date),
            to: week_end(date),
        }
    }

    /// `[start, start + days]`, both ends included.
    pub fn days_from(start: NaiveDate, days: u64) -> Self {
        DateRange {
            from: start,
            to: add_days(start, days),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.from && date <= self.to
    }

    /// Every date in the range, in chronological order. Empty when `from > to`.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        let to = self.to;
        self.from.iter_days().take_while(move |d| *d <= to)
    }

    pub fn len(&self) -> usize {
        if self.from > self.to {
            return 0;
        }
        // Both ends are valid dates, so the span fits comfortably in usize.
        (self.to - self.from).num_days() as usize + 1
    }

    pub fn is_empty(&self) -> bool {
        self.from > self.to
    }
}
