//! Month grid layout.

use chrono::NaiveDate;

use crate::calendar::MonthRef;
use crate::date_range::DateRange;

/// One day slot in a month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// False for the leading/trailing days borrowed from neighbouring months.
    pub in_reference_month: bool,
}

/// Lay out `reference` as complete Sunday-to-Saturday weeks.
///
/// The grid starts on the Sunday at or before the 1st and ends on the
/// Saturday at or after the last day, so its length is always 28, 35 or 42.
pub fn build_month_grid(reference: MonthRef) -> Vec<CalendarCell> {
    let span = DateRange::new(
        DateRange::week_of(reference.first_day()).from,
        DateRange::week_of(reference.last_day()).to,
    );

    span.days()
        .map(|date| CalendarCell {
            date,
            in_reference_month: reference.contains(date),
        })
        .collect()
}

/// Split a grid (or anything laid out per grid cell) into rows of seven.
pub fn weeks<T>(cells: &[T]) -> impl Iterator<Item = &[T]> {
    cells.chunks(7)
}
