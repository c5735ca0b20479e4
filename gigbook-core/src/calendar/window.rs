//! Today / this week / upcoming buckets for the calendar sidebar.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::date_range::DateRange;
use crate::event::Scheduled;

/// Cap on the upcoming bucket used by the calendar page.
pub const DEFAULT_UPCOMING_LIMIT: usize = 10;

/// Events split into the three sidebar windows.
///
/// The buckets overlap: today's events appear in all three.
#[derive(Debug, Clone)]
pub struct TimeWindows<'a, E> {
    /// Dated exactly `today`.
    pub today: Vec<&'a E>,
    /// Inside the Sunday-to-Saturday week containing `today`.
    pub this_week: Vec<&'a E>,
    /// Dated on or after `today`, ascending, at most `upcoming_limit` long.
    pub upcoming: Vec<&'a E>,
}

impl<E> TimeWindows<'_, E> {
    pub fn is_empty(&self) -> bool {
        self.today.is_empty() && self.this_week.is_empty() && self.upcoming.is_empty()
    }
}

/// Partition `events` around `today`.
///
/// `today` and `this_week` keep input order. `upcoming` is stable-sorted by
/// date, so same-day events keep their relative order. Events without a
/// parsable date are excluded from every bucket.
pub fn partition<E: Scheduled>(
    events: &[E],
    today: NaiveDate,
    upcoming_limit: usize,
) -> TimeWindows<'_, E> {
    let week = DateRange::week_of(today);

    let mut windows = TimeWindows {
        today: Vec::new(),
        this_week: Vec::new(),
        upcoming: Vec::new(),
    };
    let mut upcoming: Vec<(NaiveDate, &E)> = Vec::new();
    let mut undated = 0usize;

    for event in events {
        let Some(date) = event.date() else {
            undated += 1;
            continue;
        };

        if date == today {
            windows.today.push(event);
        }
        if week.contains(date) {
            windows.this_week.push(event);
        }
        if date >= today {
            upcoming.push((date, event));
        }
    }

    // sort_by_key is stable
    upcoming.sort_by_key(|(date, _)| *date);
    windows.upcoming = upcoming
        .into_iter()
        .take(upcoming_limit)
        .map(|(_, event)| event)
        .collect();

    if undated > 0 {
        warn!(
            target: "gigbook::calendar",
            undated,
            "Excluded events with unparsable dates"
        );
    }

    debug!(
        target: "gigbook::calendar",
        %today,
        total = events.len(),
        today_count = windows.today.len(),
        week_count = windows.this_week.len(),
        upcoming_count = windows.upcoming.len(),
        "Partitioned events"
    );

    windows
}

/// Events dated within `[today, today + days]`, ascending by date.
pub fn due_within<E: Scheduled>(events: &[E], today: NaiveDate, days: u32) -> Vec<&E> {
    let range = DateRange::days_from(today, u64::from(days));

    let mut due: Vec<(NaiveDate, &E)> = events
        .iter()
        .filter_map(|event| event.date().map(|date| (date, event)))
        .filter(|(date, _)| range.contains(*date))
        .collect();

    due.sort_by_key(|(date, _)| *date);
    due.into_iter().map(|(_, event)| event).collect()
}
