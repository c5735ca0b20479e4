//! Binding events to calendar days.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::calendar::grid::CalendarCell;
use crate::event::Scheduled;

/// Events whose date-only value is `date`, in input order.
pub fn events_on<'a, E: Scheduled>(date: NaiveDate, events: &'a [E]) -> Vec<&'a E> {
    events.iter().filter(|e| e.date() == Some(date)).collect()
}

pub fn has_events_on<E: Scheduled>(date: NaiveDate, events: &[E]) -> bool {
    events.iter().any(|e| e.date() == Some(date))
}

/// A grid cell with the events that fall on it.
#[derive(Debug, Clone)]
pub struct DayView<'a, E> {
    pub cell: CalendarCell,
    pub is_today: bool,
    pub events: Vec<&'a E>,
}

impl<E> DayView<'_, E> {
    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}

/// Attach events to every cell of a grid.
///
/// Events are grouped by date in a single pass, so this stays linear in
/// `cells.len() + events.len()`. Undated events are dropped.
pub fn decorate<'a, E: Scheduled>(
    cells: &[CalendarCell],
    events: &'a [E],
    today: NaiveDate,
) -> Vec<DayView<'a, E>> {
    let mut by_date: BTreeMap<NaiveDate, Vec<&'a E>> = BTreeMap::new();
    for event in events {
        if let Some(date) = event.date() {
            by_date.entry(date).or_default().push(event);
        }
    }

    cells
        .iter()
        .map(|cell| DayView {
            cell: *cell,
            is_today: cell.date == today,
            events: by_date.remove(&cell.date).unwrap_or_default(),
        })
        .collect()
}
