//! Schedule overlap detection.

use chrono::{Duration, NaiveDateTime};

use crate::event::Scheduled;

/// `[start, start + duration)` for an event with both a date and a time.
fn slot<E: Scheduled>(event: &E) -> Option<(NaiveDateTime, NaiveDateTime)> {
    let start = event.date()?.and_time(event.time()?);
    let end = start.checked_add_signed(Duration::minutes(i64::from(event.duration_minutes())))?;
    Some((start, end))
}

/// Existing events whose time slot overlaps `candidate`'s.
///
/// Slots overlap when each starts before the other ends. Events without a
/// parsable date or time-of-day never conflict, and neither does a
/// candidate lacking one.
pub fn find_conflicts<'a, C, E>(candidate: &C, existing: &'a [E]) -> Vec<&'a E>
where
    C: Scheduled,
    E: Scheduled,
{
    let Some((start, end)) = slot(candidate) else {
        return Vec::new();
    };

    existing
        .iter()
        .filter(|event| {
            slot(*event).is_some_and(|(other_start, other_end)| start < other_end && end > other_start)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    struct Slot {
        name: &'static str,
        date: Option<NaiveDate>,
        time: Option<NaiveTime>,
        minutes: u32,
    }

    impl Scheduled for Slot {
        fn date(&self) -> Option<NaiveDate> {
            self.date
        }

        fn time(&self) -> Option<NaiveTime> {
            self.time
        }

        fn duration_minutes(&self) -> u32 {
            self.minutes
        }
    }

    fn at(name: &'static str, day: u32, hour: u32, minute: u32, minutes: u32) -> Slot {
        Slot {
            name,
            date: NaiveDate::from_ymd_opt(2024, 2, day),
            time: NaiveTime::from_hms_opt(hour, minute, 0),
            minutes,
        }
    }

    fn names(found: &[&Slot]) -> Vec<&'static str> {
        found.iter().map(|s| s.name).collect()
    }

    #[test]
    fn test_overlapping_slots_conflict() {
        let existing = vec![
            at("kickoff", 15, 10, 0, 60),
            at("lunch", 15, 12, 0, 60),
            at("other-day", 16, 10, 30, 60),
        ];
        let candidate = at("new", 15, 10, 30, 30);
        assert_eq!(names(&find_conflicts(&candidate, &existing)), vec!["kickoff"]);
    }

    #[test]
    fn test_back_to_back_slots_do_not_conflict() {
        let existing = vec![at("kickoff", 15, 10, 0, 60)];
        let candidate = at("next", 15, 11, 0, 30);
        assert!(find_conflicts(&candidate, &existing).is_empty());
    }

    #[test]
    fn test_zero_length_inside_slot_conflicts() {
        let existing = vec![at("review", 25, 11, 0, 120)];
        let candidate = at("deadline", 25, 12, 0, 0);
        assert_eq!(names(&find_conflicts(&candidate, &existing)), vec!["review"]);
    }

    #[test]
    fn test_untimed_events_never_conflict() {
        let mut untimed = at("all-day", 15, 0, 0, 0);
        untimed.time = None;
        let existing = vec![untimed, at("kickoff", 15, 10, 0, 60)];

        let candidate = at("new", 15, 10, 15, 15);
        assert_eq!(names(&find_conflicts(&candidate, &existing)), vec!["kickoff"]);

        let mut undated = at("new", 15, 10, 15, 15);
        undated.date = None;
        assert!(find_conflicts(&undated, &existing).is_empty());
    }

    #[test]
    fn test_slot_crossing_midnight() {
        let existing = vec![at("early", 16, 0, 15, 30)];
        let candidate = at("late", 15, 23, 30, 60);
        assert_eq!(names(&find_conflicts(&candidate, &existing)), vec!["early"]);
    }
}
