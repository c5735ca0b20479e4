//! Invariants of the query and calendar engines over generated inputs.

use chrono::{Days, NaiveDate};
use gigbook_core::calendar::{MonthRef, build_month_grid, partition};
use gigbook_core::entity::{Client, Listing};
use gigbook_core::query::FilterSpec;
use proptest::prelude::*;

const STATUSES: &[&str] = &["Active", "Inactive", "Pending"];
const PRIORITIES: &[&str] = &["High", "Medium", "Low"];

fn client_strategy() -> impl Strategy<Value = Client> {
    (
        "[a-zA-Z ]{0,12}",
        "[a-z@.]{0,10}",
        prop::sample::select(STATUSES),
        prop::sample::select(PRIORITIES),
    )
        .prop_map(|(name, email, status, priority)| Client {
            id: String::new(),
            name,
            email,
            company: String::new(),
            location: String::new(),
            status: status.to_string(),
            priority: priority.to_string(),
            total_revenue: 0.0,
            active_projects: 0,
            tags: vec![],
        })
}

fn facet_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["all", "active", "Inactive", "PENDING"])
}

fn spec_strategy() -> impl Strategy<Value = FilterSpec> {
    ("[a-zA-Z ]{0,3}", facet_strategy()).prop_map(|(query, status)| {
        FilterSpec::new().with_query(query).with_facet("status", status)
    })
}

proptest! {
    #[test]
    fn filter_is_idempotent(
        clients in prop::collection::vec(client_strategy(), 0..30),
        spec in spec_strategy(),
    ) {
        let engine = Client::query_engine();
        let once = engine.filter(&clients, &spec).unwrap();
        let twice = engine.filter(once.iter().copied(), &spec).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn filter_preserves_relative_order(
        clients in prop::collection::vec(client_strategy(), 0..30),
        spec in spec_strategy(),
    ) {
        let result = Client::query_engine().filter(&clients, &spec).unwrap();
        let positions: Vec<usize> = result
            .iter()
            .map(|r| clients.iter().position(|c| std::ptr::eq(c, *r)).unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn extra_facet_never_widens(
        clients in prop::collection::vec(client_strategy(), 0..30),
        spec in spec_strategy(),
        priority in prop::sample::select(PRIORITIES),
    ) {
        let engine = Client::query_engine();
        let base = engine.count(&clients, &spec).unwrap();
        let narrowed = engine
            .count(&clients, &spec.clone().with_facet("priority", priority))
            .unwrap();
        prop_assert!(narrowed <= base);
    }

    #[test]
    fn longer_query_never_widens(
        clients in prop::collection::vec(client_strategy(), 0..30),
        spec in spec_strategy(),
        suffix in "[a-zA-Z ]{1,2}",
    ) {
        let engine = Client::query_engine();
        let base = engine.count(&clients, &spec).unwrap();
        let longer = FilterSpec { query: format!("{}{}", spec.query, suffix), ..spec.clone() };
        prop_assert!(engine.count(&clients, &longer).unwrap() <= base);
    }

    #[test]
    fn grid_covers_whole_weeks_and_month(
        year in prop_oneof![1900i32..2200, -262143i32..=262142],
        month in 1u32..=12,
    ) {
        // The first and last representable months are refused.
        let Ok(reference) = MonthRef::new(year, month) else {
            return Ok(());
        };
        let cells = build_month_grid(reference);

        prop_assert!(!cells.is_empty());
        prop_assert_eq!(cells.len() % 7, 0);

        let in_month: Vec<NaiveDate> = cells
            .iter()
            .filter(|c| c.in_reference_month)
            .map(|c| c.date)
            .collect();
        let expected: Vec<NaiveDate> = reference
            .first_day()
            .iter_days()
            .take(reference.num_days() as usize)
            .collect();
        prop_assert_eq!(in_month, expected);
    }

    #[test]
    fn windows_nest(offsets in prop::collection::vec(-20i64..20, 0..40), today_offset in 0u64..365) {
        let today = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(today_offset))
            .unwrap();
        let events: Vec<NaiveDate> = offsets
            .iter()
            .map(|o| today + chrono::Duration::days(*o))
            .collect();

        let windows = partition(&events, today, usize::MAX);

        for event in &windows.today {
            prop_assert!(windows.this_week.iter().any(|e| std::ptr::eq(*e, *event)));
        }
        for event in windows.this_week.iter().filter(|e| ***e >= today) {
            prop_assert!(windows.upcoming.iter().any(|e| std::ptr::eq(*e, *event)));
        }
        prop_assert!(windows.upcoming.windows(2).all(|w| w[0] <= w[1]));
    }
}
