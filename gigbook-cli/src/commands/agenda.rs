use anyhow::Result;
use chrono::NaiveDate;
use gigbook_core::calendar::partition;
use gigbook_core::event::Event;
use owo_colors::OwoColorize;

use crate::render::{Render, date_label};

pub fn run(events: &[Event], today: NaiveDate, upcoming_limit: usize) -> Result<()> {
    let windows = partition(events, today, upcoming_limit);

    print_section("Today", &windows.today, today, false);
    println!();
    print_section("This week", &windows.this_week, today, true);
    println!();
    print_section("Upcoming", &windows.upcoming, today, true);

    Ok(())
}

fn print_section(title: &str, events: &[&Event], today: NaiveDate, with_dates: bool) {
    println!("{} {}", title.bold(), format!("({})", events.len()).dimmed());

    if events.is_empty() {
        println!("  {}", "Nothing scheduled".dimmed());
        return;
    }

    for event in events {
        if with_dates {
            let label = gigbook_core::dates::parse_date(&event.date)
                .map(|date| date_label(date, today))
                .unwrap_or_else(|_| event.date.clone());
            println!("  {:<10} {}", label, event.render());
        } else {
            println!("  {}", event.render());
        }
    }
}
