use anyhow::Result;
use chrono::NaiveDate;
use gigbook_core::calendar::{MonthRef, build_month_grid, decorate};
use gigbook_core::event::Event;
use owo_colors::OwoColorize;

use crate::render::{Render, render_month};

pub fn run(events: &[Event], month: MonthRef, today: NaiveDate) -> Result<()> {
    let grid = build_month_grid(month);
    let days = decorate(&grid, events, today);

    println!("{}", render_month(month, &days));

    let busy: Vec<_> = days
        .iter()
        .filter(|day| day.cell.in_reference_month && day.has_events())
        .collect();

    if busy.is_empty() {
        println!();
        println!("{}", format!("No events in {month}").dimmed());
        return Ok(());
    }

    for day in busy {
        println!();
        println!("{}", day.cell.date.format("%a %b %-d").bold());
        for event in &day.events {
            println!("  {}", event.render());
        }
    }

    Ok(())
}
