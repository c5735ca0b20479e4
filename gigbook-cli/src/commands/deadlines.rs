use anyhow::Result;
use chrono::NaiveDate;
use gigbook_core::calendar::due_within;
use gigbook_core::event::{Event, Scheduled};
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(events: &[Event], today: NaiveDate, days: u32) -> Result<()> {
    let due = due_within(events, today, days);

    println!(
        "{}",
        format!("Due in the next {days} days ({})", due.len()).bold()
    );

    if due.is_empty() {
        println!("  {}", "Nothing due".dimmed());
        return Ok(());
    }

    for event in due {
        let Some(date) = event.date() else { continue };
        let left = (date - today).num_days();
        let left = match left {
            0 => "today".red().to_string(),
            1 => "1 day".yellow().to_string(),
            n => format!("{n} days"),
        };
        println!("  {:<8} {}", left, event.render());
    }

    Ok(())
}
