use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use gigbook_core::calendar::find_conflicts;
use gigbook_core::event::{Event, Scheduled};
use owo_colors::OwoColorize;

use crate::render::Render;

/// A slot being considered for a new event.
#[derive(Debug, Clone, Copy)]
pub struct Proposed {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub duration: u32,
}

impl Scheduled for Proposed {
    fn date(&self) -> Option<NaiveDate> {
        Some(self.date)
    }

    fn time(&self) -> Option<NaiveTime> {
        Some(self.time)
    }

    fn duration_minutes(&self) -> u32 {
        self.duration
    }
}

pub fn run(events: &[Event], proposed: Proposed) -> Result<()> {
    let conflicts = find_conflicts(&proposed, events);

    let slot = format!(
        "{} {} ({} min)",
        proposed.date,
        proposed.time.format("%H:%M"),
        proposed.duration
    );

    if conflicts.is_empty() {
        println!("{} {}", "No conflicts for".green(), slot);
        return Ok(());
    }

    println!(
        "{} {}",
        format!("{} conflict(s) for", conflicts.len()).red().bold(),
        slot
    );
    for event in conflicts {
        println!("  {} {}", event.date.dimmed(), event.render());
    }

    Ok(())
}
