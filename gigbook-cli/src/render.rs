//! Colored terminal rendering for gigbook types.

use chrono::NaiveDate;
use gigbook_core::calendar::{DayView, MonthRef, weeks};
use gigbook_core::entity::{Client, Document, Invoice, Payment, Project};
use gigbook_core::event::{Event, EventKind, Priority};
use owo_colors::OwoColorize;

use crate::summary::format_money;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

fn render_priority(priority: &str) -> String {
    match priority.to_lowercase().as_str() {
        "high" => priority.red().to_string(),
        "medium" => priority.yellow().to_string(),
        _ => priority.dimmed().to_string(),
    }
}

impl Render for Client {
    fn render(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.name.bold(),
            format!("<{}>", self.email).dimmed(),
            self.location,
            format!("[{}]", self.status).cyan(),
            render_priority(&self.priority),
        )
    }
}

impl Render for Project {
    fn render(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.name.bold(),
            format!("({})", self.client).dimmed(),
            format!("[{}]", self.status).cyan(),
            format!("{:>3}%", self.progress),
            render_priority(&self.priority),
        )
    }
}

impl Render for Document {
    fn render(&self) -> String {
        format!(
            "{} {} {} {}",
            self.name.bold(),
            format!("({})", self.kind).dimmed(),
            format!("[{}]", self.status).cyan(),
            format!("{} pages", self.pages).dimmed(),
        )
    }
}

impl Render for Payment {
    fn render(&self) -> String {
        let amount = format_money(self.amount);
        let amount = if self.kind == "expense" {
            format!("-{amount}").red().to_string()
        } else {
            format!("+{amount}").green().to_string()
        };

        format!(
            "{} {} {} {} {}",
            self.date.dimmed(),
            amount,
            self.description.bold(),
            format!("[{}]", self.status).cyan(),
            self.reference.dimmed(),
        )
    }
}

impl Render for Invoice {
    fn render(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.number.bold(),
            self.client,
            format_money(self.amount),
            format!("[{}]", self.status).cyan(),
            format!("due {}", self.due_date).dimmed(),
        )
    }
}

impl Render for EventKind {
    fn render(&self) -> String {
        let label = self.label();
        match self {
            EventKind::Deadline | EventKind::Payment => label.red().to_string(),
            EventKind::Milestone | EventKind::Contract => label.magenta().to_string(),
            EventKind::Meeting | EventKind::Call | EventKind::Video => label.blue().to_string(),
            EventKind::Review | EventKind::Presentation => label.green().to_string(),
        }
    }
}

impl Render for Event {
    fn render(&self) -> String {
        let time = self.time.as_deref().unwrap_or("all-day");
        let marker = match self.priority {
            Priority::High => "!".red().to_string(),
            Priority::Medium | Priority::Low => " ".to_string(),
        };

        format!(
            "{}{:>7} {} {} {}",
            marker,
            time,
            self.title,
            self.kind.render(),
            format!("[{}]", self.client).dimmed(),
        )
    }
}

/// "Today", "Tomorrow" or e.g. "Thu Feb 15".
pub fn date_label(date: NaiveDate, today: NaiveDate) -> String {
    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

/// A month grid, one row per week, with `*` on days that have events.
pub fn render_month(month: MonthRef, days: &[DayView<'_, Event>]) -> String {
    let mut lines = vec![
        format!("{:^28}", month.to_string()).bold().to_string(),
        " Su  Mo  Tu  We  Th  Fr  Sa".dimmed().to_string(),
    ];

    for week in weeks(days) {
        let row: String = week.iter().map(render_day).collect();
        lines.push(row);
    }

    lines.join("\n")
}

fn render_day(day: &DayView<'_, Event>) -> String {
    let number = format!("{:>3}", day.cell.date.format("%-d"));
    let marker = if day.has_events() { "*" } else { " " };

    if !day.cell.in_reference_month {
        format!("{number}{marker}").dimmed().to_string()
    } else if day.is_today {
        format!("{}{}", number.reversed(), marker.yellow())
    } else {
        format!("{}{}", number, marker.yellow())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_date_label() {
        let today = ymd(2024, 2, 15);
        assert_eq!(date_label(today, today), "Today");
        assert_eq!(date_label(ymd(2024, 2, 16), today), "Tomorrow");
        assert_eq!(date_label(ymd(2024, 2, 20), today), "Tue Feb 20");
        assert_eq!(date_label(ymd(2024, 2, 14), today), "Wed Feb 14");
    }

    #[test]
    fn test_month_has_a_row_per_week() {
        let month = MonthRef::new(2024, 3).unwrap();
        let grid = gigbook_core::calendar::build_month_grid(month);
        let events: Vec<Event> = vec![];
        let days = gigbook_core::calendar::decorate(&grid, &events, ymd(2024, 3, 15));
        let rendered = render_month(month, &days);
        // title + weekday header + six weeks
        assert_eq!(rendered.lines().count(), 8);
    }
}
