//! Dated events for the calendar engines.
//!
//! The engines only need a date-only value (and, for conflict checks, a
//! time-of-day and duration) from each event. Anything implementing
//! [`Scheduled`] can be bucketed; [`Event`] is the dashboard's own record.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::dates::{parse_date, parse_time};

/// Access to the scheduling fields of an event.
pub trait Scheduled {
    /// Calendar date of the event, or `None` if it can't be determined.
    ///
    /// Events returning `None` are left out of every date-based bucket.
    fn date(&self) -> Option<NaiveDate>;

    fn time(&self) -> Option<NaiveTime> {
        None
    }

    /// Length in minutes.
    fn duration_minutes(&self) -> u32 {
        0
    }
}

/// A calendar event on the dashboard (meeting, deadline, payment due...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    #[serde(rename = "type", default)]
    pub kind: EventKind,
    #[serde(default)]
    pub client: String,
    /// As entered, usually `YYYY-MM-DD`. Kept raw so a malformed value
    /// degrades to "undated" instead of failing the whole load.
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    /// Minutes.
    #[serde(default)]
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    pub priority: Priority,
    /// Set on instances generated from a recurring event.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

impl Scheduled for Event {
    fn date(&self) -> Option<NaiveDate> {
        parse_date(&self.date).ok()
    }

    fn time(&self) -> Option<NaiveTime> {
        self.time.as_deref().and_then(|t| parse_time(t).ok())
    }

    fn duration_minutes(&self) -> u32 {
        self.duration
    }
}

impl<T: Scheduled + ?Sized> Scheduled for &T {
    fn date(&self) -> Option<NaiveDate> {
        (**self).date()
    }

    fn time(&self) -> Option<NaiveTime> {
        (**self).time()
    }

    fn duration_minutes(&self) -> u32 {
        (**self).duration_minutes()
    }
}

impl Scheduled for NaiveDate {
    fn date(&self) -> Option<NaiveDate> {
        Some(*self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    #[default]
    Meeting,
    Deadline,
    Milestone,
    Payment,
    Review,
    Presentation,
    Contract,
    Call,
    Video,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Meeting => "meeting",
            EventKind::Deadline => "deadline",
            EventKind::Milestone => "milestone",
            EventKind::Payment => "payment",
            EventKind::Review => "review",
            EventKind::Presentation => "presentation",
            EventKind::Contract => "contract",
            EventKind::Call => "call",
            EventKind::Video => "video",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EventKind::Meeting => "Meeting",
            EventKind::Deadline => "Deadline",
            EventKind::Milestone => "Milestone",
            EventKind::Payment => "Payment Due",
            EventKind::Review => "Review",
            EventKind::Presentation => "Presentation",
            EventKind::Contract => "Contract",
            EventKind::Call => "Phone Call",
            EventKind::Video => "Video Call",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Confirmed,
    Pending,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}
