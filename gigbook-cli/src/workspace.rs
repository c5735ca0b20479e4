//! The record snapshot the dashboard works on.
//!
//! Loaded from a JSON file (`--file`, then `data_file` in the config) or,
//! failing both, from the sample dataset compiled into the binary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use gigbook_core::calendar::{RecurrenceLimits, RecurrenceRule, expand};
use gigbook_core::config::GigbookConfig;
use gigbook_core::entity::{Client, Document, Invoice, Payment, Project};
use gigbook_core::event::Event;
use serde::Deserialize;
use tracing::{debug, warn};

const SAMPLE: &str = include_str!("../data/sample.json");

/// An event that repeats according to `rule`.
#[derive(Debug, Clone, Deserialize)]
pub struct RecurringEvent {
    pub event: Event,
    pub rule: RecurrenceRule,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Workspace {
    pub clients: Vec<Client>,
    pub projects: Vec<Project>,
    pub documents: Vec<Document>,
    pub payments: Vec<Payment>,
    pub invoices: Vec<Invoice>,
    pub events: Vec<Event>,
    pub recurring: Vec<RecurringEvent>,
}

impl Workspace {
    pub fn load(file: Option<&Path>, config: &GigbookConfig) -> Result<Self> {
        let path: Option<PathBuf> = file.map(Path::to_path_buf).or_else(|| config.data_path());

        match path {
            Some(path) => {
                let contents = std::fs::read_to_string(&path)
                    .with_context(|| format!("Could not read {}", path.display()))?;
                let workspace = Self::parse(&contents)
                    .with_context(|| format!("Invalid workspace file {}", path.display()))?;
                debug!(path = %path.display(), "Loaded workspace");
                Ok(workspace)
            }
            None => {
                debug!("No workspace file configured, using sample data");
                Self::sample()
            }
        }
    }

    pub fn sample() -> Result<Self> {
        Self::parse(SAMPLE).context("Bundled sample data is invalid")
    }

    pub fn parse(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// One-off events plus the expanded instances of every recurring one.
    ///
    /// A series that cannot be expanded (unparsable start, zero interval)
    /// is logged and left out; the rest of the calendar still shows.
    pub fn calendar_events(&self, today: NaiveDate, limits: &RecurrenceLimits) -> Vec<Event> {
        let mut events = self.events.clone();
        for recurring in &self.recurring {
            match expand(&recurring.event, &recurring.rule, today, limits) {
                Ok(instances) => events.extend(instances),
                Err(e) => warn!(
                    target: "gigbook::calendar",
                    event_id = %recurring.event.id,
                    error = %e,
                    "Skipped recurring event"
                ),
            }
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_sample_data_loads() {
        let workspace = Workspace::sample().unwrap();
        assert_eq!(workspace.clients.len(), 5);
        assert_eq!(workspace.projects.len(), 4);
        assert_eq!(workspace.payments.len(), 5);
        assert_eq!(workspace.events.len(), 10);
        assert_eq!(workspace.recurring.len(), 1);
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let workspace = Workspace::parse(r#"{"clients": []}"#).unwrap();
        assert!(workspace.events.is_empty());
        assert!(workspace.invoices.is_empty());
    }

    #[test]
    fn test_calendar_events_include_recurring_instances() {
        let workspace = Workspace::sample().unwrap();
        let events = workspace.calendar_events(ymd(2024, 2, 15), &RecurrenceLimits::default());
        assert_eq!(events.len(), 10 + 12);
        assert!(events.iter().any(|e| e.id == "r1_1" && e.date == "2024-02-29"));
    }

    #[test]
    fn test_load_from_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("workspace.json");
        std::fs::write(
            &path,
            r#"{"events": [{"id": "1", "title": "Kickoff", "date": "2024-02-15"}]}"#,
        )
        .unwrap();

        let workspace = Workspace::load(Some(&path), &GigbookConfig::default()).unwrap();
        assert_eq!(workspace.events.len(), 1);
        assert!(workspace.clients.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.json");
        assert!(Workspace::load(Some(&path), &GigbookConfig::default()).is_err());
    }

    #[test]
    fn test_bad_recurring_series_does_not_hide_other_events() {
        let workspace = Workspace::parse(
            r#"{
                "events": [{"id": "1", "title": "Kickoff", "date": "2024-02-15"}],
                "recurring": [
                    {"event": {"id": "r", "title": "Sync", "date": "tbd"}, "rule": {"frequency": "weekly"}},
                    {"event": {"id": "z", "title": "Zero", "date": "2024-02-15"}, "rule": {"frequency": "daily", "interval": 0}},
                    {"event": {"id": "w", "title": "Review", "date": "2024-02-15"}, "rule": {"frequency": "weekly", "count": 2}}
                ]
            }"#,
        )
        .unwrap();

        let events = workspace.calendar_events(ymd(2024, 2, 15), &RecurrenceLimits::default());
        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "w_0", "w_1"]);
    }
}
