//! Expansion of repeating events into dated instances.
//!
//! Occurrence `n` is computed from the series start rather than from the
//! previous occurrence, so a monthly series anchored on the 31st clamps to
//! short months without drifting (Jan 31, Feb 29, Mar 31, Apr 30...).

use chrono::{Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::dates::{add_days, format_date, parse_date};
use crate::error::{GigbookError, GigbookResult};
use crate::event::Event;

const DEFAULT_MAX_INSTANCES: u32 = 52;
const DEFAULT_HORIZON_DAYS: u32 = 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

fn default_interval() -> u32 {
    1
}

/// How an event repeats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    /// Step between occurrences, in units of `frequency`.
    #[serde(default = "default_interval")]
    pub interval: u32,
    /// Total number of instances, including the first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Last date an instance may fall on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub until: Option<NaiveDate>,
}

impl RecurrenceRule {
    pub fn new(frequency: Frequency) -> Self {
        RecurrenceRule {
            frequency,
            interval: 1,
            count: None,
            until: None,
        }
    }

    pub fn every(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    pub fn times(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn until(mut self, until: NaiveDate) -> Self {
        self.until = Some(until);
        self
    }

    /// Date of occurrence `n` (0 is the series start).
    fn occurrence(&self, start: NaiveDate, n: u32) -> Option<NaiveDate> {
        let steps = n.checked_mul(self.interval)?;
        match self.frequency {
            Frequency::Daily => start.checked_add_days(Days::new(u64::from(steps))),
            Frequency::Weekly => start.checked_add_days(Days::new(u64::from(steps) * 7)),
            Frequency::Monthly => start.checked_add_months(Months::new(steps)),
            Frequency::Yearly => start.checked_add_months(Months::new(steps.checked_mul(12)?)),
        }
    }
}

/// Bounds applied when a rule leaves `count` or `until` open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurrenceLimits {
    #[serde(default = "default_max_instances")]
    pub max_instances: u32,
    #[serde(default = "default_horizon_days")]
    pub horizon_days: u32,
}

fn default_max_instances() -> u32 {
    DEFAULT_MAX_INSTANCES
}

fn default_horizon_days() -> u32 {
    DEFAULT_HORIZON_DAYS
}

impl Default for RecurrenceLimits {
    fn default() -> Self {
        RecurrenceLimits {
            max_instances: DEFAULT_MAX_INSTANCES,
            horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }
}

/// Expand `event` into its instances.
///
/// - Without `until`, the series stops `limits.horizon_days` after `today`.
/// - Without `count`, at most `limits.max_instances` instances are produced.
/// - Instances copy every field of `event`, get id `"{id}_{n}"` and point
///   back to it through `parent_id`.
pub fn expand(
    event: &Event,
    rule: &RecurrenceRule,
    today: NaiveDate,
    limits: &RecurrenceLimits,
) -> GigbookResult<Vec<Event>> {
    if rule.interval == 0 {
        return Err(GigbookError::Recurrence("interval must be at least 1".into()));
    }

    let start = parse_date(&event.date)?;
    let until = rule
        .until
        .unwrap_or_else(|| add_days(today, u64::from(limits.horizon_days)));
    let max_instances = rule.count.unwrap_or(limits.max_instances);

    let instances: Vec<Event> = (0..max_instances)
        .map_while(|n| rule.occurrence(start, n).map(|date| (n, date)))
        .take_while(|(_, date)| *date <= until)
        .map(|(n, date)| Event {
            id: format!("{}_{}", event.id, n),
            date: format_date(date),
            parent_id: Some(event.id.clone()),
            ..event.clone()
        })
        .collect();

    debug!(
        target: "gigbook::calendar",
        event_id = %event.id,
        frequency = ?rule.frequency,
        instances = instances.len(),
        "Expanded recurring event"
    );

    Ok(instances)
}
