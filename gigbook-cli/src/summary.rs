//! Reductions over filtered records for the summary lines.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub count: usize,
    pub sum: f64,
}

impl Totals {
    pub fn of<T>(items: &[&T], amount: impl Fn(&T) -> f64) -> Self {
        Totals {
            count: items.len(),
            sum: items.iter().map(|item| amount(*item)).sum(),
        }
    }

    /// `None` when there is nothing to average.
    pub fn average(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }
}

/// Number of items per key, keys sorted.
pub fn count_by<'a, T>(items: &[&'a T], key: impl Fn(&'a T) -> &'a str) -> BTreeMap<&'a str, usize> {
    let mut counts = BTreeMap::new();
    for item in items {
        *counts.entry(key(*item)).or_insert(0) += 1;
    }
    counts
}

/// "Active: 3, Inactive: 1"
pub fn format_counts(counts: &BTreeMap<&str, usize>) -> String {
    counts
        .iter()
        .map(|(key, count)| format!("{key}: {count}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// "$45,000.00". NaN, infinities and amounts too large to count in cents
/// render as "n/a".
pub fn format_money(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round();
    if !cents.is_finite() || cents >= u64::MAX as f64 {
        return "n/a".to_string();
    }
    let cents = cents as u64;
    let whole = (cents / 100).to_string();

    let mut grouped = String::new();
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{sign}${grouped}.{:02}", cents % 100)
}
