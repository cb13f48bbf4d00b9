//! Logic for processing and aggregating analytics events.
//!
//! Turns raw event rows into per-month counts, per-source counts, and
//! retention ratios. Everything here is a pure function of its input
//! rows and a reference clock; handlers fetch a bounded window of events
//! and derive their payloads from these.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::Serialize;

use crate::database::models::AnalyticsEvent;

/// One calendar-month slot in a 12-month chart series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyBucket {
    pub month: String,
    pub count: i64,
}

/// Occurrence count for one distinct event value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceCount {
    pub source: String,
    pub count: i64,
}

/// Bucket `events` into the 12 calendar months ending at `now`.
///
/// Returns exactly 12 entries, oldest first, labelled like "Jan 2025".
/// An event counts toward the month it was created in (matched by
/// year+month, not by day distance); months with no events still appear
/// with a count of 0.
pub fn monthly_buckets(events: &[AnalyticsEvent], now: DateTime<Utc>) -> Vec<MonthlyBucket> {
    let mut counts: BTreeMap<(i32, u32), i64> = BTreeMap::new();
    for event in events {
        let created = event.created_at;
        *counts.entry((created.year(), created.month())).or_insert(0) += 1;
    }

    (0..12)
        .rev()
        .map(|offset| {
            let (year, month) = months_back(now.year(), now.month(), offset);
            MonthlyBucket {
                month: month_label(year, month),
                count: counts.get(&(year, month)).copied().unwrap_or(0),
            }
        })
        .collect()
}

/// The all-zero series served when the event source is unavailable.
pub fn empty_monthly_buckets(now: DateTime<Utc>) -> Vec<MonthlyBucket> {
    monthly_buckets(&[], now)
}

fn months_back(year: i32, month: u32, offset: u32) -> (i32, u32) {
    // month is 1-based; do the arithmetic 0-based to survive year wraps.
    let total = year * 12 + (month as i32 - 1) - offset as i32;
    (total.div_euclid(12), (total.rem_euclid(12) + 1) as u32)
}

fn month_label(year: i32, month: u32) -> String {
    match NaiveDate::from_ymd_opt(year, month, 1) {
        Some(date) => date.format("%b %Y").to_string(),
        // months_back only yields valid months; keep a readable fallback anyway.
        None => format!("{year}-{month:02}"),
    }
}

/// Return-visit percentage to one decimal place.
///
/// The literal string "0" for zero sessions is a display placeholder,
/// not an assertion that the rate is zero.
pub fn retention_rate(total_sessions: i64, return_visits: i64) -> String {
    if total_sessions == 0 {
        return "0".to_string();
    }
    format!(
        "{:.1}",
        return_visits as f64 / total_sessions as f64 * 100.0
    )
}

/// Group events by their raw `event_value` and count occurrences.
///
/// Events without a value are skipped; the keys are whatever distinct
/// values occur, there is no pre-declared enumeration.
pub fn count_by_value(events: &[AnalyticsEvent]) -> Vec<SourceCount> {
    let mut counts: BTreeMap<&str, i64> = BTreeMap::new();
    for event in events {
        if let Some(value) = event.event_value.as_deref() {
            *counts.entry(value).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .map(|(source, count)| SourceCount {
            source: source.to_string(),
            count,
        })
        .collect()
}

/// Count events whose name is in `names` and which were created at or
/// after `cutoff`. The window length is the caller's choice.
pub fn count_recent(events: &[AnalyticsEvent], names: &[&str], cutoff: DateTime<Utc>) -> i64 {
    events
        .iter()
        .filter(|event| names.contains(&event.event_name.as_str()) && event.created_at >= cutoff)
        .count() as i64
}
