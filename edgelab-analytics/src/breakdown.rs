//! Per-group statistics — the same summary, sliced along one dimension.
//!
//! - Groups form in first-seen order and sort by total R, best first, so
//!   equal totals keep their journal order and reruns match exactly.
//! - The weekday slice is the exception: always seven rows, Sunday through
//!   Saturday, present even when a day has no trades.

use crate::stats::{stats_over, StatSummary};
use chrono::{Datelike, Weekday};
use edgelab_core::domain::Trade;
use serde::{Deserialize, Serialize};

/// The grouping axes a journal can be sliced along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Dimension {
    Strategy,
    Asset,
    Session,
    Weekday,
    Direction,
}

impl Dimension {
    /// Row label used for trades with no value on this axis.
    pub fn missing_label(self) -> &'static str {
        match self {
            Dimension::Strategy => "No Strategy",
            Dimension::Session => "No Session",
            Dimension::Asset | Dimension::Weekday | Dimension::Direction => "Unknown",
        }
    }
}

/// Where a trade lands on a grouping axis.
///
/// Missing is a first-class bucket: untagged trades aggregate under the
/// dimension's fallback label instead of disappearing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupKey {
    Value(String),
    Missing,
}

impl GroupKey {
    fn into_label(self, dimension: Dimension) -> String {
        match self {
            GroupKey::Value(label) => label,
            GroupKey::Missing => dimension.missing_label().to_string(),
        }
    }
}

/// Assign a trade to its bucket on one axis. Empty strings count as missing.
pub fn classify(trade: &Trade, dimension: Dimension) -> GroupKey {
    let tag = |value: Option<&str>| match value {
        Some(v) if !v.is_empty() => GroupKey::Value(v.to_string()),
        _ => GroupKey::Missing,
    };
    match dimension {
        Dimension::Strategy => tag(trade.strategy.as_deref()),
        Dimension::Asset => tag(Some(trade.symbol.as_str())),
        Dimension::Session => tag(trade.session.as_deref()),
        Dimension::Weekday => GroupKey::Value(weekday_label(trade.open_at.weekday()).to_string()),
        Dimension::Direction => GroupKey::Value(trade.side.label().to_string()),
    }
}

/// One row of a breakdown: a bucket label and the stats of its trades.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupStats {
    pub label: String,
    pub stats: StatSummary,
}

/// Every slice of the journal at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    pub by_strategy: Vec<GroupStats>,
    pub by_asset: Vec<GroupStats>,
    pub by_session: Vec<GroupStats>,
    /// Always seven rows, Sunday first.
    pub by_weekday: Vec<GroupStats>,
    pub by_direction: Vec<GroupStats>,
}

/// Slice the journal along all five dimensions.
pub fn calculate_breakdown(trades: &[Trade]) -> Breakdown {
    Breakdown {
        by_strategy: dimension_breakdown(trades, Dimension::Strategy),
        by_asset: dimension_breakdown(trades, Dimension::Asset),
        by_session: dimension_breakdown(trades, Dimension::Session),
        by_weekday: weekday_breakdown(trades),
        by_direction: dimension_breakdown(trades, Dimension::Direction),
    }
}

// ─── Internals ──────────────────────────────────────────────────────

const WEEKDAYS: [(Weekday, &str); 7] = [
    (Weekday::Sun, "Sunday"),
    (Weekday::Mon, "Monday"),
    (Weekday::Tue, "Tuesday"),
    (Weekday::Wed, "Wednesday"),
    (Weekday::Thu, "Thursday"),
    (Weekday::Fri, "Friday"),
    (Weekday::Sat, "Saturday"),
];

fn weekday_label(day: Weekday) -> &'static str {
    WEEKDAYS
        .iter()
        .find(|(d, _)| *d == day)
        .map(|(_, label)| *label)
        .unwrap_or("Unknown")
}

fn group_by(trades: &[Trade], dimension: Dimension) -> Vec<(String, Vec<&Trade>)> {
    let mut groups: Vec<(String, Vec<&Trade>)> = Vec::new();
    for trade in trades {
        let label = classify(trade, dimension).into_label(dimension);
        match groups.iter_mut().find(|(existing, _)| *existing == label) {
            Some((_, members)) => members.push(trade),
            None => groups.push((label, vec![trade])),
        }
    }
    groups
}

fn dimension_breakdown(trades: &[Trade], dimension: Dimension) -> Vec<GroupStats> {
    let mut rows: Vec<GroupStats> = group_by(trades, dimension)
        .into_iter()
        .map(|(label, members)| GroupStats {
            label,
            stats: stats_over(members.into_iter()),
        })
        .collect();
    // Stable sort: equal totals keep first-seen order
    rows.sort_by(|a, b| {
        b.stats
            .total_r
            .partial_cmp(&a.stats.total_r)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    rows
}

fn weekday_breakdown(trades: &[Trade]) -> Vec<GroupStats> {
    WEEKDAYS
        .iter()
        .map(|(day, label)| GroupStats {
            label: (*label).to_string(),
            stats: stats_over(trades.iter().filter(|t| t.open_at.weekday() == *day)),
        })
        .collect()
}
