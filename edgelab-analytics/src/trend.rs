//! Trend windows — recent performance against the stretch just before it.
//!
//! A 30-day comparison puts the last 30 days of trades next to the 30 days
//! immediately preceding them. The reference instant is a parameter so the
//! same journal always produces the same comparison; only the outermost
//! caller reaches for the clock.

use crate::stats::{calculate_all_stats, stats_over, StatSummary};
use chrono::{Duration, NaiveDateTime, Utc};
use edgelab_core::domain::Trade;
use serde::{Deserialize, Serialize};

/// Look-back span for a trend comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Window {
    #[serde(rename = "7D")]
    Days7,
    #[serde(rename = "30D")]
    Days30,
    #[serde(rename = "90D")]
    Days90,
    #[serde(rename = "ALL")]
    All,
}

impl Window {
    /// Span length in days; `None` for the unbounded window.
    pub fn days(self) -> Option<i64> {
        match self {
            Window::Days7 => Some(7),
            Window::Days30 => Some(30),
            Window::Days90 => Some(90),
            Window::All => None,
        }
    }

    /// Short tag used in cache keys and report headers.
    pub fn tag(self) -> &'static str {
        match self {
            Window::Days7 => "7D",
            Window::Days30 => "30D",
            Window::Days90 => "90D",
            Window::All => "ALL",
        }
    }
}

/// Current-minus-previous deltas for the headline metrics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrendChanges {
    /// Percentage points.
    pub win_rate: f64,
    pub net_pnl: f64,
    pub avg_r: f64,
}

/// Two adjacent windows of stats and the deltas between them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendComparison {
    pub window: Window,
    pub current: StatSummary,
    pub previous: StatSummary,
    pub changes: TrendChanges,
}

/// Compare the window ending at `now` against the equal window before it.
///
/// Trades are bucketed by open time: `[now - span, now]` is current,
/// `[now - 2*span, now - span)` is previous. The unbounded window takes the
/// whole journal as current and an empty previous, so its deltas read as
/// absolute values.
pub fn compare_windows(trades: &[Trade], window: Window, now: NaiveDateTime) -> TrendComparison {
    let (current, previous) = match window.days() {
        Some(days) => {
            let cutoff = now - Duration::days(days);
            let prior_cutoff = cutoff - Duration::days(days);
            let current = stats_over(trades.iter().filter(|t| t.open_at >= cutoff));
            let previous = stats_over(
                trades
                    .iter()
                    .filter(|t| t.open_at >= prior_cutoff && t.open_at < cutoff),
            );
            (current, previous)
        }
        None => (calculate_all_stats(trades), StatSummary::default()),
    };
    let changes = TrendChanges {
        win_rate: current.win_rate - previous.win_rate,
        net_pnl: current.net_pnl - previous.net_pnl,
        avg_r: current.avg_r - previous.avg_r,
    };
    TrendComparison {
        window,
        current,
        previous,
        changes,
    }
}

/// `compare_windows` anchored at the current UTC instant.
pub fn compare_windows_now(trades: &[Trade], window: Window) -> TrendComparison {
    compare_windows(trades, window, Utc::now().naive_utc())
}
