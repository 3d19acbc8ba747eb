//! EdgeLab Analytics — journal-wide statistics and coaching insights.
//!
//! This crate builds on `edgelab-core` to provide:
//! - Single-pass aggregate statistics (R profile, streaks, drawdown, ratios)
//! - Breakdowns by strategy, asset, session, weekday, and direction
//! - Trend windows comparing recent performance to the stretch before it
//! - Priority-ordered entry/exit/context insights with injectable randomness
//! - Journal fingerprints for caller-side memoization
//! - Plain-text report rendering
//!
//! Everything is pure: slices in, values out, the caller owns the clock and
//! the RNG.

pub mod breakdown;
pub mod fingerprint;
pub mod insight;
pub mod report;
pub mod stats;
pub mod trend;

pub use breakdown::{calculate_breakdown, classify, Breakdown, Dimension, GroupKey, GroupStats};
pub use fingerprint::{journal_fingerprint, view_key};
pub use insight::{
    entry_insight, exit_insight, template_seed, trade_insight, Insight, InsightKind, Severity,
};
pub use report::{render_summary, render_trend};
pub use stats::{breakeven_win_rate, calculate_all_stats, StatSummary};
pub use trend::{compare_windows, compare_windows_now, TrendChanges, TrendComparison, Window};
