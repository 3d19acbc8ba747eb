//! Whole-history context for a just-closed trade.
//!
//! Unlike the entry and exit rules, this one always has something to say: it
//! reads the result against the full journal (streaks, average setup quality,
//! rolling win rate) and files it as momentum, variance, or a quality miss.

use super::{Insight, InsightKind, Severity};
use crate::stats::{breakeven_win_rate, calculate_all_stats, StatSummary};
use edgelab_core::domain::{Outcome, Trade};
use edgelab_core::risk::planned_rr;

/// Place a result in the context of the trader's history.
///
/// `all_trades` is the chronological journal including the trade under
/// review, so streaks and averages count it.
pub fn trade_insight(trade: &Trade, all_trades: &[Trade], pnl: f64) -> Insight {
    let history = calculate_all_stats(all_trades);
    let rr = planned_rr(trade);

    if pnl > 0.0 {
        win_insight(rr, &history, all_trades)
    } else {
        loss_insight(rr, &history, all_trades)
    }
}

fn win_insight(rr: f64, history: &StatSummary, all_trades: &[Trade]) -> Insight {
    let streak = trailing_streak(all_trades, Outcome::Win);
    if streak >= 3 {
        return Insight::with_confetti(
            InsightKind::HotStreak,
            Severity::Success,
            format!("That is {streak} wins in a row. Momentum is real, stay with the process."),
        );
    }
    if history.avg_rr > 0.0 && rr >= 1.2 * history.avg_rr {
        return Insight::with_confetti(
            InsightKind::AboveAverageRr,
            Severity::Success,
            format!(
                "This {:.1}:1 setup ran above your {:.1}:1 average. Keep picking these.",
                rr, history.avg_rr
            ),
        );
    }
    if let Some((recent, prior)) = improving_win_rate(all_trades) {
        return Insight::with_confetti(
            InsightKind::ImprovingWinRate,
            Severity::Success,
            format!(
                "Your win rate over the last 20 trades is {recent:.0}%, up from {prior:.0}%. The work is showing."
            ),
        );
    }
    Insight::with_confetti(
        InsightKind::StandardWin,
        Severity::Success,
        "Solid win. Consistency compounds.".to_string(),
    )
}

fn loss_insight(rr: f64, history: &StatSummary, all_trades: &[Trade]) -> Insight {
    let required = breakeven_win_rate(history.avg_rr);
    let streak = trailing_streak(all_trades, Outcome::Loss);

    if streak >= 3 {
        return Insight::new(
            InsightKind::LossStreakReassurance,
            Severity::Info,
            format!(
                "{streak} losses in a row. Your win rate is {:.0}% against a {:.0}% breakeven requirement. Streaks like this are normal variance.",
                history.win_rate, required
            ),
        );
    }
    if history.win_rate >= required && history.avg_rr >= 2.0 {
        return Insight::new(
            InsightKind::ProfitableSystemLoss,
            Severity::Info,
            format!(
                "Your {:.0}% win rate runs {:.0} points above the {:.0}% your {:.1}:1 average needs. This loss is inside the math.",
                history.win_rate,
                history.win_rate - required,
                required,
                history.avg_rr
            ),
        );
    }
    if rr > 0.0 && history.avg_rr > 0.0 && rr < 0.7 * history.avg_rr {
        return Insight::new(
            InsightKind::BelowOwnStandard,
            Severity::Warning,
            format!(
                "This {:.1}:1 setup was below your usual {:.1}:1. Save the risk for your A-grade setups.",
                rr, history.avg_rr
            ),
        );
    }
    if rr > 0.0 && rr < 1.5 {
        return Insight::new(
            InsightKind::LowRrWarning,
            Severity::Warning,
            format!("A {rr:.1}:1 setup leaves little room for losses. Aim for 2:1 or better."),
        );
    }
    if rr >= 2.0 {
        return Insight::new(
            InsightKind::UnluckyGoodTrade,
            Severity::Info,
            format!(
                "Good {:.1}:1 setup, bad result. A ratio like this only needs a {:.0}% win rate to profit.",
                rr,
                breakeven_win_rate(rr)
            ),
        );
    }
    Insight::new(
        InsightKind::KeepGoing,
        Severity::Info,
        "One trade is one data point. Log it and take the next setup.".to_string(),
    )
}

// ─── History scans ──────────────────────────────────────────────────

/// Length of the same-outcome run at the end of the journal. Open trades are
/// transparent; any other differing outcome ends the run.
fn trailing_streak(trades: &[Trade], target: Outcome) -> usize {
    let mut streak = 0;
    for trade in trades.iter().rev() {
        if trade.outcome == Outcome::Open {
            continue;
        }
        if trade.outcome == target {
            streak += 1;
        } else {
            break;
        }
    }
    streak
}

/// Win rates of the last 20 closed trades and the up-to-20 before them, when
/// the recent rate is at least 3 percentage points higher. Needs 30 closed
/// trades to say anything.
fn improving_win_rate(trades: &[Trade]) -> Option<(f64, f64)> {
    let closed: Vec<&Trade> = trades.iter().filter(|t| t.outcome.is_closed()).collect();
    if closed.len() < 30 {
        return None;
    }
    let split = closed.len() - 20;
    let prior_start = split.saturating_sub(20);
    let recent = win_rate_of(&closed[split..]);
    let prior = win_rate_of(&closed[prior_start..split]);
    if recent - prior >= 3.0 {
        Some((recent, prior))
    } else {
        None
    }
}

fn win_rate_of(trades: &[&Trade]) -> f64 {
    if trades.is_empty() {
        return 0.0;
    }
    let wins = trades.iter().filter(|t| t.outcome == Outcome::Win).count();
    wins as f64 / trades.len() as f64 * 100.0
}
