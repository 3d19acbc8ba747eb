//! Aggregate statistics — a single pass over a trade list, summary out.
//!
//! Every metric lives in `StatSummary`; the list is consumed once in
//! chronological order, so order-sensitive statistics (streaks, drawdown)
//! come out right without re-sorting. No I/O, no ambient state.
//!
//! Units are mixed on purpose and documented per field: profit factor and
//! net pnl are currency, everything else R-based.

use edgelab_core::domain::{Outcome, Side, Trade};
use serde::{Deserialize, Serialize};

/// Aggregate performance statistics for a list of trades.
///
/// An empty list yields the all-zero default — never an absent result, never
/// NaN in any field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct StatSummary {
    // ── Counts ──
    pub total_trades: usize,
    pub wins: usize,
    pub losses: usize,
    pub breakeven: usize,

    // ── Rates ──
    /// Percentage of all trades marked Win, 0–100.
    pub win_rate: f64,

    // ── R aggregates ──
    pub total_r: f64,
    pub avg_r: f64,
    pub avg_win_r: f64,
    /// Average losing R as a magnitude (1.2 means losers average -1.2R).
    pub avg_loss_r: f64,
    /// avg_win_r / avg_loss_r — the realized reward-to-risk of the system.
    pub avg_rr: f64,
    /// Expected R per trade: win_rate * avg_win_r - loss_rate * avg_loss_r.
    pub expectancy: f64,
    pub largest_win_r: f64,
    /// Most negative losing R, sign preserved.
    pub largest_loss_r: f64,

    // ── Currency ──
    pub net_pnl: f64,
    /// Gross currency profit / gross currency loss. Zero when there are no
    /// losing trades, so an all-winning sample reads 0, not infinity.
    pub profit_factor: f64,

    // ── Sequence ──
    pub max_consecutive_wins: usize,
    pub max_consecutive_losses: usize,
    /// Largest peak-to-trough decline of the cumulative R curve, >= 0.
    pub max_drawdown_r: f64,

    // ── Dispersion ──
    /// Population standard deviation of per-trade R.
    pub std_dev_r: f64,
    /// avg_r / std_dev_r; one observation per trade, no annualization.
    pub sharpe_ratio: f64,
    /// avg_r over the RMS of losing R only.
    pub sortino_ratio: f64,
    /// sharpe_ratio * 100 — kept as a separately named field for the
    /// journaling surfaces that display it on a 0–100-ish scale.
    pub consistency: f64,

    // ── Behavior ──
    /// Mean holding time over trades with both timestamps recorded.
    pub avg_trade_duration_hours: f64,
    /// Trades whose R reached at least 1.
    pub trades_hitting_1r: usize,
    /// Winners cut before the planned take profit.
    pub prematurely_closed: usize,
}

/// Compute the full summary for a chronologically ordered trade list.
pub fn calculate_all_stats(trades: &[Trade]) -> StatSummary {
    stats_over(trades.iter())
}

/// Single-pass reducer over any trade iterator.
///
/// Breakdown and trend feed filtered borrows through here so no sub-list is
/// ever materialized.
pub(crate) fn stats_over<'a>(trades: impl Iterator<Item = &'a Trade>) -> StatSummary {
    let mut acc = StatsAccumulator::default();
    for trade in trades {
        acc.add(trade);
    }
    acc.finish()
}

/// Win rate required to break even at a given reward-to-risk ratio:
/// `1 / (rr + 1) * 100`.
///
/// A 2:1 system breaks even at 33%; a 1:1 system needs 50%.
pub fn breakeven_win_rate(rr: f64) -> f64 {
    if !rr.is_finite() || rr < 0.0 {
        return 0.0;
    }
    1.0 / (rr + 1.0) * 100.0
}

// ─── Accumulator ────────────────────────────────────────────────────

#[derive(Debug, Default)]
struct StatsAccumulator {
    total: usize,
    wins: usize,
    losses: usize,
    breakeven: usize,

    sum_r: f64,
    sum_sq_r: f64,
    sum_win_r: f64,
    sum_loss_r_abs: f64,
    sum_loss_r_sq: f64,
    largest_win_r: f64,
    largest_loss_r: f64,

    gross_profit: f64,
    gross_loss: f64,
    net_pnl: f64,

    running_r: f64,
    peak_r: f64,
    max_drawdown_r: f64,

    win_streak: usize,
    loss_streak: usize,
    max_win_streak: usize,
    max_loss_streak: usize,

    duration_hours_sum: f64,
    timed_trades: usize,
    hitting_1r: usize,
    premature: usize,
}

impl StatsAccumulator {
    fn add(&mut self, trade: &Trade) {
        let r = trade.metrics.rr;
        let pnl = trade.realized_pnl();

        self.total += 1;
        self.sum_r += r;
        self.sum_sq_r += r * r;
        self.net_pnl += pnl;

        // Cumulative R curve starts at zero; drawdown is measured from its
        // running peak.
        self.running_r += r;
        if self.running_r > self.peak_r {
            self.peak_r = self.running_r;
        }
        let drawdown = self.peak_r - self.running_r;
        if drawdown > self.max_drawdown_r {
            self.max_drawdown_r = drawdown;
        }

        match trade.outcome {
            Outcome::Win => {
                self.wins += 1;
                self.sum_win_r += r;
                if r > self.largest_win_r {
                    self.largest_win_r = r;
                }
                self.gross_profit += pnl;
                self.win_streak += 1;
                self.loss_streak = 0;
                if self.win_streak > self.max_win_streak {
                    self.max_win_streak = self.win_streak;
                }
            }
            Outcome::Loss => {
                self.losses += 1;
                self.sum_loss_r_abs += r.abs();
                self.sum_loss_r_sq += r * r;
                if r < self.largest_loss_r {
                    self.largest_loss_r = r;
                }
                self.gross_loss += pnl.abs();
                self.loss_streak += 1;
                self.win_streak = 0;
                if self.loss_streak > self.max_loss_streak {
                    self.max_loss_streak = self.loss_streak;
                }
            }
            // Breakeven and open trades break both streaks
            Outcome::Breakeven => {
                self.breakeven += 1;
                self.win_streak = 0;
                self.loss_streak = 0;
            }
            Outcome::Open => {
                self.win_streak = 0;
                self.loss_streak = 0;
            }
        }

        if let Some(hours) = trade.duration_hours() {
            self.duration_hours_sum += hours;
            self.timed_trades += 1;
        }
        if r >= 1.0 {
            self.hitting_1r += 1;
        }
        if closed_prematurely(trade) {
            self.premature += 1;
        }
    }

    fn finish(self) -> StatSummary {
        if self.total == 0 {
            return StatSummary::default();
        }
        let total_f = self.total as f64;

        let win_rate = self.wins as f64 / total_f * 100.0;
        let loss_rate = self.losses as f64 / total_f;
        let avg_r = self.sum_r / total_f;
        let avg_win_r = if self.wins > 0 {
            self.sum_win_r / self.wins as f64
        } else {
            0.0
        };
        let avg_loss_r = if self.losses > 0 {
            self.sum_loss_r_abs / self.losses as f64
        } else {
            0.0
        };
        let avg_rr = if avg_loss_r > 0.0 {
            avg_win_r / avg_loss_r
        } else {
            0.0
        };
        let profit_factor = if self.gross_loss > 0.0 {
            self.gross_profit / self.gross_loss
        } else {
            0.0
        };
        let expectancy = (win_rate / 100.0) * avg_win_r - loss_rate * avg_loss_r;

        // Cancellation can push the population variance a hair below zero.
        let variance = (self.sum_sq_r / total_f - avg_r * avg_r).max(0.0);
        let std_dev_r = variance.sqrt();
        let sharpe_ratio = if std_dev_r < 1e-15 {
            0.0
        } else {
            avg_r / std_dev_r
        };
        let downside_dev = if self.losses > 0 {
            (self.sum_loss_r_sq / self.losses as f64).sqrt()
        } else {
            0.0
        };
        let sortino_ratio = if downside_dev < 1e-15 {
            0.0
        } else {
            avg_r / downside_dev
        };

        let avg_trade_duration_hours = if self.timed_trades > 0 {
            self.duration_hours_sum / self.timed_trades as f64
        } else {
            0.0
        };

        StatSummary {
            total_trades: self.total,
            wins: self.wins,
            losses: self.losses,
            breakeven: self.breakeven,
            win_rate,
            total_r: self.sum_r,
            avg_r,
            avg_win_r,
            avg_loss_r,
            avg_rr,
            expectancy,
            largest_win_r: self.largest_win_r,
            largest_loss_r: self.largest_loss_r,
            net_pnl: self.net_pnl,
            profit_factor,
            max_consecutive_wins: self.max_win_streak,
            max_consecutive_losses: self.max_loss_streak,
            max_drawdown_r: self.max_drawdown_r,
            std_dev_r,
            sharpe_ratio,
            sortino_ratio,
            consistency: sharpe_ratio * 100.0,
            avg_trade_duration_hours,
            trades_hitting_1r: self.hitting_1r,
            prematurely_closed: self.premature,
        }
    }
}

/// A winner that exited short of its planned take profit.
fn closed_prematurely(trade: &Trade) -> bool {
    let (exit, target) = match (trade.exit_price, trade.take_profit_price) {
        (Some(e), Some(t)) => (e, t),
        _ => return false,
    };
    let short_of_target = match trade.side {
        Side::Long => exit < target,
        Side::Short => exit > target,
    };
    short_of_target && trade.metrics.rr > 0.0
}
