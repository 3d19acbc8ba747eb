//! Trade — a journaled trade and its derived risk metrics.

use super::ids::TradeId;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Long,
    Short,
}

impl Side {
    pub fn label(&self) -> &'static str {
        match self {
            Side::Long => "Long",
            Side::Short => "Short",
        }
    }
}

/// Recorded result of a trade.
///
/// Supplied by the journal when the trader closes the position; the engine
/// never infers it from prices or pnl.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win,
    Loss,
    Breakeven,
    Open,
}

impl Outcome {
    pub fn is_closed(&self) -> bool {
        !matches!(self, Outcome::Open)
    }
}

/// Derived risk block for a single trade.
///
/// Always present after scoring, possibly all-zero when the trade lacks the
/// prices needed to size its risk. `risk_r`/`reward_r` are `None` when no
/// valid 1R value was available at scoring time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct TradeMetrics {
    /// |entry - stop| in price points.
    pub risk_points: f64,
    /// Signed distance from entry to target in the trade's profit direction.
    pub reward_points: f64,
    /// Currency at risk: risk_points * quantity * multiplier.
    pub risk_amount: f64,
    /// Signed currency reward: reward_points * quantity * multiplier.
    pub reward_amount: f64,
    /// Reward-to-risk ratio. Zero when the trade carries no risk.
    pub rr: f64,
    /// Risk expressed in R units of the trader's configured 1R.
    pub risk_r: Option<f64>,
    /// Reward expressed in R units of the trader's configured 1R.
    pub reward_r: Option<f64>,
}

/// A journaled trade: the plan, the execution, and the classification tags
/// the trader attached to it.
///
/// The engine treats every field except `metrics` as read-only input owned
/// by the journal store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    // ── Identity ──
    pub id: TradeId,
    pub symbol: String,
    /// Currency value of one point of price movement (1.0 for stocks).
    pub multiplier: f64,

    // ── Execution ──
    pub side: Side,
    pub entry_price: Option<f64>,
    pub stop_price: Option<f64>,
    pub take_profit_price: Option<f64>,
    pub exit_price: Option<f64>,
    pub quantity: f64,
    pub fees: f64,

    // ── Timing ──
    pub open_at: NaiveDateTime,
    pub close_at: Option<NaiveDateTime>,

    // ── Result ──
    pub outcome: Outcome,
    /// Realized currency result, filled in by the journal once closed.
    pub pnl: Option<f64>,

    // ── Classification ──
    pub strategy: Option<String>,
    pub session: Option<String>,
    pub tags: Vec<String>,

    // ── Derived ──
    pub metrics: TradeMetrics,
}

impl Trade {
    pub fn realized_pnl(&self) -> f64 {
        self.pnl.unwrap_or(0.0)
    }

    /// Holding time in hours. `None` unless both timestamps are recorded.
    pub fn duration_hours(&self) -> Option<f64> {
        let close = self.close_at?;
        Some((close - self.open_at).num_seconds() as f64 / 3600.0)
    }

    /// Price the risk computation treats as the target: the actual exit once
    /// closed, otherwise the planned take profit.
    pub fn target_price(&self) -> Option<f64> {
        self.exit_price.or(self.take_profit_price)
    }
}
