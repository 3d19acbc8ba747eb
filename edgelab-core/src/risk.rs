//! Risk-unit computation — points, currency, and R multiples for one trade.
//!
//! Every function is pure: prices and sizes in, a metrics block out. Malformed
//! numeric input produces the all-zero `TradeMetrics` rather than an error, so
//! a half-filled journal form can be scored on every keystroke without a
//! failure path.

use serde::{Deserialize, Serialize};

use crate::domain::{Side, Trade, TradeMetrics};

// ─── Side inference ─────────────────────────────────────────────────

/// Result of inferring trade direction from price geometry.
///
/// `Ambiguous` means the stop/target placement does not pin down a direction
/// (stop on the wrong side, all prices equal, target between stop and entry).
/// Callers must resolve it explicitly; the computation never silently picks
/// a side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SideInference {
    Long,
    Short,
    Ambiguous,
}

impl SideInference {
    /// Collapse to a concrete side, deferring to the trader's declared side
    /// when the geometry is ambiguous.
    pub fn resolve_with(self, declared: Side) -> Side {
        match self {
            SideInference::Long => Side::Long,
            SideInference::Short => Side::Short,
            SideInference::Ambiguous => declared,
        }
    }
}

/// Infer direction from the relative placement of entry, stop, and target.
///
/// Long setups keep the stop below entry and the target above; short setups
/// mirror that. Anything else is `Ambiguous`.
pub fn infer_side(entry: f64, stop: f64, target: f64) -> SideInference {
    if !entry.is_finite() || !stop.is_finite() || !target.is_finite() {
        return SideInference::Ambiguous;
    }
    if stop < entry && entry < target {
        SideInference::Long
    } else if stop > entry && entry > target {
        SideInference::Short
    } else {
        SideInference::Ambiguous
    }
}

// ─── Risk computation ───────────────────────────────────────────────

/// Inputs for the risk-unit computation.
#[derive(Debug, Clone, Copy)]
pub struct RiskInput {
    pub side: Side,
    pub entry: f64,
    pub stop: f64,
    /// Exit price once closed, planned take profit while open, `None` when
    /// the trader has set neither.
    pub target: Option<f64>,
    pub quantity: f64,
    pub multiplier: f64,
}

/// Compute the full risk block for one trade.
///
/// - `risk_points = |entry - stop|`, always non-negative.
/// - `reward_points` is signed: the distance from entry to target in the
///   trade's profit direction, so a closed exit on the losing side yields a
///   negative reward and a negative `rr`.
/// - `rr = reward_amount / risk_amount`, 0.0 when the trade carries no risk.
/// - `risk_r`/`reward_r` convert the currency amounts into multiples of
///   `one_r_value` when a positive 1R is supplied.
pub fn compute_risk_unit(input: &RiskInput, one_r_value: Option<f64>) -> TradeMetrics {
    let RiskInput {
        side,
        entry,
        stop,
        target,
        quantity,
        multiplier,
    } = *input;

    if !entry.is_finite() || !stop.is_finite() || !quantity.is_finite() || !multiplier.is_finite() {
        return TradeMetrics::default();
    }
    if quantity <= 0.0 || multiplier <= 0.0 {
        return TradeMetrics::default();
    }
    if let Some(t) = target {
        if !t.is_finite() {
            return TradeMetrics::default();
        }
    }

    let risk_points = (entry - stop).abs();
    let reward_points = match target {
        Some(t) => match side {
            Side::Long => t - entry,
            Side::Short => entry - t,
        },
        None => 0.0,
    };

    let risk_amount = risk_points * quantity * multiplier;
    let reward_amount = reward_points * quantity * multiplier;

    let rr = if risk_amount > 0.0 {
        reward_amount / risk_amount
    } else {
        0.0
    };

    let (risk_r, reward_r) = match one_r_value {
        Some(one_r) if one_r.is_finite() && one_r > 0.0 => {
            (Some(risk_amount / one_r), Some(reward_amount / one_r))
        }
        _ => (None, None),
    };

    TradeMetrics {
        risk_points,
        reward_points,
        risk_amount,
        reward_amount,
        rr,
        risk_r,
        reward_r,
    }
}

/// Score a journaled trade: pick the target (exit once closed, otherwise the
/// planned take profit) and run the risk computation.
///
/// Missing entry or stop yields the all-zero metrics block.
pub fn score_trade(trade: &Trade, one_r_value: Option<f64>) -> TradeMetrics {
    let (entry, stop) = match (trade.entry_price, trade.stop_price) {
        (Some(e), Some(s)) => (e, s),
        _ => return TradeMetrics::default(),
    };

    let input = RiskInput {
        side: trade.side,
        entry,
        stop,
        target: trade.target_price(),
        quantity: trade.quantity,
        multiplier: trade.multiplier,
    };
    compute_risk_unit(&input, one_r_value)
}

/// Reward-to-risk of the trade as planned (entry/stop/take-profit), ignoring
/// how it actually exited.
///
/// Insight rules grade setup quality against this number; a closed loser
/// still had a 3:1 plan if its take profit sat three stops away. Returns 0.0
/// when the plan is incomplete or carries no risk.
pub fn planned_rr(trade: &Trade) -> f64 {
    let (entry, stop, target) = match (trade.entry_price, trade.stop_price, trade.take_profit_price)
    {
        (Some(e), Some(s), Some(t)) => (e, s, t),
        _ => return 0.0,
    };
    if !entry.is_finite() || !stop.is_finite() || !target.is_finite() {
        return 0.0;
    }

    let risk_points = (entry - stop).abs();
    if risk_points <= 0.0 {
        return 0.0;
    }
    let reward_points = match trade.side {
        Side::Long => target - entry,
        Side::Short => entry - target,
    };
    reward_points / risk_points
}
