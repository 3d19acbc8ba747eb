//! Coaching insights — one message per event, chosen by fixed-priority rules.
//!
//! Three entry points cover the trade lifecycle:
//! - `entry_insight` grades a setup the moment it is planned
//! - `exit_insight` reacts to a close with the realized R
//! - `trade_insight` reads the result against the trader's whole history
//!
//! Every rule list is evaluated top to bottom and the first match wins, so a
//! trade maps to exactly one message and reruns agree. The only randomness is
//! the loss-encouragement template draw, and the `Rng` for it is injected;
//! `template_seed` derives a stable per-trade seed for callers that want the
//! same trade to always read the same way.

pub mod context;
pub mod entry;
pub mod exit;

pub use context::trade_insight;
pub use entry::entry_insight;
pub use exit::exit_insight;

use edgelab_core::domain::TradeId;
use serde::{Deserialize, Serialize};

/// How a message should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Severity {
    Success,
    Warning,
    Info,
}

/// Which rule produced a message. Stable across reruns; UIs and tests key on
/// this rather than parsing message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsightKind {
    // ── Entry ──
    ExceptionalRiskReward,
    GreatRiskReward,
    LowRiskReward,
    LargePosition,
    ImprovedSetup,
    MorningSession,
    HighFees,

    // ── Exit ──
    StrongExecution,
    Winner,
    OversizedLoss,
    Encouragement,

    // ── Trade context, win branch ──
    HotStreak,
    AboveAverageRr,
    ImprovingWinRate,
    StandardWin,

    // ── Trade context, loss branch ──
    LossStreakReassurance,
    ProfitableSystemLoss,
    BelowOwnStandard,
    LowRrWarning,
    UnluckyGoodTrade,
    KeepGoing,
}

/// A single coaching message attached to a trade event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub severity: Severity,
    pub message: String,
    /// Celebratory rendering hint; only ever true on win-branch results.
    pub confetti: bool,
}

impl Insight {
    pub fn new(kind: InsightKind, severity: Severity, message: String) -> Self {
        Self {
            kind,
            severity,
            message,
            confetti: false,
        }
    }

    pub fn with_confetti(kind: InsightKind, severity: Severity, message: String) -> Self {
        Self {
            kind,
            severity,
            message,
            confetti: true,
        }
    }
}

/// Deterministic RNG seed for a trade's message templates.
///
/// Derived by hashing the trade id, so the draw is independent of evaluation
/// order and a trade keeps its template across recomputations.
pub fn template_seed(id: &TradeId) -> u64 {
    let mut hasher = blake3::Hasher::new();
    hasher.update(id.as_str().as_bytes());
    let hash = hasher.finalize();
    u64::from_le_bytes(hash.as_bytes()[..8].try_into().unwrap())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_seeds_are_deterministic() {
        let id = TradeId::new("trade-123");
        assert_eq!(template_seed(&id), template_seed(&id));
    }

    #[test]
    fn different_ids_different_seeds() {
        let a = TradeId::new("trade-123");
        let b = TradeId::new("trade-124");
        assert_ne!(template_seed(&a), template_seed(&b));
    }

    #[test]
    fn insight_constructors_set_confetti() {
        let plain = Insight::new(InsightKind::KeepGoing, Severity::Info, "on to the next".into());
        assert!(!plain.confetti);
        let party = Insight::with_confetti(
            InsightKind::StandardWin,
            Severity::Success,
            "solid win".into(),
        );
        assert!(party.confetti);
    }
}
