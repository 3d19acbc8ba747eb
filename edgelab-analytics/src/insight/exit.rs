//! Reaction to a close, driven by the realized R multiple.
//!
//! The only randomness in the crate lives here: the loss encouragement picks
//! one of four fixed templates through a caller-supplied `Rng`. Seed it from
//! `template_seed` to make a trade always draw the same line.

use super::{Insight, InsightKind, Severity};
use edgelab_core::domain::{Outcome, Trade};
use rand::Rng;

const ENCOURAGEMENTS: [&str; 4] = [
    "Losses are tuition. This one stayed inside your plan.",
    "A controlled loss is a good trade with a bad outcome.",
    "Stopped out at plan. That is the system working.",
    "One trade never decides the account. On to the next setup.",
];

/// React to a just-closed trade. Breakeven and still-open trades get no
/// message.
pub fn exit_insight(
    trade: &Trade,
    outcome: Outcome,
    pnl: f64,
    rng: &mut impl Rng,
) -> Option<Insight> {
    let risk = trade.metrics.risk_amount;
    let actual_r = if risk > 0.0 { pnl / risk } else { 0.0 };

    match outcome {
        Outcome::Win if actual_r >= 2.0 => Some(Insight::with_confetti(
            InsightKind::StrongExecution,
            Severity::Success,
            format!("Closed at {actual_r:.1}R. Letting winners run is paying off."),
        )),
        Outcome::Win => Some(Insight::with_confetti(
            InsightKind::Winner,
            Severity::Success,
            "Winner booked. Keep taking the setups your plan gives you.".to_string(),
        )),
        Outcome::Loss if actual_r.abs() > 1.3 => Some(Insight::new(
            InsightKind::OversizedLoss,
            Severity::Warning,
            format!(
                "This loss ran to {:.1}R, past your planned 1R. Tighten the exit next time.",
                actual_r.abs()
            ),
        )),
        Outcome::Loss => {
            let template = ENCOURAGEMENTS[rng.gen_range(0..ENCOURAGEMENTS.len())];
            Some(Insight::new(
                InsightKind::Encouragement,
                Severity::Info,
                template.to_string(),
            ))
        }
        Outcome::Breakeven | Outcome::Open => None,
    }
}
