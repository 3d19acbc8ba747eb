//! Setup-quality feedback at entry time.
//!
//! Judged entirely from the plan (entry, stop, target, size, fees) plus the
//! trader's historical summary. Nothing here looks at the eventual outcome.

use super::{Insight, InsightKind, Severity};
use crate::stats::{breakeven_win_rate, StatSummary};
use chrono::{NaiveDateTime, Timelike};
use edgelab_core::domain::Trade;
use edgelab_core::risk::planned_rr;

/// Grade a freshly planned trade. Returns `None` when entry, stop or target
/// is missing, or when no rule has anything to say.
pub fn entry_insight(trade: &Trade, history: &StatSummary, now: NaiveDateTime) -> Option<Insight> {
    let (entry, stop) = match (trade.entry_price, trade.stop_price) {
        (Some(e), Some(s)) => (e, s),
        _ => return None,
    };
    trade.take_profit_price?;

    let rr = planned_rr(trade);
    // Metrics may not be scored yet at entry time, so size the risk from the
    // plan fields directly.
    let risk_amount = (entry - stop).abs() * trade.quantity * trade.multiplier;

    if rr >= 3.0 {
        return Some(Insight::new(
            InsightKind::ExceptionalRiskReward,
            Severity::Success,
            format!(
                "Exceptional {:.1}:1 reward-to-risk. A setup like this only needs a {:.0}% win rate to break even.",
                rr,
                breakeven_win_rate(rr)
            ),
        ));
    }
    if (2.0..3.0).contains(&rr) {
        return Some(Insight::new(
            InsightKind::GreatRiskReward,
            Severity::Success,
            format!(
                "Great {:.1}:1 reward-to-risk. Anything above a {:.0}% win rate keeps this profitable.",
                rr,
                breakeven_win_rate(rr)
            ),
        ));
    }
    if rr > 0.0 && rr < 1.5 {
        return Some(Insight::new(
            InsightKind::LowRiskReward,
            Severity::Warning,
            format!(
                "Low {:.1}:1 reward-to-risk. You need a {:.0}% win rate just to break even on setups like this.",
                rr,
                breakeven_win_rate(rr)
            ),
        ));
    }
    if risk_amount > 1000.0 {
        return Some(Insight::new(
            InsightKind::LargePosition,
            Severity::Warning,
            format!(
                "This trade risks {risk_amount:.0}. Make sure that size is intentional."
            ),
        ));
    }
    if rr > history.avg_rr {
        return Some(Insight::new(
            InsightKind::ImprovedSetup,
            Severity::Success,
            format!(
                "This {:.1}:1 setup beats your {:.1}:1 historical average. Good selection.",
                rr, history.avg_rr
            ),
        ));
    }
    if (9..=11).contains(&now.hour()) {
        return Some(Insight::new(
            InsightKind::MorningSession,
            Severity::Info,
            "Morning session entry. Check your session breakdown to see how this window treats you."
                .to_string(),
        ));
    }
    if risk_amount > 0.0 && trade.fees > 0.1 * risk_amount {
        return Some(Insight::new(
            InsightKind::HighFees,
            Severity::Warning,
            format!(
                "Fees take {:.0}% of the risk on this trade. Watch costs relative to size.",
                trade.fees / risk_amount * 100.0
            ),
        ));
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use edgelab_core::domain::{Outcome, Side, TradeId, TradeMetrics};

    fn at_hour(hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 6)
            .unwrap()
            .and_hms_opt(hour, 15, 0)
            .unwrap()
    }

    fn planned(entry: f64, stop: f64, target: Option<f64>, qty: f64, fees: f64) -> Trade {
        Trade {
            id: TradeId::new("entry-test"),
            symbol: "ES".into(),
            multiplier: 1.0,
            side: Side::Long,
            entry_price: Some(entry),
            stop_price: Some(stop),
            take_profit_price: target,
            exit_price: None,
            quantity: qty,
            fees,
            open_at: at_hour(14),
            close_at: None,
            outcome: Outcome::Open,
            pnl: None,
            strategy: None,
            session: None,
            tags: Vec::new(),
            metrics: TradeMetrics::default(),
        }
    }

    fn history_with_avg_rr(avg_rr: f64) -> StatSummary {
        StatSummary {
            total_trades: 10,
            avg_rr,
            ..StatSummary::default()
        }
    }

    // ── Prerequisites ──

    #[test]
    fn missing_target_yields_none() {
        let trade = planned(100.0, 95.0, None, 10.0, 0.0);
        assert!(entry_insight(&trade, &history_with_avg_rr(2.0), at_hour(14)).is_none());
    }

    // ── Ratio rules ──

    #[test]
    fn exceptional_at_three_to_one() {
        let trade = planned(100.0, 95.0, Some(115.0), 10.0, 0.0);
        let insight = entry_insight(&trade, &history_with_avg_rr(2.0), at_hour(14)).unwrap();
        assert_eq!(insight.kind, InsightKind::ExceptionalRiskReward);
        assert_eq!(insight.severity, Severity::Success);
        // breakeven_win_rate(3) = 25
        assert!(insight.message.contains("25%"));
    }

    #[test]
    fn great_between_two_and_three() {
        let trade = planned(100.0, 95.0, Some(110.0), 10.0, 0.0);
        let insight = entry_insight(&trade, &history_with_avg_rr(3.0), at_hour(14)).unwrap();
        assert_eq!(insight.kind, InsightKind::GreatRiskReward);
    }

    #[test]
    fn low_ratio_warns() {
        let trade = planned(100.0, 95.0, Some(105.0), 10.0, 0.0);
        let insight = entry_insight(&trade, &history_with_avg_rr(2.0), at_hour(14)).unwrap();
        assert_eq!(insight.kind, InsightKind::LowRiskReward);
        assert_eq!(insight.severity, Severity::Warning);
        // breakeven_win_rate(1) = 50
        assert!(insight.message.contains("50%"));
    }

    // ── Priority ──

    #[test]
    fn ratio_rule_outranks_position_size() {
        // rr = 3.5 and a 17500 risk: the ratio rule still wins
        let trade = planned(100.0, 95.0, Some(117.5), 3500.0, 0.0);
        let insight = entry_insight(&trade, &history_with_avg_rr(1.0), at_hour(10)).unwrap();
        assert_eq!(insight.kind, InsightKind::ExceptionalRiskReward);
    }

    // ── Size, history, session, fees ──

    #[test]
    fn large_position_fires_in_the_ratio_gap() {
        // rr = 1.8 dodges all three ratio rules; risk 1800 exceeds the cap
        let trade = planned(100.0, 99.0, Some(101.8), 1800.0, 0.0);
        let insight = entry_insight(&trade, &history_with_avg_rr(2.0), at_hour(14)).unwrap();
        assert_eq!(insight.kind, InsightKind::LargePosition);
    }

    #[test]
    fn improved_setup_beats_history() {
        let trade = planned(100.0, 99.0, Some(101.8), 10.0, 0.0);
        let insight = entry_insight(&trade, &history_with_avg_rr(1.5), at_hour(14)).unwrap();
        assert_eq!(insight.kind, InsightKind::ImprovedSetup);
        assert!(insight.message.contains("1.8:1"));
    }

    #[test]
    fn morning_session_noted() {
        let trade = planned(100.0, 99.0, Some(101.8), 10.0, 0.0);
        let insight = entry_insight(&trade, &history_with_avg_rr(2.0), at_hour(10)).unwrap();
        assert_eq!(insight.kind, InsightKind::MorningSession);
        assert_eq!(insight.severity, Severity::Info);
    }

    #[test]
    fn high_fees_flagged() {
        // Risk 200, fees 30 → 15% of risk
        let trade = planned(100.0, 98.0, Some(103.6), 100.0, 30.0);
        let insight = entry_insight(&trade, &history_with_avg_rr(2.0), at_hour(14)).unwrap();
        assert_eq!(insight.kind, InsightKind::HighFees);
        assert!(insight.message.contains("15%"));
    }

    #[test]
    fn unremarkable_setup_yields_none() {
        let trade = planned(100.0, 99.0, Some(101.8), 10.0, 0.0);
        assert!(entry_insight(&trade, &history_with_avg_rr(2.0), at_hour(14)).is_none());
    }

    #[test]
    fn zero_distance_stop_skips_ratio_rules() {
        // entry == stop: rr is 0, no ratio rule or size rule applies
        let trade = planned(100.0, 100.0, Some(105.0), 10.0, 0.0);
        assert!(entry_insight(&trade, &history_with_avg_rr(2.0), at_hour(14)).is_none());
    }
}
