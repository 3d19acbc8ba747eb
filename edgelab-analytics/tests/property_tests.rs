//! Property tests for analytics invariants.
//!
//! Uses proptest to verify:
//! 1. Bounded rates — win rate stays in [0, 100], outcome counts add up
//! 2. Finiteness — no summary field is ever NaN or infinite
//! 3. Idempotence — the same journal always produces a bit-identical summary
//! 4. Weekday frame — always exactly seven rows, Sunday through Saturday
//! 5. Partition — breakdown rows jointly account for every trade
//! 6. Cache keys — stable per journal, distinct per window

use chrono::{Duration, NaiveDate};
use edgelab_analytics::{calculate_all_stats, calculate_breakdown, view_key, Window};
use edgelab_core::domain::{Outcome, Side, Trade, TradeId, TradeMetrics};
use edgelab_core::risk::score_trade;
use proptest::prelude::*;

// ── Strategies (proptest) ────────────────────────────────────────────

type SetupParts = (f64, f64, Option<f64>, f64);
type ResultParts = (Side, Outcome, f64);
type TagParts = (Option<String>, Option<String>, String);

fn arb_price() -> impl Strategy<Value = f64> {
    (10.0..500.0_f64).prop_map(|p| (p * 100.0).round() / 100.0)
}

fn arb_quantity() -> impl Strategy<Value = f64> {
    (1.0..1000.0_f64).prop_map(|q| (q * 100.0).round() / 100.0)
}

fn arb_side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Long), Just(Side::Short)]
}

fn arb_outcome() -> impl Strategy<Value = Outcome> {
    prop_oneof![
        Just(Outcome::Win),
        Just(Outcome::Loss),
        Just(Outcome::Breakeven),
        Just(Outcome::Open),
    ]
}

fn arb_setup() -> impl Strategy<Value = SetupParts> {
    (
        arb_price(),
        1.0..20.0_f64,
        prop::option::of(1.0..50.0_f64),
        arb_quantity(),
    )
}

fn arb_result() -> impl Strategy<Value = ResultParts> {
    (arb_side(), arb_outcome(), -1000.0..1000.0_f64)
}

fn arb_tags() -> impl Strategy<Value = TagParts> {
    (
        prop::option::of(prop_oneof![
            Just("Breakout".to_string()),
            Just("Pullback".to_string()),
            Just("News".to_string()),
        ]),
        prop::option::of(prop_oneof![
            Just("London".to_string()),
            Just("NY".to_string()),
        ]),
        prop_oneof![
            Just("ES".to_string()),
            Just("NQ".to_string()),
            Just("CL".to_string()),
        ],
    )
}

fn build_trade(seq: usize, setup: SetupParts, result: ResultParts, tags: TagParts) -> Trade {
    let (entry, stop_offset, target_offset, quantity) = setup;
    let (side, outcome, pnl) = result;
    let (strategy, session, symbol) = tags;

    let stop = match side {
        Side::Long => entry - stop_offset,
        Side::Short => entry + stop_offset,
    };
    let take_profit = target_offset.map(|off| match side {
        Side::Long => entry + off,
        Side::Short => entry - off,
    });
    let open_at = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(9, 30, 0)
        .unwrap()
        + Duration::days(seq as i64);
    let closed = outcome != Outcome::Open;

    let mut trade = Trade {
        id: TradeId::new(format!("prop-{seq}")),
        symbol,
        multiplier: 1.0,
        side,
        entry_price: Some(entry),
        stop_price: Some(stop),
        take_profit_price: take_profit,
        exit_price: if closed { take_profit.or(Some(entry)) } else { None },
        quantity,
        fees: 0.0,
        open_at,
        close_at: if closed {
            Some(open_at + Duration::hours(3))
        } else {
            None
        },
        outcome,
        pnl: if closed { Some(pnl) } else { None },
        strategy,
        session,
        tags: Vec::new(),
        metrics: TradeMetrics::default(),
    };
    trade.metrics = score_trade(&trade, Some(100.0));
    trade
}

fn arb_journal() -> impl Strategy<Value = Vec<Trade>> {
    prop::collection::vec((arb_setup(), arb_result(), arb_tags()), 0..40).prop_map(|parts| {
        parts
            .into_iter()
            .enumerate()
            .map(|(seq, (setup, result, tags))| build_trade(seq, setup, result, tags))
            .collect()
    })
}

// ── 1. Bounded rates ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn win_rate_bounded_and_counts_consistent(journal in arb_journal()) {
        let summary = calculate_all_stats(&journal);
        prop_assert!((0.0..=100.0).contains(&summary.win_rate));
        prop_assert!(summary.wins + summary.losses + summary.breakeven <= summary.total_trades);
        prop_assert_eq!(summary.total_trades, journal.len());
    }

    // ── 2. Finiteness ──

    #[test]
    fn every_summary_field_is_finite(journal in arb_journal()) {
        let s = calculate_all_stats(&journal);
        let fields = [
            s.win_rate,
            s.total_r,
            s.avg_r,
            s.avg_win_r,
            s.avg_loss_r,
            s.avg_rr,
            s.expectancy,
            s.largest_win_r,
            s.largest_loss_r,
            s.net_pnl,
            s.profit_factor,
            s.max_drawdown_r,
            s.std_dev_r,
            s.sharpe_ratio,
            s.sortino_ratio,
            s.consistency,
            s.avg_trade_duration_hours,
        ];
        for value in fields {
            prop_assert!(value.is_finite());
        }
    }

    // ── 3. Idempotence ──

    #[test]
    fn summaries_are_idempotent(journal in arb_journal()) {
        prop_assert_eq!(calculate_all_stats(&journal), calculate_all_stats(&journal));
    }

    #[test]
    fn breakdowns_are_idempotent(journal in arb_journal()) {
        prop_assert_eq!(calculate_breakdown(&journal), calculate_breakdown(&journal));
    }

    // ── 4. Weekday frame ──

    #[test]
    fn weekday_frame_is_fixed(journal in arb_journal()) {
        let rows = calculate_breakdown(&journal).by_weekday;
        prop_assert_eq!(rows.len(), 7);
        prop_assert_eq!(rows[0].label.as_str(), "Sunday");
        prop_assert_eq!(rows[6].label.as_str(), "Saturday");
    }

    // ── 5. Partition ──

    #[test]
    fn breakdown_rows_account_for_every_trade(journal in arb_journal()) {
        let breakdown = calculate_breakdown(&journal);
        for rows in [
            &breakdown.by_strategy,
            &breakdown.by_asset,
            &breakdown.by_session,
            &breakdown.by_weekday,
            &breakdown.by_direction,
        ] {
            let counted: usize = rows.iter().map(|row| row.stats.total_trades).sum();
            prop_assert_eq!(counted, journal.len());
        }
    }

    #[test]
    fn drawdown_never_negative(journal in arb_journal()) {
        prop_assert!(calculate_all_stats(&journal).max_drawdown_r >= 0.0);
    }

    // ── 6. Cache keys ──

    #[test]
    fn view_keys_stable_per_journal_distinct_per_window(journal in arb_journal()) {
        prop_assert_eq!(
            view_key(&journal, Window::Days7),
            view_key(&journal, Window::Days7)
        );
        prop_assert_ne!(
            view_key(&journal, Window::Days7),
            view_key(&journal, Window::Days30)
        );
    }
}
