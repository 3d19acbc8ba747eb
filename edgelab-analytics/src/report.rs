//! Plain-text performance report.

use crate::stats::StatSummary;
use crate::trend::TrendComparison;

/// Render a summary as a markdown block for journaling surfaces.
pub fn render_summary(stats: &StatSummary) -> String {
    let mut report = format!(
        "# Performance Summary\n\n\
## Record\n\
- Trades: {} ({} W / {} L / {} BE)\n\
- Win Rate: {:.1}%\n\
- Net PnL: {:+.2}\n\
- Profit Factor: {:.2}\n",
        stats.total_trades,
        stats.wins,
        stats.losses,
        stats.breakeven,
        stats.win_rate,
        stats.net_pnl,
        stats.profit_factor
    );

    report.push_str(&format!(
        "\n## R Profile\n\
- Total R: {:+.2}\n\
- Avg R: {:+.2}\n\
- Avg Win / Avg Loss: {:.2}R / {:.2}R ({:.2}:1)\n\
- Expectancy: {:+.2}R\n\
- Largest Win / Loss: {:+.2}R / {:+.2}R\n\
- Max Drawdown: {:.2}R\n",
        stats.total_r,
        stats.avg_r,
        stats.avg_win_r,
        stats.avg_loss_r,
        stats.avg_rr,
        stats.expectancy,
        stats.largest_win_r,
        stats.largest_loss_r,
        stats.max_drawdown_r
    ));

    report.push_str(&format!(
        "\n## Discipline\n\
- Sharpe: {:.2}\n\
- Sortino: {:.2}\n\
- Consistency: {:.0}\n\
- Longest Win / Loss Streak: {} / {}\n\
- Hit 1R: {} | Closed Early: {}\n\
- Avg Duration: {:.1}h\n",
        stats.sharpe_ratio,
        stats.sortino_ratio,
        stats.consistency,
        stats.max_consecutive_wins,
        stats.max_consecutive_losses,
        stats.trades_hitting_1r,
        stats.prematurely_closed,
        stats.avg_trade_duration_hours
    ));

    report
}

/// Render a window comparison: current block, previous block, deltas.
pub fn render_trend(cmp: &TrendComparison) -> String {
    let mut report = format!("# Trend ({})\n\n", cmp.window.tag());

    report.push_str("| Metric | Current | Previous | Change |\n");
    report.push_str("|--------|---------|----------|--------|\n");
    report.push_str(&format!(
        "| Win Rate | {:.1}% | {:.1}% | {:+.1}pp |\n",
        cmp.current.win_rate, cmp.previous.win_rate, cmp.changes.win_rate
    ));
    report.push_str(&format!(
        "| Net PnL | {:+.2} | {:+.2} | {:+.2} |\n",
        cmp.current.net_pnl, cmp.previous.net_pnl, cmp.changes.net_pnl
    ));
    report.push_str(&format!(
        "| Avg R | {:+.2} | {:+.2} | {:+.2} |\n",
        cmp.current.avg_r, cmp.previous.avg_r, cmp.changes.avg_r
    ));
    report.push_str(&format!(
        "| Trades | {} | {} | {:+} |\n",
        cmp.current.total_trades,
        cmp.previous.total_trades,
        cmp.current.total_trades as i64 - cmp.previous.total_trades as i64
    ));

    report
}
