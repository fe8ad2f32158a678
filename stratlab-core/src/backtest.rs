//! Single-position trade simulator.
//!
//! Pure function of `(bars, signals, slippage)`: no hidden state, no I/O,
//! bit-identical results on repeated calls. That purity is what makes the
//! parallel grid search safe — evaluations share nothing but the read-only
//! bar series.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::domain::{Bar, Signal};

/// Notional starting cash for every simulation.
pub const INITIAL_CASH: Decimal = dec!(10000);

/// Outcome of one simulation pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BacktestSummary {
    /// Fractional return: `(final_portfolio - INITIAL_CASH) / INITIAL_CASH`.
    pub total_return: Decimal,
    /// Number of executed orders. Each executed BUY and each executed SELL
    /// counts as one; ignored signals never increment.
    pub trade_count: usize,
    /// Mark-to-market value after the last bar.
    pub final_portfolio: Decimal,
    /// Portfolio value curve: the initial cash entry followed by one
    /// mark-to-market value per bar, recorded unconditionally.
    pub portfolio_curve: Vec<Decimal>,
}

/// Run the simulator over an aligned bar/signal series.
///
/// Position model: one long-only position, all-in/all-out.
/// - BUY while flat converts 100% of cash into units at `close + slippage`.
/// - SELL while holding converts 100% of holdings back at `close - slippage`.
/// - HOLD, BUY while holding, and SELL while flat are no-ops.
///
/// An empty series returns the initial state with zero trades.
///
/// # Panics
///
/// Panics when `bars.len() != signals.len()`. The mismatch indicates a bug in
/// a signal generator, so it aborts the run instead of surfacing as an error
/// value.
pub fn backtest(bars: &[Bar], signals: &[Signal], slippage: Decimal) -> BacktestSummary {
    assert_eq!(
        bars.len(),
        signals.len(),
        "bars/signals length mismatch: {} bars vs {} signals",
        bars.len(),
        signals.len(),
    );

    let mut cash = INITIAL_CASH;
    let mut holdings = Decimal::ZERO;
    let mut trade_count = 0usize;

    let mut portfolio_curve = Vec::with_capacity(bars.len() + 1);
    portfolio_curve.push(cash);

    for (bar, signal) in bars.iter().zip(signals) {
        let price = bar.close;

        match signal {
            Signal::Buy => {
                if holdings.is_zero() && cash > Decimal::ZERO {
                    let effective = price + slippage;
                    // A non-positive effective price would mean buying at or
                    // below zero; skip rather than divide by it.
                    if effective > Decimal::ZERO {
                        holdings = cash / effective;
                        cash = Decimal::ZERO;
                        trade_count += 1;
                    }
                }
            }
            Signal::Sell => {
                if holdings > Decimal::ZERO {
                    cash = holdings * (price - slippage);
                    holdings = Decimal::ZERO;
                    trade_count += 1;
                }
            }
            Signal::Hold => {}
        }

        portfolio_curve.push(cash + holdings * price);
    }

    let final_portfolio = match bars.last() {
        Some(last) => cash + holdings * last.close,
        None => cash,
    };
    let total_return = (final_portfolio - INITIAL_CASH) / INITIAL_CASH;

    BacktestSummary {
        total_return,
        trade_count,
        final_portfolio,
        portfolio_curve,
    }
}
