//! Config-space search strategies.
//!
//! `GridSearch` is the default: exhaustive parallel evaluation of an
//! enumerated candidate list. `RandomSearch` demonstrates that the
//! `ConfigOptimizer` seam hosts alternative searches without touching any
//! plug-in.

pub mod grid;
pub mod random;

pub use grid::GridSearch;
pub use random::RandomSearch;

use rayon::prelude::*;
use rust_decimal::Decimal;

use crate::backtest::backtest;
use crate::domain::Bar;
use crate::strategy::{SignalGenerator, StrategyConfig};

/// Score every candidate in parallel and return the profit-maximizing one.
///
/// Invalid candidates are silently excluded — sparse grids from nested range
/// generators routinely produce them. Evaluations are independent: each runs
/// generate-then-backtest against the shared read-only bar series and nothing
/// else. Ties resolve to the first-encountered maximum in candidate order,
/// which is stable because the scored vector preserves enumeration order.
///
/// Returns `None` when no candidate survives validation.
pub(crate) fn best_by_profit<G>(
    bars: &[Bar],
    generator: &G,
    slippage: Decimal,
    candidates: Vec<G::Config>,
) -> Option<G::Config>
where
    G: SignalGenerator,
    G::Config: Clone + Send + Sync,
{
    let valid: Vec<G::Config> = candidates
        .into_iter()
        .filter(|candidate| candidate.validate().is_ok())
        .collect();
    if valid.is_empty() {
        return None;
    }

    let profits: Vec<Decimal> = valid
        .par_iter()
        .map(|candidate| {
            let signals = generator.generate(bars, candidate);
            backtest(bars, &signals, slippage).total_return
        })
        .collect();

    let mut best = 0;
    for (i, profit) in profits.iter().enumerate().skip(1) {
        if *profit > profits[best] {
            best = i;
        }
    }

    valid.into_iter().nth(best)
}
