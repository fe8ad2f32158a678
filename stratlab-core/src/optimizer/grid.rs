//! Exhaustive grid search over an enumerated candidate list.

use rust_decimal::Decimal;

use crate::domain::Bar;
use crate::strategy::{ConfigOptimizer, SignalGenerator, StrategyConfig};

use super::best_by_profit;

/// Generic grid-search optimizer.
///
/// The candidate list comes from a caller-supplied enumeration closure —
/// cross-joining parameter axes into the full Cartesian product is each
/// plug-in's responsibility, and the optimizer only ever sees the flat list.
/// Candidates failing validation are excluded without error; the survivors
/// are evaluated concurrently and the highest-profit config wins, with ties
/// resolved to the first candidate in enumeration order.
pub struct GridSearch<C> {
    slippage: Decimal,
    candidates: Box<dyn Fn() -> Vec<C> + Send + Sync>,
}

impl<C: StrategyConfig> GridSearch<C> {
    pub fn new(
        slippage: Decimal,
        candidates: impl Fn() -> Vec<C> + Send + Sync + 'static,
    ) -> Self {
        Self {
            slippage,
            candidates: Box::new(candidates),
        }
    }
}

impl<G> ConfigOptimizer<G> for GridSearch<G::Config>
where
    G: SignalGenerator,
    G::Config: Clone + Send + Sync,
{
    fn optimize(&self, bars: &[Bar], generator: &G) -> Option<G::Config> {
        best_by_profit(bars, generator, self.slippage, (self.candidates)())
    }
}
