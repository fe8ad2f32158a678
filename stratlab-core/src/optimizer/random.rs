//! Seeded random search — an alternative `ConfigOptimizer`.
//!
//! Draws a fixed number of candidates from a sampler closure instead of
//! enumerating a full Cartesian product. Useful when a grid would be too
//! large to sweep exhaustively. Deterministic for a given seed.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rust_decimal::Decimal;

use crate::domain::Bar;
use crate::strategy::{ConfigOptimizer, SignalGenerator, StrategyConfig};

use super::best_by_profit;

pub struct RandomSearch<C> {
    slippage: Decimal,
    samples: usize,
    seed: u64,
    sampler: Box<dyn Fn(&mut StdRng) -> C + Send + Sync>,
}

impl<C: StrategyConfig> RandomSearch<C> {
    pub fn new(
        slippage: Decimal,
        samples: usize,
        seed: u64,
        sampler: impl Fn(&mut StdRng) -> C + Send + Sync + 'static,
    ) -> Self {
        Self {
            slippage,
            samples,
            seed,
            sampler: Box::new(sampler),
        }
    }
}

impl<G> ConfigOptimizer<G> for RandomSearch<G::Config>
where
    G: SignalGenerator,
    G::Config: Clone + Send + Sync,
{
    fn optimize(&self, bars: &[Bar], generator: &G) -> Option<G::Config> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        let candidates: Vec<G::Config> = (0..self.samples)
            .map(|_| (self.sampler)(&mut rng))
            .collect();
        best_by_profit(bars, generator, self.slippage, candidates)
    }
}
