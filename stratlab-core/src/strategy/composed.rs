//! Generic adapter from the typed strategy capabilities to the erased
//! `Strategy` interface.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::domain::{hold_series, Bar};

use super::{ConfigError, ConfigOptimizer, SignalGenerator, Strategy, StrategyConfig, StrategyRun};

/// A strategy assembled from independent parts: a default config, a pure
/// signal generator, and a swappable config optimizer.
///
/// The config type is fixed by the generator's associated type, so wiring a
/// generator to the wrong config family does not compile.
pub struct ComposedStrategy<G, O>
where
    G: SignalGenerator,
{
    name: &'static str,
    default_config: G::Config,
    generator: G,
    optimizer: O,
}

impl<G, O> ComposedStrategy<G, O>
where
    G: SignalGenerator,
    G::Config: Clone + Serialize + DeserializeOwned,
    O: ConfigOptimizer<G>,
{
    pub fn new(name: &'static str, default_config: G::Config, generator: G, optimizer: O) -> Self {
        Self {
            name,
            default_config,
            generator,
            optimizer,
        }
    }

    fn run_with(&self, bars: &[Bar], config: &G::Config) -> StrategyRun {
        let signals = if config.validate().is_ok() {
            self.generator.generate(bars, config)
        } else {
            hold_series(bars.len())
        };
        StrategyRun {
            signals,
            config_desc: config.to_string(),
            config_json: serde_json::to_value(config).unwrap_or(serde_json::Value::Null),
        }
    }
}

impl<G, O> Strategy for ComposedStrategy<G, O>
where
    G: SignalGenerator,
    G::Config: Clone + Serialize + DeserializeOwned,
    O: ConfigOptimizer<G>,
{
    fn name(&self) -> &str {
        self.name
    }

    fn optimize_and_generate(&self, bars: &[Bar]) -> StrategyRun {
        let chosen = self
            .optimizer
            .optimize(bars, &self.generator)
            .unwrap_or_else(|| self.default_config.clone());
        self.run_with(bars, &chosen)
    }

    fn generate_with_default(&self, bars: &[Bar]) -> StrategyRun {
        self.run_with(bars, &self.default_config)
    }

    fn generate_with_raw(
        &self,
        bars: &[Bar],
        raw: &serde_json::Value,
    ) -> Result<StrategyRun, ConfigError> {
        let config: G::Config = serde_json::from_value(raw.clone())?;
        Ok(self.run_with(bars, &config))
    }
}
