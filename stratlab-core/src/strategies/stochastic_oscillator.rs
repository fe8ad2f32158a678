//! Stochastic oscillator — %K/%D crossover with level confirmation.
//!
//! BUY when %K crosses above %D while both sit below the buy level
//! (oversold); SELL when %K crosses below %D while both sit above the sell
//! level (overbought).

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{hold_series, Bar, Signal};
use crate::indicators::stochastic;
use crate::optimizer::GridSearch;
use crate::strategy::{ComposedStrategy, ConfigError, SignalGenerator, StrategyConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StochasticConfig {
    pub k_period: usize,
    pub d_period: usize,
    pub buy_level: f64,
    pub sell_level: f64,
}

impl Default for StochasticConfig {
    fn default() -> Self {
        Self {
            k_period: 14,
            d_period: 3,
            buy_level: 20.0,
            sell_level: 80.0,
        }
    }
}

impl fmt::Display for StochasticConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Stochastic(k={}, d={}, buy={:.1}, sell={:.1})",
            self.k_period, self.d_period, self.buy_level, self.sell_level
        )
    }
}

impl StrategyConfig for StochasticConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.k_period == 0 || self.d_period == 0 {
            return Err(ConfigError::InvalidParameter(
                "periods must be positive".into(),
            ));
        }
        if self.buy_level >= self.sell_level {
            return Err(ConfigError::InvalidParameter(
                "buy level must be below sell level".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct StochasticSignals;

impl SignalGenerator for StochasticSignals {
    type Config = StochasticConfig;

    fn generate(&self, bars: &[Bar], config: &StochasticConfig) -> Vec<Signal> {
        let Some((k, d)) = stochastic(bars, config.k_period, config.d_period) else {
            return hold_series(bars.len());
        };

        let mut signals = hold_series(bars.len());
        let mut in_position = false;

        let start = (config.k_period + config.d_period - 1).max(1);
        for i in start..bars.len() {
            let crossed_up = k[i - 1] <= d[i - 1] && k[i] > d[i];
            let crossed_down = k[i - 1] >= d[i - 1] && k[i] < d[i];

            if !in_position
                && crossed_up
                && k[i] < config.buy_level
                && d[i] < config.buy_level
            {
                signals[i] = Signal::Buy;
                in_position = true;
            } else if in_position
                && crossed_down
                && k[i] > config.sell_level
                && d[i] > config.sell_level
            {
                signals[i] = Signal::Sell;
                in_position = false;
            }
        }

        signals
    }
}

fn grid() -> Vec<StochasticConfig> {
    let mut configs = Vec::new();
    for k_period in [10, 14, 18] {
        for d_period in [3, 5] {
            for buy in [15.0, 20.0, 25.0] {
                for sell in [75.0, 80.0, 85.0] {
                    configs.push(StochasticConfig {
                        k_period,
                        d_period,
                        buy_level: buy,
                        sell_level: sell,
                    });
                }
            }
        }
    }
    configs
}

pub fn strategy(
    slippage: Decimal,
) -> ComposedStrategy<StochasticSignals, GridSearch<StochasticConfig>> {
    ComposedStrategy::new(
        "stochastic_oscillator",
        StochasticConfig::default(),
        StochasticSignals,
        GridSearch::new(slippage, grid),
    )
}
