//! Moving-average crossover — fast/slow SMA cross.
//!
//! BUY when the fast average crosses above the slow one, SELL when it
//! crosses back below. One long position at a time.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{hold_series, Bar, Signal};
use crate::indicators::{closes, sma};
use crate::optimizer::GridSearch;
use crate::strategy::{ComposedStrategy, ConfigError, SignalGenerator, StrategyConfig};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaCrossoverConfig {
    pub fast_period: usize,
    pub slow_period: usize,
}

impl Default for MaCrossoverConfig {
    fn default() -> Self {
        Self {
            fast_period: 10,
            slow_period: 30,
        }
    }
}

impl fmt::Display for MaCrossoverConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "MaCrossover(fast={}, slow={})",
            self.fast_period, self.slow_period
        )
    }
}

impl StrategyConfig for MaCrossoverConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.fast_period == 0 {
            return Err(ConfigError::InvalidParameter(
                "fast period must be positive".into(),
            ));
        }
        if self.fast_period >= self.slow_period {
            return Err(ConfigError::InvalidParameter(
                "fast period must be less than slow period".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MaCrossoverSignals;

impl SignalGenerator for MaCrossoverSignals {
    type Config = MaCrossoverConfig;

    fn generate(&self, bars: &[Bar], config: &MaCrossoverConfig) -> Vec<Signal> {
        let prices = closes(bars);
        let (Some(fast), Some(slow)) = (
            sma(&prices, config.fast_period),
            sma(&prices, config.slow_period),
        ) else {
            return hold_series(bars.len());
        };

        let mut signals = hold_series(bars.len());
        let mut in_position = false;

        for i in config.slow_period..bars.len() {
            let crossed_up = fast[i - 1] <= slow[i - 1] && fast[i] > slow[i];
            let crossed_down = fast[i - 1] >= slow[i - 1] && fast[i] < slow[i];

            if !in_position && crossed_up {
                signals[i] = Signal::Buy;
                in_position = true;
            } else if in_position && crossed_down {
                signals[i] = Signal::Sell;
                in_position = false;
            }
        }

        signals
    }
}

fn grid() -> Vec<MaCrossoverConfig> {
    let mut configs = Vec::new();
    for fast in (5..=20).step_by(5) {
        for slow in (20..=60).step_by(10) {
            if fast < slow {
                configs.push(MaCrossoverConfig {
                    fast_period: fast,
                    slow_period: slow,
                });
            }
        }
    }
    configs
}

pub fn strategy(
    slippage: Decimal,
) -> ComposedStrategy<MaCrossoverSignals, GridSearch<MaCrossoverConfig>> {
    ComposedStrategy::new(
        "ma_crossover",
        MaCrossoverConfig::default(),
        MaCrossoverSignals,
        GridSearch::new(slippage, grid),
    )
}
