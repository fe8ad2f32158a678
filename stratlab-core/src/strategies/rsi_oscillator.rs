//! RSI oscillator — mean-reversion on overbought/oversold levels.
//!
//! BUY when RSI drops below the oversold threshold, SELL when it rises above
//! the overbought threshold; the position is held until the opposite signal.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{hold_series, Bar, Signal};
use crate::indicators::{closes, rsi};
use crate::optimizer::GridSearch;
use crate::strategy::{ComposedStrategy, ConfigError, SignalGenerator, StrategyConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RsiConfig {
    pub period: usize,
    pub buy_threshold: f64,
    pub sell_threshold: f64,
}

impl Default for RsiConfig {
    fn default() -> Self {
        Self {
            period: 14,
            buy_threshold: 30.0,
            sell_threshold: 70.0,
        }
    }
}

impl fmt::Display for RsiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Rsi(period={}, buy={:.1}, sell={:.1})",
            self.period, self.buy_threshold, self.sell_threshold
        )
    }
}

impl StrategyConfig for RsiConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.period == 0 {
            return Err(ConfigError::InvalidParameter(
                "period must be positive".into(),
            ));
        }
        if self.buy_threshold >= self.sell_threshold {
            return Err(ConfigError::InvalidParameter(
                "buy threshold must be below sell threshold".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct RsiSignals;

impl SignalGenerator for RsiSignals {
    type Config = RsiConfig;

    fn generate(&self, bars: &[Bar], config: &RsiConfig) -> Vec<Signal> {
        let prices = closes(bars);
        let Some(values) = rsi(&prices, config.period) else {
            return hold_series(bars.len());
        };

        let mut signals = hold_series(bars.len());
        let mut in_position = false;

        for i in config.period..bars.len() {
            let value = values[i];

            if !in_position && value < config.buy_threshold {
                signals[i] = Signal::Buy;
                in_position = true;
            } else if in_position && value > config.sell_threshold {
                signals[i] = Signal::Sell;
                in_position = false;
            }
        }

        signals
    }
}

fn grid() -> Vec<RsiConfig> {
    let mut configs = Vec::new();
    for period in (10..=20).step_by(2) {
        for buy in [20.0, 25.0, 30.0, 35.0] {
            for sell in [65.0, 70.0, 75.0, 80.0] {
                configs.push(RsiConfig {
                    period,
                    buy_threshold: buy,
                    sell_threshold: sell,
                });
            }
        }
    }
    configs
}

pub fn strategy(slippage: Decimal) -> ComposedStrategy<RsiSignals, GridSearch<RsiConfig>> {
    ComposedStrategy::new(
        "rsi_oscillator",
        RsiConfig::default(),
        RsiSignals,
        GridSearch::new(slippage, grid),
    )
}
