//! CCI oscillator — oversold/overbought levels with price confirmation.
//!
//! BUY when CCI reaches the oversold level and the close is not still
//! falling; SELL when CCI reaches the overbought level and the close is not
//! still rising.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{hold_series, Bar, Signal};
use crate::indicators::cci;
use crate::optimizer::GridSearch;
use crate::strategy::{ComposedStrategy, ConfigError, SignalGenerator, StrategyConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CciConfig {
    pub period: usize,
    pub buy_level: f64,
    pub sell_level: f64,
}

impl Default for CciConfig {
    fn default() -> Self {
        Self {
            period: 20,
            buy_level: -100.0,
            sell_level: 100.0,
        }
    }
}

impl fmt::Display for CciConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cci(period={}, buy={:.1}, sell={:.1})",
            self.period, self.buy_level, self.sell_level
        )
    }
}

impl StrategyConfig for CciConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.period < 2 {
            return Err(ConfigError::InvalidParameter(
                "period must be at least 2".into(),
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
pub struct CciSignals;

impl SignalGenerator for CciSignals {
    type Config = CciConfig;

    fn generate(&self, bars: &[Bar], config: &CciConfig) -> Vec<Signal> {
        let Some(values) = cci(bars, config.period) else {
            return hold_series(bars.len());
        };

        let mut signals = hold_series(bars.len());
        let mut in_position = false;

        for i in config.period..bars.len() {
            let value = values[i];
            let rising = bars[i].close >= bars[i - 1].close;
            let falling = bars[i].close <= bars[i - 1].close;

            if !in_position && value <= config.buy_level && rising {
                signals[i] = Signal::Buy;
                in_position = true;
            } else if in_position && value >= config.sell_level && falling {
                signals[i] = Signal::Sell;
                in_position = false;
            }
        }

        signals
    }
}

fn grid() -> Vec<CciConfig> {
    let mut configs = Vec::new();
    for period in [10, 14, 20, 30] {
        for buy in [-150.0, -100.0, -80.0] {
            for sell in [80.0, 100.0, 150.0] {
                configs.push(CciConfig {
                    period,
                    buy_level: buy,
                    sell_level: sell,
                });
            }
        }
    }
    configs
}

pub fn strategy(slippage: Decimal) -> ComposedStrategy<CciSignals, GridSearch<CciConfig>> {
    ComposedStrategy::new(
        "cci_oscillator",
        CciConfig::default(),
        CciSignals,
        GridSearch::new(slippage, grid),
    )
}
