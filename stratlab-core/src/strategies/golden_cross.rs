//! Golden cross — fast/slow EMA cross.
//!
//! The EMA sibling of `ma_crossover`. Its grid deliberately emits the raw
//! cross product of both period axes and lets validation drop the
//! fast >= slow half — the optimizer tolerates sparse grids by design.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{hold_series, Bar, Signal};
use crate::indicators::{closes, ema};
use crate::optimizer::GridSearch;
use crate::strategy::{ComposedStrategy, ConfigError, SignalGenerator, StrategyConfig};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoldenCrossConfig {
    pub fast_period: usize,
    pub slow_period: usize,
}

impl Default for GoldenCrossConfig {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
        }
    }
}

impl fmt::Display for GoldenCrossConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "GoldenCross(fast={}, slow={})",
            self.fast_period, self.slow_period
        )
    }
}

impl StrategyConfig for GoldenCrossConfig {
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
pub struct GoldenCrossSignals;

impl SignalGenerator for GoldenCrossSignals {
    type Config = GoldenCrossConfig;

    fn generate(&self, bars: &[Bar], config: &GoldenCrossConfig) -> Vec<Signal> {
        let prices = closes(bars);
        let (Some(fast), Some(slow)) = (
            ema(&prices, config.fast_period),
            ema(&prices, config.slow_period),
        ) else {
            return hold_series(bars.len());
        };

        let mut signals = hold_series(bars.len());
        let mut in_position = false;

        for i in config.slow_period..bars.len() {
            let prev_fast = fast[i - 1];
            let prev_slow = slow[i - 1];

            if !in_position && prev_fast <= prev_slow && fast[i] > slow[i] {
                signals[i] = Signal::Buy;
                in_position = true;
            } else if in_position && prev_fast >= prev_slow && fast[i] < slow[i] {
                signals[i] = Signal::Sell;
                in_position = false;
            }
        }

        signals
    }
}

fn grid() -> Vec<GoldenCrossConfig> {
    let mut configs = Vec::new();
    // Full cross product; validation filters the fast >= slow half.
    for fast in (5..=60).step_by(5) {
        for slow in (20..=120).step_by(20) {
            configs.push(GoldenCrossConfig {
                fast_period: fast,
                slow_period: slow,
            });
        }
    }
    configs
}

pub fn strategy(
    slippage: Decimal,
) -> ComposedStrategy<GoldenCrossSignals, GridSearch<GoldenCrossConfig>> {
    ComposedStrategy::new(
        "golden_cross",
        GoldenCrossConfig::default(),
        GoldenCrossSignals,
        GridSearch::new(slippage, grid),
    )
}
