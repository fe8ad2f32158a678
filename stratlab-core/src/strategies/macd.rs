//! MACD — signal-line crossover.
//!
//! BUY when the MACD line crosses above its signal line, SELL when it
//! crosses back below.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{hold_series, Bar, Signal};
use crate::indicators::{self, closes};
use crate::optimizer::GridSearch;
use crate::strategy::{ComposedStrategy, ConfigError, SignalGenerator, StrategyConfig};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacdConfig {
    pub fast_period: usize,
    pub slow_period: usize,
    pub signal_period: usize,
}

impl Default for MacdConfig {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

impl fmt::Display for MacdConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Macd(fast={}, slow={}, signal={})",
            self.fast_period, self.slow_period, self.signal_period
        )
    }
}

impl StrategyConfig for MacdConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.fast_period == 0 || self.signal_period == 0 {
            return Err(ConfigError::InvalidParameter(
                "periods must be positive".into(),
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
pub struct MacdSignals;

impl SignalGenerator for MacdSignals {
    type Config = MacdConfig;

    fn generate(&self, bars: &[Bar], config: &MacdConfig) -> Vec<Signal> {
        let prices = closes(bars);
        let Some((line, signal_line, _histogram)) = indicators::macd(
            &prices,
            config.fast_period,
            config.slow_period,
            config.signal_period,
        ) else {
            return hold_series(bars.len());
        };

        let mut signals = hold_series(bars.len());
        let mut in_position = false;

        let start = config.slow_period + config.signal_period - 1;
        for i in start.max(1)..bars.len() {
            let crossed_up = line[i - 1] <= signal_line[i - 1] && line[i] > signal_line[i];
            let crossed_down = line[i - 1] >= signal_line[i - 1] && line[i] < signal_line[i];

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

fn grid() -> Vec<MacdConfig> {
    let mut configs = Vec::new();
    for fast in (8..=16).step_by(2) {
        for slow in (20..=32).step_by(4) {
            for signal in (6..=12).step_by(2) {
                if fast >= slow {
                    continue;
                }
                configs.push(MacdConfig {
                    fast_period: fast,
                    slow_period: slow,
                    signal_period: signal,
                });
            }
        }
    }
    configs
}

pub fn strategy(slippage: Decimal) -> ComposedStrategy<MacdSignals, GridSearch<MacdConfig>> {
    ComposedStrategy::new(
        "macd",
        MacdConfig::default(),
        MacdSignals,
        GridSearch::new(slippage, grid),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::testutil::make_bars;

    #[test]
    fn trend_reversal_fires_buy() {
        // Long decline, then a sustained rally: the MACD line crosses its
        // signal line from below somewhere in the rally.
        let mut prices: Vec<f64> = (0..40).map(|i| 200.0 - i as f64).collect();
        prices.extend((0..40).map(|i| 161.0 + 2.0 * i as f64));

        let bars = make_bars(&prices);
        let signals = MacdSignals.generate(&bars, &MacdConfig::default());
        assert!(signals.contains(&Signal::Buy));
    }

    #[test]
    fn short_series_is_all_hold() {
        let bars = make_bars(&[100.0; 10]);
        let signals = MacdSignals.generate(&bars, &MacdConfig::default());
        assert!(signals.iter().all(|s| *s == Signal::Hold));
    }

    #[test]
    fn grid_skips_inverted_periods() {
        assert!(grid().iter().all(|c| c.fast_period < c.slow_period));
    }
}
