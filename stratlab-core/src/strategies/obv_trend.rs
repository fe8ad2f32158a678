//! OBV trend — volume-flow thrusts with price confirmation.
//!
//! BUY when the one-bar OBV delta exceeds its average magnitude by the
//! configured multiplier while the close is rising. SELL on a strong OBV
//! drop, a sharp price drop, or a falling close that OBV fails to confirm.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{hold_series, Bar, Signal};
use crate::indicators::{obv, sma};
use crate::optimizer::GridSearch;
use crate::strategy::{ComposedStrategy, ConfigError, SignalGenerator, StrategyConfig};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObvTrendConfig {
    /// Averaging window for the OBV delta magnitude.
    pub period: usize,
    /// Entry threshold: delta must exceed `multiplier * avg_abs_delta`.
    pub multiplier: f64,
    /// Exit threshold on the downside, as a multiple of the average magnitude.
    pub drop_multiplier: f64,
    /// Exit on a one-bar price drop of at least this fraction.
    pub price_drop_threshold: f64,
}

impl Default for ObvTrendConfig {
    fn default() -> Self {
        Self {
            period: 20,
            multiplier: 1.5,
            drop_multiplier: 1.5,
            price_drop_threshold: 0.02,
        }
    }
}

impl fmt::Display for ObvTrendConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ObvTrend(period={}, mult={:.2}, drop={:.2}, price_drop={:.3})",
            self.period, self.multiplier, self.drop_multiplier, self.price_drop_threshold
        )
    }
}

impl StrategyConfig for ObvTrendConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.period == 0 {
            return Err(ConfigError::InvalidParameter(
                "period must be positive".into(),
            ));
        }
        if self.multiplier <= 0.0 || self.drop_multiplier <= 0.0 {
            return Err(ConfigError::InvalidParameter(
                "multipliers must be positive".into(),
            ));
        }
        if self.price_drop_threshold <= 0.0 {
            return Err(ConfigError::InvalidParameter(
                "price drop threshold must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct ObvTrendSignals;

impl SignalGenerator for ObvTrendSignals {
    type Config = ObvTrendConfig;

    fn generate(&self, bars: &[Bar], config: &ObvTrendConfig) -> Vec<Signal> {
        let Some(obv_values) = obv(bars) else {
            return hold_series(bars.len());
        };

        let mut delta = vec![0.0; bars.len()];
        let mut abs_delta = vec![0.0; bars.len()];
        for i in 1..bars.len() {
            delta[i] = obv_values[i] - obv_values[i - 1];
            abs_delta[i] = delta[i].abs();
        }
        let avg_abs = sma(&abs_delta, config.period);

        let mut signals = hold_series(bars.len());
        let mut in_position = false;

        for i in 2..bars.len() {
            let avg = avg_abs
                .as_ref()
                .map(|values| values[i])
                .unwrap_or(0.0);
            let past_warmup = i >= config.period - 1 && avg > 0.0;

            let current = bars[i].close_f64();
            let previous = bars[i - 1].close_f64();
            let rising = current > previous;
            let falling = current < previous;

            if !in_position && past_warmup && delta[i] > config.multiplier * avg && rising {
                signals[i] = Signal::Buy;
                in_position = true;
                continue;
            }

            if in_position {
                let obv_drop = past_warmup && delta[i] < -config.drop_multiplier * avg;
                let price_drop = previous > 0.0
                    && (current - previous) / previous <= -config.price_drop_threshold;
                let unconfirmed = falling && delta[i] <= 0.0;

                if obv_drop || price_drop || unconfirmed {
                    signals[i] = Signal::Sell;
                    in_position = false;
                }
            }
        }

        signals
    }
}

fn grid() -> Vec<ObvTrendConfig> {
    let mut configs = Vec::new();
    for period in [10, 20, 30] {
        for multiplier in [1.0, 1.5, 2.0] {
            for drop_multiplier in [1.0, 1.5, 2.0] {
                for price_drop in [0.01, 0.02, 0.03] {
                    configs.push(ObvTrendConfig {
                        period,
                        multiplier,
                        drop_multiplier,
                        price_drop_threshold: price_drop,
                    });
                }
            }
        }
    }
    configs
}

pub fn strategy(
    slippage: Decimal,
) -> ComposedStrategy<ObvTrendSignals, GridSearch<ObvTrendConfig>> {
    ComposedStrategy::new(
        "obv_trend",
        ObvTrendConfig::default(),
        ObvTrendSignals,
        GridSearch::new(slippage, grid),
    )
}
