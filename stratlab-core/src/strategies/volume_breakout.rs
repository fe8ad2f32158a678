//! Volume breakout — volume-confirmed price moves.
//!
//! BUY on a green bar whose volume exceeds the recent average by the
//! configured multiplier; SELL on a red bar, or on a blow-off bar with
//! volume at twice the multiplier.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::{hold_series, Bar, Signal};
use crate::optimizer::GridSearch;
use crate::strategy::{ComposedStrategy, ConfigError, SignalGenerator, StrategyConfig};

/// Bars averaged for the volume baseline.
const VOLUME_LOOKBACK: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeBreakoutConfig {
    pub volume_multiplier: f64,
}

impl Default for VolumeBreakoutConfig {
    fn default() -> Self {
        Self {
            volume_multiplier: 1.5,
        }
    }
}

impl fmt::Display for VolumeBreakoutConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VolumeBreakout(multiplier={:.2})", self.volume_multiplier)
    }
}

impl StrategyConfig for VolumeBreakoutConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.volume_multiplier <= 0.0 {
            return Err(ConfigError::InvalidParameter(
                "volume multiplier must be positive".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct VolumeBreakoutSignals;

impl SignalGenerator for VolumeBreakoutSignals {
    type Config = VolumeBreakoutConfig;

    fn generate(&self, bars: &[Bar], config: &VolumeBreakoutConfig) -> Vec<Signal> {
        let mut signals = hold_series(bars.len());
        let mut in_position = false;

        for i in VOLUME_LOOKBACK..bars.len() {
            let avg_volume: f64 = bars[(i - VOLUME_LOOKBACK)..i]
                .iter()
                .map(Bar::volume_f64)
                .sum::<f64>()
                / VOLUME_LOOKBACK as f64;
            let volume = bars[i].volume_f64();

            let green = bars[i].close > bars[i].open;
            let red = bars[i].close < bars[i].open;

            if !in_position && green && volume > avg_volume * config.volume_multiplier {
                signals[i] = Signal::Buy;
                in_position = true;
            } else if in_position
                && (red || volume > avg_volume * config.volume_multiplier * 2.0)
            {
                signals[i] = Signal::Sell;
                in_position = false;
            }
        }

        signals
    }
}

fn grid() -> Vec<VolumeBreakoutConfig> {
    (5..=15)
        .map(|i| VolumeBreakoutConfig {
            volume_multiplier: i as f64 * 0.2,
        })
        .collect()
}

pub fn strategy(
    slippage: Decimal,
) -> ComposedStrategy<VolumeBreakoutSignals, GridSearch<VolumeBreakoutConfig>> {
    ComposedStrategy::new(
        "volume_breakout",
        VolumeBreakoutConfig::default(),
        VolumeBreakoutSignals,
        GridSearch::new(slippage, grid),
    )
}
