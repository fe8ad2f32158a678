//! Buy-and-hold — buy the first bar, never sell.
//!
//! Implements `Strategy` directly instead of going through
//! `ComposedStrategy`: there is no parameter space to search, so the
//! optimize path is the default path. Also serves as the baseline the
//! runner compares single-strategy results against.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{hold_series, Bar, Signal};
use crate::strategy::{ConfigError, Strategy, StrategyConfig, StrategyRun};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuyAndHoldConfig {}

impl fmt::Display for BuyAndHoldConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BuyAndHold()")
    }
}

impl StrategyConfig for BuyAndHoldConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        Ok(())
    }
}

/// BUY on the first bar, HOLD forever after.
pub fn signals(len: usize) -> Vec<Signal> {
    let mut series = hold_series(len);
    if let Some(first) = series.first_mut() {
        *first = Signal::Buy;
    }
    series
}

pub struct BuyAndHold;

impl BuyAndHold {
    fn run(&self, bars: &[Bar]) -> StrategyRun {
        StrategyRun {
            signals: signals(bars.len()),
            config_desc: BuyAndHoldConfig::default().to_string(),
            config_json: serde_json::json!({}),
        }
    }
}

impl Strategy for BuyAndHold {
    fn name(&self) -> &str {
        "buy_and_hold"
    }

    fn optimize_and_generate(&self, bars: &[Bar]) -> StrategyRun {
        self.run(bars)
    }

    fn generate_with_default(&self, bars: &[Bar]) -> StrategyRun {
        self.run(bars)
    }

    fn generate_with_raw(
        &self,
        bars: &[Bar],
        raw: &serde_json::Value,
    ) -> Result<StrategyRun, ConfigError> {
        let _config: BuyAndHoldConfig = serde_json::from_value(raw.clone())?;
        Ok(self.run(bars))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::testutil::make_bars;

    #[test]
    fn buys_first_bar_only() {
        let series = signals(4);
        assert_eq!(series[0], Signal::Buy);
        assert!(series[1..].iter().all(|s| *s == Signal::Hold));
    }

    #[test]
    fn empty_series_stays_empty() {
        assert!(signals(0).is_empty());
    }

    #[test]
    fn optimize_equals_default() {
        let bars = make_bars(&[100.0, 101.0, 102.0]);
        let strategy = BuyAndHold;
        assert_eq!(
            strategy.optimize_and_generate(&bars).signals,
            strategy.generate_with_default(&bars).signals
        );
    }
}
