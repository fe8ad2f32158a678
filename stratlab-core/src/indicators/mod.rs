//! Indicator math shared by the strategy plug-ins.
//!
//! One file per indicator. All functions are pure, operate on `f64` series
//! extracted once from the decimal bars, and return `None` when the series
//! is shorter than the indicator's warmup. Warmup positions in a returned
//! series are filled with 0.0; strategies start their scan loops past the
//! warmup index.

pub mod cci;
pub mod ema;
pub mod macd;
pub mod obv;
pub mod rsi;
pub mod sma;
pub mod stochastic;

pub use cci::cci;
pub use ema::ema;
pub use macd::macd;
pub use obv::obv;
pub use rsi::rsi;
pub use sma::sma;
pub use stochastic::stochastic;

use crate::domain::Bar;

/// Close prices as `f64`, extracted once per generation pass.
pub fn closes(bars: &[Bar]) -> Vec<f64> {
    bars.iter().map(Bar::close_f64).collect()
}

#[cfg(test)]
pub(crate) mod testutil {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::prelude::FromPrimitive;
    use rust_decimal::Decimal;

    pub(crate) const DEFAULT_EPSILON: f64 = 1e-9;

    pub(crate) fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
        assert!(
            (actual - expected).abs() <= epsilon,
            "expected {expected}, got {actual}"
        );
    }

    pub(crate) fn make_bars(closes: &[f64]) -> Vec<Bar> {
        closes
            .iter()
            .enumerate()
            .map(|(i, &c)| make_bar(i, c, c, c, c, 1_000))
            .collect()
    }

    pub(crate) fn make_bar(
        index: usize,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Bar {
        Bar {
            open: Decimal::from_f64(open).unwrap(),
            high: Decimal::from_f64(high).unwrap(),
            low: Decimal::from_f64(low).unwrap(),
            close: Decimal::from_f64(close).unwrap(),
            volume,
            timestamp: NaiveDate::from_ymd_opt(2024, 1, 2)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
                + chrono::Duration::days(index as i64),
        }
    }
}
