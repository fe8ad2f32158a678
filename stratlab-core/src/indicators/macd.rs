//! MACD — moving average convergence/divergence.

use super::ema;

/// MACD line, signal line, and histogram over close prices.
///
/// The MACD line is fast EMA minus slow EMA, zeroed wherever either EMA is
/// still in warmup; the signal line is an EMA of the MACD line. Returns
/// `None` when the series cannot support the slow or signal period.
pub fn macd(
    closes: &[f64],
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
) -> Option<(Vec<f64>, Vec<f64>, Vec<f64>)> {
    if closes.len() < slow_period {
        return None;
    }

    let fast = ema(closes, fast_period)?;
    let slow = ema(closes, slow_period)?;

    let line: Vec<f64> = fast
        .iter()
        .zip(&slow)
        .map(|(&f, &s)| if f == 0.0 || s == 0.0 { 0.0 } else { f - s })
        .collect();

    let signal = ema(&line, signal_period)?;

    let histogram: Vec<f64> = line.iter().zip(&signal).map(|(&l, &s)| l - s).collect();

    Some((line, signal, histogram))
}
