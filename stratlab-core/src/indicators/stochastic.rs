//! Stochastic oscillator (%K and %D).

use crate::domain::Bar;

use super::sma;

/// %K over a rolling high/low window and %D as its SMA.
///
/// %K reads 50 (neutral) wherever the window's range is zero. Returns `None`
/// when the series cannot support either period.
pub fn stochastic(bars: &[Bar], k_period: usize, d_period: usize) -> Option<(Vec<f64>, Vec<f64>)> {
    if k_period == 0 || bars.len() < k_period {
        return None;
    }

    let mut k_values = vec![0.0; bars.len()];

    for i in (k_period - 1)..bars.len() {
        let window = &bars[(i + 1 - k_period)..=i];
        let lowest = window.iter().map(Bar::low_f64).fold(f64::MAX, f64::min);
        let highest = window.iter().map(Bar::high_f64).fold(f64::MIN, f64::max);

        let range = highest - lowest;
        k_values[i] = if range == 0.0 {
            50.0
        } else {
            100.0 * (bars[i].close_f64() - lowest) / range
        };
    }

    let d_values = sma(&k_values, d_period)?;

    Some((k_values, d_values))
}
