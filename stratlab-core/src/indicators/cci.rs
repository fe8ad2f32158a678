//! Commodity Channel Index.

use crate::domain::Bar;

/// CCI over typical prices `(high + low + close) / 3`.
///
/// `CCI = (TP - MA) / (0.015 * mean_deviation)`, zero when the window's mean
/// deviation is zero. Positions before `period - 1` are 0.0. Returns `None`
/// when the series is shorter than `period`.
pub fn cci(bars: &[Bar], period: usize) -> Option<Vec<f64>> {
    if period == 0 || bars.len() < period {
        return None;
    }

    let typical: Vec<f64> = bars
        .iter()
        .map(|bar| (bar.high_f64() + bar.low_f64() + bar.close_f64()) / 3.0)
        .collect();

    let mut result = vec![0.0; bars.len()];

    for i in (period - 1)..bars.len() {
        let window = &typical[(i + 1 - period)..=i];
        let mean: f64 = window.iter().sum::<f64>() / period as f64;
        let mean_deviation: f64 =
            window.iter().map(|tp| (tp - mean).abs()).sum::<f64>() / period as f64;

        result[i] = if mean_deviation == 0.0 {
            0.0
        } else {
            (typical[i] - mean) / (0.015 * mean_deviation)
        };
    }

    Some(result)
}
