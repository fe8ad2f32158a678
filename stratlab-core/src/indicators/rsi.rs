//! Relative Strength Index (Wilder smoothing).

/// RSI over close prices. Requires at least `period + 1` values (one change
/// per period step). Positions before `period` are 0.0; a period of all
/// gains reads 100.
pub fn rsi(closes: &[f64], period: usize) -> Option<Vec<f64>> {
    if period == 0 || closes.len() < period + 1 {
        return None;
    }

    let mut result = vec![0.0; closes.len()];

    let mut avg_gain = 0.0;
    let mut avg_loss = 0.0;
    for i in 1..=period {
        let change = closes[i] - closes[i - 1];
        if change > 0.0 {
            avg_gain += change;
        } else {
            avg_loss += -change;
        }
    }
    avg_gain /= period as f64;
    avg_loss /= period as f64;

    result[period] = rsi_value(avg_gain, avg_loss);

    for i in (period + 1)..closes.len() {
        let change = closes[i] - closes[i - 1];
        let (gain, loss) = if change > 0.0 {
            (change, 0.0)
        } else {
            (0.0, -change)
        };

        avg_gain = (avg_gain * (period as f64 - 1.0) + gain) / period as f64;
        avg_loss = (avg_loss * (period as f64 - 1.0) + loss) / period as f64;

        result[i] = rsi_value(avg_gain, avg_loss);
    }

    Some(result)
}

fn rsi_value(avg_gain: f64, avg_loss: f64) -> f64 {
    if avg_loss == 0.0 {
        return 100.0;
    }
    let rs = avg_gain / avg_loss;
    100.0 - 100.0 / (1.0 + rs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::testutil::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn all_gains_read_one_hundred() {
        let closes: Vec<f64> = (0..10).map(|i| 100.0 + i as f64).collect();
        let result = rsi(&closes, 5).unwrap();
        for v in &result[5..] {
            assert_approx(*v, 100.0, DEFAULT_EPSILON);
        }
    }

    #[test]
    fn all_losses_read_zero() {
        let closes: Vec<f64> = (0..10).map(|i| 100.0 - i as f64).collect();
        let result = rsi(&closes, 5).unwrap();
        for v in &result[5..] {
            assert_approx(*v, 0.0, DEFAULT_EPSILON);
        }
    }

    #[test]
    fn balanced_moves_read_near_fifty() {
        // Alternating +1/-1 changes.
        let closes: Vec<f64> = (0..20)
            .map(|i| if i % 2 == 0 { 100.0 } else { 101.0 })
            .collect();
        let result = rsi(&closes, 6).unwrap();
        let last = *result.last().unwrap();
        assert!((40.0..=60.0).contains(&last), "got {last}");
    }

    #[test]
    fn warmup_prefix_is_zero() {
        let closes: Vec<f64> = (0..10).map(|i| 100.0 + i as f64).collect();
        let result = rsi(&closes, 5).unwrap();
        for v in &result[..5] {
            assert_eq!(*v, 0.0);
        }
    }

    #[test]
    fn too_few_values_is_none() {
        assert!(rsi(&[1.0, 2.0, 3.0], 3).is_none());
    }
}
