//! On-Balance Volume.

use crate::domain::Bar;

/// Cumulative volume signed by the close-to-close direction: added on up
/// bars, subtracted on down bars, carried on unchanged bars. Starts at zero.
/// Returns `None` for series shorter than two bars.
pub fn obv(bars: &[Bar]) -> Option<Vec<f64>> {
    if bars.len() < 2 {
        return None;
    }

    let mut result = vec![0.0; bars.len()];

    for i in 1..bars.len() {
        let volume = bars[i].volume_f64();
        let current = bars[i].close;
        let previous = bars[i - 1].close;

        result[i] = if current > previous {
            result[i - 1] + volume
        } else if current < previous {
            result[i - 1] - volume
        } else {
            result[i - 1]
        };
    }

    Some(result)
}
