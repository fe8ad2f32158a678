//! Signal — per-bar trading decision.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Three-valued trading signal, one per bar.
///
/// A signal series is always index-aligned with its bar series:
/// `signals.len() == bars.len()` is a precondition of the simulator, and a
/// mismatch is an engine bug, not recoverable input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    #[default]
    Hold,
    Buy,
    Sell,
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Signal::Hold => write!(f, "HOLD"),
            Signal::Buy => write!(f, "BUY"),
            Signal::Sell => write!(f, "SELL"),
        }
    }
}

/// Neutral all-Hold series of the given length.
///
/// Substituted whenever a config fails validation so one malformed candidate
/// never aborts a sweep.
pub fn hold_series(len: usize) -> Vec<Signal> {
    vec![Signal::Hold; len]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_hold() {
        assert_eq!(Signal::default(), Signal::Hold);
    }

    #[test]
    fn hold_series_is_all_hold() {
        let series = hold_series(5);
        assert_eq!(series.len(), 5);
        assert!(series.iter().all(|s| *s == Signal::Hold));
    }

    #[test]
    fn serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Signal::Buy).unwrap(), "\"BUY\"");
        assert_eq!(serde_json::to_string(&Signal::Hold).unwrap(), "\"HOLD\"");
        let sell: Signal = serde_json::from_str("\"SELL\"").unwrap();
        assert_eq!(sell, Signal::Sell);
    }
}
