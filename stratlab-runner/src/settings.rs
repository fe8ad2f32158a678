//! Runner settings — global slippage plus persisted per-strategy overrides.
//!
//! The override file is a JSON object mapping strategy names to their config
//! objects, with an optional top-level `"slippage"` number applied globally:
//!
//! ```json
//! {
//!   "slippage": 0.02,
//!   "rsi_oscillator": { "period": 12, "buy_threshold": 25.0, "sell_threshold": 75.0 }
//! }
//! ```
//!
//! A strategy with an entry here skips optimization and runs the persisted
//! config instead.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use thiserror::Error;
use tracing::warn;

/// Default fixed price offset charged against the trader on every execution.
pub const DEFAULT_SLIPPAGE: Decimal = dec!(0.01);

const SLIPPAGE_KEY: &str = "slippage";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone)]
pub struct RunnerSettings {
    pub slippage: Decimal,
    overrides: BTreeMap<String, serde_json::Value>,
}

impl Default for RunnerSettings {
    fn default() -> Self {
        Self::new(DEFAULT_SLIPPAGE)
    }
}

impl RunnerSettings {
    pub fn new(slippage: Decimal) -> Self {
        Self {
            slippage,
            overrides: BTreeMap::new(),
        }
    }

    /// Load settings from a JSON override file.
    ///
    /// The `"slippage"` key is extracted as the global slippage; a value of
    /// the wrong type is warned about and replaced with the default rather
    /// than failing the whole file. Every other key is a per-strategy config
    /// override.
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let data = fs::read_to_string(path)?;
        let mut entries: BTreeMap<String, serde_json::Value> = serde_json::from_str(&data)?;

        let slippage = match entries.remove(SLIPPAGE_KEY) {
            Some(value) => serde_json::from_value::<Decimal>(value).unwrap_or_else(|_| {
                warn!("invalid slippage in settings file, using default");
                DEFAULT_SLIPPAGE
            }),
            None => DEFAULT_SLIPPAGE,
        };

        Ok(Self {
            slippage,
            overrides: entries,
        })
    }

    /// Persisted config for a strategy, if the file provided one.
    pub fn override_for(&self, name: &str) -> Option<&serde_json::Value> {
        self.overrides.get(name)
    }

    pub fn has_overrides(&self) -> bool {
        !self.overrides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_settings(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_slippage_and_overrides() {
        let file = write_settings(
            r#"{
                "slippage": 0.02,
                "rsi_oscillator": { "period": 12, "buy_threshold": 25.0, "sell_threshold": 75.0 }
            }"#,
        );

        let settings = RunnerSettings::from_file(file.path()).unwrap();
        assert_eq!(settings.slippage, dec!(0.02));
        assert!(settings.override_for("rsi_oscillator").is_some());
        assert!(settings.override_for("macd").is_none());
    }

    #[test]
    fn invalid_slippage_falls_back_to_default() {
        let file = write_settings(r#"{ "slippage": "lots" }"#);
        let settings = RunnerSettings::from_file(file.path()).unwrap();
        assert_eq!(settings.slippage, DEFAULT_SLIPPAGE);
        assert!(!settings.has_overrides());
    }

    #[test]
    fn missing_slippage_uses_default() {
        let file = write_settings(r#"{ "macd": { "fast_period": 8, "slow_period": 24, "signal_period": 6 } }"#);
        let settings = RunnerSettings::from_file(file.path()).unwrap();
        assert_eq!(settings.slippage, DEFAULT_SLIPPAGE);
        assert!(settings.has_overrides());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let file = write_settings("not json at all");
        assert!(RunnerSettings::from_file(file.path()).is_err());
    }
}
