//! Strategy registry — the process-wide name table.
//!
//! An explicit, constructed-once object: the host builds it during startup
//! (normally via [`StrategyRegistry::builtin`]) and passes it by reference to
//! the runner. There is no global mutable table and no runtime
//! registration/unregistration; tests construct empty registries and install
//! only what they need.

use std::collections::BTreeMap;
use std::sync::Arc;

use rust_decimal::Decimal;
use thiserror::Error;

use crate::strategies;
use crate::strategy::Strategy;

#[derive(Debug, Error)]
pub enum RegistryError {
    /// Unknown names indicate operator/CLI misconfiguration; the
    /// single-strategy path treats this as fatal rather than falling back to
    /// a silent default.
    #[error("unknown strategy: {0}")]
    Unknown(String),
    #[error("duplicate strategy name: {0}")]
    Duplicate(String),
}

/// Read-only after construction: name -> implementation.
#[derive(Default)]
pub struct StrategyRegistry {
    entries: BTreeMap<String, Arc<dyn Strategy>>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every built-in plug-in installed, each optimizing
    /// against the given slippage.
    pub fn builtin(slippage: Decimal) -> Self {
        let mut registry = Self::new();
        strategies::install(&mut registry, slippage)
            .expect("built-in strategy names are unique");
        registry
    }

    /// Install a strategy under its own name. Names are unique per process;
    /// a second registration under the same name is rejected.
    pub fn register(&mut self, strategy: Arc<dyn Strategy>) -> Result<(), RegistryError> {
        let name = strategy.name().to_string();
        if self.entries.contains_key(&name) {
            return Err(RegistryError::Duplicate(name));
        }
        self.entries.insert(name, strategy);
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> Result<Arc<dyn Strategy>, RegistryError> {
        self.entries
            .get(name)
            .cloned()
            .ok_or_else(|| RegistryError::Unknown(name.to_string()))
    }

    /// All registered names in deterministic (sorted) order.
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{hold_series, Bar};
    use crate::strategy::{ConfigError, StrategyRun};

    struct Stub(&'static str);

    impl Strategy for Stub {
        fn name(&self) -> &str {
            self.0
        }

        fn optimize_and_generate(&self, bars: &[Bar]) -> StrategyRun {
            self.generate_with_default(bars)
        }

        fn generate_with_default(&self, bars: &[Bar]) -> StrategyRun {
            StrategyRun {
                signals: hold_series(bars.len()),
                config_desc: format!("{}()", self.0),
                config_json: serde_json::Value::Null,
            }
        }

        fn generate_with_raw(
            &self,
            bars: &[Bar],
            _raw: &serde_json::Value,
        ) -> Result<StrategyRun, ConfigError> {
            Ok(self.generate_with_default(bars))
        }
    }

    #[test]
    fn lookup_returns_registered_strategy() {
        let mut registry = StrategyRegistry::new();
        registry.register(Arc::new(Stub("alpha"))).unwrap();

        let found = registry.lookup("alpha").unwrap();
        assert_eq!(found.name(), "alpha");
    }

    #[test]
    fn unknown_name_is_an_error() {
        let registry = StrategyRegistry::new();
        let err = registry.lookup("missing").err().unwrap();
        assert!(matches!(err, RegistryError::Unknown(name) if name == "missing"));
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut registry = StrategyRegistry::new();
        registry.register(Arc::new(Stub("alpha"))).unwrap();
        let err = registry.register(Arc::new(Stub("alpha"))).unwrap_err();
        assert!(matches!(err, RegistryError::Duplicate(_)));
    }

    #[test]
    fn names_are_sorted() {
        let mut registry = StrategyRegistry::new();
        registry.register(Arc::new(Stub("zeta"))).unwrap();
        registry.register(Arc::new(Stub("alpha"))).unwrap();
        registry.register(Arc::new(Stub("mid"))).unwrap();

        assert_eq!(registry.names(), vec!["alpha", "mid", "zeta"]);
    }

    #[test]
    fn builtin_registry_is_populated() {
        let registry = StrategyRegistry::builtin(Decimal::ZERO);
        assert!(!registry.is_empty());
        assert!(registry.lookup("buy_and_hold").is_ok());
        assert!(registry.lookup("ma_crossover").is_ok());
    }
}
