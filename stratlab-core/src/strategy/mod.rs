//! Strategy abstraction.
//!
//! Two layers:
//! - A **typed** layer (`StrategyConfig`, `SignalGenerator`, `ConfigOptimizer`)
//!   where each generator is parametrized over its own config type, so a
//!   config/generator mismatch is a compile error rather than a runtime check.
//! - An **erased** layer (`Strategy`) that the registry stores and the runner
//!   drives. It exposes whole operations — optimize-and-generate, generate
//!   with the compiled-in default, generate from persisted JSON — so no config
//!   ever crosses the boundary untyped.
//!
//! `ComposedStrategy` adapts any typed generator/optimizer pair into the
//! erased interface. Strategies with nothing to optimize can implement
//! `Strategy` directly; the runner treats both forms uniformly.

pub mod composed;

pub use composed::ComposedStrategy;

use std::fmt;

use thiserror::Error;

use crate::domain::{Bar, Signal};

/// Errors from config validation and deserialization.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("malformed config: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Validated, immutable parameter bundle controlling a strategy's signal
/// logic. Constructed as a compiled-in default, deserialized from persisted
/// settings, or synthesized by a config-space generator during optimization;
/// never mutated afterwards.
pub trait StrategyConfig: fmt::Display + Send + Sync {
    fn validate(&self) -> Result<(), ConfigError>;
}

/// Pure signal rule: `(bars, config) -> signals`.
///
/// Implementations must be side-effect-free and hold no shared mutable state;
/// the optimizer invokes them concurrently across many candidate configs.
/// The returned series is index-aligned with `bars`.
pub trait SignalGenerator: Send + Sync {
    type Config: StrategyConfig;

    fn generate(&self, bars: &[Bar], config: &Self::Config) -> Vec<Signal>;
}

/// Search strategy over a generator's config space.
///
/// Returns `None` when the search space is degenerate (empty, or every
/// candidate fails validation); callers substitute the strategy's compiled-in
/// default in that case.
pub trait ConfigOptimizer<G: SignalGenerator>: Send + Sync {
    fn optimize(&self, bars: &[Bar], generator: &G) -> Option<G::Config>;
}

/// Output of one erased strategy invocation: the signal series plus the
/// config that produced it, in both human-readable and persistable form.
#[derive(Debug, Clone)]
pub struct StrategyRun {
    pub signals: Vec<Signal>,
    pub config_desc: String,
    pub config_json: serde_json::Value,
}

/// The erased interface stored in the registry and driven by the runner.
///
/// Call-site rule shared by all implementations: a config failing
/// `validate()` never reaches signal generation — an all-Hold series is
/// substituted instead, so one malformed candidate cannot abort a sweep.
pub trait Strategy: Send + Sync {
    /// Unique registry name.
    fn name(&self) -> &str;

    /// Search the config space, then generate signals with the winner.
    /// Falls back to the compiled-in default when the search is degenerate.
    fn optimize_and_generate(&self, bars: &[Bar]) -> StrategyRun;

    /// Generate signals with the compiled-in default config.
    fn generate_with_default(&self, bars: &[Bar]) -> StrategyRun;

    /// Generate signals with a config deserialized from persisted JSON.
    fn generate_with_raw(
        &self,
        bars: &[Bar],
        raw: &serde_json::Value,
    ) -> Result<StrategyRun, ConfigError>;
}
