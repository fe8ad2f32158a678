//! Strategy runner — synchronous single runs and the concurrent
//! all-strategies benchmark.
//!
//! Failure boundary: per-strategy problems (unknown name, bad persisted
//! config, a panicking generator) are absorbed at the task boundary during
//! batch runs — logged, and the row omitted. The simulator's bars/signals
//! length precondition is deliberately NOT caught: a violation means a
//! signal generator broke the alignment invariant, and the whole run aborts.

use std::panic::{self, AssertUnwindSafe};
use std::sync::mpsc;
use std::time::Instant;

use rayon::prelude::*;
use thiserror::Error;
use tracing::warn;

use stratlab_core::strategies::buy_and_hold;
use stratlab_core::{
    backtest, Bar, ConfigError, RegistryError, Signal, Strategy, StrategyRegistry,
};

use crate::result::{rank, BenchmarkResult};
use crate::settings::RunnerSettings;

#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error("config error for '{name}': {source}")]
    Config {
        name: String,
        source: ConfigError,
    },
    #[error("strategy '{0}' panicked during optimization or signal generation")]
    Generator(String),
}

/// Single-strategy run plus its buy-and-hold baseline.
#[derive(Debug)]
pub struct StrategyReport {
    pub result: BenchmarkResult,
    /// The generated signal series, for persistence/charting.
    pub signals: Vec<Signal>,
    /// Fixed baseline over the same bars and slippage.
    pub baseline: BenchmarkResult,
}

/// Drives strategies from a borrowed, read-only registry.
pub struct Runner<'a> {
    registry: &'a StrategyRegistry,
    settings: RunnerSettings,
}

impl<'a> Runner<'a> {
    pub fn new(registry: &'a StrategyRegistry, settings: RunnerSettings) -> Self {
        Self { registry, settings }
    }

    pub fn settings(&self) -> &RunnerSettings {
        &self.settings
    }

    /// Run one named strategy synchronously.
    ///
    /// Fails loudly on an unknown name or a malformed persisted config —
    /// single runs indicate operator intent, so there is no silent fallback.
    pub fn run_strategy(&self, name: &str, bars: &[Bar]) -> Result<StrategyReport, RunError> {
        let (result, signals) = self.run_one(name, bars)?;
        let baseline = self.buy_and_hold_baseline(bars);
        Ok(StrategyReport {
            result,
            signals,
            baseline,
        })
    }

    /// Run every registered strategy concurrently and rank the outcomes.
    ///
    /// One worker task per strategy on the rayon pool (bounded by available
    /// parallelism); each task writes its result into a channel pre-sized to
    /// the strategy count, so no task ever blocks on a consumer. The pool
    /// join is the barrier; afterwards the channel is drained in arrival
    /// order and the list ranked by total return. A failing strategy is
    /// logged and omitted; the batch always completes.
    pub fn run_all(&self, bars: &[Bar]) -> Vec<BenchmarkResult> {
        let names = self.registry.names();
        let (tx, rx) = mpsc::sync_channel::<BenchmarkResult>(names.len());

        names.par_iter().for_each_with(tx, |tx, name| {
            match self.run_one(name, bars) {
                Ok((result, _signals)) => {
                    // Pre-sized channel: send cannot block or fail while the
                    // receiver is alive.
                    let _ = tx.send(result);
                }
                Err(error) => warn!(strategy = %name, %error, "strategy skipped in batch run"),
            }
        });

        let mut results: Vec<BenchmarkResult> = rx.try_iter().collect();
        rank(&mut results);
        results
    }

    fn run_one(
        &self,
        name: &str,
        bars: &[Bar],
    ) -> Result<(BenchmarkResult, Vec<Signal>), RunError> {
        let strategy = self.registry.lookup(name)?;
        let started = Instant::now();

        // Optimization and signal generation run inside a panic guard so a
        // broken plug-in cannot take the batch down. The simulator call sits
        // outside it: its length precondition failing is an engine bug.
        let run = panic::catch_unwind(AssertUnwindSafe(|| {
            match self.settings.override_for(name) {
                Some(raw) => strategy.generate_with_raw(bars, raw),
                None => Ok(strategy.optimize_and_generate(bars)),
            }
        }))
        .map_err(|_| RunError::Generator(name.to_string()))?
        .map_err(|source| RunError::Config {
            name: name.to_string(),
            source,
        })?;

        let summary = backtest(bars, &run.signals, self.settings.slippage);
        let elapsed = started.elapsed();

        let result = BenchmarkResult {
            name: strategy.name().to_string(),
            total_return: summary.total_return,
            trade_count: summary.trade_count,
            final_portfolio: summary.final_portfolio,
            elapsed,
            config_desc: run.config_desc,
            config_json: run.config_json,
        };
        Ok((result, run.signals))
    }

    fn buy_and_hold_baseline(&self, bars: &[Bar]) -> BenchmarkResult {
        let started = Instant::now();
        let signals = buy_and_hold::signals(bars.len());
        let summary = backtest(bars, &signals, self.settings.slippage);

        BenchmarkResult {
            name: "buy_and_hold".to_string(),
            total_return: summary.total_return,
            trade_count: summary.trade_count,
            final_portfolio: summary.final_portfolio,
            elapsed: started.elapsed(),
            config_desc: buy_and_hold::BuyAndHoldConfig::default().to_string(),
            config_json: serde_json::json!({}),
        }
    }
}
