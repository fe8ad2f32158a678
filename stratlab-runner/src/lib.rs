//! StratLab Runner — orchestration on top of `stratlab-core`.
//!
//! This crate provides:
//! - The single-strategy and all-strategies runners
//! - Benchmark results and ranking
//! - Runner settings (global slippage + persisted config overrides)
//! - Candle-file ingestion
//! - Result reporting (console/markdown) and JSON export

pub mod data_loader;
pub mod export;
pub mod report;
pub mod result;
pub mod runner;
pub mod settings;

pub use data_loader::{load_bars, LoadError};
pub use export::{save_optimized_configs, save_signals, ExportError};
pub use report::{comparison_table, markdown_table};
pub use result::{rank, BenchmarkResult};
pub use runner::{RunError, Runner, StrategyReport};
pub use settings::{RunnerSettings, SettingsError, DEFAULT_SLIPPAGE};
