//! JSON artifacts — signal series for charting and optimized configs for
//! reuse. Pure consumers of run output; nothing here can influence a
//! simulation.

use std::collections::BTreeMap;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use serde::Serialize;
use thiserror::Error;

use stratlab_core::{Bar, Signal};

use crate::result::BenchmarkResult;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write export file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize export: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// One bar joined with the signal generated for it.
#[derive(Debug, Serialize)]
pub struct BarWithSignal {
    pub time: NaiveDateTime,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: u64,
    pub signal: Signal,
}

/// Write the bar/signal join as a JSON array.
pub fn save_signals(path: &Path, bars: &[Bar], signals: &[Signal]) -> Result<(), ExportError> {
    let rows: Vec<BarWithSignal> = bars
        .iter()
        .zip(signals)
        .map(|(bar, &signal)| BarWithSignal {
            time: bar.timestamp,
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
            signal,
        })
        .collect();

    let file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(file, &rows)?;
    Ok(())
}

/// Write the winning configs of a batch run, keyed by strategy name, in the
/// same shape the settings loader reads back.
pub fn save_optimized_configs(
    path: &Path,
    results: &[BenchmarkResult],
) -> Result<(), ExportError> {
    let configs: BTreeMap<&str, &serde_json::Value> = results
        .iter()
        .filter(|r| !r.config_json.is_null())
        .map(|r| (r.name.as_str(), &r.config_json))
        .collect();

    let file = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(file, &configs)?;
    Ok(())
}
