//! Candle-file ingestion.
//!
//! Parses the candle API's JSON export — prices as `{units, nano}` pairs,
//! volume as a decimal string, time as RFC 3339 with a naive fallback — and
//! reconstructs exact decimal prices. Bars are sorted ascending by timestamp
//! before they leave this module: the engine assumes that ordering and never
//! re-sorts.

use std::fs;
use std::path::Path;

use chrono::{DateTime, NaiveDateTime};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;

use stratlab_core::Bar;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read candle file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse candle file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid price units '{0}'")]
    BadPrice(String),
    #[error("invalid volume '{0}'")]
    BadVolume(String),
    #[error("unrecognized timestamp '{0}'")]
    BadTime(String),
}

/// Nano-denominated price as the candle API ships it.
#[derive(Debug, Deserialize)]
struct RawPrice {
    units: String,
    nano: i32,
}

#[derive(Debug, Deserialize)]
struct RawCandle {
    open: RawPrice,
    high: RawPrice,
    low: RawPrice,
    close: RawPrice,
    volume: String,
    time: String,
}

#[derive(Debug, Deserialize)]
struct CandleFile {
    candles: Vec<RawCandle>,
}

/// Load and normalize a candle file into an ascending-by-time bar series.
pub fn load_bars(path: &Path) -> Result<Vec<Bar>, LoadError> {
    let data = fs::read_to_string(path)?;
    let file: CandleFile = serde_json::from_str(&data)?;

    let mut bars = Vec::with_capacity(file.candles.len());
    for candle in file.candles {
        bars.push(Bar {
            open: decimal_price(&candle.open)?,
            high: decimal_price(&candle.high)?,
            low: decimal_price(&candle.low)?,
            close: decimal_price(&candle.close)?,
            volume: candle
                .volume
                .parse::<u64>()
                .map_err(|_| LoadError::BadVolume(candle.volume.clone()))?,
            timestamp: parse_time(&candle.time)?,
        });
    }

    bars.sort_by_key(|bar| bar.timestamp);
    Ok(bars)
}

/// Exact reconstruction: `units + nano * 10^-9`, no float round trip.
fn decimal_price(raw: &RawPrice) -> Result<Decimal, LoadError> {
    let units: i64 = raw
        .units
        .parse()
        .map_err(|_| LoadError::BadPrice(raw.units.clone()))?;
    Ok(Decimal::from(units) + Decimal::new(raw.nano as i64, 9))
}

fn parse_time(value: &str) -> Result<NaiveDateTime, LoadError> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.naive_utc());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| LoadError::BadTime(value.to_string()))
}
