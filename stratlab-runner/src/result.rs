//! Benchmark results and ranking.

use std::time::Duration;

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Summary of one strategy's backtested performance.
///
/// Produced once per strategy run and immutable afterwards. Collected in
/// arrival order during batch runs, then explicitly ranked for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkResult {
    pub name: String,
    /// Fractional total return (0.10 = +10%).
    pub total_return: Decimal,
    pub trade_count: usize,
    pub final_portfolio: Decimal,
    /// Wall-clock time for the whole run, optimization included.
    pub elapsed: Duration,
    /// Human-readable description of the config that produced the result.
    pub config_desc: String,
    /// The same config in persistable form.
    pub config_json: serde_json::Value,
}

impl BenchmarkResult {
    /// Total return as a percentage, for display only.
    pub fn return_pct(&self) -> f64 {
        self.total_return.to_f64().unwrap_or(0.0) * 100.0
    }
}

/// Rank results for display: descending by total return. The sort is stable,
/// so ties keep their insertion (arrival) order.
pub fn rank(results: &mut [BenchmarkResult]) {
    results.sort_by(|a, b| b.total_return.cmp(&a.total_return));
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn result(name: &str, total_return: Decimal) -> BenchmarkResult {
        BenchmarkResult {
            name: name.to_string(),
            total_return,
            trade_count: 4,
            final_portfolio: dec!(10000) * (Decimal::ONE + total_return),
            elapsed: Duration::from_millis(12),
            config_desc: format!("{name}()"),
            config_json: serde_json::json!({}),
        }
    }

    #[test]
    fn ranks_descending_by_return() {
        let mut results = vec![
            result("low", dec!(-0.05)),
            result("high", dec!(0.30)),
            result("mid", dec!(0.10)),
        ];
        rank(&mut results);

        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["high", "mid", "low"]);
    }

    #[test]
    fn ties_keep_arrival_order() {
        let mut results = vec![
            result("first", dec!(0.10)),
            result("second", dec!(0.10)),
            result("third", dec!(0.20)),
        ];
        rank(&mut results);

        let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["third", "first", "second"]);
    }

    #[test]
    fn return_pct_converts_fraction() {
        let r = result("x", dec!(0.1234));
        assert!((r.return_pct() - 12.34).abs() < 1e-9);
    }
}
