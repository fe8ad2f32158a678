//! Rendering of benchmark tables — plain text for the console, markdown for
//! export. Read-only consumers: they may re-sort a copy for presentation but
//! never recompute profit.

use std::fmt::Write as _;
use std::time::Duration;

use crate::result::{rank, BenchmarkResult};

/// Fixed-width comparison table, best strategy first.
pub fn comparison_table(results: &[BenchmarkResult]) -> String {
    let mut ranked = results.to_vec();
    rank(&mut ranked);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<4}  {:<24}  {:>10}  {:>7}  {:>12}  {:>9}  config",
        "rank", "strategy", "return", "trades", "final", "time"
    );
    let _ = writeln!(out, "{}", "-".repeat(96));

    for (i, r) in ranked.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:<4}  {:<24}  {:>9.2}%  {:>7}  {:>12.2}  {:>9}  {}",
            i + 1,
            truncate(&r.name, 24),
            r.return_pct(),
            r.trade_count,
            r.final_portfolio,
            format_duration(r.elapsed),
            r.config_desc,
        );
    }

    out
}

/// The same table as a markdown document.
pub fn markdown_table(results: &[BenchmarkResult]) -> String {
    let mut ranked = results.to_vec();
    rank(&mut ranked);

    let mut out = String::new();
    out.push_str("| Rank | Strategy | Return | Trades | Final | Time | Config |\n");
    out.push_str("|---|---|---|---|---|---|---|\n");
    for (i, r) in ranked.iter().enumerate() {
        let _ = writeln!(
            out,
            "| {} | {} | {:+.2}% | {} | {:.2} | {} | `{}` |",
            i + 1,
            r.name,
            r.return_pct(),
            r.trade_count,
            r.final_portfolio,
            format_duration(r.elapsed),
            r.config_desc,
        );
    }

    out
}

fn format_duration(d: Duration) -> String {
    if d >= Duration::from_secs(1) {
        format!("{:.1}s", d.as_secs_f64())
    } else {
        format!("{}ms", d.as_millis())
    }
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        return s.to_string();
    }
    format!("{}...", &s[..max_len.saturating_sub(3)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn result(name: &str, total_return: rust_decimal::Decimal) -> BenchmarkResult {
        BenchmarkResult {
            name: name.to_string(),
            total_return,
            trade_count: 2,
            final_portfolio: dec!(11000),
            elapsed: Duration::from_millis(42),
            config_desc: format!("{name}()"),
            config_json: serde_json::json!({}),
        }
    }

    #[test]
    fn table_lists_best_first() {
        let results = vec![result("loser", dec!(-0.10)), result("winner", dec!(0.25))];
        let table = comparison_table(&results);

        let winner_at = table.find("winner").unwrap();
        let loser_at = table.find("loser").unwrap();
        assert!(winner_at < loser_at);
    }

    #[test]
    fn table_does_not_mutate_input_order() {
        let results = vec![result("loser", dec!(-0.10)), result("winner", dec!(0.25))];
        comparison_table(&results);
        assert_eq!(results[0].name, "loser");
    }

    #[test]
    fn markdown_has_one_row_per_result() {
        let results = vec![result("a", dec!(0.1)), result("b", dec!(0.2))];
        let md = markdown_table(&results);
        assert_eq!(md.lines().count(), 4); // header + separator + 2 rows
    }

    #[test]
    fn durations_are_humanized() {
        assert_eq!(format_duration(Duration::from_millis(250)), "250ms");
        assert_eq!(format_duration(Duration::from_millis(1500)), "1.5s");
    }

    #[test]
    fn long_names_are_truncated() {
        let name = "a".repeat(40);
        assert_eq!(truncate(&name, 24).len(), 24);
        assert_eq!(truncate("short", 24), "short");
    }
}
