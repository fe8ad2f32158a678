//! StratLab CLI — run one strategy or benchmark the whole registry.
//!
//! Commands:
//! - `run` — backtest a named strategy (with a buy-and-hold baseline) or,
//!   without `--strategy`, benchmark every registered strategy concurrently
//! - `list` — print the registered strategy names

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;
use tracing_subscriber::EnvFilter;

use stratlab_core::StrategyRegistry;
use stratlab_runner::{
    comparison_table, load_bars, markdown_table, save_optimized_configs, save_signals, Runner,
    RunnerSettings,
};

#[derive(Parser)]
#[command(name = "stratlab", about = "StratLab — strategy backtesting and optimization")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Backtest one strategy, or every registered strategy without --strategy.
    Run {
        /// Candle JSON file to backtest against.
        #[arg(long)]
        file: PathBuf,

        /// Strategy name; omit to run the full registry.
        #[arg(long)]
        strategy: Option<String>,

        /// Settings file with global slippage and per-strategy config
        /// overrides. Strategies with an override skip optimization.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Slippage override; takes precedence over the settings file.
        #[arg(long)]
        slippage: Option<Decimal>,

        /// Write the generated signal series (single-strategy runs only).
        #[arg(long)]
        save_signals: Option<PathBuf>,

        /// Write the winning configs of a batch run for later reuse.
        #[arg(long)]
        save_configs: Option<PathBuf>,

        /// Print the comparison table as markdown instead of plain text.
        #[arg(long, default_value_t = false)]
        markdown: bool,
    },
    /// Print the registered strategy names.
    List,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            file,
            strategy,
            config,
            slippage,
            save_signals,
            save_configs,
            markdown,
        } => run_cmd(
            file,
            strategy,
            config,
            slippage,
            save_signals,
            save_configs,
            markdown,
        ),
        Commands::List => list_cmd(),
    }
}

#[allow(clippy::too_many_arguments)]
fn run_cmd(
    file: PathBuf,
    strategy: Option<String>,
    config: Option<PathBuf>,
    slippage: Option<Decimal>,
    save_signals_path: Option<PathBuf>,
    save_configs_path: Option<PathBuf>,
    markdown: bool,
) -> Result<()> {
    let bars = load_bars(&file).with_context(|| format!("loading candles from {}", file.display()))?;
    println!("loaded {} bars from {}", bars.len(), file.display());

    let mut settings = match config {
        Some(path) => RunnerSettings::from_file(&path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => RunnerSettings::default(),
    };
    if let Some(slippage) = slippage {
        settings.slippage = slippage;
    }

    let registry = StrategyRegistry::builtin(settings.slippage);
    let runner = Runner::new(&registry, settings);

    match strategy {
        Some(name) => {
            let report = runner.run_strategy(&name, &bars)?;
            let rows = vec![report.result.clone(), report.baseline.clone()];
            print_table(&rows, markdown);

            if let Some(path) = save_signals_path {
                save_signals(&path, &bars, &report.signals)
                    .with_context(|| format!("writing signals to {}", path.display()))?;
                println!("signals written to {}", path.display());
            }
        }
        None => {
            let results = runner.run_all(&bars);
            println!(
                "{} of {} strategies completed",
                results.len(),
                registry.len()
            );
            print_table(&results, markdown);

            if let Some(path) = save_configs_path {
                save_optimized_configs(&path, &results)
                    .with_context(|| format!("writing configs to {}", path.display()))?;
                println!("optimized configs written to {}", path.display());
            }
        }
    }

    Ok(())
}

fn print_table(results: &[stratlab_runner::BenchmarkResult], markdown: bool) {
    if markdown {
        print!("{}", markdown_table(results));
    } else {
        print!("{}", comparison_table(results));
    }
}

fn list_cmd() -> Result<()> {
    let registry = StrategyRegistry::builtin(stratlab_runner::DEFAULT_SLIPPAGE);
    for name in registry.names() {
        println!("{name}");
    }
    Ok(())
}
