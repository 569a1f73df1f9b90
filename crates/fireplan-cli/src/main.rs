mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::assets::AssetsArgs;
use commands::metrics::MetricsArgs;
use commands::project::ProjectArgs;
use commands::strategy::StrategyArgs;

/// FIRE planning calculations with decimal precision
#[derive(Parser)]
#[command(
    name = "fireplan",
    version,
    about = "FIRE planning calculations with decimal precision",
    long_about = "A CLI for financial-independence planning with decimal precision. \
                  Computes portfolio metrics over a historical asset catalog, projects \
                  wealth year by year through age 95, and packages allocations into \
                  named strategies."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Portfolio metrics (expected return, volatility, Sharpe, drawdown estimate)
    Metrics(MetricsArgs),
    /// Project wealth year by year through age 95
    Project(ProjectArgs),
    /// Package an allocation into a named custom strategy
    Strategy(StrategyArgs),
    /// List the built-in preset strategies
    Presets,
    /// Show the asset catalog or one asset's historical returns
    Assets(AssetsArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Metrics(args) => commands::metrics::run_metrics(args),
        Commands::Project(args) => commands::project::run_project(args),
        Commands::Strategy(args) => commands::strategy::run_strategy(args),
        Commands::Presets => commands::strategy::run_presets(),
        Commands::Assets(args) => commands::assets::run_assets(args),
        Commands::Version => {
            println!("fireplan {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
