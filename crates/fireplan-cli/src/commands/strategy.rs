use clap::Args;
use serde_json::Value;
use std::str::FromStr;

use fireplan_core::catalog::TimePeriod;
use fireplan_core::metrics::{calculate_portfolio_metrics, MetricsInput};
use fireplan_core::strategy::{build_custom_strategy, preset_strategies, CustomStrategyInput};

use super::metrics::get_allocations;

/// Arguments for building a custom strategy
#[derive(Args)]
pub struct StrategyArgs {
    /// Path to a JSON file with allocations
    #[arg(long)]
    pub input: Option<String>,

    /// Inline allocations as SYMBOL:PCT pairs (e.g. "VOO:60,BND:40")
    #[arg(long)]
    pub allocations: Option<String>,

    /// Historical lookback window: 10Y, 20Y, 30Y
    #[arg(long, default_value = "10Y")]
    pub period: String,

    /// Strategy display name
    #[arg(long, default_value = "My Custom Strategy")]
    pub name: String,
}

/// Compute metrics for the allocation, then package it as a strategy.
pub fn run_strategy(args: StrategyArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let allocations = get_allocations(&args.input, &args.allocations)?;
    let period = TimePeriod::from_str(&args.period)?;

    let metrics = calculate_portfolio_metrics(&MetricsInput {
        allocations: allocations.clone(),
        period,
    })?;

    let strategy = build_custom_strategy(&CustomStrategyInput {
        allocations,
        metrics: Some(metrics.result.clone()),
        name: args.name,
    });

    Ok(serde_json::json!({
        "strategy": strategy,
        "metrics": metrics.result,
        "warnings": metrics.warnings,
    }))
}

pub fn run_presets() -> Result<Value, Box<dyn std::error::Error>> {
    Ok(serde_json::to_value(preset_strategies())?)
}
