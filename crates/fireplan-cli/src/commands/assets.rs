use clap::Args;
use serde_json::Value;
use std::str::FromStr;

use fireplan_core::catalog::{self, TimePeriod, ASSET_CLASSES};
use fireplan_core::metrics::{mean, population_std_dev};

/// Arguments for asset catalog queries
#[derive(Args)]
pub struct AssetsArgs {
    /// Show one asset's historical return series instead of the catalog
    #[arg(long)]
    pub symbol: Option<String>,

    /// Historical lookback window: 10Y, 20Y, 30Y
    #[arg(long, default_value = "10Y")]
    pub period: String,

    /// Show per-category average return and volatility
    #[arg(long)]
    pub categories: bool,
}

pub fn run_assets(args: AssetsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    if args.categories {
        return Ok(serde_json::to_value(catalog::category_averages())?);
    }

    if let Some(ref symbol) = args.symbol {
        let symbol = symbol.to_uppercase();
        let period = TimePeriod::from_str(&args.period)?;
        let asset = catalog::asset_by_symbol(&symbol)
            .ok_or_else(|| format!("Unknown asset '{symbol}'"))?;
        let series = asset.returns_for(period);
        let avg = mean(series);
        let std_dev = population_std_dev(series, avg);
        let returns: Vec<String> = series.iter().map(|r| r.to_string()).collect();

        return Ok(serde_json::json!({
            "symbol": asset.symbol,
            "name": asset.name,
            "category": asset.category,
            "period": period.to_string(),
            "avg_return": avg.to_string(),
            "std_dev": std_dev.to_string(),
            "returns": returns,
            "description": asset.description,
        }));
    }

    // Catalog listing: one row per asset with the display figures
    let rows: Vec<Value> = ASSET_CLASSES
        .iter()
        .map(|a| {
            serde_json::json!({
                "symbol": a.symbol,
                "name": a.name,
                "category": a.category,
                "avg_return": a.avg_return.to_string(),
                "volatility": a.volatility.to_string(),
            })
        })
        .collect();

    Ok(Value::Array(rows))
}
