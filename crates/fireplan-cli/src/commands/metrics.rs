use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

use fireplan_core::catalog::TimePeriod;
use fireplan_core::metrics::{calculate_portfolio_metrics, MetricsInput, PortfolioAllocation};

use crate::input;

/// Arguments for portfolio metrics
#[derive(Args)]
pub struct MetricsArgs {
    /// Path to a JSON file with allocations
    #[arg(long)]
    pub input: Option<String>,

    /// Inline allocations as SYMBOL:PCT pairs (e.g. "VOO:60,BND:40")
    #[arg(long)]
    pub allocations: Option<String>,

    /// Historical lookback window: 10Y, 20Y, 30Y
    #[arg(long, default_value = "10Y")]
    pub period: String,
}

pub fn run_metrics(args: MetricsArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let allocations = get_allocations(&args.input, &args.allocations)?;
    let period = TimePeriod::from_str(&args.period)?;

    let output = calculate_portfolio_metrics(&MetricsInput {
        allocations,
        period,
    })?;

    Ok(serde_json::to_value(output)?)
}

/// Parse an inline "VOO:60,BND:40" allocation spec.
pub fn parse_allocation_spec(
    spec: &str,
) -> Result<Vec<PortfolioAllocation>, Box<dyn std::error::Error>> {
    spec.split(',')
        .map(|pair| {
            let (symbol, pct) = pair.split_once(':').ok_or_else(|| {
                format!("Invalid allocation '{pair}'. Expected SYMBOL:PCT, e.g. VOO:60")
            })?;
            let percentage = pct.trim().parse::<Decimal>().map_err(|e| {
                format!("Invalid percentage '{}' for {}: {}", pct.trim(), symbol.trim(), e)
            })?;
            Ok(PortfolioAllocation {
                symbol: symbol.trim().to_uppercase(),
                percentage,
            })
        })
        .collect()
}

/// Resolve allocations from --input file, --allocations spec, or piped stdin.
pub fn get_allocations(
    input_path: &Option<String>,
    cli_allocations: &Option<String>,
) -> Result<Vec<PortfolioAllocation>, Box<dyn std::error::Error>> {
    if let Some(ref path) = input_path {
        let data: Value = input::file::read_json_value(path)?;
        allocations_from_value(&data)
    } else if let Some(ref spec) = cli_allocations {
        parse_allocation_spec(spec)
    } else if let Some(data) = input::stdin::read_stdin()? {
        allocations_from_value(&data)
    } else {
        Err("Provide --allocations or --input file or pipe JSON via stdin".into())
    }
}

/// Accept either a bare array of {symbol, percentage} objects or an
/// object with an 'allocations' key. Percentages may be JSON strings
/// or numbers.
fn allocations_from_value(
    data: &Value,
) -> Result<Vec<PortfolioAllocation>, Box<dyn std::error::Error>> {
    let arr = if let Some(arr) = data.as_array() {
        arr
    } else if let Some(arr) = data.get("allocations").and_then(|v| v.as_array()) {
        arr
    } else {
        return Err("Expected a JSON array of allocations or object with 'allocations' key".into());
    };

    arr.iter()
        .map(|item| {
            let symbol = item
                .get("symbol")
                .and_then(|v| v.as_str())
                .ok_or("Each allocation needs a 'symbol' string")?
                .to_uppercase();
            let pct_value = item
                .get("percentage")
                .ok_or("Each allocation needs a 'percentage'")?;
            let percentage = decimal_from_value(pct_value)
                .ok_or_else(|| format!("Invalid percentage for {symbol}"))?;
            Ok(PortfolioAllocation { symbol, percentage })
        })
        .collect()
}

/// Lenient Decimal extraction: JSON string or number.
pub fn decimal_from_value(value: &Value) -> Option<Decimal> {
    if let Some(s) = value.as_str() {
        s.parse::<Decimal>().ok()
    } else if let Some(n) = value.as_f64() {
        Decimal::try_from(n).ok()
    } else {
        None
    }
}
