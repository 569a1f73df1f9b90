//! Portfolio metrics over the static asset catalog.
//!
//! Volatility combines per-asset standard deviations under a zero
//! inter-asset correlation assumption, which understates the blended
//! portfolio's true volatility. The assumption is recorded in every
//! output envelope.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::catalog::{self, TimePeriod};
use crate::error::FirePlanError;
use crate::types::{with_metadata, ComputationOutput, Pct};
use crate::FirePlanResult;

/// Annualised risk-free rate in percentage points, fixed by policy.
pub const RISK_FREE_RATE: Pct = dec!(2.0);

/// Allocation percentages must sum to 100 within this tolerance.
pub const ALLOCATION_TOLERANCE: Decimal = dec!(0.1);

/// One slice of a portfolio: catalog symbol plus percentage (0-100).
/// The type does not clamp; the engine validates the collection sum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioAllocation {
    pub symbol: String,
    pub percentage: Pct,
}

/// Input for portfolio metrics
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsInput {
    pub allocations: Vec<PortfolioAllocation>,
    pub period: TimePeriod,
}

/// Output of portfolio metrics. Recomputed fresh on every call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioMetrics {
    /// Weighted mean of per-asset average returns for the chosen window
    pub expected_return: Pct,
    /// Root of the weighted sum of squared per-asset standard deviations
    pub volatility: Pct,
    /// (expected_return - risk_free) / volatility; 0 when volatility is 0
    pub sharpe_ratio: Decimal,
    /// Weighted sum of per-asset historical max-drawdown estimates
    pub max_drawdown_risk: Pct,
    /// Reserved for future correlation analysis; always 0
    pub correlation: Decimal,
}

/// Calculate portfolio metrics (expected return, volatility, Sharpe,
/// drawdown estimate) for an allocation over a historical window.
pub fn calculate_portfolio_metrics(
    input: &MetricsInput,
) -> FirePlanResult<ComputationOutput<PortfolioMetrics>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let total: Decimal = input.allocations.iter().map(|a| a.percentage).sum();
    if (total - dec!(100)).abs() > ALLOCATION_TOLERANCE {
        return Err(FirePlanError::InvalidAllocation { total });
    }

    let mut expected_return = Decimal::ZERO;
    let mut variance_sum = Decimal::ZERO;
    let mut max_drawdown_risk = Decimal::ZERO;

    for alloc in &input.allocations {
        let asset = catalog::asset_by_symbol(&alloc.symbol)
            .ok_or_else(|| FirePlanError::UnknownAsset(alloc.symbol.clone()))?;

        let returns = asset.returns_for(input.period);
        let avg = mean(returns);
        let std_dev = population_std_dev(returns, avg);

        let weight = alloc.percentage / dec!(100);
        expected_return += weight * avg;
        variance_sum += weight * weight * std_dev * std_dev;
        max_drawdown_risk += weight * max_drawdown_estimate(&alloc.symbol);
    }

    let volatility = sqrt_decimal(variance_sum);

    let sharpe_ratio = match sharpe_ratio(expected_return, volatility) {
        Some(sharpe) => sharpe,
        None => {
            warnings.push(
                "Volatility is zero; Sharpe ratio is undefined and reported as 0".into(),
            );
            Decimal::ZERO
        }
    };

    let output = PortfolioMetrics {
        expected_return,
        volatility,
        sharpe_ratio,
        max_drawdown_risk,
        correlation: Decimal::ZERO,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Portfolio Metrics (weighted return, zero-correlation volatility, Sharpe, drawdown estimate)",
        &serde_json::json!({
            "period": input.period.to_string(),
            "positions": input.allocations.len(),
            "risk_free_rate": RISK_FREE_RATE.to_string(),
            "correlation_model": "zero (conservative simplification)",
            "std_dev": "population (over N)",
        }),
        warnings,
        elapsed,
        output,
    ))
}

/// Historical max-drawdown estimate per symbol, in percentage points.
/// Static policy figures; deliberately window-independent even though
/// the return series are not.
fn max_drawdown_estimate(symbol: &str) -> Pct {
    match symbol {
        "QQQ" => dec!(35),
        "VWO" => dec!(30),
        "VNQ" => dec!(25),
        "VOO" | "VTI" => dec!(20),
        "VEA" => dec!(18),
        "BND" => dec!(8),
        "GLD" => dec!(15),
        // All other assets, including CASH
        _ => dec!(2),
    }
}

/// None when volatility is exactly zero; callers substitute a sentinel.
fn sharpe_ratio(expected_return: Pct, volatility: Pct) -> Option<Decimal> {
    if volatility.is_zero() {
        None
    } else {
        Some((expected_return - RISK_FREE_RATE) / volatility)
    }
}

/// Arithmetic mean of a return series; zero for an empty series.
pub fn mean(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    let sum: Decimal = values.iter().sum();
    sum / Decimal::from(values.len() as i64)
}

/// Population standard deviation: variance over N, not N-1.
pub fn population_std_dev(values: &[Decimal], avg: Decimal) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    let sum_sq: Decimal = values.iter().map(|v| (v - avg) * (v - avg)).sum();
    sqrt_decimal(sum_sq / Decimal::from(values.len() as i64))
}

fn sqrt_decimal(val: Decimal) -> Decimal {
    if val <= Decimal::ZERO {
        return Decimal::ZERO;
    }
    val.sqrt().unwrap_or(Decimal::ZERO)
}
