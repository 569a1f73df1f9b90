//! Strategy packaging: the three built-in presets and the builder that
//! turns a custom allocation plus its computed metrics into the same
//! shape, ready for a projection's growth assumption.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::catalog::asset_by_symbol;
use crate::metrics::{PortfolioAllocation, PortfolioMetrics};
use crate::types::Pct;

/// Fallback slice color when a symbol is missing from the catalog.
const UNKNOWN_ASSET_COLOR: &str = "#64748b";

/// Accent color for all custom-built strategies.
const CUSTOM_STRATEGY_COLOR: &str = "#6366f1";

/// One display slice of a strategy's allocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllocationSlice {
    pub name: String,
    pub value: Pct,
    pub color: String,
}

/// A packaged investment strategy: either a preset or the output of
/// `build_custom_strategy`. `growth` feeds straight into a projection's
/// annual_growth_rate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Strategy {
    pub id: String,
    pub name: String,
    pub growth: Pct,
    pub color: String,
    pub allocation: Vec<AllocationSlice>,
    pub description: String,
    pub pros: String,
    pub cons: String,
}

/// Volatility bands, in percentage points of annual standard deviation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    LowMedium,
    Medium,
    MediumHigh,
    High,
}

impl RiskLevel {
    /// Band boundaries are 8 / 15 / 20 / 25, lower bound inclusive.
    pub fn from_volatility(volatility: Pct) -> Self {
        if volatility < dec!(8) {
            RiskLevel::Low
        } else if volatility < dec!(15) {
            RiskLevel::LowMedium
        } else if volatility < dec!(20) {
            RiskLevel::Medium
        } else if volatility < dec!(25) {
            RiskLevel::MediumHigh
        } else {
            RiskLevel::High
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RiskLevel::Low => "Low",
            RiskLevel::LowMedium => "Low-Medium",
            RiskLevel::Medium => "Medium",
            RiskLevel::MediumHigh => "Medium-High",
            RiskLevel::High => "High",
        };
        write!(f, "{s}")
    }
}

/// The three built-in presets. Growth figures are long-run nominal
/// assumptions, not recomputed from the catalog.
pub fn preset_strategies() -> Vec<Strategy> {
    vec![
        Strategy {
            id: "conservative".to_string(),
            name: "Conservative".to_string(),
            growth: dec!(4.5),
            color: "#64748b".to_string(),
            allocation: vec![
                AllocationSlice {
                    name: "Stocks (VTI)".to_string(),
                    value: dec!(20),
                    color: "#3b82f6".to_string(),
                },
                AllocationSlice {
                    name: "Bonds (BND)".to_string(),
                    value: dec!(70),
                    color: "#94a3b8".to_string(),
                },
                AllocationSlice {
                    name: "Cash / Money Market".to_string(),
                    value: dec!(10),
                    color: "#cbd5e1".to_string(),
                },
            ],
            description: "Focused on capital preservation. Suits retirees or investors with \
                          very low risk tolerance. Low volatility, but hard-pressed to keep \
                          up with long-term inflation."
                .to_string(),
            pros: "Very low volatility, minimal stress".to_string(),
            cons: "Slow growth; unlikely to sustain a 4% withdrawal rate long-term".to_string(),
        },
        Strategy {
            id: "balanced".to_string(),
            name: "Balanced".to_string(),
            growth: dec!(8.0),
            color: "#10b981".to_string(),
            allocation: vec![
                AllocationSlice {
                    name: "Stocks (VTI/VXUS)".to_string(),
                    value: dec!(60),
                    color: "#10b981".to_string(),
                },
                AllocationSlice {
                    name: "Bonds (BND)".to_string(),
                    value: dec!(40),
                    color: "#6ee7b7".to_string(),
                },
            ],
            description: "The classic 60/40 portfolio and the baseline of 4%-rule research. \
                          Stocks drive growth while bonds cushion drawdowns."
                .to_string(),
            pros: "Balance of risk and return, the cornerstone of FIRE planning".to_string(),
            cons: "Bond returns may lag in low-rate environments".to_string(),
        },
        Strategy {
            id: "aggressive".to_string(),
            name: "Aggressive".to_string(),
            growth: dec!(11.5),
            color: "#6366f1".to_string(),
            allocation: vec![
                AllocationSlice {
                    name: "Stocks (VOO/QQQ)".to_string(),
                    value: dec!(90),
                    color: "#6366f1".to_string(),
                },
                AllocationSlice {
                    name: "Bonds / Alternatives".to_string(),
                    value: dec!(10),
                    color: "#a5b4fc".to_string(),
                },
            ],
            description: "Maximizes long-term compounding. Suits accumulators 10+ years from \
                          retirement who can ride out volatility."
                .to_string(),
            pros: "Strongest compounding, fastest wealth growth".to_string(),
            cons: "Drawdowns of 30-50% possible; risky in early retirement".to_string(),
        },
    ]
}

/// Look up a preset by its id.
pub fn preset_by_id(id: &str) -> Option<Strategy> {
    preset_strategies().into_iter().find(|s| s.id == id)
}

/// Input to the custom strategy builder. Metrics come from
/// `calculate_portfolio_metrics`; None produces the empty default.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CustomStrategyInput {
    pub allocations: Vec<PortfolioAllocation>,
    pub metrics: Option<PortfolioMetrics>,
    pub name: String,
}

/// Package a custom allocation and its metrics into a Strategy.
///
/// Infallible: missing metrics or an empty allocation produce a zeroed
/// placeholder, and unknown symbols fall back to the raw symbol with a
/// neutral color rather than erroring.
pub fn build_custom_strategy(input: &CustomStrategyInput) -> Strategy {
    let metrics = match (input.allocations.is_empty(), &input.metrics) {
        (false, Some(m)) => m,
        _ => {
            return Strategy {
                id: "custom".to_string(),
                name: input.name.clone(),
                growth: Decimal::ZERO,
                color: CUSTOM_STRATEGY_COLOR.to_string(),
                allocation: Vec::new(),
                description: "Custom portfolio allocation".to_string(),
                pros: "Fully personalized allocation".to_string(),
                cons: "Requires investment knowledge".to_string(),
            };
        }
    };

    let allocation = input
        .allocations
        .iter()
        .map(|alloc| match asset_by_symbol(&alloc.symbol) {
            Some(asset) => AllocationSlice {
                name: asset.name.to_string(),
                value: alloc.percentage,
                color: asset.color.to_string(),
            },
            None => AllocationSlice {
                name: alloc.symbol.clone(),
                value: alloc.percentage,
                color: UNKNOWN_ASSET_COLOR.to_string(),
            },
        })
        .collect();

    let risk = RiskLevel::from_volatility(metrics.volatility);

    Strategy {
        id: "custom".to_string(),
        name: input.name.clone(),
        growth: metrics
            .expected_return
            .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero),
        color: CUSTOM_STRATEGY_COLOR.to_string(),
        allocation,
        description: format!(
            "Custom portfolio with {}% expected annual return, {} risk",
            fixed(metrics.expected_return, 1),
            risk
        ),
        pros: format!(
            "Expected return {}%, Sharpe ratio {}",
            fixed(metrics.expected_return, 1),
            fixed(metrics.sharpe_ratio, 2)
        ),
        cons: format!(
            "Estimated max drawdown around {}%, volatility {}%",
            fixed(metrics.max_drawdown_risk, 1),
            fixed(metrics.volatility, 1)
        ),
    }
}

/// Render with exactly `dp` decimal places, rounding half away from zero.
fn fixed(value: Decimal, dp: u32) -> String {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded.to_string()
}
