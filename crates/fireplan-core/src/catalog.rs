//! Static asset-class catalog.
//!
//! Annual total returns in percentage points, most recent year last:
//! 10Y covers 2014-2024, 20Y covers 2005-2024, 30Y covers 1995-2024.
//! The `avg_return`/`volatility` fields are fallback display figures;
//! per-window statistics are always recomputed from the raw series.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::FirePlanError;
use crate::types::Pct;

/// Historical lookback window selecting which return series is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimePeriod {
    #[serde(rename = "10Y")]
    TenYear,
    #[serde(rename = "20Y")]
    TwentyYear,
    #[serde(rename = "30Y")]
    ThirtyYear,
}

impl fmt::Display for TimePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TimePeriod::TenYear => "10Y",
            TimePeriod::TwentyYear => "20Y",
            TimePeriod::ThirtyYear => "30Y",
        };
        f.write_str(s)
    }
}

impl FromStr for TimePeriod {
    type Err = FirePlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "10Y" => Ok(TimePeriod::TenYear),
            "20Y" => Ok(TimePeriod::TwentyYear),
            "30Y" => Ok(TimePeriod::ThirtyYear),
            _ => Err(FirePlanError::InvalidInput {
                field: "period".into(),
                reason: format!("Unknown time period '{s}'. Use: 10Y, 20Y, 30Y"),
            }),
        }
    }
}

/// One asset class in the catalog. Immutable process-wide static data.
#[derive(Debug, Clone, Serialize)]
pub struct AssetClass {
    pub symbol: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub returns_10y: &'static [Decimal],
    pub returns_20y: &'static [Decimal],
    pub returns_30y: &'static [Decimal],
    /// Fallback display average, not the metrics engine's input.
    pub avg_return: Pct,
    /// Fallback display volatility, not the metrics engine's input.
    pub volatility: Pct,
    pub color: &'static str,
    pub description: &'static str,
}

impl AssetClass {
    /// The raw annual return series for the given lookback window.
    pub fn returns_for(&self, period: TimePeriod) -> &'static [Decimal] {
        match period {
            TimePeriod::TenYear => self.returns_10y,
            TimePeriod::TwentyYear => self.returns_20y,
            TimePeriod::ThirtyYear => self.returns_30y,
        }
    }
}

pub static ASSET_CLASSES: &[AssetClass] = &[
    AssetClass {
        symbol: "VOO",
        name: "S&P 500 (VOO)",
        category: "US Large Cap",
        returns_10y: &[
            dec!(13.5), dec!(1.3), dec!(11.9), dec!(21.7), dec!(-4.4), dec!(31.4),
            dec!(18.3), dec!(-18.2), dec!(26.2), dec!(24.9), dec!(17.6),
        ],
        returns_20y: &[
            dec!(4.9), dec!(15.8), dec!(5.5), dec!(-37.0), dec!(26.5), dec!(15.1),
            dec!(2.1), dec!(16.0), dec!(32.4),
            dec!(13.5), dec!(1.3), dec!(11.9), dec!(21.7), dec!(-4.4), dec!(31.4),
            dec!(18.3), dec!(-18.2), dec!(26.2), dec!(24.9), dec!(17.6),
        ],
        returns_30y: &[
            dec!(37.6), dec!(23.0), dec!(33.4), dec!(28.6), dec!(21.0), dec!(-9.1),
            dec!(-11.9), dec!(-22.1), dec!(28.7), dec!(10.9),
            dec!(4.9), dec!(15.8), dec!(5.5), dec!(-37.0), dec!(26.5), dec!(15.1),
            dec!(2.1), dec!(16.0), dec!(32.4),
            dec!(13.5), dec!(1.3), dec!(11.9), dec!(21.7), dec!(-4.4), dec!(31.4),
            dec!(18.3), dec!(-18.2), dec!(26.2), dec!(24.9), dec!(17.6),
        ],
        avg_return: dec!(13.8),
        volatility: dec!(15.2),
        color: "#3b82f6",
        description: "Vanguard S&P 500 ETF - tracks 500 largest US companies",
    },
    AssetClass {
        symbol: "VTI",
        name: "Total Stock Market (VTI)",
        category: "US Total Market",
        returns_10y: &[
            dec!(12.4), dec!(0.4), dec!(12.5), dec!(21.0), dec!(-5.2), dec!(31.2),
            dec!(17.1), dec!(-19.5), dec!(25.6), dec!(24.0), dec!(16.8),
        ],
        returns_20y: &[
            dec!(6.1), dec!(15.7), dec!(5.6), dec!(-36.9), dec!(28.8), dec!(17.1),
            dec!(1.0), dec!(16.4), dec!(33.5),
            dec!(12.4), dec!(0.4), dec!(12.5), dec!(21.0), dec!(-5.2), dec!(31.2),
            dec!(17.1), dec!(-19.5), dec!(25.6), dec!(24.0), dec!(16.8),
        ],
        returns_30y: &[
            dec!(36.5), dec!(21.2), dec!(31.3), dec!(23.4), dec!(23.6), dec!(-10.9),
            dec!(-11.0), dec!(-20.9), dec!(31.6), dec!(12.5),
            dec!(6.1), dec!(15.7), dec!(5.6), dec!(-36.9), dec!(28.8), dec!(17.1),
            dec!(1.0), dec!(16.4), dec!(33.5),
            dec!(12.4), dec!(0.4), dec!(12.5), dec!(21.0), dec!(-5.2), dec!(31.2),
            dec!(17.1), dec!(-19.5), dec!(25.6), dec!(24.0), dec!(16.8),
        ],
        avg_return: dec!(13.2),
        volatility: dec!(15.8),
        color: "#1d4ed8",
        description: "Vanguard Total Stock Market ETF - entire US stock market",
    },
    AssetClass {
        symbol: "QQQ",
        name: "NASDAQ 100 (QQQ)",
        category: "US Tech/Growth",
        returns_10y: &[
            dec!(19.2), dec!(9.4), dec!(7.1), dec!(32.6), dec!(-1.0), dec!(48.8),
            dec!(27.4), dec!(-32.6), dec!(26.8), dec!(55.0), dec!(22.7),
        ],
        returns_20y: &[
            dec!(1.5), dec!(6.8), dec!(18.7), dec!(-41.7), dec!(54.7), dec!(19.9),
            dec!(3.4), dec!(18.1), dec!(36.6),
            dec!(19.2), dec!(9.4), dec!(7.1), dec!(32.6), dec!(-1.0), dec!(48.8),
            dec!(27.4), dec!(-32.6), dec!(26.8), dec!(55.0), dec!(22.7),
        ],
        returns_30y: &[
            dec!(42.5), dec!(42.5), dec!(20.6), dec!(85.3), dec!(102.0), dec!(-36.8),
            dec!(-32.7), dec!(-37.6), dec!(49.1), dec!(10.4),
            dec!(1.5), dec!(6.8), dec!(18.7), dec!(-41.7), dec!(54.7), dec!(19.9),
            dec!(3.4), dec!(18.1), dec!(36.6),
            dec!(19.2), dec!(9.4), dec!(7.1), dec!(32.6), dec!(-1.0), dec!(48.8),
            dec!(27.4), dec!(-32.6), dec!(26.8), dec!(55.0), dec!(22.7),
        ],
        avg_return: dec!(19.4),
        volatility: dec!(22.3),
        color: "#8b5cf6",
        description: "Invesco QQQ Trust - tracks NASDAQ 100 technology stocks",
    },
    AssetClass {
        symbol: "VEA",
        name: "International (VEA)",
        category: "Developed Markets",
        returns_10y: &[
            dec!(-5.2), dec!(0.9), dec!(2.5), dec!(26.4), dec!(-14.2), dec!(22.3),
            dec!(11.2), dec!(-16.0), dec!(18.5), dec!(19.2), dec!(12.1),
        ],
        returns_20y: &[
            dec!(13.5), dec!(26.3), dec!(11.2), dec!(-43.4), dec!(31.8), dec!(7.8),
            dec!(-12.1), dec!(17.3), dec!(22.8),
            dec!(-5.2), dec!(0.9), dec!(2.5), dec!(26.4), dec!(-14.2), dec!(22.3),
            dec!(11.2), dec!(-16.0), dec!(18.5), dec!(19.2), dec!(12.1),
        ],
        returns_30y: &[
            dec!(11.2), dec!(6.1), dec!(1.8), dec!(20.0), dec!(27.0), dec!(-14.2),
            dec!(-21.4), dec!(-15.9), dec!(38.6), dec!(20.2),
            dec!(13.5), dec!(26.3), dec!(11.2), dec!(-43.4), dec!(31.8), dec!(7.8),
            dec!(-12.1), dec!(17.3), dec!(22.8),
            dec!(-5.2), dec!(0.9), dec!(2.5), dec!(26.4), dec!(-14.2), dec!(22.3),
            dec!(11.2), dec!(-16.0), dec!(18.5), dec!(19.2), dec!(12.1),
        ],
        avg_return: dec!(7.4),
        volatility: dec!(18.9),
        color: "#10b981",
        description: "Vanguard FTSE Developed Markets ETF - international stocks",
    },
    AssetClass {
        symbol: "VWO",
        name: "Emerging Markets (VWO)",
        category: "Emerging Markets",
        returns_10y: &[
            dec!(-2.1), dec!(-15.8), dec!(11.8), dec!(31.2), dec!(-14.6), dec!(18.7),
            dec!(18.5), dec!(-21.5), dec!(9.9), dec!(10.3), dec!(8.7),
        ],
        returns_20y: &[
            dec!(34.0), dec!(32.1), dec!(39.4), dec!(-53.3), dec!(78.5), dec!(18.9),
            dec!(-18.4), dec!(18.2), dec!(-2.6),
            dec!(-2.1), dec!(-15.8), dec!(11.8), dec!(31.2), dec!(-14.6), dec!(18.7),
            dec!(18.5), dec!(-21.5), dec!(9.9), dec!(10.3), dec!(8.7),
        ],
        returns_30y: &[
            dec!(-5.2), dec!(6.0), dec!(-11.6), dec!(-25.3), dec!(66.4), dec!(-30.6),
            dec!(-2.6), dec!(-6.2), dec!(55.8), dec!(25.6),
            dec!(34.0), dec!(32.1), dec!(39.4), dec!(-53.3), dec!(78.5), dec!(18.9),
            dec!(-18.4), dec!(18.2), dec!(-2.6),
            dec!(-2.1), dec!(-15.8), dec!(11.8), dec!(31.2), dec!(-14.6), dec!(18.7),
            dec!(18.5), dec!(-21.5), dec!(9.9), dec!(10.3), dec!(8.7),
        ],
        avg_return: dec!(4.8),
        volatility: dec!(24.1),
        color: "#059669",
        description: "Vanguard FTSE Emerging Markets ETF - emerging market stocks",
    },
    AssetClass {
        symbol: "BND",
        name: "Total Bond Market (BND)",
        category: "US Bonds",
        returns_10y: &[
            dec!(6.0), dec!(0.6), dec!(2.5), dec!(3.6), dec!(9.3), dec!(7.5),
            dec!(-1.9), dec!(-13.2), dec!(-5.9), dec!(5.9), dec!(3.7),
        ],
        returns_20y: &[
            dec!(2.4), dec!(4.3), dec!(7.0), dec!(5.2), dec!(5.9), dec!(6.5),
            dec!(7.8), dec!(4.2), dec!(-2.0),
            dec!(6.0), dec!(0.6), dec!(2.5), dec!(3.6), dec!(9.3), dec!(7.5),
            dec!(-1.9), dec!(-13.2), dec!(-5.9), dec!(5.9), dec!(3.7),
        ],
        returns_30y: &[
            dec!(18.5), dec!(3.6), dec!(9.7), dec!(8.7), dec!(-0.8), dec!(11.6),
            dec!(8.4), dec!(10.3), dec!(4.1), dec!(4.3),
            dec!(2.4), dec!(4.3), dec!(7.0), dec!(5.2), dec!(5.9), dec!(6.5),
            dec!(7.8), dec!(4.2), dec!(-2.0),
            dec!(6.0), dec!(0.6), dec!(2.5), dec!(3.6), dec!(9.3), dec!(7.5),
            dec!(-1.9), dec!(-13.2), dec!(-5.9), dec!(5.9), dec!(3.7),
        ],
        avg_return: dec!(1.4),
        volatility: dec!(6.8),
        color: "#64748b",
        description: "Vanguard Total Bond Market ETF - US investment grade bonds",
    },
    AssetClass {
        symbol: "VNQ",
        name: "Real Estate (VNQ)",
        category: "US REITs",
        returns_10y: &[
            dec!(30.4), dec!(2.4), dec!(4.9), dec!(-6.0), dec!(28.9), dec!(-4.7),
            dec!(40.5), dec!(-26.2), dec!(11.8), dec!(4.8), dec!(2.8),
        ],
        returns_20y: &[
            dec!(12.2), dec!(35.1), dec!(-15.7), dec!(-37.7), dec!(28.0), dec!(27.9),
            dec!(8.3), dec!(19.7), dec!(2.9),
            dec!(30.4), dec!(2.4), dec!(4.9), dec!(-6.0), dec!(28.9), dec!(-4.7),
            dec!(40.5), dec!(-26.2), dec!(11.8), dec!(4.8), dec!(2.8),
        ],
        returns_30y: &[
            dec!(15.3), dec!(35.3), dec!(20.3), dec!(-17.5), dec!(-4.6), dec!(26.4),
            dec!(13.9), dec!(3.8), dec!(37.1), dec!(31.6),
            dec!(12.2), dec!(35.1), dec!(-15.7), dec!(-37.7), dec!(28.0), dec!(27.9),
            dec!(8.3), dec!(19.7), dec!(2.9),
            dec!(30.4), dec!(2.4), dec!(4.9), dec!(-6.0), dec!(28.9), dec!(-4.7),
            dec!(40.5), dec!(-26.2), dec!(11.8), dec!(4.8), dec!(2.8),
        ],
        avg_return: dec!(7.4),
        volatility: dec!(22.8),
        color: "#f59e0b",
        description: "Vanguard Real Estate ETF - US real estate investment trusts",
    },
    AssetClass {
        symbol: "GLD",
        name: "Gold (GLD)",
        category: "Commodities",
        returns_10y: &[
            dec!(-2.2), dec!(-10.7), dec!(8.4), dec!(13.1), dec!(18.1), dec!(24.8),
            dec!(-4.3), dec!(-3.6), dec!(-0.8), dec!(14.1), dec!(12.5),
        ],
        returns_20y: &[
            dec!(18.2), dec!(23.2), dec!(31.4), dec!(5.8), dec!(24.4), dec!(29.5),
            dec!(10.1), dec!(7.0), dec!(-28.0),
            dec!(-2.2), dec!(-10.7), dec!(8.4), dec!(13.1), dec!(18.1), dec!(24.8),
            dec!(-4.3), dec!(-3.6), dec!(-0.8), dec!(14.1), dec!(12.5),
        ],
        returns_30y: &[
            dec!(1.0), dec!(-4.6), dec!(-21.4), dec!(-0.8), dec!(0.9), dec!(-5.5),
            dec!(2.5), dec!(24.8), dec!(19.4), dec!(5.5),
            dec!(18.2), dec!(23.2), dec!(31.4), dec!(5.8), dec!(24.4), dec!(29.5),
            dec!(10.1), dec!(7.0), dec!(-28.0),
            dec!(-2.2), dec!(-10.7), dec!(8.4), dec!(13.1), dec!(18.1), dec!(24.8),
            dec!(-4.3), dec!(-3.6), dec!(-0.8), dec!(14.1), dec!(12.5),
        ],
        avg_return: dec!(5.5),
        volatility: dec!(16.2),
        color: "#fbbf24",
        description: "SPDR Gold Shares ETF - tracks gold price performance",
    },
    AssetClass {
        symbol: "CASH",
        name: "Cash/Money Market",
        category: "Cash",
        returns_10y: &[
            dec!(0.1), dec!(0.1), dec!(0.6), dec!(1.0), dec!(2.1), dec!(0.4),
            dec!(0.1), dec!(1.5), dec!(4.4), dec!(5.1), dec!(4.8),
        ],
        returns_20y: &[
            dec!(3.0), dec!(4.8), dec!(4.7), dec!(1.6), dec!(0.1), dec!(0.1),
            dec!(0.1), dec!(0.1), dec!(0.1),
            dec!(0.1), dec!(0.1), dec!(0.6), dec!(1.0), dec!(2.1), dec!(0.4),
            dec!(0.1), dec!(1.5), dec!(4.4), dec!(5.1), dec!(4.8),
        ],
        returns_30y: &[
            dec!(5.6), dec!(5.2), dec!(5.3), dec!(4.9), dec!(4.7), dec!(5.9),
            dec!(3.8), dec!(1.7), dec!(1.0), dec!(1.2),
            dec!(3.0), dec!(4.8), dec!(4.7), dec!(1.6), dec!(0.1), dec!(0.1),
            dec!(0.1), dec!(0.1), dec!(0.1),
            dec!(0.1), dec!(0.1), dec!(0.6), dec!(1.0), dec!(2.1), dec!(0.4),
            dec!(0.1), dec!(1.5), dec!(4.4), dec!(5.1), dec!(4.8),
        ],
        avg_return: dec!(1.7),
        volatility: dec!(2.1),
        color: "#94a3b8",
        description: "Money market funds and high-yield savings accounts",
    },
];

/// Look up an asset class by symbol. Absence is explicit, never a panic.
pub fn asset_by_symbol(symbol: &str) -> Option<&'static AssetClass> {
    ASSET_CLASSES.iter().find(|a| a.symbol == symbol)
}

/// The raw annual return series for a symbol and lookback window.
pub fn historical_returns(symbol: &str, period: TimePeriod) -> Option<&'static [Decimal]> {
    asset_by_symbol(symbol).map(|a| a.returns_for(period))
}

/// Mean of the fallback display figures per category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryAverage {
    pub avg_return: Pct,
    pub volatility: Pct,
}

/// Average the fallback return/volatility figures across each category.
pub fn category_averages() -> BTreeMap<String, CategoryAverage> {
    let mut grouped: BTreeMap<&str, Vec<&AssetClass>> = BTreeMap::new();
    for asset in ASSET_CLASSES {
        grouped.entry(asset.category).or_default().push(asset);
    }

    grouped
        .into_iter()
        .map(|(category, assets)| {
            let n = Decimal::from(assets.len() as i64);
            let avg_return = assets.iter().map(|a| a.avg_return).sum::<Decimal>() / n;
            let volatility = assets.iter().map(|a| a.volatility).sum::<Decimal>() / n;
            (
                category.to_string(),
                CategoryAverage {
                    avg_return,
                    volatility,
                },
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn test_symbols_are_unique() {
        let mut symbols: Vec<&str> = ASSET_CLASSES.iter().map(|a| a.symbol).collect();
        symbols.sort_unstable();
        symbols.dedup();
        assert_eq!(symbols.len(), ASSET_CLASSES.len());
    }

    #[test]
    fn test_series_lengths_match_windows() {
        for asset in ASSET_CLASSES {
            assert_eq!(asset.returns_10y.len(), 11, "{} 10Y", asset.symbol);
            assert_eq!(asset.returns_20y.len(), 20, "{} 20Y", asset.symbol);
            assert_eq!(asset.returns_30y.len(), 30, "{} 30Y", asset.symbol);
        }
    }

    #[test]
    fn test_shorter_windows_are_tails_of_longer_ones() {
        for asset in ASSET_CLASSES {
            let tail_20 = &asset.returns_20y[asset.returns_20y.len() - 11..];
            let tail_30 = &asset.returns_30y[asset.returns_30y.len() - 20..];
            assert_eq!(asset.returns_10y, tail_20, "{}", asset.symbol);
            assert_eq!(asset.returns_20y, tail_30, "{}", asset.symbol);
        }
    }

    #[test]
    fn test_asset_by_symbol() {
        let voo = asset_by_symbol("VOO").unwrap();
        assert_eq!(voo.name, "S&P 500 (VOO)");
        assert!(asset_by_symbol("SPY").is_none());
    }

    #[test]
    fn test_historical_returns_lookup() {
        let returns = historical_returns("BND", TimePeriod::TenYear).unwrap();
        assert_eq!(returns.len(), 11);
        assert_eq!(*returns.last().unwrap(), dec!(3.7));
        assert!(historical_returns("SPY", TimePeriod::TenYear).is_none());
    }

    #[test]
    fn test_period_round_trip() {
        for (s, p) in [
            ("10Y", TimePeriod::TenYear),
            ("20Y", TimePeriod::TwentyYear),
            ("30Y", TimePeriod::ThirtyYear),
        ] {
            assert_eq!(s.parse::<TimePeriod>().unwrap(), p);
            assert_eq!(p.to_string(), s);
        }
        assert!("10y".parse::<TimePeriod>().is_ok());
        assert!("5Y".parse::<TimePeriod>().is_err());
    }

    #[test]
    fn test_category_averages_cover_all_categories() {
        let averages = category_averages();
        for asset in ASSET_CLASSES {
            assert!(averages.contains_key(asset.category), "{}", asset.category);
        }
        // Single-asset category: averages equal the asset's own figures
        let cash = &averages["Cash"];
        assert_eq!(cash.avg_return, dec!(1.7));
        assert_eq!(cash.volatility, dec!(2.1));
    }
}
