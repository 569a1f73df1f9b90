//! Year-by-year wealth projection through age 95.
//!
//! Two regimes: accumulation (growth plus contributions) until the
//! retirement age, decumulation (growth minus inflation-adjusted
//! spending) from it. The sequence is regenerated in full on every
//! call; nothing is patched incrementally.

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::types::{with_metadata, ComputationOutput, Money, Pct, Rate};
use crate::FirePlanResult;

/// Last simulated age, inclusive.
pub const PROJECTION_END_AGE: i32 = 95;

/// FIRE target multiple of annual spending (the 4% rule inverted).
pub const FIRE_TARGET_MULTIPLE: Decimal = dec!(25);

/// Scalar financial inputs. Ages are signed and deliberately
/// unvalidated: retirement_age <= current_age simply starts the
/// projection in decumulation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinancialProfile {
    pub current_age: i32,
    pub retirement_age: i32,
    pub initial_capital: Money,
    pub monthly_contribution: Money,
    pub annual_401k: Money,
    pub employer_match: Money,
    pub mega_backdoor: Money,
    pub annual_spending: Money,
}

/// Input parameters for a wealth projection. Rates in percentage
/// points (8.0 = 8%).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionInput {
    pub profile: FinancialProfile,
    pub annual_growth_rate: Pct,
    pub inflation_rate: Pct,
    pub show_real_value: bool,
}

/// One simulated year. Wealth is the display value (real or nominal),
/// rounded to whole dollars.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub age: i32,
    pub wealth: Money,
    pub is_retired: bool,
}

/// Summary statistics derived from the projected sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FireSummary {
    /// Display wealth at the retirement-age point; 0 if that age is
    /// never emitted
    pub wealth_at_retirement: Money,
    /// 25x annual spending
    pub fire_target: Money,
    pub target_met: bool,
    /// Initial withdrawal rate: spending / retirement wealth, in
    /// percentage points; 0 when retirement wealth is 0
    pub safe_withdrawal_rate: Pct,
}

/// Top-level output from `run_projection`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionOutput {
    pub points: Vec<ProjectionPoint>,
    pub summary: FireSummary,
}

/// Compute (1 + r)^n via iterative multiplication (avoids Decimal::powd drift).
fn compound(rate: Rate, n: u32) -> Decimal {
    let mut result = Decimal::ONE;
    let factor = Decimal::ONE + rate;
    for _ in 0..n {
        result *= factor;
    }
    result
}

/// Project wealth year by year from the current age through age 95,
/// with early termination once the portfolio is depleted in retirement.
pub fn run_projection(
    input: &ProjectionInput,
) -> FirePlanResult<ComputationOutput<ProjectionOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    let profile = &input.profile;
    let growth = input.annual_growth_rate / dec!(100);
    let inflation = input.inflation_rate / dec!(100);

    // Constant across all accumulation years
    let total_annual_investment = profile.monthly_contribution * dec!(12)
        + profile.annual_401k
        + profile.employer_match
        + profile.mega_backdoor;

    if profile.retirement_age <= profile.current_age {
        warnings.push(format!(
            "retirement_age ({}) <= current_age ({}); projection starts in decumulation",
            profile.retirement_age, profile.current_age
        ));
    }

    let mut points: Vec<ProjectionPoint> = Vec::new();
    let mut wealth = profile.initial_capital;

    for age in profile.current_age..=PROJECTION_END_AGE {
        let year_index = (age - profile.current_age) as u32;
        let is_retired = age >= profile.retirement_age;

        if !is_retired {
            wealth = wealth * (Decimal::ONE + growth) + total_annual_investment;
        } else {
            let nominal_spending = profile.annual_spending * compound(inflation, year_index);
            wealth = wealth * (Decimal::ONE + growth) - nominal_spending;
        }

        if wealth < Decimal::ZERO {
            wealth = Decimal::ZERO;
        }

        let inflation_factor = compound(inflation, year_index);
        let display_wealth = if input.show_real_value && !inflation_factor.is_zero() {
            wealth / inflation_factor
        } else {
            wealth
        };

        points.push(ProjectionPoint {
            age,
            wealth: display_wealth.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
            is_retired,
        });

        // Depleted after retirement: stop, keeping the zero point just
        // emitted. The strict `>` preserves one extra iteration when
        // wealth hits zero exactly at the retirement age.
        if wealth.is_zero() && age > profile.retirement_age {
            warnings.push(format!("Portfolio depleted at age {age}"));
            break;
        }
    }

    let summary = summarize(&points, profile);

    let output = ProjectionOutput { points, summary };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Wealth Projection (accumulation/decumulation compounding through age 95)",
        &serde_json::json!({
            "current_age": profile.current_age,
            "retirement_age": profile.retirement_age,
            "annual_growth_rate": input.annual_growth_rate.to_string(),
            "inflation_rate": input.inflation_rate.to_string(),
            "show_real_value": input.show_real_value,
            "total_annual_investment": total_annual_investment.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

/// Derive the FIRE summary from the emitted point sequence.
fn summarize(points: &[ProjectionPoint], profile: &FinancialProfile) -> FireSummary {
    let wealth_at_retirement = points
        .iter()
        .find(|p| p.age == profile.retirement_age)
        .map(|p| p.wealth)
        .unwrap_or(Decimal::ZERO);

    let fire_target = profile.annual_spending * FIRE_TARGET_MULTIPLE;

    let safe_withdrawal_rate = if wealth_at_retirement > Decimal::ZERO {
        profile.annual_spending / wealth_at_retirement * dec!(100)
    } else {
        Decimal::ZERO
    };

    FireSummary {
        wealth_at_retirement,
        fire_target,
        target_met: wealth_at_retirement >= fire_target,
        safe_withdrawal_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    /// Baseline scenario: all contributions zero, pure
    /// compounding into a spending-heavy retirement.
    fn reference_input() -> ProjectionInput {
        ProjectionInput {
            profile: FinancialProfile {
                current_age: 30,
                retirement_age: 50,
                initial_capital: dec!(100_000),
                monthly_contribution: Decimal::ZERO,
                annual_401k: Decimal::ZERO,
                employer_match: Decimal::ZERO,
                mega_backdoor: Decimal::ZERO,
                annual_spending: dec!(100_000),
            },
            annual_growth_rate: dec!(8),
            inflation_rate: dec!(2.8),
            show_real_value: false,
        }
    }

    #[test]
    fn test_accumulation_compounds_without_contributions() {
        let result = run_projection(&reference_input()).unwrap();
        let points = &result.result.points;

        assert_eq!(points[0].age, 30);
        // First year: 100k * 1.08 = 108k
        assert_eq!(points[0].wealth, dec!(108_000));
        assert!(!points[0].is_retired);

        // Strictly increasing until retirement
        let accumulation: Vec<&ProjectionPoint> =
            points.iter().filter(|p| !p.is_retired).collect();
        assert_eq!(accumulation.len(), 20);
        for pair in accumulation.windows(2) {
            assert!(pair[1].wealth > pair[0].wealth);
        }
    }

    #[test]
    fn test_depletion_stops_before_95_and_never_negative() {
        let result = run_projection(&reference_input()).unwrap();
        let points = &result.result.points;

        // $100k of spending against the retirement pot depletes it early
        let last = points.last().unwrap();
        assert!(last.age < 95, "expected early termination, got {}", last.age);
        assert_eq!(last.wealth, Decimal::ZERO);
        assert!(last.is_retired);
        for p in points {
            assert!(p.wealth >= Decimal::ZERO);
        }
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("depleted")));
    }

    #[test]
    fn test_contributions_added_after_growth() {
        let mut input = reference_input();
        input.profile.monthly_contribution = dec!(1_000);
        input.profile.annual_401k = dec!(23_000);
        input.profile.employer_match = dec!(7_000);
        input.profile.mega_backdoor = dec!(30_000);

        let result = run_projection(&input).unwrap();
        let first = &result.result.points[0];

        // 100k * 1.08 + (12k + 23k + 7k + 30k) = 180k
        assert_eq!(first.wealth, dec!(180_000));
    }

    #[test]
    fn test_retirement_spending_is_inflation_adjusted() {
        let mut input = reference_input();
        input.profile.initial_capital = dec!(10_000_000);

        let result = run_projection(&input).unwrap();
        let points = &result.result.points;

        // Age 50 is the first retired year, year_index 20
        let retired: Vec<&ProjectionPoint> = points.iter().filter(|p| p.is_retired).collect();
        assert_eq!(retired[0].age, 50);

        // Recompute age-50 wealth by hand: 20 accumulation years of pure
        // growth, then one retired year of growth minus adjusted spending
        let mut expected = dec!(10_000_000);
        for _ in 0..20 {
            expected *= dec!(1.08);
        }
        expected = expected * dec!(1.08) - dec!(100_000) * compound(dec!(0.028), 20);
        assert_eq!(
            retired[0].wealth,
            expected.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        );
    }

    #[test]
    fn test_real_value_divides_by_inflation_factor() {
        let nominal = run_projection(&reference_input()).unwrap().result.points;

        let mut real_input = reference_input();
        real_input.show_real_value = true;
        let real = run_projection(&real_input).unwrap().result.points;

        assert_eq!(nominal.len(), real.len());
        for (n, r) in nominal.iter().zip(real.iter()) {
            let year_index = (n.age - 30) as u32;
            let factor = compound(dec!(0.028), year_index);
            // Both sides were rounded independently, so allow a dollar
            let expected = n.wealth / factor;
            assert!(
                (r.wealth - expected).abs() <= Decimal::ONE,
                "age {}: {} vs {}",
                n.age,
                r.wealth,
                expected
            );
        }
    }

    #[test]
    fn test_runs_through_95_when_sustainable() {
        let mut input = reference_input();
        input.profile.initial_capital = dec!(10_000_000);
        input.profile.annual_spending = dec!(50_000);

        let result = run_projection(&input).unwrap();
        let points = &result.result.points;
        assert_eq!(points.last().unwrap().age, 95);
        assert_eq!(points.len(), 66);
    }

    #[test]
    fn test_retirement_age_at_or_below_current_age_not_rejected() {
        let mut input = reference_input();
        input.profile.retirement_age = 30;

        let result = run_projection(&input).unwrap();
        let points = &result.result.points;

        // Every emitted year is decumulation
        assert!(points.iter().all(|p| p.is_retired));
        assert!(result
            .warnings
            .iter()
            .any(|w| w.contains("starts in decumulation")));
    }

    #[test]
    fn test_zero_wealth_at_retirement_age_does_not_stop_early() {
        // Depleted exactly at the retirement boundary: the strict `>`
        // comparison allows one more emitted point
        let input = ProjectionInput {
            profile: FinancialProfile {
                current_age: 50,
                retirement_age: 50,
                initial_capital: Decimal::ZERO,
                monthly_contribution: Decimal::ZERO,
                annual_401k: Decimal::ZERO,
                employer_match: Decimal::ZERO,
                mega_backdoor: Decimal::ZERO,
                annual_spending: dec!(10_000),
            },
            annual_growth_rate: dec!(8),
            inflation_rate: dec!(2.8),
            show_real_value: false,
        };
        let result = run_projection(&input).unwrap();
        let points = &result.result.points;

        assert_eq!(points[0].age, 50);
        assert_eq!(points[0].wealth, Decimal::ZERO);
        // Age 50 did not stop the loop; age 51 did
        assert_eq!(points[1].age, 51);
        assert_eq!(points.len(), 2);
    }

    #[test]
    fn test_summary_fire_target_and_swr() {
        let mut input = reference_input();
        input.profile.initial_capital = dec!(10_000_000);
        let result = run_projection(&input).unwrap();
        let summary = &result.result.summary;

        assert_eq!(summary.fire_target, dec!(2_500_000));
        assert!(summary.target_met);
        assert!(summary.wealth_at_retirement > dec!(2_500_000));
        assert_eq!(
            summary.safe_withdrawal_rate,
            dec!(100_000) / summary.wealth_at_retirement * dec!(100)
        );
    }

    #[test]
    fn test_summary_zero_retirement_wealth() {
        let input = ProjectionInput {
            profile: FinancialProfile {
                current_age: 30,
                retirement_age: 29,
                initial_capital: dec!(1_000),
                monthly_contribution: Decimal::ZERO,
                annual_401k: Decimal::ZERO,
                employer_match: Decimal::ZERO,
                mega_backdoor: Decimal::ZERO,
                annual_spending: dec!(100_000),
            },
            annual_growth_rate: dec!(8),
            inflation_rate: dec!(2.8),
            show_real_value: false,
        };
        let result = run_projection(&input).unwrap();
        let summary = &result.result.summary;

        // No point is ever emitted at age 29
        assert_eq!(summary.wealth_at_retirement, Decimal::ZERO);
        assert_eq!(summary.safe_withdrawal_rate, Decimal::ZERO);
        assert!(!summary.target_met);
    }

    #[test]
    fn test_compound_basic() {
        assert_eq!(compound(dec!(0.10), 3), dec!(1.331));
        assert_eq!(compound(dec!(0.05), 0), Decimal::ONE);
    }
}
