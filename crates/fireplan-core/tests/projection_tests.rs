use fireplan_core::projection::{
    run_projection, FinancialProfile, ProjectionInput,
};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn default_profile() -> FinancialProfile {
    FinancialProfile {
        current_age: 30,
        retirement_age: 50,
        initial_capital: dec!(100_000),
        monthly_contribution: dec!(5_000),
        annual_401k: dec!(23_000),
        employer_match: dec!(7_000),
        mega_backdoor: dec!(30_000),
        annual_spending: dec!(100_000),
    }
}

fn balanced_input() -> ProjectionInput {
    ProjectionInput {
        profile: default_profile(),
        annual_growth_rate: dec!(8.0),
        inflation_rate: dec!(2.8),
        show_real_value: false,
    }
}

// ===========================================================================
// Projection shape
// ===========================================================================

#[test]
fn test_projection_starts_at_current_age() {
    let output = run_projection(&balanced_input()).unwrap().result;
    assert_eq!(output.points[0].age, 30);
    assert!(!output.points[0].is_retired);
}

#[test]
fn test_retirement_flag_flips_at_retirement_age() {
    let output = run_projection(&balanced_input()).unwrap().result;
    for point in &output.points {
        assert_eq!(point.is_retired, point.age >= 50, "age {}", point.age);
    }
}

#[test]
fn test_wealth_never_negative() {
    // Heavy spending against a small pot forces depletion
    let mut input = balanced_input();
    input.profile.annual_spending = dec!(500_000);
    let output = run_projection(&input).unwrap().result;

    for point in &output.points {
        assert!(point.wealth >= Decimal::ZERO, "age {}", point.age);
    }
}

#[test]
fn test_points_are_whole_dollars() {
    let output = run_projection(&balanced_input()).unwrap().result;
    for point in &output.points {
        assert_eq!(
            point.wealth,
            point.wealth.round_dp(0),
            "age {} not rounded: {}",
            point.age,
            point.wealth
        );
    }
}

// ===========================================================================
// Accumulation and decumulation arithmetic
// ===========================================================================

#[test]
fn test_default_scenario_reaches_fire_target() {
    // $120k of annual savings at 8% over 20 years comfortably clears
    // 25x of a $100k spend
    let output = run_projection(&balanced_input()).unwrap().result;
    let summary = output.summary;

    assert_eq!(summary.fire_target, dec!(2_500_000));
    assert!(
        summary.wealth_at_retirement > summary.fire_target,
        "wealth at retirement {} should exceed target",
        summary.wealth_at_retirement
    );
    assert!(summary.target_met);
    assert!(summary.safe_withdrawal_rate < dec!(4));
}

#[test]
fn test_first_year_hand_computed() {
    let output = run_projection(&balanced_input()).unwrap().result;
    // 100,000 * 1.08 + (5,000*12 + 23,000 + 7,000 + 30,000) = 228,000
    assert_eq!(output.points[0].wealth, dec!(228_000));
}

#[test]
fn test_spending_grows_with_inflation() {
    // With zero growth the retirement drawdown accelerates every year
    // because spending is inflation-adjusted
    let mut input = balanced_input();
    input.profile.initial_capital = dec!(5_000_000);
    input.profile.monthly_contribution = Decimal::ZERO;
    input.profile.annual_401k = Decimal::ZERO;
    input.profile.employer_match = Decimal::ZERO;
    input.profile.mega_backdoor = Decimal::ZERO;
    input.annual_growth_rate = Decimal::ZERO;

    let output = run_projection(&input).unwrap().result;
    let retired: Vec<_> = output
        .points
        .iter()
        .filter(|p| p.is_retired && p.wealth > Decimal::ZERO)
        .collect();

    let mut previous_drop = Decimal::ZERO;
    for pair in retired.windows(2) {
        let drop = pair[0].wealth - pair[1].wealth;
        assert!(drop > previous_drop, "drawdown should accelerate");
        previous_drop = drop;
    }
}

// ===========================================================================
// Termination behavior
// ===========================================================================

#[test]
fn test_sustainable_plan_runs_to_95() {
    let mut input = balanced_input();
    input.profile.annual_spending = dec!(80_000);
    let output = run_projection(&input).unwrap().result;

    assert_eq!(output.points.last().unwrap().age, 95);
    assert_eq!(output.points.len(), 66);
}

#[test]
fn test_depleted_plan_stops_with_one_zero_point() {
    let mut input = balanced_input();
    input.profile.monthly_contribution = Decimal::ZERO;
    input.profile.annual_401k = Decimal::ZERO;
    input.profile.employer_match = Decimal::ZERO;
    input.profile.mega_backdoor = Decimal::ZERO;

    let result = run_projection(&input).unwrap();
    let points = &result.result.points;
    let last = points.last().unwrap();

    assert!(last.age < 95);
    assert_eq!(last.wealth, Decimal::ZERO);
    // Exactly one zero point at the tail
    let zeros = points.iter().filter(|p| p.wealth.is_zero()).count();
    assert_eq!(zeros, 1);
    assert!(result.warnings.iter().any(|w| w.contains("depleted")));
}

// ===========================================================================
// Real vs nominal display
// ===========================================================================

#[test]
fn test_real_value_smaller_than_nominal_after_year_zero() {
    let nominal = run_projection(&balanced_input()).unwrap().result.points;

    let mut input = balanced_input();
    input.show_real_value = true;
    let real = run_projection(&input).unwrap().result.points;

    // Year zero has inflation factor 1; every later year deflates
    assert_eq!(nominal[0].wealth, real[0].wealth);
    for (n, r) in nominal.iter().zip(real.iter()).skip(1) {
        if n.wealth > Decimal::ZERO {
            assert!(r.wealth < n.wealth, "age {}", n.age);
        }
    }
}

#[test]
fn test_zero_inflation_makes_real_equal_nominal() {
    let mut nominal_input = balanced_input();
    nominal_input.inflation_rate = Decimal::ZERO;
    let nominal = run_projection(&nominal_input).unwrap().result.points;

    let mut real_input = nominal_input.clone();
    real_input.show_real_value = true;
    let real = run_projection(&real_input).unwrap().result.points;

    assert_eq!(nominal.len(), real.len());
    for (n, r) in nominal.iter().zip(real.iter()) {
        assert_eq!(n.wealth, r.wealth);
    }
}

// ===========================================================================
// Permissive profile handling
// ===========================================================================

#[test]
fn test_immediate_retirement_allowed_with_warning() {
    let mut input = balanced_input();
    input.profile.retirement_age = 25;

    let result = run_projection(&input).unwrap();
    assert!(result.result.points.iter().all(|p| p.is_retired));
    assert!(result
        .warnings
        .iter()
        .any(|w| w.contains("decumulation")));
}

#[test]
fn test_envelope_carries_assumptions() {
    let result = run_projection(&balanced_input()).unwrap();
    assert_eq!(result.assumptions["retirement_age"], 50);
    assert_eq!(result.assumptions["total_annual_investment"], "120000");
    assert_eq!(result.metadata.precision, "rust_decimal_128bit");
}
