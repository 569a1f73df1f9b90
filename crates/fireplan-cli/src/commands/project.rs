use clap::Args;
use rust_decimal::Decimal;
use serde_json::Value;

use fireplan_core::projection::{run_projection, FinancialProfile, ProjectionInput};
use fireplan_core::strategy::preset_by_id;

/// Arguments for the wealth projection. Defaults mirror a typical
/// high-saver profile so the command works out of the box.
#[derive(Args)]
pub struct ProjectArgs {
    /// Current age
    #[arg(long, default_value = "30")]
    pub current_age: i32,

    /// Planned retirement age
    #[arg(long, default_value = "50")]
    pub retirement_age: i32,

    /// Starting portfolio value
    #[arg(long, default_value = "100000")]
    pub initial_capital: Decimal,

    /// Monthly taxable contribution
    #[arg(long, default_value = "5000")]
    pub monthly_contribution: Decimal,

    /// Annual 401(k) employee contribution
    #[arg(long, default_value = "23000")]
    pub annual_401k: Decimal,

    /// Annual employer match
    #[arg(long, default_value = "7000")]
    pub employer_match: Decimal,

    /// Annual mega backdoor Roth contribution
    #[arg(long, default_value = "30000")]
    pub mega_backdoor: Decimal,

    /// Annual spending in retirement (today's dollars)
    #[arg(long, default_value = "100000")]
    pub annual_spending: Decimal,

    /// Nominal annual growth rate in percent (overridden by --preset)
    #[arg(long, default_value = "8.0")]
    pub growth: Decimal,

    /// Use a preset strategy's growth rate: conservative, balanced, aggressive
    #[arg(long)]
    pub preset: Option<String>,

    /// Annual inflation rate in percent
    #[arg(long, default_value = "2.8")]
    pub inflation: Decimal,

    /// Display inflation-adjusted (real) values instead of nominal
    #[arg(long)]
    pub real: bool,
}

pub fn run_project(args: ProjectArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let growth = match &args.preset {
        Some(id) => {
            preset_by_id(id)
                .ok_or_else(|| {
                    format!("Unknown preset '{id}'. Use: conservative, balanced, aggressive")
                })?
                .growth
        }
        None => args.growth,
    };

    let input = ProjectionInput {
        profile: FinancialProfile {
            current_age: args.current_age,
            retirement_age: args.retirement_age,
            initial_capital: args.initial_capital,
            monthly_contribution: args.monthly_contribution,
            annual_401k: args.annual_401k,
            employer_match: args.employer_match,
            mega_backdoor: args.mega_backdoor,
            annual_spending: args.annual_spending,
        },
        annual_growth_rate: growth,
        inflation_rate: args.inflation,
        show_real_value: args.real,
    };

    let output = run_projection(&input)?;
    Ok(serde_json::to_value(output)?)
}
