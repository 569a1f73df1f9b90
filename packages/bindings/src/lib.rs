use napi::Result as NapiResult;
use napi_derive::napi;
use std::str::FromStr;

/// Convert any Display error into a napi::Error.
fn to_napi_error(e: impl std::fmt::Display) -> napi::Error {
    napi::Error::from_reason(e.to_string())
}

// ---------------------------------------------------------------------------
// Portfolio metrics
// ---------------------------------------------------------------------------

#[napi]
pub fn calculate_portfolio_metrics(input_json: String) -> NapiResult<String> {
    let input: fireplan_core::metrics::MetricsInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output =
        fireplan_core::metrics::calculate_portfolio_metrics(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Projection
// ---------------------------------------------------------------------------

#[napi]
pub fn run_projection(input_json: String) -> NapiResult<String> {
    let input: fireplan_core::projection::ProjectionInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fireplan_core::projection::run_projection(&input).map_err(to_napi_error)?;
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

#[napi]
pub fn build_custom_strategy(input_json: String) -> NapiResult<String> {
    let input: fireplan_core::strategy::CustomStrategyInput =
        serde_json::from_str(&input_json).map_err(to_napi_error)?;
    let output = fireplan_core::strategy::build_custom_strategy(&input);
    serde_json::to_string(&output).map_err(to_napi_error)
}

#[napi]
pub fn preset_strategies() -> NapiResult<String> {
    let output = fireplan_core::strategy::preset_strategies();
    serde_json::to_string(&output).map_err(to_napi_error)
}

// ---------------------------------------------------------------------------
// Asset catalog
// ---------------------------------------------------------------------------

#[napi]
pub fn list_assets() -> NapiResult<String> {
    serde_json::to_string(fireplan_core::catalog::ASSET_CLASSES).map_err(to_napi_error)
}

#[napi]
pub fn get_asset_by_symbol(symbol: String) -> NapiResult<String> {
    match fireplan_core::catalog::asset_by_symbol(&symbol) {
        Some(asset) => serde_json::to_string(asset).map_err(to_napi_error),
        None => Ok("null".to_string()),
    }
}

#[napi]
pub fn get_historical_returns(symbol: String, period: String) -> NapiResult<String> {
    let period =
        fireplan_core::catalog::TimePeriod::from_str(&period).map_err(to_napi_error)?;
    match fireplan_core::catalog::historical_returns(&symbol, period) {
        Some(returns) => serde_json::to_string(returns).map_err(to_napi_error),
        None => Ok("null".to_string()),
    }
}

#[napi]
pub fn category_averages() -> NapiResult<String> {
    let output = fireplan_core::catalog::category_averages();
    serde_json::to_string(&output).map_err(to_napi_error)
}
