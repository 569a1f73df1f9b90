use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FirePlanError {
    #[error("Invalid allocation: percentages sum to {total}, expected 100 ± 0.1")]
    InvalidAllocation { total: Decimal },

    #[error("Unknown asset: '{0}' is not in the asset catalog")]
    UnknownAsset(String),

    #[error("Invalid input: {field} — {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

impl From<serde_json::Error> for FirePlanError {
    fn from(e: serde_json::Error) -> Self {
        FirePlanError::SerializationError(e.to_string())
    }
}
