pub mod catalog;
pub mod error;
pub mod types;

#[cfg(feature = "metrics")]
pub mod metrics;

#[cfg(feature = "projection")]
pub mod projection;

#[cfg(feature = "strategy")]
pub mod strategy;

pub use error::FirePlanError;
pub use types::*;

/// Standard result type for all fireplan operations
pub type FirePlanResult<T> = Result<T, FirePlanError>;
