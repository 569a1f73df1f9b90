pub mod assets;
pub mod metrics;
pub mod project;
pub mod strategy;
