//! Error types for field configuration.

use thiserror::Error;

/// Rejected [`FieldConfig`](crate::FieldConfig) values.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("particle count must be positive")]
    EmptyField,
    #[error("{name} range is inverted or negative: {min}..{max}")]
    InvalidRange { name: &'static str, min: f32, max: f32 },
    #[error("{name} must be positive, got {value}")]
    NonPositive { name: &'static str, value: f64 },
    #[error("{name} probability must lie in [0, 1], got {value}")]
    Probability { name: &'static str, value: f64 },
    #[error("link fan-out {min}..={max} is invalid")]
    FanOut { min: usize, max: usize },
}
