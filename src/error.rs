//! Error types for planning calculations, loaders and reporting

use thiserror::Error;

/// Failures raised by the projection itself when a profile cannot be projected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("income must be positive to derive a savings rate (got {0})")]
    NonPositiveIncome(f64),

    #[error("goal amount must be positive to derive a funded ratio (got {0})")]
    NonPositiveGoal(f64),

    #[error("client aged {age} has no accumulation years left before retirement age {retirement_age}")]
    AlreadyRetired { age: u32, retirement_age: u32 },

    #[error("{quantity} is not a finite amount under the current assumptions")]
    NonFiniteProjection { quantity: &'static str },
}

/// Crate-wide error type
#[derive(Error, Debug)]
pub enum PlanningError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("Invalid profile field `{field}`: {reason}")]
    InvalidProfile { field: &'static str, reason: String },

    #[error("Invalid assumption `{key}`: {reason}")]
    InvalidAssumption { key: String, reason: String },

    #[error("Unknown assumption key: {0}")]
    UnknownAssumption(String),

    #[error("No client record found in {0}")]
    EmptyInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type PlanningResult<T> = Result<T, PlanningError>;
