use std::fmt;

use thiserror::Error;

use crate::model::ModelKind;

/// Which of the two supplied models lacks the requested coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingIn {
    /// Absent from the first model only
    Left,
    /// Absent from the second model only
    Right,
    /// Absent from both models
    Both,
}

impl fmt::Display for MissingIn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingIn::Left => write!(f, "the first model"),
            MissingIn::Right => write!(f, "the second model"),
            MissingIn::Both => write!(f, "either model"),
        }
    }
}

/// Errors that can occur when comparing coefficients between models
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CompareError {
    #[error("Model types differ: {left} vs {right} (both models must be the same kind)")]
    TypeMismatch { left: ModelKind, right: ModelKind },

    #[error("Unsupported model type: {0:?}")]
    UnsupportedModelType(String),

    #[error("Coefficient {name:?} not found in {missing}")]
    CoefficientNotFound { name: String, missing: MissingIn },

    #[error("Combined variance {variance} is not positive and finite; the test statistic is undefined")]
    DegenerateVariance { variance: f64 },

    #[error("Invalid confidence level: {0} (must lie strictly between 0 and 1)")]
    InvalidConfidenceLevel(f64),
}

/// Result type for coefficient comparisons
pub type CompareResult<T> = Result<T, CompareError>;
