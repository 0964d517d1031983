//! Validation error types for the BMI evaluator

use serde::Serialize;
use thiserror::Error;

use crate::measurement::{MAX_HEIGHT_M, MAX_WEIGHT_KG, MIN_HEIGHT_M, MIN_WEIGHT_KG};

/// Result type for evaluator operations
pub type Result<T> = std::result::Result<T, ValidationError>;

/// Input validation failures
///
/// Every variant is a user-input problem: never fatal, always recoverable
/// by re-submitting the form. The evaluator returns these to the caller and
/// performs no alerting of its own; user-visible messaging belongs to the
/// presentation layer.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    /// Weight or height field was empty or blank
    #[error("weight and height are required")]
    MissingField,

    /// Input did not parse as a decimal number (carries the raw input)
    #[error("'{0}' is not a valid number")]
    NotANumber(String),

    /// Parsed weight falls outside the accepted range (carries the value in kg)
    #[error(
        "weight must be between {min} and {max} kg (got {value})",
        min = MIN_WEIGHT_KG,
        max = MAX_WEIGHT_KG
    )]
    WeightOutOfRange { value: f64 },

    /// Parsed height falls outside the accepted range (carries the value in meters)
    #[error(
        "height must be between {min} and {max} m (got {value})",
        min = MIN_HEIGHT_M,
        max = MAX_HEIGHT_M
    )]
    HeightOutOfRange { value: f64 },
}
