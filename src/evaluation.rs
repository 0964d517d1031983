//! Combined form-submission entry point
//!
//! One call takes the two raw form fields through parsing, validation, BMI
//! computation, and classification, returning everything the result view
//! needs. Resetting the form is the caller's concern: dropping the
//! [`BmiResult`] is the reset, the evaluator keeps no state.

use serde::Serialize;
use tracing::debug;

use crate::classification::Classification;
use crate::error::Result;
use crate::measurement::Measurement;

/// Outcome of a successful evaluation
///
/// Carries the validated measurement alongside the computed BMI and its
/// classification, since the result view displays all three. Immutable once
/// produced; only [`evaluate`] creates one, so the BMI and classification
/// always agree with the measurement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmiResult {
    measurement: Measurement,
    bmi: f64,
    classification: Classification,
}

impl BmiResult {
    /// The validated measurement this result was computed from
    pub fn measurement(&self) -> Measurement {
        self.measurement
    }

    /// The computed body mass index
    pub fn bmi(&self) -> f64 {
        self.bmi
    }

    /// The classification band the BMI falls in
    pub fn classification(&self) -> Classification {
        self.classification
    }
}

/// Evaluate raw form input in one step
///
/// Parses and validates the fields, computes the BMI, and classifies it.
/// This is the call a form submit handler makes; the individual steps are
/// also public for callers that need them separately.
///
/// # Arguments
///
/// * `raw_weight` - Weight field text, in kilograms
/// * `raw_height` - Height field text, in centimeters
///
/// # Returns
///
/// A [`BmiResult`] ready for display, or the first validation error.
///
/// # Examples
///
/// ```
/// use bmi_evaluator::{evaluate, Classification};
///
/// let result = evaluate("70", "175").unwrap();
/// assert!((result.bmi() - 22.857).abs() < 0.001);
/// assert_eq!(result.classification(), Classification::Normal);
///
/// assert!(evaluate("70", "abc").is_err());
/// ```
pub fn evaluate(raw_weight: &str, raw_height: &str) -> Result<BmiResult> {
    let measurement = Measurement::parse(raw_weight, raw_height)?;
    let bmi = measurement.bmi();
    let classification = Classification::from_bmi(bmi);

    debug!("BMI {:.2} classified as {}", bmi, classification);

    Ok(BmiResult {
        measurement,
        bmi,
        classification,
    })
}
