//! # BMI Evaluator
//!
//! Form-facing logic for a BMI calculator, including:
//! - Input parsing and validation (`Measurement`)
//! - BMI computation and classification (`Classification`)
//! - Combined form-submission entry point (`evaluate`)
//! - Reference table data for display alongside results
//!
//! The crate is pure computation: no I/O, no state, no alerting. A
//! presentation layer feeds it the raw field text and renders whatever
//! comes back, including the validation errors.

pub mod classification;
pub mod error;
pub mod evaluation;
pub mod measurement;

pub use classification::Classification;
pub use error::{Result, ValidationError};
pub use evaluation::{evaluate, BmiResult};
pub use measurement::{Measurement, MAX_HEIGHT_M, MAX_WEIGHT_KG, MIN_HEIGHT_M, MIN_WEIGHT_KG};
