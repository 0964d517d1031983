//! Measurement parsing and validation
//!
//! Turns the raw weight/height strings from a form submission into a
//! validated [`Measurement`], applying the same guards in the same order a
//! user sees them: missing fields, unparseable numbers, weight range, height
//! range. Height is entered in centimeters and stored in meters.
//!
//! The struct's fields are private on purpose: every `Measurement` in
//! existence has passed validation, so downstream code (BMI computation,
//! classification) never has to re-check.

use serde::Serialize;

use crate::error::{Result, ValidationError};

/// Lightest accepted weight, in kilograms
pub const MIN_WEIGHT_KG: f64 = 2.0;

/// Heaviest accepted weight, in kilograms
pub const MAX_WEIGHT_KG: f64 = 500.0;

/// Shortest accepted height, in meters
pub const MIN_HEIGHT_M: f64 = 0.5;

/// Tallest accepted height, in meters
pub const MAX_HEIGHT_M: f64 = 2.5;

/// Form input arrives in centimeters; heights are stored in meters
const CM_PER_M: f64 = 100.0;

/// A validated weight/height pair from one form submission
///
/// Valid ranges: weight [2, 500] kg, height [0.5, 2.5] m.
///
/// Instances can only be created through [`Measurement::new`] or
/// [`Measurement::parse`], both of which enforce the ranges above, so a
/// `Measurement` is never partially valid. Values are transient per
/// submission and not persisted anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Measurement {
    weight_kg: f64,
    height_m: f64,
}

impl Measurement {
    /// Create a measurement from already-numeric values
    ///
    /// # Arguments
    ///
    /// * `weight_kg` - Weight in kilograms, must be within [2, 500]
    /// * `height_m` - Height in meters, must be within [0.5, 2.5]
    ///
    /// # Returns
    ///
    /// The validated measurement, or `WeightOutOfRange`/`HeightOutOfRange`.
    /// Weight is checked first. Non-finite values never pass the range
    /// checks, so the resulting BMI is always finite.
    ///
    /// # Examples
    ///
    /// ```
    /// use bmi_evaluator::{Measurement, ValidationError};
    ///
    /// let m = Measurement::new(70.0, 1.75).unwrap();
    /// assert_eq!(m.weight_kg(), 70.0);
    ///
    /// let err = Measurement::new(700.0, 1.75).unwrap_err();
    /// assert_eq!(err, ValidationError::WeightOutOfRange { value: 700.0 });
    /// ```
    pub fn new(weight_kg: f64, height_m: f64) -> Result<Self> {
        if !(MIN_WEIGHT_KG..=MAX_WEIGHT_KG).contains(&weight_kg) {
            return Err(ValidationError::WeightOutOfRange { value: weight_kg });
        }
        if !(MIN_HEIGHT_M..=MAX_HEIGHT_M).contains(&height_m) {
            return Err(ValidationError::HeightOutOfRange { value: height_m });
        }
        Ok(Self {
            weight_kg,
            height_m,
        })
    }

    /// Parse and validate raw form input
    ///
    /// Accepts comma or period as the decimal separator and ignores
    /// surrounding whitespace. Height is expected in centimeters and is
    /// converted to meters before range checking.
    ///
    /// # Arguments
    ///
    /// * `raw_weight` - Weight field text, in kilograms
    /// * `raw_height` - Height field text, in centimeters
    ///
    /// # Returns
    ///
    /// The validated measurement, or the first failing check in order:
    /// `MissingField`, `NotANumber`, `WeightOutOfRange`, `HeightOutOfRange`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bmi_evaluator::{Measurement, ValidationError};
    ///
    /// let m = Measurement::parse("70,5", "175").unwrap();
    /// assert_eq!(m.weight_kg(), 70.5);
    /// assert_eq!(m.height_m(), 1.75);
    ///
    /// assert_eq!(
    ///     Measurement::parse("", "175").unwrap_err(),
    ///     ValidationError::MissingField
    /// );
    /// ```
    pub fn parse(raw_weight: &str, raw_height: &str) -> Result<Self> {
        let raw_weight = raw_weight.trim();
        let raw_height = raw_height.trim();

        if raw_weight.is_empty() || raw_height.is_empty() {
            return Err(ValidationError::MissingField);
        }

        let weight_kg = parse_decimal(raw_weight)?;
        let height_cm = parse_decimal(raw_height)?;

        Self::new(weight_kg, height_cm / CM_PER_M)
    }

    /// Weight in kilograms
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    /// Height in meters
    pub fn height_m(&self) -> f64 {
        self.height_m
    }

    /// Body mass index: weight divided by height squared
    ///
    /// Finite and positive for every constructible measurement, since
    /// validation bounds the height away from zero.
    ///
    /// # Examples
    ///
    /// ```
    /// use bmi_evaluator::Measurement;
    ///
    /// let m = Measurement::parse("70", "175").unwrap();
    /// assert!((m.bmi() - 22.857).abs() < 0.001);
    /// ```
    pub fn bmi(&self) -> f64 {
        self.weight_kg / (self.height_m * self.height_m)
    }
}

/// Parse one field's text as a decimal number
///
/// Normalizes a comma decimal separator to a period first, so "70,5" and
/// "70.5" are equivalent.
fn parse_decimal(raw: &str) -> Result<f64> {
    let value: f64 = raw
        .replace(',', ".")
        .parse()
        .map_err(|_| ValidationError::NotANumber(raw.to_string()))?;

    // f64::from_str accepts the literal "NaN"; treat it like any other
    // unparseable input. Infinities fall through to the range checks.
    if value.is_nan() {
        return Err(ValidationError::NotANumber(raw.to_string()));
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_input() {
        let m = Measurement::parse("70", "175").unwrap();
        assert_eq!(m.weight_kg(), 70.0);
        assert_eq!(m.height_m(), 1.75);
    }

    #[test]
    fn test_parse_comma_decimal() {
        let m = Measurement::parse("70,5", "175").unwrap();
        assert_eq!(m.weight_kg(), 70.5);

        let m = Measurement::parse("70.5", "175").unwrap();
        assert_eq!(m.weight_kg(), 70.5);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let m = Measurement::parse("  70 ", " 175\t").unwrap();
        assert_eq!(m.weight_kg(), 70.0);
        assert_eq!(m.height_m(), 1.75);
    }

    #[test]
    fn test_parse_missing_fields() {
        assert_eq!(
            Measurement::parse("", "175").unwrap_err(),
            ValidationError::MissingField
        );
        assert_eq!(
            Measurement::parse("70", "").unwrap_err(),
            ValidationError::MissingField
        );
        // Blank counts as missing
        assert_eq!(
            Measurement::parse("   ", "175").unwrap_err(),
            ValidationError::MissingField
        );
    }

    #[test]
    fn test_parse_non_numeric() {
        assert_eq!(
            Measurement::parse("70", "abc").unwrap_err(),
            ValidationError::NotANumber("abc".to_string())
        );
        assert_eq!(
            Measurement::parse("abc", "175").unwrap_err(),
            ValidationError::NotANumber("abc".to_string())
        );
        // Two commas produce "70.0.5", which does not parse
        assert_eq!(
            Measurement::parse("70,0,5", "175").unwrap_err(),
            ValidationError::NotANumber("70,0,5".to_string())
        );
    }

    #[test]
    fn test_parse_rejects_nan_literal() {
        assert_eq!(
            Measurement::parse("NaN", "175").unwrap_err(),
            ValidationError::NotANumber("NaN".to_string())
        );
    }

    #[test]
    fn test_weight_range_boundaries() {
        assert!(Measurement::new(MIN_WEIGHT_KG, 1.75).is_ok());
        assert!(Measurement::new(MAX_WEIGHT_KG, 1.75).is_ok());
        assert_eq!(
            Measurement::new(1.9, 1.75).unwrap_err(),
            ValidationError::WeightOutOfRange { value: 1.9 }
        );
        assert_eq!(
            Measurement::new(500.1, 1.75).unwrap_err(),
            ValidationError::WeightOutOfRange { value: 500.1 }
        );
    }

    #[test]
    fn test_height_range_boundaries() {
        assert!(Measurement::new(70.0, MIN_HEIGHT_M).is_ok());
        assert!(Measurement::new(70.0, MAX_HEIGHT_M).is_ok());
        assert!(matches!(
            Measurement::new(70.0, 0.49).unwrap_err(),
            ValidationError::HeightOutOfRange { .. }
        ));
        assert!(matches!(
            Measurement::new(70.0, 2.51).unwrap_err(),
            ValidationError::HeightOutOfRange { .. }
        ));
    }

    #[test]
    fn test_weight_checked_before_height() {
        // Both out of range: the weight error wins
        assert!(matches!(
            Measurement::parse("1", "10").unwrap_err(),
            ValidationError::WeightOutOfRange { .. }
        ));
    }

    #[test]
    fn test_height_converted_from_centimeters() {
        let m = Measurement::parse("70", "50").unwrap();
        assert_eq!(m.height_m(), 0.5);

        // 10 cm parses fine but is far below the minimum height
        assert!(matches!(
            Measurement::parse("70", "10").unwrap_err(),
            ValidationError::HeightOutOfRange { .. }
        ));
    }

    #[test]
    fn test_new_rejects_non_finite() {
        assert!(Measurement::new(f64::NAN, 1.75).is_err());
        assert!(Measurement::new(70.0, f64::NAN).is_err());
        assert!(Measurement::new(f64::INFINITY, 1.75).is_err());
        assert!(Measurement::new(70.0, f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_bmi_reference_value() {
        let m = Measurement::parse("70", "175").unwrap();
        // 70 / (1.75 * 1.75) = 22.857...
        assert!((m.bmi() - 22.857).abs() < 0.001);
    }
}
