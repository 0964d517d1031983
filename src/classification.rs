//! BMI classification bands
//!
//! Maps a BMI value onto the seven-category reference table displayed
//! alongside the result. The published table's wording ("between 25 and
//! 29.9", "greater than 40") leaves hairline gaps; the ladder here closes
//! them by evaluating the bands lowest to highest, so every possible BMI
//! lands in exactly one category.

use serde::{Deserialize, Serialize};

/// Band boundaries (BMI values). The ladder in [`Classification::from_bmi`]
/// decides which side of each boundary belongs to which band.
const SEVERE_UNDERWEIGHT_MAX: f64 = 17.0; // below → severely underweight
const UNDERWEIGHT_MAX: f64 = 18.5; // 17 up to here → underweight
const NORMAL_MAX: f64 = 24.5; // 18.5 through 24.5 → normal
const OVERWEIGHT_MAX: f64 = 29.9; // above 24.5 through 29.9 → overweight
const OBESITY_I_MAX: f64 = 34.9; // through 34.9 → obesity class I
const OBESITY_II_MAX: f64 = 39.9; // through 39.9 → obesity class II, above → III

/// BMI category per the reference table
///
/// Variants are declared lightest to heaviest, so the derived ordering
/// matches the band order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// BMI below 17
    SeverelyUnderweight,
    /// BMI from 17 up to (not including) 18.5
    Underweight,
    /// BMI from 18.5 through 24.5
    Normal,
    /// BMI above 24.5 through 29.9
    Overweight,
    /// BMI above 29.9 through 34.9
    ObesityClassI,
    /// BMI above 34.9 through 39.9
    ObesityClassII,
    /// BMI above 39.9
    ObesityClassIII,
}

impl Classification {
    /// Classify a BMI value
    ///
    /// Total over all finite inputs: the bands are evaluated lowest to
    /// highest and the last one is open-ended, so there is no gap at the
    /// published boundaries (29.95 falls in class I, exactly 40 in class
    /// III). Callers are expected to pass the finite values produced by
    /// [`crate::Measurement::bmi`].
    ///
    /// # Examples
    ///
    /// ```
    /// use bmi_evaluator::Classification;
    ///
    /// assert_eq!(Classification::from_bmi(22.86), Classification::Normal);
    /// assert_eq!(Classification::from_bmi(15.57), Classification::SeverelyUnderweight);
    /// assert_eq!(Classification::from_bmi(41.0), Classification::ObesityClassIII);
    /// ```
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < SEVERE_UNDERWEIGHT_MAX {
            Classification::SeverelyUnderweight
        } else if bmi < UNDERWEIGHT_MAX {
            Classification::Underweight
        } else if bmi <= NORMAL_MAX {
            Classification::Normal
        } else if bmi <= OVERWEIGHT_MAX {
            Classification::Overweight
        } else if bmi <= OBESITY_I_MAX {
            Classification::ObesityClassI
        } else if bmi <= OBESITY_II_MAX {
            Classification::ObesityClassII
        } else {
            Classification::ObesityClassIII
        }
    }

    /// Get human-readable display name
    pub fn display_name(&self) -> &'static str {
        match self {
            Classification::SeverelyUnderweight => "Severely underweight",
            Classification::Underweight => "Underweight",
            Classification::Normal => "Normal",
            Classification::Overweight => "Overweight",
            Classification::ObesityClassI => "Obesity class I",
            Classification::ObesityClassII => "Obesity class II",
            Classification::ObesityClassIII => "Obesity class III",
        }
    }

    /// Band edges as shown in the reference table
    ///
    /// Returns `(lower, upper)` BMI bounds, with `None` marking an
    /// open-ended side. The edges are display data for rendering the table;
    /// boundary membership is defined by [`Classification::from_bmi`].
    pub fn bmi_range(&self) -> (Option<f64>, Option<f64>) {
        match self {
            Classification::SeverelyUnderweight => (None, Some(SEVERE_UNDERWEIGHT_MAX)),
            Classification::Underweight => (Some(SEVERE_UNDERWEIGHT_MAX), Some(UNDERWEIGHT_MAX)),
            Classification::Normal => (Some(UNDERWEIGHT_MAX), Some(NORMAL_MAX)),
            Classification::Overweight => (Some(NORMAL_MAX), Some(OVERWEIGHT_MAX)),
            Classification::ObesityClassI => (Some(OVERWEIGHT_MAX), Some(OBESITY_I_MAX)),
            Classification::ObesityClassII => (Some(OBESITY_I_MAX), Some(OBESITY_II_MAX)),
            Classification::ObesityClassIII => (Some(OBESITY_II_MAX), None),
        }
    }

    /// Get all classification variants, lightest first
    ///
    /// Useful for rendering the reference table next to a result.
    pub fn all_variants() -> &'static [Classification] {
        &[
            Classification::SeverelyUnderweight,
            Classification::Underweight,
            Classification::Normal,
            Classification::Overweight,
            Classification::ObesityClassI,
            Classification::ObesityClassII,
            Classification::ObesityClassIII,
        ]
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
