use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Biometrics {
    pub weight_kg: Option<f64>,
    pub height_cm: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum BmiCategory {
    Underweight,
    #[serde(rename = "Normal Weight")]
    NormalWeight,
    Overweight,
    #[serde(rename = "Obese Class I")]
    ObeseClassI,
    #[serde(rename = "Obese Class II")]
    ObeseClassII,
    #[serde(rename = "N/A")]
    NotAvailable,
}

impl BmiCategory {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Underweight => "Underweight",
            Self::NormalWeight => "Normal Weight",
            Self::Overweight => "Overweight",
            Self::ObeseClassI => "Obese Class I",
            Self::ObeseClassII => "Obese Class II",
            Self::NotAvailable => "N/A",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// BMI rounded to one decimal. `bmi` is 0 when the category is `N/A`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BmiResult {
    pub bmi: f64,
    pub category: BmiCategory,
}

impl BmiResult {
    pub fn not_available() -> Self {
        Self {
            bmi: 0.0,
            category: BmiCategory::NotAvailable,
        }
    }

    /// The BMI value, or `None` when it could not be calculated.
    pub fn value(&self) -> Option<f64> {
        (self.category != BmiCategory::NotAvailable).then_some(self.bmi)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum LhFshInterpretation {
    #[serde(rename = "PCOS-suggestive (LH:FSH > 2:1)")]
    PcosSuggestive,
    #[serde(rename = "Normal LH:FSH ratio")]
    Normal,
    #[serde(rename = "Cannot calculate")]
    CannotCalculate,
}

impl LhFshInterpretation {
    pub fn label(&self) -> &'static str {
        match self {
            Self::PcosSuggestive => "PCOS-suggestive (LH:FSH > 2:1)",
            Self::Normal => "Normal LH:FSH ratio",
            Self::CannotCalculate => "Cannot calculate",
        }
    }
}

impl fmt::Display for LhFshInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LhFshResult {
    pub ratio: f64,
    pub interpretation: LhFshInterpretation,
}
