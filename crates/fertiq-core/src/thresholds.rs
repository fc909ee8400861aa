use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Reference cut-offs applied by every interpreter in the engine.
///
/// All comparisons against these values are strict (`<` / `>`) unless the
/// field doc says otherwise. Units follow the intake forms: mL, million/mL,
/// percent, kg/m², years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct Thresholds {
    /// WHO 2021 lower reference limit for semen volume (mL).
    pub semen_volume: f64,
    /// WHO 2021 lower reference limit for sperm concentration (million/mL).
    pub sperm_concentration: f64,
    /// WHO 2021 lower reference limit for progressive motility (%).
    pub progressive_motility: f64,
    /// WHO 2021 lower reference limit for normal forms (%).
    pub normal_morphology: f64,
    /// Concentration below which ICSI is indicated regardless of other findings.
    pub severe_oligozoospermia: f64,
    /// TMSC (million) at or above which IUI or natural conception is adequate.
    pub tmsc_adequate: f64,
    /// LH:FSH ratio above which the profile is PCOS-suggestive.
    pub lh_fsh_ratio: f64,
    /// Rotterdam votes required for a PCOS diagnosis (inclusive).
    pub rotterdam_min_criteria: u8,
    pub bmi_underweight: f64,
    pub bmi_overweight: f64,
    pub bmi_obese_class_i: f64,
    pub bmi_obese_class_ii: f64,
    /// Female age above which an age alert is raised.
    pub alert_age: f64,
    /// Infertility duration (years) above which a duration alert is raised.
    pub alert_duration_years: f64,
    /// Female age at which RCOG work-up is expedited (inclusive).
    pub rcog_expedite_age: f64,
    /// Female age at which RCOG referral is urgent (inclusive).
    pub rcog_urgent_age: f64,
    /// Infertility duration (years) above which RCOG work-up is expedited.
    pub rcog_expedite_duration_years: f64,
    /// Infertility duration (years) from which tubal patency should be tested (inclusive).
    pub tubal_test_duration_years: f64,
    /// Total antral follicle count below which ovarian reserve is poor.
    pub poor_reserve_afc: f64,
}

impl Thresholds {
    /// WHO 2021 semen limits, Rotterdam 2-of-3, WHO BMI bands, RCOG age and
    /// duration triggers.
    pub const WHO_2021: Thresholds = Thresholds {
        semen_volume: 1.4,
        sperm_concentration: 16.0,
        progressive_motility: 42.0,
        normal_morphology: 4.0,
        severe_oligozoospermia: 5.0,
        tmsc_adequate: 5.0,
        lh_fsh_ratio: 2.0,
        rotterdam_min_criteria: 2,
        bmi_underweight: 18.5,
        bmi_overweight: 25.0,
        bmi_obese_class_i: 30.0,
        bmi_obese_class_ii: 35.0,
        alert_age: 40.0,
        alert_duration_years: 3.0,
        rcog_expedite_age: 35.0,
        rcog_urgent_age: 40.0,
        rcog_expedite_duration_years: 2.0,
        tubal_test_duration_years: 1.0,
        poor_reserve_afc: 5.0,
    };

    /// Parse a (possibly partial) JSON override. Keys that are not present
    /// keep their WHO 2021 value.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let thresholds: Thresholds = serde_json::from_str(json)?;
        thresholds.validate()?;
        Ok(thresholds)
    }

    pub fn validate(&self) -> Result<(), CoreError> {
        let values = [
            ("semen_volume", self.semen_volume),
            ("sperm_concentration", self.sperm_concentration),
            ("progressive_motility", self.progressive_motility),
            ("normal_morphology", self.normal_morphology),
            ("severe_oligozoospermia", self.severe_oligozoospermia),
            ("tmsc_adequate", self.tmsc_adequate),
            ("lh_fsh_ratio", self.lh_fsh_ratio),
            ("bmi_underweight", self.bmi_underweight),
            ("bmi_overweight", self.bmi_overweight),
            ("bmi_obese_class_i", self.bmi_obese_class_i),
            ("bmi_obese_class_ii", self.bmi_obese_class_ii),
            ("alert_age", self.alert_age),
            ("alert_duration_years", self.alert_duration_years),
            ("rcog_expedite_age", self.rcog_expedite_age),
            ("rcog_urgent_age", self.rcog_urgent_age),
            ("rcog_expedite_duration_years", self.rcog_expedite_duration_years),
            ("tubal_test_duration_years", self.tubal_test_duration_years),
            ("poor_reserve_afc", self.poor_reserve_afc),
        ];
        for (name, value) in values {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::InvalidThreshold { name, value });
            }
        }

        if self.rotterdam_min_criteria == 0 || self.rotterdam_min_criteria > 3 {
            return Err(CoreError::InvalidThreshold {
                name: "rotterdam_min_criteria",
                value: f64::from(self.rotterdam_min_criteria),
            });
        }

        let ordered = [
            ("bmi_underweight", self.bmi_underweight, "bmi_overweight", self.bmi_overweight),
            ("bmi_overweight", self.bmi_overweight, "bmi_obese_class_i", self.bmi_obese_class_i),
            ("bmi_obese_class_i", self.bmi_obese_class_i, "bmi_obese_class_ii", self.bmi_obese_class_ii),
            ("rcog_expedite_age", self.rcog_expedite_age, "rcog_urgent_age", self.rcog_urgent_age),
        ];
        for (lower, lower_value, upper, upper_value) in ordered {
            if lower_value >= upper_value {
                return Err(CoreError::ThresholdOrder { lower, upper });
            }
        }

        Ok(())
    }
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::WHO_2021
    }
}
