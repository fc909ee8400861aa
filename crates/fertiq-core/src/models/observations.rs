use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use super::biometrics::Biometrics;
use super::pcos::PcosObservation;
use super::semen::SemenObservation;

/// Identifies whose observations these are and when they were taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SummaryHeader {
    #[serde(default)]
    pub patient_id: Option<Uuid>,
    pub patient_name: String,
    #[serde(default)]
    pub partner_name: Option<String>,
    pub date: jiff::civil::Date,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum InfertilityType {
    Primary,
    Secondary,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TubalStatus {
    /// Patency has not been tested yet.
    #[default]
    NotAssessed,
    Patent,
    Pathology,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct InfertilityHistory {
    /// Female partner age (years).
    pub female_age: Option<f64>,
    pub male_age: Option<f64>,
    pub duration_years: Option<f64>,
    pub infertility_type: Option<InfertilityType>,
    pub tubal_status: TubalStatus,
    pub endometriosis_risk: bool,
    pub previous_pregnancies: Option<u32>,
    pub notes: Option<String>,
}

/// Baseline hormone panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct EndocrineProfile {
    /// IU/L
    pub fsh: Option<f64>,
    /// IU/L
    pub lh: Option<f64>,
    /// pg/mL
    pub estradiol: Option<f64>,
    /// ng/mL
    pub amh: Option<f64>,
    /// mIU/L
    pub tsh: Option<f64>,
    /// ng/mL
    pub prolactin: Option<f64>,
    /// ng/mL
    pub testosterone: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct OvarianReserveAssessment {
    pub afc_left: Option<u32>,
    pub afc_right: Option<u32>,
    /// ng/mL
    pub amh: Option<f64>,
}

impl OvarianReserveAssessment {
    /// Sum of both ovaries, or `None` when neither side was counted.
    pub fn afc_total(&self) -> Option<u32> {
        match (self.afc_left, self.afc_right) {
            (None, None) => None,
            (left, right) => Some(left.unwrap_or(0).saturating_add(right.unwrap_or(0))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct UltrasoundFindings {
    pub polycystic_ovaries: bool,
    pub endometrial_thickness_mm: Option<f64>,
    pub ovarian_cyst: bool,
    pub uterine_abnormality: Option<String>,
}

/// Everything one compute pass reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ClinicalObservations {
    pub header: SummaryHeader,
    #[serde(default)]
    pub history: InfertilityHistory,
    #[serde(default)]
    pub biometrics: Biometrics,
    #[serde(default)]
    pub endocrine: EndocrineProfile,
    #[serde(default)]
    pub ovarian_reserve: OvarianReserveAssessment,
    #[serde(default)]
    pub ultrasound: UltrasoundFindings,
    #[serde(default)]
    pub pcos: PcosObservation,
    #[serde(default)]
    pub semen: SemenObservation,
}

impl ClinicalObservations {
    pub fn from_json(json: &str) -> Result<Self, crate::error::CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}
