use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Raw semen analysis parameters as entered on the andrology form.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct SemenObservation {
    /// Ejaculate volume (mL).
    pub volume: Option<f64>,
    /// Sperm concentration (million/mL).
    pub concentration: Option<f64>,
    /// Total sperm number per ejaculate (million).
    pub total_count: Option<f64>,
    /// Progressive motility (%).
    pub motility_progressive: Option<f64>,
    /// Non-progressive motility (%).
    pub motility_non_progressive: Option<f64>,
    /// Normal forms (%).
    pub morphology: Option<f64>,
    pub ph: Option<f64>,
    /// Live spermatozoa (%).
    pub vitality: Option<f64>,
}

/// Composite semen diagnosis. Serialized as the clinical label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SemenDiagnosis {
    Normal,
    Oligozoospermia,
    Asthenozoospermia,
    Teratozoospermia,
    Oligoasthenozoospermia,
    Oligoteratozoospermia,
    Asthenoteratozoospermia,
    #[serde(rename = "Oligoasthenoteratozoospermia (OAT)")]
    Oligoasthenoteratozoospermia,
    #[serde(rename = "Incomplete data")]
    IncompleteData,
}

impl SemenDiagnosis {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Oligozoospermia => "Oligozoospermia",
            Self::Asthenozoospermia => "Asthenozoospermia",
            Self::Teratozoospermia => "Teratozoospermia",
            Self::Oligoasthenozoospermia => "Oligoasthenozoospermia",
            Self::Oligoteratozoospermia => "Oligoteratozoospermia",
            Self::Asthenoteratozoospermia => "Asthenoteratozoospermia",
            Self::Oligoasthenoteratozoospermia => "Oligoasthenoteratozoospermia (OAT)",
            Self::IncompleteData => "Incomplete data",
        }
    }

    /// True for every label other than `Normal` and `Incomplete data`.
    pub fn is_abnormal(&self) -> bool {
        !matches!(self, Self::Normal | Self::IncompleteData)
    }
}

impl fmt::Display for SemenDiagnosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single tag in the classifier's finding list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum SemenFinding {
    Oligozoospermia,
    Asthenozoospermia,
    Teratozoospermia,
    #[serde(rename = "Low Volume")]
    LowVolume,
    #[serde(rename = "Missing semen analysis parameters")]
    MissingParameters,
}

impl SemenFinding {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Oligozoospermia => "Oligozoospermia",
            Self::Asthenozoospermia => "Asthenozoospermia",
            Self::Teratozoospermia => "Teratozoospermia",
            Self::LowVolume => "Low Volume",
            Self::MissingParameters => "Missing semen analysis parameters",
        }
    }
}

impl fmt::Display for SemenFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SemenClassification {
    pub diagnosis: SemenDiagnosis,
    pub icsi_indicated: bool,
    pub findings: Vec<SemenFinding>,
}

impl SemenClassification {
    pub fn incomplete() -> Self {
        Self {
            diagnosis: SemenDiagnosis::IncompleteData,
            icsi_indicated: false,
            findings: vec![SemenFinding::MissingParameters],
        }
    }

    /// Male factor is present when the composite label is abnormal.
    pub fn male_factor_present(&self) -> bool {
        self.diagnosis.is_abnormal()
    }
}

/// Interpretation attached to a TMSC value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum TmscInterpretation {
    #[serde(rename = "Adequate for IUI/Natural conception")]
    Adequate,
    #[serde(rename = "ICSI may be indicated")]
    IcsiMayBeIndicated,
    #[serde(rename = "Cannot calculate - missing parameters")]
    MissingParameters,
}

impl TmscInterpretation {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Adequate => "Adequate for IUI/Natural conception",
            Self::IcsiMayBeIndicated => "ICSI may be indicated",
            Self::MissingParameters => "Cannot calculate - missing parameters",
        }
    }
}

impl fmt::Display for TmscInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Total Motile Sperm Count (million).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TmscResult {
    pub tmsc: f64,
    pub interpretation: TmscInterpretation,
}
