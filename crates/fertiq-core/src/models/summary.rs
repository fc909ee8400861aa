use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

use super::alert::RiskAlert;
use super::biometrics::{BmiResult, LhFshResult};
use super::observations::{
    EndocrineProfile, InfertilityHistory, OvarianReserveAssessment, SummaryHeader,
    UltrasoundFindings,
};
use super::pcos::PcosResult;
use super::rcog::RcogRecommendations;
use super::semen::{SemenClassification, TmscResult};

/// The record handed to the print and persistence layers after one compute
/// pass. Built whole by the assembler; never patched afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosticSummary {
    pub header: SummaryHeader,

    // Conclusions
    pub bmi: BmiResult,
    pub lh_fsh: LhFshResult,
    pub pcos: PcosResult,
    pub semen: SemenClassification,
    pub tmsc: TmscResult,
    pub alerts: Vec<RiskAlert>,
    pub rcog: RcogRecommendations,

    // Raw observation snapshots
    pub history: InfertilityHistory,
    pub endocrine: EndocrineProfile,
    pub ovarian_reserve: OvarianReserveAssessment,
    pub ultrasound: UltrasoundFindings,
}

impl DiagnosticSummary {
    pub fn to_json_pretty(&self) -> Result<String, CoreError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        Ok(serde_json::from_str(json)?)
    }
}
