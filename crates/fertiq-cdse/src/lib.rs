//! fertiq-cdse
//!
//! Clinical decision support for the fertility clinic. Pure and
//! synchronous: every operation maps an observation snapshot to a fresh
//! result and keeps no state between calls.
//!
//! The free functions use [`Thresholds::WHO_2021`]. Use [`DecisionSupport`]
//! to run the same rules against an overridden threshold table.

pub mod alerts;
pub mod biometrics;
pub mod error;
pub mod pcos;
pub mod rcog;
pub mod semen;
pub mod summary;

use fertiq_core::models::alert::RiskAlert;
use fertiq_core::models::biometrics::{BmiResult, LhFshResult};
use fertiq_core::models::observations::ClinicalObservations;
use fertiq_core::models::pcos::{PcosObservation, PcosResult};
use fertiq_core::models::rcog::RcogRecommendations;
use fertiq_core::models::semen::{SemenClassification, SemenObservation, TmscResult};
use fertiq_core::models::summary::DiagnosticSummary;
use fertiq_core::thresholds::Thresholds;

pub use alerts::RiskProfile;
pub use error::CdseError;
pub use rcog::RcogInput;

/// The rule engine bound to one threshold table.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DecisionSupport {
    thresholds: Thresholds,
}

impl DecisionSupport {
    pub fn new(thresholds: Thresholds) -> Result<Self, CdseError> {
        thresholds.validate()?;
        Ok(Self { thresholds })
    }

    /// Build from a partial JSON threshold override.
    pub fn from_json(json: &str) -> Result<Self, CdseError> {
        Ok(Self {
            thresholds: Thresholds::from_json(json)?,
        })
    }

    pub fn thresholds(&self) -> &Thresholds {
        &self.thresholds
    }

    pub fn classify_semen_analysis(&self, obs: &SemenObservation) -> SemenClassification {
        semen::classify(obs, &self.thresholds)
    }

    pub fn calculate_tmsc(&self, obs: &SemenObservation) -> TmscResult {
        semen::total_motile_count(obs, &self.thresholds)
    }

    pub fn calculate_pcos_criteria(&self, obs: &PcosObservation) -> PcosResult {
        pcos::evaluate(obs, &self.thresholds)
    }

    pub fn calculate_bmi(&self, weight_kg: Option<f64>, height_cm: Option<f64>) -> BmiResult {
        biometrics::bmi(weight_kg, height_cm, &self.thresholds)
    }

    pub fn calculate_lh_fsh_ratio(&self, lh: Option<f64>, fsh: Option<f64>) -> LhFshResult {
        biometrics::lh_fsh_ratio(lh, fsh, &self.thresholds)
    }

    pub fn generate_risk_alerts(&self, profile: &RiskProfile<'_>) -> Vec<RiskAlert> {
        alerts::generate(profile, &self.thresholds)
    }

    pub fn generate_rcog_recommendations(&self, input: &RcogInput) -> RcogRecommendations {
        rcog::recommend(input, &self.thresholds)
    }

    pub fn summarize(&self, obs: &ClinicalObservations) -> DiagnosticSummary {
        summary::assemble(obs, &self.thresholds)
    }
}

pub fn classify_semen_analysis(obs: &SemenObservation) -> SemenClassification {
    semen::classify(obs, &Thresholds::WHO_2021)
}

pub fn calculate_tmsc(obs: &SemenObservation) -> TmscResult {
    semen::total_motile_count(obs, &Thresholds::WHO_2021)
}

pub fn calculate_pcos_criteria(obs: &PcosObservation) -> PcosResult {
    pcos::evaluate(obs, &Thresholds::WHO_2021)
}

pub fn calculate_bmi(weight_kg: Option<f64>, height_cm: Option<f64>) -> BmiResult {
    biometrics::bmi(weight_kg, height_cm, &Thresholds::WHO_2021)
}

pub fn calculate_lh_fsh_ratio(lh: Option<f64>, fsh: Option<f64>) -> LhFshResult {
    biometrics::lh_fsh_ratio(lh, fsh, &Thresholds::WHO_2021)
}

pub fn generate_risk_alerts(profile: &RiskProfile<'_>) -> Vec<RiskAlert> {
    alerts::generate(profile, &Thresholds::WHO_2021)
}

pub fn generate_rcog_recommendations(input: &RcogInput) -> RcogRecommendations {
    rcog::recommend(input, &Thresholds::WHO_2021)
}

pub fn summarize(obs: &ClinicalObservations) -> DiagnosticSummary {
    summary::assemble(obs, &Thresholds::WHO_2021)
}
