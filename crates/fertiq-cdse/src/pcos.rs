use fertiq_core::models::pcos::{PcosObservation, PcosResult};
use fertiq_core::thresholds::Thresholds;

/// Rotterdam criteria. Clinical and biochemical hyperandrogenism together
/// count as one vote.
pub fn evaluate(obs: &PcosObservation, t: &Thresholds) -> PcosResult {
    let votes = [
        obs.oligo_anovulation,
        obs.hyperandrogenism(),
        obs.polycystic_ovaries_us,
    ];
    let criteria_met_count = votes.iter().filter(|&&v| v).count() as u8;

    PcosResult {
        criteria_met_count,
        calculated_diagnosis: criteria_met_count >= t.rotterdam_min_criteria,
    }
}
