use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Rotterdam findings as ticked on the gynaecology form.
///
/// The two hyperandrogenism flags share a single Rotterdam vote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct PcosObservation {
    pub oligo_anovulation: bool,
    pub clinical_hyperandrogenism: bool,
    pub biochemical_hyperandrogenism: bool,
    pub polycystic_ovaries_us: bool,
}

impl PcosObservation {
    pub fn hyperandrogenism(&self) -> bool {
        self.clinical_hyperandrogenism || self.biochemical_hyperandrogenism
    }
}

/// Derived only by the criteria evaluator; never constructed from user input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PcosResult {
    /// 0 to 3.
    pub criteria_met_count: u8,
    pub calculated_diagnosis: bool,
}
