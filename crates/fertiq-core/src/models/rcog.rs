use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Urgency {
    Routine,
    Expedited,
    Urgent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TubalTestType {
    /// Hysterosalpingography.
    Hsg,
    /// Hysterosalpingo-contrast sonography.
    Hycosy,
    Laparoscopy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Referral {
    /// Urology / andrology review of the male partner.
    Urology,
    /// Direct referral to an assisted conception unit.
    AssistedConception,
}

/// Structured follow-up flags for the investigation checklist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NextSteps {
    pub tubal_test: bool,
    pub male_factor: bool,
    /// Early follicular (day 2-3) FSH.
    #[serde(rename = "dfsh")]
    pub day2_fsh: bool,
    pub lifestyle: bool,
    pub ovarian_reserve: bool,
    #[serde(default)]
    pub tubal_test_type: Option<TubalTestType>,
    #[serde(default)]
    pub referral: Option<Referral>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RcogRecommendations {
    /// Insertion order is the order of the guideline checks.
    pub recommendations: Vec<String>,
    pub urgency: Urgency,
    /// Present whenever urgency is above `Routine`.
    #[serde(default)]
    pub reasons_for_urgency: Option<Vec<String>>,
    pub next_steps: NextSteps,
}
