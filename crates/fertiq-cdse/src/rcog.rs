use fertiq_core::models::observations::TubalStatus;
use fertiq_core::models::pcos::PcosResult;
use fertiq_core::models::rcog::{NextSteps, RcogRecommendations, Referral, TubalTestType, Urgency};
use fertiq_core::thresholds::Thresholds;
use fertiq_core::value::present;

pub const REASON_ADVANCED_AGE: &str = "Advanced maternal age";
pub const REASON_AGE_OR_DURATION: &str = "Age >35 or duration >2 years";

pub const EARLY_WORKUP: &str =
    "Offer early specialist investigation (female age 35 or over, or infertility over 2 years)";
pub const TUBAL_PATENCY: &str = "Assess tubal patency by HSG or HyCoSy";
pub const UROLOGY_REFERRAL: &str = "Refer male partner for urological assessment";
pub const PCOS_MANAGEMENT: &str =
    "Manage PCOS: ovulation induction with letrozole or clomifene citrate";
pub const LIFESTYLE: &str = "Lifestyle modification: weight optimisation, exercise, smoking cessation";
pub const BASELINE_FSH: &str = "Measure early follicular (day 2-3) FSH";
pub const POOR_RESERVE: &str =
    "Poor ovarian reserve (AFC below 5): discuss IVF prognosis and donor oocytes";
pub const EXPECTATIONS: &str = "Counsel the couple on realistic success rates";

#[derive(Debug, Clone, Copy)]
pub struct RcogInput {
    pub age: Option<f64>,
    pub duration_years: Option<f64>,
    pub male_factor_present: bool,
    pub pcos: PcosResult,
    pub tubal_status: TubalStatus,
    pub afc_total: Option<u32>,
}

/// Apply the RCOG investigation guidance. Recommendations are appended in
/// check order and are not deduplicated.
pub fn recommend(input: &RcogInput, t: &Thresholds) -> RcogRecommendations {
    let age = present(input.age);
    let duration = present(input.duration_years);

    let mut recommendations = Vec::new();
    let mut reasons = Vec::new();
    let mut urgency = Urgency::Routine;
    let mut next_steps = NextSteps::default();

    let expedite_age = age.is_some_and(|a| a >= t.rcog_expedite_age);
    let long_duration = duration.is_some_and(|d| d > t.rcog_expedite_duration_years);
    if expedite_age || long_duration {
        recommendations.push(EARLY_WORKUP.to_string());
        if age.is_some_and(|a| a >= t.rcog_urgent_age) {
            urgency = Urgency::Urgent;
            reasons.push(REASON_ADVANCED_AGE.to_string());
        } else {
            urgency = Urgency::Expedited;
            reasons.push(REASON_AGE_OR_DURATION.to_string());
        }
    }

    if duration.is_some_and(|d| d >= t.tubal_test_duration_years)
        && input.tubal_status == TubalStatus::NotAssessed
    {
        next_steps.tubal_test = true;
        next_steps.tubal_test_type = Some(TubalTestType::Hsg);
        recommendations.push(TUBAL_PATENCY.to_string());
    }

    if input.male_factor_present {
        next_steps.male_factor = true;
        recommendations.push(UROLOGY_REFERRAL.to_string());
    }

    if input.pcos.calculated_diagnosis {
        next_steps.lifestyle = true;
        recommendations.push(PCOS_MANAGEMENT.to_string());
        recommendations.push(LIFESTYLE.to_string());
    }

    if expedite_age {
        next_steps.day2_fsh = true;
        recommendations.push(BASELINE_FSH.to_string());
    }

    if input
        .afc_total
        .is_some_and(|afc| f64::from(afc) < t.poor_reserve_afc)
    {
        next_steps.ovarian_reserve = true;
        recommendations.push(POOR_RESERVE.to_string());
        recommendations.push(EXPECTATIONS.to_string());
    }

    next_steps.referral = if input.male_factor_present {
        Some(Referral::Urology)
    } else if urgency == Urgency::Urgent {
        Some(Referral::AssistedConception)
    } else {
        None
    };

    RcogRecommendations {
        recommendations,
        urgency,
        reasons_for_urgency: (!reasons.is_empty()).then_some(reasons),
        next_steps,
    }
}
