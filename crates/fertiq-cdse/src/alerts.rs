use fertiq_core::models::alert::{AlertType, RiskAlert, Severity};
use fertiq_core::models::biometrics::{LhFshInterpretation, LhFshResult};
use fertiq_core::models::pcos::PcosResult;
use fertiq_core::models::semen::SemenClassification;
use fertiq_core::thresholds::Thresholds;
use fertiq_core::value::present;

/// Inputs to the risk alert generator. Absent numeric values never raise an
/// alert.
#[derive(Debug, Clone, Copy)]
pub struct RiskProfile<'a> {
    pub age: Option<f64>,
    pub bmi: Option<f64>,
    pub duration_years: Option<f64>,
    pub pcos: PcosResult,
    pub male_factor: &'a SemenClassification,
    pub tubal_pathology: bool,
    pub endometriosis_risk: bool,
}

/// Evaluate every risk condition in a fixed order and return one alert per
/// condition that holds. The order of the returned list is the evaluation
/// order.
pub fn generate(profile: &RiskProfile<'_>, t: &Thresholds) -> Vec<RiskAlert> {
    let mut alerts = Vec::new();

    if let Some(age) = present(profile.age)
        && age > t.alert_age
    {
        alerts.push(
            RiskAlert::new(
                AlertType::Age,
                Severity::Warning,
                format!("Advanced maternal age ({age} years): reduced ovarian reserve and oocyte quality"),
            )
            .with_action("Expedite investigations and discuss early referral for assisted conception"),
        );
    }

    if let Some(bmi) = present(profile.bmi) {
        if bmi > t.bmi_obese_class_i {
            alerts.push(
                RiskAlert::new(
                    AlertType::Bmi,
                    Severity::Warning,
                    format!("BMI {bmi}: obesity reduces natural and assisted conception rates"),
                )
                .with_action("Advise weight reduction before starting treatment"),
            );
        } else if bmi < t.bmi_underweight {
            alerts.push(
                RiskAlert::new(
                    AlertType::Bmi,
                    Severity::Info,
                    format!("BMI {bmi}: underweight may cause ovulatory dysfunction"),
                )
                .with_action("Nutritional assessment and weight gain advice"),
            );
        }
    }

    if let Some(years) = present(profile.duration_years)
        && years > t.alert_duration_years
    {
        alerts.push(
            RiskAlert::new(
                AlertType::Duration,
                Severity::Warning,
                format!("Infertility for {years} years: chance of spontaneous conception is reduced"),
            )
            .with_action("Consider direct referral for assisted conception"),
        );
    }

    if profile.pcos.calculated_diagnosis {
        alerts.push(
            RiskAlert::new(
                AlertType::Pcos,
                Severity::Warning,
                format!(
                    "PCOS by Rotterdam criteria ({}/3 criteria met)",
                    profile.pcos.criteria_met_count
                ),
            )
            .with_action("Screen for insulin resistance; plan ovulation induction"),
        );
    }

    let semen = profile.male_factor;
    if semen.male_factor_present() {
        let alert = if semen.icsi_indicated {
            RiskAlert::new(
                AlertType::MaleFactor,
                Severity::Critical,
                format!("Severe male factor: {}", semen.diagnosis),
            )
            .with_action("ICSI indicated")
        } else {
            RiskAlert::new(
                AlertType::MaleFactor,
                Severity::Warning,
                format!("Male factor: {}", semen.diagnosis),
            )
            .with_action("Repeat semen analysis after 3 months")
        };
        alerts.push(alert);
    }

    if profile.tubal_pathology {
        alerts.push(
            RiskAlert::new(
                AlertType::Tubal,
                Severity::Warning,
                "Tubal pathology documented",
            )
            .with_action("IVF is the treatment of choice; consider salpingectomy for hydrosalpinx"),
        );
    }

    if profile.endometriosis_risk {
        alerts.push(
            RiskAlert::new(
                AlertType::Endometriosis,
                Severity::Info,
                "Clinical risk factors for endometriosis",
            )
            .with_action("Consider diagnostic laparoscopy"),
        );
    }

    alerts
}

/// Endocrine alerts appended after the risk alerts in a summary.
pub fn hormonal(lh_fsh: &LhFshResult) -> Vec<RiskAlert> {
    let mut alerts = Vec::new();
    if lh_fsh.interpretation == LhFshInterpretation::PcosSuggestive {
        alerts.push(
            RiskAlert::new(
                AlertType::Hormonal,
                Severity::Info,
                format!("LH:FSH ratio {:.1}: {}", lh_fsh.ratio, lh_fsh.interpretation),
            )
            .with_action("Correlate with Rotterdam criteria"),
        );
    }
    alerts
}
