use fertiq_cdse::{generate_risk_alerts, RiskProfile};
use fertiq_core::models::alert::{AlertType, Severity};
use fertiq_core::models::pcos::PcosResult;
use fertiq_core::models::semen::{SemenClassification, SemenDiagnosis, SemenFinding};

fn normal_semen() -> SemenClassification {
    SemenClassification {
        diagnosis: SemenDiagnosis::Normal,
        icsi_indicated: false,
        findings: vec![],
    }
}

fn quiet_profile(semen: &SemenClassification) -> RiskProfile<'_> {
    RiskProfile {
        age: Some(30.0),
        bmi: Some(22.0),
        duration_years: Some(1.0),
        pcos: PcosResult::default(),
        male_factor: semen,
        tubal_pathology: false,
        endometriosis_risk: false,
    }
}

fn types(profile: &RiskProfile<'_>) -> Vec<AlertType> {
    generate_risk_alerts(profile)
        .into_iter()
        .map(|a| a.alert_type)
        .collect()
}

#[test]
fn no_risk_no_alerts() {
    let semen = normal_semen();
    assert!(generate_risk_alerts(&quiet_profile(&semen)).is_empty());
}

#[test]
fn every_condition_fires_in_evaluation_order() {
    let semen = SemenClassification {
        diagnosis: SemenDiagnosis::Oligoasthenozoospermia,
        icsi_indicated: true,
        findings: vec![SemenFinding::Oligozoospermia, SemenFinding::Asthenozoospermia],
    };
    let profile = RiskProfile {
        age: Some(42.0),
        bmi: Some(33.0),
        duration_years: Some(4.0),
        pcos: PcosResult {
            criteria_met_count: 2,
            calculated_diagnosis: true,
        },
        male_factor: &semen,
        tubal_pathology: true,
        endometriosis_risk: true,
    };

    let alerts = generate_risk_alerts(&profile);
    let order: Vec<_> = alerts.iter().map(|a| a.alert_type).collect();
    assert_eq!(
        order,
        vec![
            AlertType::Age,
            AlertType::Bmi,
            AlertType::Duration,
            AlertType::Pcos,
            AlertType::MaleFactor,
            AlertType::Tubal,
            AlertType::Endometriosis,
        ]
    );
    let severities: Vec<_> = alerts.iter().map(|a| a.severity).collect();
    assert_eq!(
        severities,
        vec![
            Severity::Warning,
            Severity::Warning,
            Severity::Warning,
            Severity::Warning,
            Severity::Critical,
            Severity::Warning,
            Severity::Info,
        ]
    );
    assert!(alerts.iter().all(|a| a.action.is_some()));
}

#[test]
fn age_threshold_is_strict() {
    let semen = normal_semen();
    let at_forty = RiskProfile {
        age: Some(40.0),
        ..quiet_profile(&semen)
    };
    assert!(types(&at_forty).is_empty());

    let over = RiskProfile {
        age: Some(41.0),
        ..quiet_profile(&semen)
    };
    assert_eq!(types(&over), vec![AlertType::Age]);
}

#[test]
fn underweight_is_info() {
    let semen = normal_semen();
    let profile = RiskProfile {
        bmi: Some(17.9),
        ..quiet_profile(&semen)
    };
    let alerts = generate_risk_alerts(&profile);
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].alert_type, AlertType::Bmi);
    assert_eq!(alerts[0].severity, Severity::Info);
}

#[test]
fn bmi_of_thirty_is_not_an_alert() {
    let semen = normal_semen();
    let profile = RiskProfile {
        bmi: Some(30.0),
        ..quiet_profile(&semen)
    };
    assert!(types(&profile).is_empty());
}

#[test]
fn absent_values_never_alert() {
    let semen = normal_semen();
    let profile = RiskProfile {
        age: None,
        bmi: None,
        duration_years: None,
        ..quiet_profile(&semen)
    };
    assert!(types(&profile).is_empty());
}

#[test]
fn male_factor_without_icsi_is_warning() {
    let semen = SemenClassification {
        diagnosis: SemenDiagnosis::Teratozoospermia,
        icsi_indicated: false,
        findings: vec![SemenFinding::Teratozoospermia],
    };
    let alerts = generate_risk_alerts(&quiet_profile(&semen));
    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].alert_type, AlertType::MaleFactor);
    assert_eq!(alerts[0].severity, Severity::Warning);
    assert!(alerts[0].message.contains("Teratozoospermia"));
}

#[test]
fn incomplete_semen_is_not_male_factor() {
    let semen = SemenClassification::incomplete();
    assert!(generate_risk_alerts(&quiet_profile(&semen)).is_empty());
}

#[test]
fn repeated_calls_are_identical() {
    let semen = normal_semen();
    let profile = RiskProfile {
        age: Some(43.0),
        endometriosis_risk: true,
        ..quiet_profile(&semen)
    };
    assert_eq!(generate_risk_alerts(&profile), generate_risk_alerts(&profile));
}
