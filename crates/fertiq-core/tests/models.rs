use fertiq_core::models::alert::{AlertType, RiskAlert, Severity};
use fertiq_core::models::biometrics::{BmiCategory, BmiResult};
use fertiq_core::models::observations::{
    ClinicalObservations, OvarianReserveAssessment, TubalStatus,
};
use fertiq_core::models::pcos::PcosObservation;
use fertiq_core::models::semen::{SemenDiagnosis, SemenFinding};
use fertiq_core::value::{present, round1};

#[test]
fn present_filters_non_finite() {
    assert_eq!(present(None), None);
    assert_eq!(present(Some(f64::NAN)), None);
    assert_eq!(present(Some(f64::INFINITY)), None);
    assert_eq!(present(Some(f64::NEG_INFINITY)), None);
    assert_eq!(present(Some(0.0)), Some(0.0));
    assert_eq!(present(Some(3.5)), Some(3.5));
}

#[test]
fn present_passes_negative_values_through() {
    assert_eq!(present(Some(-2.0)), Some(-2.0));
}

#[test]
fn round1_rounds_to_one_decimal() {
    assert_eq!(round1(22.857), 22.9);
    assert_eq!(round1(22.84), 22.8);
    assert_eq!(round1(30.0), 30.0);
}

#[test]
fn diagnosis_labels_serialize_verbatim() {
    let oat = serde_json::to_string(&SemenDiagnosis::Oligoasthenoteratozoospermia).unwrap();
    assert_eq!(oat, "\"Oligoasthenoteratozoospermia (OAT)\"");
    let incomplete = serde_json::to_string(&SemenDiagnosis::IncompleteData).unwrap();
    assert_eq!(incomplete, "\"Incomplete data\"");
    assert_eq!(SemenDiagnosis::Oligoasthenozoospermia.to_string(), "Oligoasthenozoospermia");
    assert_eq!(
        serde_json::to_string(&SemenFinding::LowVolume).unwrap(),
        "\"Low Volume\""
    );
}

#[test]
fn abnormal_labels() {
    assert!(!SemenDiagnosis::Normal.is_abnormal());
    assert!(!SemenDiagnosis::IncompleteData.is_abnormal());
    assert!(SemenDiagnosis::Teratozoospermia.is_abnormal());
}

#[test]
fn bmi_not_available_has_no_value() {
    let na = BmiResult::not_available();
    assert_eq!(na.bmi, 0.0);
    assert_eq!(na.category, BmiCategory::NotAvailable);
    assert_eq!(na.value(), None);
    assert_eq!(serde_json::to_string(&na.category).unwrap(), "\"N/A\"");

    let normal = BmiResult {
        bmi: 22.9,
        category: BmiCategory::NormalWeight,
    };
    assert_eq!(normal.value(), Some(22.9));
}

#[test]
fn risk_alert_wire_shape() {
    let alert = RiskAlert::new(AlertType::MaleFactor, Severity::Critical, "Severe male factor")
        .with_action("ICSI indicated");
    let json = serde_json::to_value(&alert).unwrap();
    assert_eq!(json["type"], "male_factor");
    assert_eq!(json["severity"], "critical");
    assert_eq!(json["action"], "ICSI indicated");
}

#[test]
fn severity_orders_by_escalation() {
    assert!(Severity::Info < Severity::Warning);
    assert!(Severity::Warning < Severity::Critical);
}

#[test]
fn hyperandrogenism_is_either_flag() {
    let clinical = PcosObservation {
        clinical_hyperandrogenism: true,
        ..Default::default()
    };
    let biochemical = PcosObservation {
        biochemical_hyperandrogenism: true,
        ..Default::default()
    };
    assert!(clinical.hyperandrogenism());
    assert!(biochemical.hyperandrogenism());
    assert!(!PcosObservation::default().hyperandrogenism());
}

#[test]
fn afc_total_sums_recorded_sides() {
    let none = OvarianReserveAssessment::default();
    assert_eq!(none.afc_total(), None);

    let one_side = OvarianReserveAssessment {
        afc_left: Some(3),
        ..Default::default()
    };
    assert_eq!(one_side.afc_total(), Some(3));

    let both = OvarianReserveAssessment {
        afc_left: Some(4),
        afc_right: Some(6),
        amh: None,
    };
    assert_eq!(both.afc_total(), Some(10));
}

#[test]
fn afc_total_saturates() {
    let huge = OvarianReserveAssessment {
        afc_left: Some(u32::MAX),
        afc_right: Some(5),
        amh: None,
    };
    assert_eq!(huge.afc_total(), Some(u32::MAX));
}

#[test]
fn partial_observation_snapshot_loads() {
    let json = r#"{
        "header": { "patient_name": "A. Patient", "date": "2026-03-14" },
        "history": { "female_age": 36, "duration_years": 2.5 },
        "semen": { "volume": 2.0, "concentration": 20.0 }
    }"#;
    let obs = ClinicalObservations::from_json(json).expect("partial snapshot");
    assert_eq!(obs.header.patient_id, None);
    assert_eq!(obs.history.female_age, Some(36.0));
    assert_eq!(obs.history.tubal_status, TubalStatus::NotAssessed);
    assert!(!obs.history.endometriosis_risk);
    assert_eq!(obs.semen.morphology, None);
    assert_eq!(obs.endocrine.fsh, None);
    assert!(!obs.pcos.oligo_anovulation);
}

#[test]
fn snapshot_without_header_is_rejected() {
    assert!(ClinicalObservations::from_json(r#"{ "history": {} }"#).is_err());
}
