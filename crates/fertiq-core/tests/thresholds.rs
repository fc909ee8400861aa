use fertiq_core::error::CoreError;
use fertiq_core::thresholds::Thresholds;

#[test]
fn default_is_who_2021() {
    let t = Thresholds::default();
    assert_eq!(t, Thresholds::WHO_2021);
    assert_eq!(t.semen_volume, 1.4);
    assert_eq!(t.sperm_concentration, 16.0);
    assert_eq!(t.progressive_motility, 42.0);
    assert_eq!(t.normal_morphology, 4.0);
    assert_eq!(t.severe_oligozoospermia, 5.0);
    assert_eq!(t.tmsc_adequate, 5.0);
    assert_eq!(t.lh_fsh_ratio, 2.0);
    assert_eq!(t.rotterdam_min_criteria, 2);
    assert!(t.validate().is_ok());
}

#[test]
fn partial_override_keeps_other_defaults() {
    let t = Thresholds::from_json(r#"{ "sperm_concentration": 15.0, "tmsc_adequate": 10 }"#)
        .expect("valid override");
    assert_eq!(t.sperm_concentration, 15.0);
    assert_eq!(t.tmsc_adequate, 10.0);
    assert_eq!(t.progressive_motility, Thresholds::WHO_2021.progressive_motility);
    assert_eq!(t.bmi_obese_class_ii, Thresholds::WHO_2021.bmi_obese_class_ii);
}

#[test]
fn empty_object_is_who_2021() {
    let t = Thresholds::from_json("{}").expect("empty override");
    assert_eq!(t, Thresholds::WHO_2021);
}

#[test]
fn negative_threshold_rejected() {
    let err = Thresholds::from_json(r#"{ "semen_volume": -1.0 }"#).unwrap_err();
    assert!(matches!(
        err,
        CoreError::InvalidThreshold {
            name: "semen_volume",
            ..
        }
    ));
}

#[test]
fn rotterdam_rule_must_be_between_one_and_three() {
    let err = Thresholds::from_json(r#"{ "rotterdam_min_criteria": 4 }"#).unwrap_err();
    assert!(matches!(
        err,
        CoreError::InvalidThreshold {
            name: "rotterdam_min_criteria",
            ..
        }
    ));
}

#[test]
fn bmi_bands_must_ascend() {
    let err = Thresholds::from_json(r#"{ "bmi_overweight": 31.0 }"#).unwrap_err();
    assert!(matches!(
        err,
        CoreError::ThresholdOrder {
            lower: "bmi_overweight",
            upper: "bmi_obese_class_i",
        }
    ));
}

#[test]
fn malformed_json_is_a_serialization_error() {
    let err = Thresholds::from_json("{ not json").unwrap_err();
    assert!(matches!(err, CoreError::Serialization(_)));
}
