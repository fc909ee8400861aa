use fertiq_core::models::biometrics::{BmiCategory, BmiResult, LhFshInterpretation, LhFshResult};
use fertiq_core::thresholds::Thresholds;
use fertiq_core::value::{present, round1};

/// BMI from weight (kg) and height (cm), rounded to one decimal.
/// The category is taken from the rounded value.
pub fn bmi(weight_kg: Option<f64>, height_cm: Option<f64>, t: &Thresholds) -> BmiResult {
    let (Some(weight), Some(height)) = (present(weight_kg), present(height_cm)) else {
        return BmiResult::not_available();
    };
    if height == 0.0 {
        return BmiResult::not_available();
    }

    let height_m = height / 100.0;
    let bmi = round1(weight / (height_m * height_m));
    if !bmi.is_finite() {
        return BmiResult::not_available();
    }
    let category = if bmi < t.bmi_underweight {
        BmiCategory::Underweight
    } else if bmi < t.bmi_overweight {
        BmiCategory::NormalWeight
    } else if bmi < t.bmi_obese_class_i {
        BmiCategory::Overweight
    } else if bmi < t.bmi_obese_class_ii {
        BmiCategory::ObeseClassI
    } else {
        BmiCategory::ObeseClassII
    };

    BmiResult { bmi, category }
}

pub fn lh_fsh_ratio(lh: Option<f64>, fsh: Option<f64>, t: &Thresholds) -> LhFshResult {
    let (Some(lh), Some(fsh)) = (present(lh), present(fsh)) else {
        return cannot_calculate();
    };
    if fsh == 0.0 {
        return cannot_calculate();
    }

    let ratio = lh / fsh;
    if !ratio.is_finite() {
        return cannot_calculate();
    }
    let interpretation = if ratio > t.lh_fsh_ratio {
        LhFshInterpretation::PcosSuggestive
    } else {
        LhFshInterpretation::Normal
    };
    LhFshResult {
        ratio,
        interpretation,
    }
}

fn cannot_calculate() -> LhFshResult {
    LhFshResult {
        ratio: 0.0,
        interpretation: LhFshInterpretation::CannotCalculate,
    }
}
