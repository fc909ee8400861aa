use fertiq_core::models::observations::{ClinicalObservations, TubalStatus};
use fertiq_core::models::pcos::PcosObservation;
use fertiq_core::models::summary::DiagnosticSummary;
use fertiq_core::thresholds::Thresholds;
use tracing::debug;

use crate::alerts::{self, RiskProfile};
use crate::rcog::{self, RcogInput};
use crate::{biometrics, pcos, semen};

/// Run every interpreter over one observation snapshot and compose the
/// results into a fresh summary.
///
/// Polycystic morphology counts as a Rotterdam vote when it is ticked on
/// either the PCOS form or the ultrasound findings.
pub fn assemble(obs: &ClinicalObservations, t: &Thresholds) -> DiagnosticSummary {
    let history = &obs.history;

    let bmi = biometrics::bmi(obs.biometrics.weight_kg, obs.biometrics.height_cm, t);
    let lh_fsh = biometrics::lh_fsh_ratio(obs.endocrine.lh, obs.endocrine.fsh, t);

    let pcos_votes = PcosObservation {
        polycystic_ovaries_us: obs.pcos.polycystic_ovaries_us || obs.ultrasound.polycystic_ovaries,
        ..obs.pcos
    };
    let pcos = pcos::evaluate(&pcos_votes, t);

    let semen = semen::classify(&obs.semen, t);
    let tmsc = semen::total_motile_count(&obs.semen, t);

    let mut alerts = alerts::generate(
        &RiskProfile {
            age: history.female_age,
            bmi: bmi.value(),
            duration_years: history.duration_years,
            pcos,
            male_factor: &semen,
            tubal_pathology: history.tubal_status == TubalStatus::Pathology,
            endometriosis_risk: history.endometriosis_risk,
        },
        t,
    );
    alerts.extend(alerts::hormonal(&lh_fsh));

    let rcog = rcog::recommend(
        &RcogInput {
            age: history.female_age,
            duration_years: history.duration_years,
            male_factor_present: semen.male_factor_present(),
            pcos,
            tubal_status: history.tubal_status,
            afc_total: obs.ovarian_reserve.afc_total(),
        },
        t,
    );

    debug!(
        semen = %semen.diagnosis,
        pcos = pcos.calculated_diagnosis,
        alerts = alerts.len(),
        urgency = ?rcog.urgency,
        "diagnostic summary assembled"
    );

    DiagnosticSummary {
        header: obs.header.clone(),
        bmi,
        lh_fsh,
        pcos,
        semen,
        tmsc,
        alerts,
        rcog,
        history: history.clone(),
        endocrine: obs.endocrine,
        ovarian_reserve: obs.ovarian_reserve,
        ultrasound: obs.ultrasound.clone(),
    }
}
