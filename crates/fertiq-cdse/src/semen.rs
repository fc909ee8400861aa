use fertiq_core::models::semen::{
    SemenClassification, SemenDiagnosis, SemenFinding, SemenObservation, TmscInterpretation,
    TmscResult,
};
use fertiq_core::thresholds::Thresholds;
use fertiq_core::value::present;

/// Classify a semen analysis against the WHO reference limits.
///
/// Volume, concentration, and morphology are required. A missing
/// progressive motility is compared as 0, which flags asthenozoospermia.
pub fn classify(obs: &SemenObservation, t: &Thresholds) -> SemenClassification {
    let (Some(volume), Some(concentration), Some(morphology)) = (
        present(obs.volume),
        present(obs.concentration),
        present(obs.morphology),
    ) else {
        return SemenClassification::incomplete();
    };
    let motility = present(obs.motility_progressive).unwrap_or(0.0);

    let oligo = concentration < t.sperm_concentration;
    let astheno = motility < t.progressive_motility;
    let terato = morphology < t.normal_morphology;

    let mut findings = Vec::new();
    if oligo {
        findings.push(SemenFinding::Oligozoospermia);
    }
    if astheno {
        findings.push(SemenFinding::Asthenozoospermia);
    }
    if terato {
        findings.push(SemenFinding::Teratozoospermia);
    }

    let (diagnosis, mut icsi_indicated) = match (oligo, astheno, terato) {
        (false, false, false) => (SemenDiagnosis::Normal, false),
        (true, false, false) => (SemenDiagnosis::Oligozoospermia, false),
        (false, true, false) => (SemenDiagnosis::Asthenozoospermia, false),
        (false, false, true) => (SemenDiagnosis::Teratozoospermia, false),
        (true, true, false) => (SemenDiagnosis::Oligoasthenozoospermia, true),
        (true, false, true) => (SemenDiagnosis::Oligoteratozoospermia, false),
        (false, true, true) => (SemenDiagnosis::Asthenoteratozoospermia, false),
        (true, true, true) => (SemenDiagnosis::Oligoasthenoteratozoospermia, true),
    };

    // Low volume is reported but does not change a normal label.
    if findings.is_empty() && volume < t.semen_volume {
        findings.push(SemenFinding::LowVolume);
    }

    if concentration < t.severe_oligozoospermia {
        icsi_indicated = true;
    }

    SemenClassification {
        diagnosis,
        icsi_indicated,
        findings,
    }
}

/// Total motile sperm count: volume × concentration × progressive motility / 100.
pub fn total_motile_count(obs: &SemenObservation, t: &Thresholds) -> TmscResult {
    let (Some(volume), Some(concentration), Some(motility)) = (
        present(obs.volume),
        present(obs.concentration),
        present(obs.motility_progressive),
    ) else {
        return TmscResult {
            tmsc: 0.0,
            interpretation: TmscInterpretation::MissingParameters,
        };
    };

    let tmsc = volume * concentration * motility / 100.0;
    if !tmsc.is_finite() {
        return TmscResult {
            tmsc: 0.0,
            interpretation: TmscInterpretation::MissingParameters,
        };
    }
    let interpretation = if tmsc >= t.tmsc_adequate {
        TmscInterpretation::Adequate
    } else {
        TmscInterpretation::IcsiMayBeIndicated
    };
    TmscResult {
        tmsc,
        interpretation,
    }
}
