use std::sync::LazyLock;

use bicams_core::models::measure::Measure;
use bicams_core::models::result::{RawScores, ScoreOutcome, TestResult};
use bicams_core::models::subject::Subject;
use statrs::distribution::{Continuous, ContinuousCDF, Normal};

use crate::classification::classify;
use crate::{MeasureNorms, NormsTable};

static STANDARD_NORMAL: LazyLock<Normal> = LazyLock::new(Normal::standard);

/// Φ(z).
pub fn normal_cdf(z: f64) -> f64 {
    STANDARD_NORMAL.cdf(z)
}

/// φ(z).
pub fn normal_pdf(z: f64) -> f64 {
    STANDARD_NORMAL.pdf(z)
}

pub fn z_score(scaled: u8, predicted: f64, residual_sd: f64) -> f64 {
    (f64::from(scaled) - predicted) / residual_sd
}

/// Cumulative-normal percentile (0–100) for a z-score. Not clamped.
pub fn percentile(z: f64) -> f64 {
    normal_cdf(z) * 100.0
}

/// Run one raw score through lookup, regression, z, percentile and
/// classification.
pub fn score_measure(
    measure: Measure,
    norms: &MeasureNorms,
    subject: &Subject,
    raw: Option<i32>,
) -> ScoreOutcome {
    let Some(raw_score) = raw else {
        tracing::debug!(%measure, "not administered");
        return ScoreOutcome::NotAdministered;
    };

    let Some(scaled_score) = norms.conversion.lookup(raw_score) else {
        tracing::warn!(%measure, raw_score, "raw score outside conversion table, not classified");
        return ScoreOutcome::OutOfRange { raw_score };
    };

    let predicted = norms.regression.predict_for(subject);
    let z = z_score(scaled_score, predicted, norms.regression.residual_sd);
    let pct = percentile(z);
    let classification = classify(pct);

    tracing::debug!(
        %measure,
        raw_score,
        scaled_score,
        predicted,
        z,
        percentile = pct,
        ?classification,
        "scored"
    );

    ScoreOutcome::Scored(TestResult {
        measure,
        raw_score,
        scaled_score,
        predicted_scaled_score: predicted,
        z_score: z,
        percentile: pct,
        classification,
    })
}

/// Score every measure, in report order.
pub fn score_outcomes(
    table: &NormsTable,
    subject: &Subject,
    raws: &RawScores,
) -> Vec<(Measure, ScoreOutcome)> {
    Measure::ALL
        .into_iter()
        .map(|m| (m, score_measure(m, table.get(m), subject, raws.get(m))))
        .collect()
}

/// Results for the administered, in-range measures only.
pub fn score_all(table: &NormsTable, subject: &Subject, raws: &RawScores) -> Vec<TestResult> {
    score_outcomes(table, subject, raws)
        .into_iter()
        .filter_map(|(_, outcome)| outcome.into_result())
        .collect()
}
