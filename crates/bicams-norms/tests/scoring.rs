use bicams_core::models::classification::Classification;
use bicams_core::models::measure::Measure;
use bicams_core::models::result::{RawScores, ScoreOutcome};
use bicams_core::models::subject::{Sex, Subject};
use bicams_norms::brazil;
use bicams_norms::scoring::{percentile, score_all, score_measure, score_outcomes, z_score};

fn subject(sex: Sex) -> Subject {
    Subject {
        name: "Test Patient".to_string(),
        age: 40,
        sex,
        education_years: 12,
    }
}

#[test]
fn sdmt_reference_case() {
    let table = brazil();
    let outcome = score_measure(Measure::Sdmt, &table.sdmt, &subject(Sex::Male), Some(60));
    let ScoreOutcome::Scored(result) = outcome else {
        panic!("expected a scored result, got {outcome:?}");
    };

    assert_eq!(result.scaled_score, 10);
    assert!((result.predicted_scaled_score - 10.1204).abs() < 1e-3);
    assert!((result.z_score - -0.0485).abs() < 1e-3);
    assert_eq!(result.z_display(), "-0.05");
    assert_eq!(result.percentile_display(), "48.1%");
    assert_eq!(result.classification, Classification::Average);
}

#[test]
fn predicted_score_follows_formula() {
    let model = brazil().cvlt.regression;
    let expected = 8.512324 - 0.14798 * 30.0 + 0.001373 * 900.0 + 0.176426 * 2.0 + 0.364315 * 16.0;
    assert!((model.predict(30, Sex::Female, 16) - expected).abs() < 1e-9);
}

#[test]
fn sex_encoding_is_one_for_male_two_for_female() {
    let model = brazil().sdmt.regression;
    let male = model.predict(40, Sex::Male, 12);
    let female = model.predict(40, Sex::Female, 12);
    assert!((female - male - model.sex).abs() < 1e-12);
}

#[test]
fn prediction_extrapolates_outside_calibration_range() {
    let model = brazil().bvmt.regression;
    let value = model.predict(120, Sex::Male, 30);
    assert!(value.is_finite());
}

#[test]
fn not_administered_short_circuits() {
    let outcome = score_measure(Measure::Cvlt, &brazil().cvlt, &subject(Sex::Male), None);
    assert_eq!(outcome, ScoreOutcome::NotAdministered);
    assert!(outcome.into_result().is_none());
}

#[test]
fn out_of_range_short_circuits() {
    let outcome = score_measure(Measure::Bvmt, &brazil().bvmt, &subject(Sex::Female), Some(40));
    assert_eq!(outcome, ScoreOutcome::OutOfRange { raw_score: 40 });
}

#[test]
fn omitted_measures_produce_no_results() {
    let raws = RawScores {
        cvlt: Some(50),
        bvmt: None,
        sdmt: Some(60),
    };
    let results = score_all(brazil(), &subject(Sex::Male), &raws);
    let measures: Vec<_> = results.iter().map(|r| r.measure).collect();
    assert_eq!(measures, vec![Measure::Cvlt, Measure::Sdmt]);
}

#[test]
fn all_omitted_produces_nothing() {
    let results = score_all(brazil(), &subject(Sex::Male), &RawScores::default());
    assert!(results.is_empty());
}

#[test]
fn outcomes_keep_report_order() {
    let raws = RawScores {
        cvlt: None,
        bvmt: Some(99),
        sdmt: Some(60),
    };
    let outcomes = score_outcomes(brazil(), &subject(Sex::Male), &raws);
    assert_eq!(outcomes.len(), 3);
    assert_eq!(outcomes[0], (Measure::Cvlt, ScoreOutcome::NotAdministered));
    assert_eq!(
        outcomes[1],
        (Measure::Bvmt, ScoreOutcome::OutOfRange { raw_score: 99 })
    );
    assert!(matches!(outcomes[2].1, ScoreOutcome::Scored(_)));
}

#[test]
fn percentile_of_zero_is_fifty() {
    assert!((percentile(0.0) - 50.0).abs() < 1e-9);
    assert!((percentile(1.0) - 84.1345).abs() < 1e-3);
}

#[test]
fn extreme_z_is_not_clamped() {
    let z = z_score(1, 40.0, 1.0);
    assert_eq!(z, -39.0);
    assert!(percentile(z) >= 0.0);
    assert!(percentile(z) < 1e-6);
}
