#![allow(dead_code)]

use bicams_core::models::measure::Measure;
use bicams_core::models::report::Report;
use bicams_core::models::result::{RawScores, TestResult};
use bicams_core::models::subject::{Sex, Subject};
use bicams_norms::brazil;
use bicams_norms::scoring::score_all;

pub fn report_with(raws: RawScores) -> Report {
    let subject = Subject {
        name: "Maria da Silva".to_string(),
        age: 40,
        sex: Sex::Female,
        education_years: 12,
    };
    let results = score_all(brazil(), &subject, &raws);
    Report {
        subject,
        test_date: jiff::civil::date(2024, 3, 7),
        results,
    }
}

pub fn full_report() -> Report {
    report_with(RawScores {
        cvlt: Some(50),
        bvmt: Some(20),
        sdmt: Some(60),
    })
}

pub fn sdmt_only() -> Report {
    let report = report_with(RawScores {
        sdmt: Some(60),
        ..RawScores::default()
    });
    assert_eq!(report.results[0].measure, Measure::Sdmt);
    report
}

/// The SDMT result from [`sdmt_only`] with its z-score replaced.
pub fn sdmt_result_with_z(z: f64) -> TestResult {
    let mut result = sdmt_only().results.remove(0);
    result.z_score = z;
    result
}
