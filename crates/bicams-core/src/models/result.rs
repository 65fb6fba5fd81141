use serde::{Deserialize, Serialize};

use super::classification::Classification;
use super::measure::Measure;

/// A fully scored subtest.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    pub measure: Measure,
    pub raw_score: i32,
    pub scaled_score: u8,
    pub predicted_scaled_score: f64,
    pub z_score: f64,
    /// Φ(z) × 100.
    pub percentile: f64,
    pub classification: Classification,
}

impl TestResult {
    /// z-score as shown to the user (two decimals).
    pub fn z_display(&self) -> String {
        format!("{:.2}", self.z_score)
    }

    /// Percentile as shown to the user (one decimal, with `%`).
    pub fn percentile_display(&self) -> String {
        format!("{:.1}%", self.percentile)
    }
}

/// What scoring one measure produced.
///
/// Only `Scored` carries a result; the other two are dropped before
/// aggregation and never reach a report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ScoreOutcome {
    Scored(TestResult),
    /// The test was not given.
    NotAdministered,
    /// The raw score fell in no interval of the conversion table.
    OutOfRange { raw_score: i32 },
}

impl ScoreOutcome {
    pub fn into_result(self) -> Option<TestResult> {
        match self {
            ScoreOutcome::Scored(result) => Some(result),
            ScoreOutcome::NotAdministered | ScoreOutcome::OutOfRange { .. } => None,
        }
    }
}

/// Raw scores entered for one subject. `None` means the test was not given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawScores {
    pub cvlt: Option<i32>,
    pub bvmt: Option<i32>,
    pub sdmt: Option<i32>,
}

impl RawScores {
    pub fn get(&self, measure: Measure) -> Option<i32> {
        match measure {
            Measure::Cvlt => self.cvlt,
            Measure::Bvmt => self.bvmt,
            Measure::Sdmt => self.sdmt,
        }
    }
}
