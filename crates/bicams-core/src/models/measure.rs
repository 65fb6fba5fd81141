use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::locale::Locale;
use crate::error::CoreError;

/// One of the three BICAMS subtests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Measure {
    /// California Verbal Learning Test, total correct across trials.
    #[serde(rename = "CVLT_totaldeacertos")]
    Cvlt,
    /// Brief Visuospatial Memory Test, total recall.
    #[serde(rename = "BVMT_Total")]
    Bvmt,
    /// Symbol Digit Modalities Test.
    #[serde(rename = "SDMT")]
    Sdmt,
}

impl Measure {
    /// All measures in report order.
    pub const ALL: [Measure; 3] = [Measure::Cvlt, Measure::Bvmt, Measure::Sdmt];

    /// Stable identifier used in norm files and JSON output.
    pub fn id(self) -> &'static str {
        match self {
            Measure::Cvlt => "CVLT_totaldeacertos",
            Measure::Bvmt => "BVMT_Total",
            Measure::Sdmt => "SDMT",
        }
    }

    pub fn display_name(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Measure::Cvlt, Locale::PtBr) => "CVLT (total de acertos)",
            (Measure::Cvlt, Locale::En) => "CVLT (total correct)",
            (Measure::Bvmt, _) => "BVMT (total)",
            (Measure::Sdmt, _) => "SDMT",
        }
    }

    /// Raw scores the entry form accepts for this measure.
    ///
    /// The scoring pipeline itself does not enforce this range.
    pub fn raw_input_range(self) -> RangeInclusive<i32> {
        match self {
            Measure::Cvlt => 0..=80,
            Measure::Bvmt => 0..=36,
            Measure::Sdmt => 0..=120,
        }
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Measure {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cvlt" | "cvlt_totaldeacertos" => Ok(Measure::Cvlt),
            "bvmt" | "bvmt_total" => Ok(Measure::Bvmt),
            "sdmt" => Ok(Measure::Sdmt),
            other => Err(CoreError::UnknownMeasure(other.to_string())),
        }
    }
}
