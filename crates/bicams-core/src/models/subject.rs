use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Numeric code the regression models were calibrated with.
    ///
    /// Male = 1, female = 2. Swapping these changes every predicted score.
    pub fn model_code(self) -> f64 {
        match self {
            Sex::Male => 1.0,
            Sex::Female => 2.0,
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sex::Male => f.write_str("male"),
            Sex::Female => f.write_str("female"),
        }
    }
}

impl FromStr for Sex {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "m" | "male" | "masculino" => Ok(Sex::Male),
            "f" | "female" | "feminino" => Ok(Sex::Female),
            other => Err(CoreError::UnknownSex(other.to_string())),
        }
    }
}

/// The person being assessed. Held only for the duration of one report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Display name or patient code.
    pub name: String,
    pub age: u32,
    pub sex: Sex,
    pub education_years: u32,
}
