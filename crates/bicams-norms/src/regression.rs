use bicams_core::models::measure::Measure;
use bicams_core::models::subject::{Sex, Subject};
use serde::{Deserialize, Serialize};

use crate::error::NormsError;

/// Linear model for the scaled score expected from demographics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RegressionModel {
    pub constant: f64,
    pub age: f64,
    pub age2: f64,
    pub sex: f64,
    pub education: f64,
    pub residual_sd: f64,
}

impl RegressionModel {
    /// Predicted scaled score. Extrapolates linearly outside the
    /// calibration sample; no input is rejected.
    pub fn predict(&self, age: u32, sex: Sex, education_years: u32) -> f64 {
        let age = f64::from(age);
        self.constant
            + self.age * age
            + self.age2 * age * age
            + self.sex * sex.model_code()
            + self.education * f64::from(education_years)
    }

    pub fn predict_for(&self, subject: &Subject) -> f64 {
        self.predict(subject.age, subject.sex, subject.education_years)
    }

    pub fn validate(&self, measure: Measure) -> Result<(), NormsError> {
        if !(self.residual_sd.is_finite() && self.residual_sd > 0.0) {
            return Err(NormsError::InvalidResidualSd {
                measure,
                value: self.residual_sd,
            });
        }
        Ok(())
    }
}
