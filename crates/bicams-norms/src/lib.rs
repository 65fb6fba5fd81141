//! bicams-norms
//!
//! Normative scoring for the BICAMS battery. Pure data and arithmetic:
//! conversion tables, regression models, z-scores, percentiles and the
//! classification bands. No rendering and no I/O beyond loading a
//! replacement norms file.

pub mod bands;
pub mod classification;
pub mod conversion;
pub mod error;
pub mod measures;
pub mod regression;
pub mod scoring;

use std::path::Path;
use std::sync::LazyLock;

use bicams_core::models::measure::Measure;
use serde::{Deserialize, Serialize};

use conversion::ConversionTable;
use error::NormsError;
use regression::RegressionModel;

/// Calibration data for a single measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasureNorms {
    pub regression: RegressionModel,
    pub conversion: ConversionTable,
}

impl MeasureNorms {
    /// Check the invariants scoring relies on.
    pub fn validate(&self, measure: Measure) -> Result<(), NormsError> {
        self.regression.validate(measure)?;
        self.conversion.validate(measure)
    }
}

/// Norms for the whole battery, one entry per measure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormsTable {
    #[serde(rename = "CVLT_totaldeacertos")]
    pub cvlt: MeasureNorms,
    #[serde(rename = "BVMT_Total")]
    pub bvmt: MeasureNorms,
    #[serde(rename = "SDMT")]
    pub sdmt: MeasureNorms,
}

impl NormsTable {
    pub fn get(&self, measure: Measure) -> &MeasureNorms {
        match measure {
            Measure::Cvlt => &self.cvlt,
            Measure::Bvmt => &self.bvmt,
            Measure::Sdmt => &self.sdmt,
        }
    }

    pub fn validate(&self) -> Result<(), NormsError> {
        for measure in Measure::ALL {
            self.get(measure).validate(measure)?;
        }
        Ok(())
    }

    /// Parse and validate a norms table from JSON.
    pub fn from_json(json: &str) -> Result<Self, NormsError> {
        let table: NormsTable = serde_json::from_str(json)?;
        table.validate()?;
        Ok(table)
    }

    /// Load a replacement norms table from disk.
    pub fn load(path: &Path) -> Result<Self, NormsError> {
        let contents = std::fs::read_to_string(path).map_err(|source| NormsError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let table = Self::from_json(&contents)?;
        tracing::info!(path = %path.display(), "loaded norms table");
        Ok(table)
    }
}

/// Regression-based norms for the Brazilian population.
pub fn brazil() -> &'static NormsTable {
    static TABLE: LazyLock<NormsTable> = LazyLock::new(|| NormsTable {
        cvlt: measures::cvlt::norms(),
        bvmt: measures::bvmt::norms(),
        sdmt: measures::sdmt::norms(),
    });
    &TABLE
}
