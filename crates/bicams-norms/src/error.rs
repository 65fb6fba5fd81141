use bicams_core::models::measure::Measure;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum NormsError {
    #[error("failed to read norms file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid norms JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{measure}: conversion table is empty")]
    EmptyTable { measure: Measure },

    #[error("{measure}: expected scaled score {expected}, found {found}")]
    ScaledOutOfOrder {
        measure: Measure,
        expected: u8,
        found: u8,
    },

    #[error("{measure}: scaled score {scaled} has low bound above high bound")]
    InvertedInterval { measure: Measure, scaled: u8 },

    #[error("{measure}: scaled score {scaled} is unbounded but not at the end of the table")]
    InteriorUnbounded { measure: Measure, scaled: u8 },

    #[error("{measure}: raw scores between {after} and {next} are not covered")]
    Gap { measure: Measure, after: i32, next: i32 },

    #[error("{measure}: raw score {raw} is covered by more than one scaled score")]
    Overlap { measure: Measure, raw: i32 },

    #[error("{measure}: residual standard deviation must be positive, got {value}")]
    InvalidResidualSd { measure: Measure, value: f64 },
}
