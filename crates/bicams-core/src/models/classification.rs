use serde::{Deserialize, Serialize};

/// Seven ordinal severity tiers, lowest first.
///
/// Only the ordering lives here; labels and colors are attached by the
/// norms crate's band table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    ExceptionallyLow,
    BelowAverage,
    LowAverage,
    Average,
    HighAverage,
    AboveAverage,
    ExceptionallyHigh,
}

impl Classification {
    pub const ALL: [Classification; 7] = [
        Classification::ExceptionallyLow,
        Classification::BelowAverage,
        Classification::LowAverage,
        Classification::Average,
        Classification::HighAverage,
        Classification::AboveAverage,
        Classification::ExceptionallyHigh,
    ];
}
