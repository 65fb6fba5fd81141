use bicams_core::models::measure::Measure;
use serde::{Deserialize, Serialize};

use crate::error::NormsError;

/// Inclusive raw-score interval for one scaled score.
///
/// `None` on either side means unbounded in that direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRange {
    pub scaled: u8,
    pub low: Option<i32>,
    pub high: Option<i32>,
}

impl RawRange {
    pub fn contains(&self, raw: i32) -> bool {
        self.low.is_none_or(|low| raw >= low) && self.high.is_none_or(|high| raw <= high)
    }
}

/// Ordered raw → scaled conversion for one measure, scaled score 1 first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConversionTable {
    ranges: Vec<RawRange>,
}

impl ConversionTable {
    /// Build from `(low, high)` pairs; the scaled score is the 1-based position.
    pub fn from_bounds(bounds: &[(Option<i32>, Option<i32>)]) -> Self {
        let ranges = bounds
            .iter()
            .zip(1u8..)
            .map(|(&(low, high), scaled)| RawRange { scaled, low, high })
            .collect();
        Self { ranges }
    }

    pub fn ranges(&self) -> &[RawRange] {
        &self.ranges
    }

    /// Highest scaled score this table can produce.
    pub fn max_scaled(&self) -> u8 {
        self.ranges.last().map_or(0, |r| r.scaled)
    }

    /// Scaled score for `raw`, or `None` when no interval contains it.
    pub fn lookup(&self, raw: i32) -> Option<u8> {
        self.ranges.iter().find(|r| r.contains(raw)).map(|r| r.scaled)
    }

    /// Intervals must be numbered 1..N and tile the raw line: contiguous,
    /// non-overlapping, only the outermost ends may be unbounded.
    pub fn validate(&self, measure: Measure) -> Result<(), NormsError> {
        if self.ranges.is_empty() {
            return Err(NormsError::EmptyTable { measure });
        }

        let last = self.ranges.len() - 1;
        for (i, range) in self.ranges.iter().enumerate() {
            let expected = u8::try_from(i + 1).unwrap_or(u8::MAX);
            if range.scaled != expected {
                return Err(NormsError::ScaledOutOfOrder {
                    measure,
                    expected,
                    found: range.scaled,
                });
            }
            if (range.low.is_none() && i != 0) || (range.high.is_none() && i != last) {
                return Err(NormsError::InteriorUnbounded {
                    measure,
                    scaled: range.scaled,
                });
            }
            if let (Some(low), Some(high)) = (range.low, range.high)
                && low > high
            {
                return Err(NormsError::InvertedInterval {
                    measure,
                    scaled: range.scaled,
                });
            }
        }

        for pair in self.ranges.windows(2) {
            // Interior bounds are guaranteed present by the loop above.
            let (Some(after), Some(next)) = (pair[0].high, pair[1].low) else {
                continue;
            };
            if next <= after {
                return Err(NormsError::Overlap { measure, raw: next });
            }
            if next > after + 1 {
                return Err(NormsError::Gap { measure, after, next });
            }
        }

        Ok(())
    }
}
