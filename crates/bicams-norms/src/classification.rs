use bicams_core::models::classification::Classification;

/// Map a percentile to its tier.
///
/// Lower bounds are inclusive except at the top, where the exceptionally
/// high tier starts strictly above 98. The tiers tile the whole real line;
/// NaN falls through to the lowest tier.
pub fn classify(percentile: f64) -> Classification {
    if percentile > 98.0 {
        Classification::ExceptionallyHigh
    } else if percentile >= 91.0 {
        Classification::AboveAverage
    } else if percentile >= 75.0 {
        Classification::HighAverage
    } else if percentile >= 25.0 {
        Classification::Average
    } else if percentile >= 9.0 {
        Classification::LowAverage
    } else if percentile >= 2.0 {
        Classification::BelowAverage
    } else {
        Classification::ExceptionallyLow
    }
}
