use crate::conversion::ConversionTable;
use crate::regression::RegressionModel;
use crate::MeasureNorms;

/// BVMT-R total recall. Scaled 1–14.
///
/// The top interval is closed at 36, the test maximum, so anything above
/// it has no scaled score.
pub fn norms() -> MeasureNorms {
    MeasureNorms {
        regression: RegressionModel {
            constant: 11.58455,
            age: -0.14752,
            age2: 0.000896,
            sex: -0.19042,
            education: 0.22895,
            residual_sd: 2.626665,
        },
        conversion: ConversionTable::from_bounds(&[
            (None, Some(2)),
            (Some(3), Some(5)),
            (Some(6), Some(8)),
            (Some(9), Some(12)),
            (Some(13), Some(17)),
            (Some(18), Some(20)),
            (Some(21), Some(23)),
            (Some(24), Some(26)),
            (Some(27), Some(28)),
            (Some(29), Some(30)),
            (Some(31), Some(32)),
            (Some(33), Some(34)),
            (Some(35), Some(35)),
            (Some(36), Some(36)),
        ]),
    }
}
