use crate::conversion::ConversionTable;
use crate::regression::RegressionModel;
use crate::MeasureNorms;

/// SDMT oral version, correct substitutions in 90 seconds. Scaled 1–16.
pub fn norms() -> MeasureNorms {
    MeasureNorms {
        regression: RegressionModel {
            constant: 9.248778,
            age: -0.01094,
            age2: -0.00086,
            sex: -0.4714,
            education: 0.263055,
            residual_sd: 2.48323,
        },
        conversion: ConversionTable::from_bounds(&[
            (None, Some(9)),
            (Some(10), Some(17)),
            (Some(18), Some(23)),
            (Some(24), Some(29)),
            (Some(30), Some(36)),
            (Some(37), Some(43)),
            (Some(44), Some(49)),
            (Some(50), Some(53)),
            (Some(54), Some(58)),
            (Some(59), Some(62)),
            (Some(63), Some(68)),
            (Some(69), Some(74)),
            (Some(75), Some(79)),
            (Some(80), Some(93)),
            (Some(94), Some(107)),
            (Some(108), None),
        ]),
    }
}
