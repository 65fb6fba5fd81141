use crate::conversion::ConversionTable;
use crate::regression::RegressionModel;
use crate::MeasureNorms;

/// CVLT total correct across the five learning trials. Scaled 1–19.
pub fn norms() -> MeasureNorms {
    MeasureNorms {
        regression: RegressionModel {
            constant: 8.512324,
            age: -0.14798,
            age2: 0.001373,
            sex: 0.176426,
            education: 0.364315,
            residual_sd: 2.527166,
        },
        conversion: ConversionTable::from_bounds(&[
            (None, Some(19)),
            (Some(20), Some(28)),
            (Some(29), Some(31)),
            (Some(32), Some(35)),
            (Some(36), Some(39)),
            (Some(40), Some(41)),
            (Some(42), Some(44)),
            (Some(45), Some(48)),
            (Some(49), Some(52)),
            (Some(53), Some(56)),
            (Some(57), Some(60)),
            (Some(61), Some(64)),
            (Some(65), Some(66)),
            (Some(67), Some(69)),
            (Some(70), Some(71)),
            (Some(72), Some(72)),
            (Some(73), Some(74)),
            (Some(75), Some(75)),
            (Some(76), None),
        ]),
    }
}
