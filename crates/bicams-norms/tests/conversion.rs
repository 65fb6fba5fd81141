use bicams_core::models::measure::Measure;
use bicams_norms::brazil;
use bicams_norms::conversion::ConversionTable;
use bicams_norms::error::NormsError;

#[test]
fn builtin_tables_validate() {
    brazil().validate().unwrap();
}

#[test]
fn max_scaled_per_measure() {
    let table = brazil();
    assert_eq!(table.cvlt.conversion.max_scaled(), 19);
    assert_eq!(table.bvmt.conversion.max_scaled(), 14);
    assert_eq!(table.sdmt.conversion.max_scaled(), 16);
}

#[test]
fn every_form_score_maps_to_exactly_one_scaled_score() {
    let table = brazil();
    for measure in Measure::ALL {
        let conversion = &table.get(measure).conversion;
        for raw in measure.raw_input_range() {
            let hits = conversion
                .ranges()
                .iter()
                .filter(|r| r.contains(raw))
                .count();
            assert_eq!(hits, 1, "{measure} raw {raw} matched {hits} intervals");
        }
    }
}

#[test]
fn adjacent_boundaries_step_by_one() {
    let table = brazil();
    for measure in Measure::ALL {
        let conversion = &table.get(measure).conversion;
        for pair in conversion.ranges().windows(2) {
            let top = pair[0].high.unwrap();
            let bottom = pair[1].low.unwrap();
            assert_eq!(bottom, top + 1);
            let lower = conversion.lookup(top).unwrap();
            let upper = conversion.lookup(bottom).unwrap();
            assert_eq!(upper, lower + 1, "{measure} at {top}/{bottom}");
        }
    }
}

#[test]
fn unbounded_ends_catch_extreme_scores() {
    let table = brazil();
    assert_eq!(table.cvlt.conversion.lookup(-50), Some(1));
    assert_eq!(table.cvlt.conversion.lookup(500), Some(19));
    assert_eq!(table.sdmt.conversion.lookup(i32::MIN), Some(1));
    assert_eq!(table.sdmt.conversion.lookup(i32::MAX), Some(16));
}

#[test]
fn bvmt_above_test_maximum_is_undefined() {
    let conversion = &brazil().bvmt.conversion;
    assert_eq!(conversion.lookup(36), Some(14));
    assert_eq!(conversion.lookup(37), None);
}

#[test]
fn sdmt_sixty_is_scaled_ten() {
    assert_eq!(brazil().sdmt.conversion.lookup(60), Some(10));
    assert_eq!(brazil().sdmt.conversion.lookup(59), Some(10));
    assert_eq!(brazil().sdmt.conversion.lookup(62), Some(10));
}

#[test]
fn gap_is_rejected() {
    let table = ConversionTable::from_bounds(&[(None, Some(5)), (Some(7), None)]);
    let err = table.validate(Measure::Sdmt).unwrap_err();
    assert!(matches!(err, NormsError::Gap { after: 5, next: 7, .. }));
}

#[test]
fn overlap_is_rejected() {
    let table = ConversionTable::from_bounds(&[(None, Some(5)), (Some(5), None)]);
    let err = table.validate(Measure::Cvlt).unwrap_err();
    assert!(matches!(err, NormsError::Overlap { raw: 5, .. }));
}

#[test]
fn interior_unbounded_is_rejected() {
    let table = ConversionTable::from_bounds(&[(None, None), (Some(5), Some(9))]);
    let err = table.validate(Measure::Bvmt).unwrap_err();
    assert!(matches!(err, NormsError::InteriorUnbounded { scaled: 1, .. }));
}

#[test]
fn inverted_interval_is_rejected() {
    let table = ConversionTable::from_bounds(&[(None, Some(2)), (Some(3), Some(1))]);
    let err = table.validate(Measure::Bvmt).unwrap_err();
    assert!(matches!(err, NormsError::InvertedInterval { scaled: 2, .. }));
}

#[test]
fn empty_table_is_rejected() {
    let table = ConversionTable::from_bounds(&[]);
    assert!(matches!(
        table.validate(Measure::Sdmt),
        Err(NormsError::EmptyTable { .. })
    ));
}
