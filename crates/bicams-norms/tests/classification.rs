use bicams_core::models::classification::Classification;
use bicams_core::models::locale::Locale;
use bicams_norms::bands::{all_bands, band};
use bicams_norms::classification::classify;

#[test]
fn band_midpoints() {
    assert_eq!(classify(1.0), Classification::ExceptionallyLow);
    assert_eq!(classify(5.0), Classification::BelowAverage);
    assert_eq!(classify(15.0), Classification::LowAverage);
    assert_eq!(classify(50.0), Classification::Average);
    assert_eq!(classify(80.0), Classification::HighAverage);
    assert_eq!(classify(95.0), Classification::AboveAverage);
    assert_eq!(classify(99.5), Classification::ExceptionallyHigh);
}

#[test]
fn lower_bounds_are_inclusive() {
    assert_eq!(classify(2.0), Classification::BelowAverage);
    assert_eq!(classify(9.0), Classification::LowAverage);
    assert_eq!(classify(25.0), Classification::Average);
    assert_eq!(classify(75.0), Classification::HighAverage);
    assert_eq!(classify(91.0), Classification::AboveAverage);
}

#[test]
fn ninety_eight_belongs_to_above_average() {
    // Exceptionally high starts strictly above 98, matching its ">98" label.
    assert_eq!(classify(98.0), Classification::AboveAverage);
    assert_eq!(classify(98.0001), Classification::ExceptionallyHigh);
}

#[test]
fn fractional_percentiles_between_integer_labels_are_covered() {
    // The integer range labels (e.g. "75-90", "91-97") leave gaps for real
    // percentiles. An older revision of this logic let values such as 97.5
    // fall through to the lowest tier; they now stay in the tier below the
    // next boundary.
    assert_eq!(classify(90.5), Classification::HighAverage);
    assert_eq!(classify(97.5), Classification::AboveAverage);
    assert_eq!(classify(74.5), Classification::Average);
    assert_eq!(classify(24.5), Classification::LowAverage);
    assert_eq!(classify(8.5), Classification::BelowAverage);
}

#[test]
fn tails_and_nan() {
    assert_eq!(classify(f64::NEG_INFINITY), Classification::ExceptionallyLow);
    assert_eq!(classify(-3.0), Classification::ExceptionallyLow);
    assert_eq!(classify(150.0), Classification::ExceptionallyHigh);
    assert_eq!(classify(f64::INFINITY), Classification::ExceptionallyHigh);
    assert_eq!(classify(f64::NAN), Classification::ExceptionallyLow);
}

#[test]
fn bands_follow_tier_order() {
    for (entry, tier) in all_bands().iter().zip(Classification::ALL) {
        assert_eq!(entry.classification, tier);
        assert_eq!(band(tier).classification, tier);
    }
}

#[test]
fn band_labels() {
    let average = band(Classification::Average);
    assert_eq!(average.score_range, "90-109");
    assert_eq!(average.percentile_range, "25-74");
    assert_eq!(average.label(Locale::En), "Average");
    assert_eq!(average.long_label(Locale::En), "Average Score");
    assert_eq!(average.long_label(Locale::PtBr), "Pontuação Média");

    let top = band(Classification::ExceptionallyHigh);
    assert_eq!(top.percentile_range, ">98");
    assert_eq!(top.long_label(Locale::PtBr), "Pontuação Excepcionalmente Alta");
}

#[test]
fn band_colors_are_distinct() {
    let mut hexes: Vec<_> = all_bands().iter().map(|b| b.color.hex()).collect();
    hexes.sort();
    hexes.dedup();
    assert_eq!(hexes.len(), 7);
}
