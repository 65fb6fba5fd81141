mod common;

use bicams_core::models::locale::Locale;
use bicams_export::plot::{FIGURE_HEIGHT, FIGURE_WIDTH, Figure, dot_color, render_distribution};
use plotters::style::RGBColor;

fn plot(z: f64) -> Figure {
    render_distribution(&common::sdmt_result_with_z(z), Locale::En).unwrap()
}

fn is_white(pixel: &[u8]) -> bool {
    *pixel == [255, 255, 255]
}

#[test]
fn figure_has_expected_dimensions() {
    let figure = plot(-0.05);
    assert_eq!(figure.width, FIGURE_WIDTH);
    assert_eq!(figure.height, FIGURE_HEIGHT);
    assert_eq!(figure.rgb.len(), (FIGURE_WIDTH * FIGURE_HEIGHT * 3) as usize);
}

#[test]
fn figure_is_mostly_white_with_some_ink() {
    let figure = plot(1.2);
    let white = figure.rgb.chunks(3).filter(|p| is_white(p)).count();
    let total = figure.rgb.len() / 3;
    assert!(white > total / 2);
    assert!(white < total);
}

#[test]
fn score_box_beside_the_curve_carries_text() {
    let figure = plot(-0.05);
    let row_bytes = (FIGURE_WIDTH * 3) as usize;
    let ink = figure
        .rgb
        .chunks(row_bytes)
        .flat_map(|row| row[700 * 3..].chunks(3))
        .filter(|p| !is_white(p))
        .count();
    assert!(ink > 100, "expected glyphs in the score box, found {ink} inked pixels");
}

#[test]
fn labels_follow_the_locale() {
    let result = common::sdmt_result_with_z(0.5);
    let en = render_distribution(&result, Locale::En).unwrap();
    let pt = render_distribution(&result, Locale::PtBr).unwrap();
    assert_ne!(en.rgb, pt.rgb);
}

#[test]
fn extreme_scores_still_render() {
    plot(-12.0);
    plot(9.5);
    plot(f64::NAN);
}

#[test]
fn png_encoding_keeps_dimensions() {
    let png = plot(0.0).to_png().unwrap();
    assert!(png.starts_with(b"\x89PNG\r\n\x1a\n"));
    // IHDR is the first chunk: width then height, big-endian.
    assert_eq!(&png[16..20], &FIGURE_WIDTH.to_be_bytes());
    assert_eq!(&png[20..24], &FIGURE_HEIGHT.to_be_bytes());
}

#[test]
fn marker_gradient() {
    assert_eq!(dot_color(0.0), RGBColor(0, 255, 0));
    assert_eq!(dot_color(2.0), RGBColor(0, 128, 255));
    assert_eq!(dot_color(-2.0), RGBColor(255, 128, 0));
    assert_eq!(dot_color(4.0), RGBColor(0, 0, 255));
    assert_eq!(dot_color(-4.0), RGBColor(255, 0, 0));
    // Saturates beyond ±4.
    assert_eq!(dot_color(10.0), RGBColor(0, 0, 255));
    assert_eq!(dot_color(-10.0), RGBColor(255, 0, 0));
}
