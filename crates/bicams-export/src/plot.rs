use std::sync::LazyLock;

use bicams_core::models::locale::Locale;
use bicams_core::models::result::TestResult;
use bicams_norms::bands::band;
use bicams_norms::scoring::normal_pdf;
use plotters::prelude::*;
use plotters::style::{FontStyle, register_font};

use crate::error::ExportError;

pub const FIGURE_WIDTH: u32 = 1000;
pub const FIGURE_HEIGHT: u32 = 400;

/// Width of the curve panel; the rest of the figure holds the score box.
const CHART_WIDTH: u32 = 640;

const X_LIMIT: f64 = 4.0;
const Y_MAX: f64 = 0.45;
const CURVE_POINTS: u32 = 200;

const FONT: &str = "sans-serif";
static FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSans.ttf");
static FONT_REGISTERED: LazyLock<bool> =
    LazyLock::new(|| register_font(FONT, FontStyle::Normal, FONT_DATA).is_ok());

/// A rendered plot as packed 8-bit RGB rows, top row first.
#[derive(Debug, Clone)]
pub struct Figure {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
}

impl Figure {
    /// Encode as an 8-bit RGB PNG.
    pub fn to_png(&self) -> Result<Vec<u8>, ExportError> {
        let mut out = Vec::new();
        let mut encoder = png::Encoder::new(&mut out, self.width, self.height);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().map_err(plot_err)?;
        writer.write_image_data(&self.rgb).map_err(plot_err)?;
        writer.finish().map_err(plot_err)?;
        Ok(out)
    }
}

struct PlotLabels {
    title: String,
    density: &'static str,
    curve: &'static str,
    percentile: &'static str,
    classification: &'static str,
}

impl PlotLabels {
    fn new(result: &TestResult, locale: Locale) -> Self {
        let name = result.measure.display_name(locale);
        match locale {
            Locale::En => PlotLabels {
                title: format!("Normative values for {name}"),
                density: "Probability density",
                curve: "Normal distribution",
                percentile: "Percentile",
                classification: "Classification",
            },
            Locale::PtBr => PlotLabels {
                title: format!("Valores normativos para {name}"),
                density: "Densidade de Probabilidade",
                curve: "Distribuição Normal",
                percentile: "Percentil",
                classification: "Classificação",
            },
        }
    }
}

/// Color of the z-score marker: yellow→red below the mean, cyan→blue
/// above it, green at exactly zero. Saturates at |z| = 4.
pub fn dot_color(z: f64) -> RGBColor {
    let n = (z / X_LIMIT).clamp(-1.0, 1.0);
    let (r, g, b) = if z == 0.0 {
        (0.0, 1.0, 0.0)
    } else if z > 0.0 {
        (0.0, 1.0 - n, 1.0)
    } else {
        (1.0, 1.0 + n, 0.0)
    };
    RGBColor(channel(r), channel(g), channel(b))
}

fn channel(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

fn plot_err(e: impl std::fmt::Display) -> ExportError {
    ExportError::Plot(e.to_string())
}

/// Standard normal density over [-4, 4] with the subject's z-score marked,
/// titled after the measure, with the z-score, percentile and
/// classification printed beside the curve.
///
/// Scores beyond ±4 are pinned to the edge of the axis.
pub fn render_distribution(result: &TestResult, locale: Locale) -> Result<Figure, ExportError> {
    if !*FONT_REGISTERED {
        return Err(ExportError::Plot("embedded plot font could not be loaded".to_string()));
    }

    let labels = PlotLabels::new(result, locale);
    let z = result.z_score;
    let (width, height) = (FIGURE_WIDTH, FIGURE_HEIGHT);
    let mut rgb = vec![0u8; (width * height * 3) as usize];

    {
        let root = BitMapBackend::with_buffer(&mut rgb, (width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(plot_err)?;
        let (chart_area, info_area) = root.split_horizontally(CHART_WIDTH);

        let mut chart = ChartBuilder::on(&chart_area)
            .caption(&labels.title, (FONT, 22))
            .margin(12)
            .x_label_area_size(44)
            .y_label_area_size(64)
            .build_cartesian_2d(-X_LIMIT..X_LIMIT, 0.0..Y_MAX)
            .map_err(plot_err)?;

        chart
            .configure_mesh()
            .x_labels(9)
            .y_labels(5)
            .bold_line_style(RGBColor(220, 220, 220))
            .light_line_style(WHITE)
            .x_desc("Z-score")
            .y_desc(labels.density)
            .label_style((FONT, 14))
            .draw()
            .map_err(plot_err)?;

        let curve = (0..=CURVE_POINTS).map(|i| {
            let x = -X_LIMIT + 2.0 * X_LIMIT * f64::from(i) / f64::from(CURVE_POINTS);
            (x, normal_pdf(x))
        });
        chart
            .draw_series(LineSeries::new(curve, BLUE.stroke_width(3)))
            .map_err(plot_err)?
            .label(labels.curve)
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE.stroke_width(3)));

        if !z.is_nan() {
            let x = z.clamp(-X_LIMIT, X_LIMIT);
            let color = dot_color(z);
            chart
                .draw_series(std::iter::once(Circle::new(
                    (x, normal_pdf(x)),
                    10,
                    color.filled(),
                )))
                .map_err(plot_err)?
                .label("Z-score")
                .legend(move |(x, y)| Circle::new((x + 10, y), 6, color.filled()));
        }

        chart
            .configure_series_labels()
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .label_font((FONT, 14))
            .draw()
            .map_err(plot_err)?;

        let lines = [
            format!("Z-score: {}", result.z_display()),
            format!("{}: {}", labels.percentile, result.percentile_display()),
            format!("{}:", labels.classification),
            band(result.classification).long_label(locale).to_string(),
        ];
        for (row, line) in lines.iter().enumerate() {
            let y = 110 + 40 * row as i32;
            info_area
                .draw(&Text::new(line.as_str(), (20, y), (FONT, 16)))
                .map_err(plot_err)?;
        }

        root.present().map_err(plot_err)?;
    }

    Ok(Figure { width, height, rgb })
}
