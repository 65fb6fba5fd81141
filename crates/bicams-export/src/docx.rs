use std::io::Cursor;

use docx_rs::{AlignmentType, BreakType, Docx, Paragraph, Pic, Run, RunFonts, Style, StyleType};

use crate::error::ExportError;
use crate::plot::Figure;
use crate::render::{Block, parse_blocks};
use crate::styles::DocumentStyles;

/// English Metric Units per millimetre.
const EMU_PER_MM: f32 = 36_000.0;
/// Text width of the default A4 section, between its 30 mm side margins.
const TEXT_WIDTH_MM: f32 = 150.0;

/// Generate a DOCX document from rendered report Markdown.
///
/// Supports the same subset as the PDF writer:
/// - `# Title` → centred Heading 1
/// - `## Heading` → Heading 2
/// - `![caption](figure:N)` → `figures[N]` as an inline PNG, centred
/// - `[text](url)` → `text (url)` when they differ, else the bare url
/// - `---` or `***` → page break
/// - Everything else → normal paragraph
pub fn generate_docx(
    rendered: &str,
    figures: &[Figure],
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size));

    for block in parse_blocks(rendered) {
        docx = match block {
            Block::Blank => docx.add_paragraph(Paragraph::new()),
            Block::Title(text) => docx.add_paragraph(
                heading_paragraph(text, "Heading1", styles).align(AlignmentType::Center),
            ),
            Block::Heading(text) => docx.add_paragraph(heading_paragraph(text, "Heading2", styles)),
            Block::Text(text) => docx.add_paragraph(body_paragraph(text, styles)),
            Block::Link { text, url } => {
                let shown = if text == url {
                    url.to_string()
                } else {
                    format!("{text} ({url})")
                };
                docx.add_paragraph(body_paragraph(&shown, styles))
            }
            Block::Figure { index, .. } => {
                let figure = figures.get(index).ok_or(ExportError::MissingFigure {
                    index,
                    available: figures.len(),
                })?;
                docx.add_paragraph(figure_paragraph(figure, styles)?)
            }
            Block::PageBreak => docx
                .add_paragraph(Paragraph::new().add_run(Run::new().add_break(BreakType::Page))),
        };
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
        .bold()
}

fn heading_paragraph(text: &str, style_id: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(body_run(text, styles))
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

/// The figure scaled to the configured width, or the text width if that is
/// narrower, keeping its aspect ratio.
fn figure_paragraph(figure: &Figure, styles: &DocumentStyles) -> Result<Paragraph, ExportError> {
    let width_emu = styles.figure_width_mm.min(TEXT_WIDTH_MM) * EMU_PER_MM;
    let height_emu = width_emu * figure.height as f32 / figure.width as f32;
    let pic = Pic::new_with_dimensions(figure.to_png()?, figure.width, figure.height)
        .size(width_emu.round() as u32, height_emu.round() as u32);

    Ok(Paragraph::new()
        .align(AlignmentType::Center)
        .add_run(Run::new().add_image(pic)))
}
