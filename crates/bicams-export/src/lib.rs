//! bicams-export
//!
//! Report rendering: Markdown via Tera, normal-curve plots, PDF and DOCX.

pub mod docx;
pub mod error;
pub mod pdf;
pub mod plot;
pub mod render;
pub mod styles;

use bicams_core::models::report::Report;
use serde::{Deserialize, Serialize};

use error::ExportError;
use plot::Figure;
use render::RenderOptions;
use styles::DocumentStyles;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    #[default]
    Pdf,
    Docx,
    Markdown,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Docx => "docx",
            ExportFormat::Markdown => "md",
        }
    }
}

/// A finished export, ready to be written wherever the caller wants.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Render `report` in the requested format.
///
/// A report with no results is refused with [`ExportError::NoResults`];
/// callers surface that as a warning rather than a failure.
pub fn export_report(
    report: &Report,
    format: ExportFormat,
    options: &RenderOptions,
    styles: &DocumentStyles,
) -> Result<ExportedDocument, ExportError> {
    if report.is_empty() {
        return Err(ExportError::NoResults);
    }

    let rendered = render::render_report(report, options)?;
    let bytes = match format {
        ExportFormat::Markdown => render::strip_figures(&rendered).into_bytes(),
        ExportFormat::Docx => {
            let figures = render_figures(report, options)?;
            docx::generate_docx(&rendered, &figures, styles)?
        }
        ExportFormat::Pdf => {
            let figures = render_figures(report, options)?;
            pdf::generate_pdf(&rendered, &figures, styles)?
        }
    };

    let file_name = report.file_name(format.extension());
    tracing::info!(%file_name, size = bytes.len(), ?format, "report exported");
    Ok(ExportedDocument { file_name, bytes })
}

/// One plot per result, in report order, matching the `figure:N` markers.
fn render_figures(report: &Report, options: &RenderOptions) -> Result<Vec<Figure>, ExportError> {
    report
        .results
        .iter()
        .map(|r| plot::render_distribution(r, options.locale))
        .collect()
}
