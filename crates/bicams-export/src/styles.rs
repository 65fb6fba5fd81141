use serde::{Deserialize, Serialize};

/// Document styling configuration for exports.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentStyles {
    /// Font for body text in DOCX output (PDF always uses Helvetica).
    pub body_font: String,

    /// Font for headings in DOCX output.
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Title font size in points.
    pub heading1_size: usize,

    /// Section heading font size in points.
    pub heading2_size: usize,

    /// Left/right/top page margin in millimetres.
    pub margin_mm: f32,

    /// Bottom margin that triggers a page break, in millimetres.
    pub page_break_margin_mm: f32,

    /// Height of one text row in millimetres.
    pub row_height_mm: f32,

    /// Width of embedded plots in millimetres.
    pub figure_width_mm: f32,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Arial".to_string(),
            heading_font: "Arial".to_string(),
            body_size: 12,
            heading1_size: 16,
            heading2_size: 12,
            margin_mm: 10.0,
            page_break_margin_mm: 15.0,
            row_height_mm: 10.0,
            figure_width_mm: 190.0,
        }
    }
}
