use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("no tests were scored; nothing to export")]
    NoResults,

    #[error("template rendering failed: {0}")]
    TemplateRender(String),

    #[error("template parse error: {0}")]
    TemplateParse(String),

    #[error("plot rendering failed: {0}")]
    Plot(String),

    #[error("report references figure {index} but only {available} were rendered")]
    MissingFigure { index: usize, available: usize },

    #[error("DOCX generation failed: {0}")]
    Docx(String),

    #[error("PDF generation failed: {0}")]
    Pdf(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<tera::Error> for ExportError {
    fn from(e: tera::Error) -> Self {
        ExportError::TemplateRender(e.to_string())
    }
}

impl From<lopdf::Error> for ExportError {
    fn from(e: lopdf::Error) -> Self {
        ExportError::Pdf(e.to_string())
    }
}
