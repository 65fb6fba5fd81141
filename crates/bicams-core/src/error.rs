use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error("unknown measure: {0}")]
    UnknownMeasure(String),

    #[error("unknown sex: {0} (expected male/female)")]
    UnknownSex(String),

    #[error("unknown locale: {0} (expected en/pt-br)")]
    UnknownLocale(String),
}
