use thiserror::Error;

/// Failures acquiring browser resources. None of these reach the page: the
/// exported types log them and stay inert.
#[derive(Debug, Error)]
pub enum VizError {
    #[error("no document")]
    NoDocument,
    #[error("missing #{0}")]
    MissingElement(String),
    #[error("#{0} is not a <canvas>")]
    NotACanvas(String),
    #[error("2d context unavailable")]
    ContextUnavailable,
}
