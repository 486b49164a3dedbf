use thiserror::Error;

/// Errors raised on the export path.
///
/// Drawing operations never fail: an unmounted surface makes them no-ops.
#[derive(Error, Debug)]
pub enum PaintError {
    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to write image: {0}")]
    Io(#[from] std::io::Error),

    /// Browser refused one of the download steps
    #[error("Failed to start download: {0}")]
    Download(String),
}

pub type PaintResult<T> = Result<T, PaintError>;
