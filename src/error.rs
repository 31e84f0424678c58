//! Error types for the rendering pipeline

use thiserror::Error;

/// Anything that can go wrong while producing an output file. Curve
/// generation itself cannot fail; failures come from the filesystem or the
/// image encoder.
#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}
