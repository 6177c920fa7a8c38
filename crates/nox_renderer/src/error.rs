//! Errors raised outside the path tracing core: configuration and output.

use thiserror::Error;

/// Errors that can occur while configuring a render or writing its image.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Failed to parse render config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid render config: {0}")]
    InvalidConfig(String),
}

pub type RenderResult<T> = Result<T, RenderError>;
