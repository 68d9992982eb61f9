//! Error types for chart rendering

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while validating a request or producing a chart
#[derive(Debug, Error)]
pub enum PlotError {
    /// No usable font or rasterizer could be set up
    #[error("{0}")]
    Backend(String),

    /// A curve parameter is outside its valid domain
    #[error("{0}")]
    InvalidParameter(String),

    /// A drawing primitive failed
    #[error("drawing failed: {0}")]
    Draw(String),

    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PlotError {
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidParameter(message.into())
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, PlotError>;
