//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `soc-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("invalid geometry: {0}")]
    InvalidGeometry(String),

    #[error("geography parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
