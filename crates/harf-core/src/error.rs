//! Error types for harf
//!
//! The shaping engine itself is total and never fails. Errors come from
//! the edges: pipeline configuration, rendering surfaces, and I/O.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, HarfError>;

/// Main error type for harf
#[derive(Debug, Error)]
pub enum HarfError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Surface failed: {0}")]
    Surface(#[from] SurfaceError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Other error: {0}")]
    Other(String),
}

/// Errors raised while placing a prepared run on a surface
#[derive(Debug, Error)]
pub enum SurfaceError {
    #[error("Position out of bounds: ({x}, {y})")]
    OutOfBounds { x: f32, y: f32 },
}
