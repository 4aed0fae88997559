//! # Error Types
//!
//! This module defines error types used throughout the factura library.

use thiserror::Error;

/// Main error type for factura operations
#[derive(Debug, Error)]
pub enum FacturaError {
    /// HTML document rendering failed
    #[error("Render error: {0}")]
    Render(String),

    /// PDF rasterization failed (engine launch, layout, or serialization)
    #[error("Rasterization error: {0}")]
    Rasterize(String),

    /// Malformed or unusable input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Transport-level errors (bind, serve)
    #[error("Transport error: {0}")]
    Transport(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
