//! Error handling for the rasterization and animation pipeline.

use thiserror::Error;

/// Rasterization error type
#[derive(Error, Debug)]
pub enum RenderError {
    /// The movement sequence was empty, so global axis bounds are undefined
    #[error("Toolpath contains no movements to render")]
    EmptyToolpath,

    /// The drawing surface could not be allocated
    #[error("Failed to allocate {width}x{height} drawing surface")]
    Surface {
        /// Requested surface width in pixels.
        width: u32,
        /// Requested surface height in pixels.
        height: u32,
    },

    /// The animation encoder rejected the frame sequence
    #[error("Animation encoding failed: {0}")]
    Encode(#[from] image::ImageError),

    /// The toolpath source failed to parse
    #[error(transparent)]
    Parse(#[from] printtrace_core::Error),
}

/// Result type using RenderError
pub type Result<T> = std::result::Result<T, RenderError>;
