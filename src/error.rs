//! Error types for page texture handling

use crate::graphics::bitmap::PixelFormat;
use thiserror::Error;

/// Errors raised while allocating or rebuilding page textures
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageError {
    #[error("Out of memory allocating {width}x{height} {format} bitmap")]
    Allocation {
        width: u32,
        height: u32,
        format: PixelFormat,
    },

    #[error("Invalid bitmap dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Pixel count mismatch: expected {expected}, got {actual}")]
    PixelCountMismatch { expected: usize, actual: usize },

    #[error("No front baseline captured yet")]
    MissingBaseline,
}

pub type Result<T> = core::result::Result<T, PageError>;
