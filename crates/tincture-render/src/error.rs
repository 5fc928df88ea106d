//! Error types for frame construction.

use std::error::Error;
use std::fmt;

/// Errors arising from frame geometry or renderer parameters.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderError {
    /// Frame width or height is zero.
    EmptyFrame,
    /// Row stride cannot hold one row of pixels.
    StrideTooSmall {
        /// Requested stride in bytes.
        stride: usize,
        /// Minimum stride (`width * 4`).
        min: usize,
    },
    /// `stride * height` overflows `usize`.
    SizeOverflow,
    /// Minimum brightness outside `[0, 1]` or non-finite.
    InvalidMinBrightness {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyFrame => write!(f, "frame must have at least one pixel"),
            Self::StrideTooSmall { stride, min } => {
                write!(f, "stride {stride} is smaller than one row ({min} bytes)")
            }
            Self::SizeOverflow => write!(f, "frame byte size overflows"),
            Self::InvalidMinBrightness { value } => {
                write!(f, "min_brightness must be in [0, 1], got {value}")
            }
        }
    }
}

impl Error for RenderError {}
