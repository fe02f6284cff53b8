//! Error types for the analysis operations.

use bcn_inspect_common::error::DecodeError;
use bcn_inspect_common::format::TextureFormat;
use thiserror::Error;

/// Result type for analysis operations.
pub type InspectResult<T> = Result<T, InspectError>;

/// Errors that can occur while analysing, converting or comparing images.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InspectError {
    /// The operation does not handle this format, e.g. [`analyze_bc`](crate::analyze_bc) on an
    /// uncompressed image or [`difference`](crate::difference) asked to output BCn.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(TextureFormat),

    /// A block uses a reserved mode and cannot be decoded to pixels.
    #[error("Reserved mode block: {0}")]
    ReservedMode(#[from] DecodeError),

    /// The two images of a difference do not have the same size.
    #[error("Image dimensions differ: {width_a}x{height_a} vs {width_b}x{height_b}")]
    DimensionMismatch {
        /// Width of the first image.
        width_a: u32,
        /// Height of the first image.
        height_a: u32,
        /// Width of the second image.
        width_b: u32,
        /// Height of the second image.
        height_b: u32,
    },

    /// The image has non-zero dimensions but no pixel data.
    #[error("Image has no pixel data")]
    NullBuffer,

    /// The pixel buffer is shorter than its format, height and row pitch require.
    #[error("Pixel buffer too small: required {needed} bytes, got {actual} bytes")]
    BufferTooSmall {
        /// Bytes required.
        needed: usize,
        /// Bytes available.
        actual: usize,
    },
}
