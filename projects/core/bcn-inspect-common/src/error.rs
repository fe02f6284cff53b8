//! Error types for block decoding.

use thiserror::Error;

/// Errors produced while interpreting a single compressed block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The low 5 bits of a BC6H block hold one of the four reserved mode patterns
    /// (`10011`, `10111`, `11011`, `11111`).
    #[error("Reserved BC6H mode {0:05b}")]
    ReservedBc6hMode(u8),

    /// The first byte of a BC7 block is zero, which selects the reserved mode 8.
    #[error("Reserved BC7 mode 8")]
    ReservedBc7Mode,
}
