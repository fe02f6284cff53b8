//! Common test imports and utilities for API tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Common types used in tests
pub use bcn_inspect_common::error::DecodeError;
pub use bcn_inspect_common::format::TextureFormat;
pub use bcn_inspect_common::image::Image;

// Re-export super for convenience in test modules
pub use super::*;

/// Builds the 8 bytes of a BC1 block.
pub(crate) fn bc1_bytes(color0: u16, color1: u16, indices: u32) -> [u8; 8] {
    let mut bytes = [0u8; 8];
    bytes[0..2].copy_from_slice(&color0.to_le_bytes());
    bytes[2..4].copy_from_slice(&color1.to_le_bytes());
    bytes[4..8].copy_from_slice(&indices.to_le_bytes());
    bytes
}

/// Repeats `block` `count` times.
pub(crate) fn tiled(block: &[u8], count: usize) -> Vec<u8> {
    block.repeat(count)
}

/// A 16 byte block whose first byte selects BC7 mode `mode`, rest zero.
pub(crate) fn bc7_mode_block(mode: u8) -> [u8; 16] {
    let mut bytes = [0u8; 16];
    bytes[0] = 1 << mode;
    bytes
}
