//! Common test imports and utilities for BC1 tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Common types used in tests
pub use bcn_inspect_common::color_565::Color565;
pub use bcn_inspect_common::color_8888::Color8888;

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
