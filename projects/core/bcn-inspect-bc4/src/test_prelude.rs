//! Common test imports and utilities for BC4/BC5 tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Re-export super for convenience in test modules
pub use super::*;

/// Builds the 8 bytes of a BC4 block from raw endpoint bytes and 16 indices.
pub(crate) fn bc4_bytes(endpoint0: u8, endpoint1: u8, indices: [u8; 16]) -> [u8; 8] {
    let packed = indices
        .iter()
        .enumerate()
        .fold(0u64, |acc, (pixel, &index)| acc | ((index as u64 & 0x7) << (pixel * 3)));
    let mut bytes = [0u8; 8];
    bytes[0] = endpoint0;
    bytes[1] = endpoint1;
    bytes[2..8].copy_from_slice(&packed.to_le_bytes()[..6]);
    bytes
}
