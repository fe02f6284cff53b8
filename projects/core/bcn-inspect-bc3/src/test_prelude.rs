//! Common test imports and utilities for BC3 tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

pub use bcn_inspect_common::color_8888::Color8888;

// Re-export super for convenience in test modules
pub use super::*;

/// Builds the 16 bytes of a BC3 block. `alpha_indices` holds the 48 index bits.
pub(crate) fn bc3_bytes(
    alpha0: u8,
    alpha1: u8,
    alpha_indices: u64,
    color0: u16,
    color1: u16,
    indices: u32,
) -> [u8; 16] {
    let mut bytes = [0u8; 16];
    bytes[0] = alpha0;
    bytes[1] = alpha1;
    bytes[2..8].copy_from_slice(&alpha_indices.to_le_bytes()[..6]);
    bytes[8..10].copy_from_slice(&color0.to_le_bytes());
    bytes[10..12].copy_from_slice(&color1.to_le_bytes());
    bytes[12..16].copy_from_slice(&indices.to_le_bytes());
    bytes
}
