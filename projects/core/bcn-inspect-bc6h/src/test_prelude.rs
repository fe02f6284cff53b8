//! Common test imports and utilities for BC6H tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

pub use bcn_inspect_common::bits::{BitReader, BitWriter};

// Re-export super for convenience in test modules
pub use super::*;

use crate::layout::Field;

/// Packs a block for `mode` from the given fields, the way an encoder would lay it out.
///
/// `endpoints` is indexed `[W, X, Y, Z][r, g, b]`; only the bits each segment covers are
/// written. `indices` must already respect the fix-up widths.
pub(crate) fn pack_block(
    mode: &Bc6hMode,
    endpoints: [[u32; 3]; 4],
    shape: u8,
    indices: [u8; 16],
) -> [u8; 16] {
    let mut writer = BitWriter::new();
    writer.write(mode.prefix as u64, mode.prefix_bits as u32);
    for segment in mode.layout {
        let value = endpoints[segment.field.endpoint()][segment.field.channel()] >> segment.lsb;
        if segment.reversed {
            writer.write_reversed(value as u64, segment.len as u32);
        } else {
            writer.write(value as u64, segment.len as u32);
        }
    }

    let (partitions, bits) = if mode.subsets() == 2 {
        writer.write(shape as u64, 5);
        (1, 3)
    } else {
        (0, 4)
    };
    for (pixel, &index) in indices.iter().enumerate() {
        let width = if bcn_inspect_common::fixup::is_fixup_offset(partitions, shape as usize, pixel)
        {
            bits - 1
        } else {
            bits
        };
        writer.write(index as u64, width);
    }
    assert_eq!(writer.position(), 128, "mode {} does not fill the block", mode.number);
    writer.to_bytes()
}

/// Returns the endpoint values with every bit a mode stores set.
pub(crate) fn full_endpoints(mode: &Bc6hMode) -> [[u32; 3]; 4] {
    let mut endpoints = [[0u32; 3]; 4];
    for endpoint in 0..mode.subsets() * 2 {
        for channel in 0..3 {
            let field = Field::from_parts(endpoint, channel);
            endpoints[endpoint][channel] = (1u32 << mode.field_width(field)) - 1;
        }
    }
    endpoints
}
