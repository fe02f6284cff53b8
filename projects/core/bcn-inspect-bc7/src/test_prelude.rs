//! Common test imports and utilities for BC7 tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

pub use bcn_inspect_common::bits::BitWriter;
pub use bcn_inspect_common::color_8888::Color8888;
pub use bcn_inspect_common::index::BlockIndices;

// Re-export super for convenience in test modules
pub use super::*;

use bcn_inspect_common::fixup::is_fixup_offset;

fn write_indices(writer: &mut BitWriter, indices: &BlockIndices, bits: u32, partitions: usize, shape: usize) {
    for (pixel, &index) in indices.values().iter().enumerate() {
        let width = if is_fixup_offset(partitions, shape, pixel) {
            bits - 1
        } else {
            bits
        };
        writer.write(index as u64, width);
    }
}

/// Encodes `block` in the layout of its mode.
pub(crate) fn pack_block(block: &Bc7Block) -> [u8; 16] {
    let mode = block.mode;
    let mut writer = BitWriter::new();
    writer
        .write(1 << mode.number, mode.number as u32 + 1)
        .write(block.partition as u64, mode.partition_bits as u32)
        .write(block.rotation.bits() as u64, mode.rotation_bits as u32)
        .write(block.index_selection as u64, mode.index_selection_bits as u32);

    for channel in 0..4 {
        let bits = if channel == 3 {
            mode.alpha_bits
        } else {
            mode.color_bits
        };
        for endpoint in block.endpoints.iter().take(mode.endpoint_count()) {
            writer.write(endpoint[channel] as u64, bits as u32);
        }
    }
    for &pbit in block.pbits.iter().take(mode.pbit_count()) {
        writer.write(pbit as u64, 1);
    }

    write_indices(
        &mut writer,
        &block.indices,
        mode.index_bits as u32,
        mode.subsets as usize - 1,
        block.partition as usize,
    );
    if mode.secondary_index_bits > 0 {
        write_indices(&mut writer, &block.secondary_indices, mode.secondary_index_bits as u32, 0, 0);
    }
    assert_eq!(writer.position(), 128, "mode {} does not fill the block", mode.number);
    writer.to_bytes()
}

/// Builds a block whose every field is derived from `seed`. Seed 0 gives all zero fields,
/// `u32::MAX` gives every field at its maximum.
pub(crate) fn synthetic_block(mode: &'static Bc7Mode, seed: u32) -> Bc7Block {
    let mut turn = 0u32;
    let mut next = |bits: u32| -> u8 {
        turn += 7;
        if bits == 0 {
            return 0;
        }
        (seed.rotate_left(turn) & ((1 << bits) - 1)) as u8
    };

    let partition = next(mode.partition_bits as u32);
    let rotation = Rotation::from_bits(next(mode.rotation_bits as u32));
    let index_selection = next(mode.index_selection_bits as u32) != 0;

    let mut endpoints = [[0u8; 4]; 6];
    for endpoint in endpoints.iter_mut().take(mode.endpoint_count()) {
        for (channel, component) in endpoint.iter_mut().enumerate() {
            let bits = if channel == 3 {
                mode.alpha_bits
            } else {
                mode.color_bits
            };
            *component = next(bits as u32);
        }
    }

    let mut pbits = [0u8; 6];
    for pbit in pbits.iter_mut().take(mode.pbit_count()) {
        *pbit = next(1);
    }

    let mut indices_for = |bits: u32, partitions: usize, shape: usize| {
        let mut values = [0u8; 16];
        for (pixel, value) in values.iter_mut().enumerate() {
            let width = if is_fixup_offset(partitions, shape, pixel) {
                bits - 1
            } else {
                bits
            };
            *value = next(width);
        }
        BlockIndices::from_values(values)
    };
    let indices = indices_for(
        mode.index_bits as u32,
        mode.subsets as usize - 1,
        partition as usize,
    );
    let secondary_indices = if mode.secondary_index_bits > 0 {
        indices_for(mode.secondary_index_bits as u32, 0, 0)
    } else {
        BlockIndices::default()
    };

    Bc7Block {
        mode,
        partition,
        rotation,
        index_selection,
        endpoints,
        pbits,
        indices,
        secondary_indices,
    }
}
