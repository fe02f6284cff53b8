//! Per pixel index fields.
//!
//! Every BCn format stores one palette index per pixel, 2 to 4 bits wide, pixel 0 first.
//! The partitioned BC6H/BC7 modes additionally shorten the index of each anchor pixel by
//! one bit (see [`crate::fixup`]).

use crate::bits::{low_mask, BitReader, BlockBits};
use crate::fixup::is_fixup_offset;
use core::fmt;

/// The 16 decoded indices of a block, in pixel order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockIndices {
    values: [u8; 16],
}

impl BlockIndices {
    /// Wraps already decoded indices.
    pub const fn from_values(values: [u8; 16]) -> Self {
        Self { values }
    }

    /// Splits a packed field of 16 equally sized indices.
    ///
    /// ```
    /// use bcn_inspect_common::index::BlockIndices;
    ///
    /// let indices = BlockIndices::from_packed(0b11_10_01_00, 2);
    /// assert_eq!(&indices.values()[..4], &[0, 1, 2, 3]);
    /// ```
    pub fn from_packed(packed: u64, bits_per_index: u32) -> Self {
        let mut reader = BlockBits::from_u64(packed).reader();
        let mut values = [0u8; 16];
        for value in values.iter_mut() {
            *value = reader.read(bits_per_index) as u8;
        }
        Self { values }
    }

    /// Reads 16 indices from `reader`, narrowing every anchor pixel of the given partition
    /// layout to `bits_per_index - 1` bits.
    ///
    /// # Parameters
    ///
    /// - `reader`: positioned at the first index bit
    /// - `bits_per_index`: width of a regular index
    /// - `partitions`: number of subsets minus one
    /// - `shape`: partition shape, ignored for a single subset
    pub fn read_with_fixups(
        reader: &mut BitReader,
        bits_per_index: u32,
        partitions: usize,
        shape: usize,
    ) -> Self {
        let mut values = [0u8; 16];
        for (pixel, value) in values.iter_mut().enumerate() {
            let width = if is_fixup_offset(partitions, shape, pixel) {
                bits_per_index - 1
            } else {
                bits_per_index
            };
            *value = (reader.read(width) & low_mask(width)) as u8;
        }
        Self { values }
    }

    /// Returns the index of a pixel (0..=15).
    #[inline]
    pub fn get(&self, pixel: usize) -> u8 {
        self.values[pixel]
    }

    /// Returns all 16 indices.
    #[inline]
    pub fn values(&self) -> &[u8; 16] {
        &self.values
    }
}

/// Prints the indices in rows of four, e.g. `0 1 2 3 | 4 5 6 7 | ...`.
///
/// 4-bit indices print as a single hex digit.
impl fmt::Display for BlockIndices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (pixel, value) in self.values.iter().enumerate() {
            write!(f, "{value:X}")?;
            if pixel < 15 {
                f.write_str(if pixel % 4 == 3 { " | " } else { " " })?;
            }
        }
        Ok(())
    }
}
