//! # Bit Fields
//!
//! Helpers for reading fixed-width, non byte aligned fields out of a compressed block.
//!
//! All BCn blocks are little endian bit streams: bit 0 is the least significant bit of the
//! first byte. A 64-bit block (BC1, BC4) and a 128-bit block (everything else) are both held
//! in a [`u128`] so that a single set of routines covers every format.
//!
//! ## Random Access
//!
//! [`BlockBits::field`] extracts `width` bits starting at `offset`. Fields which the standard
//! scatters over several ranges are put back together with [`BlockBits::assemble`], which ORs
//! each [`SubField`] into its destination bit position.
//!
//! ```
//! use bcn_inspect_common::bits::{BlockBits, SubField};
//!
//! let bits = BlockBits::from_u64(0b1011_0110);
//! assert_eq!(bits.field(1, 3), 0b011);
//!
//! // Bits [4..6) land at 0..2, bit 7 lands at 2.
//! let value = bits.assemble(&[SubField::new(4, 2, 0), SubField::new(7, 1, 2)]);
//! assert_eq!(value, 0b111);
//! ```
//!
//! ## Sequential Access
//!
//! Most layouts are easier to express as "read the next N bits", which is what [`BitReader`]
//! does. [`BitWriter`] is the inverse and is used to build synthetic blocks.

/// A compressed block viewed as a little endian integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BlockBits(u128);

/// One contiguous piece of a field that is split over several ranges of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubField {
    /// Offset of the first bit of this piece within the block.
    pub offset: u8,
    /// Number of bits in this piece.
    pub width: u8,
    /// Bit position of this piece within the reassembled value.
    pub shift: u8,
}

impl SubField {
    /// Creates a new [`SubField`].
    pub const fn new(offset: u8, width: u8, shift: u8) -> Self {
        Self {
            offset,
            width,
            shift,
        }
    }
}

/// Returns a mask with the lowest `width` bits set. `width` may be 0..=64.
#[inline(always)]
pub const fn low_mask(width: u32) -> u64 {
    if width >= 64 {
        u64::MAX
    } else {
        (1u64 << width) - 1
    }
}

impl BlockBits {
    /// Reads a 128-bit block from its 16 bytes.
    #[inline]
    pub const fn from_bytes(bytes: &[u8; 16]) -> Self {
        Self(u128::from_le_bytes(*bytes))
    }

    /// Reads a 64-bit block from its 8 bytes.
    #[inline]
    pub const fn from_bytes_64(bytes: &[u8; 8]) -> Self {
        Self(u64::from_le_bytes(*bytes) as u128)
    }

    /// Wraps an already assembled 64-bit block.
    #[inline]
    pub const fn from_u64(value: u64) -> Self {
        Self(value as u128)
    }

    /// Returns the raw 128-bit value.
    #[inline]
    pub const fn raw(&self) -> u128 {
        self.0
    }

    /// Extracts `width` bits (at most 64) starting at bit `offset`.
    ///
    /// Bits past the end of the block read as zero.
    #[inline]
    pub const fn field(&self, offset: u32, width: u32) -> u64 {
        debug_assert!(width <= 64);
        if offset >= 128 {
            return 0;
        }
        ((self.0 >> offset) as u64) & low_mask(width)
    }

    /// Returns a single bit.
    #[inline]
    pub const fn bit(&self, offset: u32) -> bool {
        self.field(offset, 1) != 0
    }

    /// Reassembles a field which is stored in several disjoint ranges.
    pub fn assemble(&self, parts: &[SubField]) -> u64 {
        parts.iter().fold(0u64, |acc, part| {
            acc | (self.field(part.offset as u32, part.width as u32) << part.shift)
        })
    }

    /// Creates a sequential reader positioned at bit 0.
    #[inline]
    pub const fn reader(&self) -> BitReader {
        BitReader {
            state: self.0,
            position: 0,
        }
    }
}

/// Sign extends the two's complement value held in the low `bits` bits of `value`.
///
/// Bit `bits - 1` is replicated into every higher bit. Values of 32 bits or more are
/// returned unchanged.
///
/// ```
/// use bcn_inspect_common::bits::sign_extend;
///
/// assert_eq!(sign_extend(0b10000, 5), -16);
/// assert_eq!(sign_extend(0b01111, 5), 15);
/// ```
#[inline]
pub const fn sign_extend(value: i32, bits: u32) -> i32 {
    if bits == 0 || bits >= 32 {
        return value;
    }
    let shift = 32 - bits;
    (value << shift) >> shift
}

/// Reads consecutive fields out of a block, least significant bit first.
#[derive(Debug, Clone, Copy)]
pub struct BitReader {
    state: u128,
    position: u32,
}

impl BitReader {
    /// Creates a reader over a 16 byte block.
    #[inline]
    pub const fn new(bytes: &[u8; 16]) -> Self {
        BlockBits::from_bytes(bytes).reader()
    }

    /// Number of bits consumed so far.
    #[inline]
    pub const fn position(&self) -> u32 {
        self.position
    }

    /// Number of bits left before the end of a 128-bit block.
    #[inline]
    pub const fn remaining(&self) -> u32 {
        128u32.saturating_sub(self.position)
    }

    /// Skips `count` bits.
    #[inline]
    pub fn skip(&mut self, count: u32) {
        self.position += count;
    }

    /// Reads the next `count` bits (at most 64).
    #[inline]
    pub fn read(&mut self, count: u32) -> u64 {
        let value = BlockBits(self.state).field(self.position, count);
        self.position += count;
        value
    }

    /// Reads a single bit.
    #[inline]
    pub fn read_bit(&mut self) -> bool {
        self.read(1) != 0
    }

    /// Reads the next `count` bits, with the first bit read becoming the most significant.
    ///
    /// BC6H stores the high endpoint bits of modes 12 to 14 in this order.
    #[inline]
    pub fn read_reversed(&mut self, count: u32) -> u64 {
        let value = self.read(count);
        if count < 2 {
            value
        } else {
            value.reverse_bits() >> (64 - count)
        }
    }
}

/// Builds a block by appending fields, least significant bit first.
#[derive(Debug, Clone, Copy, Default)]
pub struct BitWriter {
    state: u128,
    position: u32,
}

impl BitWriter {
    /// Creates an empty writer.
    pub const fn new() -> Self {
        Self {
            state: 0,
            position: 0,
        }
    }

    /// Number of bits written so far.
    pub const fn position(&self) -> u32 {
        self.position
    }

    /// Appends the low `count` bits of `value`. Excess high bits are discarded.
    pub fn write(&mut self, value: u64, count: u32) -> &mut Self {
        debug_assert!(self.position + count <= 128);
        if count > 0 && self.position < 128 {
            self.state |= ((value & low_mask(count)) as u128) << self.position;
        }
        self.position += count;
        self
    }

    /// Appends `count` bits so that [`BitReader::read_reversed`] returns `value`.
    pub fn write_reversed(&mut self, value: u64, count: u32) -> &mut Self {
        let reversed = if count < 2 {
            value
        } else {
            (value & low_mask(count)).reverse_bits() >> (64 - count)
        };
        self.write(reversed, count)
    }

    /// Returns the block as 16 little endian bytes.
    pub const fn to_bytes(&self) -> [u8; 16] {
        self.state.to_le_bytes()
    }

    /// Returns the low 8 bytes of the block.
    pub const fn to_bytes_64(&self) -> [u8; 8] {
        (self.state as u64).to_le_bytes()
    }
}
