use crate::endpoint::Bc4Endpoint;
use bcn_inspect_common::index::BlockIndices;
use core::fmt;
use derive_enum_all_values::AllValues;

/// The two interpolation modes of a BC4 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AllValues)]
pub enum Bc4BlockKind {
    /// `endpoint0 > endpoint1`: 6 interpolated values between the endpoints.
    EightValue,
    /// `endpoint0 <= endpoint1`: 4 interpolated values plus the range minimum and maximum.
    SixValue,
}

impl Bc4BlockKind {
    /// Number of distinct palette entries derived from the endpoints, printed in the dump.
    pub const fn value_count(&self) -> u32 {
        match self {
            Self::EightValue => 8,
            Self::SixValue => 6,
        }
    }

    /// Offset of this kind within a histogram channel pair.
    pub const fn bucket(&self) -> usize {
        match self {
            Self::EightValue => 0,
            Self::SixValue => 1,
        }
    }
}

/// A parsed 8 byte BC4 block.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bc4Block<E: Bc4Endpoint> {
    /// First endpoint.
    pub endpoint0: E,
    /// Second endpoint.
    pub endpoint1: E,
    /// Sixteen 3-bit indices (48 bits), pixel 0 in the lowest bits.
    pub indices: u64,
}

/// BC4 block with unsigned endpoints (`BC4_UNORM`, BC3 alpha).
pub type Bc4UBlock = Bc4Block<u8>;

/// BC4 block with signed endpoints (`BC4_SNORM`).
pub type Bc4SBlock = Bc4Block<i8>;

impl<E: Bc4Endpoint> Bc4Block<E> {
    /// Parses a block from its 8 bytes.
    ///
    /// ```
    /// use bcn_inspect_bc4::{Bc4BlockKind, Bc4SBlock, Bc4UBlock};
    ///
    /// let bytes = [0x80, 0x7F, 0, 0, 0, 0, 0, 0];
    /// // 128 > 127 unsigned, but -128 < 127 signed
    /// assert_eq!(Bc4UBlock::from_bytes(&bytes).kind(), Bc4BlockKind::EightValue);
    /// assert_eq!(Bc4SBlock::from_bytes(&bytes).kind(), Bc4BlockKind::SixValue);
    /// ```
    #[inline]
    pub fn from_bytes(bytes: &[u8; 8]) -> Self {
        Self {
            endpoint0: E::from_byte(bytes[0]),
            endpoint1: E::from_byte(bytes[1]),
            indices: u64::from_le_bytes([
                bytes[2], bytes[3], bytes[4], bytes[5], bytes[6], bytes[7], 0, 0,
            ]),
        }
    }

    /// Returns the interpolation mode, comparing endpoints with the signedness of `E`.
    #[inline]
    pub fn kind(&self) -> Bc4BlockKind {
        if self.endpoint0 > self.endpoint1 {
            Bc4BlockKind::EightValue
        } else {
            Bc4BlockKind::SixValue
        }
    }

    /// Returns the unpacked 3-bit indices.
    #[inline]
    pub fn index_values(&self) -> BlockIndices {
        BlockIndices::from_packed(self.indices, 3)
    }

    /// Writes the dump lines for this block.
    ///
    /// # Parameters
    ///
    /// - `prefix`: text between the tab and `E0:`
    /// - `index_pad`: spaces between the tab and `Index:`
    pub fn write_lines(
        &self,
        f: &mut fmt::Formatter<'_>,
        prefix: &str,
        index_pad: usize,
    ) -> fmt::Result {
        writeln!(
            f,
            "\t{prefix}E0: {:.3}  E1: {:.3} ({})",
            self.endpoint0.normalized(),
            self.endpoint1.normalized(),
            self.kind().value_count()
        )?;
        writeln!(f, "\t{:index_pad$}Index: {}", "", self.index_values())
    }
}

impl<E: Bc4Endpoint> fmt::Display for Bc4Block<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_lines(f, "   ", 0)
    }
}
