use bcn_inspect_common::color_565::Color565;
use bcn_inspect_common::index::BlockIndices;
use core::fmt;
use derive_enum_all_values::AllValues;

/// The two kinds of BC1 block, distinguished by the order of the endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AllValues)]
pub enum Bc1BlockKind {
    /// `color0 > color1`: 4 opaque colours.
    Opaque,
    /// `color0 <= color1`: 3 colours plus transparent black.
    Transparent,
}

impl Bc1BlockKind {
    /// Histogram bucket this kind is counted in.
    pub const fn bucket(&self) -> usize {
        match self {
            Self::Opaque => 0,
            Self::Transparent => 1,
        }
    }

    /// Label used when printing a histogram, e.g. `4 color blocks`.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Opaque => "4 color blocks",
            Self::Transparent => "3 color blocks",
        }
    }
}

/// A parsed 8 byte BC1 block.
///
/// The same layout forms the colour half of BC2 and BC3 blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bc1Block {
    /// First endpoint.
    pub color0: Color565,
    /// Second endpoint.
    pub color1: Color565,
    /// Sixteen 2-bit indices, pixel 0 in the lowest bits.
    pub indices: u32,
}

impl Bc1Block {
    /// Parses a block from its 8 bytes.
    ///
    /// ```
    /// use bcn_inspect_bc1::{Bc1Block, Bc1BlockKind};
    ///
    /// let block = Bc1Block::from_bytes(&[0x00, 0xF8, 0x1F, 0x00, 0, 0, 0, 0]);
    /// assert_eq!(block.color0.raw_value(), 0xF800);
    /// assert_eq!(block.kind(), Bc1BlockKind::Opaque);
    /// ```
    #[inline]
    pub const fn from_bytes(bytes: &[u8; 8]) -> Self {
        Self {
            color0: Color565::from_raw(u16::from_le_bytes([bytes[0], bytes[1]])),
            color1: Color565::from_raw(u16::from_le_bytes([bytes[2], bytes[3]])),
            indices: u32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
        }
    }

    /// Returns the block kind. Equal endpoints make a transparent block.
    #[inline]
    pub const fn kind(&self) -> Bc1BlockKind {
        if self.color0.greater_than(&self.color1) {
            Bc1BlockKind::Opaque
        } else {
            Bc1BlockKind::Transparent
        }
    }

    /// Returns the unpacked 2-bit indices.
    #[inline]
    pub fn index_values(&self) -> BlockIndices {
        BlockIndices::from_packed(self.indices as u64, 2)
    }

    /// Writes the endpoint and index lines of the dump with `prefix` in front of `E0`.
    ///
    /// The `E1` and `Index` labels are right aligned under `E0`.
    pub fn write_color_lines(&self, f: &mut fmt::Formatter<'_>, prefix: &str) -> fmt::Result {
        let pad = prefix.len();
        writeln!(f, "\t{prefix}E0: {}", self.color0)?;
        writeln!(f, "\t{:pad$}E1: {}", "", self.color1)?;
        writeln!(
            f,
            "\t{:width$}Index: {}",
            "",
            self.index_values(),
            width = pad.saturating_sub(3)
        )
    }
}

impl fmt::Display for Bc1Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.kind() {
            Bc1BlockKind::Transparent => "Transparent - ",
            Bc1BlockKind::Opaque => "     Opaque - ",
        };
        self.write_color_lines(f, prefix)
    }
}
