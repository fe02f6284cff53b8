use bcn_inspect_bc1::Bc1Block;
use bcn_inspect_common::index::BlockIndices;
use core::fmt;

/// A parsed 16 byte BC2 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bc2Block {
    /// Sixteen 4-bit alpha values, pixel 0 in the lowest bits.
    pub alpha: u64,
    /// The colour half.
    pub color: Bc1Block,
}

impl Bc2Block {
    /// Parses a block from its 16 bytes.
    #[inline]
    pub fn from_bytes(bytes: &[u8; 16]) -> Self {
        let mut alpha = [0u8; 8];
        let mut color = [0u8; 8];
        alpha.copy_from_slice(&bytes[..8]);
        color.copy_from_slice(&bytes[8..]);
        Self {
            alpha: u64::from_le_bytes(alpha),
            color: Bc1Block::from_bytes(&color),
        }
    }

    /// Returns the unpacked 4-bit alpha values.
    #[inline]
    pub fn alpha_values(&self) -> BlockIndices {
        BlockIndices::from_packed(self.alpha, 4)
    }
}

impl fmt::Display for Bc2Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.color.write_color_lines(f, "Color - ")?;
        writeln!(f, "\tAlpha - {}", self.alpha_values())
    }
}
