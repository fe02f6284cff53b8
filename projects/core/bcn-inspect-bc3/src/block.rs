use bcn_inspect_bc1::Bc1Block;
use bcn_inspect_bc4::{Bc4BlockKind, Bc4UBlock};
use core::fmt;

/// A parsed 16 byte BC3 block.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bc3Block {
    /// The alpha half, laid out as an unsigned BC4 block.
    pub alpha: Bc4UBlock,
    /// The colour half.
    pub color: Bc1Block,
}

impl Bc3Block {
    /// Parses a block from its 16 bytes.
    ///
    /// ```
    /// use bcn_inspect_bc3::Bc3Block;
    /// use bcn_inspect_bc4::Bc4BlockKind;
    ///
    /// let mut bytes = [0u8; 16];
    /// bytes[0] = 255;
    /// assert_eq!(Bc3Block::from_bytes(&bytes).kind(), Bc4BlockKind::EightValue);
    /// ```
    #[inline]
    pub fn from_bytes(bytes: &[u8; 16]) -> Self {
        let mut alpha = [0u8; 8];
        let mut color = [0u8; 8];
        alpha.copy_from_slice(&bytes[..8]);
        color.copy_from_slice(&bytes[8..]);
        Self {
            alpha: Bc4UBlock::from_bytes(&alpha),
            color: Bc1Block::from_bytes(&color),
        }
    }

    /// Alpha interpolation mode: 8 values when `alpha0 > alpha1`, otherwise 6.
    #[inline]
    pub fn kind(&self) -> Bc4BlockKind {
        self.alpha.kind()
    }
}

impl fmt::Display for Bc3Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.color.write_color_lines(f, "Color - ")?;
        self.alpha.write_lines(f, "Alpha - ", 5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use std::string::ToString;

    #[rstest]
    #[case(1, 0, Bc4BlockKind::EightValue)]
    #[case(0, 0, Bc4BlockKind::SixValue)]
    #[case(0, 1, Bc4BlockKind::SixValue)]
    fn kind_follows_alpha_endpoints(
        #[case] alpha0: u8,
        #[case] alpha1: u8,
        #[case] expected: Bc4BlockKind,
    ) {
        let block = Bc3Block::from_bytes(&bc3_bytes(alpha0, alpha1, 0, 0, 0, 0));
        assert_eq!(block.kind(), expected);
    }

    #[test]
    fn dumps_colour_then_alpha() {
        let block = Bc3Block::from_bytes(&bc3_bytes(255, 0, 0o7777_7777_7777_7777, 0x001F, 0x0000, 0));
        assert_eq!(
            block.to_string(),
            "\tColor - E0: (R: 0.000, G: 0.000, B: 1.000)\n\
             \t        E1: (R: 0.000, G: 0.000, B: 0.000)\n\
             \t     Index: 0 0 0 0 | 0 0 0 0 | 0 0 0 0 | 0 0 0 0\n\
             \tAlpha - E0: 1.000  E1: 0.000 (8)\n\
             \t     Index: 7 7 7 7 | 7 7 7 7 | 7 7 7 7 | 7 7 7 7\n"
        );
    }
}
