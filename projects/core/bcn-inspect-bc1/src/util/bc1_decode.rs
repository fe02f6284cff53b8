//! BC1 (DXT1) decoding implementation, following MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d10/d3d10-graphics-programming-guide-resources-block-compression#bc1>
//!
//! Uses the 'ideal' rounding/computing method described in the DX9 docs, as opposed to DX10, AMD or Nvidia
//! method.

use crate::{Bc1Block, Bc1BlockKind};
use bcn_inspect_common::{color_8888::Color8888, decoded_4x4_block::Decoded4x4Block};

/// Builds the 4 entry colour palette of a block.
///
/// # Parameters
///
/// - `block`: The parsed block
/// - `kind`: Which palette to build. BC2 and BC3 always pass [`Bc1BlockKind::Opaque`].
pub fn bc1_palette(block: &Bc1Block, kind: Bc1BlockKind) -> [Color8888; 4] {
    let c0 = block.color0.to_color_8888();
    let c1 = block.color1.to_color_8888();
    let (r0, g0, b0) = (c0.r as u32, c0.g as u32, c0.b as u32);
    let (r1, g1, b1) = (c1.r as u32, c1.g as u32, c1.b as u32);

    match kind {
        Bc1BlockKind::Opaque => [
            c0,
            c1,
            Color8888::new(
                ((2 * r0 + r1) / 3) as u8,
                ((2 * g0 + g1) / 3) as u8,
                ((2 * b0 + b1) / 3) as u8,
                255,
            ),
            Color8888::new(
                ((r0 + 2 * r1) / 3) as u8,
                ((g0 + 2 * g1) / 3) as u8,
                ((b0 + 2 * b1) / 3) as u8,
                255,
            ),
        ],
        Bc1BlockKind::Transparent => [
            c0,
            c1,
            Color8888::new(
                ((r0 + r1) / 2) as u8,
                ((g0 + g1) / 2) as u8,
                ((b0 + b1) / 2) as u8,
                255,
            ),
            Color8888::TRANSPARENT,
        ],
    }
}

/// Decodes the colour of a block using the palette of `kind`.
pub fn decode_bc1_color(block: &Bc1Block, kind: Bc1BlockKind) -> Decoded4x4Block {
    let palette = bc1_palette(block, kind);
    let mut result = Decoded4x4Block::new(Color8888::TRANSPARENT);
    for (pixel, value) in result.pixels.iter_mut().enumerate() {
        *value = palette[((block.indices >> (pixel * 2)) & 0x3) as usize];
    }
    result
}

/// Decodes a BC1 block into a structured representation of pixels
///
/// # Example
///
/// ```
/// use bcn_inspect_bc1::util::decode_bc1_block;
///
/// // Red and blue endpoints, every pixel uses index 0
/// let block = [0x00, 0xF8, 0x1F, 0x00, 0, 0, 0, 0];
/// let decoded = decode_bc1_block(&block);
/// assert_eq!(decoded.get_pixel(3, 3).r, 255);
/// ```
#[inline]
pub fn decode_bc1_block(bytes: &[u8; 8]) -> Decoded4x4Block {
    let block = Bc1Block::from_bytes(bytes);
    decode_bc1_color(&block, block.kind())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[test]
    fn opaque_palette_interpolates_thirds() {
        let block = Bc1Block::from_bytes(&bc1_bytes(0xFFFF, 0x0000, 0));
        let palette = bc1_palette(&block, block.kind());
        assert_eq!(palette[0], Color8888::new(255, 255, 255, 255));
        assert_eq!(palette[1], Color8888::new(0, 0, 0, 255));
        assert_eq!(palette[2], Color8888::new(170, 170, 170, 255));
        assert_eq!(palette[3], Color8888::new(85, 85, 85, 255));
    }

    #[test]
    fn transparent_palette_has_midpoint_and_transparent_black() {
        let block = Bc1Block::from_bytes(&bc1_bytes(0x0000, 0xFFFF, 0));
        let palette = bc1_palette(&block, block.kind());
        assert_eq!(palette[2], Color8888::new(127, 127, 127, 255));
        assert_eq!(palette[3], Color8888::new(0, 0, 0, 0));
    }

    #[rstest]
    #[case(0b00, Color8888::new(0, 0, 0, 255))]
    #[case(0b01, Color8888::new(255, 255, 255, 255))]
    #[case(0b11, Color8888::new(0, 0, 0, 0))]
    fn pixels_use_their_own_index(#[case] index: u32, #[case] expected: Color8888) {
        // Index only pixel 5
        let indices = index << 10;
        let decoded = decode_bc1_block(&bc1_bytes(0x0000, 0xFFFF, indices));
        assert_eq!(decoded.get_pixel(1, 1), expected);
        assert_eq!(decoded.get_pixel(0, 0), Color8888::new(0, 0, 0, 255));
    }

    #[test]
    fn forced_opaque_palette_ignores_endpoint_order() {
        let block = Bc1Block::from_bytes(&bc1_bytes(0x0000, 0xFFFF, 0xFFFF_FFFF));
        let decoded = decode_bc1_color(&block, Bc1BlockKind::Opaque);
        assert!(decoded.has_identical_pixels());
        assert_eq!(decoded.pixels[0], Color8888::new(170, 170, 170, 255));
    }
}
