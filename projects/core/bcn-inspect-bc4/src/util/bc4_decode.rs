//! BC4 decoding implementation, following MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d10/d3d10-graphics-programming-guide-resources-block-compression#bc4>

use crate::{Bc4Block, Bc4BlockKind, Bc4Endpoint, Bc4UBlock};
use bcn_inspect_common::{color_f32::ColorF32, decoded_4x4_block::Decoded4x4Block};

/// Builds the 8 entry palette of a block as normalised floats.
///
/// ```
/// use bcn_inspect_bc4::util::bc4_palette;
/// use bcn_inspect_bc4::Bc4UBlock;
///
/// let block = Bc4UBlock::from_bytes(&[0, 255, 0, 0, 0, 0, 0, 0]);
/// let palette = bc4_palette(&block);
/// assert_eq!(palette[6], 0.0);
/// assert_eq!(palette[7], 1.0);
/// ```
pub fn bc4_palette<E: Bc4Endpoint>(block: &Bc4Block<E>) -> [f32; 8] {
    let e0 = block.endpoint0.normalized();
    let e1 = block.endpoint1.normalized();
    let mut palette = [e0, e1, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];

    match block.kind() {
        Bc4BlockKind::EightValue => {
            for (i, value) in palette[2..].iter_mut().enumerate() {
                let weight = (i + 1) as f32;
                *value = ((7.0 - weight) * e0 + weight * e1) / 7.0;
            }
        }
        Bc4BlockKind::SixValue => {
            for (i, value) in palette[2..6].iter_mut().enumerate() {
                let weight = (i + 1) as f32;
                *value = ((5.0 - weight) * e0 + weight * e1) / 5.0;
            }
            palette[6] = E::RANGE_MIN;
            palette[7] = E::RANGE_MAX;
        }
    }
    palette
}

/// Decodes the 16 normalised values of a block, in pixel order.
pub fn decode_bc4_values<E: Bc4Endpoint>(block: &Bc4Block<E>) -> [f32; 16] {
    let palette = bc4_palette(block);
    let mut values = [0.0f32; 16];
    for (pixel, value) in values.iter_mut().enumerate() {
        *value = palette[((block.indices >> (pixel * 3)) & 0x7) as usize];
    }
    values
}

/// Builds the 8 entry palette of an unsigned block with integer interpolation.
///
/// This is the alpha palette of BC3.
pub fn bc4_unorm8_palette(block: &Bc4UBlock) -> [u8; 8] {
    let a0 = block.endpoint0 as u16;
    let a1 = block.endpoint1 as u16;
    let mut palette = [block.endpoint0, block.endpoint1, 0, 0, 0, 0, 0, 0];

    match block.kind() {
        Bc4BlockKind::EightValue => {
            for (i, value) in palette[2..].iter_mut().enumerate() {
                let weight = i as u16 + 1;
                *value = (((7 - weight) * a0 + weight * a1) / 7) as u8;
            }
        }
        Bc4BlockKind::SixValue => {
            for (i, value) in palette[2..6].iter_mut().enumerate() {
                let weight = i as u16 + 1;
                *value = (((5 - weight) * a0 + weight * a1) / 5) as u8;
            }
            palette[6] = 0;
            palette[7] = 255;
        }
    }
    palette
}

/// Decodes the 16 values of an unsigned block as 8-bit integers, in pixel order.
pub fn decode_bc4_unorm8_values(block: &Bc4UBlock) -> [u8; 16] {
    let palette = bc4_unorm8_palette(block);
    let mut values = [0u8; 16];
    for (pixel, value) in values.iter_mut().enumerate() {
        *value = palette[((block.indices >> (pixel * 3)) & 0x7) as usize];
    }
    values
}

/// Decodes a BC4 block, placing the channel in red: `(r, 0, 0, 1)`.
pub fn decode_bc4_block<E: Bc4Endpoint>(bytes: &[u8; 8]) -> Decoded4x4Block<ColorF32> {
    let values = decode_bc4_values(&Bc4Block::<E>::from_bytes(bytes));
    let mut result = Decoded4x4Block::new(ColorF32::OPAQUE_BLACK);
    for (pixel, value) in result.pixels.iter_mut().zip(values) {
        pixel.r = value;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use crate::Bc4SBlock;

    #[test]
    fn eight_value_palette_interpolates_sevenths() {
        let block = Bc4UBlock::from_bytes(&bc4_bytes(255, 0, [0; 16]));
        let palette = bc4_palette(&block);
        assert_eq!(palette[0], 1.0);
        assert_eq!(palette[1], 0.0);
        for (i, value) in palette[2..].iter().enumerate() {
            let expected = (6 - i) as f32 / 7.0;
            assert!((value - expected).abs() < 1e-6, "index {}", i + 2);
        }
    }

    #[test]
    fn six_value_signed_palette_uses_signed_range() {
        let block = Bc4SBlock::from_bytes(&bc4_bytes(0x00, 0x7F, [0; 16]));
        let palette = bc4_palette(&block);
        assert!((palette[2] - 0.2).abs() < 1e-6);
        assert!((palette[5] - 0.8).abs() < 1e-6);
        assert_eq!(palette[6], -1.0);
        assert_eq!(palette[7], 1.0);
    }

    #[rstest]
    #[case(255, 0, [255, 0, 218, 182, 145, 109, 72, 36])]
    #[case(0, 255, [0, 255, 51, 102, 153, 204, 0, 255])]
    #[case(10, 10, [10, 10, 10, 10, 10, 10, 0, 255])]
    fn integer_palette_matches_reference(
        #[case] a0: u8,
        #[case] a1: u8,
        #[case] expected: [u8; 8],
    ) {
        let block = Bc4UBlock::from_bytes(&bc4_bytes(a0, a1, [0; 16]));
        assert_eq!(bc4_unorm8_palette(&block), expected);
    }

    #[test]
    fn decode_places_value_in_red() {
        let mut indices = [0u8; 16];
        indices[15] = 1;
        let decoded = decode_bc4_block::<u8>(&bc4_bytes(255, 0, indices));
        assert_eq!(decoded.get_pixel(0, 0), ColorF32::new(1.0, 0.0, 0.0, 1.0));
        assert_eq!(decoded.get_pixel(3, 3), ColorF32::new(0.0, 0.0, 0.0, 1.0));
    }

    #[test]
    fn all_zero_block_decodes_to_opaque_black() {
        let decoded = decode_bc4_block::<u8>(&[0; 8]);
        assert!(decoded.has_identical_pixels());
        assert_eq!(decoded.pixels[0], ColorF32::OPAQUE_BLACK);
    }
}
