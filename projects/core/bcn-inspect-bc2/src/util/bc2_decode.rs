//! BC2 (DXT2/DXT3) decoding implementation, following MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d10/d3d10-graphics-programming-guide-resources-block-compression#bc2>
//!
//! Uses the 'ideal' rounding/computing method described in the DX9 docs, as opposed to DX10, AMD or Nvidia
//! method.

use crate::Bc2Block;
use bcn_inspect_bc1::{util::decode_bc1_color, Bc1BlockKind};
use bcn_inspect_common::decoded_4x4_block::Decoded4x4Block;

/// Decodes a BC2 block into a structured representation of pixels
///
/// # Example
///
/// ```
/// use bcn_inspect_bc2::util::decode_bc2_block;
///
/// let mut block = [0u8; 16];
/// block[0] = 0x0F; // pixel 0 fully opaque, pixel 1 fully transparent
/// let decoded = decode_bc2_block(&block);
/// assert_eq!(decoded.get_pixel(0, 0).a, 255);
/// assert_eq!(decoded.get_pixel(1, 0).a, 0);
/// ```
#[inline]
pub fn decode_bc2_block(bytes: &[u8; 16]) -> Decoded4x4Block {
    let block = Bc2Block::from_bytes(bytes);

    // BC2 always uses the 4-color palette regardless of the endpoint order
    let mut result = decode_bc1_color(&block.color, Bc1BlockKind::Opaque);
    for (pixel, value) in result.pixels.iter_mut().enumerate() {
        // Scale 4-bit alpha (0-15) to 8-bit (0-255)
        value.a = ((block.alpha >> (pixel * 4)) & 0xF) as u8 * 17;
    }
    result
}
