//! BC3 (DXT4/DXT5) decoding implementation, following MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d10/d3d10-graphics-programming-guide-resources-block-compression#bc3>
//!
//! Uses the 'ideal' rounding/computing method described in the DX9 docs, as opposed to DX10, AMD or Nvidia
//! method.

use crate::Bc3Block;
use bcn_inspect_bc1::{util::decode_bc1_color, Bc1BlockKind};
use bcn_inspect_bc4::util::decode_bc4_unorm8_values;
use bcn_inspect_common::decoded_4x4_block::Decoded4x4Block;

/// Decodes a BC3 block into a structured representation of pixels
///
/// # Example
///
/// ```
/// use bcn_inspect_bc3::util::decode_bc3_block;
///
/// let mut block = [0u8; 16];
/// block[0] = 255; // alpha0, every pixel uses index 0
/// let decoded = decode_bc3_block(&block);
/// assert_eq!(decoded.get_pixel(2, 2).a, 255);
/// ```
#[inline]
pub fn decode_bc3_block(bytes: &[u8; 16]) -> Decoded4x4Block {
    let block = Bc3Block::from_bytes(bytes);

    // BC3 always uses the 4-color palette regardless of the endpoint order
    let mut result = decode_bc1_color(&block.color, Bc1BlockKind::Opaque);
    let alpha = decode_bc4_unorm8_values(&block.alpha);
    for (pixel, value) in result.pixels.iter_mut().zip(alpha) {
        pixel.a = value;
    }
    result
}
