//! BC7 decoding implementation, following MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d11/bc7-format>

use crate::Bc7Block;
use bcn_inspect_common::color_8888::Color8888;
use bcn_inspect_common::decoded_4x4_block::Decoded4x4Block;
use bcn_inspect_common::error::DecodeError;
use bcn_inspect_common::partition::subset_index;

const WEIGHTS_2: [u16; 4] = [0, 21, 43, 64];
const WEIGHTS_3: [u16; 8] = [0, 9, 18, 27, 37, 46, 55, 64];
const WEIGHTS_4: [u16; 16] = [0, 4, 9, 13, 17, 21, 26, 30, 34, 38, 43, 47, 51, 55, 60, 64];

/// Expands a component of `bits` precision to 8 bits by replicating its high bits.
///
/// ```
/// use bcn_inspect_bc7::util::promote;
///
/// assert_eq!(promote(0b11111, 5), 255);
/// assert_eq!(promote(0b10000, 5), 0b1000_0100);
/// assert_eq!(promote(200, 8), 200);
/// ```
#[inline]
pub fn promote(value: u8, bits: u32) -> u8 {
    if bits >= 8 {
        return value;
    }
    let value = value << (8 - bits);
    value | (value >> bits)
}

#[inline(always)]
fn weight(index: u8, bits: u32) -> u16 {
    match bits {
        2 => WEIGHTS_2[index as usize & 0x3],
        3 => WEIGHTS_3[index as usize & 0x7],
        _ => WEIGHTS_4[index as usize & 0xF],
    }
}

#[inline(always)]
fn interpolate(e0: u8, e1: u8, weight: u16) -> u8 {
    (((64 - weight) * e0 as u16 + weight * e1 as u16 + 32) >> 6) as u8
}

/// Returns the endpoints of a parsed block promoted to 8 bits per component.
/// Colour-only modes get an alpha of 255.
pub fn expand_endpoints(block: &Bc7Block) -> [[u8; 4]; 6] {
    let mode = block.mode;
    let color_bits = mode.color_precision();
    let alpha_bits = mode.alpha_precision();
    let mut expanded = block.reconstructed_endpoints();
    for endpoint in expanded.iter_mut().take(mode.endpoint_count()) {
        for component in endpoint.iter_mut().take(3) {
            *component = promote(*component, color_bits);
        }
        endpoint[3] = if mode.has_alpha() {
            promote(endpoint[3], alpha_bits)
        } else {
            255
        };
    }
    expanded
}

/// Decodes a parsed block to 16 RGBA8 pixels.
pub fn decode_bc7(block: &Bc7Block) -> Decoded4x4Block {
    let mode = block.mode;
    let endpoints = expand_endpoints(block);
    let (color_indices, color_bits) = block.color_indices();
    let (alpha_indices, alpha_bits) = block.alpha_indices();
    let partitions = mode.subsets as usize - 1;

    let mut decoded = Decoded4x4Block::new(Color8888::TRANSPARENT);
    for (pixel, output) in decoded.pixels.iter_mut().enumerate() {
        let subset = if partitions > 0 {
            subset_index(partitions, block.partition as usize, pixel)
        } else {
            0
        };
        let e0 = endpoints[subset * 2];
        let e1 = endpoints[subset * 2 + 1];

        let color_weight = weight(color_indices.get(pixel), color_bits);
        let alpha_weight = weight(alpha_indices.get(pixel), alpha_bits);
        let mut rgba = [
            interpolate(e0[0], e1[0], color_weight),
            interpolate(e0[1], e1[1], color_weight),
            interpolate(e0[2], e1[2], color_weight),
            interpolate(e0[3], e1[3], alpha_weight),
        ];
        if let Some(channel) = block.rotation.channel() {
            rgba.swap(channel, 3);
        }
        *output = Color8888::new(rgba[0], rgba[1], rgba[2], rgba[3]);
    }
    decoded
}

/// Decodes a block to 16 RGBA8 pixels.
///
/// # Errors
///
/// [`DecodeError::ReservedBc7Mode`] when the first byte is zero.
#[inline]
pub fn decode_bc7_block(bytes: &[u8; 16]) -> Result<Decoded4x4Block, DecodeError> {
    Ok(decode_bc7(&Bc7Block::from_bytes(bytes)?))
}
