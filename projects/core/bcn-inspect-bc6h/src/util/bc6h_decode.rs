//! BC6H decoding implementation, following MSDN
//! <https://learn.microsoft.com/en-us/windows/win32/direct3d11/bc6h-format>

use crate::{Bc6hBlock, Bc6hVariant};
use bcn_inspect_common::bits::sign_extend;
use bcn_inspect_common::color_f32::ColorF32;
use bcn_inspect_common::decoded_4x4_block::Decoded4x4Block;
use bcn_inspect_common::error::DecodeError;
use bcn_inspect_common::partition::subset_index;
use half::f16;

const WEIGHTS_3: [i32; 8] = [0, 9, 18, 27, 37, 46, 55, 64];
const WEIGHTS_4: [i32; 16] = [0, 4, 9, 13, 17, 21, 26, 30, 34, 38, 43, 47, 51, 55, 60, 64];

/// Resolves the endpoints of a block to full precision integers: sign extension, then the
/// delta transform for transformed modes.
pub fn resolve_endpoints(block: &Bc6hBlock, variant: Bc6hVariant) -> [[i32; 3]; 4] {
    let mode = block.mode;
    let signed = variant.is_signed();
    let base_bits = mode.endpoint_bits as u32;
    let mask = (1i32 << base_bits) - 1;
    let count = mode.subsets() * 2;

    let mut endpoints = [[0i32; 3]; 4];
    for channel in 0..3 {
        let base = block.endpoints[0][channel] as i32;
        endpoints[0][channel] = if signed {
            sign_extend(base, base_bits)
        } else {
            base
        };

        for endpoint in 1..count {
            let mut value = block.endpoints[endpoint][channel] as i32;
            if signed || mode.is_transformed() {
                value = sign_extend(value, mode.delta_bits[channel] as u32);
            }
            if mode.is_transformed() {
                value = (endpoints[0][channel] + value) & mask;
                if signed {
                    value = sign_extend(value, base_bits);
                }
            }
            endpoints[endpoint][channel] = value;
        }
    }
    endpoints
}

/// Expands an endpoint component of `bits` precision to the 16-bit interpolation range.
///
/// ```
/// use bcn_inspect_bc6h::util::unquantize;
/// use bcn_inspect_bc6h::Bc6hVariant;
///
/// assert_eq!(unquantize(0, 10, Bc6hVariant::Uf16), 0);
/// assert_eq!(unquantize(1023, 10, Bc6hVariant::Uf16), 0xFFFF);
/// assert_eq!(unquantize(-512, 10, Bc6hVariant::Sf16), -0x7FFF);
/// ```
pub fn unquantize(value: i32, bits: u32, variant: Bc6hVariant) -> i32 {
    match variant {
        Bc6hVariant::Uf16 => {
            if bits >= 15 || value == 0 {
                value
            } else if value == (1 << bits) - 1 {
                0xFFFF
            } else {
                ((value << 16) + 0x8000) >> bits
            }
        }
        Bc6hVariant::Sf16 => {
            if bits >= 16 {
                return value;
            }
            let magnitude = value.abs();
            let expanded = if magnitude == 0 {
                0
            } else if magnitude >= (1 << (bits - 1)) - 1 {
                0x7FFF
            } else {
                ((magnitude << 15) + 0x4000) >> (bits - 1)
            };
            if value < 0 {
                -expanded
            } else {
                expanded
            }
        }
    }
}

/// Scales an interpolated value into the bit pattern of a half float.
pub fn finish_unquantize(value: i32, variant: Bc6hVariant) -> u16 {
    match variant {
        Bc6hVariant::Uf16 => ((value * 31) >> 6) as u16,
        Bc6hVariant::Sf16 => {
            if value < 0 {
                0x8000 | (((-value) * 31) >> 5) as u16
            } else {
                ((value * 31) >> 5) as u16
            }
        }
    }
}

#[inline(always)]
fn interpolate(a: i32, b: i32, weight: i32) -> i32 {
    (a * (64 - weight) + b * weight + 32) >> 6
}

/// Decodes a block to 16 RGB half float bit patterns, in pixel order.
///
/// # Errors
///
/// [`DecodeError::ReservedBc6hMode`] when the block uses a reserved mode.
pub fn decode_bc6h_block_f16(
    bytes: &[u8; 16],
    variant: Bc6hVariant,
) -> Result<[[u16; 3]; 16], DecodeError> {
    let block = Bc6hBlock::from_bytes(bytes)?;
    let mode = block.mode;
    let bits = mode.endpoint_bits as u32;

    let mut endpoints = resolve_endpoints(&block, variant);
    for components in endpoints.iter_mut().take(mode.subsets() * 2) {
        for value in components.iter_mut() {
            *value = unquantize(*value, bits, variant);
        }
    }

    let weights: &[i32] = if mode.index_bits() == 3 {
        &WEIGHTS_3
    } else {
        &WEIGHTS_4
    };

    let mut pixels = [[0u16; 3]; 16];
    for (pixel, output) in pixels.iter_mut().enumerate() {
        let subset = if mode.subsets() == 2 {
            subset_index(1, block.shape as usize, pixel)
        } else {
            0
        };
        let weight = weights[block.indices.get(pixel) as usize];
        let low = endpoints[subset * 2];
        let high = endpoints[subset * 2 + 1];
        for channel in 0..3 {
            output[channel] =
                finish_unquantize(interpolate(low[channel], high[channel], weight), variant);
        }
    }
    Ok(pixels)
}

/// Decodes a block to 16 RGBA floats, with alpha 1.0.
///
/// # Errors
///
/// [`DecodeError::ReservedBc6hMode`] when the block uses a reserved mode.
pub fn decode_bc6h_block(
    bytes: &[u8; 16],
    variant: Bc6hVariant,
) -> Result<Decoded4x4Block<ColorF32>, DecodeError> {
    let halves = decode_bc6h_block_f16(bytes, variant)?;
    let mut decoded = Decoded4x4Block::new(ColorF32::OPAQUE_BLACK);
    for (pixel, [r, g, b]) in decoded.pixels.iter_mut().zip(halves) {
        *pixel = ColorF32::new(
            f16::from_bits(r).to_f32(),
            f16::from_bits(g).to_f32(),
            f16::from_bits(b).to_f32(),
            1.0,
        );
    }
    Ok(decoded)
}
