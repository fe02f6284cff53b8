//! Conversion between stored formats and [`FloatImage`].
//!
//! Compressed formats are decoded block by block; uncompressed formats pixel by pixel.
//! sRGB formats are linearised on the way in and re-encoded on the way out. Alpha is never
//! gamma corrected.

use crate::error::{InspectError, InspectResult};
use crate::float_image::FloatImage;
use crate::owned_image::OwnedImage;
use bcn_inspect_bc1::util::decode_bc1_block;
use bcn_inspect_bc2::util::decode_bc2_block;
use bcn_inspect_bc3::util::decode_bc3_block;
use bcn_inspect_bc4::util::{decode_bc4_block, decode_bc5_block};
use bcn_inspect_bc6h::util::decode_bc6h_block;
use bcn_inspect_bc6h::Bc6hVariant;
use bcn_inspect_bc7::util::decode_bc7_block;
use bcn_inspect_common::color_f32::ColorF32;
use bcn_inspect_common::decoded_4x4_block::Decoded4x4Block;
use bcn_inspect_common::format::TextureFormat;
use bcn_inspect_common::image::Image;
use half::f16;
use tracing::debug;

/// Checks that `image` has data and that its buffer covers every row.
pub(crate) fn validate(image: &Image) -> InspectResult<()> {
    if image.is_null() {
        return Err(InspectError::NullBuffer);
    }
    let needed = image.required_len();
    if image.pixels.len() < needed {
        return Err(InspectError::BufferTooSmall {
            needed,
            actual: image.pixels.len(),
        });
    }
    Ok(())
}

/// Extracts a fixed size block from the front of `bytes`.
pub(crate) fn block_array<const N: usize>(bytes: &[u8]) -> InspectResult<&[u8; N]> {
    bytes
        .get(..N)
        .and_then(|head| head.try_into().ok())
        .ok_or(InspectError::BufferTooSmall {
            needed: N,
            actual: bytes.len(),
        })
}

/// Decodes one compressed block of `format` to 16 RGBA floats, without sRGB conversion.
///
/// # Errors
///
/// - [`InspectError::UnsupportedFormat`] if `format` is not block compressed.
/// - [`InspectError::BufferTooSmall`] if `bytes` is shorter than one block.
/// - [`InspectError::ReservedMode`] for BC6H and BC7 blocks in a reserved mode.
///
/// ```
/// use bcn_inspect_api::decode_block;
/// use bcn_inspect_common::format::TextureFormat;
///
/// let decoded = decode_block(TextureFormat::BC4_UNORM, &[255, 0, 0, 0, 0, 0, 0, 0]).unwrap();
/// assert_eq!(decoded.pixels[0].r, 1.0);
/// assert_eq!(decoded.pixels[0].a, 1.0);
/// ```
pub fn decode_block(format: TextureFormat, bytes: &[u8]) -> InspectResult<Decoded4x4Block<ColorF32>> {
    use TextureFormat::*;
    Ok(match format {
        BC1_UNORM | BC1_UNORM_SRGB => decode_bc1_block(block_array(bytes)?).to_f32(),
        BC2_UNORM | BC2_UNORM_SRGB => decode_bc2_block(block_array(bytes)?).to_f32(),
        BC3_UNORM | BC3_UNORM_SRGB => decode_bc3_block(block_array(bytes)?).to_f32(),
        BC4_UNORM => decode_bc4_block::<u8>(block_array(bytes)?),
        BC4_SNORM => decode_bc4_block::<i8>(block_array(bytes)?),
        BC5_UNORM => decode_bc5_block::<u8>(block_array(bytes)?),
        BC5_SNORM => decode_bc5_block::<i8>(block_array(bytes)?),
        BC6H_UF16 => decode_bc6h_block(block_array(bytes)?, Bc6hVariant::Uf16)?,
        BC6H_SF16 => decode_bc6h_block(block_array(bytes)?, Bc6hVariant::Sf16)?,
        BC7_UNORM | BC7_UNORM_SRGB => decode_bc7_block(block_array(bytes)?)?.to_f32(),
        _ => return Err(InspectError::UnsupportedFormat(format)),
    })
}

/// Converts any supported image to linear RGBA `f32`.
///
/// Missing channels are filled with 0 (colour) or 1 (alpha). Pixels of partial edge blocks
/// that lie outside the image are discarded.
///
/// # Errors
///
/// - [`InspectError::NullBuffer`] if the image has dimensions but no data.
/// - [`InspectError::BufferTooSmall`] if the buffer does not cover all rows, or a row is
///   shorter than the pixels it must hold.
/// - [`InspectError::ReservedMode`] if a BC6H or BC7 block uses a reserved mode.
pub fn to_float_image(image: &Image) -> InspectResult<FloatImage> {
    debug!(
        format = %image.format,
        width = image.width,
        height = image.height,
        "converting to float"
    );
    validate(image)?;
    let row_len = image.format.default_row_pitch(image.width);
    if image.row_pitch < row_len {
        return Err(row_too_short(image, row_len));
    }

    let mut output = FloatImage::new(image.width, image.height, [0.0, 0.0, 0.0, 1.0]);
    match (image.format.block_size(), image.format.bytes_per_pixel()) {
        (Some(block_size), _) => decode_blocks(image, block_size, &mut output)?,
        (None, Some(pixel_size)) => decode_pixels(image, pixel_size, &mut output)?,
        (None, None) => return Err(InspectError::UnsupportedFormat(image.format)),
    }

    if image.format.is_srgb() {
        for pixel in output.pixels.iter_mut() {
            for channel in pixel.iter_mut().take(3) {
                *channel = srgb_to_linear(*channel);
            }
        }
    }
    Ok(output)
}

fn row_too_short(image: &Image, row_len: usize) -> InspectError {
    InspectError::BufferTooSmall {
        needed: image.format.row_count(image.height).saturating_mul(row_len),
        actual: image.pixels.len(),
    }
}

fn decode_blocks(image: &Image, block_size: usize, output: &mut FloatImage) -> InspectResult<()> {
    let width = image.width as usize;
    let height = image.height as usize;
    let blocks_per_row = width.div_ceil(4);

    for block_y in 0..image.format.row_count(image.height) {
        let row = image
            .row(block_y)
            .ok_or_else(|| row_too_short(image, image.row_pitch))?;
        for (block_x, bytes) in row.chunks_exact(block_size).take(blocks_per_row).enumerate() {
            let decoded = decode_block(image.format, bytes)?;
            for py in 0..4 {
                let y = block_y * 4 + py;
                if y >= height {
                    break;
                }
                for px in 0..4 {
                    let x = block_x * 4 + px;
                    if x >= width {
                        break;
                    }
                    output.pixels[y * width + x] = decoded.get_pixel(px, py).to_array();
                }
            }
        }
    }
    Ok(())
}

fn decode_pixels(image: &Image, pixel_size: usize, output: &mut FloatImage) -> InspectResult<()> {
    let width = image.width as usize;
    let row_len = width * pixel_size;

    for (y, out_row) in output.pixels.chunks_exact_mut(width.max(1)).enumerate() {
        let row = image
            .row(y)
            .ok_or_else(|| row_too_short(image, image.row_pitch))?;
        for (pixel, bytes) in out_row.iter_mut().zip(row[..row_len].chunks_exact(pixel_size)) {
            *pixel = decode_pixel(image.format, bytes);
        }
    }
    Ok(())
}

#[inline(always)]
fn unorm8(value: u8) -> f32 {
    value as f32 / 255.0
}

#[inline(always)]
fn u16_at(bytes: &[u8], index: usize) -> u16 {
    u16::from_le_bytes([bytes[index * 2], bytes[index * 2 + 1]])
}

#[inline(always)]
fn f32_at(bytes: &[u8], index: usize) -> f32 {
    let i = index * 4;
    f32::from_le_bytes([bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]])
}

/// `bytes` holds exactly one pixel of an uncompressed `format`.
fn decode_pixel(format: TextureFormat, bytes: &[u8]) -> [f32; 4] {
    use TextureFormat::*;
    match format {
        R8_UNORM => [unorm8(bytes[0]), 0.0, 0.0, 1.0],
        R8G8_UNORM => [unorm8(bytes[0]), unorm8(bytes[1]), 0.0, 1.0],
        B8G8R8A8_UNORM => [
            unorm8(bytes[2]),
            unorm8(bytes[1]),
            unorm8(bytes[0]),
            unorm8(bytes[3]),
        ],
        R16G16B16A16_UNORM => {
            core::array::from_fn(|channel| u16_at(bytes, channel) as f32 / 65535.0)
        }
        R16G16B16A16_FLOAT => {
            core::array::from_fn(|channel| f16::from_bits(u16_at(bytes, channel)).to_f32())
        }
        R32_FLOAT => [f32_at(bytes, 0), 0.0, 0.0, 1.0],
        R32G32B32A32_FLOAT => core::array::from_fn(|channel| f32_at(bytes, channel)),
        // R8G8B8A8_UNORM and R8G8B8A8_UNORM_SRGB
        _ => core::array::from_fn(|channel| unorm8(bytes[channel])),
    }
}

/// Encodes a float image into an uncompressed `format`, tightly packed.
///
/// Normalised formats clamp to `[0, 1]` and round to nearest. sRGB formats gamma encode the
/// colour channels first.
///
/// # Errors
///
/// [`InspectError::UnsupportedFormat`] for block compressed formats.
pub fn encode_float_image(image: &FloatImage, format: TextureFormat) -> InspectResult<OwnedImage> {
    let Some(pixel_size) = format.bytes_per_pixel() else {
        return Err(InspectError::UnsupportedFormat(format));
    };
    debug!(%format, width = image.width, height = image.height, "encoding float image");

    let mut pixels = Vec::with_capacity(image.pixels.len() * pixel_size);
    for &pixel in &image.pixels {
        let pixel = if format.is_srgb() {
            [
                linear_to_srgb(pixel[0]),
                linear_to_srgb(pixel[1]),
                linear_to_srgb(pixel[2]),
                pixel[3],
            ]
        } else {
            pixel
        };
        encode_pixel(format, pixel, &mut pixels);
    }

    Ok(OwnedImage {
        format,
        width: image.width,
        height: image.height,
        row_pitch: format.default_row_pitch(image.width),
        pixels,
    })
}

#[inline(always)]
fn to_unorm8(value: f32) -> u8 {
    (value.clamp(0.0, 1.0) * 255.0).round() as u8
}

#[inline(always)]
fn to_unorm16(value: f32) -> u16 {
    (value.clamp(0.0, 1.0) * 65535.0).round() as u16
}

fn encode_pixel(format: TextureFormat, [r, g, b, a]: [f32; 4], out: &mut Vec<u8>) {
    use TextureFormat::*;
    match format {
        R8_UNORM => out.push(to_unorm8(r)),
        R8G8_UNORM => out.extend_from_slice(&[to_unorm8(r), to_unorm8(g)]),
        B8G8R8A8_UNORM => {
            out.extend_from_slice(&[to_unorm8(b), to_unorm8(g), to_unorm8(r), to_unorm8(a)])
        }
        R16G16B16A16_UNORM => {
            for value in [r, g, b, a] {
                out.extend_from_slice(&to_unorm16(value).to_le_bytes());
            }
        }
        R16G16B16A16_FLOAT => {
            for value in [r, g, b, a] {
                out.extend_from_slice(&f16::from_f32(value).to_bits().to_le_bytes());
            }
        }
        R32_FLOAT => out.extend_from_slice(&r.to_le_bytes()),
        R32G32B32A32_FLOAT => {
            for value in [r, g, b, a] {
                out.extend_from_slice(&value.to_le_bytes());
            }
        }
        // R8G8B8A8_UNORM and R8G8B8A8_UNORM_SRGB
        _ => out.extend_from_slice(&[to_unorm8(r), to_unorm8(g), to_unorm8(b), to_unorm8(a)]),
    }
}

/// sRGB transfer function, encoded to linear.
#[inline]
pub(crate) fn srgb_to_linear(value: f32) -> f32 {
    if value <= 0.04045 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB transfer function, linear to encoded.
#[inline]
pub(crate) fn linear_to_srgb(value: f32) -> f32 {
    if value <= 0.0031308 {
        value * 12.92
    } else {
        1.055 * value.powf(1.0 / 2.4) - 0.055
    }
}
