//! Per pixel absolute difference of two images.

use crate::convert::{encode_float_image, to_float_image};
use crate::error::{InspectError, InspectResult};
use crate::float_image::FloatImage;
use crate::owned_image::OwnedImage;
use bcn_inspect_common::color_f32::ColorF32;
use bcn_inspect_common::format::TextureFormat;
use bcn_inspect_common::image::Image;
use tracing::debug;

/// Output of [`difference`].
#[derive(Debug, Clone, PartialEq)]
pub enum DifferenceImage {
    /// The difference as RGBA floats, returned for `R32G32B32A32_FLOAT`.
    Float(FloatImage),
    /// The difference encoded into the requested uncompressed format.
    Encoded(OwnedImage),
}

impl DifferenceImage {
    /// Returns the difference as floats, if no encoding was requested.
    pub fn as_float(&self) -> Option<&FloatImage> {
        match self {
            Self::Float(image) => Some(image),
            Self::Encoded(_) => None,
        }
    }
}

/// Computes `|a - b|` per colour channel with alpha set to exactly 1.0.
///
/// Both inputs may be in any supported format, compressed or not; they are converted to
/// linear floats first. The result is returned as floats when `output` is
/// `R32G32B32A32_FLOAT`, otherwise encoded into `output`.
///
/// # Errors
///
/// - [`InspectError::NullBuffer`] if either image has dimensions but no data.
/// - [`InspectError::DimensionMismatch`] if the sizes differ.
/// - [`InspectError::UnsupportedFormat`] if `output` is block compressed.
/// - Any error of [`to_float_image`](crate::to_float_image).
///
/// ```
/// use bcn_inspect_api::difference;
/// use bcn_inspect_common::format::TextureFormat;
/// use bcn_inspect_common::image::Image;
///
/// let a = Image::new(TextureFormat::R8G8B8A8_UNORM, 1, 1, &[255, 0, 0, 0]);
/// let b = Image::new(TextureFormat::R8G8B8A8_UNORM, 1, 1, &[0, 0, 0, 255]);
/// let diff = difference(&a, &b, TextureFormat::R32G32B32A32_FLOAT).unwrap();
/// assert_eq!(diff.as_float().unwrap().pixels, vec![[1.0, 0.0, 0.0, 1.0]]);
/// ```
pub fn difference(a: &Image, b: &Image, output: TextureFormat) -> InspectResult<DifferenceImage> {
    debug!(
        format_a = %a.format,
        format_b = %b.format,
        %output,
        width = a.width,
        height = a.height,
        "computing difference"
    );
    if a.is_null() || b.is_null() {
        return Err(InspectError::NullBuffer);
    }
    if a.width != b.width || a.height != b.height {
        return Err(InspectError::DimensionMismatch {
            width_a: a.width,
            height_a: a.height,
            width_b: b.width,
            height_b: b.height,
        });
    }
    if output.is_compressed() {
        return Err(InspectError::UnsupportedFormat(output));
    }

    let mut result = to_float_image(a)?;
    let other = to_float_image(b)?;
    for (pixel, other) in result.pixels.iter_mut().zip(&other.pixels) {
        *pixel = ColorF32::from_array(*pixel)
            .abs_diff_opaque(&ColorF32::from_array(*other))
            .to_array();
    }

    if output == TextureFormat::R32G32B32A32_FLOAT {
        Ok(DifferenceImage::Float(result))
    } else {
        Ok(DifferenceImage::Encoded(encode_float_image(&result, output)?))
    }
}
