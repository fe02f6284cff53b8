//! Two pass pixel statistics over an RGBA float image.

use crate::convert::to_float_image;
use crate::error::InspectResult;
use crate::float_image::FloatImage;
use bcn_inspect_common::image::Image;
use core::fmt;
use tracing::debug;

/// Rec. 601 luma weights applied to RGB.
const LUMINANCE: [f32; 3] = [0.3, 0.59, 0.11];

/// Per channel statistics of an image, `[r, g, b, a]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnalyzeData {
    /// Smallest value per channel.
    pub min: [f32; 4],
    /// Largest value per channel.
    pub max: [f32; 4],
    /// Mean per channel.
    pub average: [f32; 4],
    /// Sum of squared deviations from the mean per channel. Not divided by the pixel count.
    pub variance: [f32; 4],
    /// Square root of [`AnalyzeData::variance`].
    pub std_dev: [f32; 4],
    /// Largest `0.3 r + 0.59 g + 0.11 b` over all pixels, never below 0.
    pub luminance: f32,
    /// Count of NaN and infinite values per channel.
    pub specials: [usize; 4],
}

/// Computes the statistics of `image`, or [`None`] if it has no pixels.
///
/// Pixels are accumulated in row-major order, so repeated calls give bit identical results.
/// Only complete rows of `width` pixels are counted.
///
/// ```
/// use bcn_inspect_api::{analyze, FloatImage};
///
/// let image = FloatImage {
///     width: 2,
///     height: 1,
///     pixels: vec![[0.0, 0.0, 0.0, 1.0], [1.0, 0.5, 0.0, 1.0]],
/// };
/// let stats = analyze(&image).unwrap();
/// assert_eq!(stats.average, [0.5, 0.25, 0.0, 1.0]);
/// assert_eq!(stats.variance, [0.5, 0.125, 0.0, 0.0]);
/// ```
pub fn analyze(image: &FloatImage) -> Option<AnalyzeData> {
    let mut result = AnalyzeData {
        min: [f32::MAX; 4],
        max: [-f32::MAX; 4],
        ..AnalyzeData::default()
    };
    let mut sum = [0.0f32; 4];
    let mut count = 0usize;
    for pixel in image.rows().flatten() {
        count += 1;
        let luminance = pixel[0] * LUMINANCE[0] + pixel[1] * LUMINANCE[1] + pixel[2] * LUMINANCE[2];
        result.luminance = result.luminance.max(luminance);
        for channel in 0..4 {
            let value = pixel[channel];
            result.min[channel] = result.min[channel].min(value);
            result.max[channel] = result.max[channel].max(value);
            sum[channel] += value;
            if !value.is_finite() {
                result.specials[channel] += 1;
            }
        }
    }

    if count == 0 {
        return None;
    }
    let count = count as f32;
    result.average = sum.map(|total| total / count);

    for pixel in image.rows().flatten() {
        for channel in 0..4 {
            let deviation = pixel[channel] - result.average[channel];
            result.variance[channel] += deviation * deviation;
        }
    }
    result.std_dev = result.variance.map(f32::sqrt);
    Some(result)
}

/// Converts `image` to floats, then computes its statistics.
///
/// Returns `Ok(None)` when the image has no pixels.
///
/// # Errors
///
/// Any error of [`to_float_image`](crate::to_float_image).
pub fn analyze_image(image: &Image) -> InspectResult<Option<AnalyzeData>> {
    debug!(format = %image.format, width = image.width, height = image.height, "analyzing pixels");
    Ok(analyze(&to_float_image(image)?))
}

struct Channels<'a>(&'a [f32; 4]);

impl fmt::Display for Channels<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b, a] = self.0;
        write!(f, "({r:.6} {g:.6} {b:.6} {a:.6})")
    }
}

impl fmt::Display for AnalyzeData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\t  Minimum - {}", Channels(&self.min))?;
        writeln!(f, "\t  Average - {}", Channels(&self.average))?;
        writeln!(f, "\t  Maximum - {}", Channels(&self.max))?;
        writeln!(f, "\t Variance - {}", Channels(&self.variance))?;
        writeln!(f, "\t  Std Dev - {}", Channels(&self.std_dev))?;
        writeln!(f, "\tLuminance - {:.6} (maximum)", self.luminance)?;
        if self.specials.iter().any(|&count| count > 0) {
            let [r, g, b, a] = self.specials;
            writeln!(f, "     FP specials - ({r} {g} {b} {a})")?;
        }
        Ok(())
    }
}
