//! Borrowed image descriptor.

use crate::format::TextureFormat;

/// A borrowed view of a single 2D surface.
///
/// For compressed formats `row_pitch` is the distance between two rows of blocks; for
/// uncompressed formats it is the distance between two rows of pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Image<'a> {
    /// Format of the data in [`Image::pixels`].
    pub format: TextureFormat,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Bytes between the start of consecutive rows.
    pub row_pitch: usize,
    /// The raw surface data.
    pub pixels: &'a [u8],
}

impl<'a> Image<'a> {
    /// Creates a tightly packed image, deriving the row pitch from the format.
    ///
    /// ```
    /// use bcn_inspect_common::format::TextureFormat;
    /// use bcn_inspect_common::image::Image;
    ///
    /// let data = [0u8; 32];
    /// let image = Image::new(TextureFormat::BC1_UNORM, 8, 8, &data);
    /// assert_eq!(image.row_pitch, 16);
    /// assert_eq!(image.required_len(), 32);
    /// ```
    pub fn new(format: TextureFormat, width: u32, height: u32, pixels: &'a [u8]) -> Self {
        Self {
            format,
            width,
            height,
            row_pitch: format.default_row_pitch(width),
            pixels,
        }
    }

    /// Creates an image with an explicit row pitch.
    pub fn with_row_pitch(
        format: TextureFormat,
        width: u32,
        height: u32,
        row_pitch: usize,
        pixels: &'a [u8],
    ) -> Self {
        Self {
            format,
            width,
            height,
            row_pitch,
            pixels,
        }
    }

    /// Number of bytes the surface spans with the current row pitch.
    #[inline]
    pub fn required_len(&self) -> usize {
        self.format.row_count(self.height).saturating_mul(self.row_pitch)
    }

    /// Returns `true` if the buffer is empty while the dimensions are not.
    #[inline]
    pub fn is_null(&self) -> bool {
        self.pixels.is_empty() && self.width > 0 && self.height > 0
    }

    /// Returns the bytes of row `row` (a block row for compressed formats), if present.
    #[inline]
    pub fn row(&self, row: usize) -> Option<&'a [u8]> {
        let start = row.checked_mul(self.row_pitch)?;
        self.pixels.get(start..start.checked_add(self.row_pitch)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;

    #[rstest]
    #[case(TextureFormat::BC7_UNORM, 6, 6, 32, 64)]
    #[case(TextureFormat::BC4_UNORM, 4, 4, 8, 8)]
    #[case(TextureFormat::R16G16B16A16_FLOAT, 3, 2, 24, 48)]
    fn tightly_packed_sizes(
        #[case] format: TextureFormat,
        #[case] width: u32,
        #[case] height: u32,
        #[case] pitch: usize,
        #[case] len: usize,
    ) {
        let image = Image::new(format, width, height, &[]);
        assert_eq!(image.row_pitch, pitch);
        assert_eq!(image.required_len(), len);
    }

    #[test]
    fn required_len_saturates_on_huge_pitch() {
        let image = Image::with_row_pitch(TextureFormat::R8_UNORM, 1, 4, usize::MAX / 2, &[0]);
        assert_eq!(image.required_len(), usize::MAX);
    }

    #[test]
    fn empty_buffer_with_dimensions_is_null() {
        assert!(Image::new(TextureFormat::R8_UNORM, 1, 1, &[]).is_null());
        assert!(!Image::new(TextureFormat::R8_UNORM, 0, 0, &[]).is_null());
    }

    #[test]
    fn row_respects_pitch() {
        let data = [0u8, 1, 2, 3, 4, 5, 6, 7];
        let image = Image::with_row_pitch(TextureFormat::R8_UNORM, 2, 2, 4, &data);
        assert_eq!(image.row(1), Some(&data[4..8]));
        assert_eq!(image.row(2), None);
    }
}
