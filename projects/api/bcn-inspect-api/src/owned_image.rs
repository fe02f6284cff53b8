use bcn_inspect_common::format::TextureFormat;
use bcn_inspect_common::image::Image;

/// An owned, tightly packed image in an uncompressed format.
///
/// Produced when a [`FloatImage`](crate::FloatImage) is encoded into a requested output format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedImage {
    /// Format of [`OwnedImage::pixels`].
    pub format: TextureFormat,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Bytes between the start of consecutive pixel rows.
    pub row_pitch: usize,
    /// The encoded pixels.
    pub pixels: Vec<u8>,
}

impl OwnedImage {
    /// Borrows this image as an [`Image`].
    #[inline]
    pub fn as_image(&self) -> Image<'_> {
        Image::with_row_pitch(
            self.format,
            self.width,
            self.height,
            self.row_pitch,
            &self.pixels,
        )
    }
}
