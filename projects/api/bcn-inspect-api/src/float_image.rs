/// An owned RGBA `f32` image, row-major with no padding.
///
/// Every format is converted to this representation before statistics or differences are
/// computed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FloatImage {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// `width * height` pixels as `[r, g, b, a]`.
    pub pixels: Vec<[f32; 4]>,
}

impl FloatImage {
    /// Creates an image of the given size filled with `pixel`.
    pub fn new(width: u32, height: u32, pixel: [f32; 4]) -> Self {
        Self {
            width,
            height,
            pixels: vec![pixel; width as usize * height as usize],
        }
    }

    /// Returns the pixel at `(x, y)`, if inside the image.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<[f32; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels
            .get(y as usize * self.width as usize + x as usize)
            .copied()
    }

    /// Iterates the rows of the image, top to bottom.
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = &[[f32; 4]]> {
        // chunks_exact panics on 0
        self.pixels.chunks_exact(self.width.max(1) as usize)
    }
}
