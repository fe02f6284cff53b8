//! # Decoded 4x4 Block
//!
//! This module provides the [`Decoded4x4Block`] structure for representing decompressed
//! 4x4 pixel blocks of any BCn format.
//!
//! ## Overview
//!
//! BC formats compress textures by dividing them into 4x4 pixel blocks. The LDR formats
//! (BC1, BC2, BC3, BC7) decode to [`Color8888`] pixels, while BC4, BC5 and BC6H decode to
//! [`ColorF32`] pixels; the block is generic over the pixel type for that reason.
//!
//! ## Usage
//!
//! ```
//! use bcn_inspect_common::color_8888::Color8888;
//! use bcn_inspect_common::decoded_4x4_block::Decoded4x4Block;
//!
//! // Create a block filled with red pixels
//! let red_pixel = Color8888::new(255, 0, 0, 255);
//! let block = Decoded4x4Block::new(red_pixel);
//!
//! // Check if all pixels are identical
//! assert!(block.has_identical_pixels());
//! ```
//!
//! ## Memory Layout
//!
//! The pixels are stored in row-major order:
//! ```text
//! [ 0] [ 1] [ 2] [ 3]
//! [ 4] [ 5] [ 6] [ 7]
//! [ 8] [ 9] [10] [11]
//! [12] [13] [14] [15]
//! ```

use crate::color_8888::Color8888;
use crate::color_f32::ColorF32;

/// Represents a decoded 4x4 block of BC pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decoded4x4Block<T = Color8888> {
    /// The 16 pixels in the block (row-major order)
    /// (i.e. `pixels[0]` is top-left, `pixels[3]` is top-right, etc.)
    pub pixels: [T; 16],
}

impl<T: Copy + PartialEq> Decoded4x4Block<T> {
    /// Constructs a new decoded block initialised with 16 copies of the provided pixel.
    ///
    /// # Examples
    ///
    /// ```
    /// use bcn_inspect_common::color_8888::Color8888;
    /// use bcn_inspect_common::decoded_4x4_block::Decoded4x4Block;
    ///
    /// let pixel = Color8888::new(255, 0, 0, 255);
    /// let block = Decoded4x4Block::new(pixel);
    /// assert!(block.pixels.iter().all(|&p| p == pixel));
    /// ```
    pub fn new(pixel: T) -> Self {
        Self {
            pixels: [pixel; 16],
        }
    }

    /// Gets a pixel at the specified coordinates (0-3, 0-3)
    #[inline]
    pub fn get_pixel(&self, x: usize, y: usize) -> T {
        self.pixels[y * 4 + x]
    }

    /// Sets a pixel at the specified coordinates (0-3, 0-3)
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, pixel: T) {
        self.pixels[y * 4 + x] = pixel;
    }

    /// Checks if all pixels in the block have the same value
    #[inline]
    pub fn has_identical_pixels(&self) -> bool {
        let first = self.pixels[0];
        self.pixels.iter().all(|pixel| *pixel == first)
    }
}

impl Decoded4x4Block<Color8888> {
    /// Converts every pixel to normalised floats.
    pub fn to_f32(&self) -> Decoded4x4Block<ColorF32> {
        Decoded4x4Block {
            pixels: self.pixels.map(|pixel| pixel.to_f32()),
        }
    }
}
