use crate::color_8888::Color8888;
use core::fmt;

/// Represents a 16-bit RGB565 color (5 bits red, 6 bits green, 5 bits blue)
/// As encountered in the colour half of BC1, BC2 and BC3 blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Color565 {
    /// The underlying 16-bit RGB565 value
    value: u16,
}

impl Color565 {
    /// Creates a new [`Color565`] from the raw 16-bit value
    #[inline]
    pub const fn from_raw(value: u16) -> Self {
        Self { value }
    }

    /// Creates a new [`Color565`] from separate RGB components
    ///
    /// # Parameters
    ///
    /// - `r`: The red component (0-255)
    /// - `g`: The green component (0-255)
    /// - `b`: The blue component (0-255)
    #[inline]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            value: ((r as u16 & 0xF8) << 8) | ((g as u16 & 0xFC) << 3) | (b as u16 >> 3),
        }
    }

    /// Returns the raw 16-bit value
    #[inline]
    pub const fn raw_value(&self) -> u16 {
        self.value
    }

    /// The raw 5-bit red field.
    #[inline]
    pub const fn red_bits(&self) -> u8 {
        ((self.value >> 11) & 0x1F) as u8
    }

    /// The raw 6-bit green field.
    #[inline]
    pub const fn green_bits(&self) -> u8 {
        ((self.value >> 5) & 0x3F) as u8
    }

    /// The raw 5-bit blue field.
    #[inline]
    pub const fn blue_bits(&self) -> u8 {
        (self.value & 0x1F) as u8
    }

    // BC1 first expands the endpoint values from 5 or 6 bits to 8 bits by replicating
    // the top bits, then treats the result as 8-bit UNorm.

    /// Extracts the expanded 8-bit red component
    #[inline]
    pub const fn red(&self) -> u8 {
        let r = self.red_bits();
        (r << 3) | (r >> 2)
    }

    /// Extracts the expanded 8-bit green component
    #[inline]
    pub const fn green(&self) -> u8 {
        let g = self.green_bits();
        (g << 2) | (g >> 4)
    }

    /// Extracts the expanded 8-bit blue component
    #[inline]
    pub const fn blue(&self) -> u8 {
        let b = self.blue_bits();
        (b << 3) | (b >> 2)
    }

    /// Compares two [`Color565`] values on their raw packed value
    #[inline]
    pub const fn greater_than(&self, other: &Self) -> bool {
        self.value > other.value
    }

    /// Returns the endpoint as `[r / 31, g / 63, b / 31]`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bcn_inspect_common::color_565::Color565;
    ///
    /// let white = Color565::from_raw(0xFFFF);
    /// assert_eq!(white.normalized(), [1.0, 1.0, 1.0]);
    /// ```
    #[inline]
    pub fn normalized(&self) -> [f32; 3] {
        [
            self.red_bits() as f32 * (1.0 / 31.0),
            self.green_bits() as f32 * (1.0 / 63.0),
            self.blue_bits() as f32 * (1.0 / 31.0),
        ]
    }

    /// Converts this [`Color565`] to a [`Color8888`] with full opacity (alpha=255)
    ///
    /// # Examples
    ///
    /// ```
    /// use bcn_inspect_common::color_565::Color565;
    ///
    /// let rgb565 = Color565::from_rgb(255, 0, 0);
    /// let rgba8888 = rgb565.to_color_8888();
    /// assert_eq!(rgba8888.r, 255);
    /// assert_eq!(rgba8888.g, 0);
    /// assert_eq!(rgba8888.b, 0);
    /// assert_eq!(rgba8888.a, 255);
    /// ```
    #[inline]
    pub const fn to_color_8888(&self) -> Color8888 {
        Color8888::new(self.red(), self.green(), self.blue(), 255)
    }
}

/// Prints the normalised endpoint as `(R: 1.000, G: 0.000, B: 0.000)`.
impl fmt::Display for Color565 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.normalized();
        write!(f, "(R: {r:.3}, G: {g:.3}, B: {b:.3})")
    }
}
