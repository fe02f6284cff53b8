/// An RGBA colour with one `f32` per channel.
///
/// Used for the formats whose decoded values do not fit in 8 bits (BC4/BC5 SNORM, BC6H)
/// and for the statistics and difference passes, which work on all formats alike.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorF32 {
    /// Red component
    pub r: f32,
    /// Green component
    pub g: f32,
    /// Blue component
    pub b: f32,
    /// Alpha component
    pub a: f32,
}

impl ColorF32 {
    /// Opaque black, `(0, 0, 0, 1)`.
    pub const OPAQUE_BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Constructs a new [`ColorF32`].
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Builds a colour from `[r, g, b, a]`.
    #[inline]
    pub const fn from_array(values: [f32; 4]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }

    /// Returns `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(&self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Per channel absolute difference of the colour channels, with alpha fixed at 1.0.
    ///
    /// ```
    /// use bcn_inspect_common::color_f32::ColorF32;
    ///
    /// let a = ColorF32::new(0.25, 1.0, 0.0, 0.0);
    /// let b = ColorF32::new(0.75, 0.5, 0.0, 1.0);
    /// assert_eq!(a.abs_diff_opaque(&b), ColorF32::new(0.5, 0.5, 0.0, 1.0));
    /// ```
    #[inline]
    pub fn abs_diff_opaque(&self, other: &Self) -> Self {
        Self::new(
            abs(self.r - other.r),
            abs(self.g - other.g),
            abs(self.b - other.b),
            1.0,
        )
    }
}

// f32::abs lives in std; this crate is no_std.
#[inline(always)]
fn abs(value: f32) -> f32 {
    f32::from_bits(value.to_bits() & 0x7FFF_FFFF)
}
