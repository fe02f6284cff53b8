use core::fmt::Debug;

/// An endpoint type of a BC4 block: [`u8`] for the UNORM variants, [`i8`] for SNORM.
pub trait Bc4Endpoint: Copy + PartialOrd + Debug + Default {
    /// Divisor used to normalise a raw endpoint.
    const DIVISOR: f32;
    /// Lowest normalised value, substituted by index 6 of a 6-value block.
    const RANGE_MIN: f32;
    /// Highest normalised value, substituted by index 7 of a 6-value block.
    const RANGE_MAX: f32 = 1.0;

    /// Reinterprets a stored byte.
    fn from_byte(byte: u8) -> Self;

    /// Returns the endpoint mapped into `[RANGE_MIN, RANGE_MAX]`.
    fn normalized(self) -> f32;
}

impl Bc4Endpoint for u8 {
    const DIVISOR: f32 = 255.0;
    const RANGE_MIN: f32 = 0.0;

    #[inline(always)]
    fn from_byte(byte: u8) -> Self {
        byte
    }

    #[inline(always)]
    fn normalized(self) -> f32 {
        self as f32 / Self::DIVISOR
    }
}

impl Bc4Endpoint for i8 {
    const DIVISOR: f32 = 127.0;
    const RANGE_MIN: f32 = -1.0;

    #[inline(always)]
    fn from_byte(byte: u8) -> Self {
        byte as i8
    }

    // -128 and -127 both map to -1.0
    #[inline(always)]
    fn normalized(self) -> f32 {
        (self.max(-127) as f32) / Self::DIVISOR
    }
}
