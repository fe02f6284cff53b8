use bcn_inspect_common::error::DecodeError;
use core::fmt;
use derive_enum_all_values::AllValues;

/// How a mode stores its P-bits (shared low bits of the endpoints).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PBits {
    /// No P-bits.
    None,
    /// One P-bit per endpoint.
    PerEndpoint,
    /// One P-bit shared by both endpoints of a subset.
    PerSubset,
}

/// Channel rotation of modes 4 and 5: the named channel swaps places with alpha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AllValues)]
pub enum Rotation {
    /// `00`, no swap.
    None,
    /// `01`, red and alpha swapped.
    Red,
    /// `10`, green and alpha swapped.
    Green,
    /// `11`, blue and alpha swapped.
    Blue,
}

impl Rotation {
    /// Interprets the 2 rotation bits.
    #[inline]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x3 {
            0 => Self::None,
            1 => Self::Red,
            2 => Self::Green,
            _ => Self::Blue,
        }
    }

    /// The stored 2-bit value.
    #[inline]
    pub const fn bits(&self) -> u8 {
        *self as u8
    }

    /// Index of the channel swapped with alpha, if any.
    #[inline]
    pub const fn channel(&self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Red => Some(0),
            Self::Green => Some(1),
            Self::Blue => Some(2),
        }
    }

    /// Suffix printed after the rotation bits in the dump.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::None => "",
            Self::Red => " (R<->A)",
            Self::Green => " (G<->A)",
            Self::Blue => " (B<->A)",
        }
    }
}

/// Static description of one of the 8 BC7 modes.
#[derive(Debug, PartialEq, Eq)]
pub struct Bc7Mode {
    /// Mode number, 0 to 7.
    pub number: u8,
    /// Number of subsets, 1 to 3.
    pub subsets: u8,
    /// Width of the partition field.
    pub partition_bits: u8,
    /// Width of the rotation field.
    pub rotation_bits: u8,
    /// Width of the index selection field.
    pub index_selection_bits: u8,
    /// Stored bits per colour component, before P-bits.
    pub color_bits: u8,
    /// Stored bits per alpha component, 0 for colour-only modes.
    pub alpha_bits: u8,
    /// P-bit layout.
    pub pbits: PBits,
    /// Width of the primary indices.
    pub index_bits: u8,
    /// Width of the secondary indices, 0 when the mode has none.
    pub secondary_index_bits: u8,
}

#[allow(clippy::too_many_arguments)]
const fn mode(
    number: u8,
    subsets: u8,
    partition_bits: u8,
    rotation_bits: u8,
    index_selection_bits: u8,
    color_bits: u8,
    alpha_bits: u8,
    pbits: PBits,
    index_bits: u8,
    secondary_index_bits: u8,
) -> Bc7Mode {
    Bc7Mode {
        number,
        subsets,
        partition_bits,
        rotation_bits,
        index_selection_bits,
        color_bits,
        alpha_bits,
        pbits,
        index_bits,
        secondary_index_bits,
    }
}

/// All 8 modes, indexed by number.
#[rustfmt::skip]
pub static MODES: [Bc7Mode; 8] = [
    mode(0, 3, 4, 0, 0, 4, 0, PBits::PerEndpoint, 3, 0),
    mode(1, 2, 6, 0, 0, 6, 0, PBits::PerSubset, 3, 0),
    mode(2, 3, 6, 0, 0, 5, 0, PBits::None, 2, 0),
    mode(3, 2, 6, 0, 0, 7, 0, PBits::PerEndpoint, 2, 0),
    mode(4, 1, 0, 2, 1, 5, 6, PBits::None, 2, 3),
    mode(5, 1, 0, 2, 0, 7, 8, PBits::None, 2, 2),
    mode(6, 1, 0, 0, 0, 7, 7, PBits::PerEndpoint, 4, 0),
    mode(7, 2, 6, 0, 0, 5, 5, PBits::PerEndpoint, 2, 0),
];

impl Bc7Mode {
    /// Determines the mode from the first byte of a block: the position of its lowest set bit.
    ///
    /// # Errors
    ///
    /// [`DecodeError::ReservedBc7Mode`] when the byte is zero.
    ///
    /// ```
    /// use bcn_inspect_bc7::Bc7Mode;
    /// use bcn_inspect_common::error::DecodeError;
    ///
    /// assert_eq!(Bc7Mode::detect(0b0010_1000).unwrap().number, 3);
    /// assert_eq!(Bc7Mode::detect(0), Err(DecodeError::ReservedBc7Mode));
    /// ```
    #[inline]
    pub fn detect(first_byte: u8) -> Result<&'static Bc7Mode, DecodeError> {
        MODES
            .get(first_byte.trailing_zeros() as usize)
            .ok_or(DecodeError::ReservedBc7Mode)
    }

    /// Number of endpoints, two per subset.
    #[inline]
    pub const fn endpoint_count(&self) -> usize {
        self.subsets as usize * 2
    }

    /// Number of stored P-bits.
    #[inline]
    pub const fn pbit_count(&self) -> usize {
        match self.pbits {
            PBits::None => 0,
            PBits::PerEndpoint => self.endpoint_count(),
            PBits::PerSubset => self.subsets as usize,
        }
    }

    /// Whether the endpoints carry alpha.
    #[inline]
    pub const fn has_alpha(&self) -> bool {
        self.alpha_bits != 0
    }

    /// Precision of a colour component after appending the P-bit.
    #[inline]
    pub const fn color_precision(&self) -> u32 {
        self.color_bits as u32 + self.pbit_width()
    }

    /// Precision of an alpha component after appending the P-bit, 0 for colour-only modes.
    #[inline]
    pub const fn alpha_precision(&self) -> u32 {
        if self.has_alpha() {
            self.alpha_bits as u32 + self.pbit_width()
        } else {
            0
        }
    }

    #[inline]
    const fn pbit_width(&self) -> u32 {
        match self.pbits {
            PBits::None => 0,
            _ => 1,
        }
    }

    /// Histogram bucket of this mode, equal to its number.
    #[inline]
    pub const fn bucket(&self) -> usize {
        self.number as usize
    }

    /// Precision label printed in the dump, e.g. `[5 5 5 A6]`.
    #[inline]
    pub fn label(&self) -> ModeLabel<'_> {
        ModeLabel(self)
    }
}

/// [`Display`](fmt::Display) adapter for [`Bc7Mode::label`].
#[derive(Debug, Clone, Copy)]
pub struct ModeLabel<'a>(&'a Bc7Mode);

impl fmt::Display for ModeLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bits = self.0.color_bits;
        write!(f, "[{bits} {bits} {bits}")?;
        if self.0.has_alpha() {
            write!(f, " A{}", self.0.alpha_bits)?;
        }
        f.write_str("]")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use std::string::ToString;

    #[test]
    fn detects_lowest_set_bit() {
        for byte in 1..=255u8 {
            let mode = Bc7Mode::detect(byte).expect("non-zero byte");
            assert_eq!(mode.number as u32, byte.trailing_zeros());
            assert_eq!(mode.bucket(), mode.number as usize);
        }
        assert_eq!(Bc7Mode::detect(0), Err(DecodeError::ReservedBc7Mode));
    }

    /// Mode, partition, rotation, selector, endpoints, P-bits and indices fill 128 bits.
    #[test]
    fn modes_fill_the_block() {
        for mode in MODES.iter() {
            let endpoint_bits = mode.endpoint_count() * (3 * mode.color_bits + mode.alpha_bits) as usize;
            let primary = 16 * mode.index_bits as usize - mode.subsets as usize;
            let secondary = match mode.secondary_index_bits {
                0 => 0,
                bits => 16 * bits as usize - 1,
            };
            let total = mode.number as usize
                + 1
                + (mode.partition_bits + mode.rotation_bits + mode.index_selection_bits) as usize
                + endpoint_bits
                + mode.pbit_count()
                + primary
                + secondary;
            assert_eq!(total, 128, "mode {}", mode.number);
        }
    }

    #[rstest]
    #[case(0, "[4 4 4]", 5, 0)]
    #[case(1, "[6 6 6]", 7, 0)]
    #[case(2, "[5 5 5]", 5, 0)]
    #[case(3, "[7 7 7]", 8, 0)]
    #[case(4, "[5 5 5 A6]", 5, 6)]
    #[case(5, "[7 7 7 A8]", 7, 8)]
    #[case(6, "[7 7 7 A7]", 8, 8)]
    #[case(7, "[5 5 5 A5]", 6, 6)]
    fn labels_and_precisions(
        #[case] number: usize,
        #[case] label: &str,
        #[case] color: u32,
        #[case] alpha: u32,
    ) {
        let mode = &MODES[number];
        assert_eq!(mode.label().to_string(), label);
        assert_eq!(mode.color_precision(), color);
        assert_eq!(mode.alpha_precision(), alpha);
    }

    #[test]
    fn rotation_round_trips_bits() {
        for rotation in Rotation::all_values() {
            assert_eq!(Rotation::from_bits(rotation.bits()), *rotation);
        }
        assert_eq!(Rotation::Green.label(), " (G<->A)");
        assert_eq!(Rotation::None.channel(), None);
    }
}
