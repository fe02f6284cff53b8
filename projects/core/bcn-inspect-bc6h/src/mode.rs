use crate::layout::{self, Field, FieldParts, Segment};
use bcn_inspect_common::error::DecodeError;
use derive_enum_all_values::AllValues;

/// Whether a BC6H surface stores unsigned (`BC6H_UF16`) or signed (`BC6H_SF16`) halves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, AllValues)]
pub enum Bc6hVariant {
    /// `BC6H_UF16`
    Uf16,
    /// `BC6H_SF16`
    Sf16,
}

impl Bc6hVariant {
    /// Returns `true` for [`Bc6hVariant::Sf16`].
    #[inline]
    pub const fn is_signed(&self) -> bool {
        matches!(self, Self::Sf16)
    }
}

/// Static description of one of the 14 BC6H modes.
#[derive(Debug, PartialEq, Eq)]
pub struct Bc6hMode {
    /// Mode number as used in the documentation, 1 to 14.
    pub number: u8,
    /// Value of the mode prefix.
    pub prefix: u8,
    /// Width of the mode prefix, 2 or 5 bits.
    pub prefix_bits: u8,
    /// Precision of the base endpoint `W`.
    pub endpoint_bits: u8,
    /// Width of the remaining endpoint components, per channel.
    pub delta_bits: [u8; 3],
    /// Precision label printed in the dump, e.g. `[10 5 5 5]`.
    pub label: &'static str,
    /// Endpoint segments in storage order.
    pub layout: &'static [Segment],
}

const fn mode(
    number: u8,
    prefix: u8,
    prefix_bits: u8,
    endpoint_bits: u8,
    delta_bits: [u8; 3],
    label: &'static str,
    layout: &'static [Segment],
) -> Bc6hMode {
    Bc6hMode {
        number,
        prefix,
        prefix_bits,
        endpoint_bits,
        delta_bits,
        label,
        layout,
    }
}

/// All 14 modes, indexed by `number - 1`.
#[rustfmt::skip]
pub static MODES: [Bc6hMode; 14] = [
    mode(1, 0x00, 2, 10, [5, 5, 5], "[10 5 5 5]", layout::MODE_1),
    mode(2, 0x01, 2, 7, [6, 6, 6], "[7 6 6 6]", layout::MODE_2),
    mode(3, 0x02, 5, 11, [5, 4, 4], "[11 5 4 4]", layout::MODE_3),
    mode(4, 0x06, 5, 11, [4, 5, 4], "[11 4 5 4]", layout::MODE_4),
    mode(5, 0x0A, 5, 11, [4, 4, 5], "[11 4 4 5]", layout::MODE_5),
    mode(6, 0x0E, 5, 9, [5, 5, 5], "[9 5 5 5]", layout::MODE_6),
    mode(7, 0x12, 5, 8, [6, 5, 5], "[8 6 5 5]", layout::MODE_7),
    mode(8, 0x16, 5, 8, [5, 6, 5], "[8 5 6 5]", layout::MODE_8),
    mode(9, 0x1A, 5, 8, [5, 5, 6], "[8 5 5 6]", layout::MODE_9),
    mode(10, 0x1E, 5, 6, [6, 6, 6], "[6 6 6 6]", layout::MODE_10),
    mode(11, 0x03, 5, 10, [10, 10, 10], "[10 10]", layout::MODE_11),
    mode(12, 0x07, 5, 11, [9, 9, 9], "[11 9]", layout::MODE_12),
    mode(13, 0x0B, 5, 12, [8, 8, 8], "[12 8]", layout::MODE_13),
    mode(14, 0x0F, 5, 16, [4, 4, 4], "[16 4]", layout::MODE_14),
];

impl Bc6hMode {
    /// Determines the mode from the first byte of a block.
    ///
    /// # Errors
    ///
    /// [`DecodeError::ReservedBc6hMode`] for the patterns `10011`, `10111`, `11011` and `11111`.
    ///
    /// ```
    /// use bcn_inspect_bc6h::Bc6hMode;
    /// use bcn_inspect_common::error::DecodeError;
    ///
    /// assert_eq!(Bc6hMode::detect(0b1111_1100).unwrap().number, 1);
    /// assert_eq!(Bc6hMode::detect(0b0000_0011).unwrap().number, 11);
    /// assert_eq!(Bc6hMode::detect(0b0001_0011), Err(DecodeError::ReservedBc6hMode(0b10011)));
    /// ```
    pub fn detect(first_byte: u8) -> Result<&'static Bc6hMode, DecodeError> {
        match first_byte & 0x3 {
            0x0 => Ok(&MODES[0]),
            0x1 => Ok(&MODES[1]),
            _ => {
                let bits = first_byte & 0x1F;
                MODES[2..]
                    .iter()
                    .find(|mode| mode.prefix == bits)
                    .ok_or(DecodeError::ReservedBc6hMode(bits))
            }
        }
    }

    /// Looks a mode up by its number (1 to 14).
    pub fn from_number(number: u8) -> Option<&'static Bc6hMode> {
        MODES.get((number as usize).checked_sub(1)?)
    }

    /// Number of subsets, 2 for modes 1 to 10 and 1 otherwise.
    #[inline]
    pub const fn subsets(&self) -> usize {
        if self.number <= 10 {
            2
        } else {
            1
        }
    }

    /// Whether `X`, `Y` and `Z` are stored as deltas from `W`. Only modes 10 and 11 store
    /// absolute endpoints.
    #[inline]
    pub const fn is_transformed(&self) -> bool {
        !matches!(self.number, 10 | 11)
    }

    /// Width of a regular index, 3 bits for two subsets and 4 bits otherwise.
    #[inline]
    pub const fn index_bits(&self) -> u32 {
        if self.subsets() == 2 {
            3
        } else {
            4
        }
    }

    /// Stored width of an endpoint component.
    #[inline]
    pub const fn field_width(&self, field: Field) -> u32 {
        if field.endpoint() == 0 {
            self.endpoint_bits as u32
        } else {
            self.delta_bits[field.channel()] as u32
        }
    }

    /// Where `field` is stored in a block of this mode.
    #[inline]
    pub fn field_parts(&self, field: Field) -> FieldParts {
        layout::field_parts(self.layout, self.prefix_bits, field)
    }

    /// Bits taken by the mode prefix and the endpoints, i.e. the offset of what follows.
    pub fn header_bits(&self) -> u32 {
        self.prefix_bits as u32 + self.layout.iter().map(|s| s.len as u32).sum::<u32>()
    }

    /// Histogram bucket of this mode, equal to its number.
    #[inline]
    pub const fn bucket(&self) -> usize {
        self.number as usize
    }
}
