//! Per mode endpoint bit layouts.
//!
//! After the mode prefix, every BC6H mode stores its endpoint fields as a sequence of
//! contiguous bit runs. Each [`Segment`] names the field a run belongs to, the bit of that
//! field the run starts at, and the run length. [`field_parts`] turns the runs of one
//! component into absolute [`SubField`]s, which
//! [`BlockBits::assemble`](bcn_inspect_common::bits::BlockBits::assemble) ORs back into place.
//!
//! Endpoints are named as in the BC6H documentation: `W` is the base endpoint, `X`, `Y` and
//! `Z` are the remaining endpoints (deltas in transformed modes). The single subset modes
//! only use `W` and `X`.

use bcn_inspect_common::bits::SubField;

/// One of the twelve endpoint components.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Red of endpoint W
    Rw,
    /// Green of endpoint W
    Gw,
    /// Blue of endpoint W
    Bw,
    /// Red of endpoint X
    Rx,
    /// Green of endpoint X
    Gx,
    /// Blue of endpoint X
    Bx,
    /// Red of endpoint Y
    Ry,
    /// Green of endpoint Y
    Gy,
    /// Blue of endpoint Y
    By,
    /// Red of endpoint Z
    Rz,
    /// Green of endpoint Z
    Gz,
    /// Blue of endpoint Z
    Bz,
}

impl Field {
    /// Endpoint index: 0 = W, 1 = X, 2 = Y, 3 = Z.
    #[inline]
    pub const fn endpoint(self) -> usize {
        self as usize / 3
    }

    /// Channel index: 0 = red, 1 = green, 2 = blue.
    #[inline]
    pub const fn channel(self) -> usize {
        self as usize % 3
    }

    /// Returns the field for an endpoint and channel.
    pub const fn from_parts(endpoint: usize, channel: usize) -> Self {
        const FIELDS: [Field; 12] = [
            Field::Rw,
            Field::Gw,
            Field::Bw,
            Field::Rx,
            Field::Gx,
            Field::Bx,
            Field::Ry,
            Field::Gy,
            Field::By,
            Field::Rz,
            Field::Gz,
            Field::Bz,
        ];
        FIELDS[endpoint * 3 + channel]
    }
}

/// A contiguous run of bits belonging to one endpoint component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment {
    /// The component the bits belong to.
    pub field: Field,
    /// Bit of the component the run starts at.
    pub lsb: u8,
    /// Number of bits in the run.
    pub len: u8,
    /// The run is stored most significant bit first.
    pub reversed: bool,
}

const fn seg(field: Field, lsb: u8, len: u8) -> Segment {
    Segment {
        field,
        lsb,
        len,
        reversed: false,
    }
}

const fn rev(field: Field, lsb: u8, len: u8) -> Segment {
    Segment {
        field,
        lsb,
        len,
        reversed: true,
    }
}

/// Most pieces a component is split into, counting each bit of a reversed run separately.
pub const MAX_PARTS: usize = 8;

/// The absolute bit ranges holding one endpoint component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldParts {
    parts: [SubField; MAX_PARTS],
    len: usize,
}

impl FieldParts {
    /// The ranges in storage order.
    #[inline]
    pub fn as_slice(&self) -> &[SubField] {
        &self.parts[..self.len]
    }

    fn push(&mut self, part: SubField) {
        self.parts[self.len] = part;
        self.len += 1;
    }
}

/// Collects where `field` is stored when `layout` starts at bit `start` of the block.
///
/// Reversed runs are split into single bits, the first stored bit landing highest.
///
/// ```
/// use bcn_inspect_bc6h::layout::{field_parts, Field, MODE_14};
/// use bcn_inspect_common::bits::SubField;
///
/// let parts = field_parts(MODE_14, 5, Field::Rx);
/// assert_eq!(parts.as_slice(), &[SubField::new(35, 4, 0)]);
/// ```
pub fn field_parts(layout: &[Segment], start: u8, field: Field) -> FieldParts {
    let mut result = FieldParts {
        parts: [SubField::new(0, 0, 0); MAX_PARTS],
        len: 0,
    };
    let mut offset = start;
    for segment in layout {
        if segment.field == field {
            if segment.reversed {
                for bit in 0..segment.len {
                    let shift = segment.lsb + segment.len - 1 - bit;
                    result.push(SubField::new(offset + bit, 1, shift));
                }
            } else {
                result.push(SubField::new(offset, segment.len, segment.lsb));
            }
        }
        offset += segment.len;
    }
    result
}

use Field::*;

/// Mode 1 (`00`), `[10 5 5 5]`.
#[rustfmt::skip]
pub const MODE_1: &[Segment] = &[
    seg(Gy, 4, 1), seg(By, 4, 1), seg(Bz, 4, 1),
    seg(Rw, 0, 10), seg(Gw, 0, 10), seg(Bw, 0, 10),
    seg(Rx, 0, 5), seg(Gz, 4, 1), seg(Gy, 0, 4),
    seg(Gx, 0, 5), seg(Bz, 0, 1), seg(Gz, 0, 4),
    seg(Bx, 0, 5), seg(Bz, 1, 1), seg(By, 0, 4),
    seg(Ry, 0, 5), seg(Bz, 2, 1), seg(Rz, 0, 5), seg(Bz, 3, 1),
];

/// Mode 2 (`01`), `[7 6 6 6]`.
#[rustfmt::skip]
pub const MODE_2: &[Segment] = &[
    seg(Gy, 5, 1), seg(Gz, 4, 1), seg(Gz, 5, 1),
    seg(Rw, 0, 7), seg(Bz, 0, 1), seg(Bz, 1, 1), seg(By, 4, 1),
    seg(Gw, 0, 7), seg(By, 5, 1), seg(Bz, 2, 1), seg(Gy, 4, 1),
    seg(Bw, 0, 7), seg(Bz, 3, 1), seg(Bz, 5, 1), seg(Bz, 4, 1),
    seg(Rx, 0, 6), seg(Gy, 0, 4), seg(Gx, 0, 6), seg(Gz, 0, 4),
    seg(Bx, 0, 6), seg(By, 0, 4), seg(Ry, 0, 6), seg(Rz, 0, 6),
];

/// Mode 3 (`00010`), `[11 5 4 4]`.
#[rustfmt::skip]
pub const MODE_3: &[Segment] = &[
    seg(Rw, 0, 10), seg(Gw, 0, 10), seg(Bw, 0, 10),
    seg(Rx, 0, 5), seg(Rw, 10, 1), seg(Gy, 0, 4),
    seg(Gx, 0, 4), seg(Gw, 10, 1), seg(Bz, 0, 1), seg(Gz, 0, 4),
    seg(Bx, 0, 4), seg(Bw, 10, 1), seg(Bz, 1, 1), seg(By, 0, 4),
    seg(Ry, 0, 5), seg(Bz, 2, 1), seg(Rz, 0, 5), seg(Bz, 3, 1),
];

/// Mode 4 (`00110`), `[11 4 5 4]`.
#[rustfmt::skip]
pub const MODE_4: &[Segment] = &[
    seg(Rw, 0, 10), seg(Gw, 0, 10), seg(Bw, 0, 10),
    seg(Rx, 0, 4), seg(Rw, 10, 1), seg(Gz, 4, 1), seg(Gy, 0, 4),
    seg(Gx, 0, 5), seg(Gw, 10, 1), seg(Gz, 0, 4),
    seg(Bx, 0, 4), seg(Bw, 10, 1), seg(Bz, 1, 1), seg(By, 0, 4),
    seg(Ry, 0, 4), seg(Bz, 0, 1), seg(Bz, 2, 1), seg(Rz, 0, 4),
    seg(Gy, 4, 1), seg(Bz, 3, 1),
];

/// Mode 5 (`01010`), `[11 4 4 5]`.
#[rustfmt::skip]
pub const MODE_5: &[Segment] = &[
    seg(Rw, 0, 10), seg(Gw, 0, 10), seg(Bw, 0, 10),
    seg(Rx, 0, 4), seg(Rw, 10, 1), seg(By, 4, 1), seg(Gy, 0, 4),
    seg(Gx, 0, 4), seg(Gw, 10, 1), seg(Bz, 0, 1), seg(Gz, 0, 4),
    seg(Bx, 0, 5), seg(Bw, 10, 1), seg(By, 0, 4),
    seg(Ry, 0, 4), seg(Bz, 1, 1), seg(Bz, 2, 1), seg(Rz, 0, 4),
    seg(Bz, 4, 1), seg(Bz, 3, 1),
];

/// Mode 6 (`01110`), `[9 5 5 5]`.
#[rustfmt::skip]
pub const MODE_6: &[Segment] = &[
    seg(Rw, 0, 9), seg(By, 4, 1), seg(Gw, 0, 9), seg(Gy, 4, 1),
    seg(Bw, 0, 9), seg(Bz, 4, 1),
    seg(Rx, 0, 5), seg(Gz, 4, 1), seg(Gy, 0, 4),
    seg(Gx, 0, 5), seg(Bz, 0, 1), seg(Gz, 0, 4),
    seg(Bx, 0, 5), seg(Bz, 1, 1), seg(By, 0, 4),
    seg(Ry, 0, 5), seg(Bz, 2, 1), seg(Rz, 0, 5), seg(Bz, 3, 1),
];

/// Mode 7 (`10010`), `[8 6 5 5]`.
#[rustfmt::skip]
pub const MODE_7: &[Segment] = &[
    seg(Rw, 0, 8), seg(Gz, 4, 1), seg(By, 4, 1),
    seg(Gw, 0, 8), seg(Bz, 2, 1), seg(Gy, 4, 1),
    seg(Bw, 0, 8), seg(Bz, 3, 1), seg(Bz, 4, 1),
    seg(Rx, 0, 6), seg(Gy, 0, 4),
    seg(Gx, 0, 5), seg(Bz, 0, 1), seg(Gz, 0, 4),
    seg(Bx, 0, 5), seg(Bz, 1, 1), seg(By, 0, 4),
    seg(Ry, 0, 6), seg(Rz, 0, 6),
];

/// Mode 8 (`10110`), `[8 5 6 5]`.
#[rustfmt::skip]
pub const MODE_8: &[Segment] = &[
    seg(Rw, 0, 8), seg(Bz, 0, 1), seg(By, 4, 1),
    seg(Gw, 0, 8), seg(Gy, 5, 1), seg(Gy, 4, 1),
    seg(Bw, 0, 8), seg(Gz, 5, 1), seg(Bz, 4, 1),
    seg(Rx, 0, 5), seg(Gz, 4, 1), seg(Gy, 0, 4),
    seg(Gx, 0, 6), seg(Gz, 0, 4),
    seg(Bx, 0, 5), seg(Bz, 1, 1), seg(By, 0, 4),
    seg(Ry, 0, 5), seg(Bz, 2, 1), seg(Rz, 0, 5), seg(Bz, 3, 1),
];

/// Mode 9 (`11010`), `[8 5 5 6]`.
#[rustfmt::skip]
pub const MODE_9: &[Segment] = &[
    seg(Rw, 0, 8), seg(Bz, 1, 1), seg(By, 4, 1),
    seg(Gw, 0, 8), seg(By, 5, 1), seg(Gy, 4, 1),
    seg(Bw, 0, 8), seg(Bz, 5, 1), seg(Bz, 4, 1),
    seg(Rx, 0, 5), seg(Gz, 4, 1), seg(Gy, 0, 4),
    seg(Gx, 0, 5), seg(Bz, 0, 1), seg(Gz, 0, 4),
    seg(Bx, 0, 6), seg(By, 0, 4),
    seg(Ry, 0, 5), seg(Bz, 2, 1), seg(Rz, 0, 5), seg(Bz, 3, 1),
];

/// Mode 10 (`11110`), `[6 6 6 6]`.
#[rustfmt::skip]
pub const MODE_10: &[Segment] = &[
    seg(Rw, 0, 6), seg(Gz, 4, 1), seg(Bz, 0, 1), seg(Bz, 1, 1), seg(By, 4, 1),
    seg(Gw, 0, 6), seg(Gy, 5, 1), seg(By, 5, 1), seg(Bz, 2, 1), seg(Gy, 4, 1),
    seg(Bw, 0, 6), seg(Gz, 5, 1), seg(Bz, 3, 1), seg(Bz, 5, 1), seg(Bz, 4, 1),
    seg(Rx, 0, 6), seg(Gy, 0, 4), seg(Gx, 0, 6), seg(Gz, 0, 4),
    seg(Bx, 0, 6), seg(By, 0, 4), seg(Ry, 0, 6), seg(Rz, 0, 6),
];

/// Mode 11 (`00011`), `[10 10]`.
#[rustfmt::skip]
pub const MODE_11: &[Segment] = &[
    seg(Rw, 0, 10), seg(Gw, 0, 10), seg(Bw, 0, 10),
    seg(Rx, 0, 10), seg(Gx, 0, 10), seg(Bx, 0, 10),
];

/// Mode 12 (`00111`), `[11 9]`.
#[rustfmt::skip]
pub const MODE_12: &[Segment] = &[
    seg(Rw, 0, 10), seg(Gw, 0, 10), seg(Bw, 0, 10),
    seg(Rx, 0, 9), seg(Rw, 10, 1),
    seg(Gx, 0, 9), seg(Gw, 10, 1),
    seg(Bx, 0, 9), seg(Bw, 10, 1),
];

/// Mode 13 (`01011`), `[12 8]`. `W` bits 11 and 10 are stored high bit first.
#[rustfmt::skip]
pub const MODE_13: &[Segment] = &[
    seg(Rw, 0, 10), seg(Gw, 0, 10), seg(Bw, 0, 10),
    seg(Rx, 0, 8), rev(Rw, 10, 2),
    seg(Gx, 0, 8), rev(Gw, 10, 2),
    seg(Bx, 0, 8), rev(Bw, 10, 2),
];

/// Mode 14 (`01111`), `[16 4]`. `W` bits 15 down to 10 are stored high bit first.
#[rustfmt::skip]
pub const MODE_14: &[Segment] = &[
    seg(Rw, 0, 10), seg(Gw, 0, 10), seg(Bw, 0, 10),
    seg(Rx, 0, 4), rev(Rw, 10, 6),
    seg(Gx, 0, 4), rev(Gw, 10, 6),
    seg(Bx, 0, 4), rev(Bw, 10, 6),
];
