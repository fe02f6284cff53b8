use crate::layout::Field;
use crate::mode::{Bc6hMode, Bc6hVariant};
use bcn_inspect_common::bits::{sign_extend, BlockBits};
use bcn_inspect_common::error::DecodeError;
use bcn_inspect_common::index::BlockIndices;
use core::fmt;

/// A parsed 16 byte BC6H block with its endpoint fields reassembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bc6hBlock {
    /// Detected mode.
    pub mode: &'static Bc6hMode,
    /// Partition shape, 0 for single subset modes.
    pub shape: u8,
    /// Raw endpoint components, indexed `[W, X, Y, Z][r, g, b]`.
    /// `Y` and `Z` stay zero in single subset modes.
    pub endpoints: [[u32; 3]; 4],
    /// Per pixel indices.
    pub indices: BlockIndices,
}

impl Bc6hBlock {
    /// Parses a block.
    ///
    /// # Errors
    ///
    /// [`DecodeError::ReservedBc6hMode`] when the block uses one of the reserved mode patterns.
    pub fn from_bytes(bytes: &[u8; 16]) -> Result<Self, DecodeError> {
        let mode = Bc6hMode::detect(bytes[0])?;
        let bits = BlockBits::from_bytes(bytes);

        let mut endpoints = [[0u32; 3]; 4];
        for (endpoint, components) in endpoints.iter_mut().enumerate().take(mode.subsets() * 2) {
            for (channel, component) in components.iter_mut().enumerate() {
                let parts = mode.field_parts(Field::from_parts(endpoint, channel));
                *component = bits.assemble(parts.as_slice()) as u32;
            }
        }

        let mut reader = bits.reader();
        reader.skip(mode.header_bits());

        let (partitions, shape) = if mode.subsets() == 2 {
            (1, reader.read(5) as u8)
        } else {
            (0, 0)
        };
        let indices =
            BlockIndices::read_with_fixups(&mut reader, mode.index_bits(), partitions, shape as usize);

        Ok(Self {
            mode,
            shape,
            endpoints,
            indices,
        })
    }

    /// Returns the endpoint components as integers, sign-extended at their own field width
    /// for [`Bc6hVariant::Sf16`].
    ///
    /// No delta transform is applied.
    pub fn component_values(&self, variant: Bc6hVariant) -> [[i32; 3]; 4] {
        let mut values = [[0i32; 3]; 4];
        for (endpoint, components) in values.iter_mut().enumerate().take(self.mode.subsets() * 2) {
            for (channel, value) in components.iter_mut().enumerate() {
                let raw = self.endpoints[endpoint][channel] as i32;
                *value = if variant.is_signed() {
                    sign_extend(raw, self.mode.field_width(Field::from_parts(endpoint, channel)))
                } else {
                    raw
                };
            }
        }
        values
    }

    /// Returns a [`Display`](fmt::Display) adapter printing the dump text of this block.
    #[inline]
    pub fn dump(self, variant: Bc6hVariant) -> Bc6hDump {
        Bc6hDump {
            block: Ok(self),
            variant,
        }
    }
}

/// Dump text of one BC6H block, including the reserved mode error line.
#[derive(Debug, Clone, Copy)]
pub struct Bc6hDump {
    block: Result<Bc6hBlock, DecodeError>,
    variant: Bc6hVariant,
}

impl Bc6hDump {
    /// Parses `bytes` for dumping. Reserved modes are kept and printed as an error line.
    pub fn new(bytes: &[u8; 16], variant: Bc6hVariant) -> Self {
        Self {
            block: Bc6hBlock::from_bytes(bytes),
            variant,
        }
    }

    /// Returns `true` if the block uses a reserved mode.
    #[inline]
    pub fn is_reserved(&self) -> bool {
        self.block.is_err()
    }
}

const ENDPOINT_LABELS_2: [&str; 4] = ["E0(A)", "E0(B)", "E1(A)", "E1(B)"];
const ENDPOINT_LABELS_1: [&str; 2] = ["E(A)", "E(B)"];

impl fmt::Display for Bc6hDump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let block = match self.block {
            Ok(block) => block,
            Err(DecodeError::ReservedBc6hMode(bits)) => {
                return writeln!(f, "\tERROR - Reserved mode {bits:05b}");
            }
            Err(error) => return writeln!(f, "\tERROR - {error}"),
        };

        let mode = block.mode;
        let labels: &[&str] = if mode.subsets() == 2 {
            writeln!(f, "\tMode {} - {} shape {}", mode.number, mode.label, block.shape)?;
            &ENDPOINT_LABELS_2
        } else {
            writeln!(f, "\tMode {} - {}", mode.number, mode.label)?;
            &ENDPOINT_LABELS_1
        };

        let values = block.component_values(self.variant);
        for (label, [r, g, b]) in labels.iter().zip(values) {
            writeln!(
                f,
                "\t         {label}: ({:04X}, {:04X}, {:04X})",
                r & 0xFFFF,
                g & 0xFFFF,
                b & 0xFFFF
            )?;
        }
        writeln!(f, "\t         Index: {}", block.indices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_prelude::*;
    use bcn_inspect_common::fixup::is_fixup_offset;
    use std::string::ToString;

    const PATTERNS: [u32; 3] = [0x5555_5555, 0xAAAA_AAAA, 0x1234_5678];

    /// Indices that use every bit each pixel has, narrowed at anchors.
    fn busy_indices(mode: &Bc6hMode, shape: u8) -> [u8; 16] {
        let partitions = mode.subsets() - 1;
        let bits = mode.index_bits();
        let mut indices = [0u8; 16];
        for (pixel, index) in indices.iter_mut().enumerate() {
            let width = if is_fixup_offset(partitions, shape as usize, pixel) {
                bits - 1
            } else {
                bits
            };
            *index = ((pixel as u32 * 5 + 3) & ((1 << width) - 1)) as u8;
        }
        indices
    }

    #[test]
    fn all_modes_reconstruct_every_endpoint_bit() {
        for mode in MODES.iter() {
            let endpoints = full_endpoints(mode);
            let shape = if mode.subsets() == 2 { 31 } else { 0 };
            let bytes = pack_block(mode, endpoints, shape, [0; 16]);
            let block = Bc6hBlock::from_bytes(&bytes).expect("valid mode");
            assert_eq!(block.mode.number, mode.number);
            assert_eq!(block.endpoints, endpoints, "mode {}", mode.number);
            assert_eq!(block.shape, shape);
            assert!(block.indices.values().iter().all(|&i| i == 0));
        }
    }

    #[test]
    fn all_modes_keep_fields_apart() {
        for mode in MODES.iter() {
            let full = full_endpoints(mode);
            for pattern in PATTERNS {
                let mut endpoints = full;
                for (endpoint, components) in endpoints.iter_mut().enumerate() {
                    for (channel, value) in components.iter_mut().enumerate() {
                        *value &= pattern.rotate_left((endpoint * 3 + channel) as u32);
                    }
                }
                for shape in [0u8, 13, 31] {
                    let shape = if mode.subsets() == 2 { shape } else { 0 };
                    let indices = busy_indices(mode, shape);
                    let block =
                        Bc6hBlock::from_bytes(&pack_block(mode, endpoints, shape, indices))
                            .expect("valid mode");
                    assert_eq!(block.endpoints, endpoints, "mode {}", mode.number);
                    assert_eq!(block.shape, shape, "mode {}", mode.number);
                    assert_eq!(block.indices.values(), &indices, "mode {}", mode.number);
                }
            }
        }
    }

    #[rstest]
    #[case(0x13, "10011")]
    #[case(0x17, "10111")]
    #[case(0x1B, "11011")]
    #[case(0x1F, "11111")]
    fn reserved_modes_dump_error_line(#[case] prefix: u8, #[case] pattern: &str) {
        let mut bytes = [0xFFu8; 16];
        bytes[0] = prefix;
        assert_eq!(
            Bc6hBlock::from_bytes(&bytes),
            Err(DecodeError::ReservedBc6hMode(prefix))
        );
        for variant in Bc6hVariant::all_values() {
            let dump = Bc6hDump::new(&bytes, *variant);
            assert!(dump.is_reserved());
            assert_eq!(
                dump.to_string(),
                std::format!("\tERROR - Reserved mode {pattern}\n")
            );
        }
    }

    fn mode_11_block() -> [u8; 16] {
        let mode = &MODES[10];
        let mut indices = [0u8; 16];
        for (pixel, index) in indices.iter_mut().enumerate().skip(1) {
            *index = pixel as u8;
        }
        pack_block(
            mode,
            [[0x3FF, 0x000, 0x155], [0x001, 0x002, 0x203], [0; 3], [0; 3]],
            0,
            indices,
        )
    }

    #[test]
    fn dumps_single_subset_unsigned() {
        let dump = Bc6hDump::new(&mode_11_block(), Bc6hVariant::Uf16);
        assert_eq!(
            dump.to_string(),
            "\tMode 11 - [10 10]\n\
             \t         E(A): (03FF, 0000, 0155)\n\
             \t         E(B): (0001, 0002, 0203)\n\
             \t         Index: 0 1 2 3 | 4 5 6 7 | 8 9 A B | C D E F\n"
        );
    }

    #[test]
    fn dumps_single_subset_signed() {
        let dump = Bc6hDump::new(&mode_11_block(), Bc6hVariant::Sf16);
        assert_eq!(
            dump.to_string(),
            "\tMode 11 - [10 10]\n\
             \t         E(A): (FFFF, 0000, 0155)\n\
             \t         E(B): (0001, 0002, FE03)\n\
             \t         Index: 0 1 2 3 | 4 5 6 7 | 8 9 A B | C D E F\n"
        );
    }

    #[test]
    fn dumps_two_subsets_with_shape() {
        let mode = &MODES[0];
        // 5-bit deltas: 0x10 is -16 when signed
        let endpoints = [[0x200, 0x001, 0x3FF], [0x10, 0x0F, 0x00], [1, 2, 3], [0x1F, 0, 0x10]];
        let bytes = pack_block(mode, endpoints, 2, [0; 16]);

        let text = Bc6hDump::new(&bytes, Bc6hVariant::Sf16).to_string();
        assert_eq!(
            text,
            "\tMode 1 - [10 5 5 5] shape 2\n\
             \t         E0(A): (FE00, 0001, FFFF)\n\
             \t         E0(B): (FFF0, 000F, 0000)\n\
             \t         E1(A): (0001, 0002, 0003)\n\
             \t         E1(B): (FFFF, 0000, FFF0)\n\
             \t         Index: 0 0 0 0 | 0 0 0 0 | 0 0 0 0 | 0 0 0 0\n"
        );

        let text = Bc6hDump::new(&bytes, Bc6hVariant::Uf16).to_string();
        assert!(text.contains("\t         E0(A): (0200, 0001, 03FF)\n"));
        assert!(text.contains("\t         E1(B): (001F, 0000, 0010)\n"));
    }

    #[test]
    fn component_values_leave_unused_endpoints_zero() {
        let block = Bc6hBlock::from_bytes(&mode_11_block()).expect("valid mode");
        let values = block.component_values(Bc6hVariant::Sf16);
        assert_eq!(values[2], [0; 3]);
        assert_eq!(values[3], [0; 3]);
    }
}
