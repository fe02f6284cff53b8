use crate::mode::{Bc7Mode, PBits, Rotation};
use bcn_inspect_common::bits::BitReader;
use bcn_inspect_common::error::DecodeError;
use bcn_inspect_common::index::BlockIndices;
use core::fmt;

/// A parsed 16 byte BC7 block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bc7Block {
    /// Detected mode.
    pub mode: &'static Bc7Mode,
    /// Partition number, 0 for single subset modes.
    pub partition: u8,
    /// Channel rotation, [`Rotation::None`] outside modes 4 and 5.
    pub rotation: Rotation,
    /// Index selector of mode 4: `true` gives colour the 3-bit indices.
    pub index_selection: bool,
    /// Stored endpoint components (RGBA) before P-bits are appended.
    /// Unused endpoints and the alpha of colour-only modes are zero.
    pub endpoints: [[u8; 4]; 6],
    /// Stored P-bits in block order; see [`Bc7Mode::pbits`] for how they map to endpoints.
    pub pbits: [u8; 6],
    /// Primary indices.
    pub indices: BlockIndices,
    /// Secondary indices of modes 4 and 5, zero otherwise.
    pub secondary_indices: BlockIndices,
}

impl Bc7Block {
    /// Parses a block.
    ///
    /// # Errors
    ///
    /// [`DecodeError::ReservedBc7Mode`] when the first byte is zero.
    pub fn from_bytes(bytes: &[u8; 16]) -> Result<Self, DecodeError> {
        let mode = Bc7Mode::detect(bytes[0])?;
        let mut reader = BitReader::new(bytes);
        reader.skip(mode.number as u32 + 1);

        let partition = reader.read(mode.partition_bits as u32) as u8;
        let rotation = Rotation::from_bits(reader.read(mode.rotation_bits as u32) as u8);
        let index_selection = reader.read(mode.index_selection_bits as u32) != 0;

        let count = mode.endpoint_count();
        let mut endpoints = [[0u8; 4]; 6];
        for channel in 0..4 {
            let bits = if channel == 3 {
                mode.alpha_bits
            } else {
                mode.color_bits
            };
            for endpoint in endpoints.iter_mut().take(count) {
                endpoint[channel] = reader.read(bits as u32) as u8;
            }
        }

        let mut pbits = [0u8; 6];
        for pbit in pbits.iter_mut().take(mode.pbit_count()) {
            *pbit = reader.read(1) as u8;
        }

        let indices = BlockIndices::read_with_fixups(
            &mut reader,
            mode.index_bits as u32,
            mode.subsets as usize - 1,
            partition as usize,
        );
        let secondary_indices = if mode.secondary_index_bits > 0 {
            BlockIndices::read_with_fixups(&mut reader, mode.secondary_index_bits as u32, 0, 0)
        } else {
            BlockIndices::default()
        };

        Ok(Self {
            mode,
            partition,
            rotation,
            index_selection,
            endpoints,
            pbits,
            indices,
            secondary_indices,
        })
    }

    /// Returns the P-bit applying to an endpoint, 0 when the mode has none.
    #[inline]
    pub fn endpoint_pbit(&self, endpoint: usize) -> u8 {
        match self.mode.pbits {
            PBits::None => 0,
            PBits::PerEndpoint => self.pbits[endpoint],
            PBits::PerSubset => self.pbits[endpoint / 2],
        }
    }

    /// Returns the endpoints with their P-bit appended as the new lowest bit.
    ///
    /// Components have [`Bc7Mode::color_precision`] and [`Bc7Mode::alpha_precision`] bits.
    pub fn reconstructed_endpoints(&self) -> [[u8; 4]; 6] {
        let mut reconstructed = self.endpoints;
        if self.mode.pbits == PBits::None {
            return reconstructed;
        }
        let channels = if self.mode.has_alpha() { 4 } else { 3 };
        for (endpoint, components) in reconstructed
            .iter_mut()
            .enumerate()
            .take(self.mode.endpoint_count())
        {
            let pbit = self.endpoint_pbit(endpoint);
            for component in components.iter_mut().take(channels) {
                *component = (*component << 1) | pbit;
            }
        }
        reconstructed
    }

    /// Returns the indices and their width used for the colour channels.
    #[inline]
    pub fn color_indices(&self) -> (&BlockIndices, u32) {
        if self.mode.secondary_index_bits > 0 && self.index_selection {
            (&self.secondary_indices, self.mode.secondary_index_bits as u32)
        } else {
            (&self.indices, self.mode.index_bits as u32)
        }
    }

    /// Returns the indices and their width used for the alpha channel.
    #[inline]
    pub fn alpha_indices(&self) -> (&BlockIndices, u32) {
        if self.mode.secondary_index_bits > 0 && !self.index_selection {
            (&self.secondary_indices, self.mode.secondary_index_bits as u32)
        } else {
            (&self.indices, self.mode.index_bits as u32)
        }
    }

    /// Returns a [`Display`](fmt::Display) adapter printing the dump text of this block.
    #[inline]
    pub fn dump(self) -> Bc7Dump {
        Bc7Dump { block: Ok(self) }
    }
}

/// Dump text of one BC7 block, including the reserved mode error line.
#[derive(Debug, Clone, Copy)]
pub struct Bc7Dump {
    block: Result<Bc7Block, DecodeError>,
}

impl Bc7Dump {
    /// Parses `bytes` for dumping. The reserved mode is kept and printed as an error line.
    pub fn new(bytes: &[u8; 16]) -> Self {
        Self {
            block: Bc7Block::from_bytes(bytes),
        }
    }

    /// Returns `true` if the block uses a reserved mode.
    #[inline]
    pub fn is_reserved(&self) -> bool {
        self.block.is_err()
    }
}

#[inline]
fn normalize(value: u8, bits: u32) -> f32 {
    value as f32 / ((1u32 << bits) - 1) as f32
}

impl fmt::Display for Bc7Dump {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let block = match self.block {
            Ok(block) => block,
            Err(_) => return writeln!(f, "\tERROR - Reserved mode 8"),
        };
        let mode = block.mode;

        write!(f, "\tMode {} - {}", mode.number, mode.label())?;
        if mode.partition_bits > 0 {
            write!(f, " partition {}", block.partition)?;
        }
        if mode.index_selection_bits > 0 {
            let width = if block.index_selection { "3-bit" } else { "2-bit" };
            write!(f, " indx mode {width},")?;
        }
        if mode.rotation_bits > 0 {
            write!(
                f,
                " rot-bits {}{}",
                block.rotation.bits(),
                block.rotation.label()
            )?;
        }
        writeln!(f)?;

        let endpoints = block.reconstructed_endpoints();
        let count = mode.endpoint_count();
        let color_bits = mode.color_precision();
        let color_label = if mode.has_alpha() { 'C' } else { 'E' };
        for (i, [r, g, b, _]) in endpoints.iter().take(count).enumerate() {
            writeln!(
                f,
                "\t         {color_label}{i}:({:.3}, {:.3}, {:.3})",
                normalize(*r, color_bits),
                normalize(*g, color_bits),
                normalize(*b, color_bits)
            )?;
        }

        if mode.has_alpha() {
            let alpha_bits = mode.alpha_precision();
            for (i, endpoint) in endpoints.iter().take(count).enumerate() {
                writeln!(f, "\t         A{i}:({:.3})", normalize(endpoint[3], alpha_bits))?;
            }
        }

        if mode.secondary_index_bits > 0 {
            writeln!(f, "\t    Colors: {}", block.color_indices().0)?;
            writeln!(f, "\t     Alpha: {}", block.alpha_indices().0)
        } else {
            writeln!(f, "\t      Index: {}", block.indices)
        }
    }
}
