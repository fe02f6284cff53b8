//! Per-block field dump of compressed images.

use crate::convert::{block_array, validate};
use crate::error::{InspectError, InspectResult};
use bcn_inspect_bc1::Bc1Block;
use bcn_inspect_bc2::Bc2Block;
use bcn_inspect_bc3::Bc3Block;
use bcn_inspect_bc4::{Bc4SBlock, Bc4UBlock, Bc5SBlock, Bc5UBlock};
use bcn_inspect_bc6h::{Bc6hDump, Bc6hVariant};
use bcn_inspect_bc7::Bc7Dump;
use bcn_inspect_common::format::TextureFormat;
use bcn_inspect_common::image::Image;
use core::fmt;
use tracing::{debug, warn};

/// Restricts a dump to the blocks covering a pixel column and/or row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DumpFilter {
    /// Keep only blocks whose 4 pixel wide column contains this x.
    pub pixel_x: Option<u32>,
    /// Keep only blocks whose 4 pixel high row contains this y.
    pub pixel_y: Option<u32>,
}

impl DumpFilter {
    #[inline]
    fn keeps(pixel: Option<u32>, start: usize) -> bool {
        pixel.is_none_or(|pixel| (start..start + 4).contains(&(pixel as usize)))
    }
}

/// Decoded fields of one block, printed in the format's dump layout.
#[derive(Debug, Clone, Copy)]
pub enum BlockBody {
    /// BC1 colour block.
    Bc1(Bc1Block),
    /// BC2 colour and explicit alpha.
    Bc2(Bc2Block),
    /// BC3 colour and interpolated alpha.
    Bc3(Bc3Block),
    /// Unsigned BC4.
    Bc4U(Bc4UBlock),
    /// Signed BC4.
    Bc4S(Bc4SBlock),
    /// Unsigned BC5.
    Bc5U(Bc5UBlock),
    /// Signed BC5.
    Bc5S(Bc5SBlock),
    /// BC6H, possibly reserved.
    Bc6h(Bc6hDump),
    /// BC7, possibly reserved.
    Bc7(Bc7Dump),
}

impl BlockBody {
    /// Parses one block of `format`.
    ///
    /// # Errors
    ///
    /// - [`InspectError::UnsupportedFormat`] if `format` is not block compressed.
    /// - [`InspectError::BufferTooSmall`] if `bytes` is shorter than a block.
    pub fn parse(format: TextureFormat, bytes: &[u8]) -> InspectResult<Self> {
        use TextureFormat::*;
        Ok(match format {
            BC1_UNORM | BC1_UNORM_SRGB => Self::Bc1(Bc1Block::from_bytes(block_array(bytes)?)),
            BC2_UNORM | BC2_UNORM_SRGB => Self::Bc2(Bc2Block::from_bytes(block_array(bytes)?)),
            BC3_UNORM | BC3_UNORM_SRGB => Self::Bc3(Bc3Block::from_bytes(block_array(bytes)?)),
            BC4_UNORM => Self::Bc4U(Bc4UBlock::from_bytes(block_array(bytes)?)),
            BC4_SNORM => Self::Bc4S(Bc4SBlock::from_bytes(block_array(bytes)?)),
            BC5_UNORM => Self::Bc5U(Bc5UBlock::from_bytes(block_array(bytes)?)),
            BC5_SNORM => Self::Bc5S(Bc5SBlock::from_bytes(block_array(bytes)?)),
            BC6H_UF16 => Self::Bc6h(Bc6hDump::new(block_array(bytes)?, Bc6hVariant::Uf16)),
            BC6H_SF16 => Self::Bc6h(Bc6hDump::new(block_array(bytes)?, Bc6hVariant::Sf16)),
            BC7_UNORM | BC7_UNORM_SRGB => Self::Bc7(Bc7Dump::new(block_array(bytes)?)),
            _ => return Err(InspectError::UnsupportedFormat(format)),
        })
    }

    /// Returns `true` for BC6H and BC7 blocks in a reserved mode.
    pub fn is_reserved(&self) -> bool {
        match self {
            Self::Bc6h(dump) => dump.is_reserved(),
            Self::Bc7(dump) => dump.is_reserved(),
            _ => false,
        }
    }
}

impl fmt::Display for BlockBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bc1(block) => write!(f, "{block}"),
            Self::Bc2(block) => write!(f, "{block}"),
            Self::Bc3(block) => write!(f, "{block}"),
            Self::Bc4U(block) => write!(f, "{block}"),
            Self::Bc4S(block) => write!(f, "{block}"),
            Self::Bc5U(block) => write!(f, "{block}"),
            Self::Bc5S(block) => write!(f, "{block}"),
            Self::Bc6h(dump) => write!(f, "{dump}"),
            Self::Bc7(dump) => write!(f, "{dump}"),
        }
    }
}

/// One dumped block.
#[derive(Debug, Clone, Copy)]
pub struct BlockReport {
    /// Position of the block in storage order, counting filtered out blocks of kept rows.
    pub index: usize,
    /// Pixel x of the block's top left corner.
    pub x: usize,
    /// Pixel y of the block's top left corner.
    pub y: usize,
    /// The block's fields.
    pub body: BlockBody,
}

impl fmt::Display for BlockReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "   Block {} (pixel: {} x {})", self.index, self.x, self.y)?;
        write!(f, "{}", self.body)
    }
}

/// Parses every block of `image` that passes `filter`.
///
/// Block rows are walked across the full row pitch. Block indices advance for every block of
/// a row that passes the y filter, including blocks the x filter drops; rows dropped by the
/// y filter do not advance the index.
///
/// # Errors
///
/// - [`InspectError::UnsupportedFormat`] if the image is not block compressed.
/// - [`InspectError::NullBuffer`] or [`InspectError::BufferTooSmall`] if the pixel buffer
///   does not cover every block row.
///
/// # Examples
///
/// ```
/// use bcn_inspect_api::{dump_bc_image, DumpFilter};
/// use bcn_inspect_common::format::TextureFormat;
/// use bcn_inspect_common::image::Image;
///
/// let data = [0u8; 16];
/// let image = Image::new(TextureFormat::BC7_UNORM, 4, 4, &data);
/// let reports = dump_bc_image(&image, DumpFilter::default()).unwrap();
/// assert_eq!(
///     reports[0].to_string(),
///     "   Block 0 (pixel: 0 x 0)\n\tERROR - Reserved mode 8\n"
/// );
/// ```
pub fn dump_bc_image(image: &Image, filter: DumpFilter) -> InspectResult<Vec<BlockReport>> {
    let format = image.format;
    debug!(%format, width = image.width, height = image.height, ?filter, "dumping blocks");
    let Some(block_size) = format.block_size() else {
        return Err(InspectError::UnsupportedFormat(format));
    };
    validate(image)?;

    let mut reports = Vec::new();
    let mut index = 0usize;
    for row in 0..format.row_count(image.height) {
        let y = row * 4;
        if !DumpFilter::keeps(filter.pixel_y, y) {
            continue;
        }
        let Some(bytes) = image.row(row) else {
            break;
        };
        for (column, block) in bytes.chunks_exact(block_size).enumerate() {
            let x = column * 4;
            let block_index = index;
            index += 1;
            if !DumpFilter::keeps(filter.pixel_x, x) {
                continue;
            }

            let body = BlockBody::parse(format, block)?;
            if body.is_reserved() {
                warn!(%format, block = block_index, x, y, "reserved mode block");
            }
            reports.push(BlockReport {
                index: block_index,
                x,
                y,
                body,
            });
        }
    }
    Ok(reports)
}
