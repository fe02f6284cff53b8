//! Block classification: counts the blocks of a compressed image per sub-mode.

use crate::convert::{block_array, validate};
use crate::error::{InspectError, InspectResult};
use bcn_inspect_bc1::{Bc1Block, Bc1BlockKind};
use bcn_inspect_bc3::Bc3Block;
use bcn_inspect_bc4::{Bc4SBlock, Bc4UBlock, Bc5SBlock, Bc5UBlock};
use bcn_inspect_bc6h::Bc6hMode;
use bcn_inspect_bc7::Bc7Mode;
use bcn_inspect_common::format::TextureFormat;
use bcn_inspect_common::image::Image;
use core::fmt;
use tracing::{debug, warn};

/// Histogram bucket for reserved BC6H modes.
const BC6H_RESERVED_BUCKET: usize = 0;
/// Histogram bucket for the reserved BC7 mode 8.
const BC7_RESERVED_BUCKET: usize = 8;
/// Width the BC1 kind labels of a summary are right aligned to.
const BC1_LABEL_WIDTH: usize = 19;

/// Block counts of a compressed image.
///
/// The meaning of each histogram bucket depends on the format:
///
/// | Format | Buckets |
/// |--------|---------|
/// | BC1    | 0: 4 colour, 1: 3 colour |
/// | BC2    | none |
/// | BC3    | 0: 8 alpha, 1: 6 alpha |
/// | BC4    | 0: 8 red, 1: 6 red |
/// | BC5    | 0: 8 red, 1: 6 red, 2: 8 green, 3: 6 green |
/// | BC6H   | 1..=14: mode, 0: reserved |
/// | BC7    | 0..=7: mode, 8: reserved |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnalyzeBcData {
    /// Number of blocks visited.
    pub blocks: usize,
    /// Per sub-mode block counts.
    pub histogram: [usize; 15],
}

impl AnalyzeBcData {
    /// Returns a [`Display`](fmt::Display) adapter printing the counts as labelled lines
    /// for `format`.
    #[inline]
    pub fn summary(&self, format: TextureFormat) -> AnalyzeBcSummary<'_> {
        AnalyzeBcSummary { data: self, format }
    }
}

/// Counts the blocks of `image` per sub-mode.
///
/// Every block row covering the image height is walked across its full row pitch, so padding
/// blocks at the end of a row are counted too. When the row pitch is not a multiple of the
/// block size, the partial block left at the end of each row is skipped.
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
/// use bcn_inspect_api::analyze_bc;
/// use bcn_inspect_common::format::TextureFormat;
/// use bcn_inspect_common::image::Image;
///
/// // Two BC7 mode 6 blocks
/// let mut data = [0u8; 32];
/// data[0] = 0x40;
/// data[16] = 0x40;
/// let stats = analyze_bc(&Image::new(TextureFormat::BC7_UNORM, 8, 4, &data)).unwrap();
/// assert_eq!(stats.blocks, 2);
/// assert_eq!(stats.histogram[6], 2);
/// ```
pub fn analyze_bc(image: &Image) -> InspectResult<AnalyzeBcData> {
    let format = image.format;
    debug!(%format, width = image.width, height = image.height, "classifying blocks");
    let Some(block_size) = format.block_size() else {
        return Err(InspectError::UnsupportedFormat(format));
    };
    validate(image)?;

    let mut result = AnalyzeBcData::default();
    let mut reserved = 0usize;
    for row in 0..format.row_count(image.height) {
        let Some(bytes) = image.row(row) else {
            break;
        };
        for block in bytes.chunks_exact(block_size) {
            result.blocks += 1;
            if !classify(format, block, &mut result.histogram)? {
                reserved += 1;
            }
        }
    }

    if reserved > 0 {
        warn!(%format, reserved, "image contains reserved mode blocks");
    }
    Ok(result)
}

/// Adds one block to `histogram`. Returns `false` if the block uses a reserved mode.
fn classify(format: TextureFormat, block: &[u8], histogram: &mut [usize; 15]) -> InspectResult<bool> {
    use TextureFormat::*;
    match format {
        BC1_UNORM | BC1_UNORM_SRGB => {
            histogram[Bc1Block::from_bytes(block_array(block)?).kind().bucket()] += 1;
        }
        BC2_UNORM | BC2_UNORM_SRGB => {}
        BC3_UNORM | BC3_UNORM_SRGB => {
            histogram[Bc3Block::from_bytes(block_array(block)?).kind().bucket()] += 1;
        }
        BC4_UNORM => histogram[Bc4UBlock::from_bytes(block_array(block)?).kind().bucket()] += 1,
        BC4_SNORM => histogram[Bc4SBlock::from_bytes(block_array(block)?).kind().bucket()] += 1,
        BC5_UNORM => {
            for bucket in Bc5UBlock::from_bytes(block_array(block)?).buckets() {
                histogram[bucket] += 1;
            }
        }
        BC5_SNORM => {
            for bucket in Bc5SBlock::from_bytes(block_array(block)?).buckets() {
                histogram[bucket] += 1;
            }
        }
        BC6H_UF16 | BC6H_SF16 => match Bc6hMode::detect(block[0]) {
            Ok(mode) => histogram[mode.bucket()] += 1,
            Err(_) => {
                histogram[BC6H_RESERVED_BUCKET] += 1;
                return Ok(false);
            }
        },
        BC7_UNORM | BC7_UNORM_SRGB => match Bc7Mode::detect(block[0]) {
            Ok(mode) => histogram[mode.bucket()] += 1,
            Err(_) => {
                histogram[BC7_RESERVED_BUCKET] += 1;
                return Ok(false);
            }
        },
        _ => return Err(InspectError::UnsupportedFormat(format)),
    }
    Ok(true)
}

/// Labelled block counts for one format, see [`AnalyzeBcData::summary`].
///
/// ```text
///         Compression - BC1_UNORM
///        Total blocks - 4096
///      4 color blocks - 4000
///      3 color blocks - 96
/// ```
#[derive(Debug, Clone, Copy)]
pub struct AnalyzeBcSummary<'a> {
    data: &'a AnalyzeBcData,
    format: TextureFormat,
}

impl fmt::Display for AnalyzeBcSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use TextureFormat::*;
        let histogram = &self.data.histogram;
        writeln!(f, "\t        Compression - {}", self.format)?;
        writeln!(f, "\t       Total blocks - {}", self.data.blocks)?;

        let labels: &[&str] = match self.format {
            BC1_UNORM | BC1_UNORM_SRGB => {
                for kind in Bc1BlockKind::all_values() {
                    let count = histogram[kind.bucket()];
                    writeln!(f, "\t{:>width$} - {count}", kind.label(), width = BC1_LABEL_WIDTH)?;
                }
                return Ok(());
            }
            BC3_UNORM | BC3_UNORM_SRGB => &["     8 alpha blocks", "     6 alpha blocks"],
            BC4_UNORM | BC4_SNORM => &["     8 red blocks", "     6 red blocks"],
            BC5_UNORM | BC5_SNORM => &[
                "     8 red blocks",
                "     6 red blocks",
                "   8 green blocks",
                "   6 green blocks",
            ],
            BC6H_UF16 | BC6H_SF16 => {
                return write_modes(f, histogram, 1..=14, BC6H_RESERVED_BUCKET);
            }
            BC7_UNORM | BC7_UNORM_SRGB => {
                return write_modes(f, histogram, 0..=7, BC7_RESERVED_BUCKET);
            }
            _ => &[],
        };
        for (label, count) in labels.iter().zip(histogram) {
            writeln!(f, "\t{label} - {count}")?;
        }
        Ok(())
    }
}

/// Prints non-zero mode buckets, then the reserved bucket if non-zero.
fn write_modes(
    f: &mut fmt::Formatter<'_>,
    histogram: &[usize; 15],
    modes: core::ops::RangeInclusive<usize>,
    reserved: usize,
) -> fmt::Result {
    for mode in modes {
        if histogram[mode] > 0 {
            writeln!(f, "\t     Mode {mode:02} blocks - {}", histogram[mode])?;
        }
    }
    if histogram[reserved] > 0 {
        writeln!(f, "\tReserved mode blocks - {}", histogram[reserved])?;
    }
    Ok(())
}
