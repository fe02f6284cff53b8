//! Texture formats understood by the inspector.
//!
//! Names follow the DXGI spelling so that values printed by other tools can be pasted in
//! directly. Parsing ignores case and accepts an optional `DXGI_FORMAT_` prefix.

use core::fmt;
use core::str::FromStr;
use derive_enum_all_values::AllValues;
use thiserror::Error;

/// A pixel or block format.
#[allow(non_camel_case_types)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AllValues)]
pub enum TextureFormat {
    /// BC1, 4 or 3 colours with 1-bit alpha.
    BC1_UNORM,
    /// BC1 with sRGB colour.
    BC1_UNORM_SRGB,
    /// BC2, BC1 colour plus explicit 4-bit alpha.
    BC2_UNORM,
    /// BC2 with sRGB colour.
    BC2_UNORM_SRGB,
    /// BC3, BC1 colour plus interpolated alpha.
    BC3_UNORM,
    /// BC3 with sRGB colour.
    BC3_UNORM_SRGB,
    /// BC4, single unsigned channel.
    BC4_UNORM,
    /// BC4, single signed channel.
    BC4_SNORM,
    /// BC5, two unsigned channels.
    BC5_UNORM,
    /// BC5, two signed channels.
    BC5_SNORM,
    /// BC6H, unsigned half float RGB.
    BC6H_UF16,
    /// BC6H, signed half float RGB.
    BC6H_SF16,
    /// BC7, RGBA with 8 modes.
    BC7_UNORM,
    /// BC7 with sRGB colour.
    BC7_UNORM_SRGB,
    /// One 8-bit unsigned normalised channel.
    R8_UNORM,
    /// Two 8-bit unsigned normalised channels.
    R8G8_UNORM,
    /// 8-bit RGBA.
    R8G8B8A8_UNORM,
    /// 8-bit RGBA with sRGB colour.
    R8G8B8A8_UNORM_SRGB,
    /// 8-bit BGRA.
    B8G8R8A8_UNORM,
    /// 16-bit unsigned normalised RGBA.
    R16G16B16A16_UNORM,
    /// Half float RGBA.
    R16G16B16A16_FLOAT,
    /// One 32-bit float channel.
    R32_FLOAT,
    /// 32-bit float RGBA.
    R32G32B32A32_FLOAT,
}

/// Returned when a string does not name a known [`TextureFormat`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Unknown texture format")]
pub struct ParseFormatError;

impl TextureFormat {
    /// The DXGI name without the `DXGI_FORMAT_` prefix.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::BC1_UNORM => "BC1_UNORM",
            Self::BC1_UNORM_SRGB => "BC1_UNORM_SRGB",
            Self::BC2_UNORM => "BC2_UNORM",
            Self::BC2_UNORM_SRGB => "BC2_UNORM_SRGB",
            Self::BC3_UNORM => "BC3_UNORM",
            Self::BC3_UNORM_SRGB => "BC3_UNORM_SRGB",
            Self::BC4_UNORM => "BC4_UNORM",
            Self::BC4_SNORM => "BC4_SNORM",
            Self::BC5_UNORM => "BC5_UNORM",
            Self::BC5_SNORM => "BC5_SNORM",
            Self::BC6H_UF16 => "BC6H_UF16",
            Self::BC6H_SF16 => "BC6H_SF16",
            Self::BC7_UNORM => "BC7_UNORM",
            Self::BC7_UNORM_SRGB => "BC7_UNORM_SRGB",
            Self::R8_UNORM => "R8_UNORM",
            Self::R8G8_UNORM => "R8G8_UNORM",
            Self::R8G8B8A8_UNORM => "R8G8B8A8_UNORM",
            Self::R8G8B8A8_UNORM_SRGB => "R8G8B8A8_UNORM_SRGB",
            Self::B8G8R8A8_UNORM => "B8G8R8A8_UNORM",
            Self::R16G16B16A16_UNORM => "R16G16B16A16_UNORM",
            Self::R16G16B16A16_FLOAT => "R16G16B16A16_FLOAT",
            Self::R32_FLOAT => "R32_FLOAT",
            Self::R32G32B32A32_FLOAT => "R32G32B32A32_FLOAT",
        }
    }

    /// Size of one 4x4 block in bytes, or [`None`] for uncompressed formats.
    pub const fn block_size(&self) -> Option<usize> {
        match self {
            Self::BC1_UNORM | Self::BC1_UNORM_SRGB | Self::BC4_UNORM | Self::BC4_SNORM => Some(8),
            Self::BC2_UNORM
            | Self::BC2_UNORM_SRGB
            | Self::BC3_UNORM
            | Self::BC3_UNORM_SRGB
            | Self::BC5_UNORM
            | Self::BC5_SNORM
            | Self::BC6H_UF16
            | Self::BC6H_SF16
            | Self::BC7_UNORM
            | Self::BC7_UNORM_SRGB => Some(16),
            _ => None,
        }
    }

    /// Size of one pixel in bytes, or [`None`] for block compressed formats.
    pub const fn bytes_per_pixel(&self) -> Option<usize> {
        match self {
            Self::R8_UNORM => Some(1),
            Self::R8G8_UNORM => Some(2),
            Self::R8G8B8A8_UNORM
            | Self::R8G8B8A8_UNORM_SRGB
            | Self::B8G8R8A8_UNORM
            | Self::R32_FLOAT => Some(4),
            Self::R16G16B16A16_UNORM | Self::R16G16B16A16_FLOAT => Some(8),
            Self::R32G32B32A32_FLOAT => Some(16),
            _ => None,
        }
    }

    /// Returns `true` for the BCn formats.
    #[inline]
    pub const fn is_compressed(&self) -> bool {
        self.block_size().is_some()
    }

    /// Returns `true` if the colour channels are stored sRGB encoded.
    pub const fn is_srgb(&self) -> bool {
        matches!(
            self,
            Self::BC1_UNORM_SRGB
                | Self::BC2_UNORM_SRGB
                | Self::BC3_UNORM_SRGB
                | Self::BC7_UNORM_SRGB
                | Self::R8G8B8A8_UNORM_SRGB
        )
    }

    /// Tightly packed distance in bytes between two rows, of blocks for compressed formats
    /// and of pixels otherwise.
    ///
    /// ```
    /// use bcn_inspect_common::format::TextureFormat;
    ///
    /// assert_eq!(TextureFormat::BC1_UNORM.default_row_pitch(10), 24);
    /// assert_eq!(TextureFormat::R8G8B8A8_UNORM.default_row_pitch(10), 40);
    /// ```
    pub const fn default_row_pitch(&self, width: u32) -> usize {
        match (self.block_size(), self.bytes_per_pixel()) {
            (Some(block), _) => (width as usize).div_ceil(4) * block,
            (None, Some(pixel)) => width as usize * pixel,
            (None, None) => 0,
        }
    }

    /// Number of rows (block rows for compressed formats) covering `height` pixels.
    pub const fn row_count(&self, height: u32) -> usize {
        if self.is_compressed() {
            (height as usize).div_ceil(4)
        } else {
            height as usize
        }
    }
}

impl fmt::Display for TextureFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TextureFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const PREFIX: &str = "DXGI_FORMAT_";
        let trimmed = s.trim();
        let name = match trimmed.get(..PREFIX.len()) {
            Some(head) if head.eq_ignore_ascii_case(PREFIX) => &trimmed[PREFIX.len()..],
            _ => trimmed,
        };

        Self::all_values()
            .iter()
            .copied()
            .find(|format| format.name().eq_ignore_ascii_case(name))
            .ok_or(ParseFormatError)
    }
}
