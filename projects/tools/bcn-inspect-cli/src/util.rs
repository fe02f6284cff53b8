use crate::error::CliError;
use bcn_inspect_common::format::TextureFormat;
use bcn_inspect_common::image::Image;
use lightweight_mmap::handles::*;
use lightweight_mmap::mmap::*;
use std::path::Path;

/// Memory maps `path` read-only and hands its contents to `f`.
///
/// Empty files are passed as an empty slice without creating a mapping.
pub fn with_mapped_file<T>(
    path: &Path,
    f: impl FnOnce(&[u8]) -> Result<T, CliError>,
) -> Result<T, CliError> {
    let handle =
        ReadOnlyFileHandle::open(path).map_err(|e| CliError::Mmap(e.to_string()))?;
    let len = handle
        .size()
        .map_err(|e| CliError::Mmap(e.to_string()))? as usize;
    if len == 0 {
        return f(&[]);
    }

    let mapping = ReadOnlyMmap::new(&handle, 0, len).map_err(|e| CliError::Mmap(e.to_string()))?;
    f(mapping.as_slice())
}

/// Writes `bytes` to a new file at `path` through a read-write mapping.
pub fn write_mapped_file(path: &Path, bytes: &[u8]) -> Result<(), CliError> {
    let handle = ReadWriteFileHandle::create_preallocated(path, bytes.len() as i64)
        .map_err(|e| CliError::Mmap(e.to_string()))?;
    if bytes.is_empty() {
        return Ok(());
    }

    let mut mapping =
        ReadWriteMmap::new(&handle, 0, bytes.len()).map_err(|e| CliError::Mmap(e.to_string()))?;
    mapping.as_mut_slice().copy_from_slice(bytes);
    Ok(())
}

/// Describes `pixels` as an image, using the tightly packed pitch unless one is given.
pub fn describe_image(
    format: TextureFormat,
    width: u32,
    height: u32,
    row_pitch: Option<usize>,
    pixels: &[u8],
) -> Image<'_> {
    match row_pitch {
        Some(row_pitch) => Image::with_row_pitch(format, width, height, row_pitch, pixels),
        None => Image::new(format, width, height, pixels),
    }
}

/// Parses a format name, with or without the `DXGI_FORMAT_` prefix.
pub fn parse_format(value: &str) -> Result<TextureFormat, String> {
    value
        .parse()
        .map_err(|_| format!("Unknown texture format: {value}. Use a DXGI name such as BC7_UNORM"))
}

/// Prints an error from processing one file to stderr.
pub fn handle_file_error(path: &Path, result: Result<(), CliError>) {
    if let Err(e) = result {
        match e {
            CliError::File { .. } => eprintln!("{e}"),
            _ => eprintln!("{}: {e}", path.display()),
        }
    }
}
