#![no_main]

// Feeds arbitrary surfaces through classification, dumping and statistics.
// Only errors are allowed; nothing may panic or read out of bounds.

use bcn_inspect_api::{analyze_bc, analyze_image, dump_bc_image, DumpFilter};
use bcn_inspect_common::format::TextureFormat;
use bcn_inspect_common::image::Image;
use libfuzzer_sys::{arbitrary, fuzz_target};

#[derive(Clone, Debug, arbitrary::Arbitrary)]
pub struct Surface {
    pub format: u8,
    pub width: u8,
    pub height: u8,
    pub row_pitch: Option<u16>,
    pub pixel_x: Option<u8>,
    pub data: Vec<u8>,
}

fuzz_target!(|surface: Surface| {
    let formats = TextureFormat::all_values();
    let format = formats[surface.format as usize % formats.len()];
    let (width, height) = (surface.width as u32, surface.height as u32);
    let image = match surface.row_pitch {
        Some(pitch) => Image::with_row_pitch(format, width, height, pitch as usize, &surface.data),
        None => Image::new(format, width, height, &surface.data),
    };

    if let Ok(data) = analyze_bc(&image) {
        let total: usize = data.histogram.iter().sum();
        assert!(total <= data.blocks);
    }
    let filter = DumpFilter {
        pixel_x: surface.pixel_x.map(u32::from),
        pixel_y: None,
    };
    let _ = dump_bc_image(&image, filter);
    let _ = analyze_image(&image);
});
