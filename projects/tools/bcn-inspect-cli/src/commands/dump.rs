use crate::error::CliError;
use crate::util::{describe_image, parse_format, with_mapped_file};
use argh::FromArgs;
use bcn_inspect_api::{dump_bc_image, DumpFilter};
use bcn_inspect_common::format::TextureFormat;
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Print the fields of every block of a raw BCn surface
#[argh(subcommand, name = "dump")]
pub struct DumpCmd {
    /// compressed format of the file, e.g. BC6H_SF16
    #[argh(option, from_str_fn(parse_format))]
    pub format: TextureFormat,

    /// width in pixels
    #[argh(option)]
    pub width: u32,

    /// height in pixels
    #[argh(option)]
    pub height: u32,

    /// bytes per block row [default: tightly packed]
    #[argh(option)]
    pub row_pitch: Option<usize>,

    /// only dump the block column containing this pixel x
    #[argh(option)]
    pub pixel_x: Option<u32>,

    /// only dump the block row containing this pixel y
    #[argh(option)]
    pub pixel_y: Option<u32>,

    /// raw surface file
    #[argh(positional)]
    pub file: PathBuf,
}

pub fn handle_dump_command(cmd: DumpCmd) -> Result<(), Box<dyn std::error::Error>> {
    let filter = DumpFilter {
        pixel_x: cmd.pixel_x,
        pixel_y: cmd.pixel_y,
    };

    let reports = with_mapped_file(&cmd.file, |bytes| {
        let image = describe_image(cmd.format, cmd.width, cmd.height, cmd.row_pitch, bytes);
        dump_bc_image(&image, filter).map_err(CliError::from)
    })
    .map_err(|e| e.in_file(&cmd.file))?;

    println!("{}", cmd.file.display());
    for report in &reports {
        print!("{report}");
    }
    Ok(())
}
