use super::report_files;
use crate::util::{describe_image, parse_format};
use argh::FromArgs;
use bcn_inspect_api::analyze_bc;
use bcn_inspect_common::format::TextureFormat;
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Count block types and modes of raw BCn surfaces
#[argh(subcommand, name = "analyze-bc")]
pub struct AnalyzeBcCmd {
    /// compressed format of the files, e.g. BC7_UNORM
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

    /// raw surface files
    #[argh(positional)]
    pub files: Vec<PathBuf>,
}

pub fn handle_analyze_bc_command(cmd: AnalyzeBcCmd) -> Result<(), Box<dyn std::error::Error>> {
    report_files(&cmd.files, |bytes| {
        let image = describe_image(cmd.format, cmd.width, cmd.height, cmd.row_pitch, bytes);
        Ok(analyze_bc(&image)?.summary(cmd.format).to_string())
    });
    Ok(())
}
