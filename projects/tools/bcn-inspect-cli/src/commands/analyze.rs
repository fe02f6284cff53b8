use super::report_files;
use crate::util::{describe_image, parse_format};
use argh::FromArgs;
use bcn_inspect_api::analyze_image;
use bcn_inspect_common::format::TextureFormat;
use std::path::PathBuf;

#[derive(FromArgs, Debug)]
/// Print per channel pixel statistics of raw surfaces
#[argh(subcommand, name = "analyze")]
pub struct AnalyzeCmd {
    /// format of the files, compressed or not, e.g. R8G8B8A8_UNORM
    #[argh(option, from_str_fn(parse_format))]
    pub format: TextureFormat,

    /// width in pixels
    #[argh(option)]
    pub width: u32,

    /// height in pixels
    #[argh(option)]
    pub height: u32,

    /// bytes per row [default: tightly packed]
    #[argh(option)]
    pub row_pitch: Option<usize>,

    /// raw surface files
    #[argh(positional)]
    pub files: Vec<PathBuf>,
}

pub fn handle_analyze_command(cmd: AnalyzeCmd) -> Result<(), Box<dyn std::error::Error>> {
    report_files(&cmd.files, |bytes| {
        let image = describe_image(cmd.format, cmd.width, cmd.height, cmd.row_pitch, bytes);
        Ok(match analyze_image(&image)? {
            Some(stats) => stats.to_string(),
            None => String::from("\tNo pixels\n"),
        })
    });
    Ok(())
}
