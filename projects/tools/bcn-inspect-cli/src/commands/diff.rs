use crate::error::CliError;
use crate::util::{describe_image, parse_format, with_mapped_file, write_mapped_file};
use argh::FromArgs;
use bcn_inspect_api::{analyze, analyze_image, difference, encode_float_image, DifferenceImage};
use bcn_inspect_common::format::TextureFormat;
use std::path::PathBuf;
use tracing::info;

#[derive(FromArgs, Debug)]
/// Compute the per pixel absolute difference of two raw surfaces
#[argh(subcommand, name = "diff")]
pub struct DiffCmd {
    /// format of the first file
    #[argh(option, from_str_fn(parse_format))]
    pub format: TextureFormat,

    /// format of the second file [default: same as --format]
    #[argh(option, from_str_fn(parse_format))]
    pub format_b: Option<TextureFormat>,

    /// width in pixels of both files
    #[argh(option)]
    pub width: u32,

    /// height in pixels of both files
    #[argh(option)]
    pub height: u32,

    /// raw file to write the difference to
    #[argh(option)]
    pub output: Option<PathBuf>,

    /// uncompressed format of the written difference [default: R32G32B32A32_FLOAT]
    #[argh(
        option,
        from_str_fn(parse_format),
        default = "TextureFormat::R32G32B32A32_FLOAT"
    )]
    pub output_format: TextureFormat,

    /// first raw surface file
    #[argh(positional)]
    pub a: PathBuf,

    /// second raw surface file
    #[argh(positional)]
    pub b: PathBuf,
}

pub fn handle_diff_command(cmd: DiffCmd) -> Result<(), Box<dyn std::error::Error>> {
    let format_b = cmd.format_b.unwrap_or(cmd.format);
    let result = with_mapped_file(&cmd.a, |a| {
        with_mapped_file(&cmd.b, |b| {
            let a = describe_image(cmd.format, cmd.width, cmd.height, None, a);
            let b = describe_image(format_b, cmd.width, cmd.height, None, b);
            difference(&a, &b, cmd.output_format).map_err(CliError::from)
        })
        .map_err(|e| e.in_file(&cmd.b))
    })
    .map_err(|e| e.in_file(&cmd.a))?;

    let stats = match &result {
        DifferenceImage::Float(image) => analyze(image),
        DifferenceImage::Encoded(image) => analyze_image(&image.as_image())?,
    };
    println!("{} vs {}", cmd.a.display(), cmd.b.display());
    match stats {
        Some(stats) => print!("{stats}"),
        None => println!("\tNo pixels"),
    }

    if let Some(output) = &cmd.output {
        let bytes = match result {
            DifferenceImage::Float(image) => encode_float_image(&image, cmd.output_format)?.pixels,
            DifferenceImage::Encoded(image) => image.pixels,
        };
        write_mapped_file(output, &bytes)?;
        info!(path = %output.display(), format = %cmd.output_format, "wrote difference");
    }
    Ok(())
}
