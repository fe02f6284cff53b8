#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![warn(missing_docs)]

#[cfg(test)]
pub mod test_prelude;

mod analyze;
mod analyze_bc;
mod convert;
mod difference;
mod dump;
pub mod error;
mod float_image;
mod owned_image;

pub use analyze::{analyze, analyze_image, AnalyzeData};
pub use analyze_bc::{analyze_bc, AnalyzeBcData, AnalyzeBcSummary};
pub use convert::{decode_block, encode_float_image, to_float_image};
pub use difference::{difference, DifferenceImage};
pub use dump::{dump_bc_image, BlockBody, BlockReport, DumpFilter};
pub use error::{InspectError, InspectResult};
pub use float_image::FloatImage;
pub use owned_image::OwnedImage;
