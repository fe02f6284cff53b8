#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
pub mod test_prelude;

mod bc4_block;
mod bc5_block;
mod endpoint;
pub mod util;

pub use bc4_block::{Bc4Block, Bc4BlockKind, Bc4SBlock, Bc4UBlock};
pub use bc5_block::{Bc5Block, Bc5SBlock, Bc5UBlock};
pub use endpoint::Bc4Endpoint;
