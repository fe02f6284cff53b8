#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
pub mod test_prelude;

mod block;
mod mode;
pub mod util;

pub use block::{Bc7Block, Bc7Dump};
pub use mode::{Bc7Mode, ModeLabel, PBits, Rotation, MODES};
