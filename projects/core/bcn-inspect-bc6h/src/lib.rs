#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
pub mod test_prelude;

mod block;
pub mod layout;
mod mode;
pub mod util;

pub use block::{Bc6hBlock, Bc6hDump};
pub use mode::{Bc6hMode, Bc6hVariant, MODES};
