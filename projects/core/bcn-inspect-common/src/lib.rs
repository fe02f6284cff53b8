#![doc = include_str!(concat!("../", core::env!("CARGO_PKG_README")))]
#![no_std]
#![warn(missing_docs)]

#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
pub mod test_prelude;

pub mod bits;
pub mod color_565;
pub mod color_8888;
pub mod color_f32;
pub mod decoded_4x4_block;
pub mod error;
pub mod fixup;
pub mod format;
pub mod image;
pub mod index;
pub mod partition;
