//! Utility functions for BC1 blocks.

mod bc1_decode;

pub use bc1_decode::{bc1_palette, decode_bc1_block, decode_bc1_color};
