//! Utility functions for BC4 and BC5 blocks.

mod bc4_decode;
mod bc5_decode;

pub use bc4_decode::{
    bc4_palette, bc4_unorm8_palette, decode_bc4_block, decode_bc4_unorm8_values,
    decode_bc4_values,
};
pub use bc5_decode::decode_bc5_block;
