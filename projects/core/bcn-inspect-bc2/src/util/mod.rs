//! Utility functions for BC2 blocks.

mod bc2_decode;

pub use bc2_decode::decode_bc2_block;
