//! Utility functions for BC3 blocks.

mod bc3_decode;

pub use bc3_decode::decode_bc3_block;
