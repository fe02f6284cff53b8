//! Utility functions for BC7 blocks.

mod bc7_decode;

pub use bc7_decode::{decode_bc7, decode_bc7_block, expand_endpoints, promote};
