//! Utility functions for BC6H blocks.

mod bc6h_decode;

pub use bc6h_decode::{
    decode_bc6h_block, decode_bc6h_block_f16, finish_unquantize, resolve_endpoints, unquantize,
};
