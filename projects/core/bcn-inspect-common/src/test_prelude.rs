//! Common test imports and utilities for the shared crate's tests
//!
//! This module provides a common prelude for test modules to avoid
//! duplicate imports across the codebase.

// External crates commonly used in tests
pub use rstest::rstest;

// Block construction helpers commonly used in tests
pub use crate::bits::{BitReader, BitWriter, BlockBits};

// Re-export super for convenience in test modules
pub use super::*;
