use crate::bc4_block::Bc4Block;
use crate::endpoint::Bc4Endpoint;
use core::fmt;

/// A parsed 16 byte BC5 block: two independent BC4 blocks.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Bc5Block<E: Bc4Endpoint> {
    /// Red channel.
    pub u: Bc4Block<E>,
    /// Green channel.
    pub v: Bc4Block<E>,
}

/// BC5 block with unsigned endpoints (`BC5_UNORM`).
pub type Bc5UBlock = Bc5Block<u8>;

/// BC5 block with signed endpoints (`BC5_SNORM`).
pub type Bc5SBlock = Bc5Block<i8>;

impl<E: Bc4Endpoint> Bc5Block<E> {
    /// Parses a block from its 16 bytes; the first 8 hold U, the last 8 hold V.
    #[inline]
    pub fn from_bytes(bytes: &[u8; 16]) -> Self {
        let (u, v) = bytes.split_at(8);
        let mut u_bytes = [0u8; 8];
        let mut v_bytes = [0u8; 8];
        u_bytes.copy_from_slice(u);
        v_bytes.copy_from_slice(v);
        Self {
            u: Bc4Block::from_bytes(&u_bytes),
            v: Bc4Block::from_bytes(&v_bytes),
        }
    }

    /// Histogram buckets for this block: U in 0/1, V in 2/3.
    #[inline]
    pub fn buckets(&self) -> [usize; 2] {
        [self.u.kind().bucket(), 2 + self.v.kind().bucket()]
    }
}

impl<E: Bc4Endpoint> fmt::Display for Bc5Block<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.u.write_lines(f, "U -   ", 3)?;
        self.v.write_lines(f, "V -   ", 3)
    }
}
