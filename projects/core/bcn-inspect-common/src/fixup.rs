//! Fix-up index positions for the partitioned BC6H and BC7 modes.
//!
//! For every subset of a partitioned block, the index of one pixel (the "fix-up" or anchor
//! pixel) is stored with one bit fewer than the others, because the encoder guarantees its
//! most significant bit is zero. Subset 0 always anchors at pixel 0; the other subsets anchor
//! at the positions listed here.
//!
//! The table is indexed as `[partitions][shape][subset]`, where `partitions` is the number
//! of subsets minus one.

/// Anchor pixel positions, indexed by `[subsets - 1][shape][subset]`.
#[rustfmt::skip]
pub const FIXUP_TABLE: [[[u8; 3]; 64]; 3] = [
    // Single subset: only pixel 0
    [[0, 0, 0]; 64],
    // BC6H/BC7 2 subsets
    [
        [0, 15, 0], [0, 15, 0], [0, 15, 0], [0, 15, 0],
        [0, 15, 0], [0, 15, 0], [0, 15, 0], [0, 15, 0],
        [0, 15, 0], [0, 15, 0], [0, 15, 0], [0, 15, 0],
        [0, 15, 0], [0, 15, 0], [0, 15, 0], [0, 15, 0],
        [0, 15, 0], [0, 2, 0], [0, 8, 0], [0, 2, 0],
        [0, 2, 0], [0, 8, 0], [0, 8, 0], [0, 15, 0],
        [0, 2, 0], [0, 8, 0], [0, 2, 0], [0, 2, 0],
        [0, 8, 0], [0, 8, 0], [0, 2, 0], [0, 2, 0],
        // BC7 only from here
        [0, 15, 0], [0, 15, 0], [0, 6, 0], [0, 8, 0],
        [0, 2, 0], [0, 8, 0], [0, 15, 0], [0, 15, 0],
        [0, 2, 0], [0, 8, 0], [0, 2, 0], [0, 2, 0],
        [0, 2, 0], [0, 15, 0], [0, 15, 0], [0, 6, 0],
        [0, 6, 0], [0, 2, 0], [0, 6, 0], [0, 8, 0],
        [0, 15, 0], [0, 15, 0], [0, 2, 0], [0, 2, 0],
        [0, 15, 0], [0, 15, 0], [0, 15, 0], [0, 15, 0],
        [0, 15, 0], [0, 2, 0], [0, 2, 0], [0, 15, 0],
    ],
    // BC7 3 subsets
    [
        [0, 3, 15], [0, 3, 8], [0, 15, 8], [0, 15, 3],
        [0, 8, 15], [0, 3, 15], [0, 15, 3], [0, 15, 8],
        [0, 8, 15], [0, 8, 15], [0, 6, 15], [0, 6, 15],
        [0, 6, 15], [0, 5, 15], [0, 3, 15], [0, 3, 8],
        [0, 3, 15], [0, 3, 8], [0, 8, 15], [0, 15, 3],
        [0, 3, 15], [0, 3, 8], [0, 6, 15], [0, 10, 8],
        [0, 5, 3], [0, 8, 15], [0, 8, 6], [0, 6, 10],
        [0, 8, 15], [0, 5, 15], [0, 15, 10], [0, 15, 8],
        [0, 8, 15], [0, 15, 3], [0, 3, 15], [0, 5, 10],
        [0, 6, 10], [0, 10, 8], [0, 8, 9], [0, 15, 10],
        [0, 15, 6], [0, 3, 15], [0, 15, 8], [0, 5, 15],
        [0, 15, 3], [0, 15, 6], [0, 15, 6], [0, 15, 8],
        [0, 3, 15], [0, 15, 3], [0, 5, 15], [0, 5, 15],
        [0, 5, 15], [0, 8, 15], [0, 5, 15], [0, 10, 15],
        [0, 5, 15], [0, 10, 15], [0, 8, 15], [0, 13, 15],
        [0, 15, 3], [0, 12, 15], [0, 3, 15], [0, 3, 8],
    ],
];

/// Returns `true` if pixel `offset` is an anchor pixel for the given partition layout.
///
/// # Parameters
///
/// - `partitions`: number of subsets minus one (0..=2)
/// - `shape`: partition shape (0..=63)
/// - `offset`: pixel position within the block (0..=15)
///
/// Pixel 0 is always an anchor.
///
/// ```
/// use bcn_inspect_common::fixup::is_fixup_offset;
///
/// assert!(is_fixup_offset(0, 0, 0));
/// assert!(!is_fixup_offset(0, 0, 15));
/// assert!(is_fixup_offset(1, 17, 2));
/// ```
#[inline]
pub fn is_fixup_offset(partitions: usize, shape: usize, offset: usize) -> bool {
    FIXUP_TABLE[partitions][shape][..=partitions].contains(&(offset as u8))
}

/// Returns the anchor positions for each subset of a layout, in subset order.
#[inline]
pub fn fixup_positions(partitions: usize, shape: usize) -> &'static [u8] {
    &FIXUP_TABLE[partitions][shape][..=partitions]
}
