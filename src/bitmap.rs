//! Bitmap of per-block allocation flags
//!
//! One bit per block: `1` means the block belongs to some live file, `0`
//! means it is free. The allocation policy built on top is first-fit: free
//! blocks are handed out in ascending index order.

use crate::NUM_BLOCKS;
use serde::{Deserialize, Serialize};

/// Number of machine words backing the bitmap.
const WORDS: usize = NUM_BLOCKS.div_ceil(64);

/// Fixed-width bit-set tracking which blocks are allocated.
///
/// Owned exclusively by the allocation table; only allocation and deletion
/// flip bits. Width assumptions live here and nowhere else, so the block
/// count can change without touching callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bitmap {
    words: [u64; WORDS],
}

impl Bitmap {
    /// Create a bitmap with every block free.
    pub fn new() -> Self {
        Bitmap { words: [0; WORDS] }
    }

    /// Check whether a block is currently allocated.
    pub fn is_allocated(&self, block: usize) -> bool {
        debug_assert!(block < NUM_BLOCKS);
        (self.words[block / 64] >> (block % 64)) & 1 == 1
    }

    /// Check whether a block is currently free.
    pub fn is_free(&self, block: usize) -> bool {
        !self.is_allocated(block)
    }

    /// Mark a block allocated.
    pub fn set(&mut self, block: usize) {
        debug_assert!(block < NUM_BLOCKS);
        self.words[block / 64] |= 1 << (block % 64);
    }

    /// Mark a block free.
    pub fn clear(&mut self, block: usize) {
        debug_assert!(block < NUM_BLOCKS);
        self.words[block / 64] &= !(1 << (block % 64));
    }

    /// Number of blocks currently free.
    pub fn free_blocks(&self) -> usize {
        NUM_BLOCKS - self.allocated_blocks()
    }

    /// Number of blocks currently allocated.
    pub fn allocated_blocks(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Iterate over free block indices in ascending order.
    pub fn free_iter(&self) -> impl Iterator<Item = usize> + '_ {
        (0..NUM_BLOCKS).filter(move |&b| self.is_free(b))
    }
}

impl Default for Bitmap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_bitmap_all_free() {
        let bmp = Bitmap::new();
        assert_eq!(bmp.free_blocks(), NUM_BLOCKS);
        assert!((0..NUM_BLOCKS).all(|b| bmp.is_free(b)));
    }

    #[test]
    fn test_set_and_clear() {
        let mut bmp = Bitmap::new();

        bmp.set(2);
        assert!(bmp.is_allocated(2));
        assert!(bmp.is_free(0));
        assert_eq!(bmp.free_blocks(), NUM_BLOCKS - 1);

        bmp.clear(2);
        assert!(bmp.is_free(2));
        assert_eq!(bmp.free_blocks(), NUM_BLOCKS);
    }

    #[test]
    fn test_bits_at_ends_of_range() {
        let mut bmp = Bitmap::new();

        bmp.set(0);
        bmp.set(NUM_BLOCKS - 1);

        assert!(bmp.is_allocated(0));
        assert!(bmp.is_allocated(NUM_BLOCKS - 1));
        assert_eq!(bmp.allocated_blocks(), 2);
    }

    #[test]
    fn test_free_iter_ascending_and_skips_allocated() {
        let mut bmp = Bitmap::new();
        bmp.set(0);
        bmp.set(3);

        let first_four: Vec<usize> = bmp.free_iter().take(4).collect();
        assert_eq!(first_four, vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_free_iter_exhausted_when_full() {
        let mut bmp = Bitmap::new();
        for b in 0..NUM_BLOCKS {
            bmp.set(b);
        }
        assert_eq!(bmp.free_iter().next(), None);
        assert_eq!(bmp.free_blocks(), 0);
    }
}
