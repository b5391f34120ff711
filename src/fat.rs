//! File Allocation Table: per-block next-block links
//!
//! Entry `i` holds the index of the block following block `i` in its file's
//! chain, or [`END_OF_CHAIN`] for a chain's last block. Entries of free
//! blocks are stale leftovers from earlier files; they are overwritten on
//! the next allocation and must only be read while walking a live chain.

use crate::NUM_BLOCKS;
use serde::{Deserialize, Serialize};

/// Reserved link value terminating a chain.
pub const END_OF_CHAIN: u32 = u32::MAX;

/// The link table itself, indexed by block number.
///
/// Always exactly `NUM_BLOCKS` entries long.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkTable {
    links: Vec<u32>,
}

impl LinkTable {
    /// Create a table with every entry terminal.
    pub fn new() -> Self {
        LinkTable {
            links: vec![END_OF_CHAIN; NUM_BLOCKS],
        }
    }

    /// Point block `from` at block `to` as the next link of its chain.
    pub fn link(&mut self, from: usize, to: usize) {
        debug_assert!(from < NUM_BLOCKS && to < NUM_BLOCKS);
        self.links[from] = to as u32;
    }

    /// Mark a block as the last of its chain.
    pub fn terminate(&mut self, block: usize) {
        debug_assert!(block < NUM_BLOCKS);
        self.links[block] = END_OF_CHAIN;
    }

    /// Next block after `block` in its chain, or `None` at the chain's end.
    ///
    /// Only meaningful while `block` is part of a live chain.
    pub fn next(&self, block: usize) -> Option<usize> {
        debug_assert!(block < NUM_BLOCKS);
        match self.links[block] {
            END_OF_CHAIN => None,
            next => Some(next as usize),
        }
    }

    /// Walk a chain from its start block to the terminal block, inclusive.
    pub fn chain(&self, start: usize) -> ChainIter<'_> {
        ChainIter {
            table: self,
            current: Some(start),
        }
    }
}

impl Default for LinkTable {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the block indices of one chain, start block included.
pub struct ChainIter<'a> {
    table: &'a LinkTable,
    current: Option<usize>,
}

impl Iterator for ChainIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        let block = self.current?;
        self.current = self.table.next(block);
        Some(block)
    }
}
