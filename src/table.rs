//! The allocation table: bitmap + link table + directory
//!
//! Owns the three coupled structures and the two state transitions over
//! them. Both mutations are check-then-commit: every failure is detected
//! before the first bit flips, so a failed call leaves the table exactly as
//! it was.

use crate::bitmap::Bitmap;
use crate::error::{FsError, Result};
use crate::fat::LinkTable;
use crate::inode::{Directory, Inode};
use crate::NUM_BLOCKS;
use serde::{Deserialize, Serialize};
use std::fmt;

/// In-memory model of a file system's block-allocation layer.
///
/// Invariants held after every operation:
///
/// 1. Walking a live inode's chain visits exactly `block_count` distinct
///    blocks and ends at a terminal link.
/// 2. Chains of distinct live inodes are disjoint.
/// 3. A bitmap bit is set iff its block is on some live chain.
/// 4. Live inode names are unique.
/// 5. Every live inode's start block and block count are in range.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AllocationTable {
    bitmap: Bitmap,
    fat: LinkTable,
    directory: Directory,
}

impl AllocationTable {
    /// Create an empty table: all blocks free, no files.
    pub fn new() -> Self {
        AllocationTable {
            bitmap: Bitmap::new(),
            fat: LinkTable::new(),
            directory: Directory::new(),
        }
    }

    /// Create a file owning `size` blocks.
    ///
    /// Free blocks are claimed in ascending index order and need not be
    /// contiguous; they are linked through the FAT in the order claimed.
    /// Fails with [`FsError::DuplicateName`] if the name is live, with
    /// [`FsError::InsufficientSpace`] if fewer than `size` blocks are free,
    /// and with [`FsError::InvalidSize`] / [`FsError::InvalidName`] on a
    /// zero size or empty name. No failure mutates the table.
    pub fn create(&mut self, name: &str, size: usize) -> Result<()> {
        if name.is_empty() {
            return Err(FsError::InvalidName);
        }
        if size == 0 {
            return Err(FsError::InvalidSize(size));
        }
        if self.directory.contains(name) {
            return Err(FsError::DuplicateName(name.to_string()));
        }

        let blocks: Vec<usize> = self.bitmap.free_iter().take(size).collect();
        if blocks.len() < size {
            return Err(FsError::InsufficientSpace {
                requested: size,
                free: self.bitmap.free_blocks(),
            });
        }

        // All checks passed; commit.
        self.directory.insert(Inode::new(name, blocks[0], size));
        for (i, &block) in blocks.iter().enumerate() {
            self.bitmap.set(block);
            match blocks.get(i + 1) {
                Some(&next) => self.fat.link(block, next),
                None => self.fat.terminate(block),
            }
        }

        tracing::debug!(name, size, start = blocks[0], "allocated chain");
        Ok(())
    }

    /// Delete a file, freeing every block of its chain.
    ///
    /// FAT entries of the freed blocks keep their stale values; the next
    /// allocation overwrites them. Fails with [`FsError::NotFound`] if no
    /// live inode has this name, leaving the table untouched.
    pub fn delete(&mut self, name: &str) -> Result<()> {
        let inode = self
            .directory
            .remove(name)
            .ok_or_else(|| FsError::NotFound(name.to_string()))?;

        let chain: Vec<usize> = self.fat.chain(inode.start_block).collect();
        for &block in &chain {
            self.bitmap.clear(block);
        }

        tracing::debug!(name, freed = chain.len(), "freed chain");
        Ok(())
    }

    /// Human-oriented view of the bitmap: 8 rows of 8 allocation bits, each
    /// row labeled with its starting block number.
    pub fn dump_bitmap(&self) -> BitmapView<'_> {
        BitmapView { table: self }
    }

    /// Human-oriented view of every file's chain, in insertion order.
    pub fn dump_chains(&self) -> ChainsView<'_> {
        ChainsView { table: self }
    }

    /// Number of blocks currently free.
    pub fn free_blocks(&self) -> usize {
        self.bitmap.free_blocks()
    }

    /// Total number of blocks managed.
    pub fn total_blocks(&self) -> usize {
        NUM_BLOCKS
    }

    /// Live inodes in insertion order.
    pub fn files(&self) -> &[Inode] {
        self.directory.as_slice()
    }

    /// The full block chain of one file, from start block to terminal.
    pub fn chain(&self, name: &str) -> Option<Vec<usize>> {
        let inode = self.directory.get(name)?;
        Some(self.fat.chain(inode.start_block).collect())
    }
}

/// Rendered bitmap, 8 blocks per row.
pub struct BitmapView<'a> {
    table: &'a AllocationTable,
}

impl fmt::Display for BitmapView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..NUM_BLOCKS).step_by(8) {
            write!(f, "{:2} ", row)?;
            for block in row..row + 8 {
                let bit = if self.table.bitmap.is_allocated(block) {
                    '1'
                } else {
                    '0'
                };
                write!(f, "{}", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Rendered chains, one file per line.
pub struct ChainsView<'a> {
    table: &'a AllocationTable,
}

impl fmt::Display for ChainsView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.table.directory.is_empty() {
            return writeln!(f, "No files in system.");
        }
        for inode in self.table.directory.iter() {
            write!(f, "{}: ", inode.name)?;
            let mut chain = self.table.fat.chain(inode.start_block);
            if let Some(first) = chain.next() {
                write!(f, "{}", first)?;
            }
            for block in chain {
                write!(f, " -> {}", block)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
