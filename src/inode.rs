//! Inodes and the file directory
//!
//! An inode records one file's name, where its chain starts, and how many
//! blocks it owns. Two inodes describe the same file iff their names are
//! equal; that contract is kept explicit through name-keyed lookups on
//! [`Directory`] rather than an equality override on [`Inode`].

use serde::{Deserialize, Serialize};

/// Directory entry for one file.
///
/// Immutable once created: a file cannot be renamed or resized, only
/// deleted and recreated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Inode {
    /// File name, unique among live inodes.
    pub name: String,

    /// Index of the first block of the file's chain.
    pub start_block: usize,

    /// Number of blocks the file owns.
    pub block_count: usize,
}

impl Inode {
    pub fn new(name: impl Into<String>, start_block: usize, block_count: usize) -> Self {
        Inode {
            name: name.into(),
            start_block,
            block_count,
        }
    }
}

/// Insertion-ordered collection of live inodes.
///
/// Listing order is creation order, never sorted by name or block. Lookups
/// are linear name comparisons; at the block counts involved a map would
/// buy nothing and would lose the ordering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Directory {
    entries: Vec<Inode>,
}

impl Directory {
    pub fn new() -> Self {
        Directory { entries: Vec::new() }
    }

    /// Whether a live inode with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Look up an inode by name.
    pub fn get(&self, name: &str) -> Option<&Inode> {
        self.entries.iter().find(|inode| inode.name == name)
    }

    /// Append an inode, preserving insertion order.
    ///
    /// The caller guarantees the name is not already present.
    pub fn insert(&mut self, inode: Inode) {
        debug_assert!(!self.contains(&inode.name));
        self.entries.push(inode);
    }

    /// Remove and return the inode with this name, if any.
    pub fn remove(&mut self, name: &str) -> Option<Inode> {
        let index = self.entries.iter().position(|inode| inode.name == name)?;
        Some(self.entries.remove(index))
    }

    /// Live inodes in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Inode> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[Inode] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
