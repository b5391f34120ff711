//! Fatlite — linked block allocation, in memory
//!
//! A teaching model of the block-allocation layer of a file system: a
//! fixed-width free/used bitmap, a File Allocation Table linking each block
//! to the next block of its file, and an insertion-ordered directory of
//! inodes naming where each chain starts.
//!
//! ## Modules
//!
//! - [`error`] - Error types for table operations
//! - [`bitmap`] - Fixed-width per-block allocation flags
//! - [`fat`] - Link table and chain walking
//! - [`inode`] - Directory entries and name-keyed lookup
//! - [`table`] - The allocation table and its four operations
//! - [`shell`] - Line-oriented command parsing for the interactive shell
//!
//! ## Example Usage
//!
//! ```rust
//! use fatlite::AllocationTable;
//!
//! let mut table = AllocationTable::new();
//!
//! // Allocate three blocks for a file
//! table.create("report", 3).unwrap();
//! assert_eq!(table.chain("report"), Some(vec![0, 1, 2]));
//!
//! // Inspect allocation state
//! println!("{}", table.dump_bitmap());
//! println!("{}", table.dump_chains());
//!
//! // Free the blocks again
//! table.delete("report").unwrap();
//! assert_eq!(table.free_blocks(), fatlite::NUM_BLOCKS);
//! ```
//!
//! ## Layout
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │              AllocationTable                  │
//! ├───────────────────────────────────────────────┤
//! │ Bitmap: one bit per block, 1 = allocated      │
//! ├───────────────────────────────────────────────┤
//! │ LinkTable: block index -> next block index    │
//! │  (END_OF_CHAIN terminates each file's chain)  │
//! ├───────────────────────────────────────────────┤
//! │ Directory: name -> (start block, block count) │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! The table is single-threaded by design; every operation runs to
//! completion and either commits fully or leaves all three structures
//! untouched.

pub mod bitmap;
pub mod error;
pub mod fat;
pub mod inode;
pub mod shell;
pub mod table;

// Re-export commonly used types
pub use bitmap::Bitmap;
pub use error::{FsError, Result};
pub use fat::{LinkTable, END_OF_CHAIN};
pub use inode::{Directory, Inode};
pub use table::{AllocationTable, BitmapView, ChainsView};

/// Number of blocks managed by the allocation table.
///
/// Sized so the whole bitmap fits one machine word; every block index in
/// the crate lives in `[0, NUM_BLOCKS)`.
pub const NUM_BLOCKS: usize = 64;
