//! Property-based tests for allocation table correctness
//!
//! Uses proptest to verify the table's invariants hold across many random
//! create/delete sequences.

use fatlite::{AllocationTable, FsError, NUM_BLOCKS};
use proptest::prelude::*;
use std::collections::HashSet;

/// Assert invariants 1-5: chain lengths match inode counts, chains are
/// disjoint, the bitmap agrees with the union of all chains, names are
/// unique, and every index is in range.
fn assert_invariants(table: &AllocationTable) {
    let mut seen_blocks = HashSet::new();
    let mut seen_names = HashSet::new();

    for inode in table.files() {
        assert!(seen_names.insert(inode.name.clone()), "duplicate live name");
        assert!(inode.start_block < NUM_BLOCKS);
        assert!(inode.block_count >= 1 && inode.block_count <= NUM_BLOCKS);

        let chain = table.chain(&inode.name).unwrap();
        assert_eq!(chain.len(), inode.block_count, "chain length mismatch");
        assert_eq!(chain[0], inode.start_block);
        for &block in &chain {
            assert!(block < NUM_BLOCKS);
            assert!(seen_blocks.insert(block), "block {} on two chains", block);
        }
    }

    // Bitmap agrees with the union of all live chains.
    assert_eq!(NUM_BLOCKS - table.free_blocks(), seen_blocks.len());
}

/// A random workload step.
#[derive(Debug, Clone)]
enum Op {
    Create { name: u8, size: usize },
    Delete { name: u8 },
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0u8..12, 1usize..20).prop_map(|(name, size)| Op::Create { name, size }),
        (0u8..12).prop_map(|name| Op::Delete { name }),
    ]
}

proptest! {
    #[test]
    fn prop_no_double_allocation(sizes in prop::collection::vec(1usize..8, 1..10)) {
        let mut table = AllocationTable::new();
        let mut all_blocks = HashSet::new();

        for (i, size) in sizes.iter().enumerate() {
            if table.create(&format!("file{}", i), *size).is_err() {
                continue;
            }
            for block in table.chain(&format!("file{}", i)).unwrap() {
                prop_assert!(
                    !all_blocks.contains(&block),
                    "Block {} allocated twice!",
                    block
                );
                all_blocks.insert(block);
            }
        }
    }

    #[test]
    fn prop_capacity_conservation(ops in prop::collection::vec(op_strategy(), 1..40)) {
        let mut table = AllocationTable::new();

        for op in ops {
            match op {
                Op::Create { name, size } => {
                    let _ = table.create(&format!("f{}", name), size);
                }
                Op::Delete { name } => {
                    let _ = table.delete(&format!("f{}", name));
                }
            }

            let owned: usize = table.files().iter().map(|i| i.block_count).sum();
            prop_assert_eq!(NUM_BLOCKS - table.free_blocks(), owned);
        }
    }

    #[test]
    fn prop_invariants_hold_after_random_ops(ops in prop::collection::vec(op_strategy(), 1..60)) {
        let mut table = AllocationTable::new();

        for op in ops {
            match op {
                Op::Create { name, size } => {
                    let _ = table.create(&format!("f{}", name), size);
                }
                Op::Delete { name } => {
                    let _ = table.delete(&format!("f{}", name));
                }
            }
            assert_invariants(&table);
        }
    }

    #[test]
    fn prop_failed_create_is_a_no_op(fill in 1usize..NUM_BLOCKS) {
        let mut table = AllocationTable::new();
        table.create("base", fill).unwrap();

        let free_before = table.free_blocks();
        let files_before = table.files().len();

        // Too large for the remaining space.
        let err = table.create("huge", free_before + 1).unwrap_err();
        prop_assert_eq!(
            err,
            FsError::InsufficientSpace { requested: free_before + 1, free: free_before }
        );
        prop_assert_eq!(table.free_blocks(), free_before);
        prop_assert_eq!(table.files().len(), files_before);
        assert_invariants(&table);
    }

    #[test]
    fn prop_delete_restores_pre_create_state(size in 1usize..=NUM_BLOCKS) {
        let mut table = AllocationTable::new();
        table.create("transient", size).unwrap();
        table.delete("transient").unwrap();

        prop_assert_eq!(table.free_blocks(), NUM_BLOCKS);
        prop_assert!(table.files().is_empty());

        // Re-allocation starts from block 0 again, as on a fresh table.
        table.create("next", 1).unwrap();
        prop_assert_eq!(table.chain("next"), Some(vec![0]));
    }
}
