//! Block and item catalog - the fixed set of tile and pickup definitions
//!
//! Definitions are immutable process-wide constants; the world looks them up
//! by map symbol at construction time and cells store copies. Nothing in the
//! game mutates a definition.

use termitek_types::{Block, DropEntry, Item};

/// Upper bound on drop-table length, used to size drop collections.
pub const MAX_DROPS: usize = 8;

/// Raw wood dropped by trees.
pub const LOG: Item = Item {
    symbol: 'L',
    name: "Log",
    tooltip: "Log: Raw wood, good for building.",
    amount: 1,
};

/// Impassable map border and interior walls.
pub const WALL: Block = Block {
    symbol: '#',
    tooltip: "Wall: Impenetrable barrier.",
    walkable: false,
    mineable: false,
    drops: &[],
};

/// Plain terrain. Also the block a mined cell reverts to.
pub const GROUND: Block = Block {
    symbol: '.',
    tooltip: "Ground: Walkable terrain.",
    walkable: true,
    mineable: false,
    drops: &[],
};

/// Harvestable tree: one guaranteed log plus up to two bonus logs.
pub const TREE: Block = Block {
    symbol: 'T',
    tooltip: "Tree: A source of wood.",
    walkable: true,
    mineable: true,
    drops: &[
        DropEntry {
            chance: 1.0,
            item: LOG,
        },
        DropEntry {
            chance: 0.5,
            item: LOG,
        },
        DropEntry {
            chance: 0.25,
            item: LOG,
        },
    ],
};

/// Automation machine. Mineable but yields nothing.
pub const MACHINE: Block = Block {
    symbol: 'M',
    tooltip: "Machine: Used for automation.",
    walkable: true,
    mineable: true,
    drops: &[],
};

/// Resolve a map symbol to its block definition.
pub fn block_for_symbol(symbol: char) -> Option<Block> {
    match symbol {
        '#' => Some(WALL),
        '.' => Some(GROUND),
        'T' => Some(TREE),
        'M' => Some(MACHINE),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_symbol_resolves_to_a_matching_block() {
        for symbol in ['#', '.', 'T', 'M'] {
            let block = block_for_symbol(symbol).unwrap();
            assert_eq!(block.symbol, symbol);
        }
        assert_eq!(block_for_symbol('x'), None);
        assert_eq!(block_for_symbol(' '), None);
    }

    #[test]
    fn walls_are_the_only_unwalkable_block() {
        assert!(!WALL.walkable);
        assert!(GROUND.walkable);
        assert!(TREE.walkable);
        assert!(MACHINE.walkable);
    }

    #[test]
    fn only_trees_and_machines_are_mineable() {
        assert!(!WALL.mineable);
        assert!(!GROUND.mineable);
        assert!(TREE.mineable);
        assert!(MACHINE.mineable);
    }

    #[test]
    fn drop_tables_fit_the_collection_bound() {
        for block in [WALL, GROUND, TREE, MACHINE] {
            assert!(block.drops.len() <= MAX_DROPS);
        }
    }

    #[test]
    fn tree_guarantees_at_least_one_log() {
        assert!(TREE.drops.iter().any(|d| d.chance >= 1.0));
        assert!(TREE.drops.iter().all(|d| d.item == LOG));
    }
}
