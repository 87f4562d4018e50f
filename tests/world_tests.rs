//! World tests - grid construction, queries, and mining

use termitek::core::catalog::{GROUND, LOG, MACHINE, TREE, WALL};
use termitek::core::{MapError, Roll, World};

/// Roll source with one scripted outcome for every entry.
struct Fixed(bool);

impl Roll for Fixed {
    fn roll(&mut self, _chance: f64) -> bool {
        self.0
    }
}

#[test]
fn test_world_built_from_map_text() {
    let world = World::from_map(&["#####", "#.TM#", "#####"]).unwrap();
    assert_eq!(world.width(), 5);
    assert_eq!(world.height(), 3);
    assert_eq!(world.get_block(0, 0), Some(WALL));
    assert_eq!(world.get_block(1, 1), Some(GROUND));
    assert_eq!(world.get_block(2, 1), Some(TREE));
    assert_eq!(world.get_block(3, 1), Some(MACHINE));
}

#[test]
fn test_get_block_out_of_bounds_is_absent() {
    let world = World::from_map(&["###", "#.#", "###"]).unwrap();

    assert_eq!(world.get_block(-1, 0), None);
    assert_eq!(world.get_block(0, -1), None);
    assert_eq!(world.get_block(3, 0), None);
    assert_eq!(world.get_block(0, 3), None);
    assert!(!world.within_bounds(3, 3));
    assert!(world.within_bounds(2, 2));
}

#[test]
fn test_every_in_bounds_cell_holds_a_block() {
    let world = World::from_map(&["#T#", "#.#", "#M#"]).unwrap();
    for y in 0..world.height() {
        for x in 0..world.width() {
            assert!(world.get_block(x, y).is_some(), "cell ({x}, {y})");
        }
    }
}

#[test]
fn test_set_then_get_roundtrip() {
    let mut world = World::from_map(&["###", "#.#", "###"]).unwrap();

    world.set_block(1, 1, TREE);
    assert_eq!(world.get_block(1, 1), Some(TREE));
    world.set_block(1, 1, GROUND);
    assert_eq!(world.get_block(1, 1), Some(GROUND));

    // Out-of-bounds writes vanish without touching anything.
    let before = world.clone();
    world.set_block(9, 9, TREE);
    assert_eq!(world, before);
}

#[test]
fn test_break_with_all_successes_yields_the_full_table() {
    let mut world = World::from_map(&["T"]).unwrap();
    let drops = world.break_block(0, 0, &mut Fixed(true));

    assert_eq!(drops.len(), TREE.drops.len());
    assert!(drops.iter().all(|item| *item == LOG));
    assert_eq!(world.get_block(0, 0), Some(GROUND));
}

#[test]
fn test_break_with_all_failures_still_reverts_the_cell() {
    let mut world = World::from_map(&["T"]).unwrap();
    let drops = world.break_block(0, 0, &mut Fixed(false));

    assert!(drops.is_empty());
    assert_eq!(world.get_block(0, 0), Some(GROUND));
}

#[test]
fn test_break_rejects_walls_ground_and_absent_cells() {
    let mut world = World::from_map(&["#.", "T."]).unwrap();
    let before = world.clone();

    assert!(world.break_block(0, 0, &mut Fixed(true)).is_empty());
    assert!(world.break_block(1, 0, &mut Fixed(true)).is_empty());
    assert!(world.break_block(5, 5, &mut Fixed(true)).is_empty());
    assert!(world.break_block(-1, -1, &mut Fixed(true)).is_empty());
    assert_eq!(world, before);
}

#[test]
fn test_break_machine_reverts_but_drops_nothing() {
    let mut world = World::from_map(&["M"]).unwrap();
    let drops = world.break_block(0, 0, &mut Fixed(true));

    assert!(drops.is_empty());
    assert_eq!(world.get_block(0, 0), Some(GROUND));
}

#[test]
fn test_malformed_maps_are_rejected_at_construction() {
    assert_eq!(World::from_map(&[]).unwrap_err(), MapError::EmptyMap);
    assert_eq!(World::from_map(&["", ""]).unwrap_err(), MapError::EmptyMap);

    assert_eq!(
        World::from_map(&["###", "####"]).unwrap_err(),
        MapError::RaggedRow {
            row: 1,
            len: 4,
            expected: 3
        }
    );

    assert_eq!(
        World::from_map(&["#.#", "#Z#"]).unwrap_err(),
        MapError::UnknownSymbol {
            symbol: 'Z',
            col: 1,
            row: 1
        }
    );
}
