//! Raycast tests - march semantics and the column fan

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, SQRT_2};

use termitek::core::{column_angle, march, World};
use termitek::types::{MAX_DEPTH, RAY_STEP};

#[test]
fn test_tree_two_cells_ahead_is_hit_before_any_wall() {
    // Tree straight ahead of the player's facing ray, walls further out.
    let world = World::from_map(&[
        "#######",
        "#..T..#",
        "#.....#",
        "#.....#",
        "#.....#",
        "#.....#",
        "#######",
    ])
    .unwrap();

    let hit = march(&world, (1.0, 1.0), 0.0);
    assert!(hit.hit_tree);
    assert!((hit.depth - 2.0).abs() < 0.11);
    // Nearer than the wall behind it, and than the depth cap.
    assert!(hit.depth < 5.0);
    assert!(hit.depth < MAX_DEPTH);
}

#[test]
fn test_walls_never_stop_a_ray() {
    let world = World::from_map(&[".#####"]).unwrap();
    let hit = march(&world, (0.0, 0.0), 0.0);
    assert!(!hit.hit_tree);
    assert!(hit.depth >= MAX_DEPTH);
}

#[test]
fn test_march_is_bounded_in_every_direction() {
    let world = World::from_map(&["###", "#.#", "###"]).unwrap();
    for k in 0..16 {
        let angle = f64::from(k) * PI / 8.0;
        let hit = march(&world, (1.0, 1.0), angle);
        assert!(!hit.hit_tree);
        assert!(hit.depth >= MAX_DEPTH);
        assert!(hit.depth < MAX_DEPTH + 2.0 * RAY_STEP);
    }
}

#[test]
fn test_diagonal_ray_reaches_the_diagonal_tree() {
    let world = World::from_map(&["....", ".T..", "...."]).unwrap();
    let hit = march(&world, (0.0, 0.0), FRAC_PI_4);
    assert!(hit.hit_tree);
    // Diagonal distance to the cell is sqrt(2).
    assert!((hit.depth - SQRT_2).abs() < 0.15);
}

#[test]
fn test_ray_pointed_away_from_the_tree_misses_it() {
    let world = World::from_map(&["T....."]).unwrap();
    // Marching +x from cell 2 leaves the tree behind.
    let hit = march(&world, (2.0, 0.0), 0.0);
    assert!(!hit.hit_tree);
    assert!(hit.depth >= MAX_DEPTH);
}

#[test]
fn test_center_column_points_along_facing() {
    let facing = 0.37;
    assert_eq!(column_angle(facing, 40, 80), facing);
    assert_eq!(column_angle(facing, 3, 7), facing);
}

#[test]
fn test_column_angles_increase_left_to_right() {
    let facing = 0.0;
    let mut last = f64::NEG_INFINITY;
    for column in 0..40 {
        let angle = column_angle(facing, column, 40);
        assert!(angle > last);
        last = angle;
    }
    // The whole fan spans half a turn around the facing angle.
    assert!((column_angle(facing, 0, 40) + FRAC_PI_2).abs() < 1e-12);
}
