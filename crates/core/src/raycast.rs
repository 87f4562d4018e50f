//! Column raycaster for the first-person view.
//!
//! One ray per viewport column, fanned linearly around the player's facing
//! angle. The march advances in fixed increments of [`RAY_STEP`] and stops
//! early only on a tree block; every other cell, walls included, is
//! depth-transparent and the ray runs on to [`MAX_DEPTH`]. A capped ray
//! projects as a full-height wall band, so closed rooms still read as
//! walled in the view.

use std::f64::consts::PI;

use termitek_types::{MAX_DEPTH, RAY_STEP};

use crate::catalog;
use crate::world::World;

/// Result of marching a single ray.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    /// Distance traveled when the march ended, in world units.
    pub depth: f64,
    /// True when the march ended on a tree rather than at the depth cap.
    pub hit_tree: bool,
}

/// Ray angle for one viewport column.
///
/// Columns fan linearly across a fixed field of view centered on `facing`,
/// one ray per column. The center column (integer `width / 2`) looks
/// exactly along `facing`. Expects `width > 0`.
pub fn column_angle(facing: f64, column: u16, width: u16) -> f64 {
    let offset = i32::from(column) - i32::from(width / 2);
    facing + f64::from(offset) * (PI / f64::from(width))
}

/// March one ray from `origin` along `angle`.
///
/// The position advances before each sample, so the origin cell itself is
/// never tested. Out-of-map samples simply keep marching.
pub fn march(world: &World, origin: (f64, f64), angle: f64) -> RayHit {
    let (sin, cos) = angle.sin_cos();
    let (mut ray_x, mut ray_y) = origin;
    let mut depth = 0.0;

    while depth < MAX_DEPTH {
        ray_x += cos * RAY_STEP;
        ray_y += sin * RAY_STEP;
        depth += RAY_STEP;

        match world.get_block(ray_x as i32, ray_y as i32) {
            Some(block) if block.symbol == catalog::TREE.symbol => {
                return RayHit {
                    depth,
                    hit_tree: true,
                };
            }
            _ => {}
        }
    }

    RayHit {
        depth,
        hit_tree: false,
    }
}
