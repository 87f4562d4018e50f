//! Player state: grid position, facing angle, inventory.
//!
//! Movement is validated against the world before the position changes;
//! a move into a wall or off the map is silently dropped. The facing angle
//! is continuous and unnormalized, rotation just accumulates radians.

use arrayvec::ArrayVec;

use termitek_types::{Block, Heading, Item};

use crate::catalog::MAX_DROPS;
use crate::rng::Roll;
use crate::world::World;

/// Ordered collection of picked-up items.
///
/// Every pickup appends a distinct entry; identical items are not merged
/// into stacks. Each player owns exactly one of these from spawn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    items: Vec<Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    pub fn push(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// The player: a grid position, a continuous view angle, an inventory.
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    x: i32,
    y: i32,
    angle: f64,
    inventory: Inventory,
}

impl Player {
    /// Spawn at (x, y) facing angle 0 with an empty inventory.
    pub fn new(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            angle: 0.0,
            inventory: Inventory::new(),
        }
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Facing angle in radians. Unbounded; heading derivation normalizes.
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Nearest cardinal direction for the current angle.
    pub fn heading(&self) -> Heading {
        Heading::from_angle(self.angle)
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Move by a grid offset.
    ///
    /// Applies only when the destination cell exists and is walkable;
    /// otherwise the position stays put and nothing signals the rejection.
    pub fn move_by(&mut self, dx: i32, dy: i32, world: &World) {
        let (nx, ny) = (self.x + dx, self.y + dy);
        match world.get_block(nx, ny) {
            Some(block) if block.walkable => {
                self.x = nx;
                self.y = ny;
            }
            _ => {}
        }
    }

    pub fn move_left(&mut self, world: &World) {
        self.move_by(-1, 0, world);
    }

    pub fn move_right(&mut self, world: &World) {
        self.move_by(1, 0, world);
    }

    pub fn move_up(&mut self, world: &World) {
        self.move_by(0, -1, world);
    }

    pub fn move_down(&mut self, world: &World) {
        self.move_by(0, 1, world);
    }

    pub fn rotate_left(&mut self, amount: f64) {
        self.angle -= amount;
    }

    pub fn rotate_right(&mut self, amount: f64) {
        self.angle += amount;
    }

    /// The cell one step ahead along the current heading.
    pub fn front_position(&self) -> (i32, i32) {
        let (dx, dy) = self.heading().forward();
        (self.x + dx, self.y + dy)
    }

    /// Block in the faced cell, or `None` past the map edge.
    pub fn facing_block(&self, world: &World) -> Option<Block> {
        let (fx, fy) = self.front_position();
        world.get_block(fx, fy)
    }

    /// Mine whatever is directly ahead and bank the drops.
    ///
    /// Drops are appended to the inventory in drop-table order and also
    /// returned so the caller can report them. Facing something that cannot
    /// be mined yields an empty result and changes nothing.
    pub fn break_block_in_front(
        &mut self,
        world: &mut World,
        rng: &mut impl Roll,
    ) -> ArrayVec<Item, MAX_DROPS> {
        let (fx, fy) = self.front_position();
        let drops = world.break_block(fx, fy, rng);
        for item in &drops {
            self.inventory.push(*item);
        }
        drops
    }
}
