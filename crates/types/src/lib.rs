//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (world simulation, terminal rendering, input
//! mapping, tests).
//!
//! # World constants
//!
//! The default overworld is a fixed 15x7 tile map ([`DEFAULT_MAP`]) with the
//! player spawn at (1, 1). Coordinates are `(x, y)` with x growing rightward
//! and y growing downward; (0, 0) is the top-left cell.
//!
//! # Ray march constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `RAY_STEP` | 0.05 | World units advanced per march step |
//! | `MAX_DEPTH` | 8.0 | Depth cap; rays never travel further |
//! | `TURN_STEP` | pi/16 | Radians turned per rotate keypress |
//!
//! The march is a bounded loop of at most `MAX_DEPTH / RAY_STEP` iterations
//! per screen column.

use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

/// The default overworld, one character per cell.
///
/// Symbols are resolved against the block catalog at construction time;
/// every row must have the same length.
pub const DEFAULT_MAP: [&str; 7] = [
    "###############",
    "......T....#..#",
    "#.....#....#..#",
    "#..M..#....#..#",
    "#.....#....#..#",
    "#.....#....#..#",
    "###############",
];

/// Player spawn cell on the default map.
pub const SPAWN_X: i32 = 1;
pub const SPAWN_Y: i32 = 1;

/// Frame interval for the render loop (milliseconds).
pub const FRAME_MS: u64 = 33;

/// Radians added or removed from the facing angle per rotate keypress.
pub const TURN_STEP: f64 = PI / 16.0;

/// World units advanced per ray march step.
pub const RAY_STEP: f64 = 0.05;

/// Maximum depth a ray may travel, in world units.
pub const MAX_DEPTH: f64 = 8.0;

/// A collectible item as defined by the catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Item {
    /// Single-character tag shown in inventory summaries.
    pub symbol: char,
    /// Short display name.
    pub name: &'static str,
    /// Longer descriptive text.
    pub tooltip: &'static str,
    /// How many units one pickup represents.
    pub amount: u32,
}

/// One drop-table entry: an item and its independent roll chance.
///
/// Entries are rolled independently when a block is broken; any subset of a
/// table (including none or all of it) can drop from a single mine.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DropEntry {
    /// Probability in `[0.0, 1.0]` that this entry drops.
    pub chance: f64,
    pub item: Item,
}

/// A tile-type definition.
///
/// Blocks are immutable values; a world cell stores a copy of the catalog
/// definition for its symbol. Mutating the world means replacing the cell's
/// block, never editing a definition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Block {
    /// Single-character tag, also the map-text representation.
    pub symbol: char,
    /// Descriptive text shown by the facing readout.
    pub tooltip: &'static str,
    /// Whether the player may stand on this cell.
    pub walkable: bool,
    /// Whether `break_block` may replace this cell.
    pub mineable: bool,
    /// Independent drop rolls granted when this block is broken.
    pub drops: &'static [DropEntry],
}

/// Cardinal compass heading derived from the continuous facing angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// Classify a facing angle into its compass bucket.
    ///
    /// The circle is split into four 90-degree buckets centered on the
    /// cardinals, so the bucket boundaries sit at odd multiples of pi/4.
    /// Angle 0 is due north; angles grow clockwise (east at pi/2). The
    /// stored angle is never normalized, so this must accept any finite
    /// value, negative or beyond a full turn.
    pub fn from_angle(angle: f64) -> Self {
        let index = ((angle + FRAC_PI_4).rem_euclid(TAU) / FRAC_PI_2) as usize % 4;
        [
            Heading::North,
            Heading::East,
            Heading::South,
            Heading::West,
        ][index]
    }

    /// Compass letter for the HUD.
    pub fn letter(&self) -> &'static str {
        match self {
            Heading::North => "N",
            Heading::East => "E",
            Heading::South => "S",
            Heading::West => "W",
        }
    }

    /// Unit grid offset one step ahead in this heading.
    ///
    /// y grows downward, so north is (0, -1).
    pub fn forward(&self) -> (i32, i32) {
        match self {
            Heading::North => (0, -1),
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
        }
    }
}

/// Player intents produced by the input router.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    TurnLeft,
    TurnRight,
    Mine,
    Quit,
}

impl Action {
    /// Stable name used in log lines.
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::MoveLeft => "moveLeft",
            Action::MoveRight => "moveRight",
            Action::MoveUp => "moveUp",
            Action::MoveDown => "moveDown",
            Action::TurnLeft => "turnLeft",
            Action::TurnRight => "turnRight",
            Action::Mine => "mine",
            Action::Quit => "quit",
        }
    }
}

/// Result of applying one action; consumed by the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}
