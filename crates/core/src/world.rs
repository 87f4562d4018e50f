//! World module - owns the tile grid and is the only mutation path into it
//!
//! The world is a rectangular grid of catalog blocks built once from a
//! textual map and stored as a flat row-major vector. Coordinates are
//! `(x, y)` with x in `0..width` (left to right) and y in `0..height`
//! (top to bottom). Out-of-range queries answer `None`; out-of-range
//! mutations are silent no-ops. The single hard failure is a malformed map
//! at construction time.

use arrayvec::ArrayVec;
use thiserror::Error;

use termitek_types::{Block, Item};

use crate::catalog::{self, MAX_DROPS};
use crate::rng::Roll;

/// Construction-time map validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("map has no cells")]
    EmptyMap,
    #[error("map row {row} is {len} cells wide, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("unknown map symbol {symbol:?} at column {col}, row {row}")]
    UnknownSymbol {
        symbol: char,
        col: usize,
        row: usize,
    },
    #[error("spawn cell ({x}, {y}) is not walkable ground")]
    BlockedSpawn { x: i32, y: i32 },
}

/// The tile grid.
#[derive(Debug, Clone, PartialEq)]
pub struct World {
    width: i32,
    height: i32,
    /// Flat array of blocks, row-major order (y * width + x).
    grid: Vec<Block>,
}

impl World {
    /// Build a world from map text, one character per cell.
    ///
    /// Every row must have the same width and every symbol must resolve in
    /// the catalog. Dimensions are fixed for the lifetime of the world.
    pub fn from_map(rows: &[&str]) -> Result<Self, MapError> {
        let width = rows.first().map_or(0, |row| row.chars().count());
        if width == 0 {
            return Err(MapError::EmptyMap);
        }

        let mut grid = Vec::with_capacity(width * rows.len());
        for (y, row) in rows.iter().enumerate() {
            let len = row.chars().count();
            if len != width {
                return Err(MapError::RaggedRow {
                    row: y,
                    len,
                    expected: width,
                });
            }
            for (x, symbol) in row.chars().enumerate() {
                let block = catalog::block_for_symbol(symbol).ok_or(MapError::UnknownSymbol {
                    symbol,
                    col: x,
                    row: y,
                })?;
                grid.push(block);
            }
        }

        Ok(Self {
            width: width as i32,
            height: rows.len() as i32,
            grid,
        })
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Pure coordinate-range check used by every other operation.
    pub fn within_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && x < self.width && y >= 0 && y < self.height
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if !self.within_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    /// Get the block at (x, y), or `None` when out of bounds.
    pub fn get_block(&self, x: i32, y: i32) -> Option<Block> {
        self.index(x, y).map(|idx| self.grid[idx])
    }

    /// Overwrite the cell at (x, y); silently ignored out of bounds.
    pub fn set_block(&mut self, x: i32, y: i32, block: Block) {
        if let Some(idx) = self.index(x, y) {
            self.grid[idx] = block;
        }
    }

    /// Break the block at (x, y) and collect its drops.
    ///
    /// A cell that is out of bounds or not mineable yields no items and no
    /// mutation. Otherwise every drop-table entry is rolled independently
    /// against `rng`, the cell reverts to ground (whatever the rolls did),
    /// and the successful drops come back in table order.
    pub fn break_block(&mut self, x: i32, y: i32, rng: &mut impl Roll) -> ArrayVec<Item, MAX_DROPS> {
        let mut drops = ArrayVec::new();

        let block = match self.get_block(x, y) {
            Some(block) if block.mineable => block,
            _ => return drops,
        };

        for entry in block.drops {
            if rng.roll(entry.chance) {
                let _ = drops.try_push(entry.item);
            }
        }

        self.set_block(x, y, catalog::GROUND);
        drops
    }
}
