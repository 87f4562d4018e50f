//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the whole world/player simulation and the column
//! raycaster. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical mining outcomes
//! - **Testable**: Every rule is exercised by plain unit tests
//! - **Portable**: Can run in any environment (terminal, headless, tests)
//!
//! # Module Structure
//!
//! - [`catalog`]: The fixed block and item definitions, including drop tables
//! - [`world`]: Tile grid built from map text; the only mutation path is mining
//! - [`player`]: Position, facing angle, inventory, movement validation
//! - [`raycast`]: Per-column ray march producing depth and obstruction kind
//! - [`rng`]: Injectable roll source; a tiny LCG for real sessions
//! - [`game`]: Session facade dispatching player intents
//!
//! # Game Rules
//!
//! - Movement applies only onto in-bounds walkable cells; anything else is a
//!   silent no-op.
//! - Mining targets the cell one step ahead of the compass heading. Breaking
//!   a mineable block rolls each drop-table entry independently and always
//!   reverts the cell to ground, whatever the rolls did.
//! - Rays fan across the view one per column and stop early only on trees;
//!   walls never stop a ray, they read as full-height bands at the depth cap.
//!
//! # Example
//!
//! ```
//! use termitek_core::Game;
//! use termitek_core::types::{Action, Outcome};
//!
//! let mut game = Game::new(12345).unwrap();
//! assert_eq!(game.apply_action(Action::MoveRight), Outcome::Continue);
//! assert_eq!(game.player().position(), (2, 1));
//! assert_eq!(game.apply_action(Action::Quit), Outcome::Quit);
//! ```

pub mod catalog;
pub mod game;
pub mod player;
pub mod raycast;
pub mod rng;
pub mod world;

pub use termitek_types as types;

// Re-export commonly used types for convenience
pub use game::Game;
pub use player::{Inventory, Player};
pub use raycast::{column_angle, march, RayHit};
pub use rng::{Roll, SimpleRng};
pub use world::{MapError, World};
