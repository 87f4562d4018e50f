//! Game session: world + player + mining RNG behind one action dispatch.

use tracing::{debug, info};

use termitek_types::{Action, Outcome, DEFAULT_MAP, SPAWN_X, SPAWN_Y, TURN_STEP};

use crate::player::Player;
use crate::rng::SimpleRng;
use crate::world::{MapError, World};

/// One running game session.
///
/// Owns the world, the player, and the mining RNG. Every mutation flows
/// through [`Game::apply_action`]; renderers read state through the
/// accessors and never write.
#[derive(Debug, Clone)]
pub struct Game {
    world: World,
    player: Player,
    rng: SimpleRng,
}

impl Game {
    /// Start a session on the default overworld.
    pub fn new(seed: u32) -> Result<Self, MapError> {
        Self::from_map(&DEFAULT_MAP, (SPAWN_X, SPAWN_Y), seed)
    }

    /// Start a session on a custom map with an explicit spawn cell.
    ///
    /// The spawn must be an in-bounds walkable cell; anything else is a
    /// construction error, the same class as a malformed map.
    pub fn from_map(rows: &[&str], spawn: (i32, i32), seed: u32) -> Result<Self, MapError> {
        let world = World::from_map(rows)?;
        let (x, y) = spawn;
        match world.get_block(x, y) {
            Some(block) if block.walkable => {}
            _ => return Err(MapError::BlockedSpawn { x, y }),
        }
        Ok(Self {
            world,
            player: Player::new(x, y),
            rng: SimpleRng::new(seed),
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    /// Apply one player intent and report whether the session continues.
    ///
    /// Rejected moves and fruitless mining are silent no-ops; only `Quit`
    /// ends the session.
    pub fn apply_action(&mut self, action: Action) -> Outcome {
        match action {
            Action::MoveLeft => self.player.move_left(&self.world),
            Action::MoveRight => self.player.move_right(&self.world),
            Action::MoveUp => self.player.move_up(&self.world),
            Action::MoveDown => self.player.move_down(&self.world),
            Action::TurnLeft => self.player.rotate_left(TURN_STEP),
            Action::TurnRight => self.player.rotate_right(TURN_STEP),
            Action::Mine => {
                let (fx, fy) = self.player.front_position();
                let drops = self
                    .player
                    .break_block_in_front(&mut self.world, &mut self.rng);
                if !drops.is_empty() {
                    info!("Block broken at ({}, {}): +{} item(s)", fx, fy, drops.len());
                }
            }
            Action::Quit => {
                info!("Goodbye :)");
                return Outcome::Quit;
            }
        }
        debug!(
            "{} -> player at {:?}",
            action.as_str(),
            self.player.position()
        );
        Outcome::Continue
    }
}
