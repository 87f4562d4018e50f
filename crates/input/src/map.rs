//! Key mapping from terminal events to player intents.

use crate::types::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to player intents.
pub fn handle_key_event(key: KeyEvent) -> Option<Action> {
    match key.code {
        // Movement
        KeyCode::Left => Some(Action::MoveLeft),
        KeyCode::Right => Some(Action::MoveRight),
        KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Down => Some(Action::MoveDown),

        // View rotation
        KeyCode::Char('a') | KeyCode::Char('A') => Some(Action::TurnLeft),
        KeyCode::Char('d') | KeyCode::Char('D') => Some(Action::TurnRight),

        // Mining
        KeyCode::Char(' ') | KeyCode::Char('m') | KeyCode::Char('M') => Some(Action::Mine),

        KeyCode::Esc => Some(Action::Quit),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
