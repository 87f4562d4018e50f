//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Action`] intents that the
//! game session applies; everything it does not recognize is a no-op for
//! the caller.

pub mod map;

pub use termitek_types as types;

pub use map::{handle_key_event, should_quit};
