//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids TUI widget frameworks and instead composes the
//! minimap, first-person view, and status rows into a simple framebuffer
//! that a terminal backend flushes.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render a full frame as a pure function of world + player + viewport
//! - Flush cheaply by diffing consecutive frames

pub mod fb;
pub mod renderer;
pub mod view;

pub use termitek_core as core;
pub use termitek_types as types;

pub use fb::{Cell, CellStyle, Color, FrameBuffer};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::{render, render_into, Viewport};
