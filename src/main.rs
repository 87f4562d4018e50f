//! Termitek runner (default binary).
//!
//! First-person terminal mining. Input comes from crossterm, frames go out
//! through the framebuffer renderer, and logs go to a file because the
//! terminal itself is the game screen.

use std::fs::File;
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use termitek::core::Game;
use termitek::input::{handle_key_event, should_quit};
use termitek::term::{render_into, FrameBuffer, TerminalRenderer, Viewport};
use termitek::types::{Outcome, FRAME_MS};

const LOG_FILE: &str = "termitek.log";

fn main() -> Result<()> {
    init_logging()?;

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.subsec_nanos())
        .unwrap_or(1);
    info!("termitek starting (seed {})", seed);

    let mut game = Game::new(seed)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Route log output to a file; stdout belongs to the renderer.
fn init_logging() -> Result<()> {
    let file = File::create(LOG_FILE).with_context(|| format!("failed to create {LOG_FILE}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        // Drain pending input, applying each event in arrival order.
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("Goodbye :)");
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        if game.apply_action(action) == Outcome::Quit {
                            return Ok(());
                        }
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Render exactly once per frame.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        render_into(game.world(), game.player(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Sleep until the next frame tick or the next key press.
        event::poll(Duration::from_millis(FRAME_MS))?;
    }
}
