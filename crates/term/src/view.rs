//! View composition: maps world and player state into a framebuffer.
//!
//! This module is pure (no I/O). Each HUD element is a stateless function
//! of `(World, Player, viewport)`; [`render_into`] runs them in a fixed
//! order so later elements layer over earlier ones deterministically. The
//! screen splits into the top-left minimap, the first-person view offset
//! to its right, and status text rows below the map.

use termitek_core::catalog;
use termitek_core::raycast::{column_angle, march};
use termitek_core::{Player, World};

use crate::fb::{CellStyle, Color, FrameBuffer};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Columns between the minimap's right edge and the first-person view.
const VIEW_GAP: u16 = 2;

/// Trees project shorter than walls by this depth factor.
const TREE_DEPTH_SCALE: f64 = 1.5;

/// Render one frame into an existing framebuffer.
///
/// This is the allocation-free hot path. Callers can reuse a framebuffer
/// across frames and only pay a resize when the terminal size changes.
pub fn render_into(world: &World, player: &Player, viewport: Viewport, fb: &mut FrameBuffer) {
    fb.resize(viewport.width, viewport.height);
    fb.clear(CellStyle::default().into_cell(' '));

    let hud_y = world.height() as u16;

    draw_minimap(world, player, fb);
    draw_compass(player, hud_y, fb);
    draw_view3d(world, player, viewport, fb);
    draw_inventory(player, hud_y, fb);
    draw_facing(world, player, hud_y, fb);
}

/// Render one frame into a freshly allocated framebuffer.
pub fn render(world: &World, player: &Player, viewport: Viewport) -> FrameBuffer {
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);
    render_into(world, player, viewport, &mut fb);
    fb
}

/// Top-down map in the top-left corner, one cell per tile, with the
/// player marked `P`. Trees get a green backdrop so they stand out.
fn draw_minimap(world: &World, player: &Player, fb: &mut FrameBuffer) {
    for y in 0..world.height() {
        for x in 0..world.width() {
            if let Some(block) = world.get_block(x, y) {
                let bg = if block.symbol == catalog::TREE.symbol {
                    Color::Green
                } else {
                    Color::Black
                };
                fb.put_char(x as u16, y as u16, block.symbol, CellStyle::on(bg));
            }
        }
    }

    let (px, py) = player.position();
    fb.put_char(px as u16, py as u16, 'P', CellStyle::on(Color::Black));
}

/// Heading letter and player coordinates under the minimap.
fn draw_compass(player: &Player, hud_y: u16, fb: &mut FrameBuffer) {
    let style = CellStyle::new(Color::Yellow, Color::Black);

    let heading = format!("[  {}  ]", player.heading().letter());
    fb.put_str(0, hud_y + 2, &heading, style);

    let (x, y) = player.position();
    let position = format!("[{} , {}]", x, y);
    fb.put_str(0, hud_y + 3, &position, style);
}

/// First-person column projection to the right of the minimap.
///
/// One ray per column. Ceiling above the wall band, floor below it; the
/// three segments always partition the column's full height.
fn draw_view3d(world: &World, player: &Player, viewport: Viewport, fb: &mut FrameBuffer) {
    let view_w = viewport.width / 2;
    let view_h = viewport.height;
    let start_x = world.width() as u16 + VIEW_GAP;
    let origin = (f64::from(player.x()), f64::from(player.y()));

    for column in 0..view_w {
        let angle = column_angle(player.angle(), column, view_w);
        let hit = march(world, origin, angle);

        let (height, band) = if hit.hit_tree {
            (
                f64::from(view_h) / (hit.depth * TREE_DEPTH_SCALE),
                Color::Green,
            )
        } else if hit.depth > 0.0 {
            (f64::from(view_h) / hit.depth, Color::White)
        } else {
            (f64::from(view_h), Color::White)
        };

        // Vertically centered band, truncated like the projection ratio.
        let half = f64::from(view_h) / 2.0;
        let top = ((half - height / 2.0) as i32).max(0) as u16;
        let bottom = ((half + height / 2.0) as i32).min(i32::from(view_h)) as u16;

        let x = start_x + column;
        fb.fill_rect(x, 0, 1, top, ' ', CellStyle::on(Color::Blue));
        fb.fill_rect(x, top, 1, bottom - top, '#', CellStyle::on(band));
        fb.fill_rect(x, bottom, 1, view_h - bottom, '.', CellStyle::on(Color::Green));
    }
}

/// Held items, aggregated by name for display only.
fn draw_inventory(player: &Player, hud_y: u16, fb: &mut FrameBuffer) {
    let style = CellStyle::new(Color::Blue, Color::Black);

    let mut counts: Vec<(&str, u32)> = Vec::new();
    for item in player.inventory().items() {
        match counts.iter_mut().find(|(name, _)| *name == item.name) {
            Some((_, total)) => *total += item.amount,
            None => counts.push((item.name, item.amount)),
        }
    }

    let line = if counts.is_empty() {
        String::from("Inventory: -")
    } else {
        let entries: Vec<String> = counts
            .iter()
            .map(|(name, total)| format!("{name} x{total}"))
            .collect();
        format!("Inventory: {}", entries.join(", "))
    };
    fb.put_str(0, hud_y + 4, &line, style);
}

/// Tooltip of the block the player is facing.
fn draw_facing(world: &World, player: &Player, hud_y: u16, fb: &mut FrameBuffer) {
    let style = CellStyle::new(Color::Cyan, Color::Black);
    let line = match player.facing_block(world) {
        Some(block) => format!("Facing: {}", block.tooltip),
        None => String::from("Facing: nothing"),
    };
    fb.put_str(0, hud_y + 5, &line, style);
}
