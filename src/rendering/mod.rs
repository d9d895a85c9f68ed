use macroquad::prelude::*;

use crate::application::{Camera, GameState, ScreenRect};
use crate::domain::LiveSet;

const BACKGROUND: Color = WHITE;
const ALIVE: Color = BLACK;
const STATUS_TEXT: Color = Color::new(0.8, 0.1, 0.1, 1.0);

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// One screen rectangle per live cell
pub fn cell_rects<'a>(live: &'a LiveSet, camera: &'a Camera) -> impl Iterator<Item = ScreenRect> + 'a {
    live.iter().map(|cell| camera.world_to_screen(cell))
}

/// Rectangles of live cells that overlap a `width` x `height` viewport
pub fn visible_rects<'a>(
    live: &'a LiveSet,
    camera: &'a Camera,
    width: f32,
    height: f32,
) -> impl Iterator<Item = ScreenRect> + 'a {
    cell_rects(live, camera).filter(move |rect| rect.intersects_viewport(width, height))
}

/// FPS readout plus simulation status
pub fn status_line(fps: i32, state: &GameState, camera: &Camera) -> String {
    format!(
        "{} FPS | Gen {} | Pop {} | Zoom {:.1}x | {}",
        fps,
        state.generation,
        format_number(state.live.len()),
        camera.zoom(),
        if state.is_running { "Running" } else { "Paused" },
    )
}

/// Clear the canvas and draw every visible live cell plus the status line
pub fn draw_frame(state: &GameState, camera: &Camera) {
    clear_background(BACKGROUND);

    for rect in visible_rects(&state.live, camera, screen_width(), screen_height()) {
        draw_rectangle(rect.x, rect.y, rect.width, rect.height, ALIVE);
    }

    draw_text(&status_line(get_fps(), state, camera), 10.0, 20.0, 20.0, STATUS_TEXT);
}
