use tracing::{debug, trace};

use crate::domain::{Cell, Region};

/// Pixels per cell edge at zoom 1.0
pub const CELL_SIZE: f32 = 10.0;
pub const MIN_ZOOM: f32 = 0.1;
pub const MAX_ZOOM: f32 = 10.0;
/// Zoom multiplier per scroll step
pub const ZOOM_STEP: f32 = 1.1;

/// Axis-aligned rectangle in screen pixels
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct ScreenRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl ScreenRect {
    /// Half-open containment: left/top edges inside, right/bottom outside
    pub fn contains(&self, (px, py): (f32, f32)) -> bool {
        px >= self.x && px < self.x + self.width
            && py >= self.y && py < self.y + self.height
    }

    /// Check if any part of the rect lies inside a `width` x `height` viewport
    pub fn intersects_viewport(&self, width: f32, height: f32) -> bool {
        self.x + self.width >= 0.0 && self.x <= width
            && self.y + self.height >= 0.0 && self.y <= height
    }
}

/// Camera maps between screen pixels and world cells under pan and zoom.
///
/// It is either Idle or Dragging; a drag anchor is present only while dragging.
#[derive(Clone, Debug, PartialEq)]
pub struct Camera {
    /// Pixel position of the world origin
    pub offset_x: f32,
    pub offset_y: f32,
    zoom: f32,  // 1.0 = one cell is `cell_size` pixels
    cell_size: f32,
    /// World point under the cursor at drag start, in zoom-normalized units
    drag_anchor: Option<(f32, f32)>,
}

impl Camera {
    pub fn new() -> Self {
        Self::with_cell_size(CELL_SIZE)
    }

    pub fn with_cell_size(cell_size: f32) -> Self {
        Self {
            offset_x: 0.0,
            offset_y: 0.0,
            zoom: 1.0,
            cell_size,
            drag_anchor: None,
        }
    }

    pub const fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Set zoom directly, clamped to `[MIN_ZOOM, MAX_ZOOM]`
    pub fn set_zoom(&mut self, zoom: f32) {
        if zoom.is_finite() {
            self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
        }
    }

    pub const fn cell_size(&self) -> f32 {
        self.cell_size
    }

    /// On-screen edge length of one cell
    pub fn scaled_cell_size(&self) -> f32 {
        self.cell_size * self.zoom
    }

    /// Convert world cell to the screen rectangle it covers
    pub fn world_to_screen(&self, cell: Cell) -> ScreenRect {
        let size = self.scaled_cell_size();
        ScreenRect {
            x: cell.x as f32 * size + self.offset_x,
            y: cell.y as f32 * size + self.offset_y,
            width: size,
            height: size,
        }
    }

    /// Convert screen pixel to the world cell under it.
    /// Floors the quotient and then rounds it, so negative coordinates snap downwards.
    pub fn screen_to_world(&self, (px, py): (f32, f32)) -> Cell {
        let size = self.scaled_cell_size();
        let x = ((px - self.offset_x) / size).floor().round();
        let y = ((py - self.offset_y) / size).floor().round();
        Cell::new(x as i64, y as i64)
    }

    /// Zoom by `ZOOM_STEP^scroll_delta`, keeping the world point under `pos` fixed on screen
    pub fn zoom_at(&mut self, (px, py): (f32, f32), scroll_delta: f32) {
        let world_x = (px - self.offset_x) / self.scaled_cell_size();
        let world_y = (py - self.offset_y) / self.scaled_cell_size();

        self.zoom = (self.zoom * ZOOM_STEP.powf(scroll_delta)).clamp(MIN_ZOOM, MAX_ZOOM);

        self.offset_x = px - world_x * self.scaled_cell_size();
        self.offset_y = py - world_y * self.scaled_cell_size();
        trace!(zoom = self.zoom, "zoomed at ({px}, {py})");
    }

    /// Start panning from `pos` (Idle -> Dragging)
    pub fn begin_drag(&mut self, (px, py): (f32, f32)) {
        self.drag_anchor = Some((
            px / self.zoom - self.offset_x / self.zoom,
            py / self.zoom - self.offset_y / self.zoom,
        ));
        debug!("drag started at ({px}, {py})");
    }

    /// Move the anchored point under `pos`. No effect while Idle.
    pub fn drag_to(&mut self, (px, py): (f32, f32)) {
        if let Some((ax, ay)) = self.drag_anchor {
            self.offset_x = px - ax * self.zoom;
            self.offset_y = py - ay * self.zoom;
        }
    }

    /// Stop panning (Dragging -> Idle)
    pub fn end_drag(&mut self) {
        if self.drag_anchor.take().is_some() {
            debug!("drag ended");
        }
    }

    pub const fn is_dragging(&self) -> bool {
        self.drag_anchor.is_some()
    }

    /// Pan camera by a pixel delta
    pub fn pan(&mut self, dx: f32, dy: f32) {
        self.offset_x += dx;
        self.offset_y += dy;
    }

    /// Cells covering a `width` x `height` viewport, for culling and seeding
    pub fn visible_region(&self, width: f32, height: f32) -> Region {
        Region::new(
            self.screen_to_world((0.0, 0.0)),
            self.screen_to_world((width, height)),
        )
    }

    /// Reset camera to default
    pub fn reset(&mut self) {
        *self = Self::with_cell_size(self.cell_size);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
