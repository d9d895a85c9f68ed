mod camera;
mod config;
mod game_state;
mod pacer;

pub use camera::{Camera, ScreenRect, CELL_SIZE, MIN_ZOOM, MAX_ZOOM, ZOOM_STEP};
pub use config::{Config, ConfigError};
pub use game_state::GameState;
pub use pacer::FramePacer;
