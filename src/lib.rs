// Domain layer - Life engine on a sparse, unbounded grid
pub mod domain;

// Application layer - Camera, simulation state, configuration
pub mod application;

// Infrastructure layer - input and rendering glue
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Cell, LiveSet, Region, step};
pub use application::{Camera, Config, GameState};
pub use input::InputEvent;
