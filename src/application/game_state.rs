use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, trace, warn};

use crate::domain::{LiveSet, Region, life};
use super::{Camera, Config};

/// Most cells a single random soup may visit
pub const MAX_SOUP_CELLS: u64 = 4_000_000;

/// GameState owns the simulation.
/// This is the application layer that coordinates domain logic.
pub struct GameState {
    pub live: LiveSet,
    pub is_running: bool,
    pub generation: u64,
    pub update_timer: f32,
    /// `None` advances one generation per frame
    pub ticks_per_second: Option<f32>,
    pub density: f64,
    /// Largest region `randomize` will fill
    pub soup_budget: u64,
    rng: StdRng,
}

impl GameState {
    /// Create an empty, paused game
    pub fn new() -> Self {
        Self {
            live: LiveSet::new(),
            is_running: false,
            generation: 0,
            update_timer: 0.0,
            ticks_per_second: None,
            density: 0.3,
            soup_budget: MAX_SOUP_CELLS,
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self {
            is_running: config.running,
            ticks_per_second: config.tps,
            density: config.density,
            rng,
            ..Self::new()
        }
    }

    /// Start from an existing population (builder pattern)
    pub fn with_live(mut self, live: LiveSet) -> Self {
        self.live = live;
        self
    }

    /// Set running state (builder pattern)
    pub fn with_running(mut self, running: bool) -> Self {
        self.is_running = running;
        self
    }

    /// Toggle play/pause state
    pub fn toggle_running(mut self) -> Self {
        self.is_running = !self.is_running;
        debug!(running = self.is_running, "toggled simulation");
        self
    }

    /// Kill every cell and reset generation counter
    pub fn clear(mut self) -> Self {
        self.live.clear();
        self.generation = 0;
        self.is_running = false;
        debug!("cleared");
        self
    }

    /// Replace the population with a random soup over `region`.
    /// Regions larger than the soup budget are shrunk around their centre.
    pub fn randomize(mut self, region: Region) -> Self {
        let region = if region.area() > self.soup_budget {
            let capped = region.capped(self.soup_budget);
            warn!(requested = region.area(), filled = capped.area(), "soup region too large, shrinking");
            capped
        } else {
            region
        };
        self.live = LiveSet::random_soup(region, self.density, &mut self.rng);
        self.generation = 0;
        self.is_running = false;
        debug!(population = self.live.len(), ?region, "randomized");
        self
    }

    /// Bring the cell under `pos` to life
    pub fn paint(&mut self, camera: &Camera, pos: (f32, f32)) {
        self.live.insert(camera.screen_to_world(pos));
    }

    /// Kill the cell under `pos`, if alive
    pub fn erase(&mut self, camera: &Camera, pos: (f32, f32)) {
        self.live.remove(camera.screen_to_world(pos));
    }

    /// Update simulation by one frame
    pub fn tick(mut self, delta_time: f32) -> Self {
        if !self.is_running {
            return self;
        }

        if let Some(tps) = self.ticks_per_second {
            self.update_timer += delta_time;
            if self.update_timer < 1.0 / tps {
                return self;
            }
            self.update_timer = 0.0;
        }

        self.live = life::step(&self.live);
        self.generation += 1;
        trace!(generation = self.generation, population = self.live.len(), "tick");
        self
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    fn blinker() -> LiveSet {
        [(0, -1), (0, 0), (0, 1)].into_iter().map(Cell::from).collect()
    }

    #[test]
    fn test_paused_tick_does_nothing() {
        let state = GameState::new().with_live(blinker()).tick(1.0);
        assert_eq!(state.live, blinker());
        assert_eq!(state.generation, 0);
    }

    #[test]
    fn test_running_ticks_every_frame() {
        let state = GameState::new()
            .with_live(blinker())
            .with_running(true)
            .tick(0.0)
            .tick(0.0);
        assert_eq!(state.live, blinker());
        assert_eq!(state.generation, 2);
    }

    #[test]
    fn test_tick_rate_cap_waits_for_interval() {
        let mut state = GameState::new().with_live(blinker()).with_running(true);
        state.ticks_per_second = Some(10.0);

        let state = state.tick(0.05);
        assert_eq!(state.generation, 0);
        let state = state.tick(0.06);
        assert_eq!(state.generation, 1);
        assert_eq!(state.update_timer, 0.0);
    }

    #[test]
    fn test_paint_and_erase() {
        let camera = Camera::new();
        let mut state = GameState::new();

        state.paint(&camera, (15.0, 25.0));
        state.paint(&camera, (12.0, 21.0));
        assert_eq!(state.live.len(), 1);
        assert!(state.live.contains(Cell::new(1, 2)));

        state.erase(&camera, (-5.0, -5.0));
        assert_eq!(state.live.len(), 1);
        state.erase(&camera, (19.0, 29.0));
        assert!(state.live.is_empty());
    }

    #[test]
    fn test_clear_resets() {
        let state = GameState::new()
            .with_live(blinker())
            .with_running(true)
            .tick(0.0)
            .clear();
        assert!(state.live.is_empty());
        assert_eq!(state.generation, 0);
        assert!(!state.is_running);
    }

    #[test]
    fn test_randomize_is_seeded() {
        let config = Config { seed: Some(42), ..Config::default() };
        let region = Region::new(Cell::new(-5, -5), Cell::new(5, 5));

        let a = GameState::from_config(&config).randomize(region);
        let b = GameState::from_config(&config).randomize(region);
        assert_eq!(a.live, b.live);
        assert!(a.live.iter().all(|c| region.contains(c)));
        assert!(!a.is_running);
    }

    #[test]
    fn test_randomize_caps_huge_region() {
        let mut state = GameState::from_config(&Config { seed: Some(3), density: 1.0, ..Config::default() });
        state.soup_budget = 2_500;

        let huge = Region::new(Cell::new(-1_000_000_000, -1_000_000_000), Cell::new(1_000_000_000, 1_000_000_000));
        let state = state.randomize(huge);

        assert_eq!(state.live.len(), 2_500);
        let bounds = state.live.bounds().unwrap();
        assert_eq!(bounds.area(), 2_500);
        assert!(bounds.contains(Cell::new(0, 0)));
    }

    #[test]
    fn test_min_zoom_viewport_fits_budget_at_smallest_cell() {
        let mut camera = Camera::with_cell_size(1.0);
        camera.zoom_at((0.0, 0.0), -1000.0);
        let region = camera.visible_region(1400.0, 900.0);
        assert!(region.area() > MAX_SOUP_CELLS);
        assert!(region.capped(MAX_SOUP_CELLS).area() <= MAX_SOUP_CELLS);
    }

    #[test]
    fn test_from_config() {
        let config = Config { running: true, tps: Some(5.0), density: 0.5, ..Config::default() };
        let state = GameState::from_config(&config);
        assert!(state.is_running);
        assert_eq!(state.ticks_per_second, Some(5.0));
        assert_eq!(state.density, 0.5);
    }
}
