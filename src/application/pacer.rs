use std::time::{Duration, Instant};

/// Caps the frame rate by sleeping off whatever is left of each frame budget
pub struct FramePacer {
    frame_budget: Duration,
    last_frame: Instant,
}

impl FramePacer {
    pub fn new(max_fps: u32) -> Self {
        Self {
            frame_budget: Duration::from_secs(1) / max_fps.max(1),
            last_frame: Instant::now(),
        }
    }

    pub const fn frame_budget(&self) -> Duration {
        self.frame_budget
    }

    /// Time left in the current frame budget
    pub fn remaining(&self) -> Duration {
        self.frame_budget.saturating_sub(self.last_frame.elapsed())
    }

    /// Block until the current frame budget is spent, then start the next one
    pub fn throttle(&mut self) {
        let remaining = self.remaining();
        if !remaining.is_zero() {
            std::thread::sleep(remaining);
        }
        self.last_frame = Instant::now();
    }
}
