use std::ops::ControlFlow;

use macroquad::prelude::*;
use tracing::{info, warn};

use crate::application::{Camera, GameState};

/// Pixels the camera moves per frame while a pan key is held
pub const NUDGE_SPEED: f32 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerButton {
    Primary,
    Secondary,
    Middle,
}

/// Buttons held during a pointer motion
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HeldButtons {
    pub primary: bool,
    pub secondary: bool,
}

/// Everything the simulation reacts to, independent of the windowing backend
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    Quit,
    ToggleRunning,
    Clear,
    /// Fill the visible `(width, height)` viewport with a random soup
    Randomize { viewport: (f32, f32) },
    ResetCamera,
    Scroll { delta: f32, position: (f32, f32) },
    PointerDown { button: PointerButton, position: (f32, f32) },
    PointerMotion { position: (f32, f32), held: HeldButtons },
    PointerUp { button: PointerButton, position: (f32, f32) },
    /// Keyboard pan by a pixel delta
    Nudge { dx: f32, dy: f32 },
}

impl InputEvent {
    /// Events carrying NaN or infinite numbers cannot be mapped to cells
    pub fn is_well_formed(&self) -> bool {
        let finite = |(x, y): (f32, f32)| x.is_finite() && y.is_finite();
        match *self {
            InputEvent::Quit
            | InputEvent::ToggleRunning
            | InputEvent::Clear
            | InputEvent::ResetCamera => true,
            InputEvent::Randomize { viewport } => finite(viewport),
            InputEvent::Scroll { delta, position } => delta.is_finite() && finite(position),
            InputEvent::PointerDown { position, .. }
            | InputEvent::PointerMotion { position, .. }
            | InputEvent::PointerUp { position, .. } => finite(position),
            InputEvent::Nudge { dx, dy } => finite((dx, dy)),
        }
    }
}

/// Apply one event. Breaks with the final state on quit; malformed events are dropped.
pub fn apply_event(
    mut state: GameState,
    camera: &mut Camera,
    event: &InputEvent,
) -> ControlFlow<GameState, GameState> {
    if !event.is_well_formed() {
        warn!(?event, "ignoring malformed input event");
        return ControlFlow::Continue(state);
    }

    match *event {
        InputEvent::Quit => return ControlFlow::Break(state),
        InputEvent::ToggleRunning => state = state.toggle_running(),
        InputEvent::Clear => state = state.clear(),
        InputEvent::Randomize { viewport: (width, height) } => {
            state = state.randomize(camera.visible_region(width, height));
        }
        InputEvent::ResetCamera => camera.reset(),
        InputEvent::Scroll { delta, position } => camera.zoom_at(position, delta),
        InputEvent::PointerDown { button, position } => match button {
            PointerButton::Primary => state.paint(camera, position),
            PointerButton::Secondary => state.erase(camera, position),
            PointerButton::Middle => camera.begin_drag(position),
        },
        InputEvent::PointerMotion { position, held } => {
            camera.drag_to(position);
            if held.primary {
                state.paint(camera, position);
            }
            if held.secondary {
                state.erase(camera, position);
            }
        }
        // Releasing any button ends a drag
        InputEvent::PointerUp { .. } => camera.end_drag(),
        InputEvent::Nudge { dx, dy } => camera.pan(dx, dy),
    }

    ControlFlow::Continue(state)
}

/// Fold a frame's events over the state, stopping at the first quit
pub fn process_events(
    state: GameState,
    camera: &mut Camera,
    events: &[InputEvent],
) -> ControlFlow<GameState, GameState> {
    events
        .iter()
        .try_fold(state, |s, event| apply_event(s, camera, event))
}

/// Drains macroquad's per-frame input into `InputEvent`s
#[derive(Default)]
pub struct InputPoller {
    last_mouse: Option<(f32, f32)>,
}

impl InputPoller {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect this frame's events in down, motion, up order
    pub fn poll(&mut self) -> Vec<InputEvent> {
        let mut events = Vec::new();

        if is_quit_requested() {
            info!("quit requested");
            events.push(InputEvent::Quit);
        }

        let keys = [
            (KeyCode::Space, InputEvent::ToggleRunning),
            (KeyCode::C, InputEvent::Clear),
            (KeyCode::R, InputEvent::Randomize { viewport: (screen_width(), screen_height()) }),
            (KeyCode::H, InputEvent::ResetCamera),
        ];
        events.extend(
            keys.into_iter()
                .filter(|(key, _)| is_key_pressed(*key))
                .map(|(_, event)| event),
        );

        let position = mouse_position();

        let wheel = mouse_wheel().1;
        if wheel != 0.0 {
            events.push(InputEvent::Scroll { delta: wheel.signum(), position });
        }

        let buttons = [
            (MouseButton::Left, PointerButton::Primary),
            (MouseButton::Right, PointerButton::Secondary),
            (MouseButton::Middle, PointerButton::Middle),
        ];

        events.extend(
            buttons.iter()
                .filter(|(mq, _)| is_mouse_button_pressed(*mq))
                .map(|&(_, button)| InputEvent::PointerDown { button, position }),
        );

        if self.last_mouse != Some(position) {
            let held = HeldButtons {
                primary: is_mouse_button_down(MouseButton::Left),
                secondary: is_mouse_button_down(MouseButton::Right),
            };
            events.push(InputEvent::PointerMotion { position, held });
            self.last_mouse = Some(position);
        }

        events.extend(
            buttons.iter()
                .filter(|(mq, _)| is_mouse_button_released(*mq))
                .map(|&(_, button)| InputEvent::PointerUp { button, position }),
        );

        let (dx, dy) = held_nudge();
        if dx != 0.0 || dy != 0.0 {
            events.push(InputEvent::Nudge { dx, dy });
        }

        events
    }
}

/// Arrows or WASD move the world the opposite way the key points
fn held_nudge() -> (f32, f32) {
    let held = |a: KeyCode, b: KeyCode| is_key_down(a) || is_key_down(b);
    let mut delta = (0.0, 0.0);
    if held(KeyCode::Left, KeyCode::A) {
        delta.0 += NUDGE_SPEED;
    }
    if held(KeyCode::Right, KeyCode::D) {
        delta.0 -= NUDGE_SPEED;
    }
    if held(KeyCode::Up, KeyCode::W) {
        delta.1 += NUDGE_SPEED;
    }
    if held(KeyCode::Down, KeyCode::S) {
        delta.1 -= NUDGE_SPEED;
    }
    delta
}
