use std::cell::Cell;
use std::rc::Rc;

use engine::keys::KeyCode;
use engine::{FrameCommand, Game, InputManager, KeyAction, Window};
use tracing::{debug, info, trace};

const WATCHED_KEY: KeyCode = KeyCode::Space;
const EXIT_KEY: KeyCode = KeyCode::Escape;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct KeyReport {
    just_pressed: bool,
    just_released: bool,
    pressed: bool,
}

impl KeyReport {
    fn of(input: &InputManager, key: KeyCode) -> Self {
        Self {
            just_pressed: input.is_key_just_pressed(key),
            just_released: input.is_key_just_released(key),
            pressed: input.is_key_pressed(key),
        }
    }

    fn has_edge(self) -> bool {
        self.just_pressed || self.just_released
    }
}

#[derive(Debug, Default)]
struct EventTally {
    key_presses: Cell<u64>,
    clicks: Cell<u64>,
    scrolls: Cell<u64>,
}

/// Opens the window, reports the watched key every frame and exits on Escape.
pub(crate) struct SandboxGame {
    frames: u64,
    elapsed_seconds: f64,
    tally: Rc<EventTally>,
}

impl SandboxGame {
    pub(crate) fn new() -> Self {
        Self {
            frames: 0,
            elapsed_seconds: 0.0,
            tally: Rc::new(EventTally::default()),
        }
    }

    fn step(&mut self, dt: f64, input: &InputManager) -> FrameCommand {
        self.frames = self.frames.saturating_add(1);
        self.elapsed_seconds += dt;

        let report = KeyReport::of(input, WATCHED_KEY);
        if report.has_edge() {
            debug!(
                key = ?WATCHED_KEY,
                just_pressed = report.just_pressed,
                just_released = report.just_released,
                pressed = report.pressed,
                "watched_key_edge"
            );
        } else {
            trace!(
                key = ?WATCHED_KEY,
                pressed = report.pressed,
                dt,
                "watched_key_state"
            );
        }

        if input.is_key_just_pressed(EXIT_KEY) {
            info!(reason = "escape_key", "exit_requested");
            return FrameCommand::Exit;
        }
        FrameCommand::Continue
    }
}

impl Game for SandboxGame {
    fn init(&mut self, input: &mut InputManager) {
        let dispatcher = input.dispatcher_mut();

        let tally = Rc::clone(&self.tally);
        dispatcher.on_key(move |event| {
            if event.action == KeyAction::Press {
                tally.key_presses.set(tally.key_presses.get() + 1);
            }
            debug!(
                key = ?event.key,
                action = ?event.action,
                modifiers = ?event.modifiers,
                "key_event"
            );
        });

        let tally = Rc::clone(&self.tally);
        dispatcher.on_mouse_button(move |event| {
            if event.action == KeyAction::Press {
                tally.clicks.set(tally.clicks.get() + 1);
            }
            debug!(
                button = ?event.button,
                action = ?event.action,
                x = event.position.x,
                y = event.position.y,
                "mouse_button_event"
            );
        });

        let tally = Rc::clone(&self.tally);
        dispatcher.on_mouse_scroll(move |event| {
            tally.scrolls.set(tally.scrolls.get() + 1);
            debug!(x = event.offset.x, y = event.offset.y, "mouse_scroll_event");
        });
    }

    fn update(&mut self, dt: f64, input: &InputManager, window: &mut Window) -> FrameCommand {
        if input.is_mouse_dragging() {
            let delta = input.mouse_delta();
            trace!(
                dx = delta.x,
                dy = delta.y,
                width = window.width(),
                height = window.height(),
                "mouse_drag"
            );
        }
        self.step(dt, input)
    }

    fn shutdown(&mut self) {
        info!(
            frames = self.frames,
            elapsed_seconds = self.elapsed_seconds,
            key_presses = self.tally.key_presses.get(),
            clicks = self.tally.clicks.get(),
            scrolls = self.tally.scrolls.get(),
            "sandbox_summary"
        );
    }
}
