use std::time::{Duration, Instant};

use super::clock::FrameClock;
use super::loop_runner::{FrameCommand, Game};
use super::{InputManager, Window};

/// What a single frame drives: the game update, then the present.
pub(crate) trait FrameTarget {
    fn update(&mut self, dt: f64, input: &InputManager) -> FrameCommand;
    fn present(&mut self) -> Result<(), pixels::Error>;
}

/// Drives a boxed [`Game`] against the live window.
pub(crate) struct WindowFrame<'a> {
    pub(crate) game: &'a mut dyn Game,
    pub(crate) window: &'a mut Window,
}

impl FrameTarget for WindowFrame<'_> {
    fn update(&mut self, dt: f64, input: &InputManager) -> FrameCommand {
        self.game.update(dt, input, self.window)
    }

    fn present(&mut self) -> Result<(), pixels::Error> {
        self.window.update()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FrameOutcome {
    /// Raw time since the previous frame; `None` on the first frame.
    pub(crate) elapsed: Option<Duration>,
    pub(crate) command: FrameCommand,
}

/// Runs one frame. The first frame only closes the input frame: it has no
/// delta, so neither the update nor the present run.
///
/// `end_frame` runs even when the present fails, so edge state never leaks
/// into the next frame.
pub(crate) fn run_frame(
    now: Instant,
    clock: &mut FrameClock,
    input: &mut InputManager,
    target: &mut impl FrameTarget,
) -> Result<FrameOutcome, pixels::Error> {
    let Some(elapsed) = clock.tick(now) else {
        input.end_frame();
        return Ok(FrameOutcome {
            elapsed: None,
            command: FrameCommand::Continue,
        });
    };

    let dt = clock.delta_seconds(elapsed);
    let command = target.update(dt, input);
    let presented = target.present();
    input.end_frame();
    presented?;

    Ok(FrameOutcome {
        elapsed: Some(elapsed),
        command,
    })
}
