use std::time::{Duration, Instant};

/// Measures the time between frames.
///
/// The first tick has nothing to measure against and yields no delta, so the
/// first frame skips the game update.
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_tick: Option<Instant>,
    max_frame_delta: Duration,
}

impl FrameClock {
    pub fn new(max_frame_delta: Duration) -> Self {
        Self {
            last_tick: None,
            max_frame_delta,
        }
    }

    /// Returns the raw elapsed time since the previous tick, if any.
    pub fn tick(&mut self, now: Instant) -> Option<Duration> {
        let previous = self.last_tick.replace(now)?;
        let elapsed = now.saturating_duration_since(previous);
        (!elapsed.is_zero()).then_some(elapsed)
    }

    /// Clamped delta in seconds for the game update.
    pub fn delta_seconds(&self, elapsed: Duration) -> f64 {
        elapsed.min(self.max_frame_delta).as_secs_f64()
    }
}
