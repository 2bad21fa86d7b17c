use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameStats {
    pub fps: f32,
    pub frame_time_ms: f32,
}

#[derive(Debug)]
pub(crate) struct FrameMetrics {
    interval_start: Instant,
    interval: Duration,
    frames: u32,
    frame_time_sum: Duration,
}

impl FrameMetrics {
    pub(crate) fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval_start: now,
            interval,
            frames: 0,
            frame_time_sum: Duration::ZERO,
        }
    }

    pub(crate) fn record_frame(&mut self, frame_dt: Duration) {
        self.frames = self.frames.saturating_add(1);
        self.frame_time_sum = self.frame_time_sum.saturating_add(frame_dt);
    }

    /// Emits stats once per interval and starts a new interval.
    pub(crate) fn maybe_snapshot(&mut self, now: Instant) -> Option<FrameStats> {
        let elapsed = now.saturating_duration_since(self.interval_start);
        if elapsed < self.interval {
            return None;
        }

        let elapsed_seconds = elapsed.as_secs_f32().max(f32::EPSILON);
        let frame_time_ms = if self.frames == 0 {
            0.0
        } else {
            (self.frame_time_sum.as_secs_f32() / self.frames as f32) * 1000.0
        };
        let stats = FrameStats {
            fps: self.frames as f32 / elapsed_seconds,
            frame_time_ms,
        };

        self.interval_start = now;
        self.frames = 0;
        self.frame_time_sum = Duration::ZERO;

        Some(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_averages_frame_time_over_interval() {
        let base = Instant::now();
        let mut metrics = FrameMetrics::new(Duration::from_secs(1), base);

        metrics.record_frame(Duration::from_millis(10));
        metrics.record_frame(Duration::from_millis(20));
        metrics.record_frame(Duration::from_millis(30));

        let stats = metrics
            .maybe_snapshot(base + Duration::from_secs(1))
            .expect("stats after a full interval");

        assert!((stats.fps - 3.0).abs() < 0.01);
        assert!((stats.frame_time_ms - 20.0).abs() < 0.001);
    }

    #[test]
    fn nothing_emitted_before_interval_elapses() {
        let base = Instant::now();
        let mut metrics = FrameMetrics::new(Duration::from_secs(1), base);
        metrics.record_frame(Duration::from_millis(16));

        assert!(metrics
            .maybe_snapshot(base + Duration::from_millis(400))
            .is_none());
    }

    #[test]
    fn counters_reset_after_snapshot() {
        let base = Instant::now();
        let mut metrics = FrameMetrics::new(Duration::from_secs(1), base);
        metrics.record_frame(Duration::from_millis(16));
        let _ = metrics.maybe_snapshot(base + Duration::from_secs(1));

        let stats = metrics
            .maybe_snapshot(base + Duration::from_secs(2))
            .expect("second interval");
        assert_eq!(stats, FrameStats::default());
    }
}
