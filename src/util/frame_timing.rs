//! Frame pacing and FPS measurement for the viewer loop.

use web_time::{Duration, Instant};

/// Frame pacing for the viewer loop.
///
/// The spring driver advances once per rendered frame, so capping the frame
/// rate also caps how fast a spring-mode swap settles.
pub struct FrameTiming {
    min_frame_duration: Duration,
    last_frame: Instant,
    frames: u64,
    /// Exponential moving average of the instantaneous rate.
    smoothed_fps: f32,
    smoothing: f32,
}

impl FrameTiming {
    /// Create a timer with the given FPS cap (0 = uncapped).
    #[must_use]
    pub fn new(target_fps: u32, now: Instant) -> Self {
        let min_frame_duration = if target_fps > 0 {
            Duration::from_secs_f64(1.0 / f64::from(target_fps))
        } else {
            Duration::ZERO
        };

        Self {
            min_frame_duration,
            last_frame: now,
            frames: 0,
            smoothed_fps: 60.0,
            smoothing: 0.05,
        }
    }

    /// Whether enough time has passed since the last frame to draw again.
    #[must_use]
    pub fn should_render(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last_frame)
            >= self.min_frame_duration
    }

    /// Record a completed frame.
    pub fn end_frame(&mut self, now: Instant) {
        let frame_time = now
            .saturating_duration_since(self.last_frame)
            .as_secs_f32();
        self.last_frame = now;
        self.frames += 1;

        if frame_time > 0.0 {
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + frame_time.recip() * self.smoothing;
        }
    }

    /// Smoothed frames per second.
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }

    /// Frames recorded since creation.
    #[must_use]
    pub fn frame_count(&self) -> u64 {
        self.frames
    }
}
