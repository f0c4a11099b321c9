//! An in-flight eased tween of the square positions.

use std::time::Duration;

use glam::Vec2;
use web_time::Instant;

use super::easing::EasingFunction;

/// Linear interpolation between two points.
#[inline]
#[must_use]
pub fn lerp_vec2(t: f32, start: Vec2, end: Vec2) -> Vec2 {
    start + (end - start) * t
}

/// Captured start and target positions of the swap group, the time the
/// tween began, and how long it runs.
///
/// Driven by wall-clock elapsed time so the real duration is preserved
/// regardless of frame rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    start: [Vec2; 3],
    target: [Vec2; 3],
    start_time: Instant,
    duration: Duration,
    easing: EasingFunction,
}

impl Transition {
    /// Begin a tween at `start_time`.
    #[must_use]
    pub const fn new(
        start: [Vec2; 3],
        target: [Vec2; 3],
        start_time: Instant,
        duration: Duration,
        easing: EasingFunction,
    ) -> Self {
        Self {
            start,
            target,
            start_time,
            duration,
            easing,
        }
    }

    /// Positions captured when the tween began.
    #[must_use]
    pub const fn start(&self) -> &[Vec2; 3] {
        &self.start
    }

    /// Positions the tween ends at.
    #[must_use]
    pub const fn target(&self) -> &[Vec2; 3] {
        &self.target
    }

    /// When the tween began.
    #[must_use]
    pub const fn start_time(&self) -> Instant {
        self.start_time
    }

    /// Total tween length.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        self.duration
    }

    /// Normalized progress in [0, 1]. A zero duration is always complete.
    #[must_use]
    pub fn progress(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.start_time);

        if self.duration.is_zero() {
            1.0
        } else {
            (elapsed.as_secs_f32() / self.duration.as_secs_f32())
                .clamp(0.0, 1.0)
        }
    }

    /// Whether the tween has reached its end.
    #[must_use]
    pub fn is_complete(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.start_time) >= self.duration
    }

    /// Interpolated positions at `now`. Past the end this is exactly
    /// [`target`](Self::target).
    #[must_use]
    pub fn sample(&self, now: Instant) -> [Vec2; 3] {
        if self.is_complete(now) {
            return self.target;
        }
        let eased = self.easing.evaluate(self.progress(now));
        std::array::from_fn(|i| lerp_vec2(eased, self.start[i], self.target[i]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make(start_time: Instant, easing: EasingFunction) -> Transition {
        Transition::new(
            [Vec2::new(-0.2, 0.2), Vec2::ZERO, Vec2::new(0.2, -0.2)],
            [Vec2::new(0.2, -0.2), Vec2::ZERO, Vec2::new(-0.2, 0.2)],
            start_time,
            Duration::from_millis(1000),
            easing,
        )
    }

    #[test]
    fn test_progress() {
        let start = Instant::now();
        let t = make(start, EasingFunction::Linear);

        assert!((t.progress(start) - 0.0).abs() < 0.01);
        assert!(
            (t.progress(start + Duration::from_millis(500)) - 0.5).abs()
                < 0.01
        );
        assert!(
            (t.progress(start + Duration::from_millis(1000)) - 1.0).abs()
                < 0.01
        );
        assert!(
            (t.progress(start + Duration::from_millis(3000)) - 1.0).abs()
                < 0.01
        );
    }

    #[test]
    fn test_sample_linear_midpoint() {
        let start = Instant::now();
        let t = make(start, EasingFunction::Linear);
        let mid = t.sample(start + Duration::from_millis(500));
        assert!(mid[0].abs_diff_eq(Vec2::ZERO, 1e-5));
        assert!(mid[2].abs_diff_eq(Vec2::ZERO, 1e-5));
        assert_eq!(mid[1], Vec2::ZERO);
    }

    #[test]
    fn test_sample_at_start_is_start() {
        let start = Instant::now();
        let t = make(start, EasingFunction::ElasticOut);
        assert_eq!(t.sample(start), *t.start());
    }

    #[test]
    fn test_sample_past_end_is_exact_target() {
        let start = Instant::now();
        let t = make(start, EasingFunction::ElasticOut);
        let end = start + Duration::from_millis(1000);
        assert!(t.is_complete(end));
        assert_eq!(t.sample(end), *t.target());
        assert_eq!(t.sample(end + Duration::from_secs(5)), *t.target());
    }

    #[test]
    fn test_elastic_sample_overshoots_target() {
        let start = Instant::now();
        let t = make(start, EasingFunction::ElasticOut);
        // eased ≈ 1.354 at 15% progress: square 1 runs past x = 0.2.
        let p = t.sample(start + Duration::from_millis(150));
        assert!(p[0].x > 0.2, "no overshoot: {:?}", p[0]);
    }

    #[test]
    fn test_zero_duration_is_complete() {
        let start = Instant::now();
        let t = Transition::new(
            [Vec2::ZERO; 3],
            [Vec2::ONE; 3],
            start,
            Duration::ZERO,
            EasingFunction::ElasticOut,
        );
        assert!(t.is_complete(start));
        assert_eq!(t.progress(start), 1.0);
        assert_eq!(t.sample(start), [Vec2::ONE; 3]);
    }
}
