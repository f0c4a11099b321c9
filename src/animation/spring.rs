//! Discrete spring-damper integrator for a single scalar.

/// Under-damped discrete spring pulling `position` toward `target`.
///
/// One [`step`](Self::step) per frame:
/// `v = (v + (target - p)·k)·d; p += v`. There is no rest detection; the
/// spring converges asymptotically and keeps stepping forever. Output is a
/// pure function of the coefficients, the target sequence and the step
/// count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    position: f32,
    velocity: f32,
    target: f32,
    stiffness: f32,
    damping: f32,
}

impl Spring {
    /// Default pull strength.
    pub const DEFAULT_STIFFNESS: f32 = 0.10;
    /// Default per-step velocity retention.
    pub const DEFAULT_DAMPING: f32 = 0.65;

    /// A spring at rest at 0 with the given coefficients.
    #[must_use]
    pub const fn new(stiffness: f32, damping: f32) -> Self {
        Self {
            position: 0.0,
            velocity: 0.0,
            target: 0.0,
            stiffness,
            damping,
        }
    }

    /// Advance one step and return the new position.
    pub fn step(&mut self) -> f32 {
        let delta = self.target - self.position;
        self.velocity = (self.velocity + delta * self.stiffness) * self.damping;
        self.position += self.velocity;
        self.position
    }

    /// Set the value the spring pulls toward.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Flip the target between 0 and 1.
    pub fn toggle_target(&mut self) {
        self.target = if self.target == 0.0 { 1.0 } else { 0.0 };
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> f32 {
        self.position
    }

    /// Current velocity.
    #[must_use]
    pub const fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Current target.
    #[must_use]
    pub const fn target(&self) -> f32 {
        self.target
    }
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(Self::DEFAULT_STIFFNESS, Self::DEFAULT_DAMPING)
    }
}
