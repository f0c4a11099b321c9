use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Which mechanism animates the layout swap. Exactly one is active.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum SwapMode {
    /// Host-side elastic tween of the square positions, triggered from the
    /// panel.
    #[default]
    Tween,
    /// Shader-side blend driven by a free-running spring, toggled by
    /// clicking the viewport.
    Spring,
}

/// Swap animation tuning.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AnimationOptions {
    /// Swap driver.
    pub swap_mode: SwapMode,
    /// Tween length in milliseconds.
    pub duration_ms: u64,
    /// Spring stiffness (higher = tighter).
    pub stiffness: f32,
    /// Spring velocity retention per tick (lower = less bouncy).
    pub damping: f32,
    /// Frame cap for the viewer tick (0 = follow vsync).
    pub target_fps: u32,
}

impl AnimationOptions {
    /// Tween length as a [`Duration`].
    #[must_use]
    pub const fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            swap_mode: SwapMode::Tween,
            duration_ms: 1000,
            stiffness: 0.10,
            damping: 0.65,
            target_fps: 0,
        }
    }
}
