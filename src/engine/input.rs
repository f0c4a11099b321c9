//! Window and pointer input for GooeyEngine

use glam::Vec2;
use web_time::Instant;

use super::GooeyEngine;
use crate::options::SwapMode;
use crate::params::ParamId;

impl GooeyEngine {
    /// Record a new viewport size. Zero-sized dimensions are ignored.
    /// Touches nothing but the `resolution` parameter.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        let size = Vec2::new(width as f32, height as f32);
        if self.store.set_point(ParamId::Resolution, size).is_ok() {
            log::debug!("viewport resized to {width}x{height}");
        }
    }

    /// Click or tap anywhere in the viewport. Only the spring driver swaps
    /// on click; the tween driver is panel-only. Returns whether a swap was
    /// triggered.
    pub fn pointer_activate(&mut self, now: Instant) -> bool {
        match self.animator.mode() {
            SwapMode::Spring => self.trigger_swap(now),
            SwapMode::Tween => false,
        }
    }
}
