//! Per-frame animation methods for GooeyEngine

use web_time::Instant;

use super::GooeyEngine;
use crate::error::GooeyError;
use crate::params::ParamId;

impl GooeyEngine {
    /// Advance one frame: update `time`, step the swap animation and write
    /// the results into the store. O(1); never blocks.
    ///
    /// # Errors
    ///
    /// Propagates store write failures.
    pub fn tick(&mut self, now: Instant) -> Result<(), GooeyError> {
        let elapsed = now.saturating_duration_since(self.start_time);
        self.store.set_scalar(ParamId::Time, elapsed.as_secs_f32())?;

        let was_animating = self.animator.is_animating();
        self.animator.tick(&mut self.store, now)?;

        // Let the panel catch up with the positions the tween wrote.
        if was_animating && !self.animator.is_animating() {
            self.panel.refresh(&self.store);
        }
        Ok(())
    }

    /// Start the layout swap. Returns `false` if one is already running.
    pub fn trigger_swap(&mut self, now: Instant) -> bool {
        self.animator.trigger(&self.store, now)
    }
}
