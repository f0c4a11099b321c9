//! Host-side scene engine.
//!
//! [`GooeyEngine`] owns the [`ParameterStore`], the [`SwapAnimator`] and the
//! [`PanelBinding`]. An external loop calls [`GooeyEngine::tick`] once per
//! display refresh and hands [`GooeyEngine::uniform`] to the renderer; the
//! engine never reschedules itself.

mod animation;
mod input;
mod panel;

use web_time::Instant;

use crate::animation::SwapAnimator;
use crate::options::Options;
use crate::panel::PanelBinding;
use crate::params::{ParameterStore, SceneUniform};

/// Owns all process-lifetime scene state. Single-threaded: every mutation
/// happens on the caller's frame or event callback.
#[derive(Debug)]
pub struct GooeyEngine {
    store: ParameterStore,
    animator: SwapAnimator,
    panel: PanelBinding,
    options: Options,
    start_time: Instant,
}

impl GooeyEngine {
    /// Build an engine from options, with `start_time` as time zero.
    #[must_use]
    pub fn new(options: Options, start_time: Instant) -> Self {
        let store = ParameterStore::new(&options.scene);
        let animator = SwapAnimator::new(&options.animation);
        let panel = PanelBinding::new(&store);
        log::info!(
            "engine ready ({:?} swap, {} ms tween)",
            options.animation.swap_mode,
            options.animation.duration_ms
        );
        Self {
            store,
            animator,
            panel,
            options,
            start_time,
        }
    }

    /// Current parameter values.
    #[must_use]
    pub const fn store(&self) -> &ParameterStore {
        &self.store
    }

    /// The swap scheduler.
    #[must_use]
    pub const fn animator(&self) -> &SwapAnimator {
        &self.animator
    }

    /// The control-panel binding.
    #[must_use]
    pub const fn panel(&self) -> &PanelBinding {
        &self.panel
    }

    /// Options the engine was built with.
    #[must_use]
    pub const fn options(&self) -> &Options {
        &self.options
    }

    /// Pack the store for the renderer. Call once per frame, after
    /// [`tick`](Self::tick).
    #[must_use]
    pub fn uniform(&self) -> SceneUniform {
        self.store.uniform()
    }
}
