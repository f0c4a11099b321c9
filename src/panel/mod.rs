//! Control surface binding between the external slider panel and the
//! parameter store.
//!
//! The widget library itself is behind [`PanelDisplay`]; it receives slider
//! registrations once and value refreshes after programmatic writes, and
//! sends [`UiAction`]s back. Range enforcement is the widget's job: the
//! binding forwards values as-is.

mod action;
mod sliders;

pub use action::{SliderTarget, UiAction};
use rustc_hash::FxHashMap;
pub use sliders::{slider_specs, SliderSpec};
use web_time::Instant;

use crate::animation::SwapAnimator;
use crate::error::GooeyError;
use crate::params::{LayoutPreset, ParameterStore};

/// Rendering side of the control panel (the widget library).
pub trait PanelDisplay {
    /// Create one slider per spec plus the reset and swap buttons.
    fn register(&mut self, sliders: &[SliderSpec]);
    /// Show these `(slider id, value)` pairs.
    fn refresh(&mut self, values: &[(String, f32)]);
}

/// Two-way sync between panel widgets and the [`ParameterStore`].
pub struct PanelBinding {
    sliders: Vec<SliderSpec>,
    /// Values the panel currently shows, by slider id.
    displayed: FxHashMap<String, f32>,
    display: Option<Box<dyn PanelDisplay>>,
}

impl PanelBinding {
    /// Build slider specs from the store's current values. No display is
    /// attached yet.
    #[must_use]
    pub fn new(store: &ParameterStore) -> Self {
        let sliders = slider_specs(store);
        let displayed = sliders
            .iter()
            .map(|s| (s.id.clone(), s.initial))
            .collect();
        Self {
            sliders,
            displayed,
            display: None,
        }
    }

    /// Register every slider with `display` and keep it for refreshes.
    pub fn attach(
        &mut self,
        mut display: Box<dyn PanelDisplay>,
        store: &ParameterStore,
    ) {
        display.register(&self.sliders);
        self.display = Some(display);
        self.refresh(store);
    }

    /// Slider specs in panel order.
    #[must_use]
    pub fn sliders(&self) -> &[SliderSpec] {
        &self.sliders
    }

    /// The value the panel shows for `slider_id`.
    #[must_use]
    pub fn displayed(&self, slider_id: &str) -> Option<f32> {
        self.displayed.get(slider_id).copied()
    }

    /// Re-read every slider's value from the store and push it to the panel.
    pub fn refresh(&mut self, store: &ParameterStore) {
        let values: Vec<(String, f32)> = self
            .sliders
            .iter()
            .map(|s| (s.id.clone(), s.target.read(store)))
            .collect();
        for (id, value) in &values {
            let _ = self.displayed.insert(id.clone(), *value);
        }
        if let Some(display) = self.display.as_mut() {
            display.refresh(&values);
        }
    }

    /// Apply one panel action.
    ///
    /// # Errors
    ///
    /// [`GooeyError::UnknownParam`] for slider names that do not exist, and
    /// store write failures for non-finite values.
    pub fn apply(
        &mut self,
        action: &UiAction,
        store: &mut ParameterStore,
        animator: &mut SwapAnimator,
        now: Instant,
    ) -> Result<(), GooeyError> {
        match action {
            UiAction::SetParam { name, value } => {
                let target = SliderTarget::parse(name)
                    .ok_or_else(|| GooeyError::UnknownParam(name.clone()))?;
                target.write(store, *value)?;
                let _ = self.displayed.insert(name.clone(), *value);
            }
            UiAction::Reset => {
                store.apply_preset(LayoutPreset::Default);
                animator.reset_layout();
                self.refresh(store);
                log::info!("layout reset to defaults");
            }
            UiAction::Swap => {
                let _ = animator.trigger(store, now);
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for PanelBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanelBinding")
            .field("sliders", &self.sliders.len())
            .field("attached", &self.display.is_some())
            .finish_non_exhaustive()
    }
}
