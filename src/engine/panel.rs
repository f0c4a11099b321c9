//! Control panel methods for GooeyEngine

use web_time::Instant;

use super::GooeyEngine;
use crate::panel::{PanelDisplay, UiAction};

impl GooeyEngine {
    /// Attach the panel widget library: registers every slider and pushes
    /// the current values.
    pub fn attach_panel(&mut self, display: Box<dyn PanelDisplay>) {
        self.panel.attach(display, &self.store);
    }

    /// Apply one action from the control panel. Unknown slider names and
    /// non-finite values are logged and dropped.
    pub fn apply_ui_action(&mut self, action: &UiAction, now: Instant) {
        if let Err(e) =
            self.panel
                .apply(action, &mut self.store, &mut self.animator, now)
        {
            log::warn!("ignored panel action {action:?}: {e}");
        }
    }

    /// Put every square back at its default position and refresh the
    /// panel.
    pub fn reset_layout(&mut self, now: Instant) {
        self.apply_ui_action(&UiAction::Reset, now);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use glam::Vec2;

    use super::*;
    use crate::options::Options;
    use crate::params::{LayoutPreset, ParamId, SQUARES};

    fn squares(engine: &GooeyEngine) -> [Vec2; 3] {
        SQUARES.map(|id| engine.store().point(id))
    }

    #[test]
    fn reset_overrides_slider_edits() {
        let now = Instant::now();
        let mut engine = GooeyEngine::new(Options::default(), now);
        engine.apply_ui_action(
            &UiAction::SetParam {
                name: "square1.x".to_owned(),
                value: 0.75,
            },
            now,
        );
        assert_eq!(engine.store().point(ParamId::Square1).x, 0.75);

        engine.reset_layout(now);
        assert_eq!(
            engine.store().point(ParamId::Square1),
            Vec2::new(-0.2, 0.2)
        );
        assert_eq!(engine.panel().displayed("square1.x"), Some(-0.2));
    }

    #[test]
    fn bad_actions_are_dropped() {
        let now = Instant::now();
        let mut engine = GooeyEngine::new(Options::default(), now);
        let before = engine.store().clone();
        engine.apply_ui_action(
            &UiAction::SetParam {
                name: "gravity".to_owned(),
                value: 1.0,
            },
            now,
        );
        engine.apply_ui_action(
            &UiAction::SetParam {
                name: "smoothness".to_owned(),
                value: f32::NAN,
            },
            now,
        );
        assert_eq!(engine.store(), &before);
    }

    #[test]
    fn swap_action_drives_tween() {
        let now = Instant::now();
        let mut engine = GooeyEngine::new(Options::default(), now);
        engine.apply_ui_action(&UiAction::Swap, now);
        assert!(engine.animator().is_animating());
        engine.tick(now + Duration::from_secs(1)).unwrap();
        assert!(!engine.animator().is_animating());
        assert!(engine.animator().is_swapped());
    }

    #[test]
    fn reset_mid_tween_snaps_then_tween_lands_swapped() {
        let start = Instant::now();
        let mut engine = GooeyEngine::new(Options::default(), start);
        assert!(engine.trigger_swap(start));
        engine.tick(start + Duration::from_millis(300)).unwrap();
        assert_ne!(squares(&engine), LayoutPreset::Default.positions());

        engine.reset_layout(start + Duration::from_millis(300));
        assert_eq!(squares(&engine), LayoutPreset::Default.positions());
        assert_eq!(engine.panel().displayed("square1.x"), Some(-0.2));
        assert!(engine.animator().is_animating());
        assert!(engine.animator().is_swapped());

        engine.tick(start + Duration::from_millis(1000)).unwrap();
        assert!(!engine.animator().is_animating());
        assert_eq!(squares(&engine), LayoutPreset::Swapped.positions());
        assert!(engine.animator().is_swapped());
        assert_eq!(engine.panel().displayed("square1.x"), Some(0.2));
    }

    #[test]
    fn slider_edit_mid_tween_is_overwritten_by_next_tick() {
        let start = Instant::now();
        let mut engine = GooeyEngine::new(Options::default(), start);
        assert!(engine.trigger_swap(start));
        engine.tick(start + Duration::from_millis(300)).unwrap();

        let edit_time = start + Duration::from_millis(310);
        engine.apply_ui_action(
            &UiAction::SetParam {
                name: "square1.x".to_owned(),
                value: -0.9,
            },
            edit_time,
        );
        assert_eq!(engine.store().point(ParamId::Square1).x, -0.9);
        assert_eq!(engine.panel().displayed("square1.x"), Some(-0.9));

        engine.tick(start + Duration::from_millis(320)).unwrap();
        let s1 = engine.store().point(ParamId::Square1);
        assert_ne!(s1.x, -0.9);
        let expected = engine
            .animator()
            .transition()
            .unwrap()
            .sample(start + Duration::from_millis(320))[0];
        assert_eq!(s1, expected);
        assert!(engine.animator().is_animating());
    }
}
