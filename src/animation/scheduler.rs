//! Swap scheduler: decides what the layout swap animates and writes the
//! result into the parameter store every tick.

use glam::Vec2;
use web_time::Instant;

use super::easing::EasingFunction;
use super::spring::Spring;
use super::transition::Transition;
use crate::error::GooeyError;
use crate::options::{AnimationOptions, SwapMode};
use crate::params::{LayoutPreset, ParamId, ParameterStore, SQUARES};

/// Lifecycle of the swap group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwapState {
    /// No tween in flight.
    Idle,
    /// A tween is in flight; further triggers are ignored.
    Running,
}

/// Drives the layout swap with whichever [`SwapMode`] was configured.
///
/// In tween mode at most one [`Transition`] is in flight and it always runs
/// to completion. In spring mode the `swap` scalar free-runs every tick and
/// a trigger only flips its target.
#[derive(Debug, Clone)]
pub struct SwapAnimator {
    mode: SwapMode,
    swapped: bool,
    active: Option<Transition>,
    spring: Spring,
    options: AnimationOptions,
}

impl SwapAnimator {
    /// An idle animator in the default layout.
    #[must_use]
    pub fn new(options: &AnimationOptions) -> Self {
        Self {
            mode: options.swap_mode,
            swapped: false,
            active: None,
            spring: Spring::new(options.stiffness, options.damping),
            options: options.clone(),
        }
    }

    /// The configured swap driver.
    #[must_use]
    pub const fn mode(&self) -> SwapMode {
        self.mode
    }

    /// `Running` while a tween is in flight.
    #[must_use]
    pub const fn state(&self) -> SwapState {
        if self.active.is_some() {
            SwapState::Running
        } else {
            SwapState::Idle
        }
    }

    /// Whether a tween is in flight.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        self.active.is_some()
    }

    /// Whether the layout is (or is heading toward) the swapped preset.
    #[must_use]
    pub const fn is_swapped(&self) -> bool {
        self.swapped
    }

    /// The in-flight tween, if any.
    #[must_use]
    pub const fn transition(&self) -> Option<&Transition> {
        self.active.as_ref()
    }

    /// The swap spring (spring mode only writes it to the store).
    #[must_use]
    pub const fn spring(&self) -> &Spring {
        &self.spring
    }

    /// Tween progress in [0, 1], or `None` when idle.
    #[must_use]
    pub fn progress(&self, now: Instant) -> Option<f32> {
        self.active.as_ref().map(|t| t.progress(now))
    }

    /// The preset the layout is heading toward.
    #[must_use]
    pub const fn target_preset(&self) -> LayoutPreset {
        if self.swapped {
            LayoutPreset::Swapped
        } else {
            LayoutPreset::Default
        }
    }

    /// Start a swap. Returns `false` (and changes nothing) if a tween is
    /// already in flight.
    pub fn trigger(&mut self, store: &ParameterStore, now: Instant) -> bool {
        match self.mode {
            SwapMode::Spring => {
                self.spring.toggle_target();
                self.swapped = !self.swapped;
                log::info!("swap spring target -> {}", self.spring.target());
                true
            }
            SwapMode::Tween => {
                if self.active.is_some() {
                    log::debug!("swap ignored: transition already running");
                    return false;
                }
                let snapshot = store.snapshot();
                let start: [Vec2; 3] = SQUARES.map(|id| snapshot.point(id));
                let target = self.target_preset().opposite();
                self.active = Some(Transition::new(
                    start,
                    target.positions(),
                    now,
                    self.options.duration(),
                    EasingFunction::ElasticOut,
                ));
                self.swapped = !self.swapped;
                log::info!("swap started toward {target:?} layout");
                true
            }
        }
    }

    /// Clear the swapped flag after the layout was reset to defaults. An
    /// in-flight tween is left to finish.
    pub fn reset_layout(&mut self) {
        if self.active.is_some() {
            return;
        }
        self.swapped = false;
        if self.mode == SwapMode::Spring {
            self.spring.set_target(0.0);
        }
    }

    /// Advance one frame and write the animated values into `store`.
    ///
    /// # Errors
    ///
    /// Propagates store write failures (non-finite interpolated values).
    pub fn tick(
        &mut self,
        store: &mut ParameterStore,
        now: Instant,
    ) -> Result<(), GooeyError> {
        match self.mode {
            SwapMode::Spring => {
                let position = self.spring.step();
                store.set_scalar(ParamId::Swap, position)
            }
            SwapMode::Tween => self.tick_tween(store, now),
        }
    }

    fn tick_tween(
        &mut self,
        store: &mut ParameterStore,
        now: Instant,
    ) -> Result<(), GooeyError> {
        let Some(transition) = &self.active else {
            return Ok(());
        };
        let positions = transition.sample(now);
        let complete = transition.is_complete(now);
        for (id, pos) in SQUARES.into_iter().zip(positions) {
            store.set_point(id, pos)?;
        }
        if complete {
            self.active = None;
            log::info!("swap finished at {:?} layout", self.target_preset());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    fn tween_animator() -> SwapAnimator {
        SwapAnimator::new(&AnimationOptions::default())
    }

    fn spring_animator() -> SwapAnimator {
        SwapAnimator::new(&AnimationOptions {
            swap_mode: SwapMode::Spring,
            ..AnimationOptions::default()
        })
    }

    fn squares(store: &ParameterStore) -> [Vec2; 3] {
        SQUARES.map(|id| store.point(id))
    }

    #[test]
    fn trigger_from_idle_starts_running() {
        let store = ParameterStore::default();
        let mut anim = tween_animator();
        let now = Instant::now();

        assert_eq!(anim.state(), SwapState::Idle);
        assert!(anim.trigger(&store, now));
        assert_eq!(anim.state(), SwapState::Running);
        assert!(anim.is_swapped());

        let t = anim.transition().unwrap();
        assert_eq!(*t.start(), LayoutPreset::Default.positions());
        assert_eq!(*t.target(), LayoutPreset::Swapped.positions());
        assert_eq!(t.start_time(), now);
        assert_eq!(t.duration(), Duration::from_millis(1000));
    }

    #[test]
    fn finishes_exactly_on_target_and_returns_idle() {
        let mut store = ParameterStore::default();
        let mut anim = tween_animator();
        let start = Instant::now();
        let _ = anim.trigger(&store, start);

        // 60 Hz for a bit less than the full second.
        for frame in 1..60 {
            let now = start + Duration::from_millis(frame * 16);
            anim.tick(&mut store, now).unwrap();
            assert_eq!(anim.state(), SwapState::Running);
        }

        anim.tick(&mut store, start + Duration::from_millis(1000))
            .unwrap();
        assert_eq!(anim.state(), SwapState::Idle);
        assert_eq!(squares(&store), LayoutPreset::Swapped.positions());
    }

    #[test]
    fn late_first_tick_still_lands_on_target() {
        let mut store = ParameterStore::default();
        let mut anim = tween_animator();
        let start = Instant::now();
        let _ = anim.trigger(&store, start);

        anim.tick(&mut store, start + Duration::from_secs(4)).unwrap();
        assert_eq!(anim.state(), SwapState::Idle);
        assert_eq!(squares(&store), LayoutPreset::Swapped.positions());
    }

    #[test]
    fn trigger_while_running_is_a_no_op() {
        let mut store = ParameterStore::default();
        let mut anim = tween_animator();
        let start = Instant::now();
        let _ = anim.trigger(&store, start);
        anim.tick(&mut store, start + Duration::from_millis(300))
            .unwrap();

        let before = anim.transition().cloned();
        assert!(!anim.trigger(&store, start + Duration::from_millis(400)));
        assert_eq!(anim.state(), SwapState::Running);
        assert!(anim.is_swapped());
        assert_eq!(anim.transition().cloned(), before);
    }

    #[test]
    fn second_swap_returns_to_default_layout() {
        let mut store = ParameterStore::default();
        let mut anim = tween_animator();
        let t0 = Instant::now();
        let _ = anim.trigger(&store, t0);
        anim.tick(&mut store, t0 + Duration::from_millis(1000))
            .unwrap();

        let t1 = t0 + Duration::from_millis(1500);
        assert!(anim.trigger(&store, t1));
        assert!(!anim.is_swapped());
        assert_eq!(
            *anim.transition().unwrap().start(),
            LayoutPreset::Swapped.positions()
        );
        anim.tick(&mut store, t1 + Duration::from_millis(1000))
            .unwrap();
        assert_eq!(squares(&store), LayoutPreset::Default.positions());
    }

    #[test]
    fn start_captures_edited_positions() {
        let mut store = ParameterStore::default();
        store
            .set_point(ParamId::Square1, Vec2::new(-0.5, 0.5))
            .unwrap();
        let mut anim = tween_animator();
        let _ = anim.trigger(&store, Instant::now());
        assert_eq!(
            anim.transition().unwrap().start()[0],
            Vec2::new(-0.5, 0.5)
        );
    }

    #[test]
    fn mid_tween_writes_interpolated_positions() {
        let mut store = ParameterStore::default();
        let mut anim = tween_animator();
        let start = Instant::now();
        let _ = anim.trigger(&store, start);
        anim.tick(&mut store, start + Duration::from_millis(150))
            .unwrap();
        // Elastic overshoot carries square 1 past its target x.
        assert!(store.point(ParamId::Square1).x > 0.2);
        assert_eq!(store.point(ParamId::Square2), Vec2::ZERO);
    }

    #[test]
    fn tween_mode_leaves_swap_scalar_alone() {
        let mut store = ParameterStore::default();
        let mut anim = tween_animator();
        let start = Instant::now();
        let _ = anim.trigger(&store, start);
        anim.tick(&mut store, start + Duration::from_millis(500))
            .unwrap();
        assert_eq!(store.scalar(ParamId::Swap), 0.0);
    }

    #[test]
    fn idle_tick_writes_nothing() {
        let mut store = ParameterStore::default();
        store
            .set_point(ParamId::Square2, Vec2::new(0.3, 0.3))
            .unwrap();
        let before = store.clone();
        let mut anim = tween_animator();
        anim.tick(&mut store, Instant::now()).unwrap();
        assert_eq!(store, before);
    }

    #[test]
    fn spring_mode_free_runs_toward_toggled_target() {
        let mut store = ParameterStore::default();
        let mut anim = spring_animator();
        let now = Instant::now();

        assert!(anim.trigger(&store, now));
        // Spring mode never enters Running; triggers always toggle.
        assert_eq!(anim.state(), SwapState::Idle);
        for _ in 0..200 {
            anim.tick(&mut store, now).unwrap();
        }
        assert!((store.scalar(ParamId::Swap) - 1.0).abs() < 0.01);
        assert_eq!(squares(&store), LayoutPreset::Default.positions());

        assert!(anim.trigger(&store, now));
        for _ in 0..200 {
            anim.tick(&mut store, now).unwrap();
        }
        assert!(store.scalar(ParamId::Swap).abs() < 0.01);
        assert!(!anim.is_swapped());
    }

    #[test]
    fn reset_layout_clears_swapped_when_idle() {
        let mut store = ParameterStore::default();
        let mut anim = tween_animator();
        let start = Instant::now();
        let _ = anim.trigger(&store, start);

        anim.reset_layout();
        assert!(anim.is_swapped(), "reset must not cancel a running tween");

        anim.tick(&mut store, start + Duration::from_millis(1000))
            .unwrap();
        anim.reset_layout();
        assert!(!anim.is_swapped());
        assert_eq!(anim.target_preset(), LayoutPreset::Default);
    }
}
