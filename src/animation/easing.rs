//! Easing functions for animation interpolation.
//!
//! Inputs are clamped to [0, 1]. Outputs are not: `ElasticOut` overshoots
//! past 1 and rings back before settling.

use std::f32::consts::PI;

/// Angular frequency factor of the elastic ring-out.
const ELASTIC_C4: f32 = (2.0 * PI) / 3.0;

/// Easing function variants for animation curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EasingFunction {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-out (fast start, slow end).
    QuadraticOut,
    /// Exponentially decaying sine ring-out.
    /// Formula: 2^(-10t)·sin((10t - 0.75)·2π/3) + 1
    ElasticOut,
}

impl EasingFunction {
    /// Default easing for the swap tween.
    pub const DEFAULT: Self = Self::ElasticOut;

    /// Evaluate the easing function at time t.
    ///
    /// Input t is clamped to [0.0, 1.0]. Both endpoints map exactly to 0.0
    /// and 1.0; values in between may leave that range.
    #[inline]
    #[must_use]
    pub fn evaluate(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::QuadraticOut => {
                let omt = 1.0 - t;
                1.0 - omt * omt
            }
            Self::ElasticOut => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                2.0_f32.powf(-10.0 * t) * ((10.0 * t - 0.75) * ELASTIC_C4).sin()
                    + 1.0
            }
        }
    }
}

impl Default for EasingFunction {
    #[inline]
    fn default() -> Self {
        Self::DEFAULT
    }
}
