//! Animation system for the layout swap.
//!
//! Two interpolators feed the [`SwapAnimator`]: a discrete
//! [`Spring`](spring::Spring) that free-runs the shader-side `swap` blend,
//! and an eased [`Transition`](transition::Transition) that tweens square
//! positions host-side. The configured [`SwapMode`](crate::options::SwapMode)
//! selects exactly one of them.

pub mod easing;
pub mod scheduler;
pub mod spring;
pub mod transition;

pub use easing::EasingFunction;
pub use scheduler::{SwapAnimator, SwapState};
pub use spring::Spring;
pub use transition::Transition;
