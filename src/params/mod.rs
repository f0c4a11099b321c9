//! Parameter store: the single owner of every shader input value.
//!
//! Every animatable quantity the scene shader reads lives here, keyed by a
//! fixed [`ParamId`]. Values are either scalars or 2D points. The store
//! only rejects non-finite values and kind mismatches; range limits are the
//! control surface's job.

mod preset;
mod uniform;

use glam::Vec2;
pub use preset::{LayoutPreset, SQUARES};
pub use uniform::SceneUniform;

use crate::error::GooeyError;
use crate::options::SceneOptions;

/// Identifier of a shader parameter. The set is fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ParamId {
    /// Seconds since the engine started.
    Time,
    /// Viewport size in physical pixels.
    Resolution,
    /// Spring-driven layout blend (0 = default, 1 = swapped).
    Swap,
    /// Half-extent of each rounded square.
    SquareSize,
    /// Corner radius of each rounded square.
    CornerRadius,
    /// Smooth-minimum blend width.
    Smoothness,
    /// Stretch factor applied to the gooey bridges.
    Elasticity,
    /// Distance beyond which squares no longer merge.
    MaxGooeyDistance,
    /// Distance below which squares merge at full strength.
    MinGooeyDistance,
    /// Floor of the bridge strength between connected squares.
    MinConnectionStrength,
    /// Falloff range of the bridge strength.
    ConnectionRange,
    /// Center of the first square.
    Square1,
    /// Center of the second square.
    Square2,
    /// Center of the third square.
    Square3,
}

/// Whether a parameter holds one float or an (x, y) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// A single float.
    Scalar,
    /// An (x, y) pair.
    Point,
}

/// Axis of a point parameter, addressed separately by the control panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Horizontal component.
    X,
    /// Vertical component.
    Y,
}

impl ParamId {
    /// Number of parameters.
    pub const COUNT: usize = 14;

    /// Every parameter in declaration order.
    pub const ALL: [Self; Self::COUNT] = [
        Self::Time,
        Self::Resolution,
        Self::Swap,
        Self::SquareSize,
        Self::CornerRadius,
        Self::Smoothness,
        Self::Elasticity,
        Self::MaxGooeyDistance,
        Self::MinGooeyDistance,
        Self::MinConnectionStrength,
        Self::ConnectionRange,
        Self::Square1,
        Self::Square2,
        Self::Square3,
    ];

    /// Stable snake_case name, shared with the options file and the panel.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Resolution => "resolution",
            Self::Swap => "swap",
            Self::SquareSize => "square_size",
            Self::CornerRadius => "corner_radius",
            Self::Smoothness => "smoothness",
            Self::Elasticity => "elasticity",
            Self::MaxGooeyDistance => "max_gooey_distance",
            Self::MinGooeyDistance => "min_gooey_distance",
            Self::MinConnectionStrength => "min_connection_strength",
            Self::ConnectionRange => "connection_range",
            Self::Square1 => "square1",
            Self::Square2 => "square2",
            Self::Square3 => "square3",
        }
    }

    /// Look up a parameter by its [`name`](Self::name).
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }

    /// The value kind this parameter accepts.
    #[must_use]
    pub const fn kind(self) -> ParamKind {
        match self {
            Self::Resolution | Self::Square1 | Self::Square2 | Self::Square3 => {
                ParamKind::Point
            }
            _ => ParamKind::Scalar,
        }
    }

    const fn index(self) -> usize {
        self as usize
    }
}

/// A parameter value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    /// A single float.
    Scalar(f32),
    /// An (x, y) pair.
    Point(Vec2),
}

impl ParamValue {
    /// The kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ParamKind {
        match self {
            Self::Scalar(_) => ParamKind::Scalar,
            Self::Point(_) => ParamKind::Point,
        }
    }

    /// Whether every component is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        match self {
            Self::Scalar(v) => v.is_finite(),
            Self::Point(p) => p.is_finite(),
        }
    }

    /// The scalar, if this is one.
    #[must_use]
    pub const fn as_scalar(&self) -> Option<f32> {
        match self {
            Self::Scalar(v) => Some(*v),
            Self::Point(_) => None,
        }
    }

    /// The point, if this is one.
    #[must_use]
    pub const fn as_point(&self) -> Option<Vec2> {
        match self {
            Self::Point(p) => Some(*p),
            Self::Scalar(_) => None,
        }
    }
}

/// Copy of every parameter value at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamSnapshot {
    values: [ParamValue; ParamId::COUNT],
}

impl ParamSnapshot {
    /// Value of `id` when the snapshot was taken.
    #[must_use]
    pub const fn get(&self, id: ParamId) -> ParamValue {
        self.values[id.index()]
    }

    /// Point value of `id`, or `Vec2::ZERO` for scalar parameters.
    #[must_use]
    pub fn point(&self, id: ParamId) -> Vec2 {
        self.get(id).as_point().unwrap_or(Vec2::ZERO)
    }

    /// Iterate `(id, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (ParamId, ParamValue)> + '_ {
        ParamId::ALL.into_iter().zip(self.values.iter().copied())
    }
}

/// Holds the current value of every shader parameter.
///
/// All mutation happens on the frame-tick thread; the renderer reads the
/// store through [`uniform`](Self::uniform) once per frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterStore {
    values: [ParamValue; ParamId::COUNT],
}

impl ParameterStore {
    /// Build a store seeded from the scene options and the default layout.
    #[must_use]
    pub fn new(scene: &SceneOptions) -> Self {
        let [s1, s2, s3] = LayoutPreset::Default.positions();
        let values = ParamId::ALL.map(|id| match id {
            ParamId::Time | ParamId::Swap => ParamValue::Scalar(0.0),
            ParamId::Resolution => ParamValue::Point(Vec2::ONE),
            ParamId::SquareSize => ParamValue::Scalar(scene.square_size),
            ParamId::CornerRadius => ParamValue::Scalar(scene.corner_radius),
            ParamId::Smoothness => ParamValue::Scalar(scene.smoothness),
            ParamId::Elasticity => ParamValue::Scalar(scene.elasticity),
            ParamId::MaxGooeyDistance => {
                ParamValue::Scalar(scene.max_gooey_distance)
            }
            ParamId::MinGooeyDistance => {
                ParamValue::Scalar(scene.min_gooey_distance)
            }
            ParamId::MinConnectionStrength => {
                ParamValue::Scalar(scene.min_connection_strength)
            }
            ParamId::ConnectionRange => {
                ParamValue::Scalar(scene.connection_range)
            }
            ParamId::Square1 => ParamValue::Point(s1),
            ParamId::Square2 => ParamValue::Point(s2),
            ParamId::Square3 => ParamValue::Point(s3),
        });
        Self { values }
    }

    /// Current value of `id`.
    #[must_use]
    pub const fn get(&self, id: ParamId) -> ParamValue {
        self.values[id.index()]
    }

    /// Scalar value of `id`, or `0.0` for point parameters.
    #[must_use]
    pub fn scalar(&self, id: ParamId) -> f32 {
        self.get(id).as_scalar().unwrap_or(0.0)
    }

    /// Point value of `id`, or `Vec2::ZERO` for scalar parameters.
    #[must_use]
    pub fn point(&self, id: ParamId) -> Vec2 {
        self.get(id).as_point().unwrap_or(Vec2::ZERO)
    }

    /// Overwrite `id` with `value`.
    ///
    /// # Errors
    ///
    /// [`GooeyError::KindMismatch`] if the value kind does not match the
    /// parameter, [`GooeyError::NonFinite`] for NaN or infinite values.
    pub fn set(
        &mut self,
        id: ParamId,
        value: ParamValue,
    ) -> Result<(), GooeyError> {
        if value.kind() != id.kind() {
            return Err(GooeyError::KindMismatch { param: id });
        }
        if !value.is_finite() {
            return Err(GooeyError::NonFinite { param: id });
        }
        self.values[id.index()] = value;
        Ok(())
    }

    /// Overwrite a scalar parameter.
    ///
    /// # Errors
    ///
    /// See [`set`](Self::set).
    pub fn set_scalar(
        &mut self,
        id: ParamId,
        value: f32,
    ) -> Result<(), GooeyError> {
        self.set(id, ParamValue::Scalar(value))
    }

    /// Overwrite a point parameter.
    ///
    /// # Errors
    ///
    /// See [`set`](Self::set).
    pub fn set_point(
        &mut self,
        id: ParamId,
        value: Vec2,
    ) -> Result<(), GooeyError> {
        self.set(id, ParamValue::Point(value))
    }

    /// Overwrite one axis of a point parameter, keeping the other.
    ///
    /// # Errors
    ///
    /// See [`set`](Self::set).
    pub fn set_axis(
        &mut self,
        id: ParamId,
        axis: Axis,
        value: f32,
    ) -> Result<(), GooeyError> {
        let ParamValue::Point(mut p) = self.get(id) else {
            return Err(GooeyError::KindMismatch { param: id });
        };
        match axis {
            Axis::X => p.x = value,
            Axis::Y => p.y = value,
        }
        self.set_point(id, p)
    }

    /// Write every square position from `preset` in one batch.
    pub fn apply_preset(&mut self, preset: LayoutPreset) {
        for (id, pos) in SQUARES.into_iter().zip(preset.positions()) {
            self.values[id.index()] = ParamValue::Point(pos);
        }
    }

    /// Copy every current value.
    #[must_use]
    pub fn snapshot(&self) -> ParamSnapshot {
        ParamSnapshot {
            values: self.values,
        }
    }

    /// Pack the current values into the GPU uniform layout.
    #[must_use]
    pub fn uniform(&self) -> SceneUniform {
        SceneUniform::from_store(self)
    }
}

impl Default for ParameterStore {
    fn default() -> Self {
        Self::new(&SceneOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_scene_options_and_default_layout() {
        let store = ParameterStore::default();
        assert_eq!(store.scalar(ParamId::Smoothness), 0.07);
        assert_eq!(store.scalar(ParamId::SquareSize), 0.12);
        assert_eq!(store.point(ParamId::Square1), Vec2::new(-0.2, 0.2));
        assert_eq!(store.point(ParamId::Square2), Vec2::ZERO);
        assert_eq!(store.point(ParamId::Square3), Vec2::new(0.2, -0.2));
        assert_eq!(store.scalar(ParamId::Swap), 0.0);
    }

    #[test]
    fn names_round_trip() {
        for id in ParamId::ALL {
            assert_eq!(ParamId::from_name(id.name()), Some(id));
        }
        assert_eq!(ParamId::from_name("uSmoothness"), None);
    }

    #[test]
    fn set_accepts_out_of_range_finite_values() {
        let mut store = ParameterStore::default();
        store.set_scalar(ParamId::Smoothness, 5.0).unwrap();
        assert_eq!(store.scalar(ParamId::Smoothness), 5.0);
        store.set_point(ParamId::Square2, Vec2::new(-3.0, 7.5)).unwrap();
        assert_eq!(store.point(ParamId::Square2), Vec2::new(-3.0, 7.5));
    }

    #[test]
    fn set_rejects_non_finite_and_leaves_value() {
        let mut store = ParameterStore::default();
        let err = store.set_scalar(ParamId::CornerRadius, f32::NAN);
        assert!(matches!(
            err,
            Err(GooeyError::NonFinite {
                param: ParamId::CornerRadius
            })
        ));
        assert_eq!(store.scalar(ParamId::CornerRadius), 0.03);

        let err =
            store.set_point(ParamId::Square1, Vec2::new(f32::INFINITY, 0.0));
        assert!(err.is_err());
        assert_eq!(store.point(ParamId::Square1), Vec2::new(-0.2, 0.2));
    }

    #[test]
    fn set_rejects_kind_mismatch() {
        let mut store = ParameterStore::default();
        assert!(matches!(
            store.set_scalar(ParamId::Square1, 0.5),
            Err(GooeyError::KindMismatch { .. })
        ));
        assert!(matches!(
            store.set_point(ParamId::Elasticity, Vec2::ONE),
            Err(GooeyError::KindMismatch { .. })
        ));
    }

    #[test]
    fn set_axis_keeps_other_component() {
        let mut store = ParameterStore::default();
        store.set_axis(ParamId::Square3, Axis::Y, 0.9).unwrap();
        assert_eq!(store.point(ParamId::Square3), Vec2::new(0.2, 0.9));
        assert!(store.set_axis(ParamId::Smoothness, Axis::X, 0.1).is_err());
    }

    #[test]
    fn snapshot_is_detached_from_later_writes() {
        let mut store = ParameterStore::default();
        let snap = store.snapshot();
        store.set_point(ParamId::Square1, Vec2::new(0.5, 0.5)).unwrap();
        assert_eq!(snap.point(ParamId::Square1), Vec2::new(-0.2, 0.2));
        assert_eq!(snap.iter().count(), ParamId::COUNT);
    }

    #[test]
    fn apply_preset_writes_all_squares() {
        let mut store = ParameterStore::default();
        store.apply_preset(LayoutPreset::Swapped);
        assert_eq!(
            [
                store.point(ParamId::Square1),
                store.point(ParamId::Square2),
                store.point(ParamId::Square3),
            ],
            LayoutPreset::Swapped.positions()
        );
    }
}
