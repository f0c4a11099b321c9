use bytemuck::{Pod, Zeroable};

use super::{ParamId, ParameterStore};

/// GPU-side layout of the scene parameters (`SceneUniform` in
/// `gooey.wgsl`). Five 16-byte rows; `vec2` fields stay 8-byte aligned.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct SceneUniform {
    /// Viewport size in physical pixels.
    pub resolution: [f32; 2],
    /// Seconds since start.
    pub time: f32,
    /// Spring-driven layout blend.
    pub swap: f32,
    /// Center of square 1.
    pub square1: [f32; 2],
    /// Center of square 2.
    pub square2: [f32; 2],
    /// Center of square 3.
    pub square3: [f32; 2],
    /// Half-extent of each square.
    pub square_size: f32,
    /// Corner radius.
    pub corner_radius: f32,
    /// Smooth-minimum blend width.
    pub smoothness: f32,
    /// Bridge stretch factor.
    pub elasticity: f32,
    /// Merge cutoff distance.
    pub max_gooey_distance: f32,
    /// Full-strength merge distance.
    pub min_gooey_distance: f32,
    /// Bridge strength floor.
    pub min_connection_strength: f32,
    /// Bridge strength falloff range.
    pub connection_range: f32,
    pub(crate) _pad: [f32; 2],
}

impl SceneUniform {
    pub(super) fn from_store(store: &ParameterStore) -> Self {
        Self {
            resolution: store.point(ParamId::Resolution).to_array(),
            time: store.scalar(ParamId::Time),
            swap: store.scalar(ParamId::Swap),
            square1: store.point(ParamId::Square1).to_array(),
            square2: store.point(ParamId::Square2).to_array(),
            square3: store.point(ParamId::Square3).to_array(),
            square_size: store.scalar(ParamId::SquareSize),
            corner_radius: store.scalar(ParamId::CornerRadius),
            smoothness: store.scalar(ParamId::Smoothness),
            elasticity: store.scalar(ParamId::Elasticity),
            max_gooey_distance: store.scalar(ParamId::MaxGooeyDistance),
            min_gooey_distance: store.scalar(ParamId::MinGooeyDistance),
            min_connection_strength: store
                .scalar(ParamId::MinConnectionStrength),
            connection_range: store.scalar(ParamId::ConnectionRange),
            _pad: [0.0; 2],
        }
    }
}
