use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Initial values of the shape and blend parameters. Schema ranges are the
/// slider ranges of the control panel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Scene", inline)]
#[serde(default)]
pub struct SceneOptions {
    /// Half-extent of each rounded square.
    #[schemars(title = "Square Size", range(min = 0.01, max = 0.3), extend("step" = 0.005))]
    pub square_size: f32,
    /// Corner radius of each rounded square.
    #[schemars(title = "Corner Radius", range(min = 0.0, max = 0.1), extend("step" = 0.005))]
    pub corner_radius: f32,
    /// Smooth-minimum blend width.
    #[schemars(title = "Smoothness", range(min = 0.0, max = 0.3), extend("step" = 0.005))]
    pub smoothness: f32,
    /// Stretch factor applied to the gooey bridges.
    #[schemars(title = "Elasticity", range(min = 0.5, max = 2.0), extend("step" = 0.05))]
    pub elasticity: f32,
    /// Distance beyond which squares no longer merge.
    #[schemars(title = "Max Gooey Distance", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub max_gooey_distance: f32,
    /// Distance below which squares merge at full strength.
    #[schemars(title = "Min Gooey Distance", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub min_gooey_distance: f32,
    /// Floor of the bridge strength between connected squares.
    #[schemars(title = "Min Connection", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub min_connection_strength: f32,
    /// Falloff range of the bridge strength.
    #[schemars(title = "Connection Range", range(min = 0.0, max = 1.0), extend("step" = 0.01))]
    pub connection_range: f32,
}

impl Default for SceneOptions {
    fn default() -> Self {
        Self {
            square_size: 0.12,
            corner_radius: 0.03,
            smoothness: 0.07,
            elasticity: 1.0,
            max_gooey_distance: 0.45,
            min_gooey_distance: 0.1,
            min_connection_strength: 0.2,
            connection_range: 0.5,
        }
    }
}
