//! Startup configuration with TOML file support.
//!
//! Shape parameters seed the [`ParameterStore`](crate::params::ParameterStore)
//! and carry the slider ranges shown by the control panel; the animation
//! section picks and tunes the swap driver. Options are read once at
//! startup and never written back.

mod animation;
mod scene;

use std::path::Path;

pub use animation::{AnimationOptions, SwapMode};
pub use scene::SceneOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::GooeyError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[animation]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Initial shape and blend parameters.
    pub scene: SceneOptions,
    /// Swap animation driver and tuning.
    #[schemars(skip)]
    pub animation: AnimationOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`GooeyError::Io`] if the file cannot be read,
    /// [`GooeyError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, GooeyError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`GooeyError::OptionsParse`] if the text is not valid options TOML.
    pub fn from_toml(content: &str) -> Result<Self, GooeyError> {
        toml::from_str(content)
            .map_err(|e| GooeyError::OptionsParse(e.to_string()))
    }
}
