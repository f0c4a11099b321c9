use serde::{Deserialize, Serialize};

use crate::error::GooeyError;
use crate::params::{Axis, ParamId, ParamKind, ParameterStore};

/// Actions sent from the control panel to the engine.
///
/// Serialized as JSON tagged by `"action"`, e.g.
/// `{"action":"set_param","name":"square1.x","value":0.1}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UiAction {
    /// A slider moved.
    SetParam {
        /// Slider id (`"smoothness"`, `"square1.x"`, ...).
        name: String,
        /// New slider value.
        value: f32,
    },
    /// Put every square back at its default position.
    Reset,
    /// Start the layout swap.
    Swap,
}

/// The store location a slider edits: a scalar, or one axis of a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SliderTarget {
    /// Parameter being edited.
    pub param: ParamId,
    /// Axis for point parameters, `None` for scalars.
    pub axis: Option<Axis>,
}

impl SliderTarget {
    /// Parse a slider id. Point parameters need an `.x` / `.y` suffix;
    /// scalars must not have one.
    #[must_use]
    pub fn parse(slider_id: &str) -> Option<Self> {
        let (name, axis) = match slider_id.rsplit_once('.') {
            Some((name, "x")) => (name, Some(Axis::X)),
            Some((name, "y")) => (name, Some(Axis::Y)),
            Some(_) => return None,
            None => (slider_id, None),
        };
        let param = ParamId::from_name(name)?;
        match (param.kind(), axis) {
            (ParamKind::Scalar, None) | (ParamKind::Point, Some(_)) => {
                Some(Self { param, axis })
            }
            _ => None,
        }
    }

    /// Slider id for this target.
    #[must_use]
    pub fn id(&self) -> String {
        match self.axis {
            None => self.param.name().to_owned(),
            Some(Axis::X) => format!("{}.x", self.param.name()),
            Some(Axis::Y) => format!("{}.y", self.param.name()),
        }
    }

    /// Current store value at this target.
    #[must_use]
    pub fn read(&self, store: &ParameterStore) -> f32 {
        match self.axis {
            None => store.scalar(self.param),
            Some(Axis::X) => store.point(self.param).x,
            Some(Axis::Y) => store.point(self.param).y,
        }
    }

    /// Write `value` at this target.
    ///
    /// # Errors
    ///
    /// Store write failures (non-finite value).
    pub fn write(
        &self,
        store: &mut ParameterStore,
        value: f32,
    ) -> Result<(), GooeyError> {
        match self.axis {
            None => store.set_scalar(self.param, value),
            Some(axis) => store.set_axis(self.param, axis, value),
        }
    }
}
