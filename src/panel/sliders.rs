use serde::Serialize;
use serde_json::Value;

use super::action::SliderTarget;
use crate::options::Options;
use crate::params::{Axis, ParamId, ParamKind, ParameterStore, SQUARES};

/// Slider range for square coordinates.
const POSITION_RANGE: (f32, f32) = (-1.0, 1.0);
/// Slider step for square coordinates.
const POSITION_STEP: f32 = 0.01;
/// Fallback step for schema fields without one.
const DEFAULT_STEP: f32 = 0.01;

/// One panel slider.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SliderSpec {
    /// Slider id, also the `name` of [`UiAction::SetParam`](super::UiAction).
    pub id: String,
    /// Human-readable label.
    pub label: String,
    /// Lowest selectable value.
    pub min: f32,
    /// Highest selectable value.
    pub max: f32,
    /// Slider increment.
    pub step: f32,
    /// Value shown when the panel is built.
    pub initial: f32,
    /// Store location the slider edits.
    #[serde(skip)]
    pub target: SliderTarget,
}

/// Convert a `snake_case` string to `Title Case`.
fn display_name(s: &str) -> String {
    s.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(c) => {
                    let upper: String = c.to_uppercase().collect();
                    format!("{upper}{}", chars.as_str())
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn number(schema: &Value, key: &str) -> Option<f32> {
    schema.get(key).and_then(Value::as_f64).map(|v| v as f32)
}

/// Build every panel slider.
///
/// Scalar ranges, steps and labels come from the `scene` section of the
/// options JSON schema; scalars absent from the schema (time, swap) get no
/// slider. Each square gets an x and a y slider over [-1, 1].
#[must_use]
pub fn slider_specs(store: &ParameterStore) -> Vec<SliderSpec> {
    let root = serde_json::to_value(Options::json_schema()).unwrap_or_default();
    let scene = root
        .pointer("/properties/scene/properties")
        .or_else(|| root.pointer("/properties/scene/allOf/0/properties"));

    let mut specs = Vec::new();
    if let Some(scene) = scene {
        for id in ParamId::ALL {
            if id.kind() != ParamKind::Scalar {
                continue;
            }
            let Some(field) = scene.get(id.name()) else {
                continue;
            };
            let target = SliderTarget {
                param: id,
                axis: None,
            };
            specs.push(SliderSpec {
                id: target.id(),
                label: field
                    .get("title")
                    .and_then(Value::as_str)
                    .map_or_else(|| display_name(id.name()), str::to_owned),
                min: number(field, "minimum").unwrap_or(0.0),
                max: number(field, "maximum").unwrap_or(1.0),
                step: number(field, "step").unwrap_or(DEFAULT_STEP),
                initial: target.read(store),
                target,
            });
        }
    }

    for (index, id) in SQUARES.into_iter().enumerate() {
        for (axis, suffix) in [(Axis::X, "X"), (Axis::Y, "Y")] {
            let target = SliderTarget {
                param: id,
                axis: Some(axis),
            };
            specs.push(SliderSpec {
                id: target.id(),
                label: format!("Square {} {suffix}", index + 1),
                min: POSITION_RANGE.0,
                max: POSITION_RANGE.1,
                step: POSITION_STEP,
                initial: target.read(store),
                target,
            });
        }
    }
    specs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(specs: &'a [SliderSpec], id: &str) -> &'a SliderSpec {
        specs.iter().find(|s| s.id == id).unwrap()
    }

    #[test]
    fn scalar_ranges_come_from_schema() {
        let specs = slider_specs(&ParameterStore::default());
        let size = find(&specs, "square_size");
        assert!((size.min - 0.01).abs() < 1e-6);
        assert!((size.max - 0.3).abs() < 1e-6);
        assert_eq!(size.label, "Square Size");
        assert_eq!(size.initial, 0.12);

        let elasticity = find(&specs, "elasticity");
        assert!((elasticity.min - 0.5).abs() < 1e-6);
        assert!((elasticity.max - 2.0).abs() < 1e-6);

        let radius = find(&specs, "corner_radius");
        assert!((radius.max - 0.1).abs() < 1e-6);
        let smooth = find(&specs, "smoothness");
        assert!((smooth.max - 0.3).abs() < 1e-6);
    }

    #[test]
    fn hidden_parameters_have_no_slider() {
        let specs = slider_specs(&ParameterStore::default());
        for hidden in ["time", "swap", "resolution", "resolution.x"] {
            assert!(specs.iter().all(|s| s.id != hidden), "{hidden} exposed");
        }
    }

    #[test]
    fn every_square_axis_has_a_slider() {
        let specs = slider_specs(&ParameterStore::default());
        // 8 shape scalars + 3 squares × 2 axes
        assert_eq!(specs.len(), 14);
        let s1x = find(&specs, "square1.x");
        assert_eq!((s1x.min, s1x.max), (-1.0, 1.0));
        assert_eq!(s1x.initial, -0.2);
        assert_eq!(find(&specs, "square3.y").initial, -0.2);
    }

    #[test]
    fn display_name_title_cases() {
        assert_eq!(display_name("max_gooey_distance"), "Max Gooey Distance");
    }
}
