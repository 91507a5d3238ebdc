use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::manipulator::{ManipulatorKind, DEFAULT_ZOOM_SENSITIVITY};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Manipulator", inline)]
#[serde(default)]
/// Which manipulator drives the camera and how strongly the wheel zooms.
pub struct ManipulatorOptions {
    /// Navigation semantics.
    #[schemars(title = "Kind")]
    pub kind: ManipulatorKind,
    /// Wheel delta per unit of zoom.
    #[schemars(title = "Zoom Sensitivity", range(min = 1.0, max = 1200.0), extend("step" = 10.0))]
    pub zoom_sensitivity: f32,
}

impl Default for ManipulatorOptions {
    fn default() -> Self {
        Self {
            kind: ManipulatorKind::default(),
            zoom_sensitivity: DEFAULT_ZOOM_SENSITIVITY,
        }
    }
}
