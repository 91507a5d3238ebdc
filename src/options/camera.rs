use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::CameraParameters;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Camera", inline)]
#[serde(default)]
/// Initial camera placement and control sensitivities.
pub struct CameraOptions {
    /// Eye position in world space.
    #[schemars(title = "Position")]
    pub position: [f32; 3],
    /// World up direction.
    #[schemars(skip)]
    pub up: [f32; 3],
    /// Initial yaw in degrees.
    #[schemars(title = "Yaw", range(min = -360.0, max = 360.0), extend("step" = 1.0))]
    pub yaw: f32,
    /// Initial pitch in degrees.
    #[schemars(title = "Pitch", range(min = -90.0, max = 90.0), extend("step" = 1.0))]
    pub pitch: f32,
    /// Forward movement multiplier.
    #[schemars(title = "Speed", range(min = 0.1, max = 10.0), extend("step" = 0.1))]
    pub speed: f32,
    /// Rotation, zoom and scale multiplier.
    #[schemars(title = "Sensitivity", range(min = 0.01, max = 2.0), extend("step" = 0.01))]
    pub sensitivity: f32,
    /// Initial view-matrix zoom factor.
    #[schemars(skip)]
    pub zoom: f32,
    /// Initial orthographic scale.
    #[schemars(skip)]
    pub scale: [f32; 3],
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self::from(CameraParameters::default())
    }
}

impl From<CameraParameters> for CameraOptions {
    fn from(params: CameraParameters) -> Self {
        Self {
            position: params.position.to_array(),
            up: params.up.to_array(),
            yaw: params.yaw,
            pitch: params.pitch,
            speed: params.speed,
            sensitivity: params.sensitivity,
            zoom: params.zoom,
            scale: params.scale.to_array(),
        }
    }
}

impl CameraOptions {
    /// Camera parameters described by these options.
    #[must_use]
    pub fn to_parameters(&self) -> CameraParameters {
        CameraParameters {
            position: Vec3::from_array(self.position),
            up: Vec3::from_array(self.up),
            yaw: self.yaw,
            pitch: self.pitch,
            speed: self.speed,
            sensitivity: self.sensitivity,
            zoom: self.zoom,
            scale: Vec3::from_array(self.scale),
        }
    }
}
