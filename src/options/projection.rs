use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::{OrthographicProjection, PerspectiveProjection, Projection};

/// One entry of the camera's projection list.
///
/// ```toml
/// [[projections]]
/// kind = "orthographic"
/// x_range = [-10.0, 10.0]
///
/// [[projections]]
/// kind = "perspective"
/// fov = 45.0
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ProjectionOptions {
    /// Parallel projection over fixed x/y/z extents.
    Orthographic {
        /// Horizontal extent before ratio and scale.
        #[serde(default = "default_extent")]
        x_range: [f32; 2],
        /// Vertical extent before scale.
        #[serde(default = "default_extent")]
        y_range: [f32; 2],
        /// Depth extent.
        #[serde(default = "default_depth")]
        z_range: [f32; 2],
    },
    /// Pinhole projection.
    Perspective {
        /// Vertical field of view in degrees.
        #[serde(default = "default_fov")]
        #[schemars(range(min = 1.0, max = 179.0))]
        fov: f32,
        /// Near clipping distance.
        #[serde(default = "default_near")]
        near: f32,
        /// Far clipping distance.
        #[serde(default = "default_far")]
        far: f32,
    },
}

fn default_extent() -> [f32; 2] {
    [-10.0, 10.0]
}

fn default_depth() -> [f32; 2] {
    [-1000.0, 1000.0]
}

fn default_fov() -> f32 {
    45.0
}

fn default_near() -> f32 {
    0.1
}

fn default_far() -> f32 {
    1000.0
}

impl ProjectionOptions {
    /// Orthographic entry with default extents.
    #[must_use]
    pub fn orthographic() -> Self {
        Self::Orthographic {
            x_range: default_extent(),
            y_range: default_extent(),
            z_range: default_depth(),
        }
    }

    /// Perspective entry with default field of view and clip planes.
    #[must_use]
    pub fn perspective() -> Self {
        Self::Perspective {
            fov: default_fov(),
            near: default_near(),
            far: default_far(),
        }
    }

    /// Build the projection for an initial aspect `ratio`.
    #[must_use]
    pub fn to_projection(&self, ratio: f32) -> Projection {
        match *self {
            Self::Orthographic {
                x_range,
                y_range,
                z_range,
            } => OrthographicProjection::new(
                (x_range[0], x_range[1]),
                (y_range[0], y_range[1]),
                (z_range[0], z_range[1]),
                ratio,
            )
            .into(),
            Self::Perspective { fov, near, far } => {
                PerspectiveProjection::new(fov, near, far, ratio).into()
            }
        }
    }
}
