use glam::Mat4;

use super::core::Camera;

/// GPU-uploadable snapshot of a camera's matrices and orientation.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// View matrix.
    pub view: [[f32; 4]; 4],
    /// Projection matrix.
    pub projection: [[f32; 4]; 4],
    /// Combined projection × view matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position.
    pub position: [f32; 3],
    /// View-matrix zoom factor.
    pub zoom: f32,
    /// Camera forward direction for lighting.
    pub front: [f32; 3],
    /// 1 when the active projection is perspective, 0 otherwise.
    pub is_perspective: u32,
}

impl Default for CameraUniform {
    fn default() -> Self {
        Self::new()
    }
}

impl CameraUniform {
    /// Create a new camera uniform with identity matrices.
    #[must_use]
    pub fn new() -> Self {
        Self {
            view: Mat4::IDENTITY.to_cols_array_2d(),
            projection: Mat4::IDENTITY.to_cols_array_2d(),
            view_proj: Mat4::IDENTITY.to_cols_array_2d(),
            position: [0.0; 3],
            zoom: 1.0,
            front: [0.0, 0.0, -1.0],
            is_perspective: 0,
        }
    }

    /// Update uniform fields from the given camera's current state.
    pub fn update_from(&mut self, camera: &Camera) {
        self.view = camera.view().to_cols_array_2d();
        self.projection = camera.projection().to_cols_array_2d();
        self.view_proj = camera.transformation().to_cols_array_2d();
        self.position = camera.position().to_array();
        self.zoom = camera.zoom_factor();
        self.front = camera.front().to_array();
        self.is_perspective = u32::from(camera.is_projection_perspective());
    }
}

impl From<&Camera> for CameraUniform {
    fn from(camera: &Camera) -> Self {
        let mut uniform = Self::new();
        uniform.update_from(camera);
        uniform
    }
}
