//! Orthographic and perspective projections.
//!
//! Both variants store the viewport aspect ratio and a cached clip matrix
//! that is rebuilt synchronously by every setter, so [`Projection::matrix`]
//! never lags behind the last parameter change.
//!
//! Matrices follow the OpenGL clip convention (depth in `[-1, 1]`), which is
//! what the unprojection helpers in [`crate::util::transform`] expect.

use glam::{Mat4, Vec3};

/// Orthographic projection over per-axis world ranges.
#[derive(Debug, Clone, PartialEq)]
pub struct OrthographicProjection {
    min_x: f32,
    max_x: f32,
    min_y: f32,
    max_y: f32,
    min_z: f32,
    max_z: f32,
    ratio: f32,
    scale: Vec3,
    matrix: Mat4,
}

impl OrthographicProjection {
    /// Create an orthographic projection with unit scale.
    #[must_use]
    pub fn new(
        x_range: (f32, f32),
        y_range: (f32, f32),
        z_range: (f32, f32),
        ratio: f32,
    ) -> Self {
        Self::with_scale(x_range, y_range, z_range, ratio, Vec3::ONE)
    }

    /// Create an orthographic projection with an explicit non-uniform scale.
    #[must_use]
    pub fn with_scale(
        x_range: (f32, f32),
        y_range: (f32, f32),
        z_range: (f32, f32),
        ratio: f32,
        scale: Vec3,
    ) -> Self {
        let mut projection = Self {
            min_x: x_range.0,
            max_x: x_range.1,
            min_y: y_range.0,
            max_y: y_range.1,
            min_z: z_range.0,
            max_z: z_range.1,
            ratio,
            scale,
            matrix: Mat4::IDENTITY,
        };
        projection.calculate();
        projection
    }

    /// Set the viewport aspect ratio (width / height).
    pub fn set_ratio(&mut self, ratio: f32) {
        self.ratio = ratio;
        self.calculate();
    }

    /// Set the horizontal world range (before ratio and scale).
    pub fn set_x_range(&mut self, min: f32, max: f32) {
        self.min_x = min;
        self.max_x = max;
        self.calculate();
    }

    /// Set the vertical world range (before scale).
    pub fn set_y_range(&mut self, min: f32, max: f32) {
        self.min_y = min;
        self.max_y = max;
        self.calculate();
    }

    /// Set the depth range (before scale).
    pub fn set_z_range(&mut self, min: f32, max: f32) {
        self.min_z = min;
        self.max_z = max;
        self.calculate();
    }

    /// Set the per-axis scale applied on top of the ranges.
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
        self.calculate();
    }

    /// Horizontal world range `(min, max)`.
    #[must_use]
    pub fn x_range(&self) -> (f32, f32) {
        (self.min_x, self.max_x)
    }

    /// Vertical world range `(min, max)`.
    #[must_use]
    pub fn y_range(&self) -> (f32, f32) {
        (self.min_y, self.max_y)
    }

    /// Depth range `(min, max)`.
    #[must_use]
    pub fn z_range(&self) -> (f32, f32) {
        (self.min_z, self.max_z)
    }

    /// Current per-axis scale.
    #[must_use]
    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    /// Current aspect ratio.
    #[must_use]
    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    /// Clip matrix for the current parameters.
    #[must_use]
    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    /// World units per screen pixel. Independent of camera depth.
    #[must_use]
    pub fn projection_coefficient(&self, viewport_width: u32) -> f32 {
        (self.max_x - self.min_x) * self.ratio * self.scale.x
            / viewport_width as f32
    }

    /// Map a screen x coordinate into the projected horizontal range.
    #[must_use]
    pub fn projected_x(&self, x: f32, viewport_width: u32) -> f32 {
        (self.min_x + (self.max_x - self.min_x) * x / viewport_width as f32)
            * self.scale.x
            * self.ratio
    }

    fn calculate(&mut self) {
        self.matrix = Mat4::orthographic_rh_gl(
            self.min_x * self.ratio * self.scale.x,
            self.max_x * self.ratio * self.scale.x,
            self.min_y * self.scale.y,
            self.max_y * self.scale.y,
            self.min_z * self.scale.z,
            self.max_z * self.scale.z,
        );
    }
}

/// Perspective projection defined by a vertical field of view.
#[derive(Debug, Clone, PartialEq)]
pub struct PerspectiveProjection {
    /// Vertical field of view in degrees.
    fov: f32,
    near: f32,
    far: f32,
    ratio: f32,
    matrix: Mat4,
}

impl PerspectiveProjection {
    /// Create a perspective projection. `fov` is in degrees.
    #[must_use]
    pub fn new(fov: f32, near: f32, far: f32, ratio: f32) -> Self {
        let mut projection = Self {
            fov,
            near,
            far,
            ratio,
            matrix: Mat4::IDENTITY,
        };
        projection.calculate();
        projection
    }

    /// Set the viewport aspect ratio (width / height).
    pub fn set_ratio(&mut self, ratio: f32) {
        self.ratio = ratio;
        self.calculate();
    }

    /// Set the vertical field of view in degrees.
    pub fn set_fov(&mut self, fov: f32) {
        self.fov = fov;
        self.calculate();
    }

    /// Set the near clipping distance.
    pub fn set_near(&mut self, near: f32) {
        self.near = near;
        self.calculate();
    }

    /// Set the far clipping distance.
    pub fn set_far(&mut self, far: f32) {
        self.far = far;
        self.calculate();
    }

    /// Vertical field of view in degrees.
    #[must_use]
    pub fn fov(&self) -> f32 {
        self.fov
    }

    /// Near clipping distance.
    #[must_use]
    pub fn near(&self) -> f32 {
        self.near
    }

    /// Far clipping distance.
    #[must_use]
    pub fn far(&self) -> f32 {
        self.far
    }

    /// Current aspect ratio.
    #[must_use]
    pub fn ratio(&self) -> f32 {
        self.ratio
    }

    /// Clip matrix for the current parameters.
    #[must_use]
    pub fn matrix(&self) -> &Mat4 {
        &self.matrix
    }

    /// World units per screen pixel at `camera_depth` from the focal plane.
    #[must_use]
    pub fn projection_coefficient(
        &self,
        camera_depth: f32,
        viewport_width: u32,
    ) -> f32 {
        camera_depth * (self.fov.to_radians() * 0.5).tan() * self.ratio
            / viewport_width as f32
    }

    fn calculate(&mut self) {
        self.matrix = Mat4::perspective_rh_gl(
            self.fov.to_radians(),
            self.ratio,
            self.near,
            self.far,
        );
    }
}

/// One of the projections a camera can switch between.
#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    /// Parallel projection; panning is depth independent.
    Orthographic(OrthographicProjection),
    /// Pinhole projection; panning scales with depth.
    Perspective(PerspectiveProjection),
}

impl Projection {
    /// Push a new viewport aspect ratio.
    pub fn set_ratio(&mut self, ratio: f32) {
        match self {
            Self::Orthographic(p) => p.set_ratio(ratio),
            Self::Perspective(p) => p.set_ratio(ratio),
        }
    }

    /// Current aspect ratio.
    #[must_use]
    pub fn ratio(&self) -> f32 {
        match self {
            Self::Orthographic(p) => p.ratio(),
            Self::Perspective(p) => p.ratio(),
        }
    }

    /// Clip matrix for the current parameters.
    #[must_use]
    pub fn matrix(&self) -> &Mat4 {
        match self {
            Self::Orthographic(p) => p.matrix(),
            Self::Perspective(p) => p.matrix(),
        }
    }

    /// Convert one pixel of screen movement into world units.
    #[must_use]
    pub fn projection_coefficient(
        &self,
        camera_depth: f32,
        viewport_width: u32,
    ) -> f32 {
        match self {
            Self::Orthographic(p) => p.projection_coefficient(viewport_width),
            Self::Perspective(p) => {
                p.projection_coefficient(camera_depth, viewport_width)
            }
        }
    }

    /// Whether this is the perspective variant.
    #[must_use]
    pub fn is_perspective(&self) -> bool {
        matches!(self, Self::Perspective(_))
    }

    /// The orthographic variant, if this is one.
    #[must_use]
    pub fn as_orthographic(&self) -> Option<&OrthographicProjection> {
        match self {
            Self::Orthographic(p) => Some(p),
            Self::Perspective(_) => None,
        }
    }

    /// Mutable access to the orthographic variant, if this is one.
    pub fn as_orthographic_mut(
        &mut self,
    ) -> Option<&mut OrthographicProjection> {
        match self {
            Self::Orthographic(p) => Some(p),
            Self::Perspective(_) => None,
        }
    }

    /// The perspective variant, if this is one.
    #[must_use]
    pub fn as_perspective(&self) -> Option<&PerspectiveProjection> {
        match self {
            Self::Perspective(p) => Some(p),
            Self::Orthographic(_) => None,
        }
    }
}

impl From<OrthographicProjection> for Projection {
    fn from(projection: OrthographicProjection) -> Self {
        Self::Orthographic(projection)
    }
}

impl From<PerspectiveProjection> for Projection {
    fn from(projection: PerspectiveProjection) -> Self {
        Self::Perspective(projection)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec4;

    use super::*;

    #[test]
    fn ortho_coefficient_matches_range_over_width() {
        let ratio = 800.0 / 600.0;
        let ortho = OrthographicProjection::new(
            (-10.0, 10.0),
            (-10.0, 10.0),
            (-100.0, 100.0),
            ratio,
        );
        let expected = 20.0 * ratio / 800.0;
        assert!((ortho.projection_coefficient(800) - expected).abs() < 1e-6);
        assert!((expected - 0.0333).abs() < 1e-4);

        // Depth is ignored for parallel projection.
        let projection = Projection::from(ortho);
        assert_eq!(
            projection.projection_coefficient(1.0, 800),
            projection.projection_coefficient(500.0, 800)
        );
    }

    #[test]
    fn ortho_coefficient_follows_scale() {
        let mut ortho = OrthographicProjection::new(
            (-10.0, 10.0),
            (-10.0, 10.0),
            (-100.0, 100.0),
            1.0,
        );
        let base = ortho.projection_coefficient(400);
        ortho.set_scale(Vec3::new(0.5, 1.0, 1.0));
        assert!((ortho.projection_coefficient(400) - base * 0.5).abs() < 1e-6);
    }

    #[test]
    fn perspective_coefficient_scales_with_depth() {
        let persp = PerspectiveProjection::new(45.0, 0.1, 1000.0, 1.0);
        let k = persp.projection_coefficient(10.0, 800);
        assert!((k - 0.005_177).abs() < 1e-5);
        let k_far = persp.projection_coefficient(20.0, 800);
        assert!((k_far - 2.0 * k).abs() < 1e-6);
    }

    #[test]
    fn setters_rebuild_matrix() {
        let mut persp = PerspectiveProjection::new(45.0, 0.1, 1000.0, 1.0);
        let before = *persp.matrix();
        persp.set_ratio(2.0);
        assert_ne!(before, *persp.matrix());
        assert_eq!(
            *persp.matrix(),
            Mat4::perspective_rh_gl(45.0_f32.to_radians(), 2.0, 0.1, 1000.0)
        );

        let mut ortho = OrthographicProjection::new(
            (-1.0, 1.0),
            (-1.0, 1.0),
            (-1.0, 1.0),
            1.0,
        );
        ortho.set_x_range(-2.0, 2.0);
        assert_eq!(
            *ortho.matrix(),
            Mat4::orthographic_rh_gl(-2.0, 2.0, -1.0, 1.0, -1.0, 1.0)
        );
    }

    #[test]
    fn ortho_maps_range_edges_to_clip_edges() {
        let ortho = OrthographicProjection::new(
            (-10.0, 10.0),
            (-5.0, 5.0),
            (-100.0, 100.0),
            2.0,
        );
        let right_edge = *ortho.matrix() * Vec4::new(20.0, 5.0, 0.0, 1.0);
        assert!((right_edge.x - 1.0).abs() < 1e-6);
        assert!((right_edge.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn projected_x_spans_range() {
        let ortho = OrthographicProjection::new(
            (-10.0, 10.0),
            (-10.0, 10.0),
            (-1.0, 1.0),
            1.0,
        );
        assert!((ortho.projected_x(0.0, 800) + 10.0).abs() < 1e-6);
        assert!((ortho.projected_x(400.0, 800)).abs() < 1e-6);
        assert!((ortho.projected_x(800.0, 800) - 10.0).abs() < 1e-6);
    }

    #[test]
    fn variant_tag_query() {
        let persp: Projection =
            PerspectiveProjection::new(60.0, 1.0, 100.0, 1.0).into();
        let ortho: Projection = OrthographicProjection::new(
            (-1.0, 1.0),
            (-1.0, 1.0),
            (-1.0, 1.0),
            1.0,
        )
        .into();
        assert!(persp.is_perspective());
        assert!(!ortho.is_perspective());
        assert!(ortho.as_orthographic().is_some());
        assert!(persp.as_orthographic().is_none());
    }
}
