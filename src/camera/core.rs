use glam::{Mat4, UVec2, Vec2, Vec3};

use super::projection::Projection;
use crate::manipulator::Manipulator;
use crate::util::transform;

/// Initial camera configuration, restored by [`Camera::reset`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraParameters {
    /// Eye position in world space.
    pub position: Vec3,
    /// World up direction.
    pub up: Vec3,
    /// Rotation about the vertical axis in degrees.
    pub yaw: f32,
    /// Rotation about the lateral axis in degrees.
    pub pitch: f32,
    /// Multiplier for forward movement.
    pub speed: f32,
    /// Multiplier for pixel rotation, zoom and scale deltas.
    pub sensitivity: f32,
    /// Uniform view-matrix zoom factor.
    pub zoom: f32,
    /// Non-uniform orthographic scale.
    pub scale: Vec3,
}

impl Default for CameraParameters {
    /// Looking at the origin from above and behind, z up.
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, -10.0, 10.0),
            up: Vec3::Z,
            yaw: 90.0,
            pitch: -45.0,
            speed: 1.0,
            sensitivity: 0.25,
            zoom: 1.0,
            scale: Vec3::ONE,
        }
    }
}

/// Viewer camera: eye, orientation, projections and the manipulator that
/// drives them.
///
/// Every mutator recomputes derived state before returning, so
/// [`view`](Self::view), [`projection`](Self::projection) and
/// [`look_point`](Self::look_point) always reflect the latest change.
///
/// At least one projection must be supplied. With an empty list the
/// projection matrix reads as identity and screen-scaled movement is a
/// no-op.
#[derive(Debug, Clone)]
pub struct Camera {
    pub(super) yaw: f32,
    pub(super) pitch: f32,
    pub(super) speed: f32,
    pub(super) sensitivity: f32,
    pub(super) zoom: f32,
    pub(super) scale: Vec3,
    pub(super) position: Vec3,
    front: Vec3,
    xy_front: Vec3,
    up: Vec3,
    right: Vec3,
    world_up: Vec3,
    look_point: Vec3,
    look: Vec3,
    defaults: CameraParameters,
    projections: Vec<Projection>,
    projection_index: usize,
    pub(super) manipulator: Manipulator,
    viewport: UVec2,
    view: Mat4,
}

impl Camera {
    /// Build a camera from its initial parameters, the projections it can
    /// switch between and the manipulator that will drive it.
    ///
    /// The viewport starts at 1×1; call [`set_viewport`](Self::set_viewport)
    /// once the host knows its size.
    #[must_use]
    pub fn new(
        parameters: CameraParameters,
        projections: Vec<Projection>,
        manipulator: Manipulator,
    ) -> Self {
        if projections.is_empty() {
            log::warn!("camera created without projections");
        }

        let mut camera = Self {
            yaw: parameters.yaw,
            pitch: parameters.pitch,
            speed: parameters.speed,
            sensitivity: parameters.sensitivity,
            zoom: parameters.zoom,
            scale: parameters.scale,
            position: parameters.position,
            front: Vec3::NEG_Z,
            xy_front: Vec3::ZERO,
            up: Vec3::Y,
            right: Vec3::X,
            world_up: parameters.up,
            look_point: Vec3::ZERO,
            look: Vec3::ZERO,
            defaults: parameters,
            projections,
            projection_index: 0,
            manipulator,
            viewport: UVec2::ONE,
            view: Mat4::IDENTITY,
        };
        camera.update(true, true);
        camera
    }

    /// Restore the initial parameters and the first projection.
    pub fn reset(&mut self) {
        let defaults = self.defaults;
        self.yaw = defaults.yaw;
        self.pitch = defaults.pitch;
        self.speed = defaults.speed;
        self.sensitivity = defaults.sensitivity;
        self.zoom = defaults.zoom;
        self.scale = defaults.scale;
        self.position = defaults.position;
        self.world_up = defaults.up;

        self.set_projection_index(0);
        self.update(true, true);
        log::debug!("camera reset to {:?}", self.position);
    }

    // ── Update pipeline ─────────────────────────────────────────────────

    /// Recompute derived state after a mutation.
    ///
    /// Clamps range-limited fields, rebuilds the basis when `use_angles`,
    /// rebuilds the view matrix, re-unprojects the lookpoint when
    /// `update_look`, and pushes the scale into an active orthographic
    /// projection.
    pub(super) fn update(&mut self, use_angles: bool, update_look: bool) {
        self.check_range_limits();

        if use_angles {
            self.update_basis();
        }

        self.calculate_view_matrix();

        if update_look {
            self.update_look_point();
        }

        let scale = self.scale;
        if let Some(ortho) = self
            .projections
            .get_mut(self.projection_index)
            .and_then(Projection::as_orthographic_mut)
        {
            ortho.set_scale(scale);
        }
    }

    /// Clamp pitch, yaw, zoom, position and scale into the manipulator's
    /// range limits.
    fn check_range_limits(&mut self) {
        let limits = *self.manipulator.range_limits();
        self.pitch = limits.pitch.clamp(self.pitch);
        self.yaw = limits.yaw.clamp(self.yaw);
        self.zoom = limits.zoom.clamp(self.zoom);
        self.position = limits.clamp_position(self.position);
        self.scale = limits.clamp_scale(self.scale);
    }

    fn update_basis(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();

        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            yaw.sin() * pitch.cos(),
            pitch.sin(),
        )
        .normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();

        let xy_move = self.front + self.up;
        self.xy_front = Vec3::new(xy_move.x, xy_move.y, 0.0);
    }

    fn calculate_view_matrix(&mut self) {
        self.view =
            Mat4::look_at_rh(self.position, self.position + self.front, self.up)
                * Mat4::from_scale(Vec3::splat(self.zoom));
    }

    fn update_look_point(&mut self) {
        let centre = self.viewport.as_vec2() * 0.5;
        self.look_point = self.to_world_xy_coordinates(centre, 0.0);
        self.refresh_look();
    }

    /// Recompute the look vector against the stored lookpoint.
    pub(super) fn refresh_look(&mut self) {
        self.look = self.position - self.look_point;
    }

    // ── Projections ─────────────────────────────────────────────────────

    /// Advance to the next projection, wrapping after the last one.
    pub fn switch_projection(&mut self) {
        self.set_projection_index(self.projection_index + 1);
    }

    /// Select a projection. Out-of-range indices wrap to the first one; an
    /// empty list leaves the camera untouched.
    pub fn set_projection_index(&mut self, index: usize) {
        if self.projections.is_empty() {
            return;
        }

        self.projection_index = if index >= self.projections.len() {
            0
        } else {
            index
        };
        log::debug!("active projection -> {}", self.projection_index);

        let scale = self.scale;
        if let Some(ortho) = self.projections[self.projection_index]
            .as_orthographic_mut()
        {
            ortho.set_scale(scale);
        }
    }

    /// Index of the active projection.
    #[must_use]
    pub fn projection_index(&self) -> usize {
        self.projection_index
    }

    /// All configured projections.
    #[must_use]
    pub fn projections(&self) -> &[Projection] {
        &self.projections
    }

    /// The active projection, if any were configured.
    #[must_use]
    pub fn active_projection(&self) -> Option<&Projection> {
        self.projections.get(self.projection_index)
    }

    /// Whether the active projection is perspective.
    #[must_use]
    pub fn is_projection_perspective(&self) -> bool {
        self.active_projection()
            .is_some_and(Projection::is_perspective)
    }

    /// Screen pixels → world units for the active projection at the
    /// camera's current depth.
    pub(super) fn projection_coefficient(&self) -> f32 {
        self.active_projection().map_or(0.0, |p| {
            p.projection_coefficient(self.position.z, self.viewport.x)
        })
    }

    // ── Viewport ────────────────────────────────────────────────────────

    /// Resize the viewport. Pushes the new aspect ratio to every projection
    /// and re-unprojects the lookpoint. Zero-sized viewports (a minimized
    /// window) are ignored.
    pub fn set_viewport(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            log::debug!("ignoring empty viewport {width}x{height}");
            return;
        }

        let ratio = width as f32 / height as f32;
        self.viewport = UVec2::new(width, height);

        for projection in &mut self.projections {
            projection.set_ratio(ratio);
        }

        log::debug!("viewport {width}x{height} (ratio {ratio})");
        self.update(false, true);
    }

    /// Viewport size in pixels.
    #[must_use]
    pub fn viewport_size(&self) -> UVec2 {
        self.viewport
    }

    // ── Setters ─────────────────────────────────────────────────────────

    /// Set the pitch in degrees.
    pub fn set_pitch(&mut self, pitch: f32) {
        self.pitch = pitch;
        self.update(true, false);
    }

    /// Set the yaw in degrees.
    pub fn set_yaw(&mut self, yaw: f32) {
        self.yaw = yaw;
        self.update(true, false);
    }

    /// Set the view-matrix zoom factor.
    pub fn set_zoom(&mut self, zoom: f32) {
        self.zoom = zoom;
        self.update(true, false);
    }

    /// Set the orthographic scale.
    pub fn set_scale(&mut self, scale: Vec3) {
        self.scale = scale;
        self.update(false, false);
    }

    /// Move the eye to `position` and re-unproject the lookpoint.
    pub fn set_position(&mut self, position: Vec3) {
        self.position = position;
        self.update(false, true);
    }

    /// Set the rotation/zoom/scale sensitivity.
    pub fn set_sensitivity(&mut self, sensitivity: f32) {
        self.sensitivity = sensitivity;
    }

    /// Set the forward movement speed.
    pub fn set_speed(&mut self, speed: f32) {
        self.speed = speed;
    }

    // ── Getters ─────────────────────────────────────────────────────────

    /// Projection × view, for transforming vertices.
    #[must_use]
    pub fn transformation(&self) -> Mat4 {
        self.projection() * self.view
    }

    /// View matrix.
    #[must_use]
    pub fn view(&self) -> Mat4 {
        self.view
    }

    /// Active projection matrix (identity when none is configured).
    #[must_use]
    pub fn projection(&self) -> Mat4 {
        self.active_projection()
            .map_or(Mat4::IDENTITY, |p| *p.matrix())
    }

    /// Yaw in degrees.
    #[must_use]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Pitch in degrees.
    #[must_use]
    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// View-matrix zoom factor.
    #[must_use]
    pub fn zoom_factor(&self) -> f32 {
        self.zoom
    }

    /// Orthographic scale.
    #[must_use]
    pub fn scale_factor(&self) -> Vec3 {
        self.scale
    }

    /// Forward movement speed.
    #[must_use]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Rotation/zoom/scale sensitivity.
    #[must_use]
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Eye position.
    #[must_use]
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Unit view direction.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit lateral axis.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.right
    }

    /// Unit camera up axis.
    #[must_use]
    pub fn up(&self) -> Vec3 {
        self.up
    }

    /// `front + up` flattened onto the XY plane (not normalized).
    #[must_use]
    pub fn xy_front(&self) -> Vec3 {
        self.xy_front
    }

    /// World up direction.
    #[must_use]
    pub fn world_up(&self) -> Vec3 {
        self.world_up
    }

    /// Eye position minus lookpoint.
    #[must_use]
    pub fn look(&self) -> Vec3 {
        self.look
    }

    /// World point on `z = 0` under the viewport centre.
    #[must_use]
    pub fn look_point(&self) -> Vec3 {
        self.look_point
    }

    /// Initial parameters used by [`reset`](Self::reset).
    #[must_use]
    pub fn defaults(&self) -> &CameraParameters {
        &self.defaults
    }

    /// The owned manipulator.
    #[must_use]
    pub fn manipulator(&self) -> &Manipulator {
        &self.manipulator
    }

    /// Mutable access to the manipulator, e.g. to change range limits.
    pub fn manipulator_mut(&mut self) -> &mut Manipulator {
        &mut self.manipulator
    }

    // ── Coordinate conversion ───────────────────────────────────────────

    /// Unproject a screen point onto the plane `z = world_z`.
    #[must_use]
    pub fn to_world_xy_coordinates(&self, point: Vec2, world_z: f32) -> Vec3 {
        transform::to_world_xy_coordinates(
            point,
            self.viewport,
            &self.view,
            &self.projection(),
            world_z,
        )
    }

    /// Unproject screen points onto the plane `z = world_z`, in order.
    #[must_use]
    pub fn to_world_xy_coordinates_all(
        &self,
        points: &[Vec2],
        world_z: f32,
    ) -> Vec<Vec3> {
        transform::to_world_xy_coordinates_all(
            points,
            self.viewport,
            &self.view,
            &self.projection(),
            world_z,
        )
    }

    /// Unproject a screen point at normalized depth (0 near, 1 far).
    #[must_use]
    pub fn to_world_coordinates(&self, point: Vec2, depth: f32) -> Vec3 {
        transform::to_world_coordinates(
            point,
            self.viewport,
            &self.view,
            &self.projection(),
            depth,
        )
    }

    /// Unproject screen points at normalized depth, in order.
    #[must_use]
    pub fn to_world_coordinates_all(
        &self,
        points: &[Vec2],
        depth: f32,
    ) -> Vec<Vec3> {
        transform::to_world_coordinates_all(
            points,
            self.viewport,
            &self.view,
            &self.projection(),
            depth,
        )
    }

    /// Project a world point to viewport pixels (y down).
    #[must_use]
    pub fn to_screen_coordinates(&self, world_point: Vec3) -> Vec2 {
        let ndc =
            transform::to_screen_coordinates(world_point, &self.transformation());
        transform::ndc_to_viewport(ndc, self.viewport)
    }
}
