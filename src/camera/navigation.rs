//! Camera movement, rotation, zoom and focus primitives.
//!
//! Screen-space deltas are converted to world units through the active
//! projection's coefficient, so panning tracks the cursor regardless of
//! resolution and (for perspective) depth.

use glam::Vec3;

use super::core::Camera;

/// Direction for [`Camera::move_in`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MovementDirection {
    /// Along `front`, scaled by the camera speed.
    Forward,
    /// Along `right`, scaled by the projection coefficient.
    Right,
    /// Along the camera `up`, scaled by the projection coefficient.
    Up,
    /// Along the XY-flattened forward vector, scaled by the projection
    /// coefficient.
    XyForward,
}

impl Camera {
    /// Move by a screen-space `delta` in `direction`.
    pub fn move_in(&mut self, direction: MovementDirection, delta: f32) {
        let k = self.projection_coefficient();
        match direction {
            MovementDirection::Forward => self.move_front(self.speed * delta),
            MovementDirection::Right => self.move_right(delta * k),
            MovementDirection::Up => self.move_up(delta * k),
            MovementDirection::XyForward => self.move_xy_front(delta * k),
        }
    }

    /// Move along `front` by a world-space distance.
    pub fn move_front(&mut self, delta: f32) {
        self.move_by(self.front() * delta);
    }

    /// Move along the XY-forward vector by a world-space distance.
    pub fn move_xy_front(&mut self, delta: f32) {
        self.move_by(self.xy_front() * delta);
    }

    /// Move along `up` by a world-space distance.
    pub fn move_up(&mut self, delta: f32) {
        self.move_by(self.up() * delta);
    }

    /// Move along `right` by a world-space distance.
    pub fn move_right(&mut self, delta: f32) {
        self.move_by(self.right() * delta);
    }

    /// Translate the eye and re-unproject the lookpoint.
    pub fn move_by(&mut self, delta: Vec3) {
        self.position += delta;
        self.update(false, true);
    }

    /// Rotate about the eye by yaw/pitch deltas in degrees.
    pub fn rotate(&mut self, delta_yaw: f32, delta_pitch: f32) {
        self.yaw += delta_yaw;
        self.pitch += delta_pitch;
        self.update(true, false);
    }

    /// [`rotate`](Self::rotate) with pixel deltas scaled by sensitivity.
    pub fn rotate_pixels(&mut self, delta_x: f32, delta_y: f32) {
        self.rotate(delta_x * self.sensitivity, delta_y * self.sensitivity);
    }

    /// Orbit around the lookpoint by yaw/pitch deltas in degrees.
    ///
    /// The eye keeps its distance to the lookpoint, which stays fixed.
    pub fn rotate_around(&mut self, delta_yaw: f32, delta_pitch: f32) {
        let old_front = self.front();
        let radius = self.look().length();

        self.rotate(delta_yaw, delta_pitch);
        self.position -= (self.front() - old_front) * radius;
        self.update(false, false);
        self.refresh_look();
    }

    /// [`rotate_around`](Self::rotate_around) with pixel deltas scaled by
    /// sensitivity.
    pub fn rotate_around_pixels(&mut self, delta_x: f32, delta_y: f32) {
        self.rotate_around(
            delta_x * self.sensitivity,
            delta_y * self.sensitivity,
        );
    }

    /// Change the view-matrix zoom factor. Position is unchanged.
    pub fn zoom(&mut self, delta: f32) {
        self.zoom -= delta * self.sensitivity;
        self.update(false, false);
    }

    /// Accumulate into the orthographic scale. No visible effect under a
    /// perspective projection.
    pub fn scale(&mut self, delta: Vec3) {
        self.scale += delta * self.sensitivity;
        self.update(false, false);
    }

    /// Recentre the XY view on `point` without changing depth.
    pub fn focus(&mut self, point: Vec3) {
        let mut delta = point - self.look_point();
        delta.z = 0.0;
        log::debug!("focus on {point}");
        self.move_by(delta);
    }
}
