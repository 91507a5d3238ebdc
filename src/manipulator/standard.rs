//! Standard navigation: screen-plane pan, orbit, wheel zoom and rectangle
//! fit.

use glam::{Vec2, Vec3};

use super::{Gesture, ScreenRect};
use crate::camera::{Camera, MovementDirection};

pub(super) fn apply(camera: &mut Camera, gesture: Gesture) {
    match gesture {
        Gesture::Move { delta } => pan(camera, delta),
        Gesture::Shift { delta } => shift(camera, delta),
        Gesture::Rotate { delta } => rotate(camera, delta),
        Gesture::Zoom { delta } => zoom(camera, delta),
        Gesture::ZoomRect(rect) => zoom_rect(camera, rect),
        Gesture::Focus(point) => camera.focus(point),
    }
}

/// Pan in the screen plane: x along `right`, y along the XY-forward vector.
fn pan(camera: &mut Camera, delta: Vec2) {
    camera.move_in(MovementDirection::Right, -delta.x);
    camera.move_in(MovementDirection::XyForward, delta.y);
}

/// Pan vertically: x along `right`, y along `up`.
fn shift(camera: &mut Camera, delta: Vec2) {
    camera.move_in(MovementDirection::Right, -delta.x);
    camera.move_in(MovementDirection::Up, delta.y);
}

fn rotate(camera: &mut Camera, delta: Vec2) {
    camera.rotate_around_pixels(-delta.x, -delta.y);
}

/// Perspective: dolly along `front`, refusing to go further in once the
/// z limit is reached. Orthographic: shrink or grow the xy scale.
fn zoom(camera: &mut Camera, delta: f32) {
    let sensitivity = camera.manipulator().zoom_sensitivity();

    if camera.is_projection_perspective() {
        let step = delta / sensitivity;
        let range_z = camera.manipulator().range_limits().z;
        let at_near_limit =
            range_z.enabled && camera.position().z <= range_z.min;
        if !at_near_limit || step < 0.0 {
            camera.move_in(MovementDirection::Forward, step);
        }
    } else {
        let step = -delta / (sensitivity * 10.0);
        camera.scale(Vec3::new(step, step, 0.0));
    }
}

/// Fit `rect` to the viewport, then pan so its centre becomes the new
/// lookpoint.
///
/// The dominant side decides the fit; a square rectangle counts as
/// height-dominant.
fn zoom_rect(camera: &mut Camera, rect: ScreenRect) {
    let viewport = camera.viewport_size().as_vec2();
    let centre = rect.center();
    let rect_centre = camera.to_world_xy_coordinates(centre, 0.0);
    let delta_position = rect_centre - camera.look_point();
    let width_dominant = rect.width > rect.height;

    if camera.is_projection_perspective() {
        let world = |x: f32, y: f32| {
            camera.to_world_xy_coordinates(Vec2::new(x, y), 0.0)
        };

        let rect_size = if width_dominant {
            world(rect.left, centre.y).distance(world(rect.right(), centre.y))
        } else {
            world(centre.x, rect.top).distance(world(centre.x, rect.bottom()))
        };
        let half = viewport * 0.5;
        let screen_size = if width_dominant {
            world(0.0, half.y).distance(world(viewport.x, half.y))
        } else {
            world(half.x, 0.0).distance(world(half.x, viewport.y))
        };

        let look_length = camera.look().length();
        let distance = rect_size * look_length / screen_size;
        log::debug!(
            "rect zoom (perspective): {look_length} -> {distance} world units"
        );
        camera.move_front(look_length - distance);
    } else {
        let k = if width_dominant {
            rect.width / viewport.x
        } else {
            rect.height / viewport.y
        };
        let scale = camera.scale_factor();
        log::debug!("rect zoom (orthographic): scale x{k}");
        camera.set_scale(Vec3::new(scale.x * k, scale.y * k, scale.z));
    }

    camera.move_by(delta_position);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{
        CameraParameters, OrthographicProjection, PerspectiveProjection,
    };
    use crate::manipulator::{Manipulator, Range, RangeLimits};

    fn ortho_camera(limits: RangeLimits) -> Camera {
        let mut camera = Camera::new(
            CameraParameters::default(),
            vec![OrthographicProjection::new(
                (-10.0, 10.0),
                (-10.0, 10.0),
                (-1000.0, 1000.0),
                1.0,
            )
            .into()],
            Manipulator::standard(limits),
        );
        camera.set_viewport(800, 600);
        camera
    }

    fn perspective_camera(limits: RangeLimits) -> Camera {
        let mut camera = Camera::new(
            CameraParameters::default(),
            vec![PerspectiveProjection::new(45.0, 0.1, 1000.0, 1.0).into()],
            Manipulator::standard(limits),
        );
        camera.set_viewport(800, 600);
        camera
    }

    #[test]
    fn square_rect_zoom_uses_height_ratio() {
        let mut camera = ortho_camera(RangeLimits::UNLIMITED);
        zoom_rect(&mut camera, ScreenRect::new(100.0, 100.0, 200.0, 200.0));
        let scale = camera.scale_factor();
        assert!((scale.x - 200.0 / 600.0).abs() < 1e-5);
        assert!((scale.y - 200.0 / 600.0).abs() < 1e-5);
        assert_eq!(scale.z, 1.0);
    }

    #[test]
    fn wide_rect_zoom_uses_width_ratio() {
        let mut camera = ortho_camera(RangeLimits::UNLIMITED);
        zoom_rect(&mut camera, ScreenRect::new(0.0, 0.0, 400.0, 100.0));
        assert!((camera.scale_factor().x - 0.5).abs() < 1e-5);
    }

    #[test]
    fn rect_zoom_recentres_on_rect() {
        let mut camera = ortho_camera(RangeLimits::UNLIMITED);
        let rect = ScreenRect::new(500.0, 100.0, 100.0, 100.0);
        let target = camera.to_world_xy_coordinates(rect.center(), 0.0);
        zoom_rect(&mut camera, rect);
        assert!(camera.look_point().abs_diff_eq(target, 1e-2));
    }

    #[test]
    fn perspective_rect_zoom_moves_closer() {
        let mut camera = perspective_camera(RangeLimits::UNLIMITED);
        let before = camera.look().length();
        zoom_rect(&mut camera, ScreenRect::new(300.0, 200.0, 200.0, 200.0));
        assert!(camera.look().length() < before);
    }

    #[test]
    fn perspective_rect_zoom_fits_height_and_recentres() {
        let top_down = CameraParameters {
            position: Vec3::new(0.0, 0.0, 10.0),
            up: Vec3::Y,
            yaw: 90.0,
            pitch: -90.0,
            ..CameraParameters::default()
        };
        let mut camera = Camera::new(
            top_down,
            vec![PerspectiveProjection::new(45.0, 0.1, 1000.0, 1.0).into()],
            Manipulator::standard(RangeLimits::UNLIMITED),
        );
        camera.set_viewport(800, 600);
        let before = camera.look().length();
        assert!((before - 10.0).abs() < 1e-3);

        let rect = ScreenRect::new(500.0, 100.0, 200.0, 200.0);
        let target = camera.to_world_xy_coordinates(rect.center(), 0.0);
        zoom_rect(&mut camera, rect);

        let after = camera.look().length();
        assert!(
            (after - before * 200.0 / 600.0).abs() < 1e-3,
            "look length {after}"
        );
        assert!(
            camera.look_point().abs_diff_eq(target, 1e-3),
            "{} vs {target}",
            camera.look_point()
        );
    }

    #[test]
    fn ortho_wheel_zoom_shrinks_scale() {
        let mut camera = ortho_camera(RangeLimits::UNLIMITED);
        camera.set_sensitivity(1.0);
        zoom(&mut camera, 120.0);
        let scale = camera.scale_factor();
        assert!((scale.x - 0.9).abs() < 1e-6);
        assert!((scale.y - 0.9).abs() < 1e-6);
        assert_eq!(scale.z, 1.0);
    }

    #[test]
    fn perspective_wheel_zoom_moves_forward() {
        let mut camera = perspective_camera(RangeLimits::UNLIMITED);
        let before = camera.position();
        zoom(&mut camera, 120.0);
        let moved = camera.position() - before;
        assert!(moved.abs_diff_eq(camera.front(), 1e-5));
    }

    #[test]
    fn perspective_wheel_zoom_stops_at_near_limit() {
        let limits = RangeLimits {
            z: Range::new(10.0, 100.0),
            ..RangeLimits::UNLIMITED
        };
        let mut camera = perspective_camera(limits);
        assert_eq!(camera.position().z, 10.0);

        let before = camera.position();
        zoom(&mut camera, 120.0);
        assert_eq!(camera.position(), before);

        zoom(&mut camera, -120.0);
        assert!(camera.position().z > before.z);
    }

    #[test]
    fn pan_follows_screen_axes() {
        let mut camera = ortho_camera(RangeLimits::UNLIMITED);
        let before = camera.position();
        pan(&mut camera, Vec2::new(-10.0, 0.0));
        let k = 20.0 * (800.0 / 600.0) / 800.0;
        assert!((camera.position().x - before.x - 10.0 * k).abs() < 1e-4);
    }
}
