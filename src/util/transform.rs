//! Screen ↔ world coordinate conversion.
//!
//! Screen coordinates are pixels with the origin at the top-left corner and
//! y growing downward. Depth values passed to the unprojection helpers are
//! normalized: `0.0` is the near plane, `1.0` the far plane. Matrices are
//! expected in the OpenGL clip convention produced by
//! [`Projection`](crate::camera::Projection).

use glam::{Mat4, UVec2, Vec2, Vec3};

/// Magnitude below which a ray direction component is treated as zero.
const FUZZY_EPSILON: f32 = 0.000_01;

/// Minimum downward z extent enforced on a near→far ray before it is
/// intersected with a horizontal plane.
const MIN_RAY_DROP: f32 = 0.001;

fn is_fuzzy_zero(value: f32) -> bool {
    value.abs() <= FUZZY_EPSILON
}

/// Unproject a screen point at normalized `depth` into world space.
#[must_use]
pub fn to_world_coordinates(
    screen_point: Vec2,
    viewport: UVec2,
    view: &Mat4,
    projection: &Mat4,
    depth: f32,
) -> Vec3 {
    let size = viewport.as_vec2();
    let flipped_y = size.y - screen_point.y;
    let ndc = Vec3::new(
        screen_point.x / size.x,
        flipped_y / size.y,
        depth,
    ) * 2.0
        - Vec3::ONE;

    let inverse = (*projection * *view).inverse();
    let world = inverse * ndc.extend(1.0);
    let w = if world.w == 0.0 { 1.0 } else { world.w };
    world.truncate() / w
}

/// Unproject a screen point onto the horizontal plane `z = world_z`.
///
/// The ray between the near and far unprojections is forced to descend by
/// at least [`MIN_RAY_DROP`] so that a view parallel to the plane still
/// yields a finite intersection.
#[must_use]
pub fn to_world_xy_coordinates(
    screen_point: Vec2,
    viewport: UVec2,
    view: &Mat4,
    projection: &Mat4,
    world_z: f32,
) -> Vec3 {
    let near =
        to_world_coordinates(screen_point, viewport, view, projection, 0.0);
    let mut far =
        to_world_coordinates(screen_point, viewport, view, projection, 1.0);

    if far.z > near.z - MIN_RAY_DROP {
        far.z = near.z - MIN_RAY_DROP;
    }

    let direction = far - near;
    let t = if is_fuzzy_zero(direction.z) {
        world_z - near.z
    } else {
        (world_z - near.z) / direction.z
    };

    Vec3::new(
        near.x + t * direction.x,
        near.y + t * direction.y,
        world_z,
    )
}

/// [`to_world_coordinates`] applied to every point, preserving order.
#[must_use]
pub fn to_world_coordinates_all(
    screen_points: &[Vec2],
    viewport: UVec2,
    view: &Mat4,
    projection: &Mat4,
    depth: f32,
) -> Vec<Vec3> {
    screen_points
        .iter()
        .map(|p| to_world_coordinates(*p, viewport, view, projection, depth))
        .collect()
}

/// [`to_world_xy_coordinates`] applied to every point, preserving order.
#[must_use]
pub fn to_world_xy_coordinates_all(
    screen_points: &[Vec2],
    viewport: UVec2,
    view: &Mat4,
    projection: &Mat4,
    world_z: f32,
) -> Vec<Vec3> {
    screen_points
        .iter()
        .map(|p| {
            to_world_xy_coordinates(*p, viewport, view, projection, world_z)
        })
        .collect()
}

/// Project a world point through `transformation` and return normalized
/// device x/y (after the homogeneous divide).
#[must_use]
pub fn to_screen_coordinates(world_point: Vec3, transformation: &Mat4) -> Vec2 {
    transformation.project_point3(world_point).truncate()
}

/// Map normalized device x/y to pixel coordinates (y down).
#[must_use]
pub fn ndc_to_viewport(ndc: Vec2, viewport: UVec2) -> Vec2 {
    let size = viewport.as_vec2();
    let unit = (ndc + Vec2::ONE) * 0.5;
    Vec2::new(unit.x * size.x, size.y - unit.y * size.y)
}

/// Face normal of a triangle. Not normalized.
#[must_use]
pub fn calculate_normal(p1: Vec3, p2: Vec3, p3: Vec3) -> Vec3 {
    (p2 - p1).cross(p3 - p1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn looking_down() -> (Mat4, Mat4) {
        let view =
            Mat4::look_at_rh(Vec3::new(0.0, 0.0, 10.0), Vec3::ZERO, Vec3::Y);
        let proj =
            Mat4::perspective_rh_gl(45.0_f32.to_radians(), 1.0, 0.1, 100.0);
        (view, proj)
    }

    #[test]
    fn viewport_centre_hits_origin() {
        let (view, proj) = looking_down();
        let viewport = UVec2::new(400, 400);
        let hit = to_world_xy_coordinates(
            Vec2::new(200.0, 200.0),
            viewport,
            &view,
            &proj,
            0.0,
        );
        assert!(hit.abs_diff_eq(Vec3::ZERO, 1e-3));
    }

    #[test]
    fn near_depth_lies_on_near_plane() {
        let (view, proj) = looking_down();
        let p = to_world_coordinates(
            Vec2::new(200.0, 200.0),
            UVec2::new(400, 400),
            &view,
            &proj,
            0.0,
        );
        assert!(p.abs_diff_eq(Vec3::new(0.0, 0.0, 9.9), 1e-3));
    }

    #[test]
    fn screen_y_grows_downward() {
        let (view, proj) = looking_down();
        let viewport = UVec2::new(400, 400);
        let top = to_world_xy_coordinates(
            Vec2::new(200.0, 0.0),
            viewport,
            &view,
            &proj,
            0.0,
        );
        let bottom = to_world_xy_coordinates(
            Vec2::new(200.0, 400.0),
            viewport,
            &view,
            &proj,
            0.0,
        );
        assert!(top.y > 0.0);
        assert!(bottom.y < 0.0);
    }

    #[test]
    fn screen_round_trip_on_plane() {
        let view = Mat4::look_at_rh(
            Vec3::new(3.0, -12.0, 9.0),
            Vec3::new(1.0, 1.0, 0.0),
            Vec3::Z,
        );
        let proj =
            Mat4::perspective_rh_gl(50.0_f32.to_radians(), 1.5, 0.5, 200.0);
        let viewport = UVec2::new(900, 600);
        let transformation = proj * view;

        for p in [
            Vec3::new(1.0, 1.0, 2.0),
            Vec3::new(-2.5, 4.0, 2.0),
            Vec3::new(3.0, -1.0, 2.0),
        ] {
            let ndc = to_screen_coordinates(p, &transformation);
            let screen = ndc_to_viewport(ndc, viewport);
            let back =
                to_world_xy_coordinates(screen, viewport, &view, &proj, p.z);
            assert!(back.abs_diff_eq(p, 1e-3), "{back} vs {p}");
        }
    }

    #[test]
    fn horizontal_view_still_intersects() {
        let view = Mat4::look_at_rh(
            Vec3::new(0.0, -10.0, 1.0),
            Vec3::new(0.0, 0.0, 1.0),
            Vec3::Z,
        );
        let proj =
            Mat4::perspective_rh_gl(45.0_f32.to_radians(), 1.0, 0.1, 100.0);
        let hit = to_world_xy_coordinates(
            Vec2::new(50.0, 50.0),
            UVec2::new(100, 100),
            &view,
            &proj,
            0.0,
        );
        assert!(hit.is_finite());
        assert_eq!(hit.z, 0.0);
    }

    #[test]
    fn batch_conversion_preserves_order() {
        let (view, proj) = looking_down();
        let viewport = UVec2::new(400, 400);
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(200.0, 200.0),
            Vec2::new(400.0, 100.0),
        ];
        let all =
            to_world_xy_coordinates_all(&points, viewport, &view, &proj, 0.0);
        assert_eq!(all.len(), points.len());
        for (screen, world) in points.iter().zip(&all) {
            let single =
                to_world_xy_coordinates(*screen, viewport, &view, &proj, 0.0);
            assert_eq!(single, *world);
        }

        let depths =
            to_world_coordinates_all(&points, viewport, &view, &proj, 0.5);
        assert_eq!(depths.len(), points.len());
        assert!(to_world_coordinates_all(&[], viewport, &view, &proj, 0.5)
            .is_empty());
    }

    #[test]
    fn normal_is_unnormalized_cross() {
        let n = calculate_normal(
            Vec3::ZERO,
            Vec3::new(2.0, 0.0, 0.0),
            Vec3::new(0.0, 3.0, 0.0),
        );
        assert_eq!(n, Vec3::new(0.0, 0.0, 6.0));
    }
}
