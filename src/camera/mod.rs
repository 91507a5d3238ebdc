//! Camera system for 3D scene navigation.
//!
//! Provides a yaw/pitch camera with switchable orthographic and perspective
//! projections, projection-scaled panning, orbit around the lookpoint,
//! screen ↔ world conversion and manipulator-driven input handling.

/// Core camera state, update pipeline, getters and setters.
pub mod core;
/// Pointer, wheel and key event handling through the manipulator.
pub mod input;
/// Movement, rotation, zoom and focus primitives.
pub mod navigation;
/// Orthographic and perspective projections.
pub mod projection;
/// GPU uniform snapshot of the camera.
pub mod uniform;

pub use self::core::{Camera, CameraParameters};
pub use navigation::MovementDirection;
pub use projection::{
    OrthographicProjection, PerspectiveProjection, Projection,
};
pub use uniform::CameraUniform;
