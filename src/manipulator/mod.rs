//! Manipulators: translate pointer, wheel and key input into camera
//! operations and hold the range limits the camera clamps against.
//!
//! A [`Manipulator`] is owned by its [`Camera`](crate::camera::Camera). It
//! keeps no reference back to the camera; the camera passes itself in for
//! the duration of one gesture.

mod limits;
mod standard;
/// Pointer tracking and gesture recognition.
pub mod state;

use glam::{Vec2, Vec3};
pub use limits::{Range, RangeLimits};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use state::{PointerResponse, PointerState};

use crate::camera::Camera;
use crate::input::KeyAction;
use crate::options::KeybindingOptions;

/// Default wheel divisor: one notch on a typical mouse wheel.
pub const DEFAULT_ZOOM_SENSITIVITY: f32 = 120.0;

// ── Gesture payload types ────────────────────────────────────────────────

/// Axis-aligned screen rectangle in pixels (y down).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenRect {
    /// Left edge.
    pub left: f32,
    /// Top edge.
    pub top: f32,
    /// Horizontal extent (non-negative).
    pub width: f32,
    /// Vertical extent (non-negative).
    pub height: f32,
}

impl ScreenRect {
    /// Rectangle from its top-left corner and size.
    #[must_use]
    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Normalized rectangle spanned by two arbitrary corners.
    #[must_use]
    pub fn from_corners(a: Vec2, b: Vec2) -> Self {
        let min = a.min(b);
        let size = (a - b).abs();
        Self::new(min.x, min.y, size.x, size.y)
    }

    /// Right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    /// Centre point.
    #[must_use]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.left + self.width * 0.5, self.top + self.height * 0.5)
    }

    /// Both extents are zero (a click rather than a drag).
    #[must_use]
    pub fn is_point(&self) -> bool {
        self.width == 0.0 && self.height == 0.0
    }
}

/// A camera operation recognized from input, or issued programmatically
/// through [`Camera::manipulate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    /// Screen-plane pan by a pixel delta (left drag).
    Move {
        /// Cursor delta in pixels.
        delta: Vec2,
    },
    /// Vertical pan by a pixel delta (middle drag).
    Shift {
        /// Cursor delta in pixels.
        delta: Vec2,
    },
    /// Orbit around the lookpoint by a pixel delta (right drag).
    Rotate {
        /// Cursor delta in pixels.
        delta: Vec2,
    },
    /// Wheel zoom.
    Zoom {
        /// Signed wheel delta (one notch is typically 120).
        delta: f32,
    },
    /// Fit a screen rectangle to the viewport.
    ZoomRect(ScreenRect),
    /// Recentre the XY view on a world point.
    Focus(Vec3),
}

/// Screen region the host should run picking on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PickRequest {
    /// A click without pointer travel.
    Point(Vec2),
    /// A completed rectangle-selection drag.
    Rect(ScreenRect),
}

/// Cursor the host should display for the current manipulator state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorShape {
    /// Idle.
    Arrow,
    /// A drag is moving the camera.
    OpenHand,
    /// A rectangle zoom or selection is armed.
    Crosshair,
}

// ── Manipulator ──────────────────────────────────────────────────────────

/// Which navigation semantics a manipulator applies.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ManipulatorKind {
    /// Pan, orbit, zoom and rectangle fit.
    #[default]
    Standard,
    /// Locked viewport: every navigation operation is a no-op.
    Fixed,
}

/// Input state machine plus the range limits enforced on its camera.
#[derive(Debug, Clone)]
pub struct Manipulator {
    kind: ManipulatorKind,
    limits: RangeLimits,
    zoom_sensitivity: f32,
    pointer: PointerState,
    keybindings: KeybindingOptions,
}

impl Manipulator {
    /// Create a manipulator of the given kind with default key bindings.
    #[must_use]
    pub fn new(kind: ManipulatorKind, limits: RangeLimits) -> Self {
        Self {
            kind,
            limits,
            zoom_sensitivity: DEFAULT_ZOOM_SENSITIVITY,
            pointer: PointerState::new(),
            keybindings: KeybindingOptions::default(),
        }
    }

    /// Standard pan/orbit/zoom manipulator.
    #[must_use]
    pub fn standard(limits: RangeLimits) -> Self {
        Self::new(ManipulatorKind::Standard, limits)
    }

    /// Manipulator that ignores all navigation input.
    #[must_use]
    pub fn fixed(limits: RangeLimits) -> Self {
        Self::new(ManipulatorKind::Fixed, limits)
    }

    /// Replace the key bindings.
    #[must_use]
    pub fn with_keybindings(mut self, keybindings: KeybindingOptions) -> Self {
        self.keybindings = keybindings;
        self
    }

    /// Navigation semantics in use.
    #[must_use]
    pub fn kind(&self) -> ManipulatorKind {
        self.kind
    }

    /// Range limits the camera is clamped against.
    #[must_use]
    pub fn range_limits(&self) -> &RangeLimits {
        &self.limits
    }

    /// Replace the range limits. Takes effect on the camera's next update.
    pub fn set_range_limits(&mut self, limits: RangeLimits) {
        self.limits = limits;
    }

    /// Wheel delta per unit of zoom.
    #[must_use]
    pub fn zoom_sensitivity(&self) -> f32 {
        self.zoom_sensitivity
    }

    /// Set the wheel delta per unit of zoom.
    pub fn set_zoom_sensitivity(&mut self, sensitivity: f32) {
        self.zoom_sensitivity = sensitivity;
    }

    /// Key bindings consulted for [`InputEvent::Key`](crate::input::InputEvent::Key).
    #[must_use]
    pub fn keybindings(&self) -> &KeybindingOptions {
        &self.keybindings
    }

    /// Transient pointer state.
    #[must_use]
    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }

    pub(crate) fn pointer_mut(&mut self) -> &mut PointerState {
        &mut self.pointer
    }

    /// A drag gesture is moving the camera.
    #[must_use]
    pub fn is_drag_mode(&self) -> bool {
        self.pointer.is_drag_mode()
    }

    /// Rectangle zoom is armed or in progress.
    #[must_use]
    pub fn is_rect_zoom_mode(&self) -> bool {
        self.pointer.is_rect_zoom_mode()
    }

    /// Rectangle selection is armed or in progress.
    #[must_use]
    pub fn is_rect_selection_mode(&self) -> bool {
        self.pointer.is_rect_selection_mode()
    }

    /// Arm rectangle zoom for the next left press.
    pub fn set_rect_zoom_mode(&mut self, enabled: bool) {
        self.pointer.set_rect_zoom_mode(enabled);
    }

    /// Arm rectangle selection for the next left press.
    pub fn set_rect_selection_mode(&mut self, enabled: bool) {
        self.pointer.set_rect_selection_mode(enabled);
    }

    /// Cursor matching the current mode.
    #[must_use]
    pub fn cursor_shape(&self) -> CursorShape {
        if self.is_drag_mode() {
            CursorShape::OpenHand
        } else if self.is_rect_selection_mode() || self.is_rect_zoom_mode() {
            CursorShape::Crosshair
        } else {
            CursorShape::Arrow
        }
    }

    /// Action bound to `key`, if any.
    #[must_use]
    pub fn key_action(&self, key: &str) -> Option<KeyAction> {
        self.keybindings.lookup(key)
    }
}

/// Apply `gesture` to `camera` using the semantics of the camera's
/// manipulator.
pub(crate) fn apply(camera: &mut Camera, gesture: Gesture) {
    match camera.manipulator().kind() {
        ManipulatorKind::Standard => standard::apply(camera, gesture),
        ManipulatorKind::Fixed => {
            log::trace!("fixed manipulator ignored {gesture:?}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_from_any_corner_order() {
        let a = ScreenRect::from_corners(
            Vec2::new(300.0, 100.0),
            Vec2::new(100.0, 250.0),
        );
        assert_eq!(a, ScreenRect::new(100.0, 100.0, 200.0, 150.0));
        assert_eq!(a.right(), 300.0);
        assert_eq!(a.bottom(), 250.0);
        assert_eq!(a.center(), Vec2::new(200.0, 175.0));
    }

    #[test]
    fn cursor_follows_mode() {
        let mut manipulator = Manipulator::standard(RangeLimits::UNLIMITED);
        assert_eq!(manipulator.cursor_shape(), CursorShape::Arrow);
        manipulator.set_rect_zoom_mode(true);
        assert_eq!(manipulator.cursor_shape(), CursorShape::Crosshair);
        manipulator.set_rect_zoom_mode(false);
        manipulator.set_rect_selection_mode(true);
        assert_eq!(manipulator.cursor_shape(), CursorShape::Crosshair);
    }

    #[test]
    fn default_key_bindings() {
        let manipulator = Manipulator::fixed(RangeLimits::UNLIMITED);
        assert_eq!(manipulator.key_action("KeyR"), Some(KeyAction::ResetCamera));
        assert_eq!(
            manipulator.key_action("KeyP"),
            Some(KeyAction::SwitchProjection)
        );
        assert_eq!(manipulator.key_action("KeyQ"), None);
        assert_eq!(manipulator.zoom_sensitivity(), DEFAULT_ZOOM_SENSITIVITY);
    }
}
