//! Pointer state machine.
//!
//! Tracks cursor position, the press anchor and the drag / rect-zoom /
//! rect-select flags, and turns raw pointer events into [`Gesture`]s. It
//! never touches the camera; the caller decides what a gesture means for
//! the active manipulator variant.

use glam::Vec2;

use super::{Gesture, PickRequest, ScreenRect};
use crate::input::{Modifiers, MouseButtons};

/// What a single pointer event produced.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerResponse {
    /// Camera gesture to apply, if any.
    pub gesture: Option<Gesture>,
    /// Picking request for the host, if any.
    pub pick: Option<PickRequest>,
}

/// Transient pointer tracking owned by a manipulator.
#[derive(Debug, Clone, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct PointerState {
    current: Vec2,
    pressed: Vec2,
    is_drag_mode: bool,
    is_rect_zoom_mode: bool,
    is_rect_selection_mode: bool,
}

impl PointerState {
    /// Fresh state: idle, cursor at the origin.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Last cursor position seen.
    #[must_use]
    pub fn current(&self) -> Vec2 {
        self.current
    }

    /// Cursor position at the last press.
    #[must_use]
    pub fn pressed(&self) -> Vec2 {
        self.pressed
    }

    /// A drag gesture has moved the camera since the last press.
    #[must_use]
    pub fn is_drag_mode(&self) -> bool {
        self.is_drag_mode
    }

    /// Rectangle zoom is armed or in progress.
    #[must_use]
    pub fn is_rect_zoom_mode(&self) -> bool {
        self.is_rect_zoom_mode
    }

    /// Rectangle selection is armed or in progress.
    #[must_use]
    pub fn is_rect_selection_mode(&self) -> bool {
        self.is_rect_selection_mode
    }

    /// Arm (or disarm) rectangle zoom for the next left press.
    pub fn set_rect_zoom_mode(&mut self, enabled: bool) {
        self.is_rect_zoom_mode = enabled;
    }

    /// Arm (or disarm) rectangle selection for the next left press.
    pub fn set_rect_selection_mode(&mut self, enabled: bool) {
        self.is_rect_selection_mode = enabled;
    }

    /// Rectangle spanned by the press anchor and the current cursor.
    #[must_use]
    pub fn drag_rect(&self) -> ScreenRect {
        ScreenRect::from_corners(self.pressed, self.current)
    }

    /// Button went down. Rect modes only engage for a lone left button.
    pub fn press(
        &mut self,
        position: Vec2,
        buttons: MouseButtons,
        modifiers: Modifiers,
    ) {
        self.pressed = position;
        self.current = position;

        let left_only = buttons == MouseButtons::LEFT;
        self.is_rect_zoom_mode =
            (modifiers.is_control_only() || self.is_rect_zoom_mode)
                && left_only;
        self.is_rect_selection_mode =
            (modifiers.is_shift_only() || self.is_rect_selection_mode)
                && left_only;

        log::trace!(
            "pointer press at {position}: rect_zoom={} rect_select={}",
            self.is_rect_zoom_mode,
            self.is_rect_selection_mode
        );
    }

    /// Cursor moved. Outside rect modes a lone held button becomes a
    /// move (left), rotate (right) or shift (middle) gesture.
    pub fn motion(
        &mut self,
        position: Vec2,
        buttons: MouseButtons,
    ) -> Option<Gesture> {
        let delta = position - self.current;
        self.current = position;

        if self.is_rect_selection_mode || self.is_rect_zoom_mode {
            return None;
        }

        let gesture = if buttons == MouseButtons::LEFT {
            Gesture::Move { delta }
        } else if buttons == MouseButtons::RIGHT {
            Gesture::Rotate { delta }
        } else if buttons == MouseButtons::MIDDLE {
            Gesture::Shift { delta }
        } else {
            return None;
        };

        self.is_drag_mode = true;
        Some(gesture)
    }

    /// Button went up. Every flag returns to idle regardless of the prior
    /// state.
    pub fn release(&mut self, position: Vec2) -> PointerResponse {
        self.current = position;
        let rect = self.drag_rect();

        let gesture = (self.is_rect_zoom_mode && !rect.is_point())
            .then_some(Gesture::ZoomRect(rect));

        let pick = if self.is_rect_selection_mode {
            Some(PickRequest::Rect(rect))
        } else if !self.is_rect_zoom_mode && self.pressed == self.current {
            Some(PickRequest::Point(self.current))
        } else {
            None
        };

        self.is_drag_mode = false;
        self.is_rect_zoom_mode = false;
        self.is_rect_selection_mode = false;

        PointerResponse { gesture, pick }
    }
}
