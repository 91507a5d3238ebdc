use glam::Vec2;

use super::core::Camera;
use crate::input::{InputEvent, KeyAction};
use crate::manipulator::{
    self, CursorShape, Gesture, ManipulatorKind, PickRequest,
};

impl Camera {
    /// Feed one input event through the manipulator.
    ///
    /// Returns a picking request when a click or rectangle selection
    /// completes; the host runs picking on that region.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<PickRequest> {
        match event {
            InputEvent::PointerPressed {
                x,
                y,
                buttons,
                modifiers,
            } => {
                self.manipulator.pointer_mut().press(
                    Vec2::new(*x, *y),
                    *buttons,
                    *modifiers,
                );
                None
            }
            InputEvent::PointerMoved { x, y, buttons, .. } => {
                let gesture = self
                    .manipulator
                    .pointer_mut()
                    .motion(Vec2::new(*x, *y), *buttons);
                if let Some(gesture) = gesture {
                    self.manipulate(gesture);
                }
                None
            }
            InputEvent::PointerReleased { x, y, .. } => {
                let response =
                    self.manipulator.pointer_mut().release(Vec2::new(*x, *y));
                if let Some(gesture) = response.gesture {
                    self.manipulate(gesture);
                }
                response.pick
            }
            InputEvent::Wheel { delta } => {
                self.manipulate(Gesture::Zoom { delta: *delta });
                None
            }
            InputEvent::Key { key } => {
                let _ = self.handle_key(key);
                None
            }
        }
    }

    /// Run the action bound to `key`, if any. A fixed manipulator ignores
    /// every key.
    pub fn handle_key(&mut self, key: &str) -> Option<KeyAction> {
        if self.manipulator.kind() == ManipulatorKind::Fixed {
            return None;
        }

        let action = self.manipulator.key_action(key)?;
        log::debug!("key {key} -> {action:?}");
        match action {
            KeyAction::ResetCamera => self.reset(),
            KeyAction::SwitchProjection => self.switch_projection(),
            KeyAction::ToggleRectZoom => {
                let armed = self.manipulator.is_rect_zoom_mode();
                self.manipulator.set_rect_zoom_mode(!armed);
            }
            KeyAction::ToggleRectSelection => {
                let armed = self.manipulator.is_rect_selection_mode();
                self.manipulator.set_rect_selection_mode(!armed);
            }
        }
        Some(action)
    }

    /// Apply a gesture directly, bypassing pointer tracking.
    pub fn manipulate(&mut self, gesture: Gesture) {
        manipulator::apply(self, gesture);
    }

    /// Cursor the host should show for the manipulator's current mode.
    #[must_use]
    pub fn cursor_shape(&self) -> CursorShape {
        self.manipulator.cursor_shape()
    }
}
