/// Platform-agnostic input events.
///
/// These are fed into [`Camera::handle_event`](crate::camera::Camera::handle_event),
/// which runs them through the camera's manipulator.
///
/// # Example
///
/// ```ignore
/// let pick = camera.handle_event(&InputEvent::PointerMoved {
///     x: 100.0,
///     y: 200.0,
///     buttons: MouseButtons::LEFT,
///     modifiers: Modifiers::NONE,
/// });
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// A mouse button went down.
    PointerPressed {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels (down is positive).
        y: f32,
        /// Buttons held after the press.
        buttons: MouseButtons,
        /// Modifier keys held during the press.
        modifiers: Modifiers,
    },
    /// The cursor moved to an absolute screen position.
    PointerMoved {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels (down is positive).
        y: f32,
        /// Buttons currently held.
        buttons: MouseButtons,
        /// Modifier keys currently held.
        modifiers: Modifiers,
    },
    /// A mouse button went up.
    PointerReleased {
        /// Horizontal position in physical pixels.
        x: f32,
        /// Vertical position in physical pixels (down is positive).
        y: f32,
        /// Buttons still held after the release.
        buttons: MouseButtons,
        /// Modifier keys held during the release.
        modifiers: Modifiers,
    },
    /// Scroll wheel. One notch is typically 120 units.
    Wheel {
        /// Signed scroll amount (positive = away from the user).
        delta: f32,
    },
    /// A key was pressed.
    Key {
        /// Key string in `winit::keyboard::KeyCode` debug format
        /// (`"KeyR"`, `"Escape"`, ...).
        key: String,
    },
}

/// Set of mouse buttons held at the time of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[allow(clippy::struct_excessive_bools)]
pub struct MouseButtons {
    /// Primary (left) mouse button.
    pub left: bool,
    /// Secondary (right) mouse button.
    pub right: bool,
    /// Middle mouse button (wheel click).
    pub middle: bool,
}

impl MouseButtons {
    /// No button held.
    pub const NONE: Self = Self {
        left: false,
        right: false,
        middle: false,
    };
    /// Only the left button held.
    pub const LEFT: Self = Self {
        left: true,
        right: false,
        middle: false,
    };
    /// Only the right button held.
    pub const RIGHT: Self = Self {
        left: false,
        right: true,
        middle: false,
    };
    /// Only the middle button held.
    pub const MIDDLE: Self = Self {
        left: false,
        right: false,
        middle: true,
    };

    /// Record a single button changing state.
    pub fn set(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.left = pressed,
            MouseButton::Right => self.right = pressed,
            MouseButton::Middle => self.middle = pressed,
        }
    }
}

/// Platform-agnostic mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary (left) mouse button.
    Left,
    /// Secondary (right) mouse button.
    Right,
    /// Middle mouse button (wheel click).
    Middle,
}

/// Modifier keys held at the time of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
    /// Shift key.
    pub shift: bool,
    /// Control key.
    pub control: bool,
    /// Alt / option key.
    pub alt: bool,
}

impl Modifiers {
    /// No modifier held.
    pub const NONE: Self = Self {
        shift: false,
        control: false,
        alt: false,
    };
    /// Only shift held.
    pub const SHIFT: Self = Self {
        shift: true,
        control: false,
        alt: false,
    };
    /// Only control held.
    pub const CONTROL: Self = Self {
        shift: false,
        control: true,
        alt: false,
    };

    /// Shift is the only modifier held.
    #[must_use]
    pub fn is_shift_only(self) -> bool {
        self == Self::SHIFT
    }

    /// Control is the only modifier held.
    #[must_use]
    pub fn is_control_only(self) -> bool {
        self == Self::CONTROL
    }
}

#[cfg(feature = "winit")]
impl From<winit::event::MouseButton> for MouseButton {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Right => Self::Right,
            winit::event::MouseButton::Middle => Self::Middle,
            _ => Self::Left,
        }
    }
}

#[cfg(feature = "winit")]
impl From<winit::keyboard::ModifiersState> for Modifiers {
    fn from(state: winit::keyboard::ModifiersState) -> Self {
        Self {
            shift: state.shift_key(),
            control: state.control_key(),
            alt: state.alt_key(),
        }
    }
}
