//! Input handling: platform-agnostic pointer, wheel and key events consumed
//! by the camera's manipulator.

/// Platform-agnostic input events.
pub mod event;
/// Key-bindable camera actions.
pub mod keyboard;

pub use event::{InputEvent, Modifiers, MouseButton, MouseButtons};
pub use keyboard::KeyAction;
