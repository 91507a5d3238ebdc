use serde::{Deserialize, Serialize};

/// Camera actions that can be bound to keys.
///
/// Serde serializes as `snake_case` strings so TOML presets stay readable:
/// ```toml
/// [keybindings.bindings]
/// reset_camera = "KeyR"
/// switch_projection = "KeyP"
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    schemars::JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum KeyAction {
    /// Restore the camera's initial parameters.
    ResetCamera,
    /// Advance to the next configured projection.
    SwitchProjection,
    /// Arm rectangle zoom for the next left-button drag.
    ToggleRectZoom,
    /// Arm rectangle selection for the next left-button drag.
    ToggleRectSelection,
}
