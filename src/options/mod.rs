//! Camera, projection, range-limit and manipulator options with TOML preset
//! support.
//!
//! Options serialize to/from TOML so a host can ship navigation presets
//! (e.g. a locked top-down map view or a free perspective inspector) and
//! build a ready-to-use [`Camera`] from them.

mod camera;
mod keybindings;
mod manipulator;
mod projection;

use std::path::Path;

pub use camera::CameraOptions;
pub use keybindings::KeybindingOptions;
pub use manipulator::ManipulatorOptions;
pub use projection::ProjectionOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::camera::Camera;
use crate::error::NavError;
use crate::manipulator::{Manipulator, RangeLimits};

/// Top-level options container. All sections use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[limits]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[serde(default)]
pub struct Options {
    /// Initial camera placement and sensitivities.
    pub camera: CameraOptions,
    /// Projections the camera cycles through, first one active.
    pub projections: Vec<ProjectionOptions>,
    /// Range limits enforced after every camera mutation.
    pub limits: RangeLimits,
    /// Manipulator selection.
    pub manipulator: ManipulatorOptions,
    /// Keyboard binding options.
    #[schemars(skip)]
    pub keybindings: KeybindingOptions,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            camera: CameraOptions::default(),
            projections: vec![
                ProjectionOptions::orthographic(),
                ProjectionOptions::perspective(),
            ],
            limits: RangeLimits::UNLIMITED,
            manipulator: ManipulatorOptions::default(),
            keybindings: KeybindingOptions::default(),
        }
    }
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// Parse options from a TOML string. Missing fields use defaults.
    pub fn from_toml_str(content: &str) -> Result<Self, NavError> {
        let mut opts: Self = toml::from_str(content)
            .map_err(|e| NavError::OptionsParse(e.to_string()))?;
        opts.keybindings.rebuild_reverse_map();
        Ok(opts)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    pub fn load(path: &Path) -> Result<Self, NavError> {
        let content = std::fs::read_to_string(path).map_err(NavError::Io)?;
        let opts = Self::from_toml_str(&content)?;
        log::debug!("loaded options from {}", path.display());
        Ok(opts)
    }

    /// Save options to a TOML file (pretty-printed).
    pub fn save(&self, path: &Path) -> Result<(), NavError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| NavError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(NavError::Io)?;
        }
        std::fs::write(path, content).map_err(NavError::Io)
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }

    /// Manipulator described by the `manipulator`, `limits` and
    /// `keybindings` sections.
    #[must_use]
    pub fn build_manipulator(&self) -> Manipulator {
        let mut manipulator = Manipulator::new(self.manipulator.kind, self.limits)
            .with_keybindings(self.keybindings.clone());
        manipulator.set_zoom_sensitivity(self.manipulator.zoom_sensitivity);
        manipulator
    }

    /// Camera with a 1×1 viewport; call
    /// [`Camera::set_viewport`] once the host knows its size.
    #[must_use]
    pub fn build_camera(&self) -> Camera {
        let projections = self
            .projections
            .iter()
            .map(|p| p.to_projection(1.0))
            .collect();
        Camera::new(
            self.camera.to_parameters(),
            projections,
            self.build_manipulator(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyAction;
    use crate::manipulator::{ManipulatorKind, Range};

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed = Options::from_toml_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let toml_str = r"
[limits.z]
enabled = true
min = 2.0
max = 50.0
";
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(opts.limits.z, Range::new(2.0, 50.0));
        // Everything else should be default
        assert!(!opts.limits.pitch.enabled);
        assert_eq!(opts.camera, CameraOptions::default());
        assert_eq!(opts.projections.len(), 2);
    }

    #[test]
    fn tagged_projection_list() {
        let toml_str = r#"
[[projections]]
kind = "perspective"
fov = 60.0

[[projections]]
kind = "orthographic"
x_range = [-5.0, 5.0]
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(
            opts.projections[0],
            ProjectionOptions::Perspective {
                fov: 60.0,
                near: 0.1,
                far: 1000.0,
            }
        );
        let camera = opts.build_camera();
        assert!(camera.is_projection_perspective());
        assert_eq!(camera.projections().len(), 2);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = Options::from_toml_str("[[projections]]\nkind = \"fisheye\"")
            .unwrap_err();
        assert!(matches!(err, NavError::OptionsParse(_)));
    }

    #[test]
    fn custom_keybinding_lookup_after_load() {
        let toml_str = r#"
[keybindings.bindings]
reset_camera = "Home"
"#;
        let opts = Options::from_toml_str(toml_str).unwrap();
        assert_eq!(
            opts.keybindings.lookup("Home"),
            Some(KeyAction::ResetCamera)
        );
        assert_eq!(opts.keybindings.lookup("KeyP"), None);
    }

    #[test]
    fn build_camera_applies_manipulator_section() {
        let mut opts = Options::default();
        opts.manipulator.kind = ManipulatorKind::Fixed;
        opts.manipulator.zoom_sensitivity = 240.0;
        opts.limits.pitch = Range::new(-60.0, -30.0);
        opts.camera.pitch = -80.0;

        let camera = opts.build_camera();
        assert_eq!(camera.manipulator().kind(), ManipulatorKind::Fixed);
        assert_eq!(camera.manipulator().zoom_sensitivity(), 240.0);
        assert_eq!(camera.pitch(), -60.0);
    }

    #[test]
    fn save_then_load_preset() {
        let dir = std::env::temp_dir()
            .join(format!("viso-nav-presets-{}", std::process::id()));
        let mut opts = Options::default();
        opts.camera.speed = 3.5;
        opts.save(&dir.join("inspect.toml")).unwrap();

        assert_eq!(Options::list_presets(&dir), vec!["inspect".to_owned()]);
        let loaded = Options::load(&dir.join("inspect.toml")).unwrap();
        assert_eq!(loaded.camera.speed, 3.5);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Options::load(Path::new("/nonexistent/preset.toml"))
            .unwrap_err();
        assert!(matches!(err, NavError::Io(_)));
    }

    #[test]
    fn schema_has_expected_properties() {
        let schema_value =
            serde_json::to_value(Options::json_schema()).unwrap();
        let props = schema_value["properties"].as_object().unwrap();

        assert!(props.contains_key("camera"));
        assert!(props.contains_key("projections"));
        assert!(props.contains_key("limits"));
        assert!(props.contains_key("manipulator"));
        assert!(!props.contains_key("keybindings"));

        let camera = &props["camera"]["properties"];
        assert!(camera.get("yaw").is_some());
        assert!(camera.get("up").is_none());
    }
}
