use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::input::KeyAction;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
/// Configurable keyboard bindings mapping actions to key codes.
pub struct KeybindingOptions {
    /// Maps action → key string (e.g. `ResetCamera` → `"KeyR"`).
    pub bindings: HashMap<KeyAction, String>,
    /// Reverse lookup cache (key string → action). Rebuilt on load.
    #[serde(skip)]
    key_to_action: HashMap<String, KeyAction>,
}

impl Default for KeybindingOptions {
    fn default() -> Self {
        Self::from_bindings(HashMap::from([
            (KeyAction::ResetCamera, "KeyR".into()),
            (KeyAction::SwitchProjection, "KeyP".into()),
            (KeyAction::ToggleRectZoom, "KeyZ".into()),
            (KeyAction::ToggleRectSelection, "KeyS".into()),
        ]))
    }
}

impl PartialEq for KeybindingOptions {
    fn eq(&self, other: &Self) -> bool {
        self.bindings == other.bindings
    }
}

impl KeybindingOptions {
    /// Bindings from an action → key map.
    #[must_use]
    pub fn from_bindings(bindings: HashMap<KeyAction, String>) -> Self {
        let mut opts = Self {
            bindings,
            key_to_action: HashMap::new(),
        };
        opts.rebuild_reverse_map();
        opts
    }

    /// Bind `action` to `key`, replacing its previous key.
    pub fn bind(&mut self, action: KeyAction, key: impl Into<String>) {
        let _ = self.bindings.insert(action, key.into());
        self.rebuild_reverse_map();
    }

    /// Rebuild the reverse lookup map (key string → action).
    pub fn rebuild_reverse_map(&mut self) {
        self.key_to_action.clear();
        for (action, key) in &self.bindings {
            let _ = self.key_to_action.insert(key.clone(), *action);
        }
    }

    /// Look up the action for a key string.
    #[must_use]
    pub fn lookup(&self, key: &str) -> Option<KeyAction> {
        self.key_to_action.get(key).copied()
    }
}
