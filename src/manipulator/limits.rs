use glam::Vec3;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single optional `[min, max]` clamp.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default, JsonSchema,
)]
#[serde(default)]
pub struct Range {
    /// Whether the clamp is applied at all.
    pub enabled: bool,
    /// Lower bound.
    pub min: f32,
    /// Upper bound.
    pub max: f32,
}

impl Range {
    /// A range that never clamps.
    pub const DISABLED: Self = Self {
        enabled: false,
        min: 0.0,
        max: 0.0,
    };

    /// An enabled range over `[min, max]`.
    #[must_use]
    pub const fn new(min: f32, max: f32) -> Self {
        Self {
            enabled: true,
            min,
            max,
        }
    }

    /// Clamp `value` into the range, or return it unchanged when disabled.
    ///
    /// The upper bound is applied first, so an inverted range resolves to
    /// `min`.
    #[must_use]
    pub fn clamp(&self, value: f32) -> f32 {
        if !self.enabled {
            return value;
        }
        let mut value = value;
        if value > self.max {
            value = self.max;
        }
        if value < self.min {
            value = self.min;
        }
        value
    }

    /// Whether `value` already lies inside the range (always true when
    /// disabled).
    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        !self.enabled || (self.min..=self.max).contains(&value)
    }
}

/// Per-field clamps enforced on the camera after every mutation.
#[derive(
    Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default, JsonSchema,
)]
#[serde(default)]
pub struct RangeLimits {
    /// Camera position x.
    pub x: Range,
    /// Camera position y.
    pub y: Range,
    /// Camera position z (also the near limit for perspective wheel zoom).
    pub z: Range,
    /// View-matrix zoom factor.
    pub zoom: Range,
    /// Yaw in degrees.
    pub yaw: Range,
    /// Pitch in degrees.
    pub pitch: Range,
    /// Every component of the orthographic scale vector.
    pub scale: Range,
}

impl RangeLimits {
    /// No clamping on any field.
    pub const UNLIMITED: Self = Self {
        x: Range::DISABLED,
        y: Range::DISABLED,
        z: Range::DISABLED,
        zoom: Range::DISABLED,
        yaw: Range::DISABLED,
        pitch: Range::DISABLED,
        scale: Range::DISABLED,
    };

    /// Clamp each position component against its axis range.
    #[must_use]
    pub fn clamp_position(&self, position: Vec3) -> Vec3 {
        Vec3::new(
            self.x.clamp(position.x),
            self.y.clamp(position.y),
            self.z.clamp(position.z),
        )
    }

    /// Clamp each scale component against the shared scale range.
    #[must_use]
    pub fn clamp_scale(&self, scale: Vec3) -> Vec3 {
        Vec3::new(
            self.scale.clamp(scale.x),
            self.scale.clamp(scale.y),
            self.scale.clamp(scale.z),
        )
    }
}
