// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Saved game preferences (camera, render surface, RNG seed).

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;

/// Config key the game preferences are stored under.
pub const PREFS_KEY: &str = "game";

/// Highest multisample level a surface may request.
pub const MAX_MSAA: u8 = 16;

/// Saved preferences for a game session.
///
/// Every section falls back to its defaults when missing, so older or
/// hand-trimmed files still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GamePrefs {
    /// Orbit camera and projection.
    pub camera: CameraPrefs,
    /// Render surface.
    pub render: RenderPrefs,
    /// Fixed RNG seed; `None` seeds from the wall clock.
    pub seed: Option<i32>,
}

/// Orbit camera and projection parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraPrefs {
    /// Radians of orbit per pixel of pointer drag.
    pub sensitivity: f32,
    /// Full vertical field of view (degrees).
    pub fov_y_degrees: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
}

impl Default for CameraPrefs {
    fn default() -> Self {
        Self {
            sensitivity: 0.003,
            fov_y_degrees: 30.0,
            near: 0.01,
            far: 16.0,
        }
    }
}

/// Render surface parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderPrefs {
    /// Multisample level, `0..=16`; `0` disables MSAA.
    pub msaa: u8,
    /// Surface width in pixels.
    pub width: u32,
    /// Surface height in pixels.
    pub height: u32,
}

impl Default for RenderPrefs {
    fn default() -> Self {
        Self {
            msaa: MAX_MSAA,
            width: 1024,
            height: 768,
        }
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}

impl GamePrefs {
    /// Checks every field against its accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let cam = &self.camera;
        if !(cam.sensitivity.is_finite() && cam.sensitivity > 0.0) {
            return Err(invalid(
                "camera.sensitivity",
                format!("must be finite and positive, got {}", cam.sensitivity),
            ));
        }
        if !(cam.fov_y_degrees > 0.0 && cam.fov_y_degrees < 180.0) {
            return Err(invalid(
                "camera.fov_y_degrees",
                format!("must lie in (0, 180), got {}", cam.fov_y_degrees),
            ));
        }
        if !(cam.near > 0.0 && cam.far > cam.near && cam.far.is_finite()) {
            return Err(invalid(
                "camera.far",
                format!("need 0 < near < far, got near={} far={}", cam.near, cam.far),
            ));
        }
        if self.render.msaa > MAX_MSAA {
            return Err(invalid(
                "render.msaa",
                format!("must be 0..={MAX_MSAA}, got {}", self.render.msaa),
            ));
        }
        if self.render.width == 0 || self.render.height == 0 {
            return Err(invalid(
                "render.width",
                format!(
                    "surface must be non-empty, got {}x{}",
                    self.render.width, self.render.height
                ),
            ));
        }
        Ok(())
    }
}
