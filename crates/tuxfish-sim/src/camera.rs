// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Orbit camera around the boat, lens parameters and the viewport projection.

use tuxfish_math::scalar::FRAC_PI_2;
use tuxfish_math::{clamp, Mat4, Vec3};

use crate::constants::{FAR_DISTANCE, FOV_Y_DEGREES, NEAR_DISTANCE};
use crate::SimError;

/// Lowest orbit elevation (radians about X).
pub const MIN_ELEVATION: f32 = 0.5;
/// Highest orbit elevation.
pub const MAX_ELEVATION: f32 = 1.5;
/// Closest zoom (zoom is a negative distance along the view axis).
pub const MIN_ZOOM_DISTANCE: f32 = -0.73;
/// Farthest zoom.
pub const MAX_ZOOM_DISTANCE: f32 = -5.0;
/// Fraction of the current zoom applied per wheel notch.
pub const ZOOM_STEP: f32 = 0.12;
/// Default radians of orbit per pixel of drag.
pub const DEFAULT_SENSITIVITY: f32 = 0.003;

/// Camera that orbits the boat at a fixed pivot height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    azimuth: f32,
    elevation: f32,
    zoom: f32,
    sensitivity: f32,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            azimuth: FRAC_PI_2,
            elevation: 1.3,
            zoom: -3.3,
            sensitivity: DEFAULT_SENSITIVITY,
        }
    }
}

impl OrbitCamera {
    /// Default pose with a custom drag sensitivity.
    pub fn with_sensitivity(sensitivity: f32) -> Result<Self, SimError> {
        if !(sensitivity.is_finite() && sensitivity > 0.0) {
            return Err(SimError::InvalidSensitivity(sensitivity));
        }
        Ok(Self {
            sensitivity,
            ..Self::default()
        })
    }

    /// Rotation about world Z (radians).
    pub fn azimuth(&self) -> f32 {
        self.azimuth
    }

    /// Rotation about the camera X axis, within `[MIN_ELEVATION, MAX_ELEVATION]`.
    pub fn elevation(&self) -> f32 {
        self.elevation
    }

    /// Signed distance along the view axis, within `[-5, -0.73]`.
    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    /// Radians per pixel of drag.
    pub fn sensitivity(&self) -> f32 {
        self.sensitivity
    }

    /// Applies a pointer drag delta (pixels, `last - current`).
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.azimuth += dx * self.sensitivity;
        self.elevation = clamp(
            self.elevation + dy * self.sensitivity,
            MIN_ELEVATION,
            MAX_ELEVATION,
        );
    }

    /// Applies one wheel notch: negative `y` zooms out, anything else zooms in.
    pub fn wheel(&mut self, y: i32) {
        if y < 0 {
            self.zoom += ZOOM_STEP * self.zoom;
        } else {
            self.zoom -= ZOOM_STEP * self.zoom;
        }
        self.zoom = clamp(self.zoom, MAX_ZOOM_DISTANCE, MIN_ZOOM_DISTANCE);
    }

    /// Builds the view matrix: pivot offset and zoom, then elevation about X,
    /// then azimuth about Z.
    pub fn view(&self) -> Mat4 {
        let mut view = Mat4::identity();
        view.set_position(Vec3::new(0.0, -0.13, self.zoom));
        view.rotate(self.elevation, Vec3::UNIT_X);
        view.rotate(self.azimuth, Vec3::UNIT_Z);
        view
    }
}

/// Perspective lens parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lens {
    /// Full vertical field of view (degrees).
    pub fov_y_degrees: f32,
    /// Near clip distance.
    pub near: f32,
    /// Far clip distance.
    pub far: f32,
}

impl Default for Lens {
    fn default() -> Self {
        Self {
            fov_y_degrees: FOV_Y_DEGREES,
            near: NEAR_DISTANCE,
            far: FAR_DISTANCE,
        }
    }
}

impl Lens {
    /// Rejects lenses that would make [`Mat4::frustum`] a silent no-op.
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.fov_y_degrees > 0.0 && self.fov_y_degrees < 180.0) {
            return Err(SimError::InvalidLens(format!(
                "fov must lie in (0, 180) degrees, got {}",
                self.fov_y_degrees
            )));
        }
        if !(self.near > 0.0 && self.far > self.near && self.far.is_finite()) {
            return Err(SimError::InvalidLens(format!(
                "need 0 < near < far, got near={} far={}",
                self.near, self.far
            )));
        }
        Ok(())
    }
}

/// Render surface size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    width: u32,
    height: u32,
}

impl Viewport {
    /// A non-empty viewport.
    pub fn new(width: u32, height: u32) -> Result<Self, SimError> {
        if width == 0 || height == 0 {
            return Err(SimError::EmptyViewport { width, height });
        }
        Ok(Self { width, height })
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Width over height.
    #[allow(clippy::cast_precision_loss)]
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height as f32
    }

    /// Identity followed by the lens perspective at this aspect ratio.
    pub fn projection(&self, lens: &Lens) -> Mat4 {
        let mut projection = Mat4::identity();
        projection.perspective(lens.fov_y_degrees, self.aspect(), lens.near, lens.far);
        projection
    }
}
