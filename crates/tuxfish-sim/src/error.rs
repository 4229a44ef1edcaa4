// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use thiserror::Error;

/// Configuration errors raised while building a [`crate::Game`] or its parts.
///
/// Frame updates never fail; only construction validates.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// Width or height of zero.
    #[error("viewport must be non-empty, got {width}x{height}")]
    EmptyViewport {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
    /// Pointer sensitivity that is zero, negative, or not finite.
    #[error("camera sensitivity must be finite and positive, got {0}")]
    InvalidSensitivity(f32),
    /// Field of view or clip planes that cannot form a frustum.
    #[error("invalid lens: {0}")]
    InvalidLens(String),
    /// Water mesh data or grid parameters that cannot form a surface.
    #[error("invalid water surface: {0}")]
    InvalidWater(String),
}
