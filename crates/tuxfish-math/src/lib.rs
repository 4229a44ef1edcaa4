// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! tuxfish-math: the affine/projective kernel behind the tuxfish renderer.
//!
//! Vectors are row vectors and matrices are stored row-major
//! (`m[row][col]`): rows 0..=2 hold the right/up/forward basis and row 3
//! holds the translation. Composition reads left to right, `a * b` applies
//! `a` first. Every operation is plain `f32` arithmetic with no error
//! reporting; see the crate README for the degenerate-input policy.
#![forbid(unsafe_code)]

pub mod scalar;

mod mat4;
mod prng;
mod vec3;

pub use mat4::Mat4;
pub use prng::{Prng, DEFAULT_SEED, MAX_REJECTIONS};
pub use scalar::{clamp, deg_to_rad, quantize, rad_to_deg};
pub use vec3::Vec3;
