// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Scalar constants and helpers shared by the vector and matrix code.
//!
//! The constants are the exact float32 values the renderer was tuned
//! against; `PI` and friends equal the `core::f32::consts` values.

/// π as float32.
pub const PI: f32 = core::f32::consts::PI;

/// 2π as float32.
pub const TAU: f32 = core::f32::consts::TAU;

/// π/2 as float32.
pub const FRAC_PI_2: f32 = core::f32::consts::FRAC_PI_2;

/// Degrees per radian.
pub const RAD2DEG: f32 = 57.295_78;

/// Radians per degree.
pub const DEG2RAD: f32 = 0.017_453_292;

/// Largest magnitude used as a "far away" sentinel by callers.
pub const FLOAT_MAX: f32 = 9.223_372e18;

/// Converts degrees to radians with float32 precision.
pub fn deg_to_rad(value: f32) -> f32 {
    value * DEG2RAD
}

/// Converts radians to degrees with float32 precision.
pub fn rad_to_deg(value: f32) -> f32 {
    value * RAD2DEG
}

/// Clamps `value` to the inclusive `[min, max]` range.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    debug_assert!(min <= max, "invalid clamp range: {min} > {max}");
    value.max(min).min(max)
}

/// Quantises a float to the nearest integer, ties away from zero.
///
/// Adds `0.5` with the sign of `value` and truncates toward zero, so
/// `2.5 -> 3`, `-0.5 -> -1`, `1.49 -> 1`. Out-of-range inputs saturate.
#[allow(clippy::cast_possible_truncation)]
pub fn quantize(value: f32) -> i32 {
    let biased = if value < 0.0 { value - 0.5 } else { value + 0.5 };
    biased as i32
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn clamp_is_inclusive_on_both_ends() {
        assert_eq!(clamp(2.0, -1.0, 1.0), 1.0);
        assert_eq!(clamp(-2.0, -1.0, 1.0), -1.0);
        assert_eq!(clamp(0.25, -1.0, 1.0), 0.25);
        assert_eq!(clamp(-5.0, -5.0, -0.73), -5.0);
    }

    #[test]
    fn quantize_rounds_half_away_from_zero() {
        assert_eq!(quantize(2.5), 3);
        assert_eq!(quantize(-2.5), -3);
        assert_eq!(quantize(1.49), 1);
        assert_eq!(quantize(-0.51), -1);
        assert_eq!(quantize(-0.49), 0);
        assert_eq!(quantize(0.0), 0);
    }

    #[test]
    fn degree_constants_are_reciprocal() {
        assert!((RAD2DEG * DEG2RAD - 1.0).abs() < 1e-6);
        assert!((deg_to_rad(180.0) - PI).abs() < 1e-6);
    }
}
