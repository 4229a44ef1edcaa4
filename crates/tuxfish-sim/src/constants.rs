// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! World, projection and gameplay tuning constants.

/// Far clip distance; also the radius of the sky dome.
pub const FAR_DISTANCE: f32 = 16.0;

/// Near clip distance.
pub const NEAR_DISTANCE: f32 = 0.01;

/// Full vertical field of view in degrees.
pub const FOV_Y_DEGREES: f32 = 30.0;

/// Number of catchable species (fish models 7..=59).
pub const SPECIES_COUNT: usize = 53;

/// Number of jumping shoals around the boat.
pub const SHOAL_COUNT: usize = 3;

/// Index of a registered model in the renderer's model table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ModelId(pub u32);

impl ModelId {
    /// Sky dome (fullbright).
    pub const SKY: Self = Self(0);
    /// Water plane (fullbright, z-scaled by the wave offset).
    pub const WATER: Self = Self(1);
    /// Rowing boat.
    pub const BOAT: Self = Self(2);
    /// Tux, the angler.
    pub const TUX: Self = Self(3);
    /// Fishing rod.
    pub const ROD: Self = Self(4);
    /// Float (bobber).
    pub const FLOAT: Self = Self(5);
    /// Splash ring under a jumping fish.
    pub const SPLASH: Self = Self(6);
    /// First fish model.
    pub const FIRST_FISH: Self = Self(7);
    /// Last fish model (the rare one).
    pub const LAST_FISH: Self = Self(59);
}

/// Rod yaw speed while a turn key is held (rad/s).
pub const ROD_TURN_RATE: f32 = 1.6;
/// Rod pitch gain while Space is held (rad/s).
pub const CAST_PITCH_RATE: f32 = 1.5;
/// Rod pitch stops growing once it reaches this value.
pub const MAX_CAST_PITCH: f32 = 2.0;
/// Rod pitch decay after release (rad/s).
pub const ROD_RELAX_RATE: f32 = 9.0;
/// Rod pitch held while reeling a fish in.
pub const REEL_ROD_PITCH: f32 = 0.8;
/// Cast reach is `(pitch + CAST_REACH_OFFSET) * CAST_REACH_SCALE`.
pub const CAST_REACH_OFFSET: f32 = 0.23;
/// See [`CAST_REACH_OFFSET`].
pub const CAST_REACH_SCALE: f32 = 1.65;
/// Fixed reel speed along the cast heading (units/s).
pub const REEL_SPEED: f32 = 0.32;
/// Proportional reel speed towards the boat (fraction of distance per second).
pub const REEL_FRACTION: f32 = 0.3;
/// A hooked fish is landed once the float's squared length drops below this.
pub const LANDING_DISTANCE_SQ: f32 = 0.1;
/// Seconds the landed fish spins above the boat.
pub const TROPHY_SECS: f32 = 4.0;
/// Wild bite delay range after a cast (seconds).
pub const WILD_BITE_DELAY: (f32, f32) = (23.0, 180.0);
/// Vertical bob of everything riding on the boat, times the wave offset.
pub const BOAT_BOB: f32 = -0.026;
/// Wave offset angular frequency: `woff = sin(t * WAVE_FREQUENCY)`.
pub const WAVE_FREQUENCY: f32 = 0.42;
