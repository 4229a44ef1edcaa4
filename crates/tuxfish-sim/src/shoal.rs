// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shoals: fish that periodically leap out of the water around the boat.
//!
//! Each shoal carries a jump timer `next_jump`. With `d = next_jump - t` the
//! fish is submerged while `d >= 0`, then rises, hangs, falls with a fading
//! splash, and finally respawns somewhere else once `d < -11`. The exact
//! boundaries `d = -2.5` and `d <= -5.5` draw nothing.

use tuxfish_math::scalar::PI;
use tuxfish_math::Prng;

use crate::fish::FishId;

/// Inner radius of the ring shoals spawn on.
pub const SPAWN_RADIUS_MIN: f32 = 2.3;
/// Outer radius of the ring shoals spawn on.
pub const SPAWN_RADIUS_MAX: f32 = 3.6;
/// Delay range before a freshly spawned shoal jumps (seconds).
pub const JUMP_DELAY: (f32, f32) = (6.5, 16.0);
/// Squared XY distance within which the float can hook a shoal's fish.
pub const HOOK_RADIUS_SQ: f32 = 0.3;
/// A shoal can be hooked only once `d` has dropped below this.
pub const HOOK_AFTER: f32 = -4.5;
/// Shoals respawn once `d` drops below this.
pub const RESPAWN_AFTER: f32 = -11.0;
/// Spin speed range per axis while airborne (rad/s).
pub const SPIN_RATE: (f32, f32) = (0.1, 0.6);

/// Where a shoal's fish is in its leap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum JumpPhase {
    /// Below the surface; nothing is drawn.
    Submerged,
    /// Leaving the water, `-1.5 <= d < 0`.
    Rising {
        /// Fish height.
        z: f32,
    },
    /// At the apex, `-2.5 < d < -1.5`.
    Hanging,
    /// Dropping back in, `-5.5 < d < -2.5`.
    Falling {
        /// Fish height.
        z: f32,
        /// Opacity of the splash ring, `d + 4.5`.
        splash_opacity: f32,
    },
}

impl JumpPhase {
    /// Apex height.
    pub const APEX: f32 = 0.3;

    /// Phase for a timer value `d = next_jump - t`.
    pub fn at(d: f32) -> Self {
        if (-1.5..0.0).contains(&d) {
            Self::Rising {
                z: -0.03 + 0.33 * d.abs() / 1.5,
            }
        } else if d < -1.5 && d > -2.5 {
            Self::Hanging
        } else if d < -2.5 && d > -5.5 {
            Self::Falling {
                z: Self::APEX - 0.303 * (d + 2.5).abs() / 1.5,
                splash_opacity: d + 4.5,
            }
        } else {
            Self::Submerged
        }
    }

    /// True when the fish is above (or breaking) the surface.
    pub fn is_visible(self) -> bool {
        !matches!(self, Self::Submerged)
    }

    /// Fish height, or `None` while submerged.
    pub fn height(self) -> Option<f32> {
        match self {
            Self::Submerged => None,
            Self::Rising { z } | Self::Falling { z, .. } => Some(z),
            Self::Hanging => Some(Self::APEX),
        }
    }

    /// Splash opacity; `None` means fully opaque.
    pub fn splash_opacity(self) -> Option<f32> {
        match self {
            Self::Falling { splash_opacity, .. } => Some(splash_opacity),
            _ => None,
        }
    }
}

/// One jumping shoal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shoal {
    x: f32,
    y: f32,
    fish: FishId,
    next_jump: f32,
    spin: [f32; 3],
}

impl Shoal {
    /// Spawns a shoal at time `t`, drawing position, species and timer from
    /// `rng` in that order.
    pub fn spawn(rng: &mut Prng, t: f32) -> Self {
        let (x, y, fish, next_jump) = Self::draw(rng, t);
        Self {
            x,
            y,
            fish,
            next_jump,
            spin: [0.0; 3],
        }
    }

    /// Moves the shoal to a new spot on the spawn ring with a new species
    /// and jump timer. Spin angles carry over.
    pub fn respawn(&mut self, rng: &mut Prng, t: f32) {
        (self.x, self.y, self.fish, self.next_jump) = Self::draw(rng, t);
    }

    fn draw(rng: &mut Prng, t: f32) -> (f32, f32, FishId, f32) {
        let angle = rng.next_range(-PI, PI);
        let radius = rng.next_range(SPAWN_RADIUS_MIN, SPAWN_RADIUS_MAX);
        let fish = FishId::roll_between(rng, 7.0, 59.0);
        let next_jump = t + rng.next_range(JUMP_DELAY.0, JUMP_DELAY.1);
        (angle.sin() * radius, angle.cos() * radius, fish, next_jump)
    }

    /// World X.
    pub fn x(&self) -> f32 {
        self.x
    }

    /// World Y.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Species in this shoal.
    pub fn fish(&self) -> FishId {
        self.fish
    }

    /// Absolute time of the next leap.
    pub fn next_jump(&self) -> f32 {
        self.next_jump
    }

    /// Accumulated spin angles about X, Y and Z.
    pub fn spin(&self) -> [f32; 3] {
        self.spin
    }

    /// Timer relative to `t`; negative once the leap has started.
    pub fn countdown(&self, t: f32) -> f32 {
        self.next_jump - t
    }

    /// Leap phase at `t`.
    pub fn phase(&self, t: f32) -> JumpPhase {
        JumpPhase::at(self.countdown(t))
    }

    /// Squared XY distance from `(x, y)`.
    pub fn distance_sq_xy(&self, x: f32, y: f32) -> f32 {
        let dx = x - self.x;
        let dy = y - self.y;
        dx * dx + dy * dy
    }

    /// True when a float at `(x, y)` hooks this shoal at `t`.
    pub fn is_catchable(&self, x: f32, y: f32, t: f32) -> bool {
        self.distance_sq_xy(x, y) < HOOK_RADIUS_SQ && self.countdown(t) < HOOK_AFTER
    }

    /// True once the leap is long over.
    pub fn needs_respawn(&self, t: f32) -> bool {
        self.countdown(t) < RESPAWN_AFTER
    }

    /// Advances each spin axis by an independent random rate times `dt`.
    pub fn advance_spin(&mut self, rng: &mut Prng, dt: f32) {
        for angle in &mut self.spin {
            *angle += rng.next_range(SPIN_RATE.0, SPIN_RATE.1) * dt;
        }
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn phases_follow_the_countdown() {
        assert_eq!(JumpPhase::at(0.5), JumpPhase::Submerged);
        assert_eq!(JumpPhase::at(0.0), JumpPhase::Submerged);
        assert!(matches!(JumpPhase::at(-0.75), JumpPhase::Rising { .. }));
        assert_eq!(JumpPhase::at(-2.0), JumpPhase::Hanging);
        assert!(matches!(JumpPhase::at(-4.0), JumpPhase::Falling { .. }));
        assert_eq!(JumpPhase::at(-6.0), JumpPhase::Submerged);
    }

    #[test]
    fn rising_peaks_at_the_apex() {
        let z = JumpPhase::at(-1.5).height().unwrap_or(f32::NAN);
        assert!((z - JumpPhase::APEX).abs() < 1e-6);
        let start = JumpPhase::at(-1e-6).height().unwrap_or(f32::NAN);
        assert!((start + 0.03).abs() < 1e-4);
    }

    #[test]
    fn falling_fades_the_splash() {
        let JumpPhase::Falling { z, splash_opacity } = JumpPhase::at(-4.0) else {
            unreachable!("-4 is in the falling window");
        };
        assert!((z - (0.3 - 0.303)).abs() < 1e-6);
        assert!((splash_opacity - 0.5).abs() < 1e-6);
    }

    #[test]
    fn late_fall_dips_below_the_surface() {
        let JumpPhase::Falling { z, splash_opacity } = JumpPhase::at(-5.4) else {
            unreachable!("-5.4 is in the falling window");
        };
        assert!((z - (0.3 - 0.303 * 2.9 / 1.5)).abs() < 1e-5, "{z}");
        assert!(z < -0.28);
        assert!((splash_opacity + 0.9).abs() < 1e-5);
    }

    #[test]
    fn spawn_lands_on_the_ring_with_a_pending_jump() {
        let mut rng = Prng::from_seed(4242);
        for _ in 0..200 {
            let shoal = Shoal::spawn(&mut rng, 10.0);
            let r = shoal.x().hypot(shoal.y());
            assert!((SPAWN_RADIUS_MIN - 1e-4..=SPAWN_RADIUS_MAX + 1e-4).contains(&r));
            assert!((16.5..=26.0).contains(&shoal.next_jump()));
            assert!(!shoal.phase(10.0).is_visible());
        }
    }

    #[test]
    fn hooking_needs_proximity_and_a_finished_leap() {
        let mut rng = Prng::from_seed(7);
        let shoal = Shoal::spawn(&mut rng, 0.0);
        let (x, y) = (shoal.x(), shoal.y());
        let late = shoal.next_jump() + 5.0;
        assert!(shoal.is_catchable(x, y, late));
        assert!(!shoal.is_catchable(x, y, shoal.next_jump()));
        assert!(!shoal.is_catchable(x + 1.0, y, late));
        assert!(shoal.needs_respawn(shoal.next_jump() + 11.5));
    }

    #[test]
    fn spin_accumulates_and_survives_respawn() {
        let mut rng = Prng::from_seed(99);
        let mut shoal = Shoal::spawn(&mut rng, 0.0);
        shoal.advance_spin(&mut rng, 1.0);
        let spun = shoal.spin();
        assert!(spun.iter().all(|a| (0.1..=0.6).contains(a)));
        shoal.respawn(&mut rng, 30.0);
        assert_eq!(shoal.spin(), spun);
    }
}
