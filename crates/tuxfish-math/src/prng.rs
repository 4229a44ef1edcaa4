// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

/// Seed the generator starts from when none is supplied.
pub const DEFAULT_SEED: i32 = 74235;

/// Upper bound on rejection rounds in [`Prng::next_normal`] and
/// [`crate::Vec3::random_in_sphere`].
///
/// Reached only by degenerate seeds: zero is a fixed point, and seeds with
/// many trailing zero bits cycle through a handful of states.
pub const MAX_REJECTIONS: u32 = 1 << 16;

/// 2^-31 as written in the musicdsp float generator.
const INV_2_POW_31: f32 = 4.656_612_9e-10;

/// Multiplicative congruential float generator (`state *= 16807`).
///
/// * The state is a single `i32` and multiplication wraps, so sequences are
///   bit-for-bit reproducible for a given seed on every platform.
/// * Not cryptographically secure; it feeds gameplay and direction sampling.
/// * Owned by the caller. Share it across threads only behind external
///   synchronisation, since every draw advances the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prng {
    state: i32,
}

impl Default for Prng {
    fn default() -> Self {
        Self::from_seed(DEFAULT_SEED)
    }
}

impl Prng {
    /// Constructs a generator with the given seed.
    ///
    /// A seed of `0` is accepted but degenerate: every draw returns `0.0`.
    pub const fn from_seed(seed: i32) -> Self {
        Self { state: seed }
    }

    /// Replaces the current state with `seed`.
    pub fn seed(&mut self, seed: i32) {
        self.state = seed;
    }

    /// Returns the raw generator state.
    pub const fn state(&self) -> i32 {
        self.state
    }

    fn advance(&mut self) -> i32 {
        self.state = self.state.wrapping_mul(16807);
        self.state
    }

    /// Returns the next float in `[0, 1]`, masking off the sign bit.
    ///
    /// The upper bound is reachable only through float rounding of
    /// `0x7FFF_FFFF * 2^-31`.
    #[allow(clippy::cast_precision_loss)]
    pub fn next_f32(&mut self) -> f32 {
        (self.advance() & 0x7FFF_FFFF) as f32 * INV_2_POW_31
    }

    /// Returns the next float in `[-1, 1]` using the signed state directly.
    #[allow(clippy::cast_precision_loss)]
    pub fn next_signed_f32(&mut self) -> f32 {
        self.advance() as f32 * INV_2_POW_31
    }

    /// Returns `min + next_f32() * (max - min)`.
    pub fn next_range(&mut self, min: f32, max: f32) -> f32 {
        min + self.next_f32() * (max - min)
    }

    /// Returns [`Self::next_range`] biased by `+0.5` and truncated toward zero.
    ///
    /// For non-negative results this rounds half up; negative results are
    /// truncated after the bias, matching the renderer's integer picks.
    #[allow(clippy::cast_possible_truncation)]
    pub fn next_int(&mut self, min: f32, max: f32) -> i32 {
        (self.next_range(min, max) + 0.5) as i32
    }

    /// Returns a standard normal sample via the Marsaglia polar method.
    ///
    /// Pairs `(u, v)` are drawn from [`Self::next_signed_f32`] and rejected
    /// while `r = u² + v²` is `0` or greater than `1`. After
    /// [`MAX_REJECTIONS`] rounds the method gives up and returns `0.0`.
    #[allow(clippy::float_cmp)]
    pub fn next_normal(&mut self) -> f32 {
        for _ in 0..MAX_REJECTIONS {
            let u = self.next_signed_f32();
            let v = self.next_signed_f32();
            let r = u * u + v * v;
            if r == 0.0 || r > 1.0 {
                continue;
            }
            return u * (-2.0 * r.ln() / r).sqrt();
        }
        0.0
    }
}
