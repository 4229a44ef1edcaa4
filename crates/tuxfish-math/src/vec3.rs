// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use crate::scalar::{quantize, FRAC_PI_2, PI, TAU};
use crate::{Prng, MAX_REJECTIONS};

/// Three-component float32 vector with an auxiliary homogeneous `w`.
///
/// * `x`, `y`, `z` encode a point or a direction depending on context.
/// * `w` is only read by [`crate::Mat4::multiply_vec4`]; the arithmetic
///   helpers carry the left operand's `w` through unchanged.
/// * Nothing normalises implicitly. Functions that need a unit vector
///   (`reflect`, `Mat4::look_at`) expect the caller to pass one.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Vec3 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
    /// Homogeneous weight.
    pub w: f32,
}

impl Vec3 {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Unit vector pointing along the positive X axis.
    pub const UNIT_X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit vector pointing along the positive Y axis.
    pub const UNIT_Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit vector pointing along the positive Z axis (world up).
    pub const UNIT_Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Creates a vector from components with `w = 0`.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z, w: 0.0 }
    }

    /// Creates a vector with an explicit homogeneous weight.
    pub const fn with_w(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Returns `(x, y, z)` as an array.
    pub fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Returns `(x, y, z, w)` as an array, ready for a `vec4` uniform.
    pub fn to_array4(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    fn map2(&self, other: &Self, f: impl Fn(f32, f32) -> f32) -> Self {
        Self::with_w(f(self.x, other.x), f(self.y, other.y), f(self.z, other.z), self.w)
    }

    fn map(&self, f: impl Fn(f32) -> f32) -> Self {
        Self::with_w(f(self.x), f(self.y), f(self.z), self.w)
    }

    /// Scales the vector by a scalar.
    pub fn scale(&self, s: f32) -> Self {
        self.map(|a| a * s)
    }

    /// Negates every component.
    pub fn inverse(&self) -> Self {
        self.map(|a| -a)
    }

    /// Dot product with another vector.
    pub fn dot(&self, other: &Self) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Cross product with another vector; `a × b = -(b × a)`.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - other.y * self.z,
            -(self.x * other.z - other.x * self.z),
            self.x * other.y - other.x * self.y,
        )
    }

    /// Sum of the components.
    pub fn sum(&self) -> f32 {
        self.x + self.y + self.z
    }

    /// Sum of the absolute components.
    pub fn sum_abs(&self) -> f32 {
        self.x.abs() + self.y.abs() + self.z.abs()
    }

    /// Squared magnitude; prefer this for comparisons.
    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean length (modulus).
    pub fn length(&self) -> f32 {
        self.length_squared().sqrt()
    }

    /// Scales the vector to unit length.
    ///
    /// Precondition: the vector is non-zero. A zero vector yields NaN
    /// components; there is no degenerate-case guard on this hot path.
    pub fn normalize(&self) -> Self {
        let inv = 1.0 / self.length_squared().sqrt();
        self.scale(inv)
    }

    /// Unit direction from `self` towards `target`.
    pub fn direction_to(&self, target: &Self) -> Self {
        (*target - *self).normalize()
    }

    /// Euclidean distance.
    pub fn distance(&self, other: &Self) -> f32 {
        self.distance_squared(other).sqrt()
    }

    /// Squared Euclidean distance.
    pub fn distance_squared(&self, other: &Self) -> f32 {
        (*self - *other).length_squared()
    }

    /// Signed sum of per-axis differences, `Σ (a_i - b_i)`.
    ///
    /// This is not the absolute-value Manhattan metric: the result can be
    /// negative and `a.manhattan_distance(b) == -b.manhattan_distance(a)`.
    pub fn manhattan_distance(&self, other: &Self) -> f32 {
        (self.x - other.x) + (self.y - other.y) + (self.z - other.z)
    }

    /// Largest absolute per-axis difference.
    pub fn chebyshev_distance(&self, other: &Self) -> f32 {
        let d = *self - *other;
        let mut dist = d.x.abs();
        if d.y.abs() > dist {
            dist = d.y.abs();
        }
        if d.z.abs() > dist {
            dist = d.z.abs();
        }
        dist
    }

    /// Reflects `self` about the unit normal `n`: `v - 2n(v·n)`.
    pub fn reflect(&self, n: &Self) -> Self {
        let angle = self.dot(n);
        Self::with_w(
            self.x - (2.0 * n.x) * angle,
            self.y - (2.0 * n.y) * angle,
            self.z - (2.0 * n.z) * angle,
            self.w,
        )
    }

    /// True when every axis of `self` lies within `[other - tol, other + tol]`.
    pub fn equal_within_tolerance(&self, other: &Self, tol: f32) -> bool {
        let within = |a: f32, b: f32| a >= b - tol && a <= b + tol;
        within(self.x, other.x) && within(self.y, other.y) && within(self.z, other.z)
    }

    /// True when every axis quantises to the same integer (see [`quantize`]).
    pub fn equal_as_integers(&self, other: &Self) -> bool {
        quantize(self.x) == quantize(other.x)
            && quantize(self.y) == quantize(other.y)
            && quantize(self.z) == quantize(other.z)
    }

    /// Either/or selection: `self` if it is strictly smaller on every axis,
    /// otherwise `other` verbatim. Not a component-wise minimum.
    pub fn select_min(&self, other: &Self) -> Self {
        if self.x < other.x && self.y < other.y && self.z < other.z {
            *self
        } else {
            *other
        }
    }

    /// Either/or selection: `self` if it is strictly larger on every axis,
    /// otherwise `other` verbatim. Not a component-wise maximum.
    pub fn select_max(&self, other: &Self) -> Self {
        if self.x > other.x && self.y > other.y && self.z > other.z {
            *self
        } else {
            *other
        }
    }

    /// Rotates in place about the X axis.
    ///
    /// The second assignment reads the freshly written `y`, reproducing the
    /// renderer's historical numerics; the result is not length-preserving
    /// for general inputs.
    pub fn rotate_x(&mut self, radians: f32) {
        let (s, c) = radians.sin_cos();
        self.y = self.y * c + self.z * s;
        self.z = self.y * s - self.z * c;
    }

    /// Rotates in place about the Y axis (reads the freshly written `x`).
    pub fn rotate_y(&mut self, radians: f32) {
        let (s, c) = radians.sin_cos();
        self.x = self.z * s - self.x * c;
        self.z = self.z * c + self.x * s;
    }

    /// Rotates in place about the Z axis (reads the freshly written `x`).
    pub fn rotate_z(&mut self, radians: f32) {
        let (s, c) = radians.sin_cos();
        self.x = self.x * c + self.y * s;
        self.y = self.x * s - self.y * c;
    }

    /// Three independent draws in `[-1, 1]`: a point in the cube, not the
    /// sphere. Normalise if a unit vector is required.
    pub fn random_in_cube(rng: &mut Prng) -> Self {
        let x = rng.next_signed_f32();
        let y = rng.next_signed_f32();
        let z = rng.next_signed_f32();
        Self::new(x, y, z)
    }

    /// Three independent standard-normal draws. Normalising the result gives
    /// a uniform direction.
    pub fn random_normal(rng: &mut Prng) -> Self {
        let x = rng.next_normal();
        let y = rng.next_normal();
        let z = rng.next_normal();
        Self::new(x, y, z)
    }

    /// Uniform point on the unit sphere surface (inverse-cosine latitude).
    pub fn random_on_sphere(rng: &mut Prng) -> Self {
        let lat = rng.next_signed_f32().acos() - FRAC_PI_2;
        let lon = TAU * rng.next_f32();
        let (sin_lat, cos_lat) = lat.sin_cos();
        Self::new(cos_lat * lon.cos(), cos_lat * lon.sin(), sin_lat)
    }

    /// Uniform point inside the unit ball by rejection from the cube.
    ///
    /// Retries until `length_squared() <= 1`. Seeds whose low bits are all
    /// zero fall into short cycles that never land inside the ball; after
    /// [`MAX_REJECTIONS`] rounds the sampler gives up and returns
    /// [`Vec3::ZERO`].
    pub fn random_in_sphere(rng: &mut Prng) -> Self {
        for _ in 0..MAX_REJECTIONS {
            let v = Self::random_in_cube(rng);
            if v.length_squared() <= 1.0 {
                return v;
            }
        }
        Self::ZERO
    }

    /// Cheap, biased direction: `x = sin(θ₁)`, `y = cos(θ₂)` from two
    /// independent angles in `[-π, π)` and `z` uniform in `[-1, 1]`.
    ///
    /// Not uniform on any sphere; kept for callers tuned against it.
    pub fn random_disk_like(rng: &mut Prng) -> Self {
        let x = (rng.next_f32() * TAU - PI).sin();
        let y = (rng.next_f32() * TAU - PI).cos();
        let z = rng.next_signed_f32();
        Self::new(x, y, z)
    }
}

impl From<[f32; 3]> for Vec3 {
    fn from(value: [f32; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<[f32; 4]> for Vec3 {
    fn from(value: [f32; 4]) -> Self {
        Self::with_w(value[0], value[1], value[2], value[3])
    }
}

macro_rules! componentwise_op {
    ($trait:ident, $method:ident, $op:tt) => {
        impl core::ops::$trait for Vec3 {
            type Output = Self;
            fn $method(self, rhs: Self) -> Self::Output {
                self.map2(&rhs, |a, b| a $op b)
            }
        }

        impl core::ops::$trait<f32> for Vec3 {
            type Output = Self;
            fn $method(self, rhs: f32) -> Self::Output {
                self.map(|a| a $op rhs)
            }
        }
    };
}

// Division is unchecked: zero denominators yield Inf/NaN.
componentwise_op!(Add, add, +);
componentwise_op!(Sub, sub, -);
componentwise_op!(Mul, mul, *);
componentwise_op!(Div, div, /);

impl core::ops::AddAssign for Vec3 {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl core::ops::SubAssign for Vec3 {
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl core::ops::Neg for Vec3 {
    type Output = Self;
    fn neg(self) -> Self::Output {
        self.inverse()
    }
}
