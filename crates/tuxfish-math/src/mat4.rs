// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
use core::fmt;

use crate::scalar::PI;
use crate::Vec3;

/// Fixed world-up used when building a basis from a single direction.
const WORLD_UP: Vec3 = Vec3::UNIT_Z;

/// Row‑major 4×4 matrix (`m[row][col]`) for the tuxfish transform pipeline.
///
/// - Rows 0..=2 hold the right/up/forward basis vectors and row 3 holds the
///   translation, so points transform as row vectors (`v' = v * M`).
/// - `a * b` applies `a` first. Rotation and projection helpers
///   left‑compose onto the receiver (`self = R * self`).
/// - [`Mat4::as_array`] exposes the 16 floats in storage order for uniform
///   upload; no transpose is needed on the shader side.
///
/// # Examples
/// ```
/// use tuxfish_math::{Mat4, Vec3};
/// let mut model = Mat4::identity();
/// model.set_position(Vec3::new(1.0, 2.0, 3.0));
/// let p = model.transform_point(&Vec3::ZERO);
/// assert_eq!(p.to_array(), [1.0, 2.0, 3.0]);
/// ```
///
/// # Degenerate inputs
/// Nothing here reports errors. Zero-span projections and zero-length
/// rotation axes leave the matrix unchanged; singular matrices passed to
/// [`Mat4::invert`] produce Inf/NaN.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(C)]
pub struct Mat4 {
    /// Storage, indexed `m[row][col]`.
    pub m: [[f32; 4]; 4],
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::identity()
    }
}

impl Mat4 {
    /// Returns the identity matrix.
    pub const fn identity() -> Self {
        Self::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Creates a matrix from rows.
    pub const fn new(rows: [[f32; 4]; 4]) -> Self {
        Self { m: rows }
    }

    /// Creates a matrix from 16 floats in row-major order.
    pub fn from_array(data: [f32; 16]) -> Self {
        Self::new(bytemuck::cast(data))
    }

    /// Returns the 16 floats in row-major order.
    pub fn to_array(self) -> [f32; 16] {
        bytemuck::cast(self.m)
    }

    /// Borrows the 16 floats in row-major order for uniform upload.
    pub fn as_array(&self) -> &[f32; 16] {
        bytemuck::cast_ref(&self.m)
    }

    /// Multiplies the matrix with another matrix (`self * rhs`).
    ///
    /// `result[i][j] = Σ_k self[i][k] * rhs[k][j]`. The product is built in a
    /// temporary, so `a = a.multiply(&a)` style aliasing is harmless.
    pub fn multiply(&self, rhs: &Self) -> Self {
        let a = &self.m;
        let b = &rhs.m;
        let mut out = [[0.0; 4]; 4];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (a[i][0] * b[0][j])
                    + (a[i][1] * b[1][j])
                    + (a[i][2] * b[2][j])
                    + (a[i][3] * b[3][j]);
            }
        }
        Self::new(out)
    }

    /// Per-row weighted sum of a single input component.
    ///
    /// `r.x = (m[0][0] + m[0][1] + m[0][2] + m[0][3]) * x`, likewise for `y`
    /// with row 1 and `z` with row 2. This is the renderer's historical
    /// `mMulP` and not a matrix–vector product; use
    /// [`Mat4::transform_point`] for that. `w` of the result is `0`.
    pub fn multiply_point(&self, x: f32, y: f32, z: f32) -> Vec3 {
        let m = &self.m;
        Vec3::new(
            (m[0][0] * x) + (m[0][1] * x) + (m[0][2] * x) + (m[0][3] * x),
            (m[1][0] * y) + (m[1][1] * y) + (m[1][2] * y) + (m[1][3] * y),
            (m[2][0] * z) + (m[2][1] * z) + (m[2][2] * z) + (m[2][3] * z),
        )
    }

    /// [`Mat4::multiply_point`] extended to `w` with row 3.
    pub fn multiply_vec4(&self, v: &Vec3) -> Vec3 {
        let m = &self.m;
        let p = self.multiply_point(v.x, v.y, v.z);
        Vec3::with_w(
            p.x,
            p.y,
            p.z,
            (m[3][0] * v.w) + (m[3][1] * v.w) + (m[3][2] * v.w) + (m[3][3] * v.w),
        )
    }

    /// Transforms a point as the row vector `(x, y, z, 1) * M`.
    ///
    /// No perspective divide is applied; the clip-space `w` is returned in
    /// the result's `w`.
    pub fn transform_point(&self, point: &Vec3) -> Vec3 {
        self.transform_row(point, 1.0)
    }

    /// Transforms a direction as `(x, y, z, 0) * M` (translation ignored).
    pub fn transform_direction(&self, direction: &Vec3) -> Vec3 {
        self.transform_row(direction, 0.0)
    }

    fn transform_row(&self, v: &Vec3, w: f32) -> Vec3 {
        let m = &self.m;
        let col = |j: usize| v.x * m[0][j] + v.y * m[1][j] + v.z * m[2][j] + w * m[3][j];
        Vec3::with_w(col(0), col(1), col(2), col(3))
    }

    /// Scales the first three rows (the basis vectors) per axis.
    pub fn scale(&mut self, x: f32, y: f32, z: f32) {
        for (row, factor) in self.m.iter_mut().zip([x, y, z]) {
            for cell in row.iter_mut() {
                *cell *= factor;
            }
        }
    }

    /// Uniform [`Mat4::scale`].
    pub fn scale_uniform(&mut self, s: f32) {
        self.scale(s, s, s);
    }

    /// Moves the origin by `(x, y, z)` expressed in the matrix's own basis:
    /// `row3 += x * row0 + y * row1 + z * row2`.
    pub fn translate(&mut self, x: f32, y: f32, z: f32) {
        for j in 0..4 {
            self.m[3][j] += self.m[0][j] * x + self.m[1][j] * y + self.m[2][j] * z;
        }
    }

    /// Left-composes a rotation of `radians` about an arbitrary `axis`.
    ///
    /// The axis is normalised first. A zero-length (or non-finite) axis
    /// skips the rotation and leaves the matrix unchanged. The length itself
    /// is checked: a `1/len > 0` guard would let a zero axis through as
    /// infinity and fill the matrix with NaN.
    pub fn rotate(&mut self, radians: f32, axis: Vec3) {
        let len = axis.length();
        if !(len > 0.0 && len.is_finite()) {
            return;
        }
        let inv = 1.0 / len;
        let (x, y, z) = (axis.x * inv, axis.y * inv, axis.z * inv);
        let (sin, cos) = radians.sin_cos();

        let (xx, yy, zz) = (x * x, y * y, z * z);
        let (xy, yz, zx) = (x * y, y * z, z * x);
        let (xs, ys, zs) = (x * sin, y * sin, z * sin);
        let one_minus_cos = 1.0 - cos;

        let rot = Self::new([
            [
                (one_minus_cos * xx) + cos,
                (one_minus_cos * xy) - zs,
                (one_minus_cos * zx) + ys,
                0.0,
            ],
            [
                (one_minus_cos * xy) + zs,
                (one_minus_cos * yy) + cos,
                (one_minus_cos * yz) - xs,
                0.0,
            ],
            [
                (one_minus_cos * zx) - ys,
                (one_minus_cos * yz) + xs,
                (one_minus_cos * zz) + cos,
                0.0,
            ],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        *self = rot.multiply(self);
    }

    /// Left-composes the cardinal rotation used for pitching models.
    ///
    /// The rotation couples columns 0 and 2 (`[c 0 s; 0 1 0; -s 0 c]`),
    /// exactly as the renderer's assets were authored against.
    pub fn rotate_x(&mut self, radians: f32) {
        let (s, c) = radians.sin_cos();
        let t = Self::new([
            [c, 0.0, s, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [-s, 0.0, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        *self = t.multiply(self);
    }

    /// Left-composes the cardinal rotation coupling columns 1 and 2
    /// (`[1 0 0; 0 c -s; 0 s c]`).
    pub fn rotate_y(&mut self, radians: f32) {
        let (s, c) = radians.sin_cos();
        let t = Self::new([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, c, -s, 0.0],
            [0.0, s, c, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        *self = t.multiply(self);
    }

    /// Left-composes a rotation about the Z axis (`[c -s 0; s c 0; 0 0 1]`).
    pub fn rotate_z(&mut self, radians: f32) {
        let (s, c) = radians.sin_cos();
        let t = Self::new([
            [c, -s, 0.0, 0.0],
            [s, c, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ]);
        *self = t.multiply(self);
    }

    /// Incrementally re-orients the basis of `view` without gimbal lock.
    ///
    /// The right, up and forward vectors are read from the columns of
    /// `view`. Right is turned about up by `xrot`, up about right by `yrot`,
    /// forward and up are re-derived by cross products, then right is rolled
    /// about forward by `zrot` (Rodrigues' formula each step). The three
    /// vectors are normalised and written back as columns of a pure rotation
    /// (translation cleared).
    pub fn angle_axis_rotate(view: &Self, xrot: f32, yrot: f32, zrot: f32) -> Self {
        let v = &view.m;
        let mut right = Vec3::new(v[0][0], v[1][0], v[2][0]);
        let mut up = Vec3::new(v[0][1], v[1][1], v[2][1]);

        right = rodrigues(&right, &up, xrot);
        up = rodrigues(&up, &right, yrot);

        let forward = right.cross(&up);
        up = forward.cross(&right);

        right = rodrigues(&right, &forward, zrot);
        up = forward.cross(&right);

        let r = right.normalize();
        let u = up.normalize();
        let f = forward.normalize();
        Self::new([
            [r.x, u.x, f.x, 0.0],
            [r.y, u.y, f.y, 0.0],
            [r.z, u.z, f.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    /// Left-composes an asymmetric perspective frustum.
    ///
    /// No-op when `near <= 0`, `far <= 0`, or any of the spans
    /// `right - left`, `top - bottom`, `far - near` is not positive.
    pub fn frustum(&mut self, left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) {
        let dx = right - left;
        let dy = top - bottom;
        let dz = far - near;
        if near <= 0.0 || far <= 0.0 || dx <= 0.0 || dy <= 0.0 || dz <= 0.0 {
            return;
        }
        let (rdx, rdy, rdz) = (1.0 / dx, 1.0 / dy, 1.0 / dz);

        let frust = Self::new([
            [2.0 * near * rdx, 0.0, 0.0, 0.0],
            [0.0, 2.0 * near * rdy, 0.0, 0.0],
            [
                (right + left) * rdx,
                (top + bottom) * rdy,
                -(near + far) * rdz,
                -1.0,
            ],
            [0.0, 0.0, -2.0 * near * far * rdz, 0.0],
        ]);
        *self = frust.multiply(self);
    }

    /// Left-composes a symmetric perspective projection.
    ///
    /// `fovy_degrees` is the full vertical field of view; the half-height at
    /// the near plane is `tan(fovy * π / 360) * near`.
    pub fn perspective(&mut self, fovy_degrees: f32, aspect: f32, near: f32, far: f32) {
        let half_h = (fovy_degrees * 0.002_777_778_078 * PI).tan() * near;
        let half_w = half_h * aspect;
        self.frustum(-half_w, half_w, -half_h, half_h, near, far);
    }

    /// Left-composes an orthographic projection.
    ///
    /// No-op when any span is exactly zero.
    #[allow(clippy::float_cmp)]
    pub fn orthographic(&mut self, left: f32, right: f32, bottom: f32, top: f32, near: f32, far: f32) {
        let dx = right - left;
        let dy = top - bottom;
        let dz = far - near;
        if dx == 0.0 || dy == 0.0 || dz == 0.0 {
            return;
        }
        let (rdx, rdy, rdz) = (1.0 / dx, 1.0 / dy, 1.0 / dz);

        let mut ortho = Self::identity();
        ortho.m[0][0] = 2.0 * rdx;
        ortho.m[3][0] = -(right + left) * rdx;
        ortho.m[1][1] = 2.0 * rdy;
        ortho.m[3][1] = -(top + bottom) * rdy;
        ortho.m[2][2] = -2.0 * rdz;
        ortho.m[3][2] = -(near + far) * rdz;
        *self = ortho.multiply(self);
    }

    /// Writes a basis looking along `unit_dir` from `origin`.
    ///
    /// Rows 0/1/2 become right = normalize(up × dir), up' = dir × right and
    /// dir; row 3 becomes `origin`. Column 3 is left untouched.
    /// Precondition: `unit_dir` is unit length and not parallel to +Z.
    pub fn look_at(&mut self, origin: Vec3, unit_dir: Vec3) {
        let right = WORLD_UP.cross(&unit_dir).normalize();
        let up = unit_dir.cross(&right);
        self.set_row3(0, &right);
        self.set_row3(1, &up);
        self.set_row3(2, &unit_dir);
        self.set_row3(3, &origin);
    }

    /// General inverse by transpose and cofactor expansion (Cramer's rule).
    ///
    /// Precondition: the matrix is invertible. A zero determinant yields
    /// Inf/NaN entries rather than an error.
    pub fn invert(&self) -> Self {
        let mat = self.to_array();
        let mut src = [0.0_f32; 16];
        for i in 0..4 {
            src[i] = mat[i * 4];
            src[i + 4] = mat[i * 4 + 1];
            src[i + 8] = mat[i * 4 + 2];
            src[i + 12] = mat[i * 4 + 3];
        }

        let mut dst = [0.0_f32; 16];

        // pairs for the first 8 cofactors
        let mut tmp = [
            src[10] * src[15],
            src[11] * src[14],
            src[9] * src[15],
            src[11] * src[13],
            src[9] * src[14],
            src[10] * src[13],
            src[8] * src[15],
            src[11] * src[12],
            src[8] * src[14],
            src[10] * src[12],
            src[8] * src[13],
            src[9] * src[12],
        ];

        dst[0] = tmp[0] * src[5] + tmp[3] * src[6] + tmp[4] * src[7];
        dst[0] -= tmp[1] * src[5] + tmp[2] * src[6] + tmp[5] * src[7];
        dst[1] = tmp[1] * src[4] + tmp[6] * src[6] + tmp[9] * src[7];
        dst[1] -= tmp[0] * src[4] + tmp[7] * src[6] + tmp[8] * src[7];
        dst[2] = tmp[2] * src[4] + tmp[7] * src[5] + tmp[10] * src[7];
        dst[2] -= tmp[3] * src[4] + tmp[6] * src[5] + tmp[11] * src[7];
        dst[3] = tmp[5] * src[4] + tmp[8] * src[5] + tmp[11] * src[6];
        dst[3] -= tmp[4] * src[4] + tmp[9] * src[5] + tmp[10] * src[6];
        dst[4] = tmp[1] * src[1] + tmp[2] * src[2] + tmp[5] * src[3];
        dst[4] -= tmp[0] * src[1] + tmp[3] * src[2] + tmp[4] * src[3];
        dst[5] = tmp[0] * src[0] + tmp[7] * src[2] + tmp[8] * src[3];
        dst[5] -= tmp[1] * src[0] + tmp[6] * src[2] + tmp[9] * src[3];
        dst[6] = tmp[3] * src[0] + tmp[6] * src[1] + tmp[11] * src[3];
        dst[6] -= tmp[2] * src[0] + tmp[7] * src[1] + tmp[10] * src[3];
        dst[7] = tmp[4] * src[0] + tmp[9] * src[1] + tmp[10] * src[2];
        dst[7] -= tmp[5] * src[0] + tmp[8] * src[1] + tmp[11] * src[2];

        // pairs for the second 8 cofactors
        tmp = [
            src[2] * src[7],
            src[3] * src[6],
            src[1] * src[7],
            src[3] * src[5],
            src[1] * src[6],
            src[2] * src[5],
            src[0] * src[7],
            src[3] * src[4],
            src[0] * src[6],
            src[2] * src[4],
            src[0] * src[5],
            src[1] * src[4],
        ];

        dst[8] = tmp[0] * src[13] + tmp[3] * src[14] + tmp[4] * src[15];
        dst[8] -= tmp[1] * src[13] + tmp[2] * src[14] + tmp[5] * src[15];
        dst[9] = tmp[1] * src[12] + tmp[6] * src[14] + tmp[9] * src[15];
        dst[9] -= tmp[0] * src[12] + tmp[7] * src[14] + tmp[8] * src[15];
        dst[10] = tmp[2] * src[12] + tmp[7] * src[13] + tmp[10] * src[15];
        dst[10] -= tmp[3] * src[12] + tmp[6] * src[13] + tmp[11] * src[15];
        dst[11] = tmp[5] * src[12] + tmp[8] * src[13] + tmp[11] * src[14];
        dst[11] -= tmp[4] * src[12] + tmp[9] * src[13] + tmp[10] * src[14];
        dst[12] = tmp[2] * src[10] + tmp[5] * src[11] + tmp[1] * src[9];
        dst[12] -= tmp[4] * src[11] + tmp[0] * src[9] + tmp[3] * src[10];
        dst[13] = tmp[8] * src[11] + tmp[0] * src[8] + tmp[7] * src[10];
        dst[13] -= tmp[6] * src[10] + tmp[9] * src[11] + tmp[1] * src[8];
        dst[14] = tmp[6] * src[9] + tmp[11] * src[11] + tmp[3] * src[8];
        dst[14] -= tmp[10] * src[11] + tmp[2] * src[8] + tmp[7] * src[9];
        dst[15] = tmp[10] * src[10] + tmp[4] * src[8] + tmp[9] * src[9];
        dst[15] -= tmp[8] * src[9] + tmp[11] * src[10] + tmp[5] * src[8];

        let det = src[0] * dst[0] + src[1] * dst[1] + src[2] * dst[2] + src[3] * dst[3];
        let inv_det = 1.0 / det;
        for cell in &mut dst {
            *cell *= inv_det;
        }
        Self::from_array(dst)
    }

    /// Swaps rows and columns.
    pub fn transpose(&self) -> Self {
        let mut out = [[0.0; 4]; 4];
        for (i, row) in self.m.iter().enumerate() {
            for (j, &cell) in row.iter().enumerate() {
                out[j][i] = cell;
            }
        }
        Self::new(out)
    }

    fn set_row3(&mut self, row: usize, v: &Vec3) {
        self.m[row][0] = v.x;
        self.m[row][1] = v.y;
        self.m[row][2] = v.z;
    }

    fn row3(&self, row: usize) -> Vec3 {
        Vec3::new(self.m[row][0], self.m[row][1], self.m[row][2])
    }

    fn neg_column3(&self, col: usize) -> Vec3 {
        Vec3::new(-self.m[0][col], -self.m[1][col], -self.m[2][col])
    }

    /// Writes a camera basis facing `dir_norm` into the upper 3×3, negated
    /// and stored column-wise (the layout a view matrix expects).
    pub fn set_view_dir(&mut self, dir_norm: Vec3) {
        let c = WORLD_UP.cross(&dir_norm).normalize();
        let up = dir_norm.cross(&c);
        for (col, v) in [c, up, dir_norm].iter().enumerate() {
            self.m[0][col] = -v.x;
            self.m[1][col] = -v.y;
            self.m[2][col] = -v.z;
        }
    }

    /// Viewing direction of a view matrix (same as [`Mat4::view_z`]).
    pub fn view_dir(&self) -> Vec3 {
        self.view_z()
    }

    /// Negated column 0: the camera's right axis.
    pub fn view_x(&self) -> Vec3 {
        self.neg_column3(0)
    }

    /// Negated column 1: the camera's up axis.
    pub fn view_y(&self) -> Vec3 {
        self.neg_column3(1)
    }

    /// Negated column 2: the camera's forward axis.
    pub fn view_z(&self) -> Vec3 {
        self.neg_column3(2)
    }

    /// Writes an object basis facing `dir_norm` into rows 0..=2.
    ///
    /// Row 0 is right, row 1 is `-dir_norm` and row 2 the derived up.
    pub fn set_dir(&mut self, dir_norm: Vec3) {
        let c = WORLD_UP.cross(&dir_norm).normalize();
        let up = dir_norm.cross(&c);
        self.set_row3(0, &c);
        self.set_row3(2, &up);
        self.set_row3(1, &dir_norm.inverse());
    }

    /// Row 0 (the object's local X axis).
    pub fn dir_x(&self) -> Vec3 {
        self.row3(0)
    }

    /// Row 1 (the object's local Y axis).
    pub fn dir_y(&self) -> Vec3 {
        self.row3(1)
    }

    /// Row 2 (the object's local Z axis).
    pub fn dir_z(&self) -> Vec3 {
        self.row3(2)
    }

    /// Translation stored in row 3.
    pub fn position(&self) -> Vec3 {
        self.row3(3)
    }

    /// Overwrites the translation in row 3 (`m[3][3]` untouched).
    pub fn set_position(&mut self, pos: Vec3) {
        self.set_row3(3, &pos);
    }

    /// Emits the [`fmt::Display`] dump as a `tracing` debug event.
    pub fn dump(&self, label: &str) {
        tracing::debug!(target: "tuxfish_math::mat4", "{label}:\n{self}");
    }
}

/// Rodrigues' rotation of `v` about the axis `k`:
/// `k (k·v)(1 - cos) + v cos + (k × v) sin`, summed in that order.
fn rodrigues(v: &Vec3, k: &Vec3, angle: f32) -> Vec3 {
    let (sin, cos) = angle.sin_cos();
    let along = k.scale(k.dot(v) * (1.0 - cos));
    let across = k.cross(v).scale(sin);
    along + v.scale(cos) + across
}

impl From<[f32; 16]> for Mat4 {
    fn from(value: [f32; 16]) -> Self {
        Self::from_array(value)
    }
}

impl From<[[f32; 4]; 4]> for Mat4 {
    fn from(value: [[f32; 4]; 4]) -> Self {
        Self::new(value)
    }
}

impl core::ops::Mul for Mat4 {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self::Output {
        self.multiply(&rhs)
    }
}

impl core::ops::Mul<&Mat4> for Mat4 {
    type Output = Self;
    fn mul(self, rhs: &Mat4) -> Self::Output {
        self.multiply(rhs)
    }
}

impl core::ops::MulAssign for Mat4 {
    fn mul_assign(&mut self, rhs: Self) {
        *self = self.multiply(&rhs);
    }
}

impl core::ops::MulAssign<&Mat4> for Mat4 {
    fn mul_assign(&mut self, rhs: &Mat4) {
        *self = self.multiply(rhs);
    }
}

/// Four lines of four `{:+.2}` values followed by `---`.
impl fmt::Display for Mat4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.m {
            writeln!(f, "{:+.2} {:+.2} {:+.2} {:+.2}", row[0], row[1], row[2], row[3])?;
        }
        write!(f, "---")
    }
}
