// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
#![allow(missing_docs)]

use core::f32::consts::FRAC_PI_2;

use tuxfish_math::{Mat4, Vec3};

fn assert_mat_close(actual: &Mat4, expected: &Mat4, tol: f32) {
    for (i, (a, e)) in actual.as_array().iter().zip(expected.as_array()).enumerate() {
        assert!(
            (a - e).abs() <= tol,
            "element {i}: {a} vs {e}\nactual:\n{actual}\nexpected:\n{expected}"
        );
    }
}

fn assert_vec_close(actual: Vec3, expected: Vec3) {
    assert!(
        actual.equal_within_tolerance(&expected, 1e-5),
        "{actual:?} vs {expected:?}"
    );
}

#[test]
fn perspective_maps_near_and_far_planes_to_ndc_bounds() {
    let (near, far) = (0.01, 16.0);
    let mut proj = Mat4::identity();
    proj.perspective(30.0, 1.5, near, far);

    let n = proj.transform_point(&Vec3::new(0.0, 0.0, -near));
    assert!((n.z + near).abs() < 1e-6, "near z {}", n.z);
    assert!((n.w - near).abs() < 1e-6, "near w {}", n.w);
    assert!((n.z / n.w + 1.0).abs() < 1e-4);

    let f = proj.transform_point(&Vec3::new(0.0, 0.0, -far));
    assert!((f.z / f.w - 1.0).abs() < 1e-4, "far ndc {}", f.z / f.w);
}

#[test]
fn perspective_aspect_scales_horizontal_focal_length() {
    let mut square = Mat4::identity();
    square.perspective(60.0, 1.0, 0.1, 100.0);
    let mut wide = Mat4::identity();
    wide.perspective(60.0, 2.0, 0.1, 100.0);
    assert!((square.m[0][0] - 2.0 * wide.m[0][0]).abs() < 1e-5);
    assert!((square.m[1][1] - wide.m[1][1]).abs() < 1e-6);
    assert!((square.m[1][1] - 3.0_f32.sqrt()).abs() < 1e-5);
}

#[test]
fn degenerate_projections_leave_matrix_unchanged() {
    let mut base = Mat4::identity();
    base.translate(1.0, 2.0, 3.0);

    let mut m = base;
    m.frustum(-1.0, 1.0, -1.0, 1.0, 0.0, 10.0);
    assert_eq!(m, base);
    m.frustum(1.0, 1.0, -1.0, 1.0, 0.1, 10.0);
    assert_eq!(m, base);
    m.frustum(-1.0, 1.0, -1.0, 1.0, 10.0, 1.0);
    assert_eq!(m, base);
    m.orthographic(-1.0, 1.0, 2.0, 2.0, 0.0, 1.0);
    assert_eq!(m, base);
}

#[test]
fn orthographic_accepts_inverted_spans() {
    let mut m = Mat4::identity();
    m.orthographic(0.0, 800.0, 600.0, 0.0, -1.0, 1.0);
    let top_left = m.transform_point(&Vec3::ZERO);
    assert_vec_close(top_left, Vec3::new(-1.0, 1.0, 0.0));
    let bottom_right = m.transform_point(&Vec3::new(800.0, 600.0, 0.0));
    assert_vec_close(bottom_right, Vec3::new(1.0, -1.0, 0.0));
}

#[test]
fn zero_axis_rotation_is_a_no_op() {
    let mut m = Mat4::identity();
    m.translate(4.0, 5.0, 6.0);
    let before = m;
    m.rotate(1.0, Vec3::ZERO);
    assert_eq!(m, before);
    m.rotate(1.0, Vec3::new(f32::NAN, 0.0, 0.0));
    assert_eq!(m, before);
    // Squares to zero, so the length underflows and the axis is skipped.
    m.rotate(1.0, Vec3::new(1e-30, 0.0, 0.0));
    assert_eq!(m, before);
    assert!(m.to_array().iter().all(|v| v.is_finite()));
}

#[test]
fn arbitrary_axis_rotation_matches_cardinal_z() {
    let mut axis = Mat4::identity();
    axis.rotate(0.7, Vec3::new(0.0, 0.0, 3.0));
    let mut cardinal = Mat4::identity();
    cardinal.rotate_z(0.7);
    assert_mat_close(&axis, &cardinal, 1e-6);
}

#[test]
fn cardinal_rotations_use_their_historical_planes() {
    let mut x = Mat4::identity();
    x.rotate_x(FRAC_PI_2);
    assert!((x.m[0][2] - 1.0).abs() < 1e-6);
    assert!((x.m[2][0] + 1.0).abs() < 1e-6);
    assert_eq!(x.m[1][1], 1.0);

    let mut y = Mat4::identity();
    y.rotate_y(FRAC_PI_2);
    assert!((y.m[1][2] + 1.0).abs() < 1e-6);
    assert!((y.m[2][1] - 1.0).abs() < 1e-6);
    assert_eq!(y.m[0][0], 1.0);
}

#[test]
fn rotations_left_compose() {
    let mut m = Mat4::identity();
    m.set_position(Vec3::new(1.0, 0.0, 0.0));
    m.rotate_z(FRAC_PI_2);
    // Left composition keeps the translation row intact.
    assert_vec_close(m.position(), Vec3::new(1.0, 0.0, 0.0));

    let mut r = Mat4::identity();
    r.rotate_z(FRAC_PI_2);
    let mut t = Mat4::identity();
    t.set_position(Vec3::new(1.0, 0.0, 0.0));
    assert_mat_close(&m, &(r * t), 1e-7);
}

#[test]
fn translate_moves_along_local_basis() {
    let mut m = Mat4::identity();
    m.scale(2.0, 3.0, 4.0);
    m.translate(1.0, 1.0, 1.0);
    assert_eq!(m.position().to_array(), [2.0, 3.0, 4.0]);

    let mut turned = Mat4::identity();
    turned.rotate_z(FRAC_PI_2);
    turned.translate(1.0, 0.0, 0.0);
    assert_vec_close(turned.position(), Vec3::new(0.0, -1.0, 0.0));
}

#[test]
fn scale_uniform_touches_only_basis_rows() {
    let mut m = Mat4::identity();
    m.set_position(Vec3::new(1.0, 2.0, 3.0));
    m.scale_uniform(0.5);
    assert_eq!(m.m[0][0], 0.5);
    assert_eq!(m.m[2][2], 0.5);
    assert_eq!(m.m[3], [1.0, 2.0, 3.0, 1.0]);
}

#[test]
fn transform_point_and_direction_differ_by_translation() {
    let mut m = Mat4::identity();
    m.set_position(Vec3::new(1.0, 2.0, 3.0));
    let p = m.transform_point(&Vec3::new(1.0, 1.0, 1.0));
    assert_eq!(p.to_array4(), [2.0, 3.0, 4.0, 1.0]);
    let d = m.transform_direction(&Vec3::new(1.0, 1.0, 1.0));
    assert_eq!(d.to_array4(), [1.0, 1.0, 1.0, 0.0]);
}

#[test]
fn multiply_point_sums_each_row() {
    let m = Mat4::new([
        [1.0, 2.0, 3.0, 4.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.5, 0.5, 0.0, 0.0],
        [5.0, 6.0, 7.0, 1.0],
    ]);
    let p = m.multiply_point(2.0, 3.0, 4.0);
    assert_eq!(p.to_array4(), [20.0, 3.0, 4.0, 0.0]);
    let v = m.multiply_vec4(&Vec3::with_w(2.0, 3.0, 4.0, 2.0));
    assert_eq!(v.to_array4(), [20.0, 3.0, 4.0, 38.0]);
}

#[test]
fn look_at_writes_basis_rows() {
    let mut m = Mat4::identity();
    m.look_at(Vec3::new(1.0, 2.0, 3.0), Vec3::UNIT_X);
    assert_eq!(m.dir_x(), Vec3::UNIT_Y);
    assert_eq!(m.dir_y(), Vec3::UNIT_Z);
    assert_eq!(m.dir_z(), Vec3::UNIT_X);
    assert_eq!(m.position(), Vec3::new(1.0, 2.0, 3.0));
    assert_eq!(m.m[3][3], 1.0);
}

#[test]
fn view_and_object_direction_accessors() {
    let mut view = Mat4::identity();
    view.set_view_dir(Vec3::UNIT_X);
    assert_eq!(view.view_dir(), Vec3::UNIT_X);
    assert_eq!(view.view_x(), Vec3::UNIT_Y);
    assert_eq!(view.view_y(), Vec3::UNIT_Z);

    let mut object = Mat4::identity();
    object.set_dir(Vec3::UNIT_X);
    assert_eq!(object.dir_x(), Vec3::UNIT_Y);
    assert_eq!(object.dir_y(), Vec3::new(-1.0, 0.0, 0.0));
    assert_eq!(object.dir_z(), Vec3::UNIT_Z);
}

#[test]
fn angle_axis_rotate_keeps_an_orthonormal_basis() {
    let identity = Mat4::angle_axis_rotate(&Mat4::identity(), 0.0, 0.0, 0.0);
    assert_mat_close(&identity, &Mat4::identity(), 1e-7);

    let mut view = Mat4::identity();
    view.set_position(Vec3::new(9.0, 9.0, 9.0));
    let turned = Mat4::angle_axis_rotate(&view, 0.3, -0.8, 1.1);
    assert_eq!(turned.position(), Vec3::ZERO);
    let col = |j: usize| Vec3::new(turned.m[0][j], turned.m[1][j], turned.m[2][j]);
    let (r, u, f) = (col(0), col(1), col(2));
    for v in [r, u, f] {
        assert!((v.length() - 1.0).abs() < 1e-5);
    }
    assert!(r.dot(&u).abs() < 1e-5);
    assert!(u.dot(&f).abs() < 1e-5);
    assert!(f.dot(&r).abs() < 1e-5);
    assert_vec_close(r.cross(&u), f);
}

#[test]
fn angle_axis_yaw_turns_right_about_up() {
    let turned = Mat4::angle_axis_rotate(&Mat4::identity(), FRAC_PI_2, 0.0, 0.0);
    let right = Vec3::new(turned.m[0][0], turned.m[1][0], turned.m[2][0]);
    assert_vec_close(right, Vec3::new(0.0, 0.0, -1.0));
}

#[test]
fn invert_of_translation_negates_it() {
    let mut m = Mat4::identity();
    m.set_position(Vec3::new(1.0, -2.0, 3.0));
    let inv = m.invert();
    assert_vec_close(inv.position(), Vec3::new(-1.0, 2.0, -3.0));
    assert_mat_close(&(m * inv), &Mat4::identity(), 1e-6);
}

#[test]
fn invert_of_singular_matrix_is_not_finite() {
    let zero = Mat4::new([[0.0; 4]; 4]);
    assert!(zero.invert().as_array().iter().all(|v| !v.is_finite()));
}

#[test]
fn mul_operator_variants_agree() {
    let mut a = Mat4::identity();
    a.rotate_z(0.4);
    a.translate(1.0, 2.0, 3.0);
    let mut b = Mat4::identity();
    b.scale(2.0, 1.0, 0.5);

    let product = a.multiply(&b);
    assert_eq!(a * b, product);
    assert_eq!(a * &b, product);

    let mut c = a;
    c *= b;
    assert_eq!(c, product);
    let mut d = a;
    d *= &b;
    assert_eq!(d, product);
}

#[test]
fn flat_views_round_trip() {
    let flat = [
        0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0,
    ];
    let m = Mat4::from(flat);
    assert_eq!(m.m[1][0], 4.0);
    assert_eq!(m.to_array(), flat);
    assert_eq!(Mat4::from(m.m), m);
    assert_eq!(Mat4::default(), Mat4::identity());
}
