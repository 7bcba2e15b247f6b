//! End-to-end checks across the public API: motors built from plane and
//! point geometry, applied to entities, and cross-checked against the
//! dense multivector layer.

use pga_engine::ops::{interpolation, join, meet, roots};
use pga_engine::prelude::*;

const EPS: f64 = 1e-9;

fn assert_mv_close(a: &Multivector, b: &Multivector) {
    assert!(a.approx_eq(b, EPS), "{} != {}", a, b);
}

/// A unit screw motor with every component populated.
fn screw_motor() -> Motor {
    Line {
        e_bivector: [0.3, -0.5, 0.8],
        v_bivector: [0.1, 0.4, -0.2],
    }
    .exp()
}

#[test]
fn typed_products_match_the_dense_layer() {
    let p1 = Plane::new(3.0, &[0.2, -1.0, 0.4]);
    let p2 = Plane::new(-2.0, &[1.0, 0.1, 0.0]);
    let motor = p1.mul(&p2);
    assert_mv_close(
        &Multivector::from(&motor),
        &(Multivector::from(&p1) * Multivector::from(&p2)),
    );

    let a = Point::new(&[2.0, -3.0, 1.0]);
    let b = Point::new(&[0.5, 4.0, -1.0]);
    let translator = a.mul(&b);
    assert_mv_close(
        &Multivector::from(&translator),
        &(Multivector::from(&a) * Multivector::from(&b)),
    );

    let l1 = join::points(&a, &b);
    let l2 = meet::planes(&p1, &p2);
    assert_mv_close(
        &Multivector::from(&l1.mul(&l2)),
        &(Multivector::from(&l1) * Multivector::from(&l2)),
    );

    let m1 = screw_motor();
    let m2 = p1.mul(&p2);
    assert_mv_close(
        &Multivector::from(&m1.mul(&m2)),
        &(Multivector::from(&m1) * Multivector::from(&m2)),
    );
}

#[test]
fn sandwich_application_matches_the_dense_layer() {
    let m = screw_motor();
    let p = Point::new(&[1.0, -2.0, 0.5]);
    let applied = m.apply_to_point(&p);

    let mv = Multivector::from(&m);
    let sandwich = mv * Multivector::from(&p) * mv.reverse();
    assert_mv_close(&Multivector::from(&applied), &sandwich);

    let plane = Plane::new(1.5, &[0.0, 0.6, 0.8]);
    let applied = m.apply_to_plane(&plane);
    let sandwich = mv * Multivector::from(&plane) * mv.reverse();
    assert_mv_close(&Multivector::from(&applied), &sandwich);
}

#[test]
fn plane_constructors_agree() {
    let typed = Plane::new(5.0, &[0.0, 3.0, 4.0]);
    let generic = Multivector::plane(5.0, 0.0, 3.0, 4.0);
    assert_mv_close(&Multivector::from(&typed), &generic);
}

#[test]
fn point_constructors_agree() {
    let typed = Point::new(&[1.0, 2.0, 3.0]);
    let generic = Multivector::point(1.0, 2.0, 3.0);
    assert_mv_close(&Multivector::from(&typed), &generic);
}

#[test]
fn motor_between_planes_transforms_them() {
    let from = Plane::new(0.0, &[1.0, 0.0, 0.0]);
    let to = Plane::new(0.0, &[0.0, 1.0, 0.0]);
    let m = from.move_to(&to);
    let moved = m.apply_to_plane(&from);
    for (a, b) in moved.vector.iter().zip(to.vector.iter()) {
        assert!((a - b).abs() < EPS);
    }

    // The plane's own point stays on it: x = 0 contains the origin.
    let origin = Point::new(&[0.0, 0.0, 0.0]);
    let moved = m.apply_to_point(&origin);
    assert!(origin.is_similar_to(EPS, &moved));
}

#[test]
fn motor_square_roots_compose() {
    let m = screw_motor();
    let half = m.sqrt();
    let p = Point::random();
    let two_steps = half.apply_to_point(&half.apply_to_point(&p));
    let one_step = m.apply_to_point(&p);
    assert!(one_step.is_similar_to(1e-6, &two_steps));
}

#[test]
fn generic_roots_drive_interpolation() {
    // Quarter steps through a screw motion, three ways: closed-form motor
    // roots, dense-multivector roots, and the motor logarithm.
    let m = screw_motor();
    let quarter_typed = m.sqrt().sqrt();
    let quarter_generic = roots::sqrt(&roots::sqrt(&Multivector::from(&m)));
    let quarter_log = interpolation::sclerp(&m, 0.25);
    assert_mv_close(&Multivector::from(&quarter_typed), &quarter_generic);
    assert_mv_close(
        &Multivector::from(&quarter_typed),
        &Multivector::from(&quarter_log),
    );
}

#[test]
fn three_points_span_the_containing_plane() {
    let a = Point::new(&[1.0, 0.0, 0.0]);
    let b = Point::new(&[0.0, 1.0, 0.0]);
    let c = Point::new(&[0.0, 0.0, 1.0]);
    let plane = join::three_points(&a, &b, &c);
    // x + y + z = 1, up to scale and orientation.
    let n = [plane.vector[1], plane.vector[2], plane.vector[3]];
    assert!((n[0] - n[1]).abs() < EPS && (n[1] - n[2]).abs() < EPS);
    assert!((plane.vector[0] / n[0] - 1.0).abs() < EPS);
}
