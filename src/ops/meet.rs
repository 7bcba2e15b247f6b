//! src/ops/meet.rs
//!
//! Outer products: intersections of flats.

use crate::ga::PseudoScalar;
use crate::{Line, Plane, Point};

/// p1 ^ p2 = (ae0 + be1 + ce2 + de3) ^ (xe0 + ye1 + ze2 + we3)
///         = e01(ay - bx)
///           + e02(az - cx)
///           + e03(aw - dx)
///           + e23(cw - dz)
///           + e31(dy - bw)
///           + e12(bz - cy)
pub fn planes(p1: &Plane, p2: &Plane) -> Line {
    Line {
        v_bivector: [
            p1.vector[0] * p2.vector[1] - p1.vector[1] * p2.vector[0],
            p1.vector[0] * p2.vector[2] - p1.vector[2] * p2.vector[0],
            p1.vector[0] * p2.vector[3] - p1.vector[3] * p2.vector[0],
        ],
        e_bivector: [
            p1.vector[2] * p2.vector[3] - p1.vector[3] * p2.vector[2],
            p1.vector[3] * p2.vector[1] - p1.vector[1] * p2.vector[3],
            p1.vector[1] * p2.vector[2] - p1.vector[2] * p2.vector[1],
        ],
    }
}

/// The point where a plane crosses a line.
pub fn plane_with_line(p: &Plane, l: &Line) -> Point {
    Point {
        trivector: [
            p.vector[1] * l.e_bivector[0]
                + p.vector[2] * l.e_bivector[1]
                + p.vector[3] * l.e_bivector[2],
            -p.vector[0] * l.e_bivector[0] + p.vector[2] * l.v_bivector[2]
                - p.vector[3] * l.v_bivector[1],
            -p.vector[0] * l.e_bivector[1] - p.vector[1] * l.v_bivector[2]
                + p.vector[3] * l.v_bivector[0],
            -p.vector[0] * l.e_bivector[2] + p.vector[1] * l.v_bivector[1]
                - p.vector[2] * l.v_bivector[0],
        ],
    }
}

/// b1 ^ b2, the grade-4 part of the product of two lines. Nonzero exactly
/// when the lines are skew.
pub fn lines(b1: &Line, b2: &Line) -> PseudoScalar {
    let e1 = b1.e_bivector;
    let e2 = b2.e_bivector;
    let v1 = b1.v_bivector;
    let v2 = b2.v_bivector;
    PseudoScalar(
        e1[0] * v2[0]
            + e1[1] * v2[1]
            + e1[2] * v2[2]
            + e2[0] * v1[0]
            + e2[1] * v1[1]
            + e2[2] * v1[2],
    )
}

#[cfg(test)]
mod tests {
    use crate::ops::meet;
    use crate::*;

    #[test]
    fn two_planes_meet_in_a_line() {
        let pxy = Plane::new(1.0, &[0.0, 0.0, 1.0]);
        let pxz = Plane::new(1.0, &[0.0, 1.0, 0.0]);
        let l = Line::new(&[0.0, 1.0, 1.0], &[-1.0, 0.0, 0.0]);
        assert_eq!(meet::planes(&pxy, &pxz), l);
    }

    #[test]
    fn three_planes_meet_in_a_point() {
        let p1 = Plane::new(1.0, &[1.0, 0.0, 0.0]);
        let p2 = Plane::new(1.0, &[0.0, 1.0, 0.0]);
        let p3 = Plane::new(1.0, &[0.0, 0.0, 1.0]);
        assert_eq!(
            meet::plane_with_line(&p1, &meet::planes(&p2, &p3)),
            Point::new(&[1.0, 1.0, 1.0])
        );
    }

    #[test]
    fn plane_crosses_line() {
        let p = Plane::new(4.0, &[0.0, 1.0, 0.0]);
        let l = Line::new(&[4.0, 0.0, 1.0], &[0.0, 1.0, 0.0]);
        assert_eq!(meet::plane_with_line(&p, &l), Point::new(&[4.0, 4.0, 1.0]));
    }

    #[test]
    fn skew_lines_have_nonzero_meet() {
        let l1 = Line::new(&[0.0, 0.0, 0.0], &[1.0, 0.0, 0.0]);
        let l2 = Line::new(&[0.0, 0.0, 1.0], &[0.0, 1.0, 0.0]);
        assert!(meet::lines(&l1, &l2).0.abs() > 0.5);
        // A line never misses itself.
        assert_eq!(meet::lines(&l1, &l1).0, 0.0);
    }
}
