//! src/ops/join.rs
//!
//! Regressive products: flats spanned by lower-grade entities.

use crate::{Line, Plane, Point};

/// The line through two points.
pub fn points(p1: &Point, p2: &Point) -> Line {
    let t1 = p1.trivector;
    let t2 = p2.trivector;
    Line {
        v_bivector: [
            -t1[2] * t2[3] + t1[3] * t2[2],
            t1[1] * t2[3] - t1[3] * t2[1],
            -t1[1] * t2[2] + t1[2] * t2[1],
        ],
        e_bivector: [
            -t1[0] * t2[1] + t1[1] * t2[0],
            -t1[0] * t2[2] + t1[2] * t2[0],
            -t1[0] * t2[3] + t1[3] * t2[0],
        ],
    }
}

/// The plane spanned by a line and a point.
pub fn line_to_point(l: &Line, p: &Point) -> Plane {
    let t1 = p.trivector;
    let vb = l.v_bivector;
    let eb = l.e_bivector;
    Plane {
        vector: [
            -t1[1] * vb[0] - t1[2] * vb[1] - t1[3] * vb[2],
            eb[1] * t1[3] - eb[2] * t1[2] + t1[0] * vb[0],
            -eb[0] * t1[3] + eb[2] * t1[1] + t1[0] * vb[1],
            eb[0] * t1[2] - eb[1] * t1[1] + t1[0] * vb[2],
        ],
    }
}

/// The plane through three points.
pub fn three_points(p1: &Point, p2: &Point, p3: &Point) -> Plane {
    line_to_point(&points(p1, p2), p3)
}
