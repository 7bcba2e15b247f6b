// src/tests_support.rs
//! Shared motor fixtures for unit tests.

use crate::ops::join;
use crate::{Line, Motor, Point};

/// A unit motor with all eight components populated (a proper screw:
/// rotation plus translation along a skew axis).
pub fn screw_test_motor() -> Motor {
    Line {
        e_bivector: [0.3, -0.5, 0.8],
        v_bivector: [0.1, 0.4, -0.2],
    }
    .exp()
}

/// A unit motor that purely rotates about an axis through the origin.
pub fn rotating_test_motor() -> Motor {
    let p1 = Point::new(&[0.0, 0.0, 0.0]);
    let p2 = Point::new(&[-6.4, 9.1, 0.4]);
    let p3 = Point::new(&[0.0, -10.0, 3.0]);
    let l1 = join::points(&p1, &p2).normalize();
    let l2 = join::points(&p1, &p3).normalize();
    l1.div(&l2).sqrt()
}

/// A unit motor that purely translates.
pub fn translating_test_motor() -> Motor {
    let p1 = Point::new(&[0.0, 0.0, 0.0]);
    let p2 = Point::new(&[-6.4, 9.1, 0.4]);
    Motor::from(&p1.div(&p2).sqrt())
}
