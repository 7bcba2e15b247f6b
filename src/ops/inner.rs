//! src/ops/inner.rs
//!
//! Inner products. For two lines this is minus the dot product of their
//! directions; a unit euclidean line satisfies l · l = -1.

use crate::Line;

pub fn lines(l1: &Line, l2: &Line) -> f64 {
    let e1 = l1.e_bivector;
    let e2 = l2.e_bivector;
    -e1[0] * e2[0] - e1[1] * e2[1] - e1[2] * e2[2]
}
