//! src/ops/roots.rs
//!
//! Square roots in the motor calculus, over general multivectors. The
//! closed form `sqrt` and its cheaper relatives produce the half-way
//! transform of a rotor-like value near the scalar 1 — the workhorse of
//! motor interpolation.
//!
//! All three inherit the float degeneracies of their formulas: a null
//! `1 + x` (e.g. x = -1, or a half turn) yields NaN coefficients rather
//! than an error.

use crate::multivector::Multivector;

/// Simple square root: the normalized form of `1 + x`. Exact for simple
/// (grade-4-free) rotor-like values.
pub fn ssqrt(x: &Multivector) -> Multivector {
    (1.0 + *x).normalized()
}

/// Series square root: `(1 + x) * (1 + x⟨1⟩ - 0.5·x⟨4⟩)`, normalized. A
/// second-order approximation of [`sqrt`] for values near the identity.
pub fn sqrtn(x: &Multivector) -> Multivector {
    ((1.0 + *x) * (1.0 + x.grade(1) - 0.5 * x.grade(4))).normalized()
}

/// Closed-form square root:
/// `(1 + x) / √(2 + 2·x[0]) * (1 - x⟨4⟩ / (2 + 2·x⟨0⟩))`.
/// Exact for normalized motors; requires `2 + 2·x[0] > 0`.
pub fn sqrt(x: &Multivector) -> Multivector {
    (1.0 + *x) / (2.0 + 2.0 * x[0]).sqrt() * (1.0 - x.grade(4) / (2.0 + 2.0 * x.grade(0)))
}
