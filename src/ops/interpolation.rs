//! src/ops/interpolation.rs
//!
//! Interpolation of rigid transforms: slerp between rotors and
//! logarithm-based sclerp for full motors.

use crate::motor::Motor;
use crate::rotor::Rotor;

/// Spherical linear interpolation of two rotors `r1` → `r2` by fraction
/// `t` in [0,1], along the shortest path.
pub fn slerp(r1: &Rotor, r2: &Rotor, t: f64) -> Rotor {
    let e1 = r1.e_bivector;
    let e2 = r2.e_bivector;
    // Cosine of the half-angle between the rotors.
    let dot = (r1.scalar * r2.scalar + e1[0] * e2[0] + e1[1] * e2[1] + e1[2] * e2[2])
        .clamp(-1.0, 1.0);
    let theta = dot.acos();

    if theta.abs() < 1e-8 {
        // Nearly the same, just return the first rotor.
        return *r1;
    }

    let sin_theta = theta.sin();
    let a = ((1.0 - t) * theta).sin() / sin_theta;
    let b = (t * theta).sin() / sin_theta;

    Rotor {
        scalar: a * r1.scalar + b * r2.scalar,
        e_bivector: [
            a * e1[0] + b * e2[0],
            a * e1[1] + b * e2[1],
            a * e1[2] + b * e2[2],
        ],
    }
}

/// Screw linear interpolation: the motor performing the fraction `t` of
/// the full screw motion of `m`. `sclerp(m, 0.5)` is `m.sqrt()` up to
/// sign, `sclerp(m, 1.0)` is `m` itself.
pub fn sclerp(m: &Motor, t: f64) -> Motor {
    m.ln().mul_scalar(t).exp()
}
