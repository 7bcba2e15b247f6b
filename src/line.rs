// src/line.rs

use crate::ops::{inner, meet};
use rand::Rng;

/// A line, stored as its two bivector halves: the euclidean part on
/// { e23, e31, e12 } (the direction) and the vanishing part on
/// { e01, e02, e03 } (the moment). A geometric line satisfies the Plücker
/// condition e · v = 0; general bivectors (motor logarithms, screw axes
/// with pitch) may not.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Line {
    pub e_bivector: [f64; 3],
    pub v_bivector: [f64; 3],
}

impl Line {
    /// The line through `point` with direction `dir` (PGA4CS page 29).
    pub fn new(point: &[f64; 3], dir: &[f64; 3]) -> Self {
        Self {
            v_bivector: [
                point[2] * dir[1] - point[1] * dir[2],
                point[0] * dir[2] - point[2] * dir[0],
                point[1] * dir[0] - point[0] * dir[1],
            ],
            e_bivector: *dir,
        }
    }

    pub fn zero() -> Self {
        Self {
            v_bivector: [0.0; 3],
            e_bivector: [0.0; 3],
        }
    }

    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        let mut c = || rng.gen_range(-1.0..1.0);
        Self {
            v_bivector: [c(), c(), c()],
            e_bivector: [c(), c(), c()],
        }
    }

    pub fn dual(&self) -> Self {
        Self {
            v_bivector: self.e_bivector,
            e_bivector: self.v_bivector,
        }
    }

    pub fn reverse(&self) -> Self {
        self.neg()
    }

    pub fn neg(&self) -> Self {
        let e = self.e_bivector;
        let v = self.v_bivector;
        Self {
            e_bivector: [-e[0], -e[1], -e[2]],
            v_bivector: [-v[0], -v[1], -v[2]],
        }
    }

    pub fn inverse(&self) -> Self {
        let e = self.e_bivector;
        let v = self.v_bivector;
        let fac = 1.0 / (e[0] * e[0] + e[1] * e[1] + e[2] * e[2]);
        Self {
            e_bivector: [-e[0] * fac, -e[1] * fac, -e[2] * fac],
            v_bivector: [-v[0] * fac, -v[1] * fac, -v[2] * fac],
        }
    }

    /// Euclidean norm, the length of the direction part.
    pub fn norm(&self) -> f64 {
        let e = self.e_bivector;
        (e[0] * e[0] + e[1] * e[1] + e[2] * e[2]).sqrt()
    }

    /// Ideal norm, the length of the moment part.
    pub fn inorm(&self) -> f64 {
        let v = self.v_bivector;
        (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
    }

    pub fn normalize(&self) -> Self {
        let fac = 1.0 / self.norm();
        let e = self.e_bivector;
        let v = self.v_bivector;
        Self {
            e_bivector: [e[0] * fac, e[1] * fac, e[2] * fac],
            v_bivector: [v[0] * fac, v[1] * fac, v[2] * fac],
        }
    }

    pub fn is_zero(&self) -> bool {
        self.e_bivector.iter().all(|c| c.abs() < 1e-12)
            && self.v_bivector.iter().all(|c| c.abs() < 1e-12)
    }

    /// Exponential of a bivector: the motor rotating by twice the euclidean
    /// length of `self` about its axis while translating along it.
    ///
    /// Splits off the study part β = -(b ∧ b) / 2u with u² = -b · b, so a
    /// screw bivector exponentiates to cos(u + βI) + sin(u + βI)·b̂.
    pub fn exp(&self) -> super::Motor {
        let u2 = -inner::lines(self, self);
        if u2 < 1e-12 {
            // A vanishing bivector squares to zero: exp(b) = 1 + b.
            return super::Motor::from(self).add_scalar(1.0);
        }
        let u = u2.sqrt();
        let beta = meet::lines(self, self).div_scalar(-2.0 * u).0;
        let (su, cu) = u.sin_cos();
        let fac = su / u;
        let efac = beta * (su / u2 - cu / u);
        let e = self.e_bivector;
        let v = self.v_bivector;
        super::Motor {
            scalar: cu,
            pseudo: -su * beta,
            e_bivector: [e[0] * fac, e[1] * fac, e[2] * fac],
            v_bivector: [
                v[0] * fac + e[0] * efac,
                v[1] * fac + e[1] * efac,
                v[2] * fac + e[2] * efac,
            ],
        }
    }

    /// Inverse of `Motor::cayley`: maps a bivector back to a motor,
    /// (1 + b)² · (1 + u² + (b ∧ b)) / (1 + u²)².
    pub fn cayley(&self) -> super::Motor {
        let u2 = -inner::lines(self, self);
        let w = meet::lines(self, self).0;
        let m = super::Motor::from(self).add_scalar(1.0).squared();
        let sigma = 1.0 + u2;
        let fac = 1.0 / (sigma * sigma);
        super::Motor {
            scalar: m.scalar * sigma * fac,
            pseudo: (m.pseudo * sigma + m.scalar * w) * fac,
            e_bivector: [
                m.e_bivector[0] * sigma * fac,
                m.e_bivector[1] * sigma * fac,
                m.e_bivector[2] * sigma * fac,
            ],
            v_bivector: [
                (m.v_bivector[0] * sigma - m.e_bivector[0] * w) * fac,
                (m.v_bivector[1] * sigma - m.e_bivector[1] * w) * fac,
                (m.v_bivector[2] * sigma - m.e_bivector[2] * w) * fac,
            ],
        }
    }

    /// Splits a bivector into commuting euclidean and vanishing parts, so
    /// that `self = euclidean + vanishing` and the two parts commute under
    /// the geometric product (PGA4CS chapter 5.6).
    pub fn decompose(&self) -> (Line, Line) {
        let rev = self.reverse();
        let bdb = inner::lines(self, &rev);
        if bdb.abs() < 1e-9 {
            return (Line::zero(), *self);
        }
        let bmb = meet::lines(self, &rev);
        let be = self.e_bivector;
        let bv = self.v_bivector;
        let van = Line {
            v_bivector: [
                -0.5 * be[0] * bmb.0 / bdb,
                -0.5 * be[1] * bmb.0 / bdb,
                -0.5 * be[2] * bmb.0 / bdb,
            ],
            e_bivector: [0.0; 3],
        };
        let eucl = Line {
            v_bivector: [
                bv[0] + 0.5 * be[0] * bmb.0 / bdb,
                bv[1] + 0.5 * be[1] * bmb.0 / bdb,
                bv[2] + 0.5 * be[2] * bmb.0 / bdb,
            ],
            e_bivector: be,
        };
        (eucl, van)
    }

    pub fn mul(&self, other: &Self) -> super::Motor {
        let e1 = self.e_bivector;
        let v1 = self.v_bivector;
        let e2 = other.e_bivector;
        let v2 = other.v_bivector;
        super::Motor {
            scalar: -e1[0] * e2[0] - e1[1] * e2[1] - e1[2] * e2[2],
            v_bivector: [
                -e1[1] * v2[2] + e1[2] * v2[1] + e2[1] * v1[2] - e2[2] * v1[1],
                e1[0] * v2[2] - e1[2] * v2[0] - e2[0] * v1[2] + e2[2] * v1[0],
                -e1[0] * v2[1] + e1[1] * v2[0] + e2[0] * v1[1] - e2[1] * v1[0],
            ],
            e_bivector: [
                -e1[1] * e2[2] + e1[2] * e2[1],
                e1[0] * e2[2] - e1[2] * e2[0],
                -e1[0] * e2[1] + e1[1] * e2[0],
            ],
            pseudo: e1[0] * v2[0]
                + e1[1] * v2[1]
                + e1[2] * v2[2]
                + e2[0] * v1[0]
                + e2[1] * v1[1]
                + e2[2] * v1[2],
        }
    }

    pub fn div(&self, other: &Self) -> super::Motor {
        self.mul(&other.inverse())
    }

    pub fn mul_scalar(&self, s: f64) -> Self {
        let e = self.e_bivector;
        let v = self.v_bivector;
        Self {
            e_bivector: [e[0] * s, e[1] * s, e[2] * s],
            v_bivector: [v[0] * s, v[1] * s, v[2] * s],
        }
    }

    pub fn div_scalar(&self, s: f64) -> Self {
        self.mul_scalar(1.0 / s)
    }

    pub fn add(&self, other: &Self) -> Self {
        let e1 = self.e_bivector;
        let v1 = self.v_bivector;
        let e2 = other.e_bivector;
        let v2 = other.v_bivector;
        Self {
            e_bivector: [e1[0] + e2[0], e1[1] + e2[1], e1[2] + e2[2]],
            v_bivector: [v1[0] + v2[0], v1[1] + v2[1], v1[2] + v2[2]],
        }
    }

    /// The motor moving this line onto `dest`. Both lines should be
    /// normalized; skew pairs are handled by the full motor square root.
    pub fn move_to(&self, dest: &Self) -> super::Motor {
        dest.div(self).sqrt()
    }
}

impl From<&super::Motor> for Line {
    fn from(m: &super::Motor) -> Self {
        Self {
            e_bivector: m.e_bivector,
            v_bivector: m.v_bivector,
        }
    }
}
