// src/motor.rs

use crate::error::CastError;
use crate::ops::{inner, join, meet};

/// A rigid-motion versor: the even-grade element
/// scalar + v_bivector + e_bivector + pseudo. Products of an even number
/// of planes land here.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Motor {
    pub scalar: f64,
    pub v_bivector: [f64; 3],
    pub e_bivector: [f64; 3],
    pub pseudo: f64,
}

impl Motor {
    /// Creates the motor that moves every param (e.g., `a`) to its
    /// destination (e.g., `a_`). If the correspondence is not a rigid
    /// motion, an invalid motor (possibly NaN/Inf-valued) is returned
    /// rather than an error.
    ///
    /// See PGA4CS page 62.
    pub fn from_point_correspondences(
        a: &super::Point,
        a_: &super::Point,
        b: &super::Point,
        b_: &super::Point,
        c: &super::Point,
        c_: &super::Point,
    ) -> Self {
        let v_a = a_.div(a).sqrt();
        let b_a = v_a.apply_to_point(b);

        let from = join::points(a_, &b_a);
        let to = join::points(a_, b_);

        let v_ba = to.div(&from).sqrt().mul_translator(&v_a);
        let c_ba = v_ba.apply_to_point(c);

        let from = join::three_points(a_, b_, &c_ba);
        let to = join::three_points(a_, b_, c_);

        to.div(&from).sqrt().mul(&v_ba)
    }

    pub fn into_rotor_checked(&self) -> Result<super::Rotor, CastError<Self>> {
        if self.v_bivector.iter().any(|e| e.abs() > 0.1) || self.pseudo.abs() > 0.1 {
            return Err(CastError::new(self, "Rotor"));
        }
        Ok(self.into_rotor_unchecked())
    }

    pub fn into_rotor_unchecked(&self) -> super::Rotor {
        super::Rotor {
            scalar: self.scalar,
            e_bivector: self.e_bivector,
        }
    }

    pub fn neg(&self) -> Self {
        let v = self.v_bivector;
        let e = self.e_bivector;
        Self {
            scalar: -self.scalar,
            pseudo: -self.pseudo,
            v_bivector: [-v[0], -v[1], -v[2]],
            e_bivector: [-e[0], -e[1], -e[2]],
        }
    }

    /// √⟨M M̃⟩₀: only the scalar and euclidean bivector contribute, the
    /// vanishing parts are null.
    pub fn norm(&self) -> f64 {
        self.norm_squared().sqrt()
    }

    pub fn norm_squared(&self) -> f64 {
        let e = self.e_bivector;
        e[0] * e[0] + e[1] * e[1] + e[2] * e[2] + self.scalar * self.scalar
    }

    pub fn normalize(&self) -> Self {
        self.div_scalar(self.norm())
    }

    /// Whether the motor has no grade-4 part and is therefore called
    /// 'simple' (e.g., a rotation about an axis, or a pure translation).
    pub fn is_simple(&self) -> bool {
        self.pseudo.abs() < 1e-6
    }

    /// Exact square root of a normalized motor: the motor performing half
    /// the screw motion. NaN when the scalar part is at or below -1 (a half
    /// turn has no unique square root).
    pub fn sqrt(&self) -> Self {
        let s = self.scalar;
        let e = self.e_bivector;
        let v = self.v_bivector;
        let root = (s + 1.0).sqrt();
        let half = std::f64::consts::SQRT_2 / (2.0 * root);
        let quarter = std::f64::consts::SQRT_2 / (4.0 * root);
        let vfac = quarter * self.pseudo / (s + 1.0);
        Self {
            scalar: 0.5 * (2.0 * s + 2.0).sqrt(),
            pseudo: quarter * self.pseudo,
            e_bivector: [half * e[0], half * e[1], half * e[2]],
            v_bivector: [
                half * v[0] + vfac * e[0],
                half * v[1] + vfac * e[1],
                half * v[2] + vfac * e[2],
            ],
        }
    }

    /// Square root for a simple motor (no grade-4 part): the normalized
    /// form of 1 + M.
    pub fn ssqrt(&self) -> Self {
        self.add_scalar(1.0).normalize()
    }

    /// Series approximation of the square root: (1 + M) corrected by half
    /// the grade-4 part, then normalized. Agrees with [`Motor::sqrt`] up to
    /// second order in the bivector components.
    pub fn sqrtn(&self) -> Self {
        let correction = Self {
            scalar: 1.0,
            v_bivector: [0.0; 3],
            e_bivector: [0.0; 3],
            pseudo: -0.5 * self.pseudo,
        };
        self.add_scalar(1.0).mul(&correction).normalize()
    }

    /// Logarithm of a normalized motor: the bivector generating it, so that
    /// `m.ln().exp() ≈ m`. The study part is recovered from the grade-4
    /// component when the scalar vanishes (half-turn motors).
    pub fn ln(&self) -> super::Line {
        let b = super::Line::from(self);
        let s2sq = -inner::lines(&b, &b);
        if s2sq < 1e-12 {
            // A translator: ln(1 + t) = t.
            return b;
        }
        let s2 = s2sq.sqrt();
        let u = s2.atan2(self.scalar);
        let beta = if self.scalar.abs() > 1e-6 {
            meet::lines(&b, &b).div_scalar(-2.0 * s2).0 / self.scalar
        } else {
            -self.pseudo / s2
        };
        let fac = u / s2;
        let efac = beta * (u * self.scalar - s2) / s2sq;
        super::Line {
            e_bivector: [
                b.e_bivector[0] * fac,
                b.e_bivector[1] * fac,
                b.e_bivector[2] * fac,
            ],
            v_bivector: [
                b.v_bivector[0] * fac + b.e_bivector[0] * efac,
                b.v_bivector[1] * fac + b.e_bivector[1] * efac,
                b.v_bivector[2] * fac + b.e_bivector[2] * efac,
            ],
        }
    }

    /// Cayley map to the bivectors, an algebraic alternative to `ln` that
    /// needs no transcendentals (Tingelstad 2018,
    /// https://link.springer.com/article/10.1007/s00006-018-0850-2).
    /// Inverted by `Line::cayley`.
    pub fn cayley(&self) -> super::Line {
        let fac = 1.0 / (1.0 + self.scalar);
        let e = self.e_bivector;
        let v = self.v_bivector;
        super::Line {
            e_bivector: [e[0] * fac, e[1] * fac, e[2] * fac],
            v_bivector: [
                (v[0] + self.pseudo * e[0] * fac) * fac,
                (v[1] + self.pseudo * e[1] * fac) * fac,
                (v[2] + self.pseudo * e[2] * fac) * fac,
            ],
        }
    }

    pub fn mul(&self, other: &Self) -> Self {
        let s1 = self.scalar;
        let s2 = other.scalar;
        let ps1 = self.pseudo;
        let ps2 = other.pseudo;
        let v1 = self.v_bivector;
        let v2 = other.v_bivector;
        let e1 = self.e_bivector;
        let e2 = other.e_bivector;
        Self {
            scalar: -e1[0] * e2[0] - e1[1] * e2[1] - e1[2] * e2[2] + s1 * s2,
            pseudo: e1[0] * v2[0]
                + e1[1] * v2[1]
                + e1[2] * v2[2]
                + e2[0] * v1[0]
                + e2[1] * v1[1]
                + e2[2] * v1[2]
                + ps1 * s2
                + ps2 * s1,
            v_bivector: [
                -e1[0] * ps2 - e1[1] * v2[2] + e1[2] * v2[1] - e2[0] * ps1 + e2[1] * v1[2]
                    - e2[2] * v1[1]
                    + s1 * v2[0]
                    + s2 * v1[0],
                e1[0] * v2[2] - e1[1] * ps2 - e1[2] * v2[0] - e2[0] * v1[2] - e2[1] * ps1
                    + e2[2] * v1[0]
                    + s1 * v2[1]
                    + s2 * v1[1],
                -e1[0] * v2[1] + e1[1] * v2[0] - e1[2] * ps2 + e2[0] * v1[1]
                    - e2[1] * v1[0]
                    - e2[2] * ps1
                    + s1 * v2[2]
                    + s2 * v1[2],
            ],
            e_bivector: [
                e1[0] * s2 - e1[1] * e2[2] + e1[2] * e2[1] + e2[0] * s1,
                e1[0] * e2[2] + e1[1] * s2 - e1[2] * e2[0] + e2[1] * s1,
                -e1[0] * e2[1] + e1[1] * e2[0] + e1[2] * s2 + e2[2] * s1,
            ],
        }
    }

    pub fn div(&self, other: &Self) -> Self {
        self.mul(&other.inverse())
    }

    pub fn mul_translator(&self, t: &super::Translator) -> Self {
        let ts = t.scalar;
        let tv = t.v_bivector;
        let ms = self.scalar;
        let mps = self.pseudo;
        let mv = self.v_bivector;
        let me = self.e_bivector;
        Self {
            scalar: ms * ts,
            pseudo: me[0] * tv[0] + me[1] * tv[1] + me[2] * tv[2] + mps * ts,
            v_bivector: [
                -me[1] * tv[2] + me[2] * tv[1] + ms * tv[0] + mv[0] * ts,
                me[0] * tv[2] - me[2] * tv[0] + ms * tv[1] + mv[1] * ts,
                -me[0] * tv[1] + me[1] * tv[0] + ms * tv[2] + mv[2] * ts,
            ],
            e_bivector: [me[0] * ts, me[1] * ts, me[2] * ts],
        }
    }

    pub fn apply_to<T: Applicable>(&self, g: &T) -> T {
        g.apply(self)
    }

    pub fn apply_to_point(&self, p: &super::Point) -> super::Point {
        let ms = self.scalar;
        let mps = self.pseudo;
        let mv = self.v_bivector;
        let me = self.e_bivector;
        let p = p.trivector;
        super::Point {
            trivector: [
                p[0] * (me[0] * me[0] + me[1] * me[1] + me[2] * me[2] + ms * ms),
                me[0] * me[0] * p[1] + 2.0 * me[0] * me[1] * p[2] + 2.0 * me[0] * me[2] * p[3]
                    - 2.0 * me[0] * mps * p[0]
                    - me[1] * me[1] * p[1]
                    - 2.0 * me[1] * ms * p[3]
                    + 2.0 * me[1] * mv[2] * p[0]
                    - me[2] * me[2] * p[1]
                    + 2.0 * me[2] * ms * p[2]
                    - 2.0 * me[2] * mv[1] * p[0]
                    + ms * ms * p[1]
                    - 2.0 * ms * mv[0] * p[0],
                -me[0] * me[0] * p[2] + 2.0 * me[0] * me[1] * p[1] + 2.0 * me[0] * ms * p[3]
                    - 2.0 * me[0] * mv[2] * p[0]
                    + me[1] * me[1] * p[2]
                    + 2.0 * me[1] * me[2] * p[3]
                    - 2.0 * me[1] * mps * p[0]
                    - me[2] * me[2] * p[2]
                    - 2.0 * me[2] * ms * p[1]
                    + 2.0 * me[2] * mv[0] * p[0]
                    + ms * ms * p[2]
                    - 2.0 * ms * mv[1] * p[0],
                -me[0] * me[0] * p[3] + 2.0 * me[0] * me[2] * p[1] - 2.0 * me[0] * ms * p[2]
                    + 2.0 * me[0] * mv[1] * p[0]
                    - me[1] * me[1] * p[3]
                    + 2.0 * me[1] * me[2] * p[2]
                    + 2.0 * me[1] * ms * p[1]
                    - 2.0 * me[1] * mv[0] * p[0]
                    + me[2] * me[2] * p[3]
                    - 2.0 * me[2] * mps * p[0]
                    + ms * ms * p[3]
                    - 2.0 * ms * mv[2] * p[0],
            ],
        }
    }

    pub fn apply_to_plane(&self, p: &super::Plane) -> super::Plane {
        let pvec = p.vector;
        let ms = self.scalar;
        let mps = self.pseudo;
        let mv = self.v_bivector;
        let me = self.e_bivector;
        super::Plane {
            vector: [
                me[0] * me[0] * pvec[0] + 2.0 * me[0] * mps * pvec[1]
                    + 2.0 * me[0] * mv[1] * pvec[3]
                    - 2.0 * me[0] * mv[2] * pvec[2]
                    + me[1] * me[1] * pvec[0]
                    + 2.0 * me[1] * mps * pvec[2]
                    - 2.0 * me[1] * mv[0] * pvec[3]
                    + 2.0 * me[1] * mv[2] * pvec[1]
                    + me[2] * me[2] * pvec[0]
                    + 2.0 * me[2] * mps * pvec[3]
                    + 2.0 * me[2] * mv[0] * pvec[2]
                    - 2.0 * me[2] * mv[1] * pvec[1]
                    + ms * ms * pvec[0]
                    + 2.0 * ms * mv[0] * pvec[1]
                    + 2.0 * ms * mv[1] * pvec[2]
                    + 2.0 * ms * mv[2] * pvec[3],
                me[0] * me[0] * pvec[1]
                    + 2.0 * me[0] * me[1] * pvec[2]
                    + 2.0 * me[0] * me[2] * pvec[3]
                    - me[1] * me[1] * pvec[1]
                    - 2.0 * me[1] * ms * pvec[3]
                    - me[2] * me[2] * pvec[1]
                    + 2.0 * me[2] * ms * pvec[2]
                    + ms * ms * pvec[1],
                -me[0] * me[0] * pvec[2]
                    + 2.0 * me[0] * me[1] * pvec[1]
                    + 2.0 * me[0] * ms * pvec[3]
                    + me[1] * me[1] * pvec[2]
                    + 2.0 * me[1] * me[2] * pvec[3]
                    - me[2] * me[2] * pvec[2]
                    - 2.0 * me[2] * ms * pvec[1]
                    + ms * ms * pvec[2],
                -me[0] * me[0] * pvec[3] + 2.0 * me[0] * me[2] * pvec[1]
                    - 2.0 * me[0] * ms * pvec[2]
                    - me[1] * me[1] * pvec[3]
                    + 2.0 * me[1] * me[2] * pvec[2]
                    + 2.0 * me[1] * ms * pvec[1]
                    + me[2] * me[2] * pvec[3]
                    + ms * ms * pvec[3],
            ],
        }
    }

    pub fn apply_to_line(&self, l: &super::Line) -> super::Line {
        let ms = self.scalar;
        let mps = self.pseudo;
        let mv = self.v_bivector;
        let me = self.e_bivector;
        let le = l.e_bivector;
        let lv = l.v_bivector;
        super::Line {
            e_bivector: [
                le[0] * me[0] * me[0] - le[0] * me[1] * me[1] - le[0] * me[2] * me[2]
                    + le[0] * ms * ms
                    + 2.0 * le[1] * me[0] * me[1]
                    + 2.0 * le[1] * me[2] * ms
                    + 2.0 * le[2] * me[0] * me[2]
                    - 2.0 * le[2] * me[1] * ms,
                2.0 * le[0] * me[0] * me[1] - 2.0 * le[0] * me[2] * ms - le[1] * me[0] * me[0]
                    + le[1] * me[1] * me[1]
                    - le[1] * me[2] * me[2]
                    + le[1] * ms * ms
                    + 2.0 * le[2] * me[0] * ms
                    + 2.0 * le[2] * me[1] * me[2],
                2.0 * le[0] * me[0] * me[2] + 2.0 * le[0] * me[1] * ms - 2.0 * le[1] * me[0] * ms
                    + 2.0 * le[1] * me[1] * me[2]
                    - le[2] * me[0] * me[0]
                    - le[2] * me[1] * me[1]
                    + le[2] * me[2] * me[2]
                    + le[2] * ms * ms,
            ],
            v_bivector: [
                2.0 * le[0] * me[0] * mv[0]
                    - 2.0 * le[0] * me[1] * mv[1]
                    - 2.0 * le[0] * me[2] * mv[2]
                    - 2.0 * le[0] * mps * ms
                    + 2.0 * le[1] * me[0] * mv[1]
                    + 2.0 * le[1] * me[1] * mv[0]
                    - 2.0 * le[1] * me[2] * mps
                    + 2.0 * le[1] * ms * mv[2]
                    + 2.0 * le[2] * me[0] * mv[2]
                    + 2.0 * le[2] * me[1] * mps
                    + 2.0 * le[2] * me[2] * mv[0]
                    - 2.0 * le[2] * ms * mv[1]
                    + lv[0] * me[0] * me[0]
                    - lv[0] * me[1] * me[1]
                    - lv[0] * me[2] * me[2]
                    + lv[0] * ms * ms
                    + 2.0 * lv[1] * me[0] * me[1]
                    + 2.0 * lv[1] * me[2] * ms
                    + 2.0 * lv[2] * me[0] * me[2]
                    - 2.0 * lv[2] * me[1] * ms,
                2.0 * le[0] * me[0] * mv[1] + 2.0 * le[0] * me[1] * mv[0]
                    + 2.0 * le[0] * me[2] * mps
                    - 2.0 * le[0] * ms * mv[2]
                    - 2.0 * le[1] * me[0] * mv[0]
                    + 2.0 * le[1] * me[1] * mv[1]
                    - 2.0 * le[1] * me[2] * mv[2]
                    - 2.0 * le[1] * mps * ms
                    - 2.0 * le[2] * me[0] * mps
                    + 2.0 * le[2] * me[1] * mv[2]
                    + 2.0 * le[2] * me[2] * mv[1]
                    + 2.0 * le[2] * ms * mv[0]
                    + 2.0 * lv[0] * me[0] * me[1]
                    - 2.0 * lv[0] * me[2] * ms
                    - lv[1] * me[0] * me[0]
                    + lv[1] * me[1] * me[1]
                    - lv[1] * me[2] * me[2]
                    + lv[1] * ms * ms
                    + 2.0 * lv[2] * me[0] * ms
                    + 2.0 * lv[2] * me[1] * me[2],
                2.0 * le[0] * me[0] * mv[2] - 2.0 * le[0] * me[1] * mps
                    + 2.0 * le[0] * me[2] * mv[0]
                    + 2.0 * le[0] * ms * mv[1]
                    + 2.0 * le[1] * me[0] * mps
                    + 2.0 * le[1] * me[1] * mv[2]
                    + 2.0 * le[1] * me[2] * mv[1]
                    - 2.0 * le[1] * ms * mv[0]
                    - 2.0 * le[2] * me[0] * mv[0]
                    - 2.0 * le[2] * me[1] * mv[1]
                    + 2.0 * le[2] * me[2] * mv[2]
                    - 2.0 * le[2] * mps * ms
                    + 2.0 * lv[0] * me[0] * me[2]
                    + 2.0 * lv[0] * me[1] * ms
                    - 2.0 * lv[1] * me[0] * ms
                    + 2.0 * lv[1] * me[1] * me[2]
                    - lv[2] * me[0] * me[0]
                    - lv[2] * me[1] * me[1]
                    + lv[2] * me[2] * me[2]
                    + lv[2] * ms * ms,
            ],
        }
    }

    /// Reverse divided by the squared norm: the exact inverse for versors.
    pub fn inverse(&self) -> Self {
        self.reverse().div_scalar(self.norm_squared())
    }

    pub fn mul_scalar(&self, s: f64) -> Self {
        let e = self.e_bivector;
        let v = self.v_bivector;
        Self {
            scalar: self.scalar * s,
            pseudo: self.pseudo * s,
            e_bivector: [e[0] * s, e[1] * s, e[2] * s],
            v_bivector: [v[0] * s, v[1] * s, v[2] * s],
        }
    }

    pub fn div_scalar(&self, s: f64) -> Self {
        self.mul_scalar(1.0 / s)
    }

    pub fn squared(&self) -> Self {
        self.mul(self)
    }

    pub fn add_scalar(&self, s: f64) -> Self {
        Self {
            scalar: self.scalar + s,
            ..*self
        }
    }

    pub fn reverse(&self) -> Self {
        let e = self.e_bivector;
        let v = self.v_bivector;
        Self {
            e_bivector: [-e[0], -e[1], -e[2]],
            v_bivector: [-v[0], -v[1], -v[2]],
            ..*self
        }
    }

    /// Behavioral comparison: two motors are similar when they move a
    /// random probe point to within `d` of each other.
    pub fn is_similar_to(&self, d: f64, other: &Self) -> bool {
        let p = super::Point::random().normalize();
        self.apply_to_point(&p)
            .is_similar_to(d, &other.apply_to_point(&p))
    }
}

impl From<&super::Line> for Motor {
    fn from(l: &super::Line) -> Self {
        Self {
            scalar: 0.0,
            pseudo: 0.0,
            v_bivector: l.v_bivector,
            e_bivector: l.e_bivector,
        }
    }
}

impl From<&super::Translator> for Motor {
    fn from(t: &super::Translator) -> Self {
        Self {
            scalar: t.scalar,
            e_bivector: [0.0; 3],
            v_bivector: t.v_bivector,
            pseudo: 0.0,
        }
    }
}

impl From<&super::Rotor> for Motor {
    fn from(r: &super::Rotor) -> Self {
        Self {
            scalar: r.scalar,
            e_bivector: r.e_bivector,
            v_bivector: [0.0; 3],
            pseudo: 0.0,
        }
    }
}

/// Entities a motor can act on through the sandwich product.
pub trait Applicable {
    fn apply(&self, m: &Motor) -> Self;
}

impl Applicable for super::Point {
    fn apply(&self, m: &Motor) -> Self {
        m.apply_to_point(self)
    }
}
impl Applicable for super::Line {
    fn apply(&self, m: &Motor) -> Self {
        m.apply_to_line(self)
    }
}
impl Applicable for super::Plane {
    fn apply(&self, m: &Motor) -> Self {
        m.apply_to_plane(self)
    }
}

#[cfg(test)]
mod tests {
    use crate::tests_support::{rotating_test_motor, screw_test_motor, translating_test_motor};
    use crate::*;

    const EPS: f64 = 1e-9;

    fn assert_motor_close(a: &Motor, b: &Motor) {
        assert!((a.scalar - b.scalar).abs() < EPS, "{:?} != {:?}", a, b);
        assert!((a.pseudo - b.pseudo).abs() < EPS, "{:?} != {:?}", a, b);
        for (x, y) in a
            .e_bivector
            .iter()
            .chain(a.v_bivector.iter())
            .zip(b.e_bivector.iter().chain(b.v_bivector.iter()))
        {
            assert!((x - y).abs() < EPS, "{:?} != {:?}", a, b);
        }
    }

    #[test]
    fn sqrt_squares_back_rotating() {
        let m = rotating_test_motor();
        assert_motor_close(&m, &m.sqrt().squared());
        assert!(m.is_similar_to(1e-6, &m.sqrt().squared()));
    }

    #[test]
    fn sqrt_squares_back_translating() {
        let m = translating_test_motor();
        assert_motor_close(&m, &m.sqrt().squared());
    }

    #[test]
    fn sqrt_squares_back_screw() {
        let m = screw_test_motor();
        assert_motor_close(&m, &m.sqrt().squared());
    }

    #[test]
    fn ssqrt_matches_sqrt_for_simple_motors() {
        let m = rotating_test_motor();
        assert_motor_close(&m.sqrt(), &m.ssqrt());
        let m = translating_test_motor();
        assert_motor_close(&m.sqrt(), &m.ssqrt());
    }

    #[test]
    fn sqrtn_approximates_sqrt_for_small_motors() {
        let m = Line {
            e_bivector: [0.04, -0.02, 0.05],
            v_bivector: [0.03, 0.01, -0.05],
        }
        .exp();
        let exact = m.sqrt();
        let approx = m.sqrtn();
        assert!((exact.scalar - approx.scalar).abs() < 1e-3);
        assert!((exact.pseudo - approx.pseudo).abs() < 1e-3);
        for (x, y) in exact
            .e_bivector
            .iter()
            .chain(exact.v_bivector.iter())
            .zip(approx.e_bivector.iter().chain(approx.v_bivector.iter()))
        {
            assert!((x - y).abs() < 1e-3);
        }
    }

    #[test]
    fn sqrt_halves_the_turn() {
        // A half turn's square root is a quarter turn, twice the square
        // root an eighth.
        let r = Rotor::new(std::f64::consts::PI, &[0.0, 1.0, 0.0]);
        let m = Motor::from(&r);
        let p = m.sqrt().apply_to_point(&Point::new(&[1.0, 0.0, 0.0]));
        assert!(Point::new(&[0.0, 0.0, -1.0]).is_similar_to(1e-9, &p));
        let p = m.sqrt().sqrt().apply_to_point(&Point::new(&[1.0, 0.0, 0.0]));
        let h = std::f64::consts::FRAC_1_SQRT_2;
        assert!(Point::new(&[h, 0.0, -h]).is_similar_to(1e-9, &p));
    }

    #[test]
    fn sqrt_of_full_turn_is_degenerate() {
        // scalar = -1: the square root is genuinely ambiguous and comes out
        // as NaN rather than a fault.
        let r = Rotor::new(2.0 * std::f64::consts::PI, &[0.0, 1.0, 0.0]);
        assert!(Motor::from(&r).sqrt().pseudo.is_nan());
    }

    #[test]
    fn ln_exp_round_trip() {
        for m in [
            rotating_test_motor(),
            translating_test_motor(),
            screw_test_motor(),
        ] {
            let m_ = m.ln().exp();
            assert_motor_close(&m, &m_);
            assert!(m.is_similar_to(1e-6, &m_));
        }
    }

    #[test]
    fn exp_ln_round_trip() {
        let b = Line {
            e_bivector: [0.3, -0.5, 0.8],
            v_bivector: [0.1, 0.4, -0.2],
        };
        let b_ = b.exp().ln();
        for (x, y) in b
            .e_bivector
            .iter()
            .chain(b.v_bivector.iter())
            .zip(b_.e_bivector.iter().chain(b_.v_bivector.iter()))
        {
            assert!((x - y).abs() < EPS);
        }
    }

    #[test]
    fn cayley_needs_no_transcendentals() {
        let m = screw_test_motor();
        let b = m.cayley();
        assert_motor_close(&m, &b.cayley());
    }

    #[test]
    fn point_correspondences_recover_motor() {
        let a = Point::new(&[2.0, 3.0, 5.0]);
        let b = Point::new(&[2.0, 8.0, 7.0]);
        let c = Point::new(&[3.0, -2.0, 1.0]);

        let rot = Rotor::new(2.6, &[1.2, 1.0, 0.0]);
        let trans = Point::new(&[6.0, 4.0, 1.0])
            .div(&Point::new(&[2.0, 0.0, 9.0]))
            .sqrt();
        let m = rot.mul_translator(&trans);

        let a_ = m.apply_to_point(&a);
        let b_ = m.apply_to_point(&b);
        let c_ = m.apply_to_point(&c);

        // The reconstruction may come out as -m, which is the same rigid
        // motion, so compare behaviorally on probe points.
        let recovered = Motor::from_point_correspondences(&a, &a_, &b, &b_, &c, &c_);
        assert!(recovered.is_similar_to(1e-6, &m));
        let d = Point::new(&[-1.0, 7.0, 2.0]);
        assert!(m.apply_to_point(&d).is_similar_to(1e-6, &recovered.apply_to_point(&d)));
    }

    #[test]
    fn apply_plane() {
        let t = Translator::new(&[1.0, 0.0, 0.0]);
        let r = Rotor::new(std::f64::consts::PI, &[0.0, 1.0, 0.0]);
        let m = t.mul_rotor(&r);
        let p = Plane::new(0.0, &[1.0, 0.0, 0.0]);
        let q = m.apply_to_plane(&p);
        let q_ = Plane::new(-1.0, &[-1.0, 0.0, 0.0]);
        for (x, y) in q.vector.iter().zip(q_.vector.iter()) {
            assert!((x - y).abs() < EPS);
        }
    }

    #[test]
    fn generic_apply() {
        let m = rotating_test_motor();
        let p = Point::new(&[1.0, 2.0, 3.0]);
        assert_eq!(m.apply_to(&p), m.apply_to_point(&p));
    }

    #[test]
    fn simple_motors() {
        assert!(rotating_test_motor().is_simple());
        assert!(translating_test_motor().is_simple());
        assert!(!screw_test_motor().is_simple());
    }

    #[test]
    fn rotor_cast() {
        let m = rotating_test_motor();
        // Rotation about an axis through the origin: an exact rotor.
        assert!(m.into_rotor_checked().is_ok());
        let m = translating_test_motor();
        assert!(m.into_rotor_checked().is_err());
    }

    #[test]
    fn inverse_undoes_motor() {
        let m = screw_test_motor();
        let id = Motor {
            scalar: 1.0,
            v_bivector: [0.0; 3],
            e_bivector: [0.0; 3],
            pseudo: 0.0,
        };
        assert_motor_close(&id, &m.mul(&m.inverse()));
        assert_motor_close(&id, &m.div(&m));
    }

    #[test]
    fn neg_is_involutive() {
        let m = screw_test_motor();
        assert_motor_close(&m, &m.neg().neg());
        // -m performs the same motion.
        assert!(m.is_similar_to(1e-9, &m.neg()));
    }
}
