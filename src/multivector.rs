// src/multivector.rs
//!
//! Dense multivector for G(3,0,1): one `f64` coefficient per basis blade,
//! indexed by the bitmask encoding of `crate::ga`. This is the general
//! algebraic value behind the specialized `Plane`/`Point`/`Line`/`Motor`
//! types; those flatten into it for cross-checks and for operations that
//! only exist at full generality (grade projection, the square-root
//! operators in `ops::roots`).

use crate::ga::{self, blade, geometric_product_full, BLADES};
use crate::vector::Vec3;
use std::fmt;
use std::ops::{Add, Div, Index, Mul, Neg, Sub};

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Multivector {
    pub coeffs: [f64; BLADES],
}

impl Multivector {
    pub const ZERO: Self = Self::blade(blade::S, 0.0);
    pub const ONE: Self = Self::blade(blade::S, 1.0);

    pub const E0: Self = Self::blade(blade::E0, 1.0);
    pub const E1: Self = Self::blade(blade::E1, 1.0);
    pub const E2: Self = Self::blade(blade::E2, 1.0);
    pub const E3: Self = Self::blade(blade::E3, 1.0);
    pub const E01: Self = Self::blade(blade::E01, 1.0);
    pub const E02: Self = Self::blade(blade::E02, 1.0);
    pub const E03: Self = Self::blade(blade::E03, 1.0);
    pub const E12: Self = Self::blade(blade::E12, 1.0);
    pub const E23: Self = Self::blade(blade::E23, 1.0);
    /// e31 = -e13 in the canonical (ascending) orientation.
    pub const E31: Self = Self::blade(blade::E13, -1.0);
    pub const E123: Self = Self::blade(blade::E123, 1.0);
    /// e032 = -e023.
    pub const E032: Self = Self::blade(blade::E023, -1.0);
    pub const E013: Self = Self::blade(blade::E013, 1.0);
    /// e021 = -e012.
    pub const E021: Self = Self::blade(blade::E012, -1.0);
    pub const E0123: Self = Self::blade(blade::E0123, 1.0);

    pub const fn blade(index: usize, coeff: f64) -> Self {
        let mut coeffs = [0.0; BLADES];
        coeffs[index] = coeff;
        Self { coeffs }
    }

    pub const fn scalar(s: f64) -> Self {
        Self::blade(blade::S, s)
    }

    /// The PGA point x·e1 + y·e2 + z·e3 homogenized, i.e.
    /// `-x·e032 - y·e013 - z·e021 + e123`.
    pub fn point(x: f64, y: f64, z: f64) -> Self {
        -x * Self::E032 - y * Self::E013 - z * Self::E021 + Self::E123
    }

    /// The plane n·(x,y,z) = d with unit normal:
    /// `d·e0 + n1·e1 + n2·e2 + n3·e3` after normalizing `(n1, n2, n3)`.
    /// The offset `d` is kept as passed.
    pub fn plane(d: f64, n1: f64, n2: f64, n3: f64) -> Self {
        let n = Vec3::new(n1, n2, n3).normalized();
        d * Self::E0 + n.x * Self::E1 + n.y * Self::E2 + n.z * Self::E3
    }

    /// Projection onto the grade-k part.
    pub fn grade(&self, k: usize) -> Self {
        let mut out = Self::ZERO;
        for (i, &c) in self.coeffs.iter().enumerate() {
            if ga::grade(i) == k {
                out.coeffs[i] = c;
            }
        }
        out
    }

    pub fn reverse(&self) -> Self {
        let mut out = *self;
        for (i, c) in out.coeffs.iter_mut().enumerate() {
            *c *= ga::reverse_sign(i);
        }
        out
    }

    /// ⟨M M̃⟩₀. Blades containing e0 contribute nothing under the
    /// degenerate metric.
    pub fn norm_squared(&self) -> f64 {
        let mut out = [0.0; BLADES];
        geometric_product_full(&self.coeffs, &self.reverse().coeffs, &mut out);
        out[blade::S]
    }

    pub fn norm(&self) -> f64 {
        self.norm_squared().abs().sqrt()
    }

    /// `M / ‖M‖`. A null value yields NaN coefficients.
    pub fn normalized(&self) -> Self {
        *self / self.norm()
    }

    /// Versor inverse `M̃ / ⟨M M̃⟩₀`, exact for blades and products of
    /// invertible vectors.
    pub fn inverse(&self) -> Self {
        self.reverse() / self.norm_squared()
    }

    pub fn approx_eq(&self, other: &Self, eps: f64) -> bool {
        self.coeffs
            .iter()
            .zip(other.coeffs.iter())
            .all(|(a, b)| (a - b).abs() < eps)
    }
}

impl Index<usize> for Multivector {
    type Output = f64;
    fn index(&self, index: usize) -> &f64 {
        &self.coeffs[index]
    }
}

impl fmt::Display for Multivector {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut wrote = false;
        for (i, &c) in self.coeffs.iter().enumerate() {
            if c == 0.0 {
                continue;
            }
            if wrote {
                write!(f, " + ")?;
            }
            if i == blade::S {
                write!(f, "{}", c)?;
            } else {
                write!(f, "{}{}", c, ga::BLADE_NAMES[i])?;
            }
            wrote = true;
        }
        if !wrote {
            write!(f, "0")?;
        }
        Ok(())
    }
}

impl Neg for Multivector {
    type Output = Multivector;
    fn neg(self) -> Multivector {
        -1.0 * self
    }
}

impl Add for Multivector {
    type Output = Multivector;
    fn add(self, rhs: Multivector) -> Multivector {
        let mut out = self;
        for (c, r) in out.coeffs.iter_mut().zip(rhs.coeffs.iter()) {
            *c += r;
        }
        out
    }
}

impl Sub for Multivector {
    type Output = Multivector;
    fn sub(self, rhs: Multivector) -> Multivector {
        self + -rhs
    }
}

impl Add<f64> for Multivector {
    type Output = Multivector;
    fn add(self, rhs: f64) -> Multivector {
        self + Multivector::scalar(rhs)
    }
}

impl Add<Multivector> for f64 {
    type Output = Multivector;
    fn add(self, rhs: Multivector) -> Multivector {
        Multivector::scalar(self) + rhs
    }
}

impl Sub<f64> for Multivector {
    type Output = Multivector;
    fn sub(self, rhs: f64) -> Multivector {
        self + Multivector::scalar(-rhs)
    }
}

impl Sub<Multivector> for f64 {
    type Output = Multivector;
    fn sub(self, rhs: Multivector) -> Multivector {
        Multivector::scalar(self) - rhs
    }
}

impl Mul for Multivector {
    type Output = Multivector;
    fn mul(self, rhs: Multivector) -> Multivector {
        let mut out = [0.0; BLADES];
        geometric_product_full(&self.coeffs, &rhs.coeffs, &mut out);
        Multivector { coeffs: out }
    }
}

impl Mul<f64> for Multivector {
    type Output = Multivector;
    fn mul(self, rhs: f64) -> Multivector {
        let mut out = self;
        for c in out.coeffs.iter_mut() {
            *c *= rhs;
        }
        out
    }
}

impl Mul<Multivector> for f64 {
    type Output = Multivector;
    fn mul(self, rhs: Multivector) -> Multivector {
        rhs * self
    }
}

impl Div<f64> for Multivector {
    type Output = Multivector;
    fn div(self, rhs: f64) -> Multivector {
        let mut out = self;
        for c in out.coeffs.iter_mut() {
            *c /= rhs;
        }
        out
    }
}

impl Div for Multivector {
    type Output = Multivector;
    fn div(self, rhs: Multivector) -> Multivector {
        self * rhs.inverse()
    }
}

impl From<&crate::Plane> for Multivector {
    fn from(p: &crate::Plane) -> Self {
        let mut out = Self::ZERO;
        out.coeffs[blade::E0] = p.vector[0];
        out.coeffs[blade::E1] = p.vector[1];
        out.coeffs[blade::E2] = p.vector[2];
        out.coeffs[blade::E3] = p.vector[3];
        out
    }
}

impl From<&crate::Point> for Multivector {
    fn from(p: &crate::Point) -> Self {
        let t = p.trivector;
        let mut out = Self::ZERO;
        out.coeffs[blade::E123] = t[0];
        out.coeffs[blade::E023] = -t[1];
        out.coeffs[blade::E013] = t[2];
        out.coeffs[blade::E012] = -t[3];
        out
    }
}

impl From<&crate::Line> for Multivector {
    fn from(l: &crate::Line) -> Self {
        let mut out = Self::ZERO;
        out.coeffs[blade::E01] = l.v_bivector[0];
        out.coeffs[blade::E02] = l.v_bivector[1];
        out.coeffs[blade::E03] = l.v_bivector[2];
        out.coeffs[blade::E23] = l.e_bivector[0];
        out.coeffs[blade::E13] = -l.e_bivector[1];
        out.coeffs[blade::E12] = l.e_bivector[2];
        out
    }
}

impl From<&crate::Motor> for Multivector {
    fn from(m: &crate::Motor) -> Self {
        let mut out = Self::ZERO;
        out.coeffs[blade::S] = m.scalar;
        out.coeffs[blade::E01] = m.v_bivector[0];
        out.coeffs[blade::E02] = m.v_bivector[1];
        out.coeffs[blade::E03] = m.v_bivector[2];
        out.coeffs[blade::E23] = m.e_bivector[0];
        out.coeffs[blade::E13] = -m.e_bivector[1];
        out.coeffs[blade::E12] = m.e_bivector[2];
        out.coeffs[blade::E0123] = m.pseudo;
        out
    }
}

impl From<&crate::Rotor> for Multivector {
    fn from(r: &crate::Rotor) -> Self {
        Self::from(&crate::Motor::from(r))
    }
}

impl From<&crate::Translator> for Multivector {
    fn from(t: &crate::Translator) -> Self {
        Self::from(&crate::Motor::from(t))
    }
}
