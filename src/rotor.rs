// src/rotor.rs

use crate::vector::Vec3;

/// A rotation versor about an axis through the origin: scalar plus
/// euclidean bivector.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rotor {
    pub scalar: f64,
    pub e_bivector: [f64; 3],
}

impl Rotor {
    /// The rotor rotating by `angle` radians about `axis` (normalized
    /// here, so only its direction matters).
    pub fn new(angle: f64, axis: &[f64; 3]) -> Self {
        let axis = Vec3::new(axis[0], axis[1], axis[2]).normalized();
        let ha = 0.5 * angle;
        let sha = ha.sin();
        Self {
            scalar: ha.cos(),
            e_bivector: [-sha * axis.x, -sha * axis.y, -sha * axis.z],
        }
    }

    /// Creates a rotor out of a base transformation (e.g., matrix columns).
    /// The base vectors must be normalized and orthogonal to each other;
    /// if they are not, an invalid rotor is returned rather than an error.
    // TODO: derive this from two line correspondences instead of three
    // point pairs.
    pub fn from_base(e1: &[f64; 3], e2: &[f64; 3], e3: &[f64; 3]) -> Self {
        let e1_ = super::Point::new(e1);
        let e2_ = super::Point::new(e2);
        let e3_ = super::Point::new(e3);
        super::Motor::from_point_correspondences(
            &super::Point::x(),
            &e1_,
            &super::Point::y(),
            &e2_,
            &super::Point::z(),
            &e3_,
        )
        .into_rotor_unchecked()
    }

    pub fn norm(&self) -> f64 {
        let e = self.e_bivector;
        (e[0] * e[0] + e[1] * e[1] + e[2] * e[2] + self.scalar * self.scalar).sqrt()
    }

    pub fn normalize(&self) -> Self {
        let fac = 1.0 / self.norm();
        let e = self.e_bivector;
        Self {
            scalar: self.scalar * fac,
            e_bivector: [e[0] * fac, e[1] * fac, e[2] * fac],
        }
    }

    /// The rotor rotating by half the angle.
    pub fn sqrt(&self) -> Self {
        let s = self.scalar;
        let e = self.e_bivector;
        let fac = 2.0f64.sqrt() / (2.0 * (s + 1.0).sqrt());
        Self {
            scalar: 0.5 * (2.0 * s + 2.0).sqrt(),
            e_bivector: [e[0] * fac, e[1] * fac, e[2] * fac],
        }
    }

    pub fn apply_to_point(&self, p: &super::Point) -> super::Point {
        let p = p.trivector;
        let e = self.e_bivector;
        let s = self.scalar;
        super::Point {
            trivector: [
                e[0] * e[0] * p[0] + e[1] * e[1] * p[0] + e[2] * e[2] * p[0] + p[0] * s * s,
                e[0] * (e[0] * p[1] + e[1] * p[2] + e[2] * p[3])
                    - e[1] * (-e[0] * p[2] + e[1] * p[1] + p[3] * s)
                    + e[2] * (e[0] * p[3] - e[2] * p[1] + p[2] * s)
                    + s * (-e[1] * p[3] + e[2] * p[2] + p[1] * s),
                e[0] * (-e[0] * p[2] + e[1] * p[1] + p[3] * s)
                    + e[1] * (e[0] * p[1] + e[1] * p[2] + e[2] * p[3])
                    - e[2] * (-e[1] * p[3] + e[2] * p[2] + p[1] * s)
                    + s * (e[0] * p[3] - e[2] * p[1] + p[2] * s),
                -e[0] * (e[0] * p[3] - e[2] * p[1] + p[2] * s)
                    + e[1] * (-e[1] * p[3] + e[2] * p[2] + p[1] * s)
                    + e[2] * (e[0] * p[1] + e[1] * p[2] + e[2] * p[3])
                    + s * (-e[0] * p[2] + e[1] * p[1] + p[3] * s),
            ],
        }
    }

    pub fn mul_translator(&self, t: &super::Translator) -> super::Motor {
        let ts = t.scalar;
        let tv = t.v_bivector;
        let rs = self.scalar;
        let re = self.e_bivector;
        super::Motor {
            scalar: rs * ts,
            pseudo: re[0] * tv[0] + re[1] * tv[1] + re[2] * tv[2],
            e_bivector: [re[0] * ts, re[1] * ts, re[2] * ts],
            v_bivector: [
                -re[1] * tv[2] + re[2] * tv[1] + rs * tv[0],
                re[0] * tv[2] - re[2] * tv[0] + rs * tv[1],
                -re[0] * tv[1] + re[1] * tv[0] + rs * tv[2],
            ],
        }
    }
}

impl From<&Rotor> for [f64; 4] {
    fn from(r: &Rotor) -> [f64; 4] {
        [r.scalar, r.e_bivector[0], r.e_bivector[1], r.e_bivector[2]]
    }
}
