// src/point.rs

use rand::Rng;

/// A point, stored as the trivector 1·e123 - x·e032 - y·e013 - z·e021
/// (basis order { e123, e032, e013, e021 }, PGA4CS convention).
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Point {
    pub trivector: [f64; 4],
}

impl Point {
    pub fn new([x, y, z]: &[f64; 3]) -> Self {
        Self {
            trivector: [1.0, -x, -y, -z],
        }
    }

    /// Directions, or points at infinity, have zero for e123.
    pub fn inf([x, y, z]: &[f64; 3]) -> Self {
        Self {
            trivector: [0.0, -x, -y, -z],
        }
    }

    pub fn x() -> Self {
        Self::new(&[1.0, 0.0, 0.0])
    }
    pub fn y() -> Self {
        Self::new(&[0.0, 1.0, 0.0])
    }
    pub fn z() -> Self {
        Self::new(&[0.0, 0.0, 1.0])
    }

    pub fn random() -> Self {
        let mut rng = rand::thread_rng();
        Self::new(&[
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
            rng.gen_range(-10.0..10.0),
        ])
    }

    /// Euclidean coordinates of a normalized point.
    pub fn r3(&self) -> [f64; 3] {
        [-self.trivector[1], -self.trivector[2], -self.trivector[3]]
    }

    pub fn dual(&self) -> super::Plane {
        super::Plane {
            vector: self.trivector,
        }
    }

    pub fn neg(&self) -> Self {
        let t = self.trivector;
        Self {
            trivector: [-t[0], -t[1], -t[2], -t[3]],
        }
    }

    pub fn is_inf(&self) -> bool {
        self.trivector[0].abs() < 1e-9
    }

    /// Scales the homogeneous weight back to one. Points at infinity come
    /// out as NaN/Inf.
    pub fn normalize(&self) -> Self {
        let t = self.trivector;
        let fac = 1.0 / t[0];
        Self {
            trivector: [1.0, t[1] * fac, t[2] * fac, t[3] * fac],
        }
    }

    pub fn is_similar_to(&self, d: f64, other: &Self) -> bool {
        let a = self.normalize().trivector;
        let b = other.normalize().trivector;
        a.iter().zip(b.iter()).all(|(a, b)| (a - b).abs() < d)
    }

    pub fn inverse(&self) -> Self {
        let p = self.trivector;
        let fac = 1.0 / (p[0] * p[0]);
        Self {
            trivector: [-1.0 / p[0], -p[1] * fac, -p[2] * fac, -p[3] * fac],
        }
    }

    /// Geometric product of two points: the translator performing twice the
    /// translation from `other` to `self`.
    pub fn mul(&self, other: &Self) -> super::Translator {
        let p1 = self.trivector;
        let p2 = other.trivector;
        super::Translator {
            scalar: -p1[0] * p2[0],
            v_bivector: [
                -p1[0] * p2[1] + p1[1] * p2[0],
                -p1[0] * p2[2] + p1[2] * p2[0],
                -p1[0] * p2[3] + p1[3] * p2[0],
            ],
        }
    }

    pub fn div(&self, other: &Self) -> super::Translator {
        self.mul(&other.inverse())
    }
}
