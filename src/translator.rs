// src/translator.rs

/// A translation versor: scalar plus vanishing bivector. `new` halves the
/// displacement so that the sandwich product moves points by the full
/// amount.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Translator {
    pub scalar: f64,
    pub v_bivector: [f64; 3],
}

impl Translator {
    pub fn new([t1, t2, t3]: &[f64; 3]) -> Self {
        Self {
            scalar: 1.0,
            v_bivector: [t1 * 0.5, t2 * 0.5, t3 * 0.5],
        }
    }

    /// The translator performing half the translation.
    pub fn sqrt(&self) -> Self {
        let ts = self.scalar;
        let tv = self.v_bivector;
        let fac = 2.0f64.sqrt() / (2.0 * (ts + 1.0).sqrt());
        Self {
            scalar: 0.5 * (2.0 * ts + 2.0).sqrt(),
            v_bivector: [tv[0] * fac, tv[1] * fac, tv[2] * fac],
        }
    }

    pub fn apply_to_point(&self, p: &super::Point) -> super::Point {
        let v = self.v_bivector;
        let s = self.scalar;
        let p = p.trivector;
        super::Point {
            trivector: [
                p[0] * s * s,
                s * (-2.0 * p[0] * v[0] + p[1] * s),
                s * (-2.0 * p[0] * v[1] + p[2] * s),
                s * (-2.0 * p[0] * v[2] + p[3] * s),
            ],
        }
    }

    pub fn mul_rotor(&self, r: &super::Rotor) -> super::Motor {
        let v = self.v_bivector;
        let e = r.e_bivector;
        let ts = self.scalar;
        let rs = r.scalar;
        super::Motor {
            scalar: rs * ts,
            pseudo: e[0] * v[0] + e[1] * v[1] + e[2] * v[2],
            e_bivector: [e[0] * ts, e[1] * ts, e[2] * ts],
            v_bivector: [
                e[1] * v[2] - e[2] * v[1] + rs * v[0],
                -e[0] * v[2] + e[2] * v[0] + rs * v[1],
                e[0] * v[1] - e[1] * v[0] + rs * v[2],
            ],
        }
    }
}
