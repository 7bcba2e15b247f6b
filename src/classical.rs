// src/classical.rs
//! Classical 3×3 matrix baseline, used by the benchmarks and tests to
//! cross-check the GA path.

use crate::vector::Vec3;

/// Apply a 3×3 matrix (row-major) to a vector.
pub fn apply_matrix3(m: &[f64; 9], v: Vec3) -> Vec3 {
    Vec3::new(
        m[0] * v.x + m[1] * v.y + m[2] * v.z,
        m[3] * v.x + m[4] * v.y + m[5] * v.z,
        m[6] * v.x + m[7] * v.y + m[8] * v.z,
    )
}

/// Row-major product `a · b` of two 3×3 matrices.
pub fn multiply_matrices(a: &[f64; 9], b: &[f64; 9]) -> [f64; 9] {
    let mut out = [0.0; 9];
    for i in 0..3 {
        for j in 0..3 {
            let mut acc = 0.0;
            for k in 0..3 {
                acc += a[i * 3 + k] * b[k * 3 + j];
            }
            out[i * 3 + j] = acc;
        }
    }
    out
}

/// Rotation by `angle` radians about the z axis.
pub fn rotation_z(angle: f64) -> [f64; 9] {
    let (s, c) = angle.sin_cos();
    [c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0]
}
