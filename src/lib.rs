#![doc = include_str!("../README.md")]

pub mod classical;
pub mod vector;
pub mod ga;
pub mod multivector;
pub mod plane;
pub mod point;
pub mod line;
pub mod rotor;
pub mod translator;
pub mod motor;
pub mod prelude;

pub mod error;

pub mod ops;

#[cfg(test)]
mod tests_support;

pub use classical::{apply_matrix3, multiply_matrices};
pub use ga::{geometric_product_full, PseudoScalar};
pub use line::Line;
pub use motor::{Applicable, Motor};
pub use multivector::Multivector;
pub use plane::Plane;
pub use point::Point;
pub use rotor::Rotor;
pub use translator::Translator;
pub use vector::{Rounded, Vec3};
