// src/prelude.rs
//! The “everything” import:
//! ```rust
//! use pga_engine::prelude::*;
//! ```

// core data types
pub use crate::line::Line;
pub use crate::motor::{Applicable, Motor};
pub use crate::multivector::Multivector;
pub use crate::plane::Plane;
pub use crate::point::Point;
pub use crate::rotor::Rotor;
pub use crate::translator::Translator;
pub use crate::vector::{Rounded, Vec3};

// GA operations
pub use crate::ga::{geometric_product_full, PseudoScalar};
pub use crate::ops::roots::{sqrt, sqrtn, ssqrt};
pub use crate::ops::{inner, interpolation, join, meet};
