//! Higher-level GA operations

pub mod inner;
pub mod interpolation;
pub mod join;
pub mod meet;
pub mod roots;
