//! Tensor types
//!
//! This module provides the core `Tensor` type, an n-dimensional array of
//! f32 elements whose innermost dimension is padded to the lane width, plus
//! the `Shape` and `Layout` types that describe it.

mod core;
mod layout;
mod shape;
mod storage;

pub use self::core::Tensor;
pub use layout::{LANES, Layout};
pub use shape::Shape;

pub(crate) use storage::Storage;
