//! # tensr
//!
//! **Dense f32 tensors with lane-padded, SIMD-aligned row storage.**
//!
//! Every tensor row is padded up to a multiple of [`LANES`] elements and the
//! backing buffer is allocated on a vector register boundary, so the innermost
//! loop of every kernel runs over whole aligned row chunks. The padding is
//! invisible from the outside: arithmetic, [`Tensor::map`] and
//! [`Tensor::inner_product`] never visit it, and [`Tensor::to_vec`] never
//! copies it out.
//!
//! ## Features
//!
//! - **Storage**: aligned, zero-initialized buffers sized by the padded shape
//! - **Element-wise arithmetic**: add/sub/mul/div against tensors or scalars
//! - **Coordinate-aware map**: recompute values from their logical position
//! - **Inner product**: batched matrix multiplication over the trailing axes
//!
//! ## Quick Start
//!
//! ```
//! use tensr::Tensor;
//!
//! let a = Tensor::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
//! let b = a.mul_scalar(10.0).unwrap();
//! let c = a.add(&b).unwrap();
//!
//! assert_eq!(c.shape(), &[2, 3]);
//! assert_eq!(c.to_vec(), vec![11.0, 22.0, 33.0, 44.0, 55.0, 66.0]);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod ops;
pub mod tensor;

pub use error::{Error, Result};
pub use tensor::{LANES, Shape, Tensor};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::ops::BinaryOp;
    pub use crate::tensor::{LANES, Layout, Shape, Tensor};
}
