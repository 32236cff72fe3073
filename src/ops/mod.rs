//! Tensor operations
//!
//! This module implements the producing operations on [`Tensor`]:
//! elementwise arithmetic (tensor-tensor and tensor-scalar), coordinate-aware
//! mapping, and the batched inner product over the trailing two axes.
//!
//! Every operation validates shapes up front, takes `&self` receivers, and
//! returns a new independently owned tensor; operands are never mutated.
//! Outputs inherit or derive their own padded layout and keep every padding
//! cell at 0.0.
//!
//! [`Tensor`]: crate::tensor::Tensor

mod binary;
mod map;
mod matmul;

pub use binary::BinaryOp;
pub use matmul::{inner_product_shape, validate_inner_product};
