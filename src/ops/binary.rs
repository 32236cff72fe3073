//! Elementwise arithmetic over identically shaped tensors

use crate::error::{Error, Result};
use crate::tensor::Tensor;

/// Binary operation kind
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    /// Addition: a + b
    Add,
    /// Subtraction: a - b
    Sub,
    /// Multiplication: a * b
    Mul,
    /// Division: a / b
    Div,
}

impl BinaryOp {
    /// Apply the operation to one element pair.
    #[inline]
    pub(crate) fn apply(self, a: f32, b: f32) -> f32 {
        match self {
            BinaryOp::Add => a + b,
            BinaryOp::Sub => a - b,
            BinaryOp::Mul => a * b,
            BinaryOp::Div => a / b,
        }
    }
}

/// Combine two identically shaped tensors cell by cell.
///
/// The output starts as a verbatim copy of `lhs`, so its padding cells are
/// already zero; only logical cells are recomputed. Equal shapes imply equal
/// padded shapes, so both operands share every offset.
fn binary_op_impl(lhs: &Tensor, rhs: &Tensor, op: BinaryOp) -> Result<Tensor> {
    if lhs.shape() != rhs.shape() {
        return Err(Error::shape_mismatch(lhs.shape(), rhs.shape()));
    }

    let mut out = lhs.try_clone()?;
    let layout = lhs.layout();
    let row_len = layout.row_len();
    let stride = layout.row_stride();

    let rhs_buf = rhs.buf();
    let out_buf = out.buf_mut();
    for row in 0..layout.rows() {
        let start = row * stride;
        for cell in start..start + row_len {
            out_buf[cell] = op.apply(out_buf[cell], rhs_buf[cell]);
        }
    }

    Ok(out)
}

/// Combine every logical cell of `lhs` with one scalar.
fn scalar_op_impl(lhs: &Tensor, scalar: f32, op: BinaryOp) -> Result<Tensor> {
    let mut out = lhs.try_clone()?;
    let layout = lhs.layout();
    let row_len = layout.row_len();
    let stride = layout.row_stride();

    let out_buf = out.buf_mut();
    for row in 0..layout.rows() {
        let start = row * stride;
        for cell in start..start + row_len {
            out_buf[cell] = op.apply(out_buf[cell], scalar);
        }
    }

    Ok(out)
}

#[allow(clippy::should_implement_trait)] // add/sub/mul/div are fallible, the operator traits are not
impl Tensor {
    /// Element-wise addition: self + rhs
    ///
    /// Both shapes must be exactly equal; there is no broadcasting.
    pub fn add(&self, rhs: &Tensor) -> Result<Tensor> {
        binary_op_impl(self, rhs, BinaryOp::Add)
    }

    /// Element-wise subtraction: self - rhs
    pub fn sub(&self, rhs: &Tensor) -> Result<Tensor> {
        binary_op_impl(self, rhs, BinaryOp::Sub)
    }

    /// Element-wise multiplication: self * rhs
    pub fn mul(&self, rhs: &Tensor) -> Result<Tensor> {
        binary_op_impl(self, rhs, BinaryOp::Mul)
    }

    /// Element-wise division: self / rhs
    ///
    /// Division by zero follows native f32 semantics and yields ±inf or
    /// NaN, never an error.
    pub fn div(&self, rhs: &Tensor) -> Result<Tensor> {
        binary_op_impl(self, rhs, BinaryOp::Div)
    }

    /// Add a scalar to every element: self + scalar
    pub fn add_scalar(&self, scalar: f32) -> Result<Tensor> {
        scalar_op_impl(self, scalar, BinaryOp::Add)
    }

    /// Subtract a scalar from every element: self - scalar
    pub fn sub_scalar(&self, scalar: f32) -> Result<Tensor> {
        scalar_op_impl(self, scalar, BinaryOp::Sub)
    }

    /// Multiply every element by a scalar: self * scalar
    pub fn mul_scalar(&self, scalar: f32) -> Result<Tensor> {
        scalar_op_impl(self, scalar, BinaryOp::Mul)
    }

    /// Divide every element by a scalar: self / scalar
    pub fn div_scalar(&self, scalar: f32) -> Result<Tensor> {
        scalar_op_impl(self, scalar, BinaryOp::Div)
    }
}
