//! Batched inner product over the trailing two axes

use crate::error::{Error, Result};
use crate::tensor::{Layout, Shape, Storage, Tensor};

/// Validate operand shapes for an inner product
///
/// `lhs`'s trailing axes form an (m, k) matrix and `rhs`'s a (k, n) matrix;
/// every leading (batch) axis must match exactly, which requires rank >= 2
/// on both sides. Returns (m, k, n).
pub fn validate_inner_product(lhs: &[usize], rhs: &[usize]) -> Result<(usize, usize, usize)> {
    if lhs.len() < 2 || rhs.len() < 2 {
        return Err(Error::batch_mismatch(lhs, rhs));
    }
    if lhs[..lhs.len() - 2] != rhs[..rhs.len() - 2] {
        return Err(Error::batch_mismatch(lhs, rhs));
    }

    let m = lhs[lhs.len() - 2];
    let k = lhs[lhs.len() - 1];
    let n = rhs[rhs.len() - 1];
    if k != rhs[rhs.len() - 2] {
        return Err(Error::dimension_mismatch(lhs, rhs, k, rhs[rhs.len() - 2]));
    }

    Ok((m, k, n))
}

/// Compute the result shape: the shared batch axes followed by (m, n).
pub fn inner_product_shape(lhs: &[usize], rhs: &[usize]) -> Result<Shape> {
    let (m, _, n) = validate_inner_product(lhs, rhs)?;

    let mut shape = Shape::with_capacity(lhs.len());
    for &dim in &lhs[..lhs.len() - 2] {
        shape.push(dim);
    }
    shape.push(m);
    shape.push(n);
    Ok(shape)
}

/// Multiply one (m, k) block of `a` by one (k, n) block of `b`
///
/// Row-major with leading dimensions `lda`/`ldb`/`ldc` in elements. `out`
/// must come in zeroed; every output cell accumulates in ascending
/// contraction order.
#[allow(clippy::too_many_arguments)]
fn matmul_block(
    a: &[f32],
    b: &[f32],
    out: &mut [f32],
    m: usize,
    n: usize,
    k: usize,
    lda: usize,
    ldb: usize,
    ldc: usize,
) {
    // ikj order, ascending kk for each output cell
    for i in 0..m {
        for kk in 0..k {
            let a_val = a[i * lda + kk];
            for j in 0..n {
                out[i * ldc + j] += a_val * b[kk * ldb + j];
            }
        }
    }
}

impl Tensor {
    /// Batched matrix multiplication over the trailing two axes
    ///
    /// `self`'s trailing axes form (m, k) matrices and `rhs`'s form (k, n);
    /// all leading (batch) axes must be identical. The result has shape
    /// batch axes ++ (m, n) and derives its own padded layout. Each operand
    /// is addressed through its own padded row stride, so differently padded
    /// operands combine correctly.
    ///
    /// # Example
    ///
    /// ```
    /// use tensr::Tensor;
    ///
    /// let a = Tensor::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
    /// let b = Tensor::from_slice(&[7.0, 8.0, 9.0, 10.0, 11.0, 12.0], &[3, 2]).unwrap();
    ///
    /// let c = a.inner_product(&b).unwrap();
    /// assert_eq!(c.shape(), &[2, 2]);
    /// assert_eq!(c.to_vec(), vec![58.0, 64.0, 139.0, 154.0]);
    /// ```
    pub fn inner_product(&self, rhs: &Tensor) -> Result<Tensor> {
        let (m, k, n) = validate_inner_product(self.shape(), rhs.shape())?;
        let out_shape = inner_product_shape(self.shape(), rhs.shape())?;

        let layout = Layout::new(&out_shape)?;
        let storage = Storage::zeroed(layout.padded_elem_count())?;
        let mut out = Tensor::from_parts(layout, storage);

        let lda = self.layout().row_stride();
        let ldb = rhs.layout().row_stride();
        let ldc = out.layout().row_stride();
        let batches = self.layout().rows() / m;

        let a = self.buf();
        let b = rhs.buf();
        let out_buf = out.buf_mut();
        for batch in 0..batches {
            matmul_block(
                &a[batch * m * lda..],
                &b[batch * k * ldb..],
                &mut out_buf[batch * m * ldc..],
                m,
                n,
                k,
                lda,
                ldb,
                ldc,
            );
        }

        Ok(out)
    }
}
