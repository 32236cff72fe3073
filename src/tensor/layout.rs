//! Layout: logical shape plus the lane-padded shape that governs storage

use super::shape::Shape;
use crate::error::{Error, Result};
use std::fmt;

/// Number of f32 lanes in one vector register row chunk
/// The innermost dimension of every tensor is padded up to a multiple of this
pub const LANES: usize = 8;

/// Round a row length up to the next multiple of the lane width.
#[inline]
fn pad_row(len: usize) -> usize {
    len + ((LANES - len % LANES) % LANES)
}

/// Layout describes where a tensor's logical elements live in its padded buffer
///
/// The logical shape is what callers see. The padded shape is identical except
/// for the innermost dimension, which is rounded up to a multiple of [`LANES`];
/// every logical row therefore starts `row_stride()` elements after the
/// previous one, and the cells between `row_len()` and `row_stride()` are
/// padding that always holds 0.0.
///
/// Address of logical element (row, col): row * row_stride + col
#[derive(Clone, PartialEq, Eq)]
pub struct Layout {
    /// Logical size along each dimension
    shape: Shape,
    /// Storage size along each dimension; only the last may differ from `shape`
    padded: Shape,
}

impl Layout {
    /// Create a layout for a logical shape, deriving the padded shape
    ///
    /// The shape must have rank >= 1 and only positive dimensions.
    ///
    /// # Example
    /// ```
    /// use tensr::tensor::Layout;
    /// let layout = Layout::new(&[2, 3]).unwrap();
    /// assert_eq!(layout.shape(), &[2, 3]);
    /// assert_eq!(layout.padded_shape(), &[2, 8]);
    /// ```
    pub fn new(shape: &[usize]) -> Result<Self> {
        if shape.is_empty() || shape.contains(&0) {
            return Err(Error::invalid_shape(shape));
        }

        let shape: Shape = shape.into();
        let mut padded = shape.clone();
        let last = padded.len() - 1;
        padded[last] = pad_row(padded[last]);

        Ok(Self { shape, padded })
    }

    /// Get the logical shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Get the padded shape
    #[inline]
    pub fn padded_shape(&self) -> &[usize] {
        &self.padded
    }

    /// Number of dimensions (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Total number of logical elements
    #[inline]
    pub fn elem_count(&self) -> usize {
        self.shape.product()
    }

    /// Total number of storage elements, padding included
    #[inline]
    pub fn padded_elem_count(&self) -> usize {
        self.padded.product()
    }

    /// Number of logical rows: the product of all leading dimensions
    #[inline]
    pub fn rows(&self) -> usize {
        self.elem_count() / self.row_len()
    }

    /// Logical length of one row: the innermost dimension
    #[inline]
    pub fn row_len(&self) -> usize {
        self.shape[self.shape.len() - 1]
    }

    /// Storage distance between consecutive rows: the padded innermost dimension
    #[inline]
    pub fn row_stride(&self) -> usize {
        self.padded[self.padded.len() - 1]
    }

    /// Storage offset of logical element (row, col)
    #[inline]
    pub fn offset(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.rows());
        debug_assert!(col < self.row_len());
        row * self.row_stride() + col
    }

    /// Decompose a logical flat index into per-dimension coordinates
    ///
    /// `i` counts logical elements in row-major order, padding excluded.
    /// `out` must have exactly `ndim()` slots.
    pub fn locate(&self, i: usize, out: &mut [usize]) {
        debug_assert_eq!(out.len(), self.ndim());
        debug_assert!(i < self.elem_count());

        let mut rem = i;
        for (slot, &dim) in out.iter_mut().zip(self.shape.iter()).rev() {
            *slot = rem % dim;
            rem /= dim;
        }
    }

    /// Compute the storage offset for full per-dimension indices
    ///
    /// Returns None if the index count or any index is out of bounds.
    pub fn index(&self, indices: &[usize]) -> Option<usize> {
        if indices.len() != self.ndim() {
            return None;
        }

        for (&idx, &dim) in indices.iter().zip(self.shape.iter()) {
            if idx >= dim {
                return None;
            }
        }

        let (&col, lead) = indices.split_last()?;
        let mut row = 0usize;
        for (&idx, &dim) in lead.iter().zip(self.shape.iter()) {
            row = row * dim + idx;
        }

        Some(row * self.row_stride() + col)
    }
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Layout {{ shape: {:?}, padded: {:?} }}",
            self.shape.as_slice(),
            self.padded.as_slice()
        )
    }
}
