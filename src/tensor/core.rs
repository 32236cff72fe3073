//! Core Tensor type

use super::layout::Layout;
use super::storage::Storage;
use crate::error::{Error, Result};
use std::fmt;

/// N-dimensional array of f32 elements with lane-padded row storage
///
/// `Tensor` consists of:
/// - **Layout**: the logical shape and the padded shape derived from it
/// - **Storage**: an exclusively owned, lane-aligned buffer sized for the
///   padded shape
///
/// Every logical row occupies `row_stride` elements of storage; the cells
/// between the logical row length and the stride are padding that always
/// holds 0.0 and is never visible through the public API. Producing
/// operations return new independently owned tensors and never mutate their
/// operands.
///
/// # Example
///
/// ```
/// use tensr::Tensor;
///
/// let t = Tensor::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0], &[2, 3]).unwrap();
/// assert_eq!(t.shape(), &[2, 3]);
/// assert_eq!(t.to_vec(), vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
/// ```
pub struct Tensor {
    /// Logical and padded shape
    layout: Layout,
    /// Padded element buffer
    data: Storage,
}

impl Tensor {
    /// Create a tensor from layout and matching storage
    pub(crate) fn from_parts(layout: Layout, data: Storage) -> Self {
        debug_assert_eq!(data.len(), layout.padded_elem_count());
        Self { layout, data }
    }

    /// Create a tensor from a slice of data
    ///
    /// `data` is row-major and unpadded; the product of the `shape`
    /// dimensions must equal `data.len()`.
    ///
    /// # Example
    ///
    /// ```
    /// use tensr::Tensor;
    ///
    /// let t = Tensor::from_slice(&[1.0, 2.0, 3.0, 4.0], &[2, 2]).unwrap();
    /// assert_eq!(t.numel(), 4);
    /// ```
    pub fn from_slice(data: &[f32], shape: &[usize]) -> Result<Self> {
        let layout = Layout::new(shape)?;
        if layout.elem_count() != data.len() {
            return Err(Error::shape_data_mismatch(shape, data.len()));
        }

        let mut storage = Storage::zeroed(layout.padded_elem_count())?;

        let row_len = layout.row_len();
        let stride = layout.row_stride();
        for row in 0..layout.rows() {
            let src = &data[row * row_len..(row + 1) * row_len];
            storage[row * stride..row * stride + row_len].copy_from_slice(src);
        }

        Ok(Self {
            layout,
            data: storage,
        })
    }

    /// Create a tensor from a vector of data
    ///
    /// By-value convenience over [`Self::from_slice`].
    pub fn from_vec(data: Vec<f32>, shape: &[usize]) -> Result<Self> {
        Self::from_slice(&data, shape)
    }

    /// Create a tensor filled with zeros
    pub fn zeros(shape: &[usize]) -> Result<Self> {
        let layout = Layout::new(shape)?;
        let data = Storage::zeroed(layout.padded_elem_count())?;
        Ok(Self { layout, data })
    }

    /// Create a tensor filled with ones
    pub fn ones(shape: &[usize]) -> Result<Self> {
        Self::full(shape, 1.0)
    }

    /// Create a tensor filled with a scalar value
    ///
    /// Only logical cells receive `value`; padding stays zero.
    pub fn full(shape: &[usize], value: f32) -> Result<Self> {
        let mut tensor = Self::zeros(shape)?;

        let row_len = tensor.layout.row_len();
        let stride = tensor.layout.row_stride();
        for row in 0..tensor.layout.rows() {
            tensor.data[row * stride..row * stride + row_len].fill(value);
        }

        Ok(tensor)
    }

    // ===== Accessors =====

    /// Get the layout
    #[inline]
    pub(crate) fn layout(&self) -> &Layout {
        &self.layout
    }

    /// Get the padded buffer
    #[inline]
    pub(crate) fn buf(&self) -> &[f32] {
        &self.data
    }

    /// Get the padded buffer mutably
    #[inline]
    pub(crate) fn buf_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Get the logical shape
    #[inline]
    pub fn shape(&self) -> &[usize] {
        self.layout.shape()
    }

    /// Get the padded shape
    ///
    /// Identical to [`Self::shape`] except for the innermost dimension,
    /// which is rounded up to a multiple of the lane width.
    #[inline]
    pub fn padded_shape(&self) -> &[usize] {
        self.layout.padded_shape()
    }

    /// Get the number of dimensions (rank)
    #[inline]
    pub fn ndim(&self) -> usize {
        self.layout.ndim()
    }

    /// Get the total number of logical elements
    #[inline]
    pub fn numel(&self) -> usize {
        self.layout.elem_count()
    }

    // ===== Data Access =====

    /// Replace this tensor's contents with new data and shape
    ///
    /// Same contract as [`Self::from_slice`]. The replacement buffer is
    /// built first; on any failure the tensor is left exactly as it was.
    pub fn set_data(&mut self, data: &[f32], shape: &[usize]) -> Result<()> {
        *self = Self::from_slice(data, shape)?;
        Ok(())
    }

    /// Reinterpret the tensor's elements under a new shape of equal product
    ///
    /// The padded layout depends on the innermost dimension, so this is
    /// always a full copy through unpadded form, even when the shape is
    /// unchanged.
    pub fn reshape(&mut self, shape: &[usize]) -> Result<()> {
        let data = self.to_vec();
        self.set_data(&data, shape)
    }

    /// Copy the tensor's logical elements into a row-major Vec
    ///
    /// The result is unpadded and independent of the tensor.
    pub fn to_vec(&self) -> Vec<f32> {
        let row_len = self.layout.row_len();
        let stride = self.layout.row_stride();

        let mut out = Vec::with_capacity(self.numel());
        for row in 0..self.layout.rows() {
            let start = row * stride;
            out.extend_from_slice(&self.data[start..start + row_len]);
        }
        out
    }

    /// Read the element at full per-dimension indices
    ///
    /// Returns None if the index count or any index is out of bounds.
    pub fn get(&self, indices: &[usize]) -> Option<f32> {
        let offset = self.layout.index(indices)?;
        Some(self.data[offset])
    }

    /// Duplicate into a freshly allocated tensor
    ///
    /// Fallible form of `clone`: the padded buffer is copied verbatim into
    /// a new aligned allocation, and an allocator refusal is returned as
    /// [`Error::Internal`] instead of panicking.
    pub fn try_clone(&self) -> Result<Self> {
        Ok(Self {
            layout: self.layout.clone(),
            data: self.data.try_clone()?,
        })
    }
}

impl Clone for Tensor {
    /// Clone copies the padded buffer verbatim into a fresh aligned allocation
    fn clone(&self) -> Self {
        match self.try_clone() {
            Ok(copy) => copy,
            Err(err) => panic!("Tensor::clone failed: {}", err),
        }
    }
}

impl fmt::Debug for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Tensor")
            .field("shape", &self.shape())
            .field("padded", &self.padded_shape())
            .field("numel", &self.numel())
            .finish()
    }
}

impl fmt::Display for Tensor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tensor({:?})", self.shape())
    }
}
