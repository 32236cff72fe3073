//! Error types for tensr

use thiserror::Error;

/// Result type alias using tensr's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in tensr operations
#[derive(Error, Debug)]
pub enum Error {
    /// Aligned buffer allocation failed
    #[error("Unable to allocate memory: {reason}")]
    Internal {
        /// Allocator failure description
        reason: String,
    },

    /// Shape product does not match the supplied data length
    #[error("Shape {shape:?} has product {product} which does not match data length {len}")]
    ShapeDataMismatch {
        /// The rejected shape
        shape: Vec<usize>,
        /// Product of the shape's dimensions
        product: usize,
        /// Length of the supplied data
        len: usize,
    },

    /// Elementwise operands must have identical shapes
    #[error("Expected shapes {lhs:?} and {rhs:?} to be equal")]
    ShapeMismatch {
        /// Left-hand side shape
        lhs: Vec<usize>,
        /// Right-hand side shape
        rhs: Vec<usize>,
    },

    /// Shape has rank 0 or a zero-sized dimension
    #[error("Shape {shape:?} must have rank >= 1 and positive dimensions")]
    InvalidShape {
        /// The rejected shape
        shape: Vec<usize>,
    },

    /// Inner product operands have different leading (batch) shapes
    #[error("{lhs:?} and {rhs:?} must have the same leading shape")]
    BatchMismatch {
        /// Left-hand side shape
        lhs: Vec<usize>,
        /// Right-hand side shape
        rhs: Vec<usize>,
    },

    /// Inner product contraction dimensions do not agree
    #[error("Tensors of shape {lhs:?} and {rhs:?} are not compatible for inner product, {left} != {right}")]
    DimensionMismatch {
        /// Left-hand side shape
        lhs: Vec<usize>,
        /// Right-hand side shape
        rhs: Vec<usize>,
        /// Contraction size taken from the left-hand side
        left: usize,
        /// Contraction size taken from the right-hand side
        right: usize,
    },
}

impl Error {
    /// Create an internal allocation error
    pub fn internal(reason: impl Into<String>) -> Self {
        Self::Internal {
            reason: reason.into(),
        }
    }

    /// Create a shape/data length mismatch error
    pub fn shape_data_mismatch(shape: &[usize], len: usize) -> Self {
        Self::ShapeDataMismatch {
            shape: shape.to_vec(),
            product: shape.iter().product(),
            len,
        }
    }

    /// Create an elementwise shape mismatch error
    pub fn shape_mismatch(lhs: &[usize], rhs: &[usize]) -> Self {
        Self::ShapeMismatch {
            lhs: lhs.to_vec(),
            rhs: rhs.to_vec(),
        }
    }

    /// Create an invalid shape error
    pub fn invalid_shape(shape: &[usize]) -> Self {
        Self::InvalidShape {
            shape: shape.to_vec(),
        }
    }

    /// Create a leading (batch) shape mismatch error
    pub fn batch_mismatch(lhs: &[usize], rhs: &[usize]) -> Self {
        Self::BatchMismatch {
            lhs: lhs.to_vec(),
            rhs: rhs.to_vec(),
        }
    }

    /// Create a contraction dimension mismatch error
    pub fn dimension_mismatch(lhs: &[usize], rhs: &[usize], left: usize, right: usize) -> Self {
        Self::DimensionMismatch {
            lhs: lhs.to_vec(),
            rhs: rhs.to_vec(),
            left,
            right,
        }
    }
}
