//! Property-based tests for tensor storage and operations
//!
//! These tests verify invariants that should hold for all valid inputs:
//! padding stays invisible, copy-out inverts construction, and every kernel
//! matches a plain unpadded reference loop exactly.

use proptest::prelude::*;
use tensr::{LANES, Tensor};

/// Strategy for shapes of rank 1..=4 with small positive dimensions
fn small_shape() -> impl Strategy<Value = Vec<usize>> {
    prop::collection::vec(1usize..9, 1..=4)
}

/// Strategy for a shape plus matching row-major data
fn shape_and_data() -> impl Strategy<Value = (Vec<usize>, Vec<f32>)> {
    small_shape().prop_flat_map(|shape| {
        let n: usize = shape.iter().product();
        let data = prop::collection::vec(-100.0f32..100.0, n..=n);
        (Just(shape), data)
    })
}

/// Strategy for two equal-shape data sets
fn shape_and_data_pair() -> impl Strategy<Value = (Vec<usize>, Vec<f32>, Vec<f32>)> {
    small_shape().prop_flat_map(|shape| {
        let n: usize = shape.iter().product();
        let lhs = prop::collection::vec(-100.0f32..100.0, n..=n);
        let rhs = prop::collection::vec(-100.0f32..100.0, n..=n);
        (Just(shape), lhs, rhs)
    })
}

/// Strategy for batched inner product operands: batch dims plus (m, k, n)
fn matmul_operands() -> impl Strategy<Value = (Vec<usize>, usize, usize, usize, Vec<f32>, Vec<f32>)>
{
    (prop::collection::vec(1usize..4, 0..=2), 1usize..6, 1usize..6, 1usize..6).prop_flat_map(
        |(batch, m, k, n)| {
            let batches: usize = batch.iter().product();
            let lhs = prop::collection::vec(-4.0f32..4.0, batches * m * k..=batches * m * k);
            let rhs = prop::collection::vec(-4.0f32..4.0, batches * k * n..=batches * k * n);
            (Just(batch), Just(m), Just(k), Just(n), lhs, rhs)
        },
    )
}

/// Row-major coordinates of logical element `flat` under `shape`
fn coords(shape: &[usize], mut flat: usize) -> Vec<usize> {
    let mut out = vec![0usize; shape.len()];
    for (slot, &dim) in out.iter_mut().zip(shape.iter()).rev() {
        *slot = flat % dim;
        flat /= dim;
    }
    out
}

proptest! {
    /// Copy-out inverts construction for every valid shape
    #[test]
    fn test_round_trip((shape, data) in shape_and_data()) {
        let tensor = Tensor::from_slice(&data, &shape).unwrap();

        prop_assert_eq!(tensor.shape(), &shape[..]);
        prop_assert_eq!(tensor.numel(), data.len());
        prop_assert_eq!(tensor.to_vec(), data);
    }

    /// Only the innermost dimension is padded, up to the next lane multiple
    #[test]
    fn test_padding_rule(shape in small_shape()) {
        let tensor = Tensor::zeros(&shape).unwrap();
        let padded = tensor.padded_shape();

        prop_assert_eq!(padded.len(), shape.len());
        prop_assert_eq!(&padded[..shape.len() - 1], &shape[..shape.len() - 1]);

        let last = shape[shape.len() - 1];
        let padded_last = padded[padded.len() - 1];
        prop_assert!(padded_last >= last);
        prop_assert!(padded_last < last + LANES);
        prop_assert_eq!(padded_last % LANES, 0);
    }

    /// Indexed reads agree with the row-major data order
    #[test]
    fn test_get_matches_row_major((shape, data) in shape_and_data()) {
        let tensor = Tensor::from_slice(&data, &shape).unwrap();

        for (flat, &value) in data.iter().enumerate() {
            let idx = coords(&shape, flat);
            prop_assert_eq!(tensor.get(&idx), Some(value));
        }
    }

    /// Reshape to any same-product shape preserves the row-major stream
    #[test]
    fn test_reshape_preserves_stream((shape, data) in shape_and_data()) {
        let mut tensor = Tensor::from_slice(&data, &shape).unwrap();

        tensor.reshape(&[data.len()]).unwrap();
        prop_assert_eq!(tensor.shape(), &[data.len()][..]);
        prop_assert_eq!(tensor.to_vec(), data);
    }

    /// Clone reads back identically and owns its buffer
    #[test]
    fn test_clone_round_trip((shape, data) in shape_and_data()) {
        let mut original = Tensor::from_slice(&data, &shape).unwrap();
        let copy = original.clone();

        original.set_data(&[0.0], &[1]).unwrap();

        prop_assert_eq!(copy.shape(), &shape[..]);
        prop_assert_eq!(copy.padded_shape().to_vec(), {
            let probe = Tensor::zeros(&shape).unwrap();
            probe.padded_shape().to_vec()
        });
        prop_assert_eq!(copy.to_vec(), data);
    }

    /// Elementwise ops match the plain zip loop exactly
    #[test]
    fn test_elementwise_matches_reference((shape, lhs, rhs) in shape_and_data_pair()) {
        let a = Tensor::from_slice(&lhs, &shape).unwrap();
        let b = Tensor::from_slice(&rhs, &shape).unwrap();

        let reference = |f: fn(f32, f32) -> f32| -> Vec<f32> {
            lhs.iter().zip(&rhs).map(|(&x, &y)| f(x, y)).collect()
        };

        prop_assert_eq!(a.add(&b).unwrap().to_vec(), reference(|x, y| x + y));
        prop_assert_eq!(a.sub(&b).unwrap().to_vec(), reference(|x, y| x - y));
        prop_assert_eq!(a.mul(&b).unwrap().to_vec(), reference(|x, y| x * y));
    }

    /// Addition and multiplication commute
    #[test]
    fn test_elementwise_commutes((shape, lhs, rhs) in shape_and_data_pair()) {
        let a = Tensor::from_slice(&lhs, &shape).unwrap();
        let b = Tensor::from_slice(&rhs, &shape).unwrap();

        prop_assert_eq!(a.add(&b).unwrap().to_vec(), b.add(&a).unwrap().to_vec());
        prop_assert_eq!(a.mul(&b).unwrap().to_vec(), b.mul(&a).unwrap().to_vec());
    }

    /// Scalar identities hold exactly
    #[test]
    fn test_scalar_identities((shape, data) in shape_and_data()) {
        let tensor = Tensor::from_slice(&data, &shape).unwrap();

        prop_assert_eq!(tensor.add_scalar(0.0).unwrap().to_vec(), data.clone());
        prop_assert_eq!(tensor.mul_scalar(1.0).unwrap().to_vec(), data.clone());
        prop_assert_eq!(tensor.div_scalar(1.0).unwrap().to_vec(), data);
    }

    /// Map sees every element once, in row-major order, with its coordinates
    #[test]
    fn test_map_coordinates((shape, data) in shape_and_data()) {
        let tensor = Tensor::from_slice(&data, &shape).unwrap();

        let mut flat = 0usize;
        let mapped = tensor
            .map(|v, loc| {
                assert_eq!(loc, &coords(&shape, flat)[..]);
                flat += 1;
                v + 1.0
            })
            .unwrap();

        prop_assert_eq!(flat, data.len());
        let expected: Vec<f32> = data.iter().map(|&v| v + 1.0).collect();
        prop_assert_eq!(mapped.to_vec(), expected);
    }

    /// Batched inner product matches the naive triple loop exactly
    #[test]
    fn test_inner_product_matches_reference(
        (batch, m, k, n, lhs, rhs) in matmul_operands()
    ) {
        let mut lhs_shape = batch.clone();
        lhs_shape.extend([m, k]);
        let mut rhs_shape = batch.clone();
        rhs_shape.extend([k, n]);

        let a = Tensor::from_slice(&lhs, &lhs_shape).unwrap();
        let b = Tensor::from_slice(&rhs, &rhs_shape).unwrap();
        let c = a.inner_product(&b).unwrap();

        let mut out_shape = batch.clone();
        out_shape.extend([m, n]);
        prop_assert_eq!(c.shape(), &out_shape[..]);

        let batches: usize = batch.iter().product();
        let mut expected = vec![0.0f32; batches * m * n];
        for bi in 0..batches {
            for i in 0..m {
                for j in 0..n {
                    for kk in 0..k {
                        expected[bi * m * n + i * n + j] +=
                            lhs[bi * m * k + i * k + kk] * rhs[bi * k * n + kk * n + j];
                    }
                }
            }
        }
        prop_assert_eq!(c.to_vec(), expected);
    }
}
