//! Performance benchmarks for the batched inner product
//!
//! Sizes straddle the lane width so both padded and unpadded row strides
//! get measured.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;
use tensr::Tensor;

fn filled(shape: &[usize]) -> Tensor {
    let n: usize = shape.iter().product();
    let data: Vec<f32> = (0..n)
        .map(|i| ((i * 17 + 3) % 1000) as f32 / 1000.0)
        .collect();
    Tensor::from_slice(&data, shape).unwrap()
}

fn bench_inner_product_square(c: &mut Criterion) {
    let mut group = c.benchmark_group("inner_product_square");

    for &size in &[15usize, 16, 63, 64, 128] {
        let a = filled(&[size, size]);
        let b = filled(&[size, size]);

        group.throughput(Throughput::Elements((size * size * size) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", size, size)),
            &(a, b),
            |bench, (a, b)| bench.iter(|| black_box(a.inner_product(black_box(b))).unwrap()),
        );
    }

    group.finish();
}

fn bench_inner_product_batched(c: &mut Criterion) {
    let mut group = c.benchmark_group("inner_product_batched");

    for &batch in &[4usize, 16, 64] {
        let a = filled(&[batch, 32, 32]);
        let b = filled(&[batch, 32, 32]);

        group.throughput(Throughput::Elements((batch * 32 * 32 * 32) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x32x32", batch)),
            &(a, b),
            |bench, (a, b)| bench.iter(|| black_box(a.inner_product(black_box(b))).unwrap()),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_inner_product_square,
    bench_inner_product_batched
);
criterion_main!(benches);
