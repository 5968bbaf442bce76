//! Criterion micro-benchmarks comparing the kernel strategies.
//!
//! The output vector is re-zeroed every iteration so each measurement
//! covers one reset plus one add, identically across strategies.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lanes_bench::{arena_quad_operands, PAIR_LEFT, PAIR_RIGHT, QUAD_LEFT, QUAD_RIGHT};
use lanes_core::{AlignedPair, AlignedQuad};
use lanes_kernels::{
    add_pair_scalar, add_pair_sse2, add_pair_sse2_aligned, add_quad_avx2, add_quad_avx2_aligned,
    add_quad_scalar,
};

/// Benchmark: 2-lane addition, one lane at a time.
fn bench_pair_manual(c: &mut Criterion) {
    c.bench_function("add_pair_manual", |b| {
        let mut out = [0.0; 2];
        b.iter(|| {
            out = [0.0; 2];
            add_pair_scalar(&PAIR_LEFT, &PAIR_RIGHT, &mut out);
            black_box(out);
        });
    });
}

/// Benchmark: 2-lane addition via unaligned 128-bit loads.
fn bench_pair_sse2(c: &mut Criterion) {
    c.bench_function("add_pair_sse2", |b| {
        let mut out = [0.0; 2];
        b.iter(|| {
            out = [0.0; 2];
            add_pair_sse2(&PAIR_LEFT, &PAIR_RIGHT, &mut out);
            black_box(out);
        });
    });
}

/// Benchmark: 2-lane addition via aligned 128-bit loads on wrapped operands.
fn bench_pair_sse2_aligned(c: &mut Criterion) {
    let l = AlignedPair::new(PAIR_LEFT);
    let r = AlignedPair::new(PAIR_RIGHT);
    c.bench_function("add_pair_sse2_aligned", |b| {
        let mut out = AlignedPair::zeroed();
        b.iter(|| {
            out = AlignedPair::zeroed();
            add_pair_sse2_aligned(&l, &r, &mut out);
            black_box(out);
        });
    });
}

/// Benchmark: 4-lane addition, one lane at a time.
fn bench_quad_manual(c: &mut Criterion) {
    c.bench_function("add_quad_manual", |b| {
        let mut out = [0.0; 4];
        b.iter(|| {
            out = [0.0; 4];
            add_quad_scalar(&QUAD_LEFT, &QUAD_RIGHT, &mut out);
            black_box(out);
        });
    });
}

/// Benchmark: 4-lane addition via unaligned 256-bit loads.
fn bench_quad_avx2(c: &mut Criterion) {
    c.bench_function("add_quad_avx2", |b| {
        let mut out = [0.0; 4];
        b.iter(|| {
            out = [0.0; 4];
            add_quad_avx2(&QUAD_LEFT, &QUAD_RIGHT, &mut out);
            black_box(out);
        });
    });
}

/// Benchmark: 4-lane addition via aligned 256-bit loads on arena-backed
/// operands.
fn bench_quad_avx2_aligned(c: &mut Criterion) {
    let (l, r) = arena_quad_operands().expect("default-capacity arena fits two quads");
    c.bench_function("add_quad_avx2_aligned", |b| {
        let mut out = AlignedQuad::zeroed();
        b.iter(|| {
            out = AlignedQuad::zeroed();
            add_quad_avx2_aligned(&l, &r, &mut out);
            black_box(out);
        });
    });
}

criterion_group!(
    benches,
    bench_pair_manual,
    bench_pair_sse2,
    bench_pair_sse2_aligned,
    bench_quad_manual,
    bench_quad_avx2,
    bench_quad_avx2_aligned
);
criterion_main!(benches);
