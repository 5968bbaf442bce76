//! Illustrative driver: prints type sizes and before/after vectors for
//! each strategy. Run with `cargo run -p lanes-bench --example vector_add`.

use lanes_bench::{arena_quad_operands, PAIR_LEFT, PAIR_RIGHT, QUAD_LEFT, QUAD_RIGHT};
use lanes_core::{AlignedPair, AlignedQuad};
use lanes_kernels::{
    add_pair_scalar, add_pair_sse2, add_pair_sse2_aligned, add_quad_avx2, add_quad_avx2_aligned,
    add_quad_scalar,
};

fn main() {
    println!("size_of f64:          {}", std::mem::size_of::<f64>());
    println!("size_of [f64; 2]:     {}", std::mem::size_of::<[f64; 2]>());
    println!("size_of [f64; 4]:     {}", std::mem::size_of::<[f64; 4]>());
    println!("size_of AlignedPair:  {}", std::mem::size_of::<AlignedPair>());
    println!("size_of AlignedQuad:  {}", std::mem::size_of::<AlignedQuad>());

    println!("\nSSE2 addition of length 2 vectors");
    let mut out = [0.0; 2];
    println!("  before: {out:?}");
    add_pair_scalar(&PAIR_LEFT, &PAIR_RIGHT, &mut out);
    println!("  manual: {out:?}");

    out = [0.0; 2];
    add_pair_sse2(&PAIR_LEFT, &PAIR_RIGHT, &mut out);
    println!("  sse2:   {out:?}");

    let mut aligned_out = AlignedPair::zeroed();
    add_pair_sse2_aligned(
        &AlignedPair::new(PAIR_LEFT),
        &AlignedPair::new(PAIR_RIGHT),
        &mut aligned_out,
    );
    println!("  sse2 (aligned): {aligned_out}");

    println!("\nAVX2 addition of length 4 vectors");
    let mut out = [0.0; 4];
    println!("  before: {out:?}");
    add_quad_scalar(&QUAD_LEFT, &QUAD_RIGHT, &mut out);
    println!("  manual: {out:?}");

    out = [0.0; 4];
    add_quad_avx2(&QUAD_LEFT, &QUAD_RIGHT, &mut out);
    println!("  avx2:   {out:?}");

    // The strict-alignment route: operands come from 32-byte-aligned
    // arena blocks, not from whatever alignment the stack happened to use.
    let (l, r) = arena_quad_operands().expect("default-capacity arena fits two quads");
    let mut aligned_out = AlignedQuad::zeroed();
    add_quad_avx2_aligned(&l, &r, &mut aligned_out);
    println!("  avx2 (aligned, arena-backed): {aligned_out}");
}
