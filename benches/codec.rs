use iai_callgrind::{black_box, library_benchmark, library_benchmark_group, main};
use lehmer::{
    lehmer::{from_lehmer, to_lehmer},
    Permutation,
};
use rand::{rngs::SmallRng, SeedableRng};

// ===== Setup: a reproducible shuffle of 0..n =====
fn shuffled(n: usize) -> Vec<usize> {
    let mut rng = SmallRng::seed_from_u64(123_456);
    Permutation::random(n, &mut rng).into()
}

fn shuffled_code(n: usize) -> Vec<usize> {
    to_lehmer(&shuffled(n)).unwrap_or_default()
}

/// The quadratic definition, for comparison.
fn lehmer_by_definition(perm: &[usize]) -> Vec<usize> {
    (0..perm.len())
        .map(|i| perm[i + 1..].iter().filter(|&&x| x < perm[i]).count())
        .collect()
}

#[library_benchmark]
#[bench::small(args = [1_000], setup = shuffled)]
#[bench::large(args = [100_000], setup = shuffled)]
fn bench_to_lehmer(perm: Vec<usize>) -> usize {
    let code = to_lehmer(black_box(&perm)).unwrap_or_default();
    black_box(code.len())
}

#[library_benchmark]
#[bench::small(args = [1_000], setup = shuffled_code)]
#[bench::large(args = [100_000], setup = shuffled_code)]
fn bench_from_lehmer(code: Vec<usize>) -> usize {
    let perm = from_lehmer(black_box(&code)).unwrap_or_default();
    black_box(perm.len())
}

#[library_benchmark]
#[bench::small(args = [1_000], setup = shuffled)]
#[bench::medium(args = [10_000], setup = shuffled)]
fn bench_by_definition(perm: Vec<usize>) -> usize {
    let code = lehmer_by_definition(black_box(&perm));
    black_box(code.len())
}

library_benchmark_group!(
    name = lehmer_codec;
    benchmarks = bench_to_lehmer, bench_from_lehmer, bench_by_definition
);

main!(library_benchmark_groups = lehmer_codec);
