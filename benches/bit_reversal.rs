use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use ctfft::algorithms::bit_reverse::bit_reverse_permutation;

pub fn bit_reversal(c: &mut Criterion) {
    let mut group = c.benchmark_group("bit_reverse_permutation");

    for n in 10..20 {
        let big_n = 1 << n;
        let mut v: Vec<usize> = (0..big_n).collect();
        group.bench_with_input(criterion::BenchmarkId::new("swap", n), &n, |b, _| {
            b.iter(|| bit_reverse_permutation(black_box(&mut v)))
        });
    }

    group.finish();
}

criterion_group!(benches, bit_reversal);
criterion_main!(benches);
