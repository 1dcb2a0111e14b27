// Fixed-time equality: mismatch at byte 0 vs. mismatch at the last byte should
// land in the same timing band for each payload size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sectok_core::token::{constant_time_eq, SecretToken};

fn bench_ct_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("constant_time_eq");

    for &size in &[32usize, 256, 4096] {
        let secret = vec![b'k'; size];
        let mut first = secret.clone();
        first[0] = b'x';
        let mut last = secret.clone();
        last[size - 1] = b'x';

        group.bench_with_input(BenchmarkId::new("mismatch_first", size), &first, |b, other| {
            b.iter(|| constant_time_eq(black_box(&secret), black_box(other)))
        });
        group.bench_with_input(BenchmarkId::new("mismatch_last", size), &last, |b, other| {
            b.iter(|| constant_time_eq(black_box(&secret), black_box(other)))
        });
        group.bench_with_input(BenchmarkId::new("equal", size), &secret, |b, other| {
            b.iter(|| constant_time_eq(black_box(&secret), black_box(other)))
        });
    }

    group.finish();
}

fn bench_token_equals(c: &mut Criterion) {
    let secret = SecretToken::new(&"k".repeat(64)).unwrap();
    let first = SecretToken::new(&format!("x{}", "k".repeat(63))).unwrap();
    let last = SecretToken::new(&format!("{}x", "k".repeat(63))).unwrap();

    c.bench_function("token_equals/mismatch_first", |b| {
        b.iter(|| black_box(&secret).equals(black_box(&first)))
    });
    c.bench_function("token_equals/mismatch_last", |b| {
        b.iter(|| black_box(&secret).equals(black_box(&last)))
    });
}

criterion_group!(benches, bench_ct_compare, bench_token_equals);
criterion_main!(benches);
