//! # Digest Benchmarks
//!
//! | Operation | Inputs |
//! |-----------|--------|
//! | pad | 0 B .. 64 KiB |
//! | hash_bytes | 0 B .. 64 KiB |
//! | build_output_claim | 1 KiB journal |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use zg_01_digest::{hash_bytes, pad};
use zg_02_claim::{build_output_claim, NO_ASSUMPTIONS};

const SIZES: [usize; 5] = [0, 55, 1024, 16 * 1024, 64 * 1024];

fn bench_padding(c: &mut Criterion) {
    let mut group = c.benchmark_group("zg-01-padding");

    for size in SIZES {
        let data = vec![0xabu8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("pad", size), &data, |b, data| {
            b.iter(|| black_box(pad(data)))
        });
    }

    group.finish();
}

fn bench_hashing(c: &mut Criterion) {
    let mut group = c.benchmark_group("zg-01-hash");

    for size in SIZES {
        let data = vec![0xabu8; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("hash_bytes", size), &data, |b, data| {
            b.iter(|| black_box(hash_bytes(data)))
        });
    }

    group.finish();
}

fn bench_claim(c: &mut Criterion) {
    let journal = vec![7u8; 1024];
    c.bench_function("zg-02-build_output_claim", |b| {
        b.iter(|| black_box(build_output_claim(&journal, NO_ASSUMPTIONS)))
    });
}

criterion_group!(benches, bench_padding, bench_hashing, bench_claim);
criterion_main!(benches);
