//! SHA-2 digest benchmarks.
//!
//! Run with: cargo bench -p shs-crypto

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use shs_crypto::sha2::{Sha224, Sha256, Sha384, Sha512};

fn bench_sha2(c: &mut Criterion) {
    let mut group = c.benchmark_group("sha2");

    for size in [64usize, 1024, 16384, 1048576] {
        group.throughput(Throughput::Bytes(size as u64));
        let msg = vec![0x42u8; size];

        group.bench_with_input(BenchmarkId::new("sha224", size), &size, |b, _| {
            b.iter(|| Sha224::digest(&msg).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("sha256", size), &size, |b, _| {
            b.iter(|| Sha256::digest(&msg).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("sha384", size), &size, |b, _| {
            b.iter(|| Sha384::digest(&msg).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("sha512", size), &size, |b, _| {
            b.iter(|| Sha512::digest(&msg).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sha2);
criterion_main!(benches);
