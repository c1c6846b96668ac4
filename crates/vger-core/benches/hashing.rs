//! Benchmarks for digest extraction.
//!
//! Measures streaming hash throughput across chunk sizes and the cost of
//! hashing nested members straight out of a container.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::BenchmarkId;
use criterion::Criterion;
use criterion::Throughput;
use criterion::criterion_group;
use criterion::criterion_main;
use std::hint::black_box;
use std::io::Cursor;
use tempfile::TempDir;
use vger_core::DigestAlgorithm;
use vger_core::NoopProgress;
use vger_core::VerifyConfig;
use vger_core::digest::HashBuffer;
use vger_core::digest::hash_reader;
use vger_core::extract_digests;
use vger_core::test_utils::NestedZipBuilder;

const PAYLOAD_SIZE: usize = 8 * 1024 * 1024;

fn payload(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 251) as u8).collect()
}

fn bench_chunk_sizes(c: &mut Criterion) {
    let data = payload(PAYLOAD_SIZE);
    let mut group = c.benchmark_group("hash_reader");
    group.throughput(Throughput::Bytes(data.len() as u64));

    for chunk in [512, 4096, 65536, 1024 * 1024] {
        for algorithm in [DigestAlgorithm::Sha512, DigestAlgorithm::Sha256] {
            group.bench_with_input(
                BenchmarkId::new(algorithm.name(), chunk),
                &chunk,
                |b, &chunk| {
                    let mut buffer = HashBuffer::new(chunk);
                    b.iter(|| {
                        let mut reader = Cursor::new(&data);
                        hash_reader(&mut reader, algorithm, &mut buffer, &mut |_| {}).unwrap()
                    });
                },
            );
        }
    }

    group.finish();
}

fn bench_nested_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_digests");

    for members in [1, 8, 32] {
        let mut builder = NestedZipBuilder::new();
        let data = payload(256 * 1024);
        for i in 0..members {
            builder =
                builder.add_nested(&format!("part-{i:03}.zip"), &[("data.bin", data.as_slice())]);
        }

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("outer.zip");
        let container = builder.build();
        std::fs::write(&path, &container).unwrap();

        group.throughput(Throughput::Bytes(container.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(members), &path, |b, path| {
            let config = VerifyConfig::default();
            b.iter(|| extract_digests(black_box(path), &config, &mut NoopProgress).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_chunk_sizes, bench_nested_extraction);
criterion_main!(benches);
