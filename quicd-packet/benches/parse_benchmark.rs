//! Benchmarks for the per-datagram decode hot path.
//!
//! Run with: cargo bench -p quicd-packet --bench parse_benchmark

use bytes::Bytes;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use quicd_packet::{extract_dcid, parse, OwnedPacket};

const SHORT_DCID_LEN: usize = 20;

fn initial_datagram() -> Vec<u8> {
    let mut buf = vec![0xc3, 0x00, 0x00, 0x00, 0x01];
    buf.push(20);
    buf.extend_from_slice(&[0x11; 20]);
    buf.push(20);
    buf.extend_from_slice(&[0x22; 20]);
    buf.resize(1200, 0xaa);
    buf
}

fn short_datagram() -> Vec<u8> {
    let mut buf = vec![0x43];
    buf.extend_from_slice(&[0x33; SHORT_DCID_LEN]);
    buf.extend_from_slice(&[0x00, 0x00, 0x01, 0x2c]);
    buf.resize(1350, 0xbb);
    buf
}

/// Benchmark full header decode (per-packet hot path)
fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Elements(1));

    let long = initial_datagram();
    let short = short_datagram();

    group.bench_function("long_initial", |b| {
        b.iter(|| parse(black_box(&long), SHORT_DCID_LEN))
    });

    group.bench_function("short_1rtt", |b| {
        b.iter(|| parse(black_box(&short), SHORT_DCID_LEN))
    });

    group.bench_function("owned_short_1rtt", |b| {
        let datagram = Bytes::from(short.clone());
        b.iter(|| OwnedPacket::decode(black_box(datagram.clone()), SHORT_DCID_LEN))
    });

    group.finish();
}

/// Benchmark DCID extraction (demultiplexing fast path)
fn bench_extract_dcid(c: &mut Criterion) {
    let mut group = c.benchmark_group("extract_dcid");
    group.throughput(Throughput::Elements(1));

    let short = short_datagram();
    let truncated = [0x40u8, 0x01];

    group.bench_function("short_valid", |b| {
        b.iter(|| extract_dcid(black_box(&short), SHORT_DCID_LEN))
    });

    group.bench_function("short_truncated", |b| {
        b.iter(|| extract_dcid(black_box(&truncated), SHORT_DCID_LEN))
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_extract_dcid);
criterion_main!(benches);
