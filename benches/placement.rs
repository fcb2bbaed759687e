//! Benchmarks for placement lookups at varying set sizes.

use berth::{Blake3, Mix64, NodeSet, Scorer};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

/// Deterministic id stream (64-bit LCG) so runs stay comparable.
fn node_ids(count: usize) -> Vec<u64> {
    let mut ids = Vec::with_capacity(count);
    let mut state: u64 = 0x9e37_79b9_7f4a_7c15;
    for _ in 0..count {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ids.push(state);
    }
    ids
}

fn bench_node_for(c: &mut Criterion) {
    let mut group = c.benchmark_group("node_for");

    for &size in &[4usize, 16, 64, 256] {
        let set = NodeSet::from_nodes(node_ids(size)).unwrap();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &set, |b, set| {
            let mut item = 0u64;
            b.iter(|| {
                item = item.wrapping_add(1);
                *set.node_for(&item).unwrap()
            });
        });
    }

    group.finish();
}

fn bench_ranked(c: &mut Criterion) {
    let mut group = c.benchmark_group("ranked");

    for &size in &[16usize, 64, 256] {
        let set = NodeSet::from_nodes(node_ids(size)).unwrap();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &set, |b, set| {
            let mut item = 0u64;
            b.iter(|| {
                item = item.wrapping_add(1);
                set.ranked(&item, 3).len()
            });
        });
    }

    group.finish();
}

fn bench_scorers(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");
    group.throughput(Throughput::Elements(1));

    group.bench_function("mix64", |b| {
        let mut a = 0u64;
        b.iter(|| {
            a = a.wrapping_add(1);
            Mix64::mix(a)
        });
    });

    group.bench_function("blake3", |b| {
        b.iter(|| Blake3.score(&"node-alpha", &"item-0001"));
    });

    group.finish();
}

criterion_group!(benches, bench_node_for, bench_ranked, bench_scorers);
criterion_main!(benches);
