// Performance benchmarks for netlog-aggregator
// Run with: cargo bench

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use netlog_aggregator::address::structs::address_key::AddressKey;
use netlog_aggregator::aggregator::enums::network_field::NetworkField;
use netlog_aggregator::aggregator::structs::log_aggregator::LogAggregator;
use netlog_aggregator::index::structs::hash_index::HashIndex;
use netlog_aggregator::record::parser::parse_line;
use rand::RngExt;

fn random_line(networks: u8) -> String {
    let mut rng = rand::rng();
    format!(
        "Jun {} {:02}:{:02}:{:02} 10.{}.{}.{}:{} Failed password for illegal user guest",
        rng.random_range(1..=28),
        rng.random_range(0..24),
        rng.random_range(0..60),
        rng.random_range(0..60),
        rng.random_range(0..networks),
        rng.random::<u8>(),
        rng.random::<u8>(),
        rng.random::<u16>()
    )
}

fn random_lines(count: usize, networks: u8) -> Vec<String> {
    (0..count).map(|_| random_line(networks)).collect()
}

fn bench_hash(c: &mut Criterion) {
    let index: HashIndex<()> = HashIndex::new(1000003).unwrap();
    c.bench_function("fold_hash_address", |b| {
        b.iter(|| black_box(index.hash(black_box("119.232.101.246"))));
    });
}

fn bench_parse_line(c: &mut Criterion) {
    let line = random_line(16);
    c.bench_function("parse_line", |b| {
        b.iter(|| black_box(parse_line(black_box(&line))));
    });
}

fn bench_ingest(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingest_lines");
    for count in [1_000usize, 10_000, 50_000].iter() {
        let lines = random_lines(*count, 64);
        group.bench_with_input(BenchmarkId::from_parameter(count), &lines, |b, lines| {
            b.iter(|| {
                let mut aggregator = LogAggregator::with_capacities(65521, 1000003).unwrap();
                black_box(aggregator.ingest_lines(lines).unwrap());
            });
        });
    }
    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let mut aggregator = LogAggregator::with_capacities(65521, 1000003).unwrap();
    aggregator.ingest_lines(random_lines(20_000, 64)).unwrap();
    let low = AddressKey::parse("10.3.0.0").unwrap();
    let high = AddressKey::parse("10.3.255.255").unwrap();

    let mut group = c.benchmark_group("queries");
    group.bench_function("query_network", |b| {
        b.iter(|| black_box(aggregator.query_network(black_box("10.7"))));
    });
    group.bench_function("query_extreme_networks", |b| {
        b.iter(|| black_box(aggregator.query_extreme_networks(NetworkField::HostCount)));
    });
    group.bench_function("query_host_range", |b| {
        b.iter(|| black_box(aggregator.query_host_range(low, high).len()));
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_hash,
    bench_parse_line,
    bench_ingest,
    bench_queries
);
criterion_main!(benches);
