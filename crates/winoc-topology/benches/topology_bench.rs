//! Benchmarks for WiNoC Mesh Topology
//!
//! Measures performance of:
//! - Node id / coordinate conversions
//! - Attachment router selection
//! - Wired and wireless distance
//! - Path cost selection over a whole mesh

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use winoc_topology::{ClusterDims, Coord, MeshDims, NodeId, Topology, TopologyConfig};

fn topology(side: u32) -> Topology {
    let config = TopologyConfig::new(MeshDims::new(side, side), ClusterDims::new(4, 4))
        .with_hub_per_cluster();
    Topology::from_config(&config).expect("bench config is valid")
}

/// Benchmark id -> coord -> id round trip
fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("roundtrip");

    for &side in &[8u32, 64, 256] {
        let t = topology(side);
        let id = NodeId(t.node_count() / 2 + 3);
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::from_parameter(side), &id, |b, &id| {
            b.iter(|| t.coord_to_id(t.id_to_coord(black_box(id))))
        });
    }
    group.finish();
}

/// Benchmark attachment router selection
fn bench_closest_attachment(c: &mut Criterion) {
    let mut group = c.benchmark_group("closest_attachment");
    let t = topology(64);

    let coords = [Coord::ORIGIN, Coord::new(13, 7), Coord::new(63, 63)];
    for coord in coords {
        group.throughput(Throughput::Elements(1));
        group.bench_with_input(BenchmarkId::new("coord", coord), &coord, |b, &c| {
            b.iter(|| t.closest_attachment_point(black_box(c)))
        });
    }
    group.finish();
}

/// Benchmark the two distance metrics
fn bench_distances(c: &mut Criterion) {
    let mut group = c.benchmark_group("distances");
    let t = topology(64);
    let (src, dst) = (NodeId(0), NodeId(t.node_count() - 1));

    group.bench_function("wired", |b| {
        b.iter(|| t.wired_distance_between(black_box(src), black_box(dst)))
    });
    group.bench_function("wireless", |b| {
        b.iter(|| t.wireless_distance(black_box(src), black_box(dst)))
    });
    group.bench_function("path_cost", |b| {
        b.iter(|| t.path_cost(black_box(src), black_box(dst)))
    });
    group.finish();
}

/// Path cost from one source to every node
fn bench_path_cost_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_cost_sweep");
    group.sample_size(50);

    for &side in &[8u32, 32, 64] {
        let t = topology(side);
        group.throughput(Throughput::Elements(t.node_count() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(side), &t, |b, t| {
            b.iter(|| {
                t.nodes()
                    .map(|dst| t.path_cost(NodeId(0), dst).hops)
                    .sum::<u64>()
            })
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_roundtrip,
    bench_closest_attachment,
    bench_distances,
    bench_path_cost_sweep,
);

criterion_main!(benches);
