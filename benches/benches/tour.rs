// Copyright 2025 the Tourscope Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use kurbo::{Point, Size};
use tourscope_graph::TourGraph;
use tourscope_imaging_ref::RefBackend;
use tourscope_imaging_svg::SvgBackend;
use tourscope_scale::CoordinateMapper;
use tourscope_viewer::{Viewer, ViewerConfig};

#[derive(Clone)]
struct Lcg(u64);

impl Lcg {
    fn next_f64(&mut self) -> f64 {
        // Numerical Recipes LCG parameters.
        self.0 = self.0.wrapping_mul(6364136223846793005).wrapping_add(1);
        (self.0 >> 11) as f64 / (1_u64 << 53) as f64
    }
}

/// `n` random cities in a 10 000 x 10 000 square, visited in index order.
fn random_tour(n: usize, seed: u64) -> (Vec<Point>, Vec<usize>) {
    let mut rng = Lcg(seed);
    let points = (0..n)
        .map(|_| Point::new(rng.next_f64() * 1e4, rng.next_f64() * 1e4))
        .collect();
    let path = (0..n).map(|i| (i + 1) % n).collect();
    (points, path)
}

fn bench_mapping(c: &mut Criterion) {
    let mut group = c.benchmark_group("mapping");
    let extent = Size::new(960.0, 600.0);

    for n in [52_usize, 1_000, 20_000] {
        let (points, path) = random_tour(n, 0x5eed);
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(
            BenchmarkId::new("mapper_from_points", n),
            &points,
            |b, points| {
                b.iter(|| black_box(CoordinateMapper::from_points(black_box(points), extent)));
            },
        );

        group.bench_with_input(BenchmarkId::new("from_tour", n), &n, |b, _| {
            b.iter(|| black_box(TourGraph::from_tour(&points, &path).map(|g| g.len())));
        });

        let graph = TourGraph::from_tour(&points, &path).unwrap_or_default();
        group.bench_with_input(BenchmarkId::new("map_to_extent", n), &graph, |b, graph| {
            b.iter(|| black_box(graph.map_to_extent(extent)));
        });
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    group.sample_size(30);
    let viewer = Viewer::new(&ViewerConfig::default());

    for n in [52_usize, 1_000, 20_000] {
        let (points, path) = random_tour(n, 7);
        let graph = TourGraph::from_tour(&points, &path).unwrap_or_default();
        group.throughput(Throughput::Elements(n as u64));

        group.bench_with_input(BenchmarkId::new("ref_backend", n), &graph, |b, graph| {
            b.iter_batched(
                RefBackend::default,
                |mut backend| {
                    viewer.render(&mut backend, graph);
                    black_box(backend.layer_depth());
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("svg_export", n), &graph, |b, graph| {
            b.iter_batched(
                SvgBackend::default,
                |mut backend| {
                    viewer.render(&mut backend, graph);
                    let size = viewer.size();
                    black_box(backend.to_svg(size.width, size.height).len());
                },
                BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

criterion_group!(benches, bench_mapping, bench_render);
criterion_main!(benches);
