use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use linkrank::{iterate_rank, sample_rank, LinkGraph, PageRankConfig, SamplingConfig};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Random corpus where every tenth page is dangling
fn random_graph(pages: usize, rng: &mut StdRng) -> LinkGraph {
    let links = (0..pages).map(|i| {
        let targets: Vec<String> = if i % 10 == 0 {
            Vec::new()
        } else {
            (0..rng.gen_range(1..8))
                .map(|_| format!("{}.html", rng.gen_range(0..pages)))
                .collect()
        };
        (format!("{}.html", i), targets)
    });
    LinkGraph::from_links(links.collect::<Vec<_>>())
}

/// Benchmark fixed-point iteration to convergence
fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate_rank");

    for size in [100, 1000, 10_000].iter() {
        let mut rng = StdRng::seed_from_u64(42);
        let graph = random_graph(*size, &mut rng);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let ranks = iterate_rank(&graph, &PageRankConfig::default()).unwrap();
                criterion::black_box(ranks.len());
            });
        });
    }
    group.finish();
}

/// Benchmark a 10k-step random walk
fn bench_sample(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_rank");

    for size in [100, 1000].iter() {
        let mut rng = StdRng::seed_from_u64(42);
        let graph = random_graph(*size, &mut rng);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                let ranks = sample_rank(&graph, &SamplingConfig::default(), &mut rng).unwrap();
                criterion::black_box(ranks.len());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_iterate, bench_sample);
criterion_main!(benches);
