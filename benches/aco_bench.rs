//! Criterion benchmarks for the ant colony solver.
//!
//! Uses synthetic complete graphs (points on a circle) so the cost is
//! pure algorithm overhead.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use u_aco::aco::{AcoConfig, AcoRunner, AntPathBuilder, Graph, PheromoneField};

/// Complete graph over `n` points evenly spaced on a circle.
fn circle_graph(n: usize) -> Graph {
    let points: Vec<(f64, f64)> = (0..n)
        .map(|i| {
            let theta = 2.0 * std::f64::consts::PI * i as f64 / n as f64;
            (100.0 * theta.cos(), 100.0 * theta.sin())
        })
        .collect();
    let rows = points
        .iter()
        .map(|&(xa, ya)| {
            points
                .iter()
                .map(|&(xb, yb)| ((xa - xb).powi(2) + (ya - yb).powi(2)).sqrt())
                .collect()
        })
        .collect();
    Graph::new(rows).expect("circle graph is valid")
}

fn bench_ant_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("ant_build");

    for &n in &[20, 50, 100] {
        let graph = circle_graph(n);
        let field = PheromoneField::new(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &graph, |b, g| {
            let builder = AntPathBuilder::new(g, &field, 1.0, 2.0);
            let mut rng = ChaCha8Rng::seed_from_u64(42);
            b.iter(|| black_box(builder.build(&mut rng)))
        });
    }
    group.finish();
}

fn bench_aco_circle(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco_circle");
    group.sample_size(10);

    for (n, ants, iters) in [(20usize, 10usize, 50usize), (50, 20, 30), (100, 20, 20)] {
        let graph = circle_graph(n);
        let config = AcoConfig {
            num_ants: ants,
            max_iterations: iters,
            seed: Some(42),
            ..AcoConfig::default()
        };
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_a{}_i{}", n, ants, iters), n),
            &(graph, config),
            |b, (g, c)| {
                b.iter(|| {
                    let result = AcoRunner::run(black_box(g), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_ant_build, bench_aco_circle);
criterion_main!(benches);
