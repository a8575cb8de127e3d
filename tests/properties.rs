//! Property-based checks on the colony components.

use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use u_aco::aco::{
    AcoConfig, AcoRunner, AntPathBuilder, Graph, PheromoneField, PheromoneUpdater, Tour,
};

/// Symmetric matrix from upper-triangle weights (`0` = no edge).
fn symmetric(n: usize, upper: &[u32]) -> Vec<Vec<u32>> {
    let mut rows = vec![vec![0u32; n]; n];
    let mut k = 0;
    for i in 0..n {
        for j in (i + 1)..n {
            rows[i][j] = upper[k];
            rows[j][i] = upper[k];
            k += 1;
        }
    }
    rows
}

/// Graphs of 2..8 nodes, possibly with missing edges.
fn sparse_graph() -> impl Strategy<Value = Graph> {
    (2usize..8).prop_flat_map(|n| {
        prop::collection::vec(0u32..10, n * (n - 1) / 2)
            .prop_map(move |upper| Graph::from_rows(&symmetric(n, &upper)).unwrap())
    })
}

/// Complete graphs of 2..8 nodes.
fn complete_graph() -> impl Strategy<Value = Graph> {
    (2usize..8).prop_flat_map(|n| {
        prop::collection::vec(1u32..20, n * (n - 1) / 2)
            .prop_map(move |upper| Graph::from_rows(&symmetric(n, &upper)).unwrap())
    })
}

fn tours(n: usize) -> impl Strategy<Value = Vec<Tour>> {
    let perm = Just((0..n).collect::<Vec<usize>>()).prop_shuffle();
    prop::collection::vec(
        (perm, 0.1f64..100.0).prop_map(|(path, length)| Tour { path, length }),
        0..6,
    )
}

proptest! {
    #[test]
    fn completed_paths_are_permutations(graph in sparse_graph(), seed in any::<u64>()) {
        let n = graph.node_count();
        let field = PheromoneField::new(n);
        let builder = AntPathBuilder::new(&graph, &field, 1.0, 2.0);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);

        for _ in 0..20 {
            if let Ok(tour) = builder.build(&mut rng) {
                let mut sorted = tour.path.clone();
                sorted.sort_unstable();
                prop_assert_eq!(sorted, (0..n).collect::<Vec<_>>());
                for (a, b) in tour.edges() {
                    prop_assert!(graph.has_edge(a, b));
                }
                prop_assert!((tour.length - graph.path_length(&tour.path)).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn complete_graphs_never_fail(graph in complete_graph(), seed in any::<u64>()) {
        let field = PheromoneField::new(graph.node_count());
        let builder = AntPathBuilder::new(&graph, &field, 1.0, 2.0);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        prop_assert!(builder.build(&mut rng).is_ok());
    }

    #[test]
    fn update_keeps_field_non_negative_and_symmetric(
        (n, batches) in (2usize..7).prop_flat_map(|n| (Just(n), prop::collection::vec(tours(n), 1..5))),
        rho in 0.0f64..=1.0,
        q in 0.1f64..500.0,
    ) {
        let mut field = PheromoneField::new(n);
        let updater = PheromoneUpdater::new(rho, q);

        for batch in &batches {
            updater.apply(&mut field, batch);
            for i in 0..n {
                for j in 0..n {
                    prop_assert!(field.get(i, j) >= 0.0);
                    prop_assert_eq!(field.get(i, j), field.get(j, i));
                }
            }
        }
    }

    #[test]
    fn best_length_never_increases(graph in complete_graph(), seed in any::<u64>()) {
        let config = AcoConfig::default()
            .with_max_iterations(20)
            .with_num_ants(5)
            .with_seed(seed);
        let result = AcoRunner::run(&graph, &config).unwrap();

        for window in result.cost_history.windows(2) {
            prop_assert!(window[1] <= window[0]);
        }
        prop_assert_eq!(graph.path_length(&result.best_path), result.best_length);
    }

    #[test]
    fn same_seed_same_result(graph in complete_graph(), seed in any::<u64>()) {
        let config = AcoConfig::default()
            .with_max_iterations(15)
            .with_num_ants(4)
            .with_seed(seed);

        let a = AcoRunner::run(&graph, &config).unwrap();
        let b = AcoRunner::run(&graph, &config).unwrap();
        prop_assert_eq!(a.best_path, b.best_path);
        prop_assert_eq!(a.cost_history, b.cost_history);
    }
}
