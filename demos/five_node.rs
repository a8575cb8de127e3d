//! Runs the solver on a fixed 5-node graph and prints the best path.
//!
//! ```text
//! cargo run --example five_node
//! ```

use u_aco::aco::{AcoConfig, AcoRunner, Graph};

fn main() -> u_aco::Result<()> {
    let graph = Graph::from_rows(&[
        vec![0, 2, 4, 0, 0],
        vec![2, 0, 1, 5, 0],
        vec![4, 1, 0, 8, 2],
        vec![0, 5, 8, 0, 3],
        vec![0, 0, 2, 3, 0],
    ])?;

    let config = AcoConfig::default().with_seed(42);
    let result = AcoRunner::run(&graph, &config)?;

    println!("Best path found: {:?}", result.best_path);
    println!(
        "Length: {} (iteration {} of {})",
        result.best_length,
        result.best_iteration + 1,
        result.iterations
    );
    Ok(())
}
