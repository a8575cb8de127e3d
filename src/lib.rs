//! Ant Colony Optimization for minimum-weight Hamiltonian paths.
//!
//! Given an undirected weighted graph as an adjacency matrix (`0` meaning
//! "no edge"), the solver searches for an ordering that visits every node
//! exactly once with the smallest total edge weight. The search is
//! stochastic: it approximates the optimum and offers no optimality
//! guarantee, but a fixed seed always reproduces the same result.
//!
//! # Quick start
//!
//! ```
//! use u_aco::aco::{AcoConfig, AcoRunner, Graph};
//!
//! let graph = Graph::from_rows(&[
//!     vec![0, 2, 4, 0, 0],
//!     vec![2, 0, 1, 5, 0],
//!     vec![4, 1, 0, 8, 2],
//!     vec![0, 5, 8, 0, 3],
//!     vec![0, 0, 2, 3, 0],
//! ])?;
//!
//! let path = AcoRunner::find_path(&graph, &AcoConfig::default().with_seed(42))?;
//! assert_eq!(path.len(), 5);
//! # Ok::<(), u_aco::AcoError>(())
//! ```
//!
//! # Features
//!
//! - `parallel`: builds each iteration's ants concurrently with rayon.
//! - `serde`: serialization for configs, graphs and results.

pub mod aco;
pub mod error;

pub use error::{AcoError, Result};
