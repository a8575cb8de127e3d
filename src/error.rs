//! Error types for ant colony optimization.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AcoError>;

/// Errors raised while building a problem instance or searching it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AcoError {
    /// The weight matrix is malformed (not square, too small, negative,
    /// non-finite, or asymmetric). Raised before any state is built.
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    /// A solver parameter lies outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// An ant reached `node` with no unvisited neighbor left.
    ///
    /// Returned by the runner only when no ant in any iteration managed to
    /// complete a path.
    #[error("no feasible path: stuck at node {node} after visiting {visited} nodes")]
    NoFeasiblePath {
        /// Node the ant was standing on.
        node: usize,
        /// Number of nodes visited so far, including `node`.
        visited: usize,
    },
}
