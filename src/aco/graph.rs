//! Weighted undirected graph given as an adjacency matrix.

use crate::error::{AcoError, Result};

/// Immutable, validated edge-weight matrix.
///
/// A weight of `0.0` means "no edge"; the diagonal is expected to be zero.
/// Weights are stored row-major in a single buffer.
///
/// # Examples
///
/// ```
/// use u_aco::aco::Graph;
///
/// let graph = Graph::from_rows(&[
///     vec![0, 2, 4],
///     vec![2, 0, 1],
///     vec![4, 1, 0],
/// ]).unwrap();
///
/// assert_eq!(graph.node_count(), 3);
/// assert_eq!(graph.weight(1, 2), 1.0);
/// assert_eq!(graph.path_length(&[0, 1, 2]), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct Graph {
    n: usize,
    weights: Vec<f64>,
}

impl Graph {
    /// Builds a graph from a square matrix of real weights.
    ///
    /// # Errors
    ///
    /// [`AcoError::InvalidGraph`] if the matrix has fewer than 2 rows, is not
    /// square, holds a negative or non-finite weight, or is not symmetric.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if n < 2 {
            return Err(AcoError::InvalidGraph(format!(
                "at least 2 nodes required, got {n}"
            )));
        }

        let mut weights = Vec::with_capacity(n * n);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n {
                return Err(AcoError::InvalidGraph(format!(
                    "matrix is not square: row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            for (j, &w) in row.iter().enumerate() {
                if !w.is_finite() || w < 0.0 {
                    return Err(AcoError::InvalidGraph(format!(
                        "weight ({i}, {j}) must be finite and non-negative, got {w}"
                    )));
                }
            }
            weights.extend(row);
        }

        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (weights[i * n + j], weights[j * n + i]);
                if a != b {
                    return Err(AcoError::InvalidGraph(format!(
                        "matrix is not symmetric: ({i}, {j}) = {a} but ({j}, {i}) = {b}"
                    )));
                }
            }
        }

        Ok(Self { n, weights })
    }

    /// Builds a graph from rows of any numeric type losslessly convertible
    /// to `f64` (integers up to 32 bits, `f32`, `f64`).
    pub fn from_rows<T: Copy + Into<f64>>(rows: &[Vec<T>]) -> Result<Self> {
        Self::new(
            rows.iter()
                .map(|row| row.iter().map(|&w| w.into()).collect())
                .collect(),
        )
    }

    /// Number of nodes `N`.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Weight of the edge `(i, j)`; `0.0` if there is none.
    ///
    /// # Panics
    /// Panics if `i` or `j` is out of range.
    #[inline]
    pub fn weight(&self, i: usize, j: usize) -> f64 {
        assert!(
            i < self.n && j < self.n,
            "node index ({i}, {j}) out of range for {} nodes",
            self.n
        );
        self.weights[i * self.n + j]
    }

    /// Whether an edge connects `i` and `j`.
    #[inline]
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.weight(i, j) > 0.0
    }

    /// Sum of the weights between consecutive nodes of `path`.
    pub fn path_length(&self, path: &[usize]) -> f64 {
        path.windows(2).map(|w| self.weight(w[0], w[1])).sum()
    }

    /// Copies the matrix back out as rows.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.weights.chunks(self.n).map(<[f64]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<f64>>> for Graph {
    type Error = AcoError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::new(rows)
    }
}

impl From<Graph> for Vec<Vec<f64>> {
    fn from(graph: Graph) -> Self {
        graph.to_rows()
    }
}
