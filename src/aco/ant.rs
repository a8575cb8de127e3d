//! Probabilistic path construction for a single ant.
//!
//! From the current node `i`, every unvisited neighbor `j` (an edge with
//! `w[i][j] > 0`) gets the desirability
//!
//! ```text
//! τ[i][j]^α · (1 / w[i][j])^β
//! ```
//!
//! and the next node is drawn by roulette-wheel selection over those scores.
//! Nodes without an edge from `i` are never scored.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"

use super::config::AcoConfig;
use super::graph::Graph;
use super::pheromone::PheromoneField;
use super::types::Tour;
use crate::error::{AcoError, Result};
use rand::Rng;

/// Builds complete paths from a graph and a frozen pheromone snapshot.
///
/// The builder only reads its inputs, so several ants may share one
/// builder across threads as long as each brings its own generator.
#[derive(Debug, Clone, Copy)]
pub struct AntPathBuilder<'a> {
    graph: &'a Graph,
    pheromone: &'a PheromoneField,
    alpha: f64,
    beta: f64,
}

impl<'a> AntPathBuilder<'a> {
    /// Creates a builder with explicit pheromone (`alpha`) and heuristic
    /// (`beta`) weights.
    ///
    /// # Panics
    /// Panics if the pheromone field and the graph differ in size.
    pub fn new(graph: &'a Graph, pheromone: &'a PheromoneField, alpha: f64, beta: f64) -> Self {
        assert_eq!(
            graph.node_count(),
            pheromone.node_count(),
            "pheromone field must match the graph size"
        );
        Self {
            graph,
            pheromone,
            alpha,
            beta,
        }
    }

    /// Creates a builder taking `alpha` and `beta` from `config`.
    pub fn from_config(
        graph: &'a Graph,
        pheromone: &'a PheromoneField,
        config: &AcoConfig,
    ) -> Self {
        Self::new(graph, pheromone, config.alpha, config.beta)
    }

    /// Builds one path from a uniformly random start node.
    ///
    /// # Errors
    /// [`AcoError::NoFeasiblePath`] if the ant gets stuck before visiting
    /// every node.
    pub fn build<R: Rng>(&self, rng: &mut R) -> Result<Tour> {
        let start = rng.random_range(0..self.graph.node_count());
        self.build_from(start, rng)
    }

    /// Builds one path starting at `start`.
    ///
    /// # Panics
    /// Panics if `start` is not a node of the graph.
    pub fn build_from<R: Rng>(&self, start: usize, rng: &mut R) -> Result<Tour> {
        let n = self.graph.node_count();
        let mut visited = vec![false; n];
        let mut path = Vec::with_capacity(n);
        let mut candidates = Vec::with_capacity(n);
        let mut length = 0.0;

        let mut current = start;
        visited[current] = true;
        path.push(current);

        while path.len() < n {
            let next = self.select_next(current, &visited, path.len(), &mut candidates, rng)?;
            length += self.graph.weight(current, next);
            visited[next] = true;
            path.push(next);
            current = next;
        }

        Ok(Tour { path, length })
    }

    /// Desirability of moving along an edge of weight `w` with trail `tau`.
    #[inline]
    fn desirability(&self, tau: f64, w: f64) -> f64 {
        let score = tau.powf(self.alpha) * (1.0 / w).powf(self.beta);
        if score.is_nan() {
            0.0
        } else {
            score
        }
    }

    /// Roulette-wheel selection of the next node.
    fn select_next<R: Rng>(
        &self,
        current: usize,
        visited: &[bool],
        visited_count: usize,
        candidates: &mut Vec<(usize, f64)>,
        rng: &mut R,
    ) -> Result<usize> {
        candidates.clear();
        let mut total = 0.0;
        for (j, _) in visited.iter().enumerate().filter(|&(_, &seen)| !seen) {
            let w = self.graph.weight(current, j);
            if w <= 0.0 {
                continue;
            }
            let score = self.desirability(self.pheromone.get(current, j), w);
            candidates.push((j, score));
            total += score;
        }

        if candidates.is_empty() {
            return Err(AcoError::NoFeasiblePath {
                node: current,
                visited: visited_count,
            });
        }

        if total.is_infinite() {
            let dominant: Vec<usize> = candidates
                .iter()
                .filter(|(_, s)| s.is_infinite())
                .map(|&(j, _)| j)
                .collect();
            if !dominant.is_empty() {
                // Overflowing scores dominate everything finite.
                return Ok(dominant[rng.random_range(0..dominant.len())]);
            }
            // Finite scores whose sum overflowed: rescale by the largest.
            let max = candidates.iter().map(|&(_, s)| s).fold(0.0, f64::max);
            total = 0.0;
            for (_, score) in candidates.iter_mut() {
                *score /= max;
                total += *score;
            }
        }
        if total <= 0.0 {
            // Every trail evaporated to zero: no preference left.
            return Ok(candidates[rng.random_range(0..candidates.len())].0);
        }

        let draw = rng.random_range(0.0..total);
        Ok(roulette_pick(candidates, draw))
    }
}

/// Maps a draw in `[0, sum of scores)` to the first candidate whose running
/// score sum exceeds it.
///
/// If rounding leaves the running sum short of the draw, the last candidate
/// is returned. `candidates` must not be empty.
fn roulette_pick(candidates: &[(usize, f64)], draw: f64) -> usize {
    let mut cumulative = 0.0;
    for &(j, score) in candidates {
        cumulative += score;
        if cumulative > draw {
            return j;
        }
    }
    candidates[candidates.len() - 1].0
}
