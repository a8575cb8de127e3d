//! ACO colony loop execution.
//!
//! [`AcoRunner`] orchestrates the complete search:
//! construct tours → track best → evaporate + deposit → repeat.

use super::ant::AntPathBuilder;
use super::config::AcoConfig;
use super::graph::Graph;
use super::pheromone::PheromoneField;
use super::types::Tour;
use super::updater::PheromoneUpdater;
use crate::error::{AcoError, Result};
use log::{debug, trace};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Result of an ACO run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// Best visiting order found over the whole run.
    pub best_path: Vec<usize>,

    /// Total weight of `best_path`.
    pub best_length: f64,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Zero-based iteration in which `best_path` was found.
    pub best_iteration: usize,

    /// Ants that completed a path, over all iterations.
    pub completed_tours: usize,

    /// Ants that got stuck, over all iterations.
    pub failed_tours: usize,

    /// Number of times the best path was strictly improved.
    pub improvements: usize,

    /// Whether the run stopped early on the stagnation limit.
    pub stagnated: bool,

    /// Best length at the end of each iteration (`+∞` until a path exists).
    pub cost_history: Vec<f64>,
}

/// Executes the Ant Colony Optimization algorithm.
///
/// # Usage
///
/// ```
/// use u_aco::aco::{AcoConfig, AcoRunner, Graph};
///
/// let graph = Graph::from_rows(&[
///     vec![0, 2, 4, 0, 0],
///     vec![2, 0, 1, 5, 0],
///     vec![4, 1, 0, 8, 2],
///     vec![0, 5, 8, 0, 3],
///     vec![0, 0, 2, 3, 0],
/// ]).unwrap();
///
/// let config = AcoConfig::default().with_seed(42);
/// let result = AcoRunner::run(&graph, &config).unwrap();
/// assert_eq!(result.best_path.len(), 5);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs ACO and returns only the best path.
    pub fn find_path(graph: &Graph, config: &AcoConfig) -> Result<Vec<usize>> {
        Self::run(graph, config).map(|result| result.best_path)
    }

    /// Runs ACO optimization.
    ///
    /// # Errors
    ///
    /// - [`AcoError::InvalidConfig`] if `config` fails validation.
    /// - [`AcoError::NoFeasiblePath`] if no ant in any iteration completed
    ///   a path; the last failure observed is returned.
    pub fn run(graph: &Graph, config: &AcoConfig) -> Result<AcoResult> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(rand::random);
        let updater = PheromoneUpdater::from_config(config);
        let mut pheromone = PheromoneField::new(graph.node_count());

        let mut best: Option<Tour> = None;
        let mut last_failure: Option<AcoError> = None;
        let mut cost_history = Vec::with_capacity(config.max_iterations);
        let mut completed_tours = 0usize;
        let mut failed_tours = 0usize;
        let mut improvements = 0usize;
        let mut best_iteration = 0usize;
        let mut iterations = 0usize;
        let mut stagnation_counter = 0usize;
        let mut stagnated = false;

        for iteration in 0..config.max_iterations {
            // Construction phase: ants only read the pheromone field.
            let outcomes = construct_tours(graph, &pheromone, config, seed, iteration);

            let mut completed = Vec::with_capacity(outcomes.len());
            let mut improved = false;
            for (ant, outcome) in outcomes.into_iter().enumerate() {
                match outcome {
                    Ok(tour) => {
                        if best.as_ref().is_none_or(|b| tour.length < b.length) {
                            debug!(
                                "iteration {iteration}: ant {ant} improved best length to {}",
                                tour.length
                            );
                            best = Some(tour.clone());
                            best_iteration = iteration;
                            improvements += 1;
                            improved = true;
                        }
                        completed.push(tour);
                    }
                    Err(err) => {
                        trace!("iteration {iteration}: ant {ant} failed: {err}");
                        failed_tours += 1;
                        last_failure = Some(err);
                    }
                }
            }
            completed_tours += completed.len();

            // Update phase: exclusive access to the field.
            updater.apply(&mut pheromone, &completed);

            iterations = iteration + 1;
            cost_history.push(best.as_ref().map_or(f64::INFINITY, |b| b.length));

            if improved {
                stagnation_counter = 0;
            } else {
                stagnation_counter += 1;
            }
            if config.stagnation_limit > 0 && stagnation_counter >= config.stagnation_limit {
                stagnated = true;
                break;
            }
        }

        let Some(best) = best else {
            debug!("no ant completed a path in {iterations} iterations");
            // A validated config runs at least one ant, and every ant failed,
            // so a failure has been recorded.
            return Err(last_failure.unwrap_or(AcoError::NoFeasiblePath {
                node: 0,
                visited: 0,
            }));
        };

        debug!(
            "finished after {iterations} iterations: best length {} ({completed_tours} completed, {failed_tours} failed)",
            best.length
        );

        Ok(AcoResult {
            best_length: best.length,
            best_path: best.path,
            iterations,
            best_iteration,
            completed_tours,
            failed_tours,
            improvements,
            stagnated,
            cost_history,
        })
    }
}

/// Independent generator for one ant of one iteration.
///
/// Every (iteration, ant) pair gets its own ChaCha stream under the run
/// seed, so results do not depend on construction order.
fn ant_rng(seed: u64, iteration: usize, ant: usize) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(((iteration as u64) << 32) | ant as u64);
    rng
}

/// Build every ant's tour for one iteration.
#[cfg(feature = "parallel")]
fn construct_tours(
    graph: &Graph,
    pheromone: &PheromoneField,
    config: &AcoConfig,
    seed: u64,
    iteration: usize,
) -> Vec<Result<Tour>> {
    use rayon::prelude::*;

    let builder = AntPathBuilder::from_config(graph, pheromone, config);
    let build = |ant: usize| builder.build(&mut ant_rng(seed, iteration, ant));
    if config.parallel {
        (0..config.num_ants).into_par_iter().map(build).collect()
    } else {
        (0..config.num_ants).map(build).collect()
    }
}

/// Build every ant's tour for one iteration.
#[cfg(not(feature = "parallel"))]
fn construct_tours(
    graph: &Graph,
    pheromone: &PheromoneField,
    config: &AcoConfig,
    seed: u64,
    iteration: usize,
) -> Vec<Result<Tour>> {
    let builder = AntPathBuilder::from_config(graph, pheromone, config);
    (0..config.num_ants)
        .map(|ant| builder.build(&mut ant_rng(seed, iteration, ant)))
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
