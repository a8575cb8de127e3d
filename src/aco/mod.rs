//! Ant Colony Optimization (ACO).
//!
//! A population-based metaheuristic in which simulated ants build complete
//! visiting orders guided by pheromone trails left by earlier ants. Short
//! paths receive more pheromone, biasing later ants toward them, while
//! evaporation keeps the colony exploring.
//!
//! This implementation searches for a minimum-weight Hamiltonian path (every
//! node visited exactly once, no return to the start) over an undirected
//! weighted graph.
//!
//! # Key Types
//!
//! - [`Graph`]: Validated, immutable adjacency matrix (`0` = no edge)
//! - [`PheromoneField`]: Symmetric trail intensities, all starting at 1.0
//! - [`AntPathBuilder`]: Roulette-wheel construction of one ant's path
//! - [`PheromoneUpdater`]: Evaporation followed by `Q / L` deposits
//! - [`AcoConfig`]: Algorithm parameters (α, β, ρ, Q, ants, iterations)
//! - [`AcoRunner`]: Executes the colony loop and returns an [`AcoResult`]
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod ant;
mod config;
mod graph;
mod pheromone;
mod runner;
mod types;
mod updater;

pub use ant::AntPathBuilder;
pub use config::AcoConfig;
pub use graph::Graph;
pub use pheromone::{PheromoneField, INITIAL_PHEROMONE};
pub use runner::{AcoResult, AcoRunner};
pub use types::Tour;
pub use updater::PheromoneUpdater;
