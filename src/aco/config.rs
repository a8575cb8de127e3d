//! ACO configuration.
//!
//! [`AcoConfig`] holds every parameter that controls the colony loop.

use crate::error::{AcoError, Result};

/// Configuration for the Ant Colony Optimization algorithm.
///
/// # Defaults
///
/// ```
/// use u_aco::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.max_iterations, 100);
/// assert_eq!(config.num_ants, 10);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_aco::aco::AcoConfig;
///
/// let config = AcoConfig::default()
///     .with_num_ants(20)
///     .with_alpha(1.0)
///     .with_beta(3.0)
///     .with_evaporation_rate(0.3)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of iterations (colony generations) to run.
    pub max_iterations: usize,

    /// Number of ants building a path in each iteration.
    pub num_ants: usize,

    /// Pheromone weight `α ≥ 0`. Higher values follow the trail harder.
    pub alpha: f64,

    /// Heuristic weight `β ≥ 0`. Higher values prefer short edges.
    pub beta: f64,

    /// Evaporation rate `ρ` in `[0, 1]`.
    ///
    /// Every iteration each pheromone cell is multiplied by `1 - ρ`.
    pub evaporation_rate: f64,

    /// Deposit scale `Q > 0`. An ant with path length `L` deposits `Q / L`
    /// on each edge it traversed.
    pub deposit_scale: f64,

    /// Iterations without strict improvement before stopping early.
    ///
    /// Set to 0 (the default) to always run the full iteration budget.
    pub stagnation_limit: usize,

    /// Whether to build one iteration's ants in parallel using rayon.
    ///
    /// Has no effect unless the `parallel` feature is enabled. Results are
    /// identical either way for a fixed seed.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            max_iterations: 100,
            num_ants: 10,
            alpha: 1.0,
            beta: 2.0,
            evaporation_rate: 0.5,
            deposit_scale: 100.0,
            stagnation_limit: 0,
            parallel: false,
            seed: None,
        }
    }
}

impl AcoConfig {
    /// Sets the number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the number of ants per iteration.
    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    /// Sets the pheromone weight `α`.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the heuristic weight `β`.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the evaporation rate `ρ`.
    pub fn with_evaporation_rate(mut self, rho: f64) -> Self {
        self.evaporation_rate = rho;
        self
    }

    /// Sets the deposit scale `Q`.
    pub fn with_deposit_scale(mut self, q: f64) -> Self {
        self.deposit_scale = q;
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Enables or disables parallel path construction.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`AcoError::InvalidConfig`] describing the first parameter
    /// found outside its range.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(AcoError::InvalidConfig(
                "max_iterations must be at least 1".into(),
            ));
        }
        if self.num_ants == 0 {
            return Err(AcoError::InvalidConfig("num_ants must be at least 1".into()));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(AcoError::InvalidConfig(format!(
                "alpha must be finite and non-negative, got {}",
                self.alpha
            )));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(AcoError::InvalidConfig(format!(
                "beta must be finite and non-negative, got {}",
                self.beta
            )));
        }
        if !(0.0..=1.0).contains(&self.evaporation_rate) {
            return Err(AcoError::InvalidConfig(format!(
                "evaporation_rate must be in [0, 1], got {}",
                self.evaporation_rate
            )));
        }
        if !self.deposit_scale.is_finite() || self.deposit_scale <= 0.0 {
            return Err(AcoError::InvalidConfig(format!(
                "deposit_scale must be finite and positive, got {}",
                self.deposit_scale
            )));
        }
        Ok(())
    }
}
