//! End-of-iteration pheromone update.

use super::config::AcoConfig;
use super::pheromone::PheromoneField;
use super::types::Tour;

/// Evaporates the whole field, then reinforces the edges of completed tours.
///
/// Each tour of length `L` deposits `Q / L` on every edge it traversed, in
/// both directions. Evaporation always runs before the deposits of the same
/// iteration, so fresh deposits are not decayed.
#[derive(Debug, Clone, Copy)]
pub struct PheromoneUpdater {
    evaporation_rate: f64,
    deposit_scale: f64,
}

impl PheromoneUpdater {
    /// Creates an updater with evaporation rate `rho` in `[0, 1]` and
    /// deposit scale `q > 0`.
    pub fn new(rho: f64, q: f64) -> Self {
        Self {
            evaporation_rate: rho,
            deposit_scale: q,
        }
    }

    /// Creates an updater from `config`.
    pub fn from_config(config: &AcoConfig) -> Self {
        Self::new(config.evaporation_rate, config.deposit_scale)
    }

    /// Pheromone deposited per edge by a tour of the given length.
    ///
    /// Zero-length tours deposit nothing; the amount saturates at `f64::MAX`.
    #[inline]
    pub fn deposit_for(&self, length: f64) -> f64 {
        if length > 0.0 {
            (self.deposit_scale / length).min(f64::MAX)
        } else {
            0.0
        }
    }

    /// Applies one iteration's update to `field`.
    pub fn apply(&self, field: &mut PheromoneField, tours: &[Tour]) {
        field.evaporate(self.evaporation_rate);

        for tour in tours {
            let amount = self.deposit_for(tour.length);
            for (from, to) in tour.edges() {
                field.deposit(from, to, amount);
            }
        }
    }
}
