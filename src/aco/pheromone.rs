//! Pheromone trail intensities.

/// Initial intensity of every trail.
pub const INITIAL_PHEROMONE: f64 = 1.0;

/// Square matrix of pheromone intensities `τ[i][j]`.
///
/// Every cell starts at [`INITIAL_PHEROMONE`]. The only mutations are
/// uniform evaporation and symmetric deposits, so `τ[i][j] == τ[j][i]` and
/// `0 <= τ[i][j] <= f64::MAX` hold at all times.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneField {
    n: usize,
    cells: Vec<f64>,
}

impl PheromoneField {
    /// Creates an `n × n` field with every cell at [`INITIAL_PHEROMONE`].
    pub fn new(n: usize) -> Self {
        Self {
            n,
            cells: vec![INITIAL_PHEROMONE; n * n],
        }
    }

    /// Side length of the matrix.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Intensity on `(i, j)`.
    ///
    /// # Panics
    /// Panics if `i` or `j` is out of range.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.cells[self.index(i, j)]
    }

    /// Multiplies every cell by `1 - rho`.
    ///
    /// `rho` must lie in `[0, 1]`, which keeps every cell non-negative.
    pub fn evaporate(&mut self, rho: f64) {
        debug_assert!((0.0..=1.0).contains(&rho), "rho out of range: {rho}");
        let keep = 1.0 - rho;
        if keep <= 0.0 {
            self.cells.fill(0.0);
            return;
        }
        for cell in &mut self.cells {
            *cell *= keep;
        }
    }

    /// Adds `amount` to both `(i, j)` and `(j, i)`, saturating at `f64::MAX`.
    ///
    /// # Panics
    /// Panics if `i` or `j` is out of range.
    pub fn deposit(&mut self, i: usize, j: usize, amount: f64) {
        debug_assert!(amount >= 0.0, "negative deposit: {amount}");
        let ij = self.index(i, j);
        self.cells[ij] = (self.cells[ij] + amount).min(f64::MAX);
        if i != j {
            let ji = self.index(j, i);
            self.cells[ji] = (self.cells[ji] + amount).min(f64::MAX);
        }
    }

    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.n && j < self.n,
            "pheromone index ({i}, {j}) out of range for {} nodes",
            self.n
        );
        i * self.n + j
    }
}
