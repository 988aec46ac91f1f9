//! Pheromone matrix.

/// Dense n×n matrix of pheromone levels on directed edges.
///
/// A matrix belongs to one colony run; ants deposit along their traversal
/// direction, so a tour and its reverse reinforce different entries.
///
/// # Examples
///
/// ```
/// use u_tsp::aco::PheromoneMatrix;
///
/// let mut tau = PheromoneMatrix::new(3, 1.0);
/// tau.evaporate(0.5);
/// tau.deposit(&[0, 1, 2, 0], 0.25);
/// assert!((tau.get(0, 1) - 0.75).abs() < 1e-12);
/// assert!((tau.get(1, 0) - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneMatrix {
    /// Creates a matrix with every entry set to `initial`.
    pub fn new(size: usize, initial: f64) -> Self {
        Self {
            data: vec![initial; size * size],
            size,
        }
    }

    /// Pheromone on the edge `from → to`.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Multiplies every entry by `1 - rho`.
    pub fn evaporate(&mut self, rho: f64) {
        let keep = 1.0 - rho;
        for tau in &mut self.data {
            *tau *= keep;
        }
    }

    /// Adds `amount` to every consecutive pair `route[i] → route[i + 1]`.
    pub fn deposit(&mut self, route: &[usize], amount: f64) {
        for w in route.windows(2) {
            self.data[w[0] * self.size + w[1]] += amount;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_level() {
        let tau = PheromoneMatrix::new(4, 1.0);
        assert_eq!(tau.size(), 4);
        assert!((0..4).all(|i| (0..4).all(|j| tau.get(i, j) == 1.0)));
    }

    #[test]
    fn test_evaporate_zero_rho_keeps_levels() {
        let mut tau = PheromoneMatrix::new(2, 3.0);
        tau.evaporate(0.0);
        assert_eq!(tau.get(1, 0), 3.0);
    }

    #[test]
    fn test_deposit_is_directed() {
        let mut tau = PheromoneMatrix::new(3, 0.0);
        tau.deposit(&[2, 0, 1, 2], 1.0);
        assert_eq!(tau.get(2, 0), 1.0);
        assert_eq!(tau.get(0, 1), 1.0);
        assert_eq!(tau.get(1, 2), 1.0);
        assert_eq!(tau.get(0, 2), 0.0);
    }
}
