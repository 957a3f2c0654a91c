use super::{problem::Matrix, utils::closed_edges};

/// Trail strengths shared by the colony. Every write touches `(a, b)` and
/// `(b, a)` together, so the matrix stays symmetric.
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix(Matrix<f64>);

impl PheromoneMatrix {
    pub fn filled_with(n: usize, value: f64) -> Self {
        Self(Matrix::filled_with(n, value))
    }

    pub fn value(&self, i: usize, j: usize) -> f64 {
        self.0[i][j]
    }

    /// Scales every trail by `1 - rho`.
    pub fn evaporate(&mut self, rho: f64) {
        let factor = 1.0 - rho;
        self.0.update_all(|v| v * factor);
    }

    /// Lays `q / tour_length` on every edge of the closed tour.
    pub fn deposit(&mut self, tour: &[usize], tour_length: f64, q: f64) {
        assert!(
            tour_length > 0.0,
            "deposit on a tour of non-positive length {}",
            tour_length
        );
        let pheromone = q / tour_length;
        for (a, b) in closed_edges(tour) {
            self.0.update(a, b, |v| v + pheromone);
            self.0.update(b, a, |v| v + pheromone);
        }
    }
}
