use rand::Rng;
use tracing::trace;

use super::{config::Origin, pheromone::PheromoneMatrix, problem::DistanceMatrix};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AntState {
    Unstarted,
    Constructing,
    Complete,
}

/// Roulette-wheel weighting parameters shared by every ant.
#[derive(Debug, Clone, Copy)]
pub struct Exponents {
    pub alpha: f64,
    pub beta: f64,
}

#[derive(Debug, Clone)]
pub struct Ant {
    tour: Vec<usize>,
    tour_length: f64,
    state: AntState,
}

impl Default for Ant {
    fn default() -> Self {
        Self::new()
    }
}

impl Ant {
    pub fn new() -> Self {
        Self {
            tour: Vec::new(),
            tour_length: 0.0,
            state: AntState::Unstarted,
        }
    }

    pub fn reset(&mut self) {
        self.tour.clear();
        self.tour_length = 0.0;
        self.state = AntState::Unstarted;
    }

    pub fn tour(&self) -> &[usize] {
        &self.tour
    }

    pub fn tour_length(&self) -> f64 {
        self.tour_length
    }

    pub fn state(&self) -> AntState {
        self.state
    }

    /// Walks a full closed tour over every location, picking each step by
    /// roulette selection. Overwrites whatever the ant held before.
    pub fn construct_tour<R: Rng + ?Sized>(
        &mut self,
        distances: &DistanceMatrix,
        pheromones: &PheromoneMatrix,
        exponents: Exponents,
        origin: Origin,
        rng: &mut R,
    ) {
        let n = distances.size();
        self.reset();
        self.state = AntState::Constructing;

        let start = match origin {
            Origin::Fixed => 0,
            Origin::Random => rng.gen_range(0..n),
        };
        let mut unvisited: Vec<usize> = (0..n).filter(|&i| i != start).collect();
        let mut weights: Vec<(usize, f64)> = Vec::with_capacity(unvisited.len());

        self.tour.reserve(n);
        self.tour.push(start);
        let mut cur = start;

        while !unvisited.is_empty() {
            weights.clear();
            weights.extend(
                unvisited
                    .iter()
                    .map(|&j| (j, edge_weight(distances, pheromones, exponents, cur, j))),
            );
            let total: f64 = weights.iter().map(|&(_, w)| w).sum();
            let r = rng.gen::<f64>() * total;
            let next = roulette_select(&weights, r);

            self.tour.push(next);
            self.tour_length += distances.distance(cur, next) as f64;
            // Order of the remaining candidates drives the roulette walk.
            if let Some(pos) = unvisited.iter().position(|&j| j == next) {
                unvisited.remove(pos);
            }
            cur = next;
        }

        self.tour_length += distances.distance(cur, start) as f64;
        self.state = AntState::Complete;
    }
}

fn edge_weight(
    distances: &DistanceMatrix,
    pheromones: &PheromoneMatrix,
    exponents: Exponents,
    from: usize,
    to: usize,
) -> f64 {
    let distance = distances.distance(from, to);
    assert_ne!(distance, 0, "zero distance between {} and {}", from, to);

    let pheromone = pheromones.value(from, to).powf(exponents.alpha);
    let heuristic = (1.0 / distance as f64).powf(exponents.beta);
    pheromone * heuristic
}

/// Picks the first candidate whose cumulative weight reaches `r`, walking
/// `weights` in order. Falls back to the first candidate when rounding leaves
/// the running sum short of `r`.
///
/// # Panics
///
/// If `weights` is empty.
pub fn roulette_select(weights: &[(usize, f64)], r: f64) -> usize {
    let mut cumulative = 0.0;
    for &(candidate, weight) in weights {
        cumulative += weight;
        if cumulative >= r {
            return candidate;
        }
    }

    trace!(r, cumulative, "roulette walk fell through");
    weights[0].0
}
