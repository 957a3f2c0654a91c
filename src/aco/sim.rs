use rand::Rng;
use tracing::{debug, info};

use super::{
    ant::{Ant, Exponents},
    config::Config,
    error::Result,
    pheromone::PheromoneMatrix,
    problem::DistanceMatrix,
    report::{Continue, ProgressRecord, ProgressSink, RunSummary},
};

const BEST_TOUR_COST: f64 = f64::MAX;

/// Drives the colony: every iteration each ant builds a tour, trails
/// evaporate, every ant deposits, and the shortest tour is reported.
pub struct Simulator<R> {
    config: Config,
    rng: R,

    // Ant tracking
    ants: Vec<Ant>,
    pheromones: PheromoneMatrix,

    // Best path tracking across the current run
    best_tour_cost: f64,
    best_tour: Vec<usize>,
}

impl<R: Rng> Simulator<R> {
    pub fn new(config: Config, rng: R) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            pheromones: PheromoneMatrix::filled_with(0, config.initial_pheromone),
            ants: Vec::new(),
            config,
            rng,
            best_tour_cost: BEST_TOUR_COST,
            best_tour: Vec::new(),
        })
    }

    pub fn pheromones(&self) -> &PheromoneMatrix {
        &self.pheromones
    }

    /// Generates a fresh distance matrix and runs the whole iteration budget
    /// on it.
    pub fn start<S: ProgressSink + ?Sized>(&mut self, sink: &mut S) -> RunSummary {
        let distances = DistanceMatrix::random(
            self.config.num_cities,
            self.config.distance_range.clone(),
            &mut self.rng,
        );
        self.run_with(&distances, sink)
    }

    /// Runs the iteration budget on `distances`, starting from fresh ants and
    /// fresh trails.
    pub fn run_with<S: ProgressSink + ?Sized>(
        &mut self,
        distances: &DistanceMatrix,
        sink: &mut S,
    ) -> RunSummary {
        self.init(distances.size());
        info!(
            cities = distances.size(),
            ants = self.ants.len(),
            iterations = self.config.max_iterations,
            "starting colony run"
        );

        let mut iterations_completed = 0;
        for iteration in 1..=self.config.max_iterations {
            self.update_ants(distances);
            self.update_pheromones();

            let record = self.find_best_tour(iteration);
            debug!(iteration, best = record.best_tour_length, "iteration complete");
            let next = sink.on_progress(&record);

            self.reset_ants();
            iterations_completed = iteration;

            if next == Continue::No {
                info!(iteration, "run stopped by progress sink");
                break;
            }
        }

        info!(
            iterations_completed,
            best = self.best_tour_cost,
            "colony run finished"
        );

        RunSummary {
            iterations_completed,
            best_tour: self.best_tour.clone(),
            best_tour_length: self.best_tour_cost,
        }
    }

    fn init(&mut self, num_nodes: usize) {
        self.pheromones = PheromoneMatrix::filled_with(num_nodes, self.config.initial_pheromone);
        self.ants = vec![Ant::new(); self.config.num_ants];
        self.best_tour_cost = BEST_TOUR_COST;
        self.best_tour.clear();
    }

    fn update_ants(&mut self, distances: &DistanceMatrix) {
        let exponents = Exponents {
            alpha: self.config.alpha,
            beta: self.config.beta,
        };
        for ant in &mut self.ants {
            ant.construct_tour(
                distances,
                &self.pheromones,
                exponents,
                self.config.origin,
                &mut self.rng,
            );
        }
    }

    fn update_pheromones(&mut self) {
        self.pheromones.evaporate(self.config.rho);
        for ant in &self.ants {
            self.pheromones
                .deposit(ant.tour(), ant.tour_length(), self.config.q);
        }
    }

    fn find_best_tour(&mut self, iteration: usize) -> ProgressRecord {
        let best = index_of_shortest(self.ants.iter().map(Ant::tour_length))
            .and_then(|i| self.ants.get(i))
            .expect("validated colony has at least one ant");

        if best.tour_length() < self.best_tour_cost {
            self.best_tour_cost = best.tour_length();
            self.best_tour = best.tour().to_vec();
        }

        ProgressRecord {
            iteration,
            best_tour_length: best.tour_length(),
        }
    }

    fn reset_ants(&mut self) {
        self.ants.iter_mut().for_each(Ant::reset);
    }
}

/// Position of the smallest length; ties go to the earliest.
fn index_of_shortest(lengths: impl Iterator<Item = f64>) -> Option<usize> {
    lengths
        .enumerate()
        .fold(None, |best: Option<(usize, f64)>, (i, len)| match best {
            Some((_, best_len)) if best_len <= len => best,
            _ => Some((i, len)),
        })
        .map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::aco::{config::Origin, error::Error};

    fn scenario() -> DistanceMatrix {
        DistanceMatrix::from_rows(&[
            vec![0, 1, 2, 3],
            vec![1, 0, 4, 5],
            vec![2, 4, 0, 6],
            vec![3, 5, 6, 0],
        ])
        .unwrap()
    }

    fn collect_run(config: Config, seed: u64) -> (Vec<ProgressRecord>, RunSummary) {
        let mut sim = Simulator::new(config, StdRng::seed_from_u64(seed)).unwrap();
        let mut records = Vec::new();
        let summary = sim.start(&mut |r: &ProgressRecord| {
            records.push(*r);
            Continue::Yes
        });
        (records, summary)
    }

    #[test]
    fn rejects_invalid_config_before_running() {
        let config = Config {
            num_cities: 1,
            ..Config::default()
        };
        assert!(matches!(
            Simulator::new(config, StdRng::seed_from_u64(0)),
            Err(Error::NumCities(1))
        ));
    }

    #[test]
    fn negative_deposit_never_reaches_the_trails() {
        let config = Config {
            num_cities: 5,
            max_iterations: 3,
            q: -100.0,
            ..Config::default()
        };
        assert!(matches!(
            Simulator::new(config, StdRng::seed_from_u64(0)),
            Err(Error::Deposit(_))
        ));
    }

    #[test]
    fn trails_stay_non_negative_over_a_run() {
        let config = Config {
            num_cities: 5,
            max_iterations: 3,
            ..Config::default()
        };
        let mut sim = Simulator::new(config, StdRng::seed_from_u64(0)).unwrap();
        sim.start(&mut |_: &ProgressRecord| Continue::Yes);

        for i in 0..5 {
            for j in 0..5 {
                assert!(sim.pheromones().value(i, j) >= 0.0);
            }
        }
    }

    #[test]
    fn single_ant_single_iteration_scenario() {
        let distances = scenario();
        let config = Config {
            num_ants: 1,
            max_iterations: 1,
            ..Config::default()
        };
        let mut sim = Simulator::new(config, StdRng::seed_from_u64(11)).unwrap();
        let mut records = Vec::new();

        let summary = sim.run_with(&distances, &mut |r: &ProgressRecord| {
            records.push(*r);
            Continue::Yes
        });

        let mut visited = summary.best_tour.clone();
        visited.sort_unstable();
        assert_eq!(visited, vec![0, 1, 2, 3]);
        assert_eq!(summary.best_tour[0], 0);

        let expected = distances.tour_length(&summary.best_tour);
        assert_eq!(
            records,
            vec![ProgressRecord {
                iteration: 1,
                best_tour_length: expected
            }]
        );
        assert_eq!(summary.best_tour_length, expected);
        assert_eq!(summary.iterations_completed, 1);
    }

    #[test]
    fn two_cities_always_report_round_trip() {
        let distances = DistanceMatrix::from_rows(&[vec![0, 7], vec![7, 0]]).unwrap();
        let config = Config {
            num_cities: 2,
            max_iterations: 1,
            ..Config::default()
        };
        let mut sim = Simulator::new(config, StdRng::seed_from_u64(5)).unwrap();
        let mut records = Vec::new();

        let summary = sim.run_with(&distances, &mut |r: &ProgressRecord| {
            records.push(*r);
            Continue::Yes
        });

        assert_eq!(summary.best_tour, vec![0, 1]);
        assert!(records.iter().all(|r| r.best_tour_length == 14.0));

        // 1.0 evaporated by half, then ten ants each lay 100 / 14 twice on the edge.
        let expected = 0.5 + 10.0 * 2.0 * 100.0 / 14.0;
        assert!((sim.pheromones().value(0, 1) - expected).abs() < 1e-9);
        assert_eq!(sim.pheromones().value(0, 1), sim.pheromones().value(1, 0));
    }

    #[test]
    fn records_arrive_in_order_for_whole_budget() {
        let (records, summary) = collect_run(Config::default(), 99);

        assert_eq!(records.len(), 100);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.iteration, i + 1);
            assert!(record.best_tour_length > 0.0);
            assert!(summary.best_tour_length <= record.best_tour_length);
        }
        assert_eq!(summary.iterations_completed, 100);
    }

    #[test]
    fn zero_iterations_emit_nothing() {
        let config = Config {
            max_iterations: 0,
            ..Config::default()
        };
        let (records, summary) = collect_run(config, 1);

        assert!(records.is_empty());
        assert_eq!(summary.iterations_completed, 0);
        assert!(summary.best_tour.is_empty());
    }

    #[test]
    fn seeded_runs_are_reproducible() {
        for origin in [Origin::Fixed, Origin::Random] {
            let config = Config {
                num_cities: 15,
                num_ants: 8,
                max_iterations: 40,
                origin,
                ..Config::default()
            };
            let first = collect_run(config.clone(), 2024);
            let second = collect_run(config, 2024);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn sink_can_stop_between_iterations() {
        let mut sim = Simulator::new(Config::default(), StdRng::seed_from_u64(8)).unwrap();
        let mut seen = 0;

        let summary = sim.start(&mut |r: &ProgressRecord| {
            seen += 1;
            if r.iteration == 3 {
                Continue::No
            } else {
                Continue::Yes
            }
        });

        assert_eq!(seen, 3);
        assert_eq!(summary.iterations_completed, 3);
    }

    #[test]
    fn restart_reinitializes_trails() {
        let distances = scenario();
        let config = Config {
            max_iterations: 1,
            ..Config::default()
        };
        let mut sim = Simulator::new(config, StdRng::seed_from_u64(4)).unwrap();
        let mut sink = |_: &ProgressRecord| Continue::Yes;

        sim.run_with(&distances, &mut sink);
        let after_first = sim.pheromones().clone();
        sim.run_with(&distances, &mut sink);

        // Each run starts from 1.0 and applies one evaporation, so no trail
        // can exceed a single iteration's worth of deposits.
        let bound = 0.5 + 10.0 * 2.0 * 100.0 / 12.0;
        for i in 0..4 {
            for j in 0..4 {
                assert!(after_first.value(i, j) <= bound);
                assert!(sim.pheromones().value(i, j) <= bound);
                assert_eq!(sim.pheromones().value(i, j), sim.pheromones().value(j, i));
            }
        }
    }

    #[test]
    fn shortest_ties_go_to_first() {
        assert_eq!(index_of_shortest([3.0, 2.0, 2.0, 5.0].into_iter()), Some(1));
        assert_eq!(index_of_shortest([4.0].into_iter()), Some(0));
        assert_eq!(index_of_shortest(std::iter::empty()), None);
    }
}
