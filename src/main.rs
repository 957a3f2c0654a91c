use std::time::Instant;

use anyhow::Result;
use clap::Parser;
use rand::{rngs::StdRng, SeedableRng};
use tracing_subscriber::EnvFilter;

use tsp_aco_rs::aco::{format_tour, Config, Continue, Origin, ProgressRecord, ProgressSink, Simulator};

#[derive(Parser, Debug)]
#[clap(about, version, author)]
struct Args {
    #[clap(long, default_value_t = 10)]
    num_cities: usize,

    #[clap(long, default_value_t = 10)]
    num_ants: usize,

    #[clap(long, default_value_t = 100)]
    max_iterations: usize,

    /// Weight of trail strength when choosing the next city
    #[clap(long, default_value_t = 1.0)]
    alpha: f64,

    /// Weight of inverse distance when choosing the next city
    #[clap(long, default_value_t = 2.0)]
    beta: f64,

    /// Fraction of every trail lost per iteration, in [0, 1]
    #[clap(long, default_value_t = 0.5)]
    rho: f64,

    /// Pheromone laid per tour, divided by its length
    #[clap(short, long = "deposit", default_value_t = 100.0)]
    q: f64,

    #[clap(long, default_value_t = 1.0)]
    initial_pheromone: f64,

    #[clap(long, default_value_t = 1)]
    min_distance: u32,

    #[clap(long, default_value_t = 100)]
    max_distance: u32,

    /// Start location strategy: "fixed" (city 0) or "random"
    #[clap(long, default_value_t = Origin::Fixed)]
    origin: Origin,

    /// Seed for a reproducible run
    #[clap(short, long)]
    seed: Option<u64>,
}

impl Args {
    fn config(&self) -> Config {
        Config {
            num_cities: self.num_cities,
            num_ants: self.num_ants,
            max_iterations: self.max_iterations,
            alpha: self.alpha,
            beta: self.beta,
            rho: self.rho,
            q: self.q,
            initial_pheromone: self.initial_pheromone,
            distance_range: self.min_distance..=self.max_distance,
            origin: self.origin,
        }
    }
}

struct ConsoleReporter;

impl ProgressSink for ConsoleReporter {
    fn on_progress(&mut self, record: &ProgressRecord) -> Continue {
        println!("{}", progress_line(record));
        Continue::Yes
    }
}

fn progress_line(record: &ProgressRecord) -> String {
    format!(
        "Iteration {}, Best tour length: {:?}",
        record.iteration, record.best_tour_length
    )
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut simulator = Simulator::new(args.config(), rng)?;

    let now = Instant::now();
    let summary = simulator.start(&mut ConsoleReporter);
    let time = now.elapsed();

    if summary.iterations_completed > 0 {
        println!(
            "Best tour of length {} found by visiting:",
            summary.best_tour_length
        );
        println!("{}", format_tour(&summary.best_tour));
    }
    println!("Took {:?}", time);

    Ok(())
}
