pub use ant::{roulette_select, Ant, AntState, Exponents};
pub use config::{Config, Origin};
pub use error::Error;
pub use pheromone::PheromoneMatrix;
pub use problem::{DistanceMatrix, Matrix};
pub use report::{Continue, ProgressRecord, ProgressSink, RunSummary};
pub use sim::Simulator;
pub use utils::format_tour;

mod ant;
mod config;
mod error;
mod pheromone;
mod problem;
mod report;
mod sim;
mod utils;
