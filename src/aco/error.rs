use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("at least 2 cities are required to form a tour, got {0}")]
    NumCities(usize),

    #[error("the colony needs at least one ant")]
    NumAnts,

    #[error("evaporation rate must lie in [0, 1], got {0}")]
    Rho(f64),

    #[error("distance range {min}..={max} must be non-empty and start at 1 or above")]
    DistanceRange { min: u32, max: u32 },

    #[error("deposit scale must be finite and non-negative, got {0}")]
    Deposit(f64),

    #[error("{name} exponent must be finite, got {value}")]
    Exponent { name: &'static str, value: f64 },

    #[error("initial pheromone must be finite and non-negative, got {0}")]
    InitialPheromone(f64),

    #[error("invalid distance matrix: {0}")]
    InvalidDistances(String),
}

pub type Result<T> = std::result::Result<T, Error>;
