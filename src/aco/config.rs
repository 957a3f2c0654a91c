use std::ops::RangeInclusive;

use strum::{Display, EnumString};

use super::error::{Error, Result};

/// Where each ant begins its tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Origin {
    /// Every ant starts at location 0.
    #[default]
    Fixed,
    /// Every ant draws a fresh start location each iteration.
    Random,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub num_cities: usize,
    pub num_ants: usize,
    pub max_iterations: usize,
    /// Pheromone exponent.
    pub alpha: f64,
    /// Inverse-distance exponent.
    pub beta: f64,
    /// Evaporation rate.
    pub rho: f64,
    /// Deposit scale.
    pub q: f64,
    pub initial_pheromone: f64,
    pub distance_range: RangeInclusive<u32>,
    pub origin: Origin,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            num_cities: 10,
            num_ants: 10,
            max_iterations: 100,
            alpha: 1.0,
            beta: 2.0,
            rho: 0.5,
            q: 100.0,
            initial_pheromone: 1.0,
            distance_range: 1..=100,
            origin: Origin::Fixed,
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if self.num_cities < 2 {
            return Err(Error::NumCities(self.num_cities));
        }
        if self.num_ants == 0 {
            return Err(Error::NumAnts);
        }
        if !(0.0..=1.0).contains(&self.rho) {
            return Err(Error::Rho(self.rho));
        }
        let (min, max) = (*self.distance_range.start(), *self.distance_range.end());
        if min == 0 || min > max {
            return Err(Error::DistanceRange { min, max });
        }
        if !self.q.is_finite() || self.q < 0.0 {
            return Err(Error::Deposit(self.q));
        }
        for (name, value) in [("alpha", self.alpha), ("beta", self.beta)] {
            if !value.is_finite() {
                return Err(Error::Exponent { name, value });
            }
        }
        if !self.initial_pheromone.is_finite() || self.initial_pheromone < 0.0 {
            return Err(Error::InitialPheromone(self.initial_pheromone));
        }
        Ok(())
    }
}
