//! Ant Colony Optimization for the symmetric Traveling Salesman Problem.

pub mod aco;
