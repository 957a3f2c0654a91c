use std::ops::RangeInclusive;

use rand::Rng;

pub use matrix::Matrix;

use super::error::{Error, Result};

mod matrix;

/// Symmetric integer cost matrix with a zero diagonal and positive
/// off-diagonal entries. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix(Matrix<u32>);

impl DistanceMatrix {
    /// Draws every off-diagonal pair uniformly from `range` and mirrors it.
    ///
    /// Callers must ensure `n >= 2` and a range starting at 1 or above,
    /// which [`Config::validate`](super::Config::validate) checks.
    pub(crate) fn random<R: Rng + ?Sized>(
        n: usize,
        range: RangeInclusive<u32>,
        rng: &mut R,
    ) -> Self {
        debug_assert!(n >= 2, "a tour needs at least 2 locations, got {}", n);
        debug_assert!(
            *range.start() >= 1 && range.start() <= range.end(),
            "distance range {:?} must be non-empty and positive",
            range
        );
        let mut matrix = Matrix::new(n);
        for i in 0..n {
            for j in i + 1..n {
                let distance = rng.gen_range(range.clone());
                matrix[i][j] = distance;
                matrix[j][i] = distance;
            }
        }
        Self(matrix)
    }

    /// Builds a matrix from explicit rows, rejecting anything a tour could
    /// not be scored against.
    pub fn from_rows(rows: &[Vec<u32>]) -> Result<Self> {
        let n = rows.len();
        if n < 2 {
            return Err(Error::InvalidDistances(format!(
                "need at least 2 locations, got {}",
                n
            )));
        }

        let mut matrix = Matrix::new(n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(Error::InvalidDistances(format!(
                    "row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    n
                )));
            }
            matrix[i].copy_from_slice(row);
        }

        for i in 0..n {
            if matrix[i][i] != 0 {
                return Err(Error::InvalidDistances(format!(
                    "diagonal entry ({0}, {0}) is {1}, expected 0",
                    i, matrix[i][i]
                )));
            }
            for j in i + 1..n {
                if matrix[i][j] != matrix[j][i] {
                    return Err(Error::InvalidDistances(format!(
                        "({0}, {1}) = {2} but ({1}, {0}) = {3}",
                        i, j, matrix[i][j], matrix[j][i]
                    )));
                }
                if matrix[i][j] == 0 {
                    return Err(Error::InvalidDistances(format!(
                        "off-diagonal entry ({}, {}) is 0",
                        i, j
                    )));
                }
            }
        }

        Ok(Self(matrix))
    }

    pub fn distance(&self, i: usize, j: usize) -> u32 {
        self.0[i][j]
    }

    pub fn size(&self) -> usize {
        self.0.size()
    }

    /// Length of the closed tour, including the edge back to the start.
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        crate::aco::utils::closed_edges(tour)
            .map(|(a, b)| self.distance(a, b) as f64)
            .sum()
    }
}
