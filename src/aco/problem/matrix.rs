use std::ops::{Index, IndexMut};

/// Square matrix stored row-major in a single buffer, indexed as `m[i][j]`.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Matrix<T> {
    dimension: usize,
    data: Vec<T>,
}

impl<T: Copy + Default> Matrix<T> {
    pub fn new(dimension: usize) -> Self {
        Self::filled_with(dimension, T::default())
    }

    pub fn filled_with(dimension: usize, value: T) -> Self {
        Self {
            dimension,
            data: vec![value; dimension * dimension],
        }
    }

    pub fn update<F: FnOnce(T) -> T>(&mut self, i: usize, j: usize, op: F) {
        self[i][j] = op(self[i][j])
    }

    /// Applies `op` to every entry in place.
    pub fn update_all<F: FnMut(T) -> T>(&mut self, mut op: F) {
        for v in self.data.iter_mut() {
            *v = op(*v);
        }
    }

    pub fn size(&self) -> usize {
        self.dimension
    }
}

impl<T> Index<usize> for Matrix<T> {
    type Output = [T];
    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index * self.dimension..(index + 1) * self.dimension]
    }
}

impl<T> IndexMut<usize> for Matrix<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index * self.dimension..(index + 1) * self.dimension]
    }
}
