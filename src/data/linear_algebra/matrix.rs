//! # Dense matrices
//!
//! A single buffer holds all values in row major order. Rows and columns are addressed by index
//! only.
use std::ops::{Index, IndexMut};

use num_traits::Zero;

/// Row major dense matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseMatrix<F> {
    data: Vec<F>,
    nr_rows: usize,
    nr_columns: usize,
}

impl<F> DenseMatrix<F> {
    /// Create a matrix filled with zeros.
    pub fn zeros(nr_rows: usize, nr_columns: usize) -> Self
    where
        F: Zero + Clone,
    {
        Self {
            data: vec![F::zero(); nr_rows * nr_columns],
            nr_rows,
            nr_columns,
        }
    }

    /// Create a matrix from its rows.
    ///
    /// # Arguments
    ///
    /// * `rows`: Rows of equal length `nr_columns`.
    /// * `nr_columns`: Row length, needed when there are no rows.
    pub fn from_rows(rows: Vec<Vec<F>>, nr_columns: usize) -> Self {
        debug_assert!(rows.iter().all(|row| row.len() == nr_columns));

        let nr_rows = rows.len();
        Self {
            data: rows.into_iter().flatten().collect(),
            nr_rows,
            nr_columns,
        }
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// A single row as a slice.
    pub fn row(&self, i: usize) -> &[F] {
        debug_assert!(i < self.nr_rows);

        &self.data[i * self.nr_columns..(i + 1) * self.nr_columns]
    }

    /// A single row as a mutable slice.
    pub fn row_mut(&mut self, i: usize) -> &mut [F] {
        debug_assert!(i < self.nr_rows);

        &mut self.data[i * self.nr_columns..(i + 1) * self.nr_columns]
    }

    /// Iterate over all rows.
    pub fn rows(&self) -> impl Iterator<Item = &[F]> {
        (0..self.nr_rows).map(move |i| self.row(i))
    }

    /// Iterate mutably over all values, row by row.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut F> {
        self.data.iter_mut()
    }

    /// Remove rows.
    ///
    /// # Arguments
    ///
    /// * `indices`: Sorted, deduplicated row indices to remove.
    pub fn remove_rows(&mut self, indices: &[usize])
    where
        F: Clone,
    {
        debug_assert!(indices.is_sorted());
        debug_assert!(indices.iter().all(|&i| i < self.nr_rows));

        if indices.is_empty() {
            return;
        }

        let data = (0..self.nr_rows)
            .filter(|i| indices.binary_search(i).is_err())
            .flat_map(|i| self.row(i).iter().cloned())
            .collect();
        self.data = data;
        self.nr_rows -= indices.len();
    }

    /// Keep only the first `nr_columns` columns.
    pub fn truncate_columns(&mut self, nr_columns: usize)
    where
        F: Clone,
    {
        debug_assert!(nr_columns <= self.nr_columns);

        if nr_columns == self.nr_columns {
            return;
        }

        let data = self.rows()
            .flat_map(|row| row[..nr_columns].iter().cloned())
            .collect();
        self.data = data;
        self.nr_columns = nr_columns;
    }
}

impl<F> Index<(usize, usize)> for DenseMatrix<F> {
    type Output = F;

    fn index(&self, (i, j): (usize, usize)) -> &Self::Output {
        debug_assert!(j < self.nr_columns);

        &self.row(i)[j]
    }
}

impl<F> IndexMut<(usize, usize)> for DenseMatrix<F> {
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut Self::Output {
        debug_assert!(j < self.nr_columns);

        &mut self.row_mut(i)[j]
    }
}
