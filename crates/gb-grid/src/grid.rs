//! Joint grid over the `(theta, mu)` parameter plane.

use crate::axis::Axis;
use gb_core::{Error, Result};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// An `n_theta x n_mu` grid of non-negative reals indexed by
/// `(theta_index, mu_index)`, stored row-major with theta as the row index.
///
/// Represents a joint density (normalized or not) evaluated at the
/// corresponding axis cell centers. Grids are immutable once built; every
/// pipeline stage returns a fresh grid instead of mutating its input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JointGrid {
    n_theta: usize,
    n_mu: usize,
    values: Vec<f64>,
}

impl JointGrid {
    /// Outer evaluation: build the grid where cell `(i, j)` is
    /// `f(theta.values()[i], mu.values()[j])`.
    ///
    /// `f` is an arbitrary bivariate cell function; no factorization into a
    /// product of univariate densities is assumed. Rows are filled in
    /// parallel — each cell is independent and written exactly once, so the
    /// result is deterministic.
    pub fn from_fn<F>(theta: &Axis, mu: &Axis, f: F) -> Result<Self>
    where
        F: Fn(f64, f64) -> Result<f64> + Sync,
    {
        let rows: Vec<Vec<f64>> = theta
            .values()
            .par_iter()
            .map(|&t| mu.values().iter().map(|&m| f(t, m)).collect::<Result<Vec<f64>>>())
            .collect::<Result<Vec<Vec<f64>>>>()?;

        let values: Vec<f64> = rows.into_iter().flatten().collect();
        Ok(Self { n_theta: theta.len(), n_mu: mu.len(), values })
    }

    /// Build a grid directly from row-major values. Fails on a size mismatch.
    pub fn from_values(n_theta: usize, n_mu: usize, values: Vec<f64>) -> Result<Self> {
        if values.len() != n_theta * n_mu {
            return Err(Error::Validation(format!(
                "expected {} grid values for a {}x{} grid, got {}",
                n_theta * n_mu,
                n_theta,
                n_mu,
                values.len()
            )));
        }
        Ok(Self { n_theta, n_mu, values })
    }

    /// Grid dimensions as `(n_theta, n_mu)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.n_theta, self.n_mu)
    }

    /// Cell value at `(theta_index, mu_index)`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n_mu + j]
    }

    /// Row-major cell values.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Sum of all cell values (the grid's mass).
    pub fn mass(&self) -> f64 {
        self.values.iter().sum()
    }

    /// Elementwise (Hadamard) product with another grid of identical shape.
    pub fn hadamard(&self, other: &JointGrid) -> Result<JointGrid> {
        if self.shape() != other.shape() {
            return Err(Error::Validation(format!(
                "grid shape mismatch: {:?} vs {:?}",
                self.shape(),
                other.shape()
            )));
        }
        let values =
            self.values.iter().zip(other.values.iter()).map(|(&a, &b)| a * b).collect();
        Ok(JointGrid { n_theta: self.n_theta, n_mu: self.n_mu, values })
    }

    /// Nested row-major copy (`[theta_index][mu_index]`), the layout the
    /// plotting artifacts expect.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.values.chunks(self.n_mu).map(|row| row.to_vec()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outer_evaluation_indexing() {
        let theta = Axis::cell_centered(2).unwrap();
        let mu = Axis::cell_centered(4).unwrap();
        // Non-factoring cell function: pairs must be evaluated jointly.
        let grid = JointGrid::from_fn(&theta, &mu, |t, m| Ok(t + 10.0 * m)).unwrap();

        assert_eq!(grid.shape(), (2, 4));
        for (i, &t) in theta.values().iter().enumerate() {
            for (j, &m) in mu.values().iter().enumerate() {
                assert_eq!(grid.get(i, j), t + 10.0 * m, "cell ({}, {})", i, j);
            }
        }
    }

    #[test]
    fn test_from_fn_propagates_cell_error() {
        let axis = Axis::cell_centered(3).unwrap();
        let r = JointGrid::from_fn(&axis, &axis, |t, _| {
            if t > 0.5 {
                Err(gb_core::Error::Validation("bad cell".into()))
            } else {
                Ok(1.0)
            }
        });
        assert!(r.is_err());
    }

    #[test]
    fn test_from_values_size_check() {
        assert!(JointGrid::from_values(2, 3, vec![0.0; 6]).is_ok());
        assert!(JointGrid::from_values(2, 3, vec![0.0; 5]).is_err());
    }

    #[test]
    fn test_mass_and_rows() {
        let g = JointGrid::from_values(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        assert_eq!(g.mass(), 10.0);
        assert_eq!(g.to_rows(), vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    fn test_hadamard() {
        let a = JointGrid::from_values(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = JointGrid::from_values(2, 2, vec![2.0, 0.5, 1.0, 0.25]).unwrap();
        let c = a.hadamard(&b).unwrap();
        assert_eq!(c.values(), &[2.0, 1.0, 3.0, 1.0]);
    }

    #[test]
    fn test_hadamard_shape_mismatch() {
        let a = JointGrid::from_values(2, 2, vec![1.0; 4]).unwrap();
        let b = JointGrid::from_values(2, 3, vec![1.0; 6]).unwrap();
        assert!(a.hadamard(&b).is_err());
    }
}
