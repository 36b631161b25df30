//! Marginalization of a joint grid down to one axis.

use crate::axis::Axis;
use crate::grid::JointGrid;
use crate::normalize::normalize_vec;
use gb_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// Which parameter the marginal is over (the other one is summed out).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarginalAxis {
    /// Distribution over `theta` (rows): sum each row over all `mu`.
    Theta,
    /// Distribution over `mu` (columns): sum each column over all `theta`.
    Mu,
}

/// Raw axis sums, before renormalization.
///
/// For [`MarginalAxis::Theta`], `result[i] = sum_j grid[i][j]`; for
/// [`MarginalAxis::Mu`], `result[j] = sum_i grid[i][j]`. The total of the
/// returned vector equals the grid's mass.
pub fn axis_sums(grid: &JointGrid, axis: MarginalAxis) -> Vec<f64> {
    let (n_theta, n_mu) = grid.shape();
    match axis {
        MarginalAxis::Theta => {
            (0..n_theta).map(|i| (0..n_mu).map(|j| grid.get(i, j)).sum()).collect()
        }
        MarginalAxis::Mu => {
            (0..n_mu).map(|j| (0..n_theta).map(|i| grid.get(i, j)).sum()).collect()
        }
    }
}

/// Marginal distribution over the chosen axis: axis sums, renormalized to
/// unit mass.
///
/// The renormalization is required even for a normalized input grid — its
/// individual row/column sums are not a distribution on their own. Applies
/// identically to prior and posterior grids.
pub fn marginalize(grid: &JointGrid, axis: MarginalAxis) -> Result<Vec<f64>> {
    let (marginal, _mass) = normalize_vec(&axis_sums(grid, axis))?;
    Ok(marginal)
}

/// Axis value with the largest marginal density (the marginal's mode).
pub fn mode(axis: &Axis, density: &[f64]) -> Result<f64> {
    if axis.len() != density.len() {
        return Err(Error::Validation(format!(
            "axis has {} cells but marginal has {} entries",
            axis.len(),
            density.len()
        )));
    }
    let mut best = 0usize;
    for (i, &d) in density.iter().enumerate() {
        if d > density[best] {
            best = i;
        }
    }
    Ok(axis.values()[best])
}

/// Mean of a normalized marginal: `sum_i axis[i] * density[i]`.
pub fn mean(axis: &Axis, density: &[f64]) -> Result<f64> {
    if axis.len() != density.len() {
        return Err(Error::Validation(format!(
            "axis has {} cells but marginal has {} entries",
            axis.len(),
            density.len()
        )));
    }
    Ok(axis.values().iter().zip(density.iter()).map(|(&x, &d)| x * d).sum())
}
