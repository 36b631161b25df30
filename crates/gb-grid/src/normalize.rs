//! Rescaling of grids and marginal vectors to unit mass.

use crate::grid::JointGrid;
use gb_core::{Error, Result};

fn check_mass(mass: f64) -> Result<f64> {
    if !mass.is_finite() {
        return Err(Error::DegenerateNormalization(format!(
            "total mass is not finite ({})",
            mass
        )));
    }
    if mass <= 0.0 {
        return Err(Error::DegenerateNormalization(format!(
            "total mass is {}; all density evaluations may have underflowed \
             (grid resolution too coarse for the density)",
            mass
        )));
    }
    Ok(mass)
}

/// Rescale a joint grid so its entries sum to 1.
///
/// Returns the normalized grid together with the input's mass (the sum of
/// its entries before division). Fails with a dedicated error if the mass
/// is zero or non-finite rather than silently producing NaN.
pub fn normalize(grid: &JointGrid) -> Result<(JointGrid, f64)> {
    let mass = check_mass(grid.mass())?;
    let (n_theta, n_mu) = grid.shape();
    let values = grid.values().iter().map(|&v| v / mass).collect();
    Ok((JointGrid::from_values(n_theta, n_mu, values)?, mass))
}

/// Rescale a marginal vector so its entries sum to 1. Same mass contract
/// as [`normalize`].
pub fn normalize_vec(v: &[f64]) -> Result<(Vec<f64>, f64)> {
    let mass = check_mass(v.iter().sum())?;
    Ok((v.iter().map(|&x| x / mass).collect(), mass))
}
