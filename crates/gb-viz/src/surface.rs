//! Joint-grid surface artifact — density over the `(theta, mu)` plane.

use gb_core::{Error, Result};
use gb_grid::{Axis, JointGrid};
use serde::{Deserialize, Serialize};

/// Plot-friendly artifact for an `N x N` joint density or likelihood surface.
///
/// `z` is row-major `[theta_idx][mu_idx]`, matching the engine's grid layout,
/// ready for a 3D surface or contour renderer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceArtifact {
    /// Label for the row axis (e.g. "theta").
    pub x_label: String,
    /// Label for the column axis (e.g. "mu").
    pub y_label: String,
    /// Cell-center values for the row axis.
    pub x_values: Vec<f64>,
    /// Cell-center values for the column axis.
    pub y_values: Vec<f64>,
    /// Surface heights, row-major `[x_idx][y_idx]`.
    pub z: Vec<Vec<f64>>,
    /// Whether `z` sums to 1 (a distribution) or is a raw surface.
    pub normalized: bool,
}

impl SurfaceArtifact {
    /// Build a surface artifact from a joint grid and its axes.
    ///
    /// Fails if the grid shape does not match the axis lengths.
    pub fn from_grid(
        x_label: &str,
        y_label: &str,
        x_axis: &Axis,
        y_axis: &Axis,
        grid: &JointGrid,
        normalized: bool,
    ) -> Result<Self> {
        let (n_x, n_y) = grid.shape();
        if n_x != x_axis.len() || n_y != y_axis.len() {
            return Err(Error::Validation(format!(
                "grid shape {:?} does not match axis lengths ({}, {})",
                grid.shape(),
                x_axis.len(),
                y_axis.len()
            )));
        }
        Ok(Self {
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
            x_values: x_axis.values().to_vec(),
            y_values: y_axis.values().to_vec(),
            z: grid.to_rows(),
            normalized,
        })
    }
}
