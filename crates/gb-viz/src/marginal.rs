//! Marginal curve artifact — a one-dimensional distribution over one axis.

use gb_core::{Error, Result};
use gb_grid::{marginal, Axis};
use serde::{Deserialize, Serialize};

/// Plot-friendly artifact for a normalized marginal distribution.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarginalArtifact {
    /// Parameter label (e.g. "posterior_mu").
    pub label: String,
    /// Axis cell-center values.
    pub values: Vec<f64>,
    /// Marginal density per cell; sums to 1.
    pub density: Vec<f64>,
    /// Axis value with the largest density.
    pub mode: f64,
    /// Mean of the marginal.
    pub mean: f64,
}

impl MarginalArtifact {
    /// Build a marginal artifact from an axis and a normalized density.
    ///
    /// Fails if the lengths disagree.
    pub fn from_marginal(label: &str, axis: &Axis, density: &[f64]) -> Result<Self> {
        if axis.len() != density.len() {
            return Err(Error::Validation(format!(
                "axis has {} cells but marginal has {} entries",
                axis.len(),
                density.len()
            )));
        }
        Ok(Self {
            label: label.to_string(),
            values: axis.values().to_vec(),
            density: density.to_vec(),
            mode: marginal::mode(axis, density)?,
            mean: marginal::mean(axis, density)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_marginal() {
        let axis = Axis::cell_centered(4).unwrap();
        let density = [0.1, 0.2, 0.6, 0.1];
        let art = MarginalArtifact::from_marginal("posterior_mu", &axis, &density).unwrap();
        assert_eq!(art.mode, 0.625);
        assert_eq!(art.density.len(), 4);
        assert!(art.mean > 0.0 && art.mean < 1.0);
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let axis = Axis::cell_centered(3).unwrap();
        assert!(MarginalArtifact::from_marginal("x", &axis, &[0.5, 0.5]).is_err());
    }

    #[test]
    fn test_serialization_roundtrip() {
        let axis = Axis::cell_centered(2).unwrap();
        let art = MarginalArtifact::from_marginal("prior_theta", &axis, &[0.5, 0.5]).unwrap();
        let json = serde_json::to_string(&art).unwrap();
        let back: MarginalArtifact = serde_json::from_str(&json).unwrap();
        assert_eq!(back.density, art.density);
    }
}
