//! Posterior combination: Bayes' rule on a discretized grid.

use crate::grid::JointGrid;
use crate::normalize::normalize;
use gb_core::{Error, Result};

/// A normalized posterior grid together with the evidence scalar.
#[derive(Debug, Clone)]
pub struct Posterior {
    /// Normalized joint posterior over `(theta, mu)`.
    pub grid: JointGrid,
    /// Mass of the unnormalized posterior: the marginal likelihood of the
    /// observed data when the prior input was normalized.
    pub evidence: f64,
}

/// Combine a prior grid and a likelihood grid into a posterior.
///
/// On a grid of point masses at cell centers, Bayes' rule collapses to the
/// elementwise product followed by a single global renormalization; the
/// normalizing mass is returned as the evidence. The inputs are multiplied
/// as given — neither is renormalized first, so uniformly rescaling either
/// input leaves the posterior unchanged and scales only the evidence.
pub fn combine(prior: &JointGrid, likelihood: &JointGrid) -> Result<Posterior> {
    if prior.shape() != likelihood.shape() {
        return Err(Error::Validation(format!(
            "prior and likelihood grids must have the same shape, got {:?} and {:?}",
            prior.shape(),
            likelihood.shape()
        )));
    }
    let unnormalized = prior.hadamard(likelihood)?;
    let (grid, evidence) = normalize(&unnormalized)?;
    Ok(Posterior { grid, evidence })
}
