//! Full posterior report artifact: everything the plotting layer consumes.

use crate::marginal::MarginalArtifact;
use crate::surface::SurfaceArtifact;
use gb_core::Result;
use gb_grid::PosteriorUpdate;
use serde::{Deserialize, Serialize};

/// One JSON document carrying all outputs of a grid update: the three
/// surfaces, the evidence, and the four marginals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PosteriorReportArtifact {
    /// Normalized joint prior surface.
    pub prior: SurfaceArtifact,
    /// Raw likelihood surface (not a distribution; left unnormalized).
    pub likelihood: SurfaceArtifact,
    /// Normalized joint posterior surface.
    pub posterior: SurfaceArtifact,
    /// Marginal likelihood of the observed data.
    pub evidence: f64,
    /// Prior marginal over `theta`.
    pub prior_theta: MarginalArtifact,
    /// Prior marginal over `mu`.
    pub prior_mu: MarginalArtifact,
    /// Posterior marginal over `theta`.
    pub posterior_theta: MarginalArtifact,
    /// Posterior marginal over `mu`.
    pub posterior_mu: MarginalArtifact,
}

impl PosteriorReportArtifact {
    /// Build the report from a completed pipeline update.
    pub fn from_update(u: &PosteriorUpdate) -> Result<Self> {
        let t = &u.theta_axis;
        let m = &u.mu_axis;
        Ok(Self {
            prior: SurfaceArtifact::from_grid("theta", "mu", t, m, &u.prior, true)?,
            likelihood: SurfaceArtifact::from_grid("theta", "mu", t, m, &u.likelihood, false)?,
            posterior: SurfaceArtifact::from_grid("theta", "mu", t, m, &u.posterior, true)?,
            evidence: u.evidence,
            prior_theta: MarginalArtifact::from_marginal("prior_theta", t, &u.prior_theta)?,
            prior_mu: MarginalArtifact::from_marginal("prior_mu", m, &u.prior_mu)?,
            posterior_theta: MarginalArtifact::from_marginal(
                "posterior_theta",
                t,
                &u.posterior_theta,
            )?,
            posterior_mu: MarginalArtifact::from_marginal("posterior_mu", m, &u.posterior_mu)?,
        })
    }
}
