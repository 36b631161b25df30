//! Hierarchical beta-binomial coin model and the full update pipeline.
//!
//! Model:
//! - hyperprior: `mu ~ Beta(hyper_a, hyper_b)`
//! - conditional: `theta | mu ~ Beta(c * mu, c * (1 - mu))` with confidence `c`
//! - data: `heads` successes and `tails` failures, `data | theta ~ theta^h (1-theta)^t`
//!
//! The likelihood depends on `theta` alone but is materialized as a full
//! `N x N` grid (broadcast across `mu`) so every grid entering
//! [`combine`](crate::posterior::combine) has the same shape.

use crate::axis::Axis;
use crate::grid::JointGrid;
use crate::marginal::{marginalize, MarginalAxis};
use crate::normalize::normalize;
use crate::posterior::combine;
use gb_core::{Error, Result};
use gb_prob::{beta, binomial};
use serde::Serialize;

/// Hierarchical beta-binomial model configuration.
///
/// Carries the observed counts explicitly instead of capturing them in a
/// closure, so the same model value can rebuild any stage of the pipeline.
#[derive(Debug, Clone)]
pub struct HierarchicalBinomialModel {
    /// First shape of the `Beta(hyper_a, hyper_b)` hyperprior on `mu`.
    hyper_a: f64,
    /// Second shape of the hyperprior on `mu`.
    hyper_b: f64,
    /// Confidence scale linking `theta` to `mu`: `theta | mu ~ Beta(c*mu, c*(1-mu))`.
    confidence: f64,
    /// Observed success count.
    heads: u64,
    /// Observed failure count.
    tails: u64,
}

/// All artifacts of one grid update, produced together and immutable.
#[derive(Debug, Clone, Serialize)]
pub struct PosteriorUpdate {
    /// Cell-centered axis for `theta`.
    pub theta_axis: Axis,
    /// Cell-centered axis for `mu`.
    pub mu_axis: Axis,
    /// Normalized joint prior over `(theta, mu)`.
    pub prior: JointGrid,
    /// Raw likelihood surface. NOT a probability distribution — it is
    /// handed downstream unnormalized.
    pub likelihood: JointGrid,
    /// Normalized joint posterior over `(theta, mu)`.
    pub posterior: JointGrid,
    /// Marginal likelihood of the observed data.
    pub evidence: f64,
    /// Prior marginal over `theta`.
    pub prior_theta: Vec<f64>,
    /// Prior marginal over `mu`.
    pub prior_mu: Vec<f64>,
    /// Posterior marginal over `theta`.
    pub posterior_theta: Vec<f64>,
    /// Posterior marginal over `mu`.
    pub posterior_mu: Vec<f64>,
}

impl HierarchicalBinomialModel {
    /// Create a model. Hyperprior shapes and confidence must be finite and
    /// positive; counts are unrestricted.
    pub fn new(
        hyper_a: f64,
        hyper_b: f64,
        confidence: f64,
        heads: u64,
        tails: u64,
    ) -> Result<Self> {
        for (name, v) in [("hyper_a", hyper_a), ("hyper_b", hyper_b), ("confidence", confidence)]
        {
            if !v.is_finite() || v <= 0.0 {
                return Err(Error::Validation(format!(
                    "{} must be finite and > 0, got {}",
                    name, v
                )));
            }
        }
        Ok(Self { hyper_a, hyper_b, confidence, heads, tails })
    }

    /// Model with the conventional defaults: `Beta(2,2)` hyperprior and
    /// confidence 100.
    pub fn with_defaults(heads: u64, tails: u64) -> Result<Self> {
        Self::new(2.0, 2.0, 100.0, heads, tails)
    }

    /// Observed success count.
    pub fn heads(&self) -> u64 {
        self.heads
    }

    /// Observed failure count.
    pub fn tails(&self) -> u64 {
        self.tails
    }

    /// Joint prior density at one grid cell:
    /// `Beta(theta; c*mu, c*(1-mu)) * Beta(mu; hyper_a, hyper_b)`.
    ///
    /// Cell centers keep `mu` strictly inside `(0,1)`, so both conditional
    /// shapes stay positive; near the boundary they become extreme and the
    /// density evaluation saturates at a finite value instead of overflowing.
    pub fn prior_density(&self, theta: f64, mu: f64) -> Result<f64> {
        let conditional = beta::pdf(theta, self.confidence * mu, self.confidence * (1.0 - mu))?;
        let hyper = beta::pdf(mu, self.hyper_a, self.hyper_b)?;
        Ok(conditional * hyper)
    }

    /// Observation likelihood at one grid cell. Depends on `theta` only.
    pub fn likelihood(&self, theta: f64) -> Result<f64> {
        binomial::likelihood(theta, self.heads, self.tails)
    }

    /// Run the full update on an `n x n` grid.
    ///
    /// Stages: axes, raw prior grid, normalized prior, raw likelihood grid,
    /// posterior combine (normalized prior x raw likelihood, single final
    /// normalization), then the four marginals. Each stage consumes its
    /// inputs by reference and produces fresh values; rerunning with the
    /// same inputs reproduces the same artifacts.
    pub fn update(&self, n: usize) -> Result<PosteriorUpdate> {
        let theta_axis = Axis::cell_centered(n)?;
        let mu_axis = Axis::cell_centered(n)?;

        let prior_raw =
            JointGrid::from_fn(&theta_axis, &mu_axis, |t, m| self.prior_density(t, m))?;
        let (prior, _prior_mass) = normalize(&prior_raw)?;

        let likelihood = JointGrid::from_fn(&theta_axis, &mu_axis, |t, _| self.likelihood(t))?;

        // The prior entering the combine is the normalized distribution over
        // cells, so the reported evidence is the marginal likelihood of the
        // data rather than an arbitrarily scaled mass.
        let post = combine(&prior, &likelihood)?;

        let prior_theta = marginalize(&prior, MarginalAxis::Theta)?;
        let prior_mu = marginalize(&prior, MarginalAxis::Mu)?;
        let posterior_theta = marginalize(&post.grid, MarginalAxis::Theta)?;
        let posterior_mu = marginalize(&post.grid, MarginalAxis::Mu)?;

        Ok(PosteriorUpdate {
            theta_axis,
            mu_axis,
            prior,
            likelihood,
            posterior: post.grid,
            evidence: post.evidence,
            prior_theta,
            prior_mu,
            posterior_theta,
            posterior_mu,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation() {
        assert!(HierarchicalBinomialModel::new(0.0, 2.0, 100.0, 1, 1).is_err());
        assert!(HierarchicalBinomialModel::new(2.0, -2.0, 100.0, 1, 1).is_err());
        assert!(HierarchicalBinomialModel::new(2.0, 2.0, f64::NAN, 1, 1).is_err());
        assert!(HierarchicalBinomialModel::with_defaults(0, 0).is_ok());
    }

    #[test]
    fn test_prior_density_is_finite_across_grid() {
        let model = HierarchicalBinomialModel::with_defaults(9, 3).unwrap();
        let axis = Axis::cell_centered(100).unwrap();
        for &t in axis.values() {
            for &m in axis.values() {
                let d = model.prior_density(t, m).unwrap();
                assert!(d.is_finite() && d >= 0.0, "t={} m={} d={}", t, m, d);
            }
        }
    }

    #[test]
    fn test_likelihood_ignores_mu_by_construction() {
        let model = HierarchicalBinomialModel::with_defaults(5, 2).unwrap();
        let update = model.update(16).unwrap();
        let (n_theta, n_mu) = update.likelihood.shape();
        for i in 0..n_theta {
            for j in 1..n_mu {
                assert_eq!(update.likelihood.get(i, j), update.likelihood.get(i, 0));
            }
        }
    }

    #[test]
    fn test_update_artifacts_are_normalized() {
        let model = HierarchicalBinomialModel::with_defaults(9, 3).unwrap();
        let u = model.update(50).unwrap();
        assert!((u.prior.mass() - 1.0).abs() < 1e-9);
        assert!((u.posterior.mass() - 1.0).abs() < 1e-9);
        for m in [&u.prior_theta, &u.prior_mu, &u.posterior_theta, &u.posterior_mu] {
            assert!((m.iter().sum::<f64>() - 1.0).abs() < 1e-9);
        }
        assert!(u.evidence.is_finite() && u.evidence > 0.0);
        // Likelihood surface stays raw: its mass is whatever it is, and for
        // 9/3 counts every entry is < 1.
        assert!(u.likelihood.values().iter().all(|&v| (0.0..1.0).contains(&v)));
    }
}
