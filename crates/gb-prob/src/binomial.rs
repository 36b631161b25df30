//! Binomial observation likelihood.
//!
//! The coin-flip likelihood used by the grid engine is unnormalized:
//! `L(theta) = theta^heads * (1-theta)^tails`. The binomial coefficient is
//! a constant in `theta` and cancels in posterior normalization, so it is
//! deliberately left out.

use gb_core::{Error, Result};

/// Log of the unnormalized likelihood `theta^heads * (1-theta)^tails`.
///
/// Returns `-inf` when the likelihood is exactly zero (e.g. `theta = 0`
/// with `heads > 0`).
pub fn log_likelihood(theta: f64, heads: u64, tails: u64) -> Result<f64> {
    if !theta.is_finite() || !(0.0..=1.0).contains(&theta) {
        return Err(Error::Validation(format!(
            "theta must be finite and in [0,1], got {}",
            theta
        )));
    }
    let h = heads as f64;
    let t = tails as f64;
    let head_term = if heads == 0 { 0.0 } else { h * theta.ln() };
    let tail_term = if tails == 0 { 0.0 } else { t * (1.0 - theta).ln() };
    Ok(head_term + tail_term)
}

/// Unnormalized likelihood `theta^heads * (1-theta)^tails`.
///
/// Always in `[0, 1]`, so no overflow clamp is needed.
pub fn likelihood(theta: f64, heads: u64, tails: u64) -> Result<f64> {
    let ll = log_likelihood(theta, heads, tails)?;
    if ll == f64::NEG_INFINITY {
        return Ok(0.0);
    }
    Ok(ll.exp())
}
