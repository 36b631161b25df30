//! Beta distribution utilities.

use crate::math::exp_clamped;
use gb_core::{Error, Result};
use statrs::function::gamma::ln_gamma;

#[inline]
fn ln_beta(a: f64, b: f64) -> f64 {
    ln_gamma(a) + ln_gamma(b) - ln_gamma(a + b)
}

fn check_shape(name: &str, v: f64) -> Result<()> {
    if !v.is_finite() || v <= 0.0 {
        return Err(Error::Validation(format!("{} must be finite and > 0, got {}", name, v)));
    }
    Ok(())
}

/// Log-PDF of a Beta(`a`, `b`) distribution at `x`.
///
/// Support: `0 <= x <= 1`.
pub fn logpdf(x: f64, a: f64, b: f64) -> Result<f64> {
    check_shape("a", a)?;
    check_shape("b", b)?;
    if !(0.0..=1.0).contains(&x) {
        return Ok(f64::NEG_INFINITY);
    }

    let ln_norm = -ln_beta(a, b);
    if x == 0.0 {
        if a < 1.0 {
            return Ok(f64::INFINITY);
        }
        if a > 1.0 {
            return Ok(f64::NEG_INFINITY);
        }
        // a == 1: x term is 0.
        return Ok(ln_norm);
    }
    if x == 1.0 {
        if b < 1.0 {
            return Ok(f64::INFINITY);
        }
        if b > 1.0 {
            return Ok(f64::NEG_INFINITY);
        }
        return Ok(ln_norm);
    }

    Ok(ln_norm + (a - 1.0) * x.ln() + (b - 1.0) * (1.0 - x).ln())
}

/// PDF of a Beta(`a`, `b`) distribution at `x`, clamped to a large finite
/// sentinel instead of overflowing to `inf`.
///
/// Grid cells sit strictly inside `(0, 1)` but shape parameters can be
/// extreme near the hyperparameter boundary; the clamp guarantees every
/// cell value is finite and non-negative so grid sums stay well-defined.
pub fn pdf(x: f64, a: f64, b: f64) -> Result<f64> {
    let lp = logpdf(x, a, b)?;
    if lp == f64::NEG_INFINITY {
        return Ok(0.0);
    }
    Ok(exp_clamped(lp))
}
