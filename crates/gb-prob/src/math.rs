//! Small numerically-stable math utilities used across probability code.

/// Exponential with a conservative clamp to avoid overflow.
///
/// For `x > 700`, `exp(x)` can overflow to `inf` on some platforms. Density
/// evaluations near grid boundaries can produce very large log-densities;
/// clamping keeps every grid cell finite so downstream sums stay well-defined.
#[inline]
pub fn exp_clamped(x: f64) -> f64 {
    x.clamp(-700.0, 700.0).exp()
}

/// Largest value `exp_clamped` can return: the finite sentinel that stands in
/// for an unbounded density spike.
pub const EXP_CLAMP_MAX: f64 = 1.0142320547350045e304; // exp(700)
